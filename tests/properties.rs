//! Property tests for CSR and dense addition

use matsum::{
    add_csr_parallel, add_csr_with, add_dense, csr_to_ndarray, dense_from_ndarray,
    dense_to_ndarray, iadd_dense, sub_csr_with, SparseMatrixCSR, TidyConfig,
};
use ndarray::Array2;
use proptest::prelude::*;

/// Integer-valued entries keep every sum exact
fn csr_pair() -> impl Strategy<Value = (SparseMatrixCSR<f64>, SparseMatrixCSR<f64>)> {
    (1usize..9, 1usize..9).prop_flat_map(|(n_rows, n_cols)| {
        let entry = (0..n_rows, 0..n_cols, -4i32..5).prop_map(|(i, j, v)| (i, j, f64::from(v)));
        (
            prop::collection::vec(entry.clone(), 0..20),
            prop::collection::vec(entry, 0..20),
        )
            .prop_map(move |(ta, tb)| {
                (
                    SparseMatrixCSR::from_triplets(n_rows, n_cols, &ta),
                    SparseMatrixCSR::from_triplets(n_rows, n_cols, &tb),
                )
            })
    })
}

fn dense_pair() -> impl Strategy<Value = (Array2<f64>, Array2<f64>)> {
    (1usize..7, 1usize..7).prop_flat_map(|(n_rows, n_cols)| {
        let n = n_rows * n_cols;
        (
            prop::collection::vec(-100i32..100, n),
            prop::collection::vec(-100i32..100, n),
        )
            .prop_map(move |(a, b)| {
                let to_array = |v: Vec<i32>| {
                    Array2::from_shape_vec((n_rows, n_cols), v.into_iter().map(f64::from).collect())
                        .unwrap()
                };
                (to_array(a), to_array(b))
            })
    })
}

fn is_valid_csr(m: &SparseMatrixCSR<f64>) -> bool {
    m.row_ptr.len() == m.n_rows + 1
        && m.row_ptr[0] == 0
        && m.nnz() <= m.capacity()
        && (0..m.n_rows).all(|i| {
            let (start, end) = (m.row_ptr[i], m.row_ptr[i + 1]);
            start <= end
                && m.col_idx[start..end].windows(2).all(|w| w[0] < w[1])
                && m.col_idx[start..end].iter().all(|&c| c < m.n_cols)
        })
}

proptest! {
    #[test]
    fn csr_sum_matches_dense_sum((a, b) in csr_pair()) {
        let c = add_csr_with(&a, &b, 1.0, &TidyConfig::DISABLED).unwrap();

        prop_assert!(is_valid_csr(&c));
        if a.nnz() > 0 && b.nnz() > 0 {
            prop_assert_eq!(c.capacity(), a.nnz() + b.nnz());
        }
        prop_assert_eq!(csr_to_ndarray(&c), csr_to_ndarray(&a) + csr_to_ndarray(&b));
    }

    #[test]
    fn csr_scaled_sum_matches_dense((a, b) in csr_pair(), scale in -3i32..4) {
        let scale = f64::from(scale);
        let c = add_csr_with(&a, &b, scale, &TidyConfig::DISABLED).unwrap();

        prop_assert!(is_valid_csr(&c));
        prop_assert_eq!(csr_to_ndarray(&c), csr_to_ndarray(&a) + csr_to_ndarray(&b) * scale);
    }

    #[test]
    fn csr_sub_is_negative_scale((a, b) in csr_pair()) {
        let tidy = TidyConfig::default();
        let diff = sub_csr_with(&a, &b, &tidy).unwrap();
        let scaled = add_csr_with(&a, &b, -1.0, &tidy).unwrap();

        prop_assert_eq!(&diff.row_ptr, &scaled.row_ptr);
        prop_assert_eq!(csr_to_ndarray(&diff), csr_to_ndarray(&scaled));
    }

    #[test]
    fn csr_tidyup_leaves_no_zeros((a, b) in csr_pair(), scale in -2i32..3) {
        let scale = f64::from(scale);
        let c = add_csr_with(&a, &b, scale, &TidyConfig::with_atol(0.0)).unwrap();

        prop_assert!(is_valid_csr(&c));
        // The copy fast paths keep an operand's stored zeros
        if a.nnz() > 0 && b.nnz() > 0 && scale != 0.0 {
            prop_assert!(c.values[..c.nnz()].iter().all(|&v| v != 0.0));
        }
        prop_assert_eq!(csr_to_ndarray(&c), csr_to_ndarray(&a) + csr_to_ndarray(&b) * scale);
    }

    #[test]
    fn csr_parallel_matches_serial((a, b) in csr_pair(), scale in -2i32..3) {
        let scale = f64::from(scale);
        let tidy = TidyConfig::default();
        let serial = add_csr_with(&a, &b, scale, &tidy).unwrap();
        let parallel = add_csr_parallel(&a, &b, scale, &tidy).unwrap();

        prop_assert_eq!(&parallel.row_ptr, &serial.row_ptr);
        prop_assert_eq!(csr_to_ndarray(&parallel), csr_to_ndarray(&serial));
    }

    #[test]
    fn dense_sum_independent_of_layout((a, b) in dense_pair(), fl in any::<bool>(), fr in any::<bool>()) {
        let left = dense_from_ndarray(a.view(), fl);
        let right = dense_from_ndarray(b.view(), fr);

        let sum = add_dense(&left, &right, 1.0).unwrap();
        prop_assert_eq!(dense_to_ndarray(&sum), &a + &b);

        let swapped = add_dense(&right, &left, 1.0).unwrap();
        prop_assert_eq!(dense_to_ndarray(&swapped), dense_to_ndarray(&sum));
    }

    #[test]
    fn dense_iadd_matches_add((a, b) in dense_pair(), fl in any::<bool>(), fr in any::<bool>(), scale in -3i32..4) {
        let scale = f64::from(scale);
        let mut left = dense_from_ndarray(a.view(), fl);
        let right = dense_from_ndarray(b.view(), fr);
        let expected = add_dense(&left, &right, scale).unwrap();

        iadd_dense(&mut left, &right, scale).unwrap();

        prop_assert_eq!(left, expected);
    }
}
