//! The process-wide tidy-up settings drive `add_csr` and `sub_csr`
//!
//! Kept in its own test binary with a single test, since it mutates
//! global state.

use matsum::{add_csr, set_tidy_settings, sub_csr, tidy_settings, SparseMatrixCSR, TidyConfig};

#[test]
fn test_global_settings_control_cancellation() {
    let a = SparseMatrixCSR::new(1, 3, vec![0, 2], vec![0, 2], vec![1.0, 1.0e-8]);
    let b = SparseMatrixCSR::new(1, 3, vec![0, 2], vec![0, 1], vec![-1.0, 4.0]);

    assert_eq!(tidy_settings(), TidyConfig::default());
    let c = add_csr(&a, &b, 1.0).unwrap();
    assert_eq!(c.row_iter(0).collect::<Vec<_>>(), vec![(1, &4.0), (2, &1.0e-8)]);

    set_tidy_settings(TidyConfig::with_atol(1.0e-6));
    let c = add_csr(&a, &b, 1.0).unwrap();
    assert_eq!(c.row_iter(0).collect::<Vec<_>>(), vec![(1, &4.0)]);

    set_tidy_settings(TidyConfig::DISABLED);
    let c = sub_csr(&a, &b).unwrap();
    assert_eq!(
        c.row_iter(0).collect::<Vec<_>>(),
        vec![(0, &2.0), (1, &-4.0), (2, &1.0e-8)]
    );

    set_tidy_settings(TidyConfig::default());
}
