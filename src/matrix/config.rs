//! Numeric tidy-up settings

use std::sync::RwLock;

/// Default absolute tolerance below which sums are treated as zero
pub const DEFAULT_ATOL: f64 = 1.0e-12;

/// Controls whether near-zero results are removed from sparse output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TidyConfig {
    /// Drop accumulated values whose magnitude is at most `atol`
    pub auto_tidyup: bool,

    /// Absolute tolerance used when `auto_tidyup` is set
    pub atol: f64,
}

impl TidyConfig {
    /// Settings that never drop an entry
    pub const DISABLED: TidyConfig = TidyConfig {
        auto_tidyup: false,
        atol: DEFAULT_ATOL,
    };

    /// Enabled settings with the given tolerance
    pub fn with_atol(atol: f64) -> Self {
        Self {
            auto_tidyup: true,
            atol,
        }
    }

    /// The tolerance to filter with, or `None` when nothing is dropped
    pub fn tolerance(&self) -> Option<f64> {
        self.auto_tidyup.then_some(self.atol)
    }
}

impl Default for TidyConfig {
    fn default() -> Self {
        Self::with_atol(DEFAULT_ATOL)
    }
}

static SETTINGS: RwLock<TidyConfig> = RwLock::new(TidyConfig {
    auto_tidyup: true,
    atol: DEFAULT_ATOL,
});

/// Snapshot of the process-wide tidy-up settings
pub fn tidy_settings() -> TidyConfig {
    match SETTINGS.read() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Replaces the process-wide tidy-up settings
pub fn set_tidy_settings(config: TidyConfig) {
    match SETTINGS.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}
