//! Constants for the default demonstration run.

/// Inputs squared by the default run.
pub const DEFAULT_INPUTS: [i64; 9] = [2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Default artificial delay per task, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Default number of worker threads in the pool.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Largest absolute value whose square still fits in an `i64`.
/// 3_037_000_499² = 9_223_372_030_926_249_001
pub const MAX_SQUARABLE: i64 = 3_037_000_499;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Sequential and pooled results did not match.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_squarable_is_the_boundary() {
        assert!(MAX_SQUARABLE.checked_mul(MAX_SQUARABLE).is_some());
        assert!((MAX_SQUARABLE + 1).checked_mul(MAX_SQUARABLE + 1).is_none());
    }

    #[test]
    fn default_inputs_are_two_through_ten() {
        assert_eq!(DEFAULT_INPUTS.to_vec(), (2..=10).collect::<Vec<i64>>());
    }
}
