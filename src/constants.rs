//! Benchmark Constants
//!
//! Fixed parameters of the experiment. Changing them means recompiling.

/// Cache line size for alignment (64 bytes on most CPUs)
pub const CACHE_LINE_SIZE: usize = 64;

/// Increments/reads performed by one workload call
pub const ITERATIONS: u64 = 100_000_000;

/// Times each scenario is repeated inside one timing window
pub const TRIALS: u32 = 10;

/// Initial value of the written field
pub const INITIAL_X: i32 = 0;

/// Initial value of the read field
pub const INITIAL_Y: i32 = 1;

static_assertions::const_assert!(CACHE_LINE_SIZE.is_power_of_two());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_line_size_is_power_of_two() {
        assert!(CACHE_LINE_SIZE.is_power_of_two());
    }

    #[test]
    fn test_default_run_fits_in_i32() {
        // the bad layout's x is written by the concurrent and the sequential scenario
        let total = 2 * (TRIALS as i64) * (ITERATIONS as i64) + INITIAL_X as i64;
        assert!(total <= i32::MAX as i64);
    }
}
