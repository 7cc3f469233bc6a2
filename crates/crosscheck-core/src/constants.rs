//! Constants shared by the reference library, the backends, and the suite.

/// Sum above which the threshold branch takes the high arm.
pub const THRESHOLD_LIMIT: i32 = 100;

/// Result of the threshold branch when the sum exceeds [`THRESHOLD_LIMIT`].
pub const THRESHOLD_HIGH: i32 = 142;

/// Result of the threshold branch otherwise.
pub const THRESHOLD_LOW: i32 = 42;

/// Maximum Fibonacci index whose value fits in an `i32`.
/// F(46) = 1836311903
pub const MAX_FIB_I32: i32 = 46;

/// Maximum factorial argument whose value fits in an `i32`.
/// 12! = 479001600
pub const MAX_FACTORIAL_I32: i32 = 12;

/// Precomputed Fibonacci values for n = 0..=46 (native fast path).
///
/// F(47) = 2,971,215,073 overflows `i32::MAX` (2,147,483,647).
pub const FIB_TABLE: [i32; 47] = {
    let mut table = [0i32; 47];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 47 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Multiplier of the linear congruential step used by the native `random`.
pub const LCG_MULTIPLIER: i32 = 1_103_515_245;

/// Increment of the linear congruential step used by the native `random`.
pub const LCG_INCREMENT: i32 = 12_345;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution. Every completed run exits with this code,
    /// whatever the comparison results look like.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O on the output sink).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[25], 75_025);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[46], 1_836_311_903);
    }

    #[test]
    fn fib_table_consistency() {
        for i in 2..FIB_TABLE.len() {
            assert_eq!(FIB_TABLE[i], FIB_TABLE[i - 1] + FIB_TABLE[i - 2]);
        }
    }
}
