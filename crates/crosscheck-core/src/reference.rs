//! Reference implementations used as the correctness oracle.
//!
//! These mirror the semantics the external code generator is expected to
//! reproduce. Arithmetic wraps on overflow (two's complement), matching the
//! 32-bit target the compiled functions run on; overflow is never reported.
//!
//! Negative arguments to [`factorial`] and [`fibonacci`] have no meaningful
//! answer. They are pinned to `factorial(n) = 1` for `n <= 0` and
//! `fibonacci(n) = n` for `n < 2` so that the recursion always terminates.

use crate::constants::{THRESHOLD_HIGH, THRESHOLD_LIMIT, THRESHOLD_LOW};

/// `n!`, recursively. Wraps for `n > 12`.
#[must_use]
pub fn factorial(n: i32) -> i32 {
    if n <= 0 {
        return 1;
    }
    n.wrapping_mul(factorial(n - 1))
}

/// `F(n)` by the naive double recursion. Exponential in `n`; wraps for `n > 46`.
#[must_use]
pub fn fibonacci(n: i32) -> i32 {
    if n < 2 {
        n
    } else {
        fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
    }
}

/// `n!` with a loop. Same results as [`factorial`].
#[must_use]
pub fn factorial_iterative(n: i32) -> i32 {
    (1..=n).fold(1i32, i32::wrapping_mul)
}

/// `F(n)` with a loop. Same results as [`fibonacci`].
#[must_use]
pub fn fibonacci_iterative(n: i32) -> i32 {
    if n < 2 {
        return n;
    }
    let (mut a, mut b) = (0i32, 1i32);
    for _ in 1..n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    b
}

/// `1` if `a > b`, else `0`.
#[must_use]
pub fn greater(a: i32, b: i32) -> i32 {
    i32::from(a > b)
}

/// `1` if `a < b`, else `0`.
#[must_use]
pub fn lesser(a: i32, b: i32) -> i32 {
    i32::from(a < b)
}

/// `1` if `a == b`, else `0`.
#[must_use]
pub fn equal(a: i32, b: i32) -> i32 {
    i32::from(a == b)
}

/// `142` when `a + b > 100`, else `42`.
#[must_use]
pub fn threshold_branch(a: i32, b: i32) -> i32 {
    let total = a.wrapping_add(b);
    if total > THRESHOLD_LIMIT {
        THRESHOLD_HIGH
    } else {
        THRESHOLD_LOW
    }
}
