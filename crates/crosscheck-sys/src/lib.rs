//! C ABI declarations for the functions emitted by the external code
//! generator.
//!
//! Every symbol takes and returns `int` (`i32`). The raw declarations live in
//! [`raw`]; the free functions at the crate root wrap them in safe calls so
//! that callers never need `unsafe`. The wrappers rely on the compiled object
//! honoring the C calling convention and touching nothing but its arguments,
//! which is the whole contract of the boundary.

use std::os::raw::c_int;

/// Raw `extern "C"` declarations, one per exported symbol.
pub mod raw {
    use std::os::raw::c_int;

    extern "C" {
        pub fn test_function_greater(var1: c_int, var2: c_int) -> c_int;
        pub fn test_function_lesser(var1: c_int, var2: c_int) -> c_int;
        pub fn test_function_equal(var1: c_int, var2: c_int) -> c_int;
        pub fn test_function_if(var1: c_int, var2: c_int) -> c_int;
        pub fn fibonacci(n: c_int) -> c_int;
        pub fn factorial(n: c_int) -> c_int;
        pub fn even(n: c_int) -> c_int;
        pub fn odd(n: c_int) -> c_int;
        pub fn random_function(n: c_int) -> c_int;
        pub fn sum(var1: c_int, var2: c_int, var3: c_int) -> c_int;
        pub fn test_test() -> c_int;
    }
}

/// `test_function_greater(a, b)`.
#[must_use]
pub fn greater(a: c_int, b: c_int) -> c_int {
    // SAFETY: pure integer function under the C ABI.
    unsafe { raw::test_function_greater(a, b) }
}

/// `test_function_lesser(a, b)`.
#[must_use]
pub fn lesser(a: c_int, b: c_int) -> c_int {
    // SAFETY: pure integer function under the C ABI.
    unsafe { raw::test_function_lesser(a, b) }
}

/// `test_function_equal(a, b)`.
#[must_use]
pub fn equal(a: c_int, b: c_int) -> c_int {
    // SAFETY: pure integer function under the C ABI.
    unsafe { raw::test_function_equal(a, b) }
}

/// `test_function_if(a, b)`.
#[must_use]
pub fn threshold_branch(a: c_int, b: c_int) -> c_int {
    // SAFETY: pure integer function under the C ABI.
    unsafe { raw::test_function_if(a, b) }
}

/// `fibonacci(n)`.
#[must_use]
pub fn fibonacci(n: c_int) -> c_int {
    // SAFETY: pure integer function under the C ABI.
    unsafe { raw::fibonacci(n) }
}

/// `factorial(n)`.
#[must_use]
pub fn factorial(n: c_int) -> c_int {
    // SAFETY: pure integer function under the C ABI.
    unsafe { raw::factorial(n) }
}

/// `even(n)`.
#[must_use]
pub fn even(n: c_int) -> c_int {
    // SAFETY: pure integer function under the C ABI.
    unsafe { raw::even(n) }
}

/// `odd(n)`.
#[must_use]
pub fn odd(n: c_int) -> c_int {
    // SAFETY: pure integer function under the C ABI.
    unsafe { raw::odd(n) }
}

/// `random_function(n)`.
#[must_use]
pub fn random(n: c_int) -> c_int {
    // SAFETY: pure integer function under the C ABI.
    unsafe { raw::random_function(n) }
}

/// `sum(a, b, c)`.
#[must_use]
pub fn sum(a: c_int, b: c_int, c: c_int) -> c_int {
    // SAFETY: pure integer function under the C ABI.
    unsafe { raw::sum(a, b, c) }
}

/// `test_test()`.
#[must_use]
pub fn self_test() -> c_int {
    // SAFETY: takes no arguments, returns an integer status.
    unsafe { raw::test_test() }
}
