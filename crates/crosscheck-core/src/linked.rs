//! Backend that calls the externally compiled object.
//!
//! Only available with the `linked` feature. The symbols are resolved by the
//! linker; if the object is missing or a signature is wrong, the build fails.

use crate::contract::CompiledFunctions;

/// [`CompiledFunctions`] backed by the C symbols from `crosscheck-sys`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkedFunctions;

impl LinkedFunctions {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CompiledFunctions for LinkedFunctions {
    fn greater(&self, a: i32, b: i32) -> i32 {
        crosscheck_sys::greater(a, b)
    }

    fn lesser(&self, a: i32, b: i32) -> i32 {
        crosscheck_sys::lesser(a, b)
    }

    fn equal(&self, a: i32, b: i32) -> i32 {
        crosscheck_sys::equal(a, b)
    }

    fn threshold_branch(&self, a: i32, b: i32) -> i32 {
        crosscheck_sys::threshold_branch(a, b)
    }

    fn fibonacci(&self, n: i32) -> i32 {
        crosscheck_sys::fibonacci(n)
    }

    fn factorial(&self, n: i32) -> i32 {
        crosscheck_sys::factorial(n)
    }

    fn even(&self, n: i32) -> i32 {
        crosscheck_sys::even(n)
    }

    fn odd(&self, n: i32) -> i32 {
        crosscheck_sys::odd(n)
    }

    fn random(&self, n: i32) -> i32 {
        crosscheck_sys::random(n)
    }

    fn sum(&self, a: i32, b: i32, c: i32) -> i32 {
        crosscheck_sys::sum(a, b, c)
    }

    fn self_test(&self) -> i32 {
        crosscheck_sys::self_test()
    }

    fn name(&self) -> &str {
        "linked"
    }
}
