//! Host-native stand-in for the compiled object.
//!
//! Lets the harness run end to end without the external toolchain. The
//! implementations are written independently of [`crate::reference`] (table
//! lookups and loops instead of recursion) so that a run against this
//! backend still compares two distinct code paths.

use crate::constants::{
    FIB_TABLE, LCG_INCREMENT, LCG_MULTIPLIER, MAX_FIB_I32, THRESHOLD_HIGH, THRESHOLD_LIMIT,
    THRESHOLD_LOW,
};
use crate::contract::CompiledFunctions;
use crate::reference::{factorial_iterative, fibonacci_iterative};

/// Native implementation of [`CompiledFunctions`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFunctions;

impl NativeFunctions {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CompiledFunctions for NativeFunctions {
    fn greater(&self, a: i32, b: i32) -> i32 {
        i32::from(a.cmp(&b).is_gt())
    }

    fn lesser(&self, a: i32, b: i32) -> i32 {
        i32::from(a.cmp(&b).is_lt())
    }

    fn equal(&self, a: i32, b: i32) -> i32 {
        i32::from(a.cmp(&b).is_eq())
    }

    fn threshold_branch(&self, a: i32, b: i32) -> i32 {
        if a.wrapping_add(b) > THRESHOLD_LIMIT {
            THRESHOLD_HIGH
        } else {
            THRESHOLD_LOW
        }
    }

    fn fibonacci(&self, n: i32) -> i32 {
        match usize::try_from(n) {
            Ok(index) if n <= MAX_FIB_I32 => FIB_TABLE[index],
            _ => fibonacci_iterative(n),
        }
    }

    fn factorial(&self, n: i32) -> i32 {
        factorial_iterative(n)
    }

    fn even(&self, n: i32) -> i32 {
        i32::from(n % 2 == 0)
    }

    fn odd(&self, n: i32) -> i32 {
        i32::from(n % 2 != 0)
    }

    fn random(&self, n: i32) -> i32 {
        // One step of the classic ANSI C LCG, seeded with n.
        n.wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & i32::MAX
    }

    fn sum(&self, a: i32, b: i32, c: i32) -> i32 {
        a.wrapping_add(b).wrapping_add(c)
    }

    fn self_test(&self) -> i32 {
        0
    }

    fn name(&self) -> &str {
        "native"
    }
}
