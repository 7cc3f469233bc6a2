//! The external-function contract and the harness error type.
//!
//! `CompiledFunctions` is the capability set the driver consumes: one method
//! per symbol the code generator exports. `Operation` names those entry
//! points so that a probe can be described as data and dispatched through
//! [`invoke_compiled`].

use std::fmt;

use serde::Serialize;

/// Error type for the harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Writing the report failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// A probe supplied the wrong number of arguments for its symbol.
    #[error("{symbol} takes {expected} argument(s), got {got}")]
    Arity {
        symbol: &'static str,
        expected: usize,
        got: usize,
    },

    /// Reference and compiled results differ. Only produced on request.
    #[error("{count} result(s) differ between reference and compiled: {}", .functions.join(", "))]
    Mismatch {
        count: usize,
        functions: Vec<String>,
    },
}

/// Functions supplied by the external code generator.
///
/// All arguments and results are 32-bit signed integers. Implementations
/// must not assume anything about the values the driver passes.
pub trait CompiledFunctions: Send + Sync {
    /// `test_function_greater`.
    fn greater(&self, a: i32, b: i32) -> i32;
    /// `test_function_lesser`.
    fn lesser(&self, a: i32, b: i32) -> i32;
    /// `test_function_equal`.
    fn equal(&self, a: i32, b: i32) -> i32;
    /// `test_function_if`.
    fn threshold_branch(&self, a: i32, b: i32) -> i32;
    /// `fibonacci`.
    fn fibonacci(&self, n: i32) -> i32;
    /// `factorial`.
    fn factorial(&self, n: i32) -> i32;
    /// `even`.
    fn even(&self, n: i32) -> i32;
    /// `odd`.
    fn odd(&self, n: i32) -> i32;
    /// `random_function`.
    fn random(&self, n: i32) -> i32;
    /// `sum`.
    fn sum(&self, a: i32, b: i32, c: i32) -> i32;
    /// `test_test`.
    fn self_test(&self) -> i32;

    /// Name of this backend.
    fn name(&self) -> &str;
}

/// One entry point of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Greater,
    Lesser,
    Equal,
    ThresholdBranch,
    Fibonacci,
    Factorial,
    Even,
    Odd,
    Random,
    Sum,
    SelfTest,
}

impl Operation {
    /// Every operation, in declaration order of the C symbols.
    pub const ALL: [Operation; 11] = [
        Operation::Greater,
        Operation::Lesser,
        Operation::Equal,
        Operation::ThresholdBranch,
        Operation::Fibonacci,
        Operation::Factorial,
        Operation::Even,
        Operation::Odd,
        Operation::Random,
        Operation::Sum,
        Operation::SelfTest,
    ];

    /// C symbol exported by the compiled object.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Greater => "test_function_greater",
            Operation::Lesser => "test_function_lesser",
            Operation::Equal => "test_function_equal",
            Operation::ThresholdBranch => "test_function_if",
            Operation::Fibonacci => "fibonacci",
            Operation::Factorial => "factorial",
            Operation::Even => "even",
            Operation::Odd => "odd",
            Operation::Random => "random_function",
            Operation::Sum => "sum",
            Operation::SelfTest => "test_test",
        }
    }

    /// Number of `int` parameters.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Operation::Greater
            | Operation::Lesser
            | Operation::Equal
            | Operation::ThresholdBranch => 2,
            Operation::Fibonacci
            | Operation::Factorial
            | Operation::Even
            | Operation::Odd
            | Operation::Random => 1,
            Operation::Sum => 3,
            Operation::SelfTest => 0,
        }
    }

    /// Reference implementation, if the harness has one for this operation.
    #[must_use]
    pub fn reference(self) -> Option<fn(&[i32]) -> i32> {
        use crate::reference;
        let f: fn(&[i32]) -> i32 = match self {
            Operation::Greater => |a| reference::greater(a[0], a[1]),
            Operation::Lesser => |a| reference::lesser(a[0], a[1]),
            Operation::Equal => |a| reference::equal(a[0], a[1]),
            Operation::ThresholdBranch => |a| reference::threshold_branch(a[0], a[1]),
            Operation::Fibonacci => |a| reference::fibonacci(a[0]),
            Operation::Factorial => |a| reference::factorial(a[0]),
            Operation::Even
            | Operation::Odd
            | Operation::Random
            | Operation::Sum
            | Operation::SelfTest => return None,
        };
        Some(f)
    }

    fn check_arity(self, args: &[i32]) -> Result<(), HarnessError> {
        if args.len() == self.arity() {
            Ok(())
        } else {
            Err(HarnessError::Arity {
                symbol: self.symbol(),
                expected: self.arity(),
                got: args.len(),
            })
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Call the compiled implementation of `op` with `args`.
pub fn invoke_compiled(
    functions: &dyn CompiledFunctions,
    op: Operation,
    args: &[i32],
) -> Result<i32, HarnessError> {
    op.check_arity(args)?;
    let value = match op {
        Operation::Greater => functions.greater(args[0], args[1]),
        Operation::Lesser => functions.lesser(args[0], args[1]),
        Operation::Equal => functions.equal(args[0], args[1]),
        Operation::ThresholdBranch => functions.threshold_branch(args[0], args[1]),
        Operation::Fibonacci => functions.fibonacci(args[0]),
        Operation::Factorial => functions.factorial(args[0]),
        Operation::Even => functions.even(args[0]),
        Operation::Odd => functions.odd(args[0]),
        Operation::Random => functions.random(args[0]),
        Operation::Sum => functions.sum(args[0], args[1], args[2]),
        Operation::SelfTest => functions.self_test(),
    };
    Ok(value)
}

/// Call the reference implementation of `op` with `args`.
///
/// Returns `Ok(None)` for operations without a reference.
pub fn invoke_reference(op: Operation, args: &[i32]) -> Result<Option<i32>, HarnessError> {
    op.check_arity(args)?;
    Ok(op.reference().map(|f| f(args)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::NativeFunctions;

    #[test]
    fn symbols_are_unique() {
        let mut symbols: Vec<_> = Operation::ALL.iter().map(|op| op.symbol()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), Operation::ALL.len());
    }

    #[test]
    fn arities() {
        assert_eq!(Operation::Greater.arity(), 2);
        assert_eq!(Operation::ThresholdBranch.arity(), 2);
        assert_eq!(Operation::Factorial.arity(), 1);
        assert_eq!(Operation::Sum.arity(), 3);
        assert_eq!(Operation::SelfTest.arity(), 0);
    }

    #[test]
    fn reference_coverage() {
        let with_reference: Vec<_> = Operation::ALL
            .iter()
            .filter(|op| op.reference().is_some())
            .collect();
        assert_eq!(with_reference.len(), 6);
        assert!(Operation::Random.reference().is_none());
    }

    #[test]
    fn invoke_reference_values() {
        assert_eq!(
            invoke_reference(Operation::Factorial, &[9]).unwrap(),
            Some(362_880)
        );
        assert_eq!(
            invoke_reference(Operation::ThresholdBranch, &[60, 60]).unwrap(),
            Some(142)
        );
        assert_eq!(invoke_reference(Operation::Even, &[10]).unwrap(), None);
    }

    #[test]
    fn invoke_compiled_dispatches() {
        let native = NativeFunctions::new();
        assert_eq!(invoke_compiled(&native, Operation::Sum, &[1, 2, 3]).unwrap(), 6);
        assert_eq!(invoke_compiled(&native, Operation::Lesser, &[1, 2]).unwrap(), 1);
        assert_eq!(invoke_compiled(&native, Operation::SelfTest, &[]).unwrap(), 0);
    }

    #[test]
    fn invoke_wrong_arity() {
        let native = NativeFunctions::new();
        let err = invoke_compiled(&native, Operation::Greater, &[1]).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::Arity {
                symbol: "test_function_greater",
                expected: 2,
                got: 1
            }
        ));
        assert!(invoke_reference(Operation::Fibonacci, &[]).is_err());
    }

    #[test]
    fn operation_display_is_symbol() {
        assert_eq!(Operation::ThresholdBranch.to_string(), "test_function_if");
    }

    #[test]
    fn harness_error_display() {
        let err = HarnessError::Config("bad".into());
        assert_eq!(err.to_string(), "configuration error: bad");

        let err = HarnessError::Mismatch {
            count: 2,
            functions: vec!["test_function_if".into(), "factorial".into()],
        };
        assert_eq!(
            err.to_string(),
            "2 result(s) differ between reference and compiled: test_function_if, factorial"
        );
    }
}
