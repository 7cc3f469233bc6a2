#![no_main]

use libfuzzer_sys::fuzz_target;

use crosscheck_core::contract::{invoke_compiled, invoke_reference, Operation};
use crosscheck_core::native::NativeFunctions;
use crosscheck_core::reference;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let a = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let b = i32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    let native = NativeFunctions::new();

    for op in [
        Operation::Greater,
        Operation::Lesser,
        Operation::Equal,
        Operation::ThresholdBranch,
    ] {
        let expected = invoke_reference(op, &[a, b]).unwrap();
        let got = invoke_compiled(&native, op, &[a, b]).unwrap();
        assert_eq!(Some(got), expected, "{op}({a}, {b})");
    }

    // Iterative variants are linear in n; cap n for speed.
    let n = a % 10_000;
    assert_eq!(
        invoke_compiled(&native, Operation::Factorial, &[n]).unwrap(),
        reference::factorial_iterative(n)
    );
    let n = b % 10_000;
    assert_eq!(
        invoke_compiled(&native, Operation::Fibonacci, &[n]).unwrap(),
        reference::fibonacci_iterative(n)
    );

    // Must not panic on any input.
    let _ = invoke_compiled(&native, Operation::Random, &[a]);
    let _ = invoke_compiled(&native, Operation::Sum, &[a, b, a]);
});
