//! The fixed probe plan.
//!
//! A suite is a list of groups, each an optional heading followed by probes.
//! [`standard_suite`] is the sequence the harness has always run; its values
//! and ordering are part of the output contract and must not be "fixed".

use crosscheck_core::contract::Operation;

use crate::interfaces::Layout;

/// Highest argument passed to `random_function` (inclusive).
pub const RANDOM_PROBE_MAX: i32 = 14;

/// What the compiled side of a probe does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledInput {
    /// Call the compiled function with these arguments.
    Call(Vec<i32>),
    /// Report this value without calling the compiled function.
    Literal(i32),
}

/// One planned invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub op: Operation,
    pub label: String,
    pub reference_args: Option<Vec<i32>>,
    pub compiled: CompiledInput,
    pub layout: Layout,
}

impl Probe {
    /// Call reference and compiled with the same arguments.
    #[must_use]
    pub fn compare(op: Operation, label: impl Into<String>, args: &[i32]) -> Self {
        Self::compare_with(op, label, args, CompiledInput::Call(args.to_vec()))
    }

    /// Call the reference with `reference_args`; the compiled side does
    /// whatever `compiled` says.
    #[must_use]
    pub fn compare_with(
        op: Operation,
        label: impl Into<String>,
        reference_args: &[i32],
        compiled: CompiledInput,
    ) -> Self {
        Self {
            op,
            label: label.into(),
            reference_args: Some(reference_args.to_vec()),
            compiled,
            layout: Layout::Comparison,
        }
    }

    /// Call only the compiled function.
    #[must_use]
    pub fn observe(op: Operation, label: impl Into<String>, args: &[i32], layout: Layout) -> Self {
        Self {
            op,
            label: label.into(),
            reference_args: None,
            compiled: CompiledInput::Call(args.to_vec()),
            layout,
        }
    }
}

/// Probes sharing an optional heading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeGroup {
    pub heading: Option<String>,
    pub probes: Vec<Probe>,
}

impl ProbeGroup {
    #[must_use]
    pub fn titled(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            probes: Vec::new(),
        }
    }

    #[must_use]
    pub fn untitled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, probe: Probe) -> Self {
        self.probes.push(probe);
        self
    }
}

/// An ordered list of probe groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suite {
    pub groups: Vec<ProbeGroup>,
}

impl Suite {
    #[must_use]
    pub fn new(groups: Vec<ProbeGroup>) -> Self {
        Self { groups }
    }

    /// Total number of probes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.probes.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all probes in order.
    pub fn probes(&self) -> impl Iterator<Item = &Probe> {
        self.groups.iter().flat_map(|g| g.probes.iter())
    }
}

fn comparison_group(op: Operation) -> ProbeGroup {
    [(1, 2), (2, 1), (40, 40)]
        .into_iter()
        .fold(ProbeGroup::titled(format!("{}:", op.symbol())), |group, (a, b)| {
            group.with(Probe::compare(op, format!("with values({a}, {b})"), &[a, b]))
        })
}

/// The standard harness sequence.
///
/// The first `if` probe calls the compiled function with (60, 61) while the
/// reference gets (60, 60), and the second reports a literal 42 without
/// calling the compiled function at all. Both are kept exactly as recorded.
#[must_use]
pub fn standard_suite() -> Suite {
    let threshold = ProbeGroup::titled(format!("{}:", Operation::ThresholdBranch.symbol()))
        .with(Probe::compare_with(
            Operation::ThresholdBranch,
            "with values(60,60)",
            &[60, 60],
            CompiledInput::Call(vec![60, 61]),
        ))
        .with(Probe::compare_with(
            Operation::ThresholdBranch,
            "with values(10,10)",
            &[10, 10],
            CompiledInput::Literal(42),
        ));

    let recursion = ProbeGroup::untitled()
        .with(Probe::compare(Operation::Factorial, "factorial(9)      ", &[9]))
        .with(Probe::compare(Operation::Fibonacci, "fibonacci(25)     ", &[25]));

    let parity = ProbeGroup::untitled()
        .with(Probe::observe(Operation::Even, "even(10)          ", &[10], Layout::Bare))
        .with(Probe::observe(Operation::Odd, "odd(10)           ", &[10], Layout::Bare));

    let random = (0..=RANDOM_PROBE_MAX).fold(ProbeGroup::untitled(), |group, n| {
        group.with(Probe::observe(
            Operation::Random,
            format!("random_function({n}) "),
            &[n],
            Layout::Tagged,
        ))
    });

    let self_test = ProbeGroup::untitled().with(Probe::observe(
        Operation::SelfTest,
        "test_test: ",
        &[],
        Layout::Bare,
    ));

    Suite::new(vec![
        comparison_group(Operation::Greater),
        comparison_group(Operation::Lesser),
        comparison_group(Operation::Equal),
        threshold,
        recursion,
        parity,
        random,
        self_test,
    ])
}
