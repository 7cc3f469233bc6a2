//! Property-based tests for report lines produced through the full pipeline.

use proptest::prelude::*;

use crosscheck_cli::presenter::TextPresenter;
use crosscheck_core::contract::Operation;
use crosscheck_core::native::NativeFunctions;
use crosscheck_orchestration::interfaces::NullSink;
use crosscheck_orchestration::orchestrator::{analyze_comparison_results, execute_suite};
use crosscheck_orchestration::suite::{Probe, ProbeGroup, Suite};

fn binary_ops() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Greater),
        Just(Operation::Lesser),
        Just(Operation::Equal),
        Just(Operation::ThresholdBranch),
    ]
}

fn render(suite: &Suite) -> String {
    let mut presenter = TextPresenter::new(Vec::new());
    execute_suite(&NativeFunctions::new(), suite, &mut presenter).unwrap();
    String::from_utf8(presenter.into_inner()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A comparison line carries the same value in both columns on the
    /// native backend.
    #[test]
    fn comparison_line_columns_agree(op in binary_ops(), a in any::<i32>(), b in any::<i32>()) {
        let label = format!("with values({a}, {b})");
        let suite = Suite::new(vec![
            ProbeGroup::titled(format!("{}:", op.symbol()))
                .with(Probe::compare(op, label.clone(), &[a, b])),
        ]);
        let text = render(&suite);
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), 2);
        let rest = lines[1].strip_prefix(&format!("{label}\t normal: ")).unwrap();
        let (normal, compiled) = rest.split_once("\tcompiled:").unwrap();
        prop_assert_eq!(normal, compiled);
    }

    /// Native runs of arbitrary small suites never report a difference.
    #[test]
    fn native_suites_have_no_mismatch(ns in proptest::collection::vec(0i32..=20, 1..8)) {
        let group = ns.iter().fold(ProbeGroup::untitled(), |group, &n| {
            group
                .with(Probe::compare(Operation::Factorial, format!("factorial({n})"), &[n]))
                .with(Probe::compare(Operation::Fibonacci, format!("fibonacci({n})"), &[n]))
        });
        let suite = Suite::new(vec![group]);
        let records = execute_suite(&NativeFunctions::new(), &suite, &mut NullSink).unwrap();
        prop_assert_eq!(records.len(), ns.len() * 2);
        prop_assert!(analyze_comparison_results(&records).is_ok());
    }

    /// Line count is headings plus probes, whatever the contents.
    #[test]
    fn line_count(groups in proptest::collection::vec((any::<bool>(), 0usize..5), 0..6)) {
        let suite = Suite::new(
            groups
                .iter()
                .map(|&(titled, probes)| {
                    let group = if titled {
                        ProbeGroup::titled("heading:")
                    } else {
                        ProbeGroup::untitled()
                    };
                    (0..probes).fold(group, |g, i| {
                        g.with(Probe::compare(Operation::Equal, format!("case {i}"), &[1, 1]))
                    })
                })
                .collect(),
        );
        let headings = groups.iter().filter(|(titled, _)| *titled).count();
        prop_assert_eq!(render(&suite).lines().count(), headings + suite.len());
    }
}
