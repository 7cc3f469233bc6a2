//! Core orchestration: sequential execution and result analysis.

use crosscheck_core::contract::{
    invoke_compiled, invoke_reference, CompiledFunctions, HarnessError,
};

use crate::interfaces::{CaseRecord, ReportSink};
use crate::suite::{CompiledInput, Probe, Suite};

/// Run one probe: reference first, then the compiled side.
pub fn execute_probe(
    functions: &dyn CompiledFunctions,
    probe: &Probe,
    group: Option<&str>,
) -> Result<CaseRecord, HarnessError> {
    let normal = match &probe.reference_args {
        Some(args) => invoke_reference(probe.op, args)?,
        None => None,
    };

    let (compiled_args, compiled) = match &probe.compiled {
        CompiledInput::Call(args) => {
            let value = invoke_compiled(functions, probe.op, args)?;
            (Some(args.clone()), value)
        }
        CompiledInput::Literal(value) => (None, *value),
    };

    tracing::debug!(
        function = probe.op.symbol(),
        ?normal,
        compiled,
        literal = compiled_args.is_none(),
        "probe finished"
    );

    Ok(CaseRecord {
        group: group.map(|h| h.trim_end_matches(':').to_string()),
        function: probe.op.symbol(),
        label: probe.label.clone(),
        reference_args: probe.reference_args.clone(),
        normal,
        compiled_args,
        compiled,
        layout: probe.layout,
    })
}

/// Execute every probe of `suite` against `functions`, in order, handing
/// headings and records to `sink` as they are produced.
///
/// Results are never compared here; the records are returned for callers
/// that want to analyze them.
pub fn execute_suite(
    functions: &dyn CompiledFunctions,
    suite: &Suite,
    sink: &mut dyn ReportSink,
) -> Result<Vec<CaseRecord>, HarnessError> {
    tracing::info!(backend = functions.name(), probes = suite.len(), "running suite");

    let mut records = Vec::with_capacity(suite.len());
    for group in &suite.groups {
        if let Some(heading) = &group.heading {
            sink.heading(heading)?;
        }
        for probe in &group.probes {
            let record = execute_probe(functions, probe, group.heading.as_deref())?;
            sink.record(&record)?;
            records.push(record);
        }
    }
    sink.finish()?;

    tracing::info!(records = records.len(), "suite complete");
    Ok(records)
}

/// Analyze comparison records for mismatches.
///
/// This is an opt-in addition on top of the observation report: the harness
/// itself never decides pass or fail.
pub fn analyze_comparison_results(records: &[CaseRecord]) -> Result<(), HarnessError> {
    let mismatched: Vec<&CaseRecord> = records.iter().filter(|r| r.differs()).collect();
    if mismatched.is_empty() {
        return Ok(());
    }

    let mut functions: Vec<String> = Vec::new();
    for record in &mismatched {
        let entry = format!("{} {}", record.function, record.label.trim_end());
        if !functions.contains(&entry) {
            functions.push(entry);
        }
    }

    Err(HarnessError::Mismatch {
        count: mismatched.len(),
        functions,
    })
}
