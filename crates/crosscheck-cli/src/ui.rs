//! Console styling for diagnostics written to stderr.

use console::style;

use crosscheck_orchestration::interfaces::CaseRecord;
use crosscheck_orchestration::orchestrator::analyze_comparison_results;

use crate::output::format_inputs;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a warning.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        eprintln!("[OK] {text}");
    } else {
        eprintln!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// One-line description of a mismatched record, for the summary.
#[must_use]
pub fn describe_mismatch(record: &CaseRecord) -> String {
    let reference_args = record
        .reference_args
        .as_deref()
        .map_or_else(String::new, format_inputs);
    let compiled = match &record.compiled_args {
        Some(args) => format!("{}{} = {}", record.function, format_inputs(args), record.compiled),
        None => format!("literal {}", record.compiled),
    };
    let normal = record
        .normal
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    format!(
        "{}{reference_args} = {normal}, compiled {compiled}",
        record.function
    )
}

/// Summary lines: a headline plus one detail line per differing record.
#[derive(Debug, PartialEq, Eq)]
pub enum Summary {
    /// No differences among this many comparisons.
    Clean(usize),
    /// At least one comparison differs.
    Mismatched { headline: String, details: Vec<String> },
}

/// Build the mismatch summary for `records`.
#[must_use]
pub fn summarize(records: &[CaseRecord]) -> Summary {
    match analyze_comparison_results(records) {
        Ok(()) => Summary::Clean(records.iter().filter(|r| r.is_comparison()).count()),
        Err(err) => Summary::Mismatched {
            headline: err.to_string(),
            details: records
                .iter()
                .filter(|r| r.differs())
                .map(describe_mismatch)
                .collect(),
        },
    }
}

/// Print the mismatch summary: a single warning followed by the differing
/// records, or a single success line.
pub fn print_summary(records: &[CaseRecord]) {
    match summarize(records) {
        Summary::Clean(compared) => {
            print_success(&format!("{compared} comparison(s), no differences"));
        }
        Summary::Mismatched { headline, details } => {
            print_warning(&headline);
            for line in details {
                eprintln!("  {line}");
            }
        }
    }
}
