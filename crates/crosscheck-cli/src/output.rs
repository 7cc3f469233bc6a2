//! Report line formatting and output destinations.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crosscheck_orchestration::interfaces::{CaseRecord, Layout};

/// Format one record as a report line (without the trailing newline).
///
/// The column separators are tabs, and the spacing around them matches the
/// transcripts the harness has always produced.
#[must_use]
pub fn format_line(record: &CaseRecord) -> String {
    match (record.layout, record.normal) {
        (Layout::Comparison, Some(normal)) => format!(
            "{}\t normal: {normal}\tcompiled:{}",
            record.label, record.compiled
        ),
        (Layout::Tagged, _) | (Layout::Comparison, None) => {
            format!("{}\tcompiled:{}", record.label, record.compiled)
        }
        (Layout::Bare, _) => format!("{}{}", record.label, record.compiled),
    }
}

/// Format an argument list as `(a, b)`.
#[must_use]
pub fn format_inputs(args: &[i32]) -> String {
    let inner: Vec<String> = args.iter().map(ToString::to_string).collect();
    format!("({})", inner.join(", "))
}

/// Open the report destination: a buffered file when `path` is given,
/// buffered stdout otherwise.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    tracing::debug!(path = ?path, "opening report output");
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(layout: Layout, label: &str, normal: Option<i32>, compiled: i32) -> CaseRecord {
        CaseRecord {
            group: None,
            function: "f",
            label: label.into(),
            reference_args: normal.map(|_| vec![1]),
            normal,
            compiled_args: Some(vec![1]),
            compiled,
            layout,
        }
    }

    #[test]
    fn comparison_line() {
        let r = record(Layout::Comparison, "with values(1, 2)", Some(0), 0);
        assert_eq!(format_line(&r), "with values(1, 2)\t normal: 0\tcompiled:0");
    }

    #[test]
    fn padded_comparison_line() {
        let r = record(Layout::Comparison, "factorial(9)      ", Some(362_880), 362_880);
        assert_eq!(
            format_line(&r),
            "factorial(9)      \t normal: 362880\tcompiled:362880"
        );
    }

    #[test]
    fn bare_line() {
        let r = record(Layout::Bare, "even(10)          ", None, 1);
        assert_eq!(format_line(&r), "even(10)          1");
        let r = record(Layout::Bare, "test_test: ", None, 0);
        assert_eq!(format_line(&r), "test_test: 0");
    }

    #[test]
    fn tagged_line() {
        let r = record(Layout::Tagged, "random_function(3) ", None, -8);
        assert_eq!(format_line(&r), "random_function(3) \tcompiled:-8");
    }

    #[test]
    fn format_inputs_lists() {
        assert_eq!(format_inputs(&[]), "()");
        assert_eq!(format_inputs(&[9]), "(9)");
        assert_eq!(format_inputs(&[60, 61]), "(60, 61)");
    }

    #[test]
    fn open_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        {
            let mut out = open_output(Some(&path)).unwrap();
            writeln!(out, "hello").unwrap();
            out.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn open_output_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        assert!(open_output(Some(&path)).is_err());
    }
}
