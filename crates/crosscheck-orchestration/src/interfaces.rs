//! Orchestration interfaces.

use serde::Serialize;

use crosscheck_core::contract::HarnessError;

/// How a record is laid out on a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `label \t normal: N \t compiled: C`.
    Comparison,
    /// `label C`, the label carries its own padding.
    Bare,
    /// `label \t compiled: C`.
    Tagged,
}

/// Outcome of a single probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    /// Heading of the group this probe belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// C symbol of the compiled function.
    pub function: &'static str,
    /// Text printed before the values.
    pub label: String,
    /// Arguments passed to the reference function.
    pub reference_args: Option<Vec<i32>>,
    /// Reference result.
    pub normal: Option<i32>,
    /// Arguments passed to the compiled function; `None` when a literal was
    /// reported instead of calling it.
    pub compiled_args: Option<Vec<i32>>,
    /// Compiled result, or the substituted literal.
    pub compiled: i32,
    #[serde(skip)]
    pub layout: Layout,
}

impl CaseRecord {
    /// Whether this record pairs a reference result with a compiled one.
    #[must_use]
    pub fn is_comparison(&self) -> bool {
        self.normal.is_some()
    }

    /// Whether reference and compiled values differ. Observations never do.
    #[must_use]
    pub fn differs(&self) -> bool {
        self.normal.is_some_and(|normal| normal != self.compiled)
    }
}

/// Destination for the report, in program order.
pub trait ReportSink {
    /// Emit a group heading.
    fn heading(&mut self, text: &str) -> Result<(), HarnessError>;

    /// Emit one probe result.
    fn record(&mut self, record: &CaseRecord) -> Result<(), HarnessError>;

    /// Flush everything written so far.
    fn finish(&mut self) -> Result<(), HarnessError>;
}

/// Null sink (discards everything).
pub struct NullSink;

impl ReportSink for NullSink {
    fn heading(&mut self, _text: &str) -> Result<(), HarnessError> {
        Ok(())
    }

    fn record(&mut self, _record: &CaseRecord) -> Result<(), HarnessError> {
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HarnessError> {
        Ok(())
    }
}
