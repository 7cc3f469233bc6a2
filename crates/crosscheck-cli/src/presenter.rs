//! Report presenters.
//!
//! Both presenters own their writer and write through it in program order.
//! `finish` flushes; callers must reach it for the report to be complete.

use std::io::Write;

use crosscheck_core::contract::HarnessError;
use crosscheck_orchestration::interfaces::{CaseRecord, ReportSink};

use crate::output::format_line;

/// Plain-text presenter, one tab-separated line per record.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give the writer back.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextPresenter<W> {
    fn heading(&mut self, text: &str) -> Result<(), HarnessError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn record(&mut self, record: &CaseRecord) -> Result<(), HarnessError> {
        writeln!(self.out, "{}", format_line(record))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HarnessError> {
        self.out.flush()?;
        Ok(())
    }
}

/// JSON-lines presenter, one object per record. Headings are carried in the
/// records' `group` field and not emitted separately.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give the writer back.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonPresenter<W> {
    fn heading(&mut self, _text: &str) -> Result<(), HarnessError> {
        Ok(())
    }

    fn record(&mut self, record: &CaseRecord) -> Result<(), HarnessError> {
        serde_json::to_writer(&mut self.out, record).map_err(std::io::Error::from)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HarnessError> {
        self.out.flush()?;
        Ok(())
    }
}
