//! # crosscheck-orchestration
//!
//! The probe suite, the sequential driver, backend selection, and result
//! analysis.

pub mod backend_selection;
pub mod interfaces;
pub mod orchestrator;
pub mod suite;

pub use interfaces::{CaseRecord, Layout, NullSink, ReportSink};
pub use orchestrator::{analyze_comparison_results, execute_suite};
pub use suite::{standard_suite, Suite};
