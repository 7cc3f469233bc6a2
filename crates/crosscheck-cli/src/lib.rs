//! # crosscheck-cli
//!
//! Report presenters, line formatting, console styling, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{JsonPresenter, TextPresenter};
