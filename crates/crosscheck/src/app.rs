//! Application entry point and dispatch.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};

use crosscheck_cli::output::open_output;
use crosscheck_cli::presenter::{JsonPresenter, TextPresenter};
use crosscheck_cli::ui;
use crosscheck_core::contract::CompiledFunctions;
use crosscheck_core::registry::DefaultFactory;
use crosscheck_orchestration::backend_selection::get_backend_to_run;
use crosscheck_orchestration::interfaces::{CaseRecord, ReportSink};
use crosscheck_orchestration::orchestrator::execute_suite;
use crosscheck_orchestration::suite::standard_suite;

use crate::config::{AppConfig, OutputFormat};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        crosscheck_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let factory = DefaultFactory::new();
    let backend = get_backend_to_run(config.backend.as_deref(), &factory)?;
    let out = open_output(config.output.as_deref()).with_context(|| match &config.output {
        Some(path) => format!("cannot open output file {}", path.display()),
        None => "cannot open stdout".to_string(),
    })?;

    prepare_environment(config.startup_delay);

    let records = run_suite(backend.as_ref(), config.format, out)?;

    if config.summary {
        ui::print_summary(&records);
    }

    Ok(())
}

/// One-time setup before the first line of output.
fn prepare_environment(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    tracing::info!(?delay, "waiting before first output");
    std::thread::sleep(delay);
}

/// Drive the standard suite into a presenter for `format`.
fn run_suite(
    functions: &dyn CompiledFunctions,
    format: OutputFormat,
    out: Box<dyn Write>,
) -> Result<Vec<CaseRecord>> {
    let mut sink: Box<dyn ReportSink> = match format {
        OutputFormat::Text => Box::new(TextPresenter::new(out)),
        OutputFormat::Json => Box::new(JsonPresenter::new(out)),
    };
    let records = execute_suite(functions, &standard_suite(), sink.as_mut())
        .context("writing report")?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        let mut argv = vec!["crosscheck"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn run_native_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let path_str = path.to_str().unwrap();
        run(&config(&["--backend", "native", "--output", path_str])).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 35);
        assert!(text.starts_with("test_function_greater:\n"));
        assert!(text.ends_with("test_test: 0\n"));
    }

    #[test]
    fn run_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.jsonl");
        let path_str = path.to_str().unwrap();
        run(&config(&["--backend", "native", "--format", "json", "-o", path_str])).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        // headings are folded into the records
        assert_eq!(text.lines().count(), 31);
        for line in text.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["function"].is_string());
        }
    }

    #[test]
    fn unknown_backend_is_a_config_error() {
        let err = run(&config(&["--backend", "avr"])).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 4);
        assert!(err.to_string().contains("avr"));
    }

    #[test]
    fn unwritable_output_is_generic_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        let err = run(&config(&[
            "--backend",
            "native",
            "--output",
            path.to_str().unwrap(),
        ]))
        .unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 1);
    }

    #[test]
    fn zero_delay_returns_immediately() {
        let start = std::time::Instant::now();
        prepare_environment(Duration::ZERO);
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
