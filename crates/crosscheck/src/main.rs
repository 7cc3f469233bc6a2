//! crosscheck: compare reference functions against compiled counterparts.

use std::process::ExitCode;

use crosscheck_lib::{app, config, errors, version};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse();
    tracing::debug!(version = %version::full_version(), ?config, "starting");

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            crosscheck_cli::ui::print_error(&format!("{err:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
