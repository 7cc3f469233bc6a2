//! Version information.

use crosscheck_core::registry::DefaultFactory;

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string with build info.
#[must_use]
pub fn full_version() -> String {
    format!(
        "crosscheck {} (default backend: {})",
        version(),
        DefaultFactory::default_backend()
    )
}
