//! Backend selection logic.

use std::sync::Arc;

use crosscheck_core::contract::{CompiledFunctions, HarnessError};
use crosscheck_core::registry::{BackendFactory, DefaultFactory};

/// Get the backend to run, falling back to the build's default when no name
/// is given. Unknown or unavailable names are reported by the factory.
pub fn get_backend_to_run(
    name: Option<&str>,
    factory: &dyn BackendFactory,
) -> Result<Arc<dyn CompiledFunctions>, HarnessError> {
    let name = name.unwrap_or(DefaultFactory::default_backend());
    factory.get(name)
}
