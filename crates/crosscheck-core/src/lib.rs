//! # crosscheck-core
//!
//! Reference library and external-function contract for the crosscheck
//! harness. The reference functions are the oracle; [`CompiledFunctions`] is
//! the boundary behind which the code generator's output sits.

pub mod constants;
pub mod contract;
#[cfg(feature = "linked")]
pub mod linked;
pub mod native;
pub mod reference;
pub mod registry;

// Re-exports
pub use constants::{exit_codes, FIB_TABLE, THRESHOLD_HIGH, THRESHOLD_LIMIT, THRESHOLD_LOW};
pub use contract::{invoke_compiled, invoke_reference, CompiledFunctions, HarnessError, Operation};
pub use native::NativeFunctions;
pub use registry::{BackendFactory, DefaultFactory};

#[cfg(feature = "linked")]
pub use linked::LinkedFunctions;
