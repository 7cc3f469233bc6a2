//! Backend factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::contract::{CompiledFunctions, HarnessError};
use crate::native::NativeFunctions;

/// Factory trait for obtaining backends by name.
pub trait BackendFactory: Send + Sync {
    /// Get or create a backend by name.
    fn get(&self, name: &str) -> Result<Arc<dyn CompiledFunctions>, HarnessError>;

    /// List all available backend names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn CompiledFunctions>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Backend used when none is requested: the linked object when it is
    /// compiled in, the native stand-in otherwise.
    #[must_use]
    pub fn default_backend() -> &'static str {
        if cfg!(feature = "linked") {
            "linked"
        } else {
            "native"
        }
    }

    /// Backends compiled into this build.
    fn backend_names() -> Vec<&'static str> {
        if cfg!(feature = "linked") {
            vec!["native", "linked"]
        } else {
            vec!["native"]
        }
    }

    fn create_backend(name: &str) -> Result<Arc<dyn CompiledFunctions>, HarnessError> {
        tracing::debug!(backend = name, "creating backend");
        match name {
            "native" => Ok(Arc::new(NativeFunctions::new())),
            #[cfg(feature = "linked")]
            "linked" => Ok(Arc::new(crate::linked::LinkedFunctions::new())),
            #[cfg(not(feature = "linked"))]
            "linked" => Err(HarnessError::Config(
                "backend 'linked' requires building with the `linked` feature".into(),
            )),
            _ => Err(HarnessError::Config(format!(
                "backend '{name}' is not available (available: {})",
                Self::backend_names().join(", ")
            ))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn CompiledFunctions>, HarnessError> {
        if let Some(backend) = self.cache.read().get(name) {
            return Ok(Arc::clone(backend));
        }

        let backend = Self::create_backend(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&backend));
        Ok(backend)
    }

    fn available(&self) -> Vec<&str> {
        Self::backend_names()
    }
}
