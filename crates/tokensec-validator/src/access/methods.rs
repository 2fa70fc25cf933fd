use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

use tokensec_core::Visibility;

use crate::config::AccessMethodConfig;

/// What a static access method hands back when invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodOutput {
    Visibility(Visibility),
    /// Any other result type, by name.
    Other(String),
}

/// A callable static access method.
pub trait AccessMethod: Send + Sync {
    fn invoke(&self) -> MethodOutput;
}

impl<F> AccessMethod for F
where
    F: Fn() -> MethodOutput + Send + Sync,
{
    fn invoke(&self) -> MethodOutput {
        self()
    }
}

/// Why a method reference could not be turned into a visibility.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("no static access method named {0}")]
    NotFound(String),
    #[error("{name} returned {returned}")]
    WrongReturnType { name: String, returned: String },
}

/// Resolves `pkg.Class.method` references. The resolver depends only on this.
pub trait StaticAccessMethodInvoker: Send + Sync {
    fn resolve(&self, qualified_name: &str) -> Result<Visibility, ResolutionError>;
}

/// Registry of named access methods.
#[derive(Default)]
pub struct MethodRegistry {
    methods: DashMap<String, Arc<dyn AccessMethod>>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self {
            methods: DashMap::new(),
        }
    }

    /// Build from `access_methods` config entries. Names are assumed validated.
    pub fn from_config(entries: &[AccessMethodConfig]) -> Self {
        let registry = Self::new();
        for m in entries {
            let output = match Visibility::from_keyword(m.returns.trim()) {
                Some(v) => MethodOutput::Visibility(v),
                None => MethodOutput::Other(m.returns.trim().to_string()),
            };
            registry.register_fixed(&m.name, output);
        }
        registry
    }

    pub fn register(&self, name: impl Into<String>, method: Arc<dyn AccessMethod>) {
        self.methods.insert(name.into(), method);
    }

    /// Register a method that always returns `output`.
    pub fn register_fixed(&self, name: impl Into<String>, output: MethodOutput) {
        self.register(name, Arc::new(move || output.clone()));
    }
}

impl StaticAccessMethodInvoker for MethodRegistry {
    fn resolve(&self, qualified_name: &str) -> Result<Visibility, ResolutionError> {
        let method = self
            .methods
            .get(qualified_name)
            .ok_or_else(|| ResolutionError::NotFound(qualified_name.to_string()))?
            .value()
            .clone();

        match method.invoke() {
            MethodOutput::Visibility(v) => Ok(v),
            MethodOutput::Other(returned) => Err(ResolutionError::WrongReturnType {
                name: qualified_name.to_string(),
                returned,
            }),
        }
    }
}
