use std::collections::BTreeMap;

use event_handlers_core::config::{result_status_from_lookup, GreetingConfig};
use event_handlers_core::contract::ResultStatus;
use event_handlers_core::error::HandlerError;

pub trait EnvironmentSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the live process environment.
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fixed set of variables, for local invocations and tests.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSnapshot {
    values: BTreeMap<String, String>,
}

impl EnvironmentSnapshot {
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl EnvironmentSource for EnvironmentSnapshot {
    fn var(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

pub fn load_greeting_config(source: &dyn EnvironmentSource) -> Result<GreetingConfig, HandlerError> {
    GreetingConfig::from_lookup(|name| source.var(name))
}

pub fn load_result_status(source: &dyn EnvironmentSource) -> Result<ResultStatus, HandlerError> {
    result_status_from_lookup(|name| source.var(name))
}
