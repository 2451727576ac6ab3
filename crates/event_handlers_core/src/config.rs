use crate::contract::ResultStatus;
use crate::error::HandlerError;

pub const FUNCTION_TYPE_VAR: &str = "FUNCTION_TYPE";
pub const STAGE_VAR: &str = "STAGE";
pub const RESULT_STATUS_VAR: &str = "RESULT_STATUS";

/// Values the greeting handler interpolates into its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingConfig {
    pub function_type: String,
    pub stage: String,
}

impl GreetingConfig {
    pub fn new(function_type: impl Into<String>, stage: impl Into<String>) -> Self {
        Self {
            function_type: function_type.into(),
            stage: stage.into(),
        }
    }

    /// Builds the config from a snapshot lookup. Both entries are required;
    /// there are no defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HandlerError> {
        let function_type = require(&lookup, FUNCTION_TYPE_VAR)?;
        let stage = require(&lookup, STAGE_VAR)?;
        Ok(Self {
            function_type,
            stage,
        })
    }

    pub fn greeting(&self) -> String {
        format!("Hello from {} in {}", self.function_type, self.stage)
    }
}

/// Resolves the constant status reported by the upstream-result handler.
/// Absent means [`ResultStatus::Success`].
pub fn result_status_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ResultStatus, HandlerError> {
    match lookup(RESULT_STATUS_VAR) {
        None => Ok(ResultStatus::default()),
        Some(value) => value
            .parse()
            .map_err(|_| HandlerError::InvalidEnvironment {
                name: RESULT_STATUS_VAR.to_string(),
                value,
            }),
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, HandlerError> {
    lookup(name).ok_or_else(|| HandlerError::missing_environment(name))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn snapshot(entries: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: BTreeMap<String, String> = entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn greeting_interpolates_both_values() {
        let config =
            GreetingConfig::from_lookup(snapshot(&[("FUNCTION_TYPE", "worker"), ("STAGE", "prod")]))
                .expect("config should load");

        assert_eq!(config, GreetingConfig::new("worker", "prod"));
        assert_eq!(config.greeting(), "Hello from worker in prod");
    }

    #[test]
    fn missing_function_type_is_reported() {
        let error = GreetingConfig::from_lookup(snapshot(&[("STAGE", "prod")]))
            .expect_err("missing FUNCTION_TYPE should fail");
        assert_eq!(error, HandlerError::missing_environment("FUNCTION_TYPE"));
    }

    #[test]
    fn missing_stage_is_reported() {
        let error = GreetingConfig::from_lookup(snapshot(&[("FUNCTION_TYPE", "api")]))
            .expect_err("missing STAGE should fail");
        assert_eq!(error, HandlerError::missing_environment("STAGE"));
        assert_eq!(error.to_string(), "STAGE must be configured");
    }

    #[test]
    fn empty_values_are_kept_verbatim() {
        let config = GreetingConfig::from_lookup(snapshot(&[("FUNCTION_TYPE", ""), ("STAGE", "")]))
            .expect("present but empty values should load");
        assert_eq!(config.greeting(), "Hello from  in ");
    }

    #[test]
    fn result_status_defaults_to_success() {
        let status = result_status_from_lookup(snapshot(&[])).expect("absent status is fine");
        assert_eq!(status, ResultStatus::Success);
    }

    #[test]
    fn result_status_accepts_fail() {
        let status = result_status_from_lookup(snapshot(&[("RESULT_STATUS", "fail")]))
            .expect("fail should parse");
        assert_eq!(status, ResultStatus::Fail);
    }

    #[test]
    fn result_status_rejects_unknown_values() {
        let error = result_status_from_lookup(snapshot(&[("RESULT_STATUS", "partial")]))
            .expect_err("unknown status should fail");
        assert_eq!(
            error,
            HandlerError::InvalidEnvironment {
                name: "RESULT_STATUS".to_string(),
                value: "partial".to_string(),
            }
        );
    }
}
