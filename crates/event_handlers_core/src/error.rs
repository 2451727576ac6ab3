use thiserror::Error;

/// Failure surfaced to the invoking host. Handlers never turn these into
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("event is missing required field `{path}`")]
    MissingField { path: String },

    #[error("{name} must be configured")]
    MissingEnvironment { name: String },

    #[error("{name} has unsupported value `{value}`")]
    InvalidEnvironment { name: String, value: String },

    #[error("malformed event: {message}")]
    MalformedEvent { message: String },
}

impl HandlerError {
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub fn missing_environment(name: impl Into<String>) -> Self {
        Self::MissingEnvironment { name: name.into() }
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedEvent {
            message: error.to_string(),
        }
    }
}
