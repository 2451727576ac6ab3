use event_handlers_core::config::GreetingConfig;
use event_handlers_core::contract::HttpResponse;
use lambda_runtime::Context;
use serde_json::Value;
use tracing::info;

const COMPONENT: &str = "greeting_handler";

/// Direct-invocation handler. The configuration snapshot is taken once when
/// the handler is built; the event and context are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingHandler {
    config: GreetingConfig,
}

impl GreetingHandler {
    pub fn new(config: GreetingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GreetingConfig {
        &self.config
    }

    pub fn handle(&self, _event: &Value, _context: &Context) -> HttpResponse {
        info!(
            component = COMPONENT,
            event = "completed",
            function_type = %self.config.function_type,
            stage = %self.config.stage,
            "greeting served"
        );
        HttpResponse::ok(self.config.greeting())
    }
}
