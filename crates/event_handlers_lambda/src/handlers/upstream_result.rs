use event_handlers_core::contract::{decode_event, ResultStatus, StageResult, UpstreamResultEvent};
use event_handlers_core::error::HandlerError;
use serde_json::Value;
use tracing::info;

const COMPONENT: &str = "upstream_result_handler";

/// Second pipeline stage. Echoes the upstream body behind a fixed prefix and
/// reports a status chosen when the handler is built, never derived from the
/// body. [`ResultStatus::Fail`] exists to drive the consumer's failure branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpstreamResultHandler {
    status: ResultStatus,
}

impl UpstreamResultHandler {
    pub fn new(status: ResultStatus) -> Self {
        Self { status }
    }

    pub fn status(&self) -> ResultStatus {
        self.status
    }

    pub fn handle(&self, event: &UpstreamResultEvent) -> Result<StageResult, HandlerError> {
        let body = event.require_body()?;
        let result = StageResult::processed(self.status, body);
        info!(
            component = COMPONENT,
            event = "completed",
            status = %self.status,
            body_len = body.len(),
            "processed upstream result"
        );
        Ok(result)
    }

    pub fn handle_payload(&self, payload: Value) -> Result<StageResult, HandlerError> {
        let event: UpstreamResultEvent = decode_event(payload)?;
        self.handle(&event)
    }
}
