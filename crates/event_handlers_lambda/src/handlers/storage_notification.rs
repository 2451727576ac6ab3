use event_handlers_core::contract::{
    decode_event, storage_confirmation_body, HttpResponse, StorageNotificationEvent,
};
use event_handlers_core::error::HandlerError;
use serde_json::Value;
use tracing::info;

const COMPONENT: &str = "storage_notification_handler";

/// Logs one line per uploaded object and confirms with a fixed 200 response.
///
/// All records are checked before anything is logged, so a malformed record
/// anywhere in the batch fails the invocation without partial output.
pub fn handle_storage_notification(
    event: &StorageNotificationEvent,
) -> Result<HttpResponse, HandlerError> {
    let notices = event.object_notices()?;

    info!(
        component = COMPONENT,
        event = "triggered",
        record_count = notices.len(),
        "lambda triggered by storage event"
    );

    for notice in &notices {
        info!(
            component = COMPONENT,
            event = "record_received",
            bucket = notice.bucket,
            key = notice.key,
            size = %notice.size_label(),
            "new object uploaded"
        );
    }

    Ok(HttpResponse::ok(storage_confirmation_body()))
}

pub fn handle_storage_notification_payload(payload: Value) -> Result<HttpResponse, HandlerError> {
    let event: StorageNotificationEvent = decode_event(payload)?;
    handle_storage_notification(&event)
}
