use event_handlers_core::contract::HttpResponse;
use event_handlers_lambda::handlers::storage_notification::handle_storage_notification_payload;
use event_handlers_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<HttpResponse, Error> {
    handle_storage_notification_payload(event.payload).map_err(|error| {
        tracing::error!(event = "invocation_failed", error = %error, "storage notification rejected");
        Error::from(error)
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    lambda_runtime::run(service_fn(handle_request)).await
}
