use event_handlers_core::contract::StageResult;
use event_handlers_lambda::adapters::env::{load_result_status, ProcessEnvironment};
use event_handlers_lambda::handlers::upstream_result::UpstreamResultHandler;
use event_handlers_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    handler: &UpstreamResultHandler,
) -> Result<StageResult, Error> {
    handler.handle_payload(event.payload).map_err(|error| {
        tracing::error!(event = "invocation_failed", error = %error, "upstream result rejected");
        Error::from(error)
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let handler = UpstreamResultHandler::new(load_result_status(&ProcessEnvironment)?);
    tracing::info!(event = "configured", status = %handler.status(), "upstream result handler ready");

    lambda_runtime::run(service_fn(|event| handle_request(event, &handler))).await
}
