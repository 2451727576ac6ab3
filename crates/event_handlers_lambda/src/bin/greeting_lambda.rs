use event_handlers_core::contract::HttpResponse;
use event_handlers_lambda::adapters::env::{load_greeting_config, ProcessEnvironment};
use event_handlers_lambda::handlers::greeting::GreetingHandler;
use event_handlers_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    handler: &GreetingHandler,
) -> Result<HttpResponse, Error> {
    Ok(handler.handle(&event.payload, &event.context))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // A missing FUNCTION_TYPE or STAGE fails the init phase, before any invocation.
    let handler = GreetingHandler::new(load_greeting_config(&ProcessEnvironment)?);

    lambda_runtime::run(service_fn(|event| handle_request(event, &handler))).await
}
