use event_handlers_core::contract::{ResultStatus, StageResult};
use event_handlers_core::error::HandlerError;
use event_handlers_lambda::adapters::env::{
    load_greeting_config, load_result_status, EnvironmentSnapshot,
};
use event_handlers_lambda::handlers::greeting::GreetingHandler;
use event_handlers_lambda::handlers::storage_notification::handle_storage_notification_payload;
use event_handlers_lambda::handlers::upstream_result::UpstreamResultHandler;
use lambda_runtime::Context;
use serde_json::{json, Value};

fn fixture(name: &str) -> Value {
    let raw = match name {
        "storage_notification" => include_str!("fixtures/storage_notification.json"),
        "upstream_result" => include_str!("fixtures/upstream_result.json"),
        "greeting" => include_str!("fixtures/greeting.json"),
        other => panic!("unknown fixture {other}"),
    };
    serde_json::from_str(raw).expect("fixture should be valid JSON")
}

#[test]
fn storage_scenario_matches_wire_output() {
    let event = json!({
        "Records": [
            {"s3": {"bucket": {"name": "b1"}, "object": {"key": "k1", "size": 42}}}
        ]
    });

    let response = handle_storage_notification_payload(event).expect("handler should succeed");

    assert_eq!(
        serde_json::to_string(&response).expect("response should serialize"),
        r#"{"statusCode":200,"body":"\"S3 Event Processed Successfully!\""}"#
    );
}

#[test]
fn storage_fixture_with_mixed_sizes_succeeds() {
    let response = handle_storage_notification_payload(fixture("storage_notification"))
        .expect("handler should succeed");

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "\"S3 Event Processed Successfully!\"");
}

#[test]
fn storage_event_without_records_is_a_failure_not_a_response() {
    let result = handle_storage_notification_payload(json!({"records": []}));

    assert_eq!(result, Err(HandlerError::missing_field("Records")));
}

#[test]
fn upstream_scenario_matches_wire_output() {
    let result = UpstreamResultHandler::default()
        .handle_payload(json!({"body": "ok"}))
        .expect("handler should succeed");

    assert_eq!(
        serde_json::to_string(&result).expect("result should serialize"),
        r#"{"status":"success","message":"Processed result: ok"}"#
    );
}

#[test]
fn upstream_fixture_body_is_not_parsed() {
    let result = UpstreamResultHandler::default()
        .handle_payload(fixture("upstream_result"))
        .expect("handler should succeed");

    assert_eq!(
        result,
        StageResult {
            status: ResultStatus::Success,
            message: "Processed result: {\"statusCode\": 200, \"body\": \"first stage done\"}"
                .to_string(),
        }
    );
}

#[test]
fn upstream_failure_path_is_selected_by_environment() {
    let snapshot = EnvironmentSnapshot::default().with("RESULT_STATUS", "fail");
    let handler = UpstreamResultHandler::new(
        load_result_status(&snapshot).expect("status should load"),
    );

    let result = handler
        .handle_payload(json!({"body": "ok"}))
        .expect("handler should succeed");

    assert_eq!(
        serde_json::to_value(&result).expect("result should serialize"),
        json!({"status": "fail", "message": "Processed result: ok"})
    );
}

#[test]
fn upstream_event_without_body_is_a_failure() {
    let result = UpstreamResultHandler::default().handle_payload(json!({}));

    assert_eq!(result, Err(HandlerError::missing_field("body")));
}

#[test]
fn greeting_scenario_matches_wire_output() {
    let snapshot = EnvironmentSnapshot::default()
        .with("FUNCTION_TYPE", "worker")
        .with("STAGE", "prod");
    let handler = GreetingHandler::new(load_greeting_config(&snapshot).expect("config should load"));

    let response = handler.handle(&fixture("greeting"), &Context::default());

    assert_eq!(
        serde_json::to_string(&response).expect("response should serialize"),
        r#"{"statusCode":200,"body":"Hello from worker in prod"}"#
    );
}

#[test]
fn greeting_without_stage_fails_before_handling() {
    let snapshot = EnvironmentSnapshot::default().with("FUNCTION_TYPE", "worker");

    let error = load_greeting_config(&snapshot).expect_err("missing STAGE should fail");

    assert_eq!(error, HandlerError::missing_environment("STAGE"));
}
