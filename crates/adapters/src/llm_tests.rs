use super::*;
use std::time::Duration;

#[tokio::test]
async fn fake_adapter_returns_configured_response() {
    let fake = FakeLlmAdapter::new().with_response("summary text");
    let result = fake.complete("gpt-4o", "system", "user", Duration::from_secs(1)).await.unwrap();
    assert_eq!(result, "summary text");
}

#[tokio::test]
async fn fake_adapter_records_the_call() {
    let fake = FakeLlmAdapter::new();
    fake.complete("gpt-4o", "sys", "usr", Duration::from_secs(1)).await.unwrap();
    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].model, "gpt-4o");
    assert_eq!(calls[0].system, "sys");
    assert_eq!(calls[0].user, "usr");
}

#[tokio::test]
async fn fake_adapter_can_simulate_failure() {
    let fake = FakeLlmAdapter::new().with_error("rate limited");
    let err = fake.complete("gpt-4o", "sys", "usr", Duration::from_secs(1)).await.unwrap_err();
    assert!(matches!(err, LlmError::Request(msg) if msg == "rate limited"));
}
