use super::*;
use ag_adapters::channel::FakeChannelAdapter;
use ag_adapters::session_store::MemorySessionStore;
use ag_adapters::{FakeLlmAdapter, Notifier};
use ag_core::clock::{FakeClock, SystemClock};
use ag_core::hook_point::HookPoint;
use std::time::Duration;

const CLOCK: SystemClock = SystemClock;

fn deps<'a>(
    notifier: &'a Notifier<FakeChannelAdapter, MemorySessionStore>,
    llm: &'a FakeLlmAdapter,
) -> HandlerDeps<'a, FakeChannelAdapter, FakeLlmAdapter, MemorySessionStore, SystemClock> {
    HandlerDeps { notifier, llm, llm_timeout: Duration::from_secs(1), script_timeout: Duration::from_secs(1), clock: &CLOCK }
}

fn rule(target: &str) -> HookRule {
    serde_yaml::from_str(&format!(
        "point: turn:post\naction: summarize_and_log\nmodel: gpt-test\ntarget: {target}\n"
    ))
    .unwrap()
}

#[tokio::test]
async fn appends_summary_with_heading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summaries.md");
    let notifier = Notifier::new(std::sync::Arc::new(FakeChannelAdapter::new()), std::sync::Arc::new(MemorySessionStore::new()));
    let llm = FakeLlmAdapter::new().with_response("agent did a thing");
    let rule = rule(path.to_str().unwrap());
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:test", 0).prompt("hi").response("hello");

    let outcome = handle(&rule, &event, &deps(&notifier, &llm)).await;
    assert!(outcome.passed);

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(contents.contains("agent did a thing"));
    assert!(contents.starts_with("## "));
}

#[tokio::test]
async fn sends_salient_fields_to_the_llm() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summaries.md");
    let notifier = Notifier::new(std::sync::Arc::new(FakeChannelAdapter::new()), std::sync::Arc::new(MemorySessionStore::new()));
    let llm = FakeLlmAdapter::new();
    let rule = rule(path.to_str().unwrap());
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:test", 0)
        .tool_name("exec")
        .prompt("do the thing");

    handle(&rule, &event, &deps(&notifier, &llm)).await;

    let calls = llm.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].model, "gpt-test");
    assert_eq!(calls[0].system, "Produce a one-paragraph human-readable summary of this agent turn");
    assert!(calls[0].user.contains("sessionKey: agent:main:test"));
    assert!(calls[0].user.contains("toolName: exec"));
    assert!(calls[0].user.contains("prompt: do the thing"));
}

#[tokio::test]
async fn llm_error_fails_the_action() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summaries.md");
    let notifier = Notifier::new(std::sync::Arc::new(FakeChannelAdapter::new()), std::sync::Arc::new(MemorySessionStore::new()));
    let llm = FakeLlmAdapter::new().with_error("upstream unavailable");
    let rule = rule(path.to_str().unwrap());
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:test", 0);

    let outcome = handle(&rule, &event, &deps(&notifier, &llm)).await;
    assert!(!outcome.passed);
    assert!(outcome.message.contains("upstream unavailable"));
}

#[tokio::test]
async fn heading_is_deterministic_under_a_fixed_clock() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summaries.md");
    let notifier = Notifier::new(std::sync::Arc::new(FakeChannelAdapter::new()), std::sync::Arc::new(MemorySessionStore::new()));
    let llm = FakeLlmAdapter::new().with_response("agent did a thing");
    let rule = rule(path.to_str().unwrap());
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:test", 0);
    let clock = FakeClock::new();
    clock.set_epoch_ms(1_700_000_000_000);
    let deps = HandlerDeps {
        notifier: &notifier,
        llm: &llm,
        llm_timeout: Duration::from_secs(1),
        script_timeout: Duration::from_secs(1),
        clock: &clock,
    };

    handle(&rule, &event, &deps).await;
    let first = tokio::fs::read_to_string(&path).await.unwrap();
    let first_heading = first.lines().find(|l| l.starts_with("## ")).unwrap().to_string();

    handle(&rule, &event, &deps).await;
    let second = tokio::fs::read_to_string(&path).await.unwrap();
    let second_heading = second.lines().filter(|l| l.starts_with("## ")).last().unwrap();

    assert_eq!(first_heading, second_heading);
}

#[tokio::test]
async fn missing_model_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summaries.md");
    let notifier = Notifier::new(std::sync::Arc::new(FakeChannelAdapter::new()), std::sync::Arc::new(MemorySessionStore::new()));
    let llm = FakeLlmAdapter::new();
    let rule: HookRule = serde_yaml::from_str(&format!(
        "point: turn:post\naction: summarize_and_log\ntarget: {}\n",
        path.to_str().unwrap()
    ))
    .unwrap();
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:test", 0);

    let outcome = handle(&rule, &event, &deps(&notifier, &llm)).await;
    assert!(!outcome.passed);
}
