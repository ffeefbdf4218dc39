use super::*;
use ag_core::hook_point::HookPoint;
use serde_json::json;

fn rule(target: &str) -> HookRule {
    serde_yaml::from_str(&format!("point: turn:post\naction: log\ntarget: {target}\n")).unwrap()
}

#[tokio::test]
async fn appends_one_json_line_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("topic-42.jsonl");
    let rule = rule(path.to_str().unwrap());
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:test", 1_700_000_000_000).with_topic_id(42).prompt("hi");

    let outcome = handle(&rule, &event).await;
    assert!(outcome.passed);

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed["point"], json!("turn:post"));
    assert_eq!(parsed["sessionKey"], json!("agent:main:test"));
    assert_eq!(parsed["topicId"], json!(42));
    assert_eq!(parsed["prompt"], json!("hi"));
}

#[tokio::test]
async fn appends_without_clobbering_prior_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.jsonl");
    let rule = rule(path.to_str().unwrap());
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:test", 0);

    handle(&rule, &event).await;
    handle(&rule, &event).await;

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[tokio::test]
async fn missing_target_fails() {
    let rule: HookRule = serde_yaml::from_str("point: turn:post\naction: log\n").unwrap();
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:test", 0);
    let outcome = handle(&rule, &event).await;
    assert!(!outcome.passed);
}

#[tokio::test]
async fn timestamp_falls_back_to_the_raw_millis_when_out_of_chronos_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.jsonl");
    let rule = rule(path.to_str().unwrap());
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:test", i64::MAX);

    handle(&rule, &event).await;

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    assert_eq!(parsed["timestamp"], json!(i64::MAX.to_string()));
}

#[tokio::test]
async fn optional_fields_omitted_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.jsonl");
    let rule = rule(path.to_str().unwrap());
    let event = HookEvent::new(HookPoint::TurnPost, "agent:main:test", 0);
    handle(&rule, &event).await;
    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    assert!(parsed.get("topicId").is_none());
    assert!(parsed.get("toolName").is_none());
}
