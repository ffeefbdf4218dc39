use super::*;

#[tokio::test]
async fn fires_a_log_rule_and_prints_a_passed_result() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("hooks.yaml");
    let log_path = dir.path().join("audit.jsonl");
    std::fs::write(
        &config_path,
        format!(
            "version: \"1\"\nhooks:\n  - point: turn:post\n    action: log\n    target: {}\n",
            log_path.to_str().unwrap()
        ),
    )
    .unwrap();

    let event_path = dir.path().join("event.json");
    std::fs::write(
        &event_path,
        r#"{"point":"turn:post","sessionKey":"agent:main:test","timestamp":0}"#,
    )
    .unwrap();

    assert!(run(&config_path, "turn:post", &event_path).await.is_ok());
    assert!(log_path.exists());
}

#[tokio::test]
async fn rejects_an_unknown_hook_point() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("hooks.yaml");
    std::fs::write(&config_path, "version: \"1\"\nhooks: []\n").unwrap();
    let event_path = dir.path().join("event.json");
    std::fs::write(&event_path, "{}").unwrap();

    let err = run(&config_path, "turn:sideways", &event_path).await.unwrap_err();
    assert!(err.to_string().contains("unknown hook point"));
}
