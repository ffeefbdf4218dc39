use super::*;
use ag_core::hook_point::HookPoint;
use serde_json::json;

fn event() -> HookEvent {
    HookEvent::new(HookPoint::TurnToolPre, "agent:main:test", 0)
}

#[test]
fn empty_match_matches_everything() {
    assert!(matches(&Match::default(), &event()));
}

#[test]
fn tool_must_match_exactly_case_sensitive() {
    let m = Match { tool: Some("exec".to_string()), ..Default::default() };
    let e = event().tool_name("exec");
    assert!(matches(&m, &e));
    assert!(!matches(&m, &event().tool_name("Exec")));
    assert!(!matches(&m, &event()));
}

#[test]
fn command_pattern_tests_tool_args_command() {
    let m = Match { command_pattern: Some(r"^rm\s".to_string()), ..Default::default() };
    let blocked = event().with_tool_args(json!({"command": "rm /tmp/x"}));
    let allowed = event().with_tool_args(json!({"command": "ls /tmp"}));
    assert!(matches(&m, &blocked));
    assert!(!matches(&m, &allowed));
}

#[test]
fn command_pattern_without_tool_args_does_not_match() {
    let m = Match { command_pattern: Some(r"^rm\s".to_string()), ..Default::default() };
    assert!(!matches(&m, &event()));
}

#[test]
fn topic_id_requires_exact_match_and_presence() {
    let m = Match { topic_id: Some(42), ..Default::default() };
    assert!(matches(&m, &event().with_topic_id(42)));
    assert!(!matches(&m, &event().with_topic_id(7)));
    assert!(!matches(&m, &event()));
}

#[test]
fn is_sub_agent_compares_against_session_key_marker() {
    let m = Match { is_sub_agent: Some(false), ..Default::default() };
    assert!(matches(&m, &HookEvent::new(HookPoint::TurnPre, "agent:main:telegram:group:-100X:topic:42", 0)));
    assert!(!matches(&m, &HookEvent::new(HookPoint::TurnPre, "agent:main:subagent:abc", 0)));
}

#[test]
fn session_pattern_substring() {
    let m = Match { session_pattern: Some("subagent".to_string()), ..Default::default() };
    assert!(matches(&m, &HookEvent::new(HookPoint::TurnPre, "agent:main:subagent:abc", 0)));
    assert!(!matches(&m, &HookEvent::new(HookPoint::TurnPre, "agent:main:test", 0)));
}

#[test]
fn session_pattern_regex() {
    let m = Match { session_pattern: Some(r"^agent:main:telegram:group:-?\d+$".to_string()), ..Default::default() };
    assert!(matches(&m, &HookEvent::new(HookPoint::TurnPre, "agent:main:telegram:group:-100500", 0)));
    assert!(!matches(&m, &HookEvent::new(HookPoint::TurnPre, "agent:main:telegram:group:-100500:topic:1", 0)));
}

#[test]
fn all_present_predicates_are_anded() {
    let m = Match { tool: Some("exec".to_string()), topic_id: Some(1), ..Default::default() };
    let matching = event().tool_name("exec").with_topic_id(1);
    let wrong_topic = event().tool_name("exec").with_topic_id(2);
    assert!(matches(&m, &matching));
    assert!(!matches(&m, &wrong_topic));
}
