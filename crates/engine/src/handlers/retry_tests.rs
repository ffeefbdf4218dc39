use super::*;

#[test]
fn always_fails_as_a_standalone_action() {
    let outcome = handle();
    assert!(!outcome.passed);
    assert!(outcome.message.contains("onFailure.action"));
}
