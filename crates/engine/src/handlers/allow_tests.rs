use super::*;

#[test]
fn always_passes_with_no_message() {
    let outcome = handle();
    assert!(outcome.passed);
    assert!(outcome.message.is_empty());
}
