// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `retry`: a meta-action, meaningful only inside a rule's `onFailure`
//! (see [`crate::pipeline`]). Authoring it directly as a rule's
//! top-level `action` has no failing action to retry, so it fails
//! immediately with a message pointing at the correct place to
//! configure it; the rule's own `onFailure` (default `continue`) then
//! decides whether that failure surfaces.

use super::ActionOutcome;

pub fn handle() -> ActionOutcome {
    ActionOutcome::failed("retry is a meta-action: set it on a rule's onFailure.action, not as the rule's action")
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
