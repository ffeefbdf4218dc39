// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test builders shared across crates (gated behind `test-support`).

use crate::event::HookEvent;
use crate::hook_point::HookPoint;

crate::builder! {
    pub struct HookEventBuilder => HookEvent {
        set { point: HookPoint = HookPoint::TurnPre }
        into { session_key: String = "agent:main:test" }
        set { timestamp_ms: i64 = 0 }
        option { tool_name: String = None }
        option { topic_id: i64 = None }
        option { subagent_label: String = None }
        option { cron_job: String = None }
        option { prompt: String = None }
        option { response: String = None }
        computed { tool_args: Option<serde_json::Value> = None }
    }
}
