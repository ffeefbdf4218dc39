// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of lifecycle points rules can bind to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named lifecycle event at which rules may fire.
///
/// The set is closed: unknown points are rejected at config load
/// (see [`crate::error::ConfigError::UnknownPoint`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HookPoint {
    TurnPre,
    TurnPost,
    TurnToolPre,
    TurnToolPost,
    SubagentSpawnPre,
    SubagentToolPre,
    SubagentToolPost,
    SubagentPost,
    CronPre,
    CronPost,
}

impl HookPoint {
    /// All known hook points, in no particular priority order.
    pub fn all() -> &'static [HookPoint] {
        &[
            HookPoint::TurnPre,
            HookPoint::TurnPost,
            HookPoint::TurnToolPre,
            HookPoint::TurnToolPost,
            HookPoint::SubagentSpawnPre,
            HookPoint::SubagentToolPre,
            HookPoint::SubagentToolPost,
            HookPoint::SubagentPost,
            HookPoint::CronPre,
            HookPoint::CronPost,
        ]
    }
}

crate::simple_display! {
    HookPoint {
        TurnPre => "turn:pre",
        TurnPost => "turn:post",
        TurnToolPre => "turn:tool:pre",
        TurnToolPost => "turn:tool:post",
        SubagentSpawnPre => "subagent:spawn:pre",
        SubagentToolPre => "subagent:tool:pre",
        SubagentToolPost => "subagent:tool:post",
        SubagentPost => "subagent:post",
        CronPre => "cron:pre",
        CronPost => "cron:post",
    }
}

impl FromStr for HookPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "turn:pre" => Ok(HookPoint::TurnPre),
            "turn:post" => Ok(HookPoint::TurnPost),
            "turn:tool:pre" => Ok(HookPoint::TurnToolPre),
            "turn:tool:post" => Ok(HookPoint::TurnToolPost),
            "subagent:spawn:pre" => Ok(HookPoint::SubagentSpawnPre),
            "subagent:tool:pre" => Ok(HookPoint::SubagentToolPre),
            "subagent:tool:post" => Ok(HookPoint::SubagentToolPost),
            "subagent:post" => Ok(HookPoint::SubagentPost),
            "cron:pre" => Ok(HookPoint::CronPre),
            "cron:post" => Ok(HookPoint::CronPost),
            other => Err(other.to_string()),
        }
    }
}

impl TryFrom<String> for HookPoint {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HookPoint> for String {
    fn from(point: HookPoint) -> Self {
        point.to_string()
    }
}

#[cfg(test)]
#[path = "hook_point_tests.rs"]
mod tests;
