// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `exec_script`'s sandboxed subprocess runner: denylist + executability
//! checks ahead of spawn, then a timed wait.

use std::path::Path;
use std::time::Duration;

use thiserror::Error;

/// Path prefixes `exec_script` refuses to run, regardless of permission
/// bits. Process isolation stops here — there is no sandbox/jail.
pub const DENYLIST_PREFIXES: &[&str] = &["/etc/", "/bin/", "/sbin/", "/usr/bin/", "/usr/sbin/"];

/// The default per-script timeout.
pub const EXEC_SCRIPT_TIMEOUT: Duration = Duration::from_secs(30);

/// The default LLM completion timeout.
pub const LLM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("script path {0:?} is denylisted")]
    Denylisted(String),

    #[error("script path {0:?} is not an executable regular file")]
    NotExecutable(String),

    #[error("{0} timed out")]
    TimedOut(&'static str),

    #[error("failed to spawn: {0}")]
    Spawn(String),
}

/// `true` if `path` starts with one of [`DENYLIST_PREFIXES`].
pub fn is_denylisted(path: &str) -> bool {
    DENYLIST_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// `true` if `path` is a regular file with at least one executable bit set.
///
/// Non-Unix targets have no notion of an executable bit; `exec_script`
/// is Unix-only by construction there.
pub fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else { return false };
    if !metadata.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        false
    }
}

/// Validates `path` against the denylist and executability before a
/// caller is allowed to spawn it.
pub fn validate_script_path(path: &str) -> Result<(), SubprocessError> {
    if is_denylisted(path) {
        return Err(SubprocessError::Denylisted(path.to_string()));
    }
    if !is_executable(Path::new(path)) {
        return Err(SubprocessError::NotExecutable(path.to_string()));
    }
    Ok(())
}

/// Runs `cmd` to completion with stdout/stderr captured separately,
/// failing with [`SubprocessError::TimedOut`] if `timeout` elapses
/// first. `label` is used only in the timeout error message.
pub async fn run_with_timeout(
    mut cmd: tokio::process::Command,
    timeout: Duration,
    label: &'static str,
) -> Result<std::process::Output, SubprocessError> {
    cmd.stdout(std::process::Stdio::piped());
    cmd.stderr(std::process::Stdio::piped());
    cmd.stdin(std::process::Stdio::null());

    let child = cmd.spawn().map_err(|e| SubprocessError::Spawn(e.to_string()))?;
    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(SubprocessError::Spawn(e.to_string())),
        Err(_) => Err(SubprocessError::TimedOut(label)),
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
