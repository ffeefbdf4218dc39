// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The last-main-session-key's disk-backed store. A named component
//! with a single reader/writer API, deliberately not implicit static
//! state.

use std::path::PathBuf;

use async_trait::async_trait;

/// The default persisted-state location.
pub const DEFAULT_SESSION_FILE: &str = "/tmp/hooks-last-main-session.txt";

/// Reads and writes the last-known main-agent session key.
///
/// Last-writer-wins under concurrent writes.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    async fn read(&self) -> Option<String>;
    async fn write(&self, session_key: &str);
}

/// A single UTF-8 file holding the last main-agent session key.
/// Missing or unreadable is treated as "unknown" (`None`), never an error.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_FILE)
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn read(&self) -> Option<String> {
        let contents = tokio::fs::read_to_string(&self.path).await.ok()?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    async fn write(&self, session_key: &str) {
        if let Err(e) = tokio::fs::write(&self.path, session_key).await {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist last main session key");
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::SessionStore;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// An in-memory session store for tests.
    #[derive(Clone, Default)]
    pub struct MemorySessionStore {
        value: Arc<Mutex<Option<String>>>,
    }

    impl MemorySessionStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl SessionStore for MemorySessionStore {
        async fn read(&self) -> Option<String> {
            self.value.lock().clone()
        }

        async fn write(&self, session_key: &str) {
            *self.value.lock() = Some(session_key.to_string());
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::MemorySessionStore;

#[cfg(test)]
#[path = "session_store_tests.rs"]
mod tests;
