// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ag-adapters: trait + real/fake implementations for the engine's
//! external collaborators — the outbound messaging channel, the LLM
//! completion service, the last-main-session disk store, and
//! `exec_script`'s sandboxed subprocess runner.

pub mod channel;
pub mod llm;
pub mod notifier;
pub mod session_store;
pub mod subprocess;

pub use channel::{ChannelAdapter, ChannelError, ChannelTarget, TelegramChannelAdapter};
pub use llm::{HttpLlmAdapter, LlmAdapter, LlmError};
pub use notifier::Notifier;
pub use session_store::{FileSessionStore, SessionStore};
pub use subprocess::{run_with_timeout, SubprocessError};

#[cfg(any(test, feature = "test-support"))]
pub use channel::FakeChannelAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use llm::FakeLlmAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use session_store::MemorySessionStore;
