// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The LLM completion service consumed by `summarize_and_log`.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from an LLM completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("llm request failed: {0}")]
    Request(String),

    #[error("llm call timed out")]
    Timeout,

    #[error("llm returned no content")]
    EmptyResponse,
}

/// Adapter for `runtime.llm.complete(model, systemPrompt, userPrompt, { timeoutMs })`.
#[async_trait]
pub trait LlmAdapter: Send + Sync + 'static {
    async fn complete(&self, model: &str, system: &str, user: &str, timeout: Duration) -> Result<String, LlmError>;
}

/// An OpenAI-chat-completions-shaped HTTP client. Deliberately thin: the
/// LLM service is an external collaborator reached only through this
/// interface.
#[derive(Clone)]
pub struct HttpLlmAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpLlmAdapter {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.into(), api_key: api_key.into() }
    }
}

#[async_trait]
impl LlmAdapter for HttpLlmAdapter {
    async fn complete(&self, model: &str, system: &str, user: &str, timeout: Duration) -> Result<String, LlmError> {
        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": model,
                "messages": [
                    {"role": "system", "content": system},
                    {"role": "user", "content": user},
                ],
            }))
            .send();

        let response = tokio::time::timeout(timeout, request)
            .await
            .map_err(|_| LlmError::Timeout)?
            .map_err(|e| LlmError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Request(format!("llm returned {status}: {body}")));
        }

        let body: serde_json::Value =
            response.json().await.map_err(|e| LlmError::Request(e.to_string()))?;
        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or(LlmError::EmptyResponse)
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{LlmAdapter, LlmError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Debug, Clone)]
    pub struct CompleteCall {
        pub model: String,
        pub system: String,
        pub user: String,
    }

    /// Records calls and returns a fixed response (or error) set by the test.
    #[derive(Clone)]
    pub struct FakeLlmAdapter {
        calls: Arc<Mutex<Vec<CompleteCall>>>,
        response: Arc<Mutex<Result<String, String>>>,
    }

    impl Default for FakeLlmAdapter {
        fn default() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                response: Arc::new(Mutex::new(Ok("a summary".to_string()))),
            }
        }
    }

    impl FakeLlmAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(self, text: impl Into<String>) -> Self {
            *self.response.lock() = Ok(text.into());
            self
        }

        pub fn with_error(self, message: impl Into<String>) -> Self {
            *self.response.lock() = Err(message.into());
            self
        }

        pub fn calls(&self) -> Vec<CompleteCall> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl LlmAdapter for FakeLlmAdapter {
        async fn complete(&self, model: &str, system: &str, user: &str, _timeout: Duration) -> Result<String, LlmError> {
            self.calls.lock().push(CompleteCall {
                model: model.to_string(),
                system: system.to_string(),
                user: user.to_string(),
            });
            self.response.lock().clone().map_err(LlmError::Request)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{CompleteCall, FakeLlmAdapter};

#[cfg(test)]
#[path = "llm_tests.rs"]
mod tests;
