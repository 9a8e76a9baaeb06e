// src/ai.rs
//! Generative-completion seam: provider abstraction used by the digester
//! for summarization and translation.
//!
//! One call, no retries: a single failure is reported as a typed
//! `CompletionError` and the caller falls back to the deterministic path.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::config::ai::AiConfig;

/// A single completion request. `system` carries the fixed prompt,
/// `user` the article text.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Why a completion did not produce text. Inspectable so the digester can
/// log the reason before falling back.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("no generative backend configured")]
    Disabled,
    #[error("missing API key")]
    MissingKey,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("malformed or empty response")]
    EmptyResponse,
}

#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
    /// Provider name for diagnostics.
    fn provider_name(&self) -> &'static str;
}

pub type DynCompleter = Arc<dyn Completion>;

/// Build a completer from config. Disabled config or a missing key yields
/// the disabled completer rather than an error; translation and
/// summarization must keep working without a backend.
pub fn build_completer(cfg: &AiConfig) -> DynCompleter {
    if !cfg.enabled {
        return Arc::new(DisabledCompleter);
    }
    match cfg.resolved_api_key() {
        Some(key) => Arc::new(OpenAiCompleter::new(key, cfg.model.clone())),
        None => {
            warn!("generative backend enabled but no API key resolved; running without it");
            Arc::new(DisabledCompleter)
        }
    }
}

// ------------------------------------------------------------
// OpenAI provider
// ------------------------------------------------------------

pub struct OpenAiCompleter {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiCompleter {
    pub fn new(api_key: String, model: String) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("semicon-news-analyzer/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(10))
            .build()
            .expect("reqwest client");
        Self {
            http,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl Completion for OpenAiCompleter {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        if self.api_key.is_empty() {
            return Err(CompletionError::MissingKey);
        }

        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            messages: Vec<Msg<'a>>,
            temperature: f32,
            max_tokens: u32,
        }
        #[derive(Deserialize)]
        struct Resp {
            choices: Vec<Choice>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChoiceMsg,
        }
        #[derive(Deserialize)]
        struct ChoiceMsg {
            content: String,
        }

        let req = Req {
            model: &self.model,
            messages: vec![
                Msg {
                    role: "system",
                    content: &request.system,
                },
                Msg {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let resp = self
            .http
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CompletionError::Status(resp.status().as_u16()));
        }
        let body: Resp = resp
            .json()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;
        let content = body
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();
        if content.is_empty() {
            Err(CompletionError::EmptyResponse)
        } else {
            Ok(content)
        }
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

// ------------------------------------------------------------
// Disabled + mock providers
// ------------------------------------------------------------

/// Always reports `Disabled`; used when no backend credential exists.
pub struct DisabledCompleter;

#[async_trait]
impl Completion for DisabledCompleter {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::Disabled)
    }
    fn provider_name(&self) -> &'static str {
        "disabled"
    }
}

/// Deterministic mock for tests: either a fixed reply or a fixed failure.
#[derive(Clone)]
pub struct MockCompleter {
    pub reply: Option<String>,
}

impl MockCompleter {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
        }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl Completion for MockCompleter {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(CompletionError::Transport("mock failure".into())),
        }
    }
    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
