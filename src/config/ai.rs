// src/config/ai.rs
//! Generative backend configuration. `api_key = "ENV"` defers to the
//! `OPENAI_API_KEY` environment variable (a `.env` file is honored).

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key() -> String {
    "ENV".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub enabled: bool,
    /// Chat model name passed through to the backend.
    #[serde(default = "default_model")]
    pub model: String,
    /// "ENV" means: read from OPENAI_API_KEY.
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: default_model(),
            api_key: default_api_key(),
        }
    }
}

impl AiConfig {
    /// Resolve the effective API key, or `None` when unavailable.
    pub fn resolved_api_key(&self) -> Option<String> {
        let key = if self.api_key.trim().eq_ignore_ascii_case("env") {
            let _ = dotenvy::dotenv();
            std::env::var("OPENAI_API_KEY").ok()?
        } else {
            self.api_key.clone()
        };
        if key.trim().is_empty() {
            None
        } else {
            Some(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_key_passes_through() {
        let cfg = AiConfig {
            enabled: true,
            model: default_model(),
            api_key: "sk-test".into(),
        };
        assert_eq!(cfg.resolved_api_key().as_deref(), Some("sk-test"));
    }

    #[test]
    fn blank_key_is_none() {
        let cfg = AiConfig {
            enabled: true,
            model: default_model(),
            api_key: "   ".into(),
        };
        assert!(cfg.resolved_api_key().is_none());
    }
}
