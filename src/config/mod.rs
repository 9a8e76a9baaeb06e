// src/config/mod.rs
//! Analyzer configuration: keyword tables, ordered source-trust rows and
//! the optional generative backend, loadable from one TOML file.
//!
//! Tables are plain values constructed once and passed into the scorer and
//! digester at build time; there is no hidden global state, so tests can
//! substitute their own tables freely.

pub mod ai;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::keywords::{KeywordTables, KeywordTablesConfig};
use crate::source_trust::{SourceTrustConfig, SourceTrustTable};
use ai::AiConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";
pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";

/// TOML schema of `config/analyzer.toml`.
#[derive(Debug, Clone, Deserialize)]
struct ConfigRoot {
    keywords: KeywordTablesConfig,
    sources: SourceTrustConfig,
    #[serde(default)]
    ai: AiConfig,
}

/// Fully built configuration handed to the core components.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub keywords: KeywordTables,
    pub sources: SourceTrustTable,
    pub ai: AiConfig,
}

impl AnalyzerConfig {
    /// Seed configuration mirroring `config/analyzer.toml`.
    pub fn default_seed() -> Self {
        Self {
            keywords: KeywordTables::default_seed(),
            sources: SourceTrustTable::default_seed(),
            ai: AiConfig::default(),
        }
    }

    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let root: ConfigRoot = toml::from_str(toml_str)?;
        Ok(Self {
            keywords: KeywordTables::from_config(&root.keywords),
            sources: SourceTrustTable::from_config(&root.sources),
            ai: root.ai,
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            anyhow::anyhow!(
                "failed to read analyzer config at {}: {}",
                path.as_ref().display(),
                e
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `ANALYZER_CONFIG_PATH` (or the default path), falling back
    /// to the built-in seed when no file is present.
    pub fn load() -> Self {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        match Self::load_from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::debug!(error = %e, "no analyzer config file, using built-in seed");
                Self::default_seed()
            }
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::default_seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[keywords]
high = ["breakthrough"]
medium = ["launch"]

[[keywords.tech]]
keyword = "TSMC"
weight = 5.0

[[keywords.tech]]
keyword = "HBM4"
weight = 5.0

[[sources.trust]]
pattern = "Reuters"
weight = 2.0

[[sources.trust]]
pattern = "TechNews"
weight = 1.0

[ai]
enabled = false
"#;

    #[test]
    fn toml_round_trip() {
        let cfg = AnalyzerConfig::from_toml_str(TEST_TOML).expect("parse");
        assert!((cfg.keywords.text_score("TSMC breakthrough") - 7.0).abs() < 1e-6);
        assert!((cfg.sources.trust_for("Reuters Asia") - 2.0).abs() < 1e-6);
        assert!(!cfg.ai.enabled);
    }

    #[test]
    fn missing_sections_fail_loud() {
        assert!(AnalyzerConfig::from_toml_str("[keywords]\nhigh = []").is_err());
    }
}
