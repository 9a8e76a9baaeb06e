// src/lib.rs
// Public library surface: the scoring and summarization core consumed by
// the ingestion pipeline.

pub mod ai;
pub mod article;
pub mod config;
pub mod digest;
pub mod keywords;
pub mod scoring;
pub mod source_trust;
pub mod trends;

// ---- Re-exports for stable public API ----
pub use crate::ai::{build_completer, Completion, CompletionError, CompletionRequest, DynCompleter};
pub use crate::article::{Article, ScoredArticle};
pub use crate::config::AnalyzerConfig;
pub use crate::digest::ContentDigester;
pub use crate::keywords::KeywordTables;
pub use crate::scoring::PriorityScorer;
pub use crate::source_trust::SourceTrustTable;
pub use crate::trends::{analyze_trends, TrendReport};

/// Build the scorer and digester pair from one configuration.
pub fn build_analyzer(config: &AnalyzerConfig) -> (PriorityScorer, ContentDigester) {
    let completer = build_completer(&config.ai);
    let scorer = PriorityScorer::new(config.keywords.clone(), config.sources.clone());
    let digester = ContentDigester::new(config.keywords.clone(), completer);
    (scorer, digester)
}
