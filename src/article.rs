// src/article.rs
//! Article input record shared by the scorer, digester and trend analytics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single news article as handed over by the ingestion pipeline.
///
/// The core never mutates an `Article`; scoring and summarization read it
/// and return derived values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub title: String,
    pub content: String,
    /// Free-form source name, e.g. "Reuters" or "Samsung Newsroom".
    pub source: String,
    /// Publication time. `None` means the feed did not carry one.
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        source: impl Into<String>,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            source: source.into(),
            published_at,
        }
    }

    /// Build from a raw RFC 3339 timestamp string. Malformed timestamps are
    /// treated as "published just now" rather than rejected.
    pub fn with_published_str(
        title: impl Into<String>,
        content: impl Into<String>,
        source: impl Into<String>,
        published_at: &str,
    ) -> Self {
        let parsed = match DateTime::parse_from_rfc3339(published_at) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(e) => {
                warn!(error = %e, raw = published_at, "unparseable publish time, using now");
                Utc::now()
            }
        };
        Self::new(title, content, source, Some(parsed))
    }
}

/// An article paired with its computed priority, as persisted by the
/// ingestion pipeline and fed back into batch trend analytics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredArticle {
    pub article: Article,
    pub priority: f32,
}
