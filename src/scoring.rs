// src/scoring.rs
//! Priority scoring: maps an article to a bounded relevance score in
//! [0, 10] from five independently capped signals, so no single signal
//! can dominate the total.
//!
//! Components:
//! 1. title keyword score × 1.5, capped at 3.0
//! 2. content keyword score × 0.8, capped at 3.0
//! 3. source trust (newsroom bonus included), capped at 3.5
//! 4. recency step function of hours since publication, max 2.0
//! 5. newsroom tech bonus: 0.5 + min(distinct tech hits × 0.25, 1.0)
//!
//! The sum is clamped at 10.0. Scoring never fails: an internal error
//! degrades to a neutral 5.0 and a warning.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::article::Article;
use crate::keywords::KeywordTables;
use crate::source_trust::{is_newsroom_source, SourceTrustTable};

pub const MAX_SCORE: f32 = 10.0;
/// Returned when score computation itself fails.
pub const NEUTRAL_SCORE: f32 = 5.0;

const TITLE_FACTOR: f32 = 1.5;
const TITLE_CAP: f32 = 3.0;
const CONTENT_FACTOR: f32 = 0.8;
const CONTENT_CAP: f32 = 3.0;
const NEWSROOM_BASE_BONUS: f32 = 0.5;
const TECH_BONUS_PER_HIT: f32 = 0.25;
const TECH_BONUS_CAP: f32 = 1.0;

/// Short anonymous id for log lines; raw titles never reach the logs.
fn anon_id(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Stateless scorer over immutable keyword and source-trust tables.
/// Safe to share across threads; every call is independent.
#[derive(Debug, Clone)]
pub struct PriorityScorer {
    keywords: KeywordTables,
    sources: SourceTrustTable,
}

impl PriorityScorer {
    pub fn new(keywords: KeywordTables, sources: SourceTrustTable) -> Self {
        Self { keywords, sources }
    }

    /// Scorer with the production seed tables.
    pub fn default_seed() -> Self {
        Self::new(KeywordTables::default_seed(), SourceTrustTable::default_seed())
    }

    pub fn keywords(&self) -> &KeywordTables {
        &self.keywords
    }

    /// Score against the wall clock. Never raises; internal failures
    /// degrade to the neutral default.
    pub fn score(&self, article: &Article) -> f32 {
        self.score_at(article, Utc::now())
    }

    /// Score with an explicit "now" for deterministic recency.
    pub fn score_at(&self, article: &Article, now: DateTime<Utc>) -> f32 {
        match self.try_score(article, now) {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, id = %anon_id(&article.title), "priority scoring failed, using neutral default");
                NEUTRAL_SCORE
            }
        }
    }

    fn try_score(&self, article: &Article, now: DateTime<Utc>) -> anyhow::Result<f32> {
        let title_score = (self.keywords.text_score(&article.title) * TITLE_FACTOR).min(TITLE_CAP);
        let content_score =
            (self.keywords.text_score(&article.content) * CONTENT_FACTOR).min(CONTENT_CAP);
        let source_score = self.sources.source_score(&article.source);
        let recency_score = recency_score(article.published_at, now);

        let mut total = title_score + content_score + source_score + recency_score;

        if is_newsroom_source(&article.source) {
            total += NEWSROOM_BASE_BONUS;
            let combined = format!("{} {}", article.title, article.content);
            let hits = self.keywords.tech_hits(&combined);
            if hits > 0 {
                let tech_bonus = (hits as f32 * TECH_BONUS_PER_HIT).min(TECH_BONUS_CAP);
                debug!(hits, tech_bonus, "newsroom tech bonus");
                total += tech_bonus;
            }
        }

        // NaN slips through min/max (NaN.min(10.0) is 10.0), so reject
        // non-finite sums before clamping.
        if !total.is_finite() {
            anyhow::bail!("non-finite score from table weights");
        }

        let final_score = total.min(MAX_SCORE).max(0.0);
        debug!(
            id = %anon_id(&article.title),
            title_score,
            content_score,
            source_score,
            recency_score,
            final_score,
            "priority computed"
        );
        Ok(final_score)
    }

    /// Keyword/pattern score of a raw text, exposed for reuse by the
    /// fallback summarizer's sentence ranking.
    pub fn text_score(&self, text: &str) -> f32 {
        self.keywords.text_score(text)
    }
}

/// Monotonically non-increasing step function of elapsed hours.
/// Missing publish time scores the neutral 1.0.
pub fn recency_score(published_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f32 {
    let Some(published) = published_at else {
        return 1.0;
    };
    let hours = (now - published).num_seconds() as f64 / 3600.0;
    if hours <= 1.0 {
        2.0
    } else if hours <= 6.0 {
        1.8
    } else if hours <= 24.0 {
        1.5
    } else if hours <= 72.0 {
        1.0
    } else if hours <= 168.0 {
        0.5
    } else {
        0.2
    }
}
