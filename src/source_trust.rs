// src/source_trust.rs
//! Source trust lookup: an ordered priority list of substring patterns.
//!
//! Lookup is a case-insensitive substring match over the rows in table
//! order; the first matching row wins, so overlapping patterns (e.g.
//! "AI Weekly" vs. a hypothetical "Weekly") resolve deterministically.
//! Unmatched sources fall back to 1.0. Corporate newsroom / press-release
//! sources get a flat +1.5 on top, capped together with trust at 3.5.

use serde::Deserialize;

pub const DEFAULT_TRUST: f32 = 1.0;
pub const NEWSROOM_BONUS: f32 = 1.5;
pub const SOURCE_SCORE_CAP: f32 = 3.5;

/// One ordered row of the `[[sources.trust]]` config table.
#[derive(Debug, Clone, Deserialize)]
pub struct TrustRow {
    pub pattern: String,
    pub weight: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceTrustConfig {
    #[serde(default)]
    pub trust: Vec<TrustRow>,
}

#[derive(Debug, Clone)]
pub struct SourceTrustTable {
    rows: Vec<(String, f32)>,
}

impl SourceTrustTable {
    pub fn from_config(cfg: &SourceTrustConfig) -> Self {
        Self {
            rows: cfg
                .trust
                .iter()
                .map(|r| (r.pattern.to_lowercase(), r.weight.clamp(1.0, 2.0)))
                .collect(),
        }
    }

    /// Seed rows in production order. Order is load-bearing: first match wins.
    pub fn default_seed() -> Self {
        let rows: &[(&str, f32)] = &[
            ("reuters", 2.0),
            ("로이터", 2.0),
            ("bloomberg", 2.0),
            ("블룸버그", 2.0),
            ("wall street journal", 1.8),
            ("wsj", 1.8),
            ("financial times", 1.8),
            ("ft", 1.8),
            ("techcrunch", 1.5),
            ("테크크런치", 1.5),
            ("the verge", 1.3),
            ("ars technica", 1.5),
            ("ee times", 1.7),
            ("semiconductor engineering", 1.7),
            ("전자신문", 1.6),
            ("한국경제", 1.4),
            ("매일경제", 1.4),
            ("ai weekly", 1.2),
            ("technews", 1.0),
        ];
        Self {
            rows: rows.iter().map(|(p, w)| (p.to_string(), *w)).collect(),
        }
    }

    /// Bare trust weight for a source name, without the newsroom bonus.
    pub fn trust_for(&self, source: &str) -> f32 {
        let folded = source.to_lowercase();
        for (pattern, weight) in &self.rows {
            if folded.contains(pattern.as_str()) {
                return *weight;
            }
        }
        DEFAULT_TRUST
    }

    /// Full source score: trust plus the newsroom bonus, capped at 3.5.
    /// clamp rather than min so a NaN weight propagates to the caller's
    /// finiteness check instead of being absorbed by the cap.
    pub fn source_score(&self, source: &str) -> f32 {
        let mut score = self.trust_for(source);
        if is_official_source(source) {
            score += NEWSROOM_BONUS;
        }
        score.clamp(0.0, SOURCE_SCORE_CAP)
    }
}

impl Default for SourceTrustTable {
    fn default() -> Self {
        Self::default_seed()
    }
}

/// Corporate-communications source: newsroom, press release, or an
/// "official" channel. Grants the trust bonus.
pub fn is_official_source(source: &str) -> bool {
    let folded = source.to_lowercase();
    folded.contains("newsroom") || folded.contains("press release") || folded.contains("official")
}

/// Stricter gate used by the scorer's tech-content bonus: only explicit
/// newsroom / press-release naming qualifies (not generic "official").
pub fn is_newsroom_source(source: &str) -> bool {
    let folded = source.to_lowercase();
    folded.contains("newsroom") || folded.contains("press release")
}
