// src/keywords.rs
//! Keyword tiers and pattern bonuses used by both the priority scorer and
//! the fallback summarizer.
//!
//! Three tiers:
//! - high-priority event keywords: flat +2.0 per distinct keyword present
//! - medium-priority keywords: flat +1.0
//! - domain/tech keywords: individually weighted (e.g. "2nm" → 5.0)
//!
//! All lookups are case-folded substring checks, presence-based (a keyword
//! contributes at most once per text, however often it repeats). Keys in
//! the tech table are stored case-folded; duplicate case variants from the
//! seed data collapse to the first-inserted weight.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Regex pattern bonuses applied on the case-folded text.
static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%|\d+퍼센트").expect("percent regex"));
static MONEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\d+|\d+달러|\d+억|\d+조").expect("money regex"));
static FIRST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"first|최초|first time|처음").expect("first regex"));
static RECORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"record|기록|최고|highest|lowest").expect("record regex"));

pub const PERCENT_BONUS: f32 = 1.0;
pub const MONEY_BONUS: f32 = 1.5;
pub const FIRST_BONUS: f32 = 2.0;
pub const RECORD_BONUS: f32 = 1.5;

pub const HIGH_PRIORITY_WEIGHT: f32 = 2.0;
pub const MEDIUM_PRIORITY_WEIGHT: f32 = 1.0;

/// TOML schema for the `[keywords]` config section.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordTablesConfig {
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
    /// Ordered rows so the table round-trips deterministically.
    #[serde(default)]
    pub tech: Vec<TechKeywordRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechKeywordRow {
    pub keyword: String,
    pub weight: f32,
}

/// Immutable, case-folded keyword tables. Built once at startup, read-only
/// afterwards; safe to share across threads.
#[derive(Debug, Clone)]
pub struct KeywordTables {
    high: Vec<String>,
    medium: Vec<String>,
    tech: Vec<(String, f32)>,
}

impl KeywordTables {
    pub fn from_config(cfg: &KeywordTablesConfig) -> Self {
        let mut tech: Vec<(String, f32)> = Vec::with_capacity(cfg.tech.len());
        for row in &cfg.tech {
            let key = row.keyword.to_lowercase();
            // First-inserted weight wins for case-variant duplicates.
            if !tech.iter().any(|(k, _)| *k == key) {
                tech.push((key, row.weight.max(0.0)));
            }
        }
        Self {
            high: cfg.high.iter().map(|k| k.to_lowercase()).collect(),
            medium: cfg.medium.iter().map(|k| k.to_lowercase()).collect(),
            tech,
        }
    }

    /// Seed tables mirroring the production configuration.
    pub fn default_seed() -> Self {
        let high = [
            "breakthrough",
            "revolutionary",
            "first time",
            "최초",
            "혁신",
            "merger",
            "acquisition",
            "인수",
            "합병",
            "partnership",
            "파트너십",
            "ipo",
            "상장",
            "earnings",
            "실적",
            "patent",
            "특허",
            "tsmc",
            "samsung",
            "intel",
            "nvidia",
            "amd",
            "qualcomm",
            "apple",
            "google",
            "삼성",
            "하이닉스",
        ];
        let medium = [
            "development",
            "개발",
            "launch",
            "출시",
            "announcement",
            "발표",
            "upgrade",
            "업그레이드",
            "expansion",
            "확장",
            "investment",
            "투자",
        ];
        // Core fabs and processes first, then nodes, memory, foundry, AI.
        let tech: &[(&str, f32)] = &[
            ("tsmc", 5.0),
            ("삼성", 5.0),
            ("samsung", 5.0),
            ("하이닉스", 5.0),
            ("sk hynix", 5.0),
            ("hynix", 4.8),
            ("반도체", 5.0),
            ("semiconductor", 5.0),
            ("공정", 4.5),
            ("process", 4.3),
            ("manufacturing", 4.3),
            ("소자", 4.8),
            ("device", 4.5),
            ("chip", 4.2),
            ("2nm", 5.0),
            ("1nm", 5.0),
            ("3nm", 4.8),
            ("5nm", 4.2),
            ("7nm", 3.8),
            ("gaa", 4.2),
            ("finfet", 3.8),
            ("hbm", 4.5),
            ("hbm4", 5.0),
            ("hbm3", 4.5),
            ("메모리", 4.0),
            ("memory", 4.0),
            ("dram", 4.0),
            ("nand", 4.0),
            ("flash", 3.8),
            ("파운드리", 4.5),
            ("foundry", 4.5),
            ("ai", 3.8),
            ("인공지능", 3.8),
            ("머신러닝", 3.2),
            ("machine learning", 3.2),
            ("quantum", 3.8),
            ("양자", 3.8),
            ("neuromorphic", 3.5),
            ("edge computing", 3.0),
            ("엣지 컴퓨팅", 3.0),
            ("autonomous", 3.2),
            ("자율주행", 3.2),
            ("iot", 2.8),
            ("blockchain", 2.5),
        ];
        Self {
            high: high.iter().map(|s| s.to_string()).collect(),
            medium: medium.iter().map(|s| s.to_string()).collect(),
            tech: tech.iter().map(|(k, w)| (k.to_string(), *w)).collect(),
        }
    }

    /// Keyword/pattern score of a text: presence-based sums over all three
    /// tiers plus the pattern bonuses. Unbounded here; callers cap it.
    pub fn text_score(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let folded = text.to_lowercase();
        let mut score = 0.0;

        for kw in &self.high {
            if folded.contains(kw.as_str()) {
                score += HIGH_PRIORITY_WEIGHT;
            }
        }
        for kw in &self.medium {
            if folded.contains(kw.as_str()) {
                score += MEDIUM_PRIORITY_WEIGHT;
            }
        }
        for (kw, w) in &self.tech {
            if folded.contains(kw.as_str()) {
                score += w;
            }
        }

        if PERCENT_RE.is_match(&folded) {
            score += PERCENT_BONUS;
        }
        if MONEY_RE.is_match(&folded) {
            score += MONEY_BONUS;
        }
        if FIRST_RE.is_match(&folded) {
            score += FIRST_BONUS;
        }
        if RECORD_RE.is_match(&folded) {
            score += RECORD_BONUS;
        }

        score
    }

    /// Count distinct tech keywords present in `text`.
    pub fn tech_hits(&self, text: &str) -> usize {
        let folded = text.to_lowercase();
        self.tech
            .iter()
            .filter(|(kw, _)| folded.contains(kw.as_str()))
            .count()
    }

    /// Iterate tech keywords in table order (used by trend analytics).
    pub fn tech_keywords(&self) -> impl Iterator<Item = &str> {
        self.tech.iter().map(|(k, _)| k.as_str())
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::default_seed()
    }
}
