// src/trends.rs
//! Batch trend analytics over scored articles: keyword frequencies,
//! source distribution and average priority.

use std::collections::HashMap;

use serde::Serialize;

use crate::article::ScoredArticle;
use crate::keywords::KeywordTables;

const TOP_KEYWORDS: usize = 10;

/// Aggregate view over a batch of scored articles.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TrendReport {
    /// Top tech keywords by article count, descending (ties by keyword).
    pub top_keywords: Vec<(String, usize)>,
    pub source_distribution: HashMap<String, usize>,
    pub total_articles: usize,
    pub average_priority: f32,
}

/// Keyword counting is presence-per-article: an article mentioning a
/// keyword many times still counts once. Empty input yields a zeroed
/// report.
pub fn analyze_trends(articles: &[ScoredArticle], keywords: &KeywordTables) -> TrendReport {
    if articles.is_empty() {
        return TrendReport::default();
    }

    let mut keyword_counts: HashMap<&str, usize> = HashMap::new();
    let mut source_distribution: HashMap<String, usize> = HashMap::new();
    let mut priority_sum = 0.0f32;

    for scored in articles {
        let text = format!("{} {}", scored.article.title, scored.article.content).to_lowercase();
        for keyword in keywords.tech_keywords() {
            if text.contains(keyword) {
                *keyword_counts.entry(keyword).or_insert(0) += 1;
            }
        }

        let source = if scored.article.source.is_empty() {
            "Unknown".to_string()
        } else {
            scored.article.source.clone()
        };
        *source_distribution.entry(source).or_insert(0) += 1;
        priority_sum += scored.priority;
    }

    let mut top_keywords: Vec<(String, usize)> = keyword_counts
        .into_iter()
        .map(|(k, c)| (k.to_string(), c))
        .collect();
    // Deterministic order: count descending, then keyword ascending.
    top_keywords.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_keywords.truncate(TOP_KEYWORDS);

    TrendReport {
        top_keywords,
        source_distribution,
        total_articles: articles.len(),
        average_priority: priority_sum / articles.len() as f32,
    }
}
