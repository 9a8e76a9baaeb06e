// tests/scoring_properties.rs
//
// Black-box properties of the priority scorer: bounds, determinism,
// monotonicity, recency steps and the newsroom trust bonus.

use chrono::{Duration, Utc};
use semicon_news_analyzer::scoring::{recency_score, NEUTRAL_SCORE};
use semicon_news_analyzer::source_trust::{SourceTrustConfig, SourceTrustTable, TrustRow};
use semicon_news_analyzer::{Article, KeywordTables, PriorityScorer};

fn scorer() -> PriorityScorer {
    PriorityScorer::default_seed()
}

#[test]
fn all_scores_stay_in_bounds() {
    let s = scorer();
    let now = Utc::now();
    let cases = [
        Article::new("", "", "", None),
        Article::new("TSMC 2nm breakthrough", "Samsung HBM4 record 30% $5B", "Reuters Newsroom", Some(now)),
        Article::new(
            "최초 혁신 인수 합병 상장",
            "삼성 하이닉스 반도체 공정 소자 2nm 3nm HBM4 파운드리 인공지능 ".repeat(100),
            "Bloomberg Press Release Official",
            Some(now - Duration::minutes(10)),
        ),
        Article::new("x", "y", "Nowhere Gazette", Some(now - Duration::days(365))),
    ];
    for a in &cases {
        let score = s.score_at(a, now);
        assert!((0.0..=10.0).contains(&score), "out of bounds: {score}");
    }
}

#[test]
fn scoring_is_idempotent_bitwise() {
    let s = scorer();
    let now = Utc::now();
    let a = Article::new(
        "TSMC 3nm 공정 기술로 AI 칩 성능 30% 향상",
        "TSMC가 최신 3nm 공정 기술을 통해 AI 칩의 성능을 30% 향상시켰다고 발표했습니다.",
        "TechNews",
        Some(now - Duration::hours(2)),
    );
    assert_eq!(s.score_at(&a, now).to_bits(), s.score_at(&a, now).to_bits());
}

#[test]
fn extra_high_priority_keyword_never_decreases_total() {
    let s = scorer();
    let now = Utc::now();
    for body in ["plain report about nothing", "TSMC fab news", "삼성 반도체 발표"] {
        let base = Article::new("title", body, "TechNews", Some(now - Duration::hours(2)));
        let extended = Article::new(
            "title",
            format!("{body} breakthrough"),
            "TechNews",
            Some(now - Duration::hours(2)),
        );
        assert!(
            s.score_at(&extended, now) >= s.score_at(&base, now),
            "adding a keyword decreased the score for: {body}"
        );
    }
}

#[test]
fn recency_step_boundaries() {
    let now = Utc::now();
    assert_eq!(recency_score(Some(now - Duration::minutes(30)), now), 2.0);
    assert_eq!(recency_score(Some(now - Duration::hours(6)), now), 1.8);
    // 6.01 hours ago lands in the 24h band.
    assert_eq!(
        recency_score(Some(now - Duration::seconds(6 * 3600 + 36)), now),
        1.5
    );
    assert_eq!(recency_score(Some(now - Duration::hours(72)), now), 1.0);
    assert_eq!(recency_score(Some(now - Duration::hours(168)), now), 0.5);
    assert_eq!(recency_score(Some(now - Duration::hours(1000)), now), 0.2);
    assert_eq!(recency_score(None, now), 1.0);
}

#[test]
fn press_release_outranks_plain_source_up_to_cap() {
    let t = SourceTrustTable::default_seed();
    let plain = t.source_score("TSMC");
    let press = t.source_score("TSMC Press Release");
    assert!(press >= (plain + 1.5).min(3.5) - 1e-6);
    assert!(press <= 3.5);
}

#[test]
fn corrupted_trust_table_degrades_to_neutral() {
    // The never-raise contract: a NaN trust weight poisons the sum, and
    // the caller still gets the neutral 5.0 instead of a NaN or a
    // silently clamped 10.0.
    let cfg = SourceTrustConfig {
        trust: vec![TrustRow {
            pattern: "technews".into(),
            weight: f32::NAN,
        }],
    };
    let s = PriorityScorer::new(
        KeywordTables::default_seed(),
        SourceTrustTable::from_config(&cfg),
    );
    let now = Utc::now();
    let a = Article::new("Weekly roundup", "Nothing notable.", "TechNews", Some(now));
    assert_eq!(s.score_at(&a, now), NEUTRAL_SCORE);
}
