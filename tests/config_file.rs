// tests/config_file.rs
//
// The shipped config/analyzer.toml must parse and behave identically to
// the built-in seed tables.

use chrono::{Duration, Utc};
use semicon_news_analyzer::{AnalyzerConfig, Article, PriorityScorer};

#[test]
fn shipped_config_parses() {
    let cfg = AnalyzerConfig::load_from_file("config/analyzer.toml").expect("shipped config");
    assert!(!cfg.ai.enabled);
}

#[test]
fn shipped_config_matches_seed_scores() {
    let file_cfg = AnalyzerConfig::load_from_file("config/analyzer.toml").expect("shipped config");
    let seed_cfg = AnalyzerConfig::default_seed();

    let from_file = PriorityScorer::new(file_cfg.keywords, file_cfg.sources);
    let from_seed = PriorityScorer::new(seed_cfg.keywords, seed_cfg.sources);

    let now = Utc::now();
    let samples = [
        Article::new(
            "TSMC 3nm 공정 기술로 AI 칩 성능 30% 향상",
            "TSMC가 최신 3nm 공정 기술을 통해 AI 칩의 성능을 30% 향상시켰다고 발표했습니다.",
            "TechNews",
            Some(now - Duration::hours(2)),
        ),
        Article::new(
            "Samsung starts HBM4 mass production",
            "Samsung announced record HBM4 yields and a $5B expansion.",
            "Samsung Newsroom",
            Some(now - Duration::minutes(20)),
        ),
        Article::new("minor note", "nothing specific", "Unknown Blog", None),
    ];

    for a in &samples {
        assert_eq!(
            from_file.score_at(a, now).to_bits(),
            from_seed.score_at(a, now).to_bits(),
            "score diverged for: {}",
            a.title
        );
    }
}
