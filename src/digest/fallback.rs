// src/digest/fallback.rs
//! Deterministic template summarization, used when no generative backend
//! is configured or its call fails.
//!
//! Output is five labeled sections in fixed order: industry impact,
//! company/market analysis, quantified metrics, career relevance, and an
//! actionable interview takeaway. Every section is emitted whenever at
//! least one sentence survives filtering; extraction gaps fall back to
//! generic narrative rather than dropping the section.

use crate::digest::extract::{
    extract_companies, extract_numbers, extract_tech_terms, split_sentences,
};
use crate::keywords::KeywordTables;

pub const SECTION_IMPACT: &str = "💼 **산업 동향 & 기술 이해**";
pub const SECTION_MARKET: &str = "🏭 **주요 기업 분석 & 취업 시장**";
pub const SECTION_METRICS: &str = "📈 **구체적 성과 지표**";
pub const SECTION_CAREER: &str = "🎯 **커리어 연관성**";
pub const SECTION_TAKEAWAY: &str = "💡 **면접 활용 포인트**";

/// How many leading sentences are ranked for the impact narrative.
const RANKED_SENTENCES: usize = 8;
/// Whole-summary budget is `max_length * 2.5` chars.
const LENGTH_FACTOR: f32 = 2.5;

/// Char-safe prefix (inputs mix Hangul and ASCII).
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Build the five-section summary. Returns the first `max_length` chars of
/// raw content when no sentence survives filtering.
pub fn summarize(content: &str, max_length: usize, keywords: &KeywordTables) -> String {
    let sentences = split_sentences(content);
    if sentences.is_empty() {
        return truncate_chars(content, max_length);
    }

    let companies = extract_companies(content);
    let numbers = extract_numbers(content);
    let tech_terms = extract_tech_terms(content);

    // Rank the first 8 sentences with the same keyword/pattern scoring the
    // priority scorer uses.
    let mut ranked: Vec<(f32, &str)> = sentences
        .iter()
        .take(RANKED_SENTENCES)
        .map(|s| (keywords.text_score(s), s.as_str()))
        .collect();
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut parts: Vec<String> = Vec::with_capacity(5);
    parts.push(impact_section(&ranked));
    parts.push(market_section(&companies, &tech_terms));
    parts.push(metrics_section(&numbers, &sentences));
    parts.push(career_section(&ranked, content));
    parts.push(takeaway_section(&sentences, &companies));

    let summary = parts.join("\n");
    let budget = (max_length as f32 * LENGTH_FACTOR) as usize;
    if summary.chars().count() > budget {
        format!("{}...", truncate_chars(&summary, budget))
    } else {
        summary
    }
}

fn impact_section(ranked: &[(f32, &str)]) -> String {
    let core: Vec<&str> = ranked.iter().take(2).map(|(_, s)| *s).collect();
    let core_content = truncate_chars(&core.join(". "), 200);
    format!(
        "{SECTION_IMPACT}\n{core_content}. 이는 반도체 산업의 최신 기술 트렌드를 보여주는 중요한 발전입니다.\n\n"
    )
}

fn market_section(companies: &[String], tech_terms: &[String]) -> String {
    let mut entities: Vec<&str> = Vec::new();
    entities.extend(companies.iter().take(2).map(String::as_str));
    entities.extend(tech_terms.iter().take(2).map(String::as_str));
    let entity_desc = if entities.is_empty() {
        "주요 반도체 기업".to_string()
    } else {
        entities[..entities.len().min(4)].join(", ")
    };
    format!(
        "{SECTION_MARKET}\n{entity_desc}와 관련된 기업들이 주도하는 기술 혁신으로, 관련 분야 취업 시장에 새로운 기회를 제공할 것으로 예상됩니다.\n\n"
    )
}

fn metrics_section(numbers: &[String], sentences: &[String]) -> String {
    if numbers.is_empty() {
        return format!(
            "{SECTION_METRICS}\n구체적인 수치는 공개되지 않았으나, 업계 동향 파악의 참고 자료로 활용할 수 있습니다.\n\n"
        );
    }

    // Pair each number with a meaning classified from its source sentence.
    let mut descriptions: Vec<String> = Vec::new();
    for num in numbers.iter().take(3) {
        if let Some(sentence) = sentences.iter().find(|s| s.contains(num.as_str())) {
            descriptions.push(classify_number(num, sentence));
        }
    }

    if descriptions.is_empty() {
        format!(
            "{SECTION_METRICS}\n{} 등 핵심 수치들이 발표되어 면접에서 활용 가능합니다.\n\n",
            numbers[..numbers.len().min(3)].join(", ")
        )
    } else {
        format!(
            "{SECTION_METRICS}\n{} - 이러한 구체적 수치들은 면접에서 기술 트렌드와 시장 동향 이해도를 보여주는 중요한 데이터입니다.\n\n",
            descriptions.join(", ")
        )
    }
}

fn career_section(ranked: &[(f32, &str)], content: &str) -> String {
    let insight = ranked
        .get(1)
        .or_else(|| ranked.first())
        .map(|(_, s)| *s)
        .unwrap_or_default();
    let insight = truncate_chars(insight, 100);
    let skills = suggest_skills(content);
    format!(
        "{SECTION_CAREER}\n{insight}. 이러한 변화로 {skills} 등의 역량을 갖춘 인재 수요가 증가할 것으로 예상됩니다. 관련 자격증 취득이나 프로젝트 경험을 쌓는 것이 유리합니다.\n\n"
    )
}

fn takeaway_section(sentences: &[String], companies: &[String]) -> String {
    let key_point = truncate_chars(&sentences[0], 80);
    let company = companies
        .first()
        .map(String::as_str)
        .unwrap_or("해당 기업");
    let example = format!(
        "최근 {company}의 발표를 보면 {}는 매우 중요한 의미를 가집니다",
        key_point.to_lowercase()
    );
    format!(
        "{SECTION_TAKEAWAY}\n\"{example}. 이러한 기술 발전이 업계 전반에 미치는 영향을 고려할 때, 저는...\"와 같은 방식으로 최신 동향에 대한 이해도를 어필할 수 있습니다. 기술의 파급효과와 본인의 관련 경험을 연결하여 답변하세요.\n"
    )
}

/// Suggest up to two skill areas from keyword hits in the full content.
fn suggest_skills(content: &str) -> String {
    let folded = content.to_lowercase();
    let mut skills: Vec<&str> = Vec::new();
    if ["ai", "인공지능", "machine learning"]
        .iter()
        .any(|k| folded.contains(k))
    {
        skills.push("AI/ML 관련 프로그래밍(Python, TensorFlow)");
    }
    if ["반도체", "chip", "칩"].iter().any(|k| folded.contains(k)) {
        skills.push("반도체 설계 도구(Cadence, Synopsys) 경험");
    }
    if ["클라우드", "cloud", "데이터센터"]
        .iter()
        .any(|k| folded.contains(k))
    {
        skills.push("클라우드 플랫폼(AWS, Azure) 활용 능력");
    }
    if skills.is_empty() {
        "관련 기술 스택".to_string()
    } else {
        skills[..skills.len().min(2)].join(", ")
    }
}

fn sentence_has_any(sentence_folded: &str, keys: &[&str]) -> bool {
    keys.iter().any(|k| sentence_folded.contains(k))
}

/// Classify what a number means from keywords near it in its sentence.
fn classify_number(num: &str, sentence: &str) -> String {
    let folded = sentence.to_lowercase();

    if num.contains('%') || num.contains("퍼센트") {
        return if sentence_has_any(&folded, &["전력", "효율", "소비", "절약", "소모"]) {
            format!("전력 효율성 {num} 개선")
        } else if sentence_has_any(&folded, &["대역폭", "전송", "처리 속도", "빠른"]) {
            format!("데이터 처리 속도 {num} 향상")
        } else if sentence_has_any(&folded, &["성능", "향상", "속도"]) {
            format!("성능 {num} 향상")
        } else if sentence_has_any(&folded, &["용량", "메모리", "저장", "확장"]) {
            format!("용량 {num} 확장")
        } else if sentence_has_any(&folded, &["시장", "점유율", "매출"]) {
            format!("시장 점유율 {num} 증가")
        } else {
            format!("{num} 성능 개선")
        };
    }

    let num_lower = num.to_lowercase();
    if num_lower.contains("nm") || num.contains("나노") {
        return format!("{num} 미세 공정 기술");
    }

    let num_upper = num.to_uppercase();
    if ["GB", "TB", "MB"].iter().any(|u| num_upper.contains(u)) {
        return if sentence_has_any(&folded, &["메모리", "저장", "용량"]) {
            format!("{num} 메모리 용량")
        } else if sentence_has_any(&folded, &["대역폭", "전송", "속도"]) {
            format!("{num} 데이터 전송 속도")
        } else {
            format!("{num} 용량 사양")
        };
    }

    if ["GHZ", "MHZ"].iter().any(|u| num_upper.contains(u)) {
        return format!("{num} 동작 주파수");
    }

    if sentence_has_any(&folded, &["년", "월", "분기", "양산", "출시", "예정"]) {
        format!("{num} 출시/양산 일정")
    } else if sentence_has_any(&folded, &["억", "조", "달러", "원", "투자", "예산", "비용"]) {
        format!("{num} 투자 규모")
    } else if sentence_has_any(&folded, &["칩", "코어", "트랜지스터"]) {
        format!("{num} 하드웨어 사양")
    } else {
        format!("{num} 핵심 수치")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> KeywordTables {
        KeywordTables::default_seed()
    }

    #[test]
    fn all_five_sections_present() {
        let out = summarize(
            "TSMC announced 30% performance improvement and $5B investment.",
            400,
            &tables(),
        );
        for label in [
            SECTION_IMPACT,
            SECTION_MARKET,
            SECTION_METRICS,
            SECTION_CAREER,
            SECTION_TAKEAWAY,
        ] {
            assert!(out.contains(label), "missing section {label}");
        }
        assert!(out.contains("30% 성능 개선"));
        assert!(out.contains("$5B 핵심 수치"));
        assert!(out.chars().count() <= 1000);
    }

    #[test]
    fn percent_near_power_words() {
        let d = classify_number("30%", "이번 공정은 전력 소비를 30% 절감했다고 발표했다");
        assert_eq!(d, "전력 효율성 30% 개선");
    }

    #[test]
    fn nm_is_process_node() {
        assert_eq!(
            classify_number("3nm", "the 3nm node enters mass production"),
            "3nm 미세 공정 기술"
        );
    }

    #[test]
    fn capacity_with_memory_context() {
        assert_eq!(
            classify_number("24GB", "새 모듈은 24GB 메모리 용량을 제공한다"),
            "24GB 메모리 용량"
        );
    }

    #[test]
    fn korean_investment_context() {
        assert_eq!(
            classify_number("5조", "5조 원 규모의 투자를 단행한다"),
            "5조 투자 규모"
        );
    }

    #[test]
    fn unfiltered_content_returns_prefix() {
        let out = summarize("short. tiny. words.", 50, &tables());
        assert_eq!(out, "short. tiny. words.");
    }

    #[test]
    fn output_respects_budget() {
        let long = "TSMC Samsung 반도체 공정 기술이 크게 향상되었습니다 이번 발표는 중요한 의미를 갖습니다. "
            .repeat(40);
        let out = summarize(&long, 100, &tables());
        // budget 250 chars + "..." marker
        assert!(out.chars().count() <= 253);
        assert!(out.ends_with("..."));
    }
}
