// src/digest/extract.rs
//! Deterministic extraction used by the fallback summarizer: sentence
//! splitting plus company / notable-number / tech-term recognition.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentences shorter than this (in chars) are discarded as fragments.
const MIN_SENTENCE_CHARS: usize = 20;

static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?\n]+").expect("sentence split regex"));

/// Company alias patterns, ordered. Each pattern contributes at most one
/// match (the text as it appeared), three companies total.
static COMPANY_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)삼성전자|Samsung",
        r"(?i)SK하이닉스|SK Hynix",
        r"(?i)TSMC|대만반도체",
        r"(?i)인텔|Intel",
        r"(?i)AMD",
        r"(?i)NVIDIA|엔비디아",
        r"(?i)퀄컴|Qualcomm",
        r"(?i)애플|Apple",
        r"(?i)마이크론|Micron",
        r"(?i)브로드컴|Broadcom",
        r"(?i)글로벌파운드리|GlobalFoundries",
        r"(?i)\bARM\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("company regex"))
    .collect()
});

/// Notable-number patterns: percentages, currency amounts, process nodes,
/// capacities/speeds, schedule markers. Up to two matches per pattern,
/// three numbers total.
static NUMBER_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+%|\d+퍼센트",
        r"\$\d+[MB]?|\d+억 달러|\d+조 달러",
        r"\d+nm|\d+나노",
        r"\d+GB|\d+TB|\d+Gbps",
        r"\d+년|\d+월",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("number regex"))
    .collect()
});

/// Canonical tech terms surfaced in the market section.
const TECH_TERMS: &[&str] = &[
    "AI",
    "인공지능",
    "머신러닝",
    "딥러닝",
    "신경망",
    "양자컴퓨팅",
    "양자",
    "엣지컴퓨팅",
    "클라우드",
    "자율주행",
    "IoT",
    "5G",
    "6G",
    "블록체인",
    "HBM",
    "DDR5",
    "GDDR6",
    "SSD",
    "CPU",
    "GPU",
];

/// Split on sentence-ending punctuation and newlines, trim, and drop
/// fragments under 20 chars.
pub fn split_sentences(content: &str) -> Vec<String> {
    SENTENCE_SPLIT_RE
        .split(content)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Up to three recognizable company names, as they appeared in the text.
pub fn extract_companies(text: &str) -> Vec<String> {
    let mut companies = Vec::new();
    for re in COMPANY_RES.iter() {
        if let Some(m) = re.find(text) {
            companies.push(m.as_str().to_string());
            if companies.len() == 3 {
                break;
            }
        }
    }
    companies
}

/// Up to three notable numeric values with their unit text attached.
pub fn extract_numbers(text: &str) -> Vec<String> {
    let mut numbers = Vec::new();
    for re in NUMBER_RES.iter() {
        for m in re.find_iter(text).take(2) {
            numbers.push(m.as_str().to_string());
        }
    }
    numbers.truncate(3);
    numbers
}

/// Up to three tech terms found in the text (canonical casing).
pub fn extract_tech_terms(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    let mut found = Vec::new();
    for term in TECH_TERMS {
        if folded.contains(&term.to_lowercase()) && !found.iter().any(|t| t == term) {
            found.push(term.to_string());
            if found.len() == 3 {
                break;
            }
        }
    }
    found
}
