// src/digest/mod.rs
//! Content digestion: two-tier summarization, language detection and
//! best-effort translation.
//!
//! The generative path is attempted first when a backend is configured and
//! the content is long enough; any failure falls through to the
//! deterministic template in `fallback` — a digest call never errors out.

pub mod extract;
pub mod fallback;

use tracing::{debug, warn};

use crate::ai::{CompletionError, CompletionRequest, DynCompleter};
use crate::keywords::KeywordTables;

/// Minimum content length (chars) before the generative path is attempted.
const GENERATIVE_MIN_CHARS: usize = 100;
/// Generative input is truncated to this many chars.
const GENERATIVE_INPUT_CAP: usize = 4000;
/// Minimum text length (chars) worth translating.
const TRANSLATE_MIN_CHARS: usize = 10;
/// Hangul syllable density below this fraction marks text as foreign.
const NATIVE_DENSITY_THRESHOLD: f64 = 0.2;

const TRANSLATE_TITLE_TOKENS: u32 = 100;
const TRANSLATE_BODY_TOKENS: u32 = 300;

const SUMMARY_SYSTEM_PROMPT: &str = "당신은 반도체 산업 전문가이자 취업 컨설턴트입니다. 취업 준비생들이 이력서, 면접, 에세이에서 활용할 수 있도록 다음 구조로 실용적인 한국어 요약을 제공해주세요:

💼 **산업 동향 & 기술 이해**
이 뉴스가 반도체 산업에 미치는 영향과 핵심 기술을 3-4문장으로 설명해주세요.

🏭 **주요 기업 분석 & 취업 시장**
관련 기업들의 사업 전략과 시장 포지션을 설명하고, 채용 동향이나 필요 역량과 연결해주세요.

📈 **구체적 성과 지표**
면접에서 언급할 수 있는 핵심 수치들(성능 개선률, 투자 규모, 시장 규모 등)을 정리해주세요.

🎯 **커리어 연관성**
이 기술/산업 변화가 향후 5-10년간 어떤 새로운 직업이나 역량 수요를 만들어낼지 분석해주세요.

💡 **면접 활용 포인트**
이 내용을 면접에서 어떻게 활용할 수 있는지 구체적으로 제시해주세요.

각 섹션을 명확히 구분하고, 취업 준비생 관점에서 실용적으로 작성해주세요.";

const TRANSLATE_SYSTEM_PROMPT: &str = "You are a professional translator. Translate the given English text to natural Korean. Provide only the translation, nothing else.";

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Summarizer/translator over an optional generative backend plus the
/// shared keyword tables. Stateless per call; safe to share.
pub struct ContentDigester {
    keywords: KeywordTables,
    completer: DynCompleter,
}

impl ContentDigester {
    pub fn new(keywords: KeywordTables, completer: DynCompleter) -> Self {
        Self {
            keywords,
            completer,
        }
    }

    /// Structured digest of `content`, roughly bounded by `max_length`
    /// (fallback output is capped at `max_length * 2.5` chars, generative
    /// output at `max_length * 3`). Never fails.
    pub async fn summarize(&self, content: &str, max_length: usize) -> String {
        if content.chars().count() > GENERATIVE_MIN_CHARS {
            match self.summarize_generative(content, max_length).await {
                Ok(summary) => return summary,
                Err(CompletionError::Disabled) => {
                    debug!("no generative backend, using template summarizer");
                }
                Err(e) => {
                    warn!(error = %e, provider = self.completer.provider_name(), "generative summarization failed, falling back");
                }
            }
        }
        fallback::summarize(content, max_length, &self.keywords)
    }

    async fn summarize_generative(
        &self,
        content: &str,
        max_length: usize,
    ) -> Result<String, CompletionError> {
        let user = format!(
            "다음 반도체 기사를 위 형식으로 취업 준비생 관점에서 분석하여 실용적으로 요약해주세요 (총 {}자 이내, 면접/이력서 활용 가능하도록):\n\n{}",
            max_length * 3,
            truncate_chars(content, GENERATIVE_INPUT_CAP)
        );
        let summary = self
            .completer
            .complete(CompletionRequest {
                system: SUMMARY_SYSTEM_PROMPT.to_string(),
                user,
                max_tokens: (max_length * 2) as u32,
                temperature: 0.2,
            })
            .await?;

        let cap = max_length * 3;
        if summary.chars().count() > cap {
            Ok(format!("{}...", truncate_chars(&summary, cap)))
        } else {
            Ok(summary)
        }
    }

    /// True when the text's Hangul syllable density is below 20%, i.e. the
    /// text is not in the dashboard's native language and is eligible for
    /// translation. Empty text is not considered foreign.
    pub fn is_foreign_language(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let total = text.chars().count();
        let hangul = text
            .chars()
            .filter(|c| ('\u{AC00}'..='\u{D7A3}').contains(c))
            .count();
        (hangul as f64 / total as f64) < NATIVE_DENSITY_THRESHOLD
    }

    /// Best-effort one-way translation to Korean. Returns the input
    /// unchanged for native text, short text, a missing backend, or any
    /// backend failure — translation never blocks ingestion.
    pub async fn translate(&self, text: &str, is_title: bool) -> String {
        if !self.is_foreign_language(text) || text.chars().count() <= TRANSLATE_MIN_CHARS {
            return text.to_string();
        }

        let max_tokens = if is_title {
            TRANSLATE_TITLE_TOKENS
        } else {
            TRANSLATE_BODY_TOKENS
        };
        let result = self
            .completer
            .complete(CompletionRequest {
                system: TRANSLATE_SYSTEM_PROMPT.to_string(),
                user: text.to_string(),
                max_tokens,
                temperature: 0.3,
            })
            .await;

        match result {
            Ok(translated) if !translated.trim().is_empty() => translated,
            Ok(_) => text.to_string(),
            Err(CompletionError::Disabled) => text.to_string(),
            Err(e) => {
                warn!(error = %e, "translation failed, keeping original text");
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{DisabledCompleter, MockCompleter};
    use std::sync::Arc;

    fn digester(completer: DynCompleter) -> ContentDigester {
        ContentDigester::new(KeywordTables::default_seed(), completer)
    }

    #[test]
    fn korean_text_is_native() {
        let d = digester(Arc::new(DisabledCompleter));
        assert!(!d.is_foreign_language("안녕하세요 정말 반갑습니다"));
        assert!(d.is_foreign_language("Samsung announces HBM4"));
        assert!(!d.is_foreign_language(""));
    }

    #[tokio::test]
    async fn translate_passes_native_text_through() {
        let d = digester(Arc::new(MockCompleter::replying("번역된 텍스트")));
        let native = "삼성전자가 새로운 공정을 발표했습니다";
        assert_eq!(d.translate(native, false).await, native);
    }

    #[tokio::test]
    async fn translate_uses_backend_for_foreign_text() {
        let d = digester(Arc::new(MockCompleter::replying("번역된 텍스트")));
        let out = d.translate("Samsung announces a new process node", true).await;
        assert_eq!(out, "번역된 텍스트");
    }

    #[tokio::test]
    async fn translate_failure_returns_original() {
        let d = digester(Arc::new(MockCompleter::failing()));
        let text = "Samsung announces a new process node";
        assert_eq!(d.translate(text, false).await, text);
    }

    #[tokio::test]
    async fn short_foreign_text_skipped() {
        let d = digester(Arc::new(MockCompleter::replying("번역")));
        assert_eq!(d.translate("HBM4 news", true).await, "HBM4 news");
    }

    #[tokio::test]
    async fn generative_summary_truncated() {
        let long_reply = "요약 ".repeat(400);
        let d = digester(Arc::new(MockCompleter::replying(long_reply)));
        let content = "a".repeat(200);
        let out = d.summarize(&content, 100).await;
        assert!(out.chars().count() <= 303);
        assert!(out.ends_with("..."));
    }

    #[tokio::test]
    async fn short_content_skips_backend() {
        // Backend would reply, but 100-char gate routes short content to the
        // template path.
        let d = digester(Arc::new(MockCompleter::replying("generative output")));
        let out = d
            .summarize("TSMC announced 30% performance improvement today.", 400)
            .await;
        assert!(out.contains(fallback::SECTION_IMPACT));
    }
}
