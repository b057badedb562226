//! 한국어 → KSL 글로스 변환기
//!
//! 파이프라인:
//! 1. 정규화 (문장부호 제거) + 공백 토큰화
//! 2. 단어별 사전 조회 → 형태소 분석 어간 조회 → 원형 유지
//! 3. 시간/장소 전면화 → 방향동사 태그
//! 4. 문장 유형 태그 생성, 신뢰도 계산
//! 5. 신뢰도 구간에 따라 출력 전략 선택

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::confidence::{self, ConfidenceBreakdown, ConfidenceTier};
use super::error::ConvertError;
use crate::config::ConverterConfig;
use crate::dictionary::{Dictionary, DictionaryError};
use crate::morphology::{analyze, MorphemeAnalysis};
use crate::rules::{add_directional_tags, front_time_place, sign_language_tags, SentenceType};

/// 변환 실패 시 사용하는 태그
const FALLBACK_TAGS: &str = "{NMM:neutral}";

/// 변환 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// 입력 원문
    pub original: String,
    /// KSL 글로스
    pub gloss: String,
    /// NMM/방향 태그 (공백 구분)
    pub tags: String,
    /// 신뢰도 (0.0 ~ 1.0)
    pub confidence: f64,
}

impl ConversionResult {
    /// 내부 처리 실패 시의 저하 결과: 원문을 그대로 글로스로 사용
    pub fn degraded(text: &str) -> Self {
        Self {
            original: text.to_string(),
            gloss: text.to_string(),
            tags: FALLBACK_TAGS.to_string(),
            confidence: 0.0,
        }
    }
}

/// 단어별 매핑 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordMapping {
    /// 토큰화된 원문 단어
    pub original: String,
    /// 사전 글로스 또는 (해석 실패 시) 원문 단어
    pub gloss: String,
    /// 단어 자체 또는 분석된 어간이 사전에 있는지
    pub in_dictionary: bool,
    pub analysis: MorphemeAnalysis,
}

/// 변환 결과와 중간 판정값
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedConversion {
    pub result: ConversionResult,
    pub sentence_type: SentenceType,
    pub tier: ConfidenceTier,
    pub breakdown: ConfidenceBreakdown,
    pub words: Vec<WordMapping>,
}

impl DetailedConversion {
    fn degraded(text: &str) -> Self {
        Self {
            result: ConversionResult::degraded(text),
            sentence_type: SentenceType::Declarative,
            tier: ConfidenceTier::VeryLow,
            breakdown: ConfidenceBreakdown {
                dictionary: 0.0,
                morphology: 0.0,
                rules: 0.0,
                sentence: 0.0,
                total: 0.0,
            },
            words: Vec::new(),
        }
    }
}

/// 문장 끝 부호(. ! ?) 제거 후 앞뒤 공백 제거
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '.' | '!' | '?'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// 공백 기준 토큰화 (빈 토큰 제외)
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// 전면화 후 방향동사 태그 적용
pub fn apply_rules<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let fronted = front_time_place(words);
    add_directional_tags(&fronted)
}

/// KSL 변환기
///
/// 사전을 소유하며, `convert`는 `&self`만 필요하므로 여러 스레드에서 읽기 전용으로
/// 공유할 수 있습니다. 사전 추가는 `&mut self`로 직렬화됩니다.
#[derive(Debug, Clone)]
pub struct KslConverter {
    dictionary: Dictionary,
    config: ConverterConfig,
}

impl Default for KslConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl KslConverter {
    /// 기본 어휘와 기본 설정으로 변환기 생성
    pub fn new() -> Self {
        Self::with_dictionary(Dictionary::new())
    }

    /// 사전을 지정하여 변환기 생성
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            config: ConverterConfig::default(),
        }
    }

    /// 신뢰도 구간 설정 적용 (`user_dictionary`는 무시됨, `from_config` 참고)
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    /// 설정으로 변환기 생성, 사용자 사전이 지정되어 있으면 기본 어휘에 병합
    pub fn from_config(config: ConverterConfig) -> Result<Self, DictionaryError> {
        let mut dictionary = Dictionary::new();
        if let Some(path) = &config.user_dictionary {
            let added = dictionary.merge_file(path)?;
            log::debug!("사용자 사전 {}개 항목 병합: {}", added, path.display());
        }
        Ok(Self::with_dictionary(dictionary).with_config(config))
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// 사전에 단어 추가 (있으면 덮어씀)
    pub fn add_to_dictionary(&mut self, word: impl Into<String>, gloss: impl Into<String>) {
        self.dictionary.add(word, gloss);
    }

    pub fn is_in_dictionary(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// 한국어 문장을 KSL 글로스로 변환
    ///
    /// 빈 문자열/공백만 있는 입력은 `None`을 반환합니다. 그 외에는 항상 결과를 반환하며,
    /// 내부 처리에 실패하면 원문을 글로스로 담은 신뢰도 0의 결과가 됩니다.
    ///
    /// # Examples
    /// ```
    /// use ksl_gloss::KslConverter;
    ///
    /// let converter = KslConverter::new();
    /// let result = converter.convert("안녕하세요").unwrap();
    /// assert_eq!(result.gloss, "안녕");
    /// assert_eq!(result.tags, "{NMM:neutral}");
    ///
    /// assert!(converter.convert("   ").is_none());
    /// ```
    pub fn convert(&self, text: &str) -> Option<ConversionResult> {
        self.convert_detailed(text).map(|detailed| detailed.result)
    }

    /// 변환 결과와 함께 문장 유형, 신뢰도 구간, 항목별 점수, 단어별 매핑 반환
    pub fn convert_detailed(&self, text: &str) -> Option<DetailedConversion> {
        if text.trim().is_empty() {
            return None;
        }

        match self.run_pipeline(text) {
            Ok(detailed) => Some(detailed),
            Err(e) => {
                log::warn!("KSL 변환 실패, 원문 반환: {} ({:?})", e, text);
                Some(DetailedConversion::degraded(text))
            }
        }
    }

    fn run_pipeline(&self, text: &str) -> Result<DetailedConversion, ConvertError> {
        // 1. 정규화 + 토큰화
        let normalized = normalize_text(text);
        let tokens = tokenize(&normalized);
        if tokens.is_empty() {
            return Err(ConvertError::NoTokens);
        }

        // 2. 사전/형태소 매핑
        let words = tokens
            .iter()
            .map(|token| self.map_word(token))
            .collect::<Result<Vec<_>, _>>()?;
        let gloss_words: Vec<&str> = words.iter().map(|w| w.gloss.as_str()).collect();

        // 3. 규칙 적용
        let processed = apply_rules(&gloss_words);
        let gloss = processed.join(" ");

        // 4. 태그
        let sentence_type = SentenceType::classify(text)?;
        let tags = sign_language_tags(sentence_type, text, &processed);

        // 5. 신뢰도 기반 출력 전략
        let breakdown = confidence::score(&words, text, sentence_type, &processed);
        let tier = ConfidenceTier::from_confidence(breakdown.total, &self.config);

        let final_gloss = match tier {
            ConfidenceTier::VeryLow => format!("[KSL:{}] {}", gloss, text),
            ConfidenceTier::Low => {
                // 해석된 단어만 글로스로 바꾸고 전면화만 적용 (방향 태그 없음)
                let hybrid: Vec<&str> = words
                    .iter()
                    .map(|w| {
                        if w.in_dictionary {
                            w.gloss.as_str()
                        } else {
                            w.original.as_str()
                        }
                    })
                    .collect();
                front_time_place(&hybrid).join(" ")
            }
            ConfidenceTier::Normal => gloss,
        };

        log::debug!(
            "KSL 변환: {:?} -> {:?} {} (신뢰도 {:.2}, {:?})",
            text,
            final_gloss,
            tags,
            breakdown.total,
            tier
        );

        Ok(DetailedConversion {
            result: ConversionResult {
                original: text.to_string(),
                gloss: final_gloss,
                tags,
                confidence: breakdown.total,
            },
            sentence_type,
            tier,
            breakdown,
            words,
        })
    }

    /// 사전 → 형태소 분석 어간 → 원형 순으로 단어 해석
    fn map_word(&self, word: &str) -> Result<WordMapping, ConvertError> {
        let analysis = analyze(word)?;
        let resolved = self
            .dictionary
            .lookup(word)
            .or_else(|| self.dictionary.lookup(&analysis.stem));

        let (gloss, in_dictionary) = match resolved {
            Some(gloss) => (gloss.to_string(), true),
            None => (word.to_string(), false),
        };

        Ok(WordMapping {
            original: word.to_string(),
            gloss,
            in_dictionary,
            analysis,
        })
    }
}

static DEFAULT_CONVERTER: LazyLock<KslConverter> = LazyLock::new(KslConverter::new);

/// 기본 어휘/설정의 공유 변환기로 변환
pub fn convert(text: &str) -> Option<ConversionResult> {
    DEFAULT_CONVERTER.convert(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_normalize_and_tokenize() {
        assert_eq!(normalize_text("  밥 먹었어요?! "), "밥 먹었어요");
        assert_eq!(normalize_text("?!."), "");
        assert_eq!(tokenize("밥   먹어요\t지금"), vec!["밥", "먹어요", "지금"]);
    }

    #[test]
    fn test_blank_input() {
        let converter = KslConverter::new();
        assert!(converter.convert("").is_none());
        assert!(converter.convert("   ").is_none());
        assert!(converter.convert("\n\t").is_none());
    }

    #[test]
    fn test_greeting() {
        let converter = KslConverter::new();
        let detailed = converter.convert_detailed("안녕하세요").unwrap();

        assert_eq!(detailed.result.original, "안녕하세요");
        assert_eq!(detailed.result.gloss, "안녕");
        assert_eq!(detailed.result.tags, "{NMM:neutral}");
        // 0.6 + 0.15 + 0 + 0.08
        assert!(approx(detailed.result.confidence, 0.83));
        assert_eq!(detailed.tier, ConfidenceTier::Normal);
        assert_eq!(detailed.sentence_type, SentenceType::Declarative);
    }

    #[test]
    fn test_directional_verb_tagged_once() {
        let converter = KslConverter::new();
        let result = converter.convert("학교에 가요").unwrap();

        assert_eq!(result.gloss, "학교 가다 {dir:1→3}");
        assert_eq!(result.gloss.matches("{dir:").count(), 1);
        // 토큰에 이미 방향 태그가 있으므로 태그 문자열에는 추가하지 않음
        assert_eq!(result.tags, "{NMM:neutral}");
        // 0.6 + 0.15 + 0.15 + 0.08
        assert!(approx(result.confidence, 0.98));
    }

    #[test]
    fn test_time_place_fronting() {
        let converter = KslConverter::new();
        let result = converter.convert("친구를 식당에서 내일 봐요").unwrap();
        assert_eq!(result.gloss, "내일 식당 친구 보다");
    }

    #[test]
    fn test_question() {
        let converter = KslConverter::new();
        let detailed = converter.convert_detailed("어디 가요?").unwrap();

        assert_eq!(detailed.sentence_type, SentenceType::Question);
        assert!(detailed.result.tags.starts_with("{NMM:WH?}"));
        assert_eq!(detailed.result.original, "어디 가요?");
    }

    #[test]
    fn test_very_low_tier_keeps_original() {
        let converter = KslConverter::new();
        let detailed = converter.convert_detailed("xyz!").unwrap();

        assert_eq!(detailed.tier, ConfidenceTier::VeryLow);
        assert_eq!(detailed.result.gloss, "[KSL:xyz] xyz!");
        assert_eq!(detailed.result.tags, "{NMM:excl}");
        assert!(approx(detailed.result.confidence, 0.1));
    }

    #[test]
    fn test_low_tier_skips_directional_tags() {
        let converter = KslConverter::new();
        let detailed = converter.convert_detailed("알수없는단어 모르는말 가다").unwrap();

        // 0.2 + 0.05 + 0.15 + 0.08
        assert!(approx(detailed.result.confidence, 0.48));
        assert_eq!(detailed.tier, ConfidenceTier::Low);
        // 저신뢰 구간은 전면화만 적용하고 방향 태그는 붙이지 않음
        assert_eq!(detailed.result.gloss, "알수없는단어 모르는말 가다");
        assert_eq!(detailed.result.tags, "{NMM:neutral}");
    }

    #[test]
    fn test_unresolved_word_passes_through() {
        let converter = KslConverter::new();
        let detailed = converter.convert_detailed("안녕하세요 알수없는단어").unwrap();

        let unknown = &detailed.words[1];
        assert!(!unknown.in_dictionary);
        assert_eq!(unknown.gloss, "알수없는단어");
        assert!(detailed.result.confidence > 0.0 && detailed.result.confidence < 1.0);
        assert_eq!(detailed.result.gloss, "안녕 알수없는단어");
    }

    #[test]
    fn test_punctuation_only_degrades() {
        let converter = KslConverter::new();
        let result = converter.convert("?!").unwrap();

        assert_eq!(result, ConversionResult::degraded("?!"));
        assert_eq!(result.tags, "{NMM:neutral}");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_dictionary_management() {
        let mut converter = KslConverter::new();
        let before = converter.dictionary_size();
        assert!(!converter.is_in_dictionary("테스트단어"));

        converter.add_to_dictionary("테스트단어", "테스트");

        assert!(converter.is_in_dictionary("테스트단어"));
        assert_eq!(converter.dictionary_size(), before + 1);
        let result = converter.convert("테스트단어").unwrap();
        assert_eq!(result.gloss, "테스트");
        assert!(result.confidence >= 0.5);
    }

    #[test]
    fn test_custom_thresholds() {
        let converter =
            KslConverter::new().with_config(ConverterConfig::new().with_thresholds(0.0, 0.0));
        let detailed = converter.convert_detailed("xyz").unwrap();
        assert_eq!(detailed.tier, ConfidenceTier::Normal);
        assert_eq!(detailed.result.gloss, "xyz");
    }

    #[test]
    fn test_shared_default_converter() {
        let result = convert("감사합니다").unwrap();
        assert_eq!(result.gloss, "감사");
    }
}
