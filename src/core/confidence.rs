//! 변환 신뢰도 계산
//!
//! 네 가지 점수를 가중 합산한 뒤 0.0 ~ 1.0 으로 제한합니다.
//!
//! | 항목 | 최대 |
//! |---|---|
//! | 사전 매칭률 | 0.6 |
//! | 형태소 분석 성공률 | 0.15 |
//! | 규칙 적용 | 0.15 |
//! | 문장 유형 판별 | 0.1 |

use serde::Serialize;

use super::converter::WordMapping;
use crate::config::ConverterConfig;
use crate::rules::{has_direction_tag, SentenceType};

const DICTIONARY_WEIGHT: f64 = 0.6;
const MORPHOLOGY_WEIGHT: f64 = 0.15;
/// 규칙 점수(최대 0.05 + 0.05)를 0.15 대역으로 맞추는 배율
const RULE_NORMALIZATION: f64 = 3.0;
const TIME_PLACE_CREDIT: f64 = 0.05;
const DIRECTION_CREDIT: f64 = 0.05;
const DIRECTION_PARTIAL_CREDIT: f64 = 0.02;
const SENTENCE_BASELINE: f64 = 0.1;
const SENTENCE_UNCONFIRMED_DECLARATIVE: f64 = 0.08;

/// 규칙 점수용 시간/장소 단서 (단방향 포함 검사)
const SCORED_TIME_WORDS: &[&str] = &["오늘", "내일", "어제", "오전", "오후", "아침", "점심", "저녁"];
const SCORED_PLACE_WORDS: &[&str] = &["학교", "집", "병원", "도서관", "마트", "식당", "회사"];
/// 규칙 점수용 방향동사 단서
const SCORED_DIRECTIONAL_VERBS: &[&str] = &["가다", "오다", "주다", "받다"];

/// 항목별 신뢰도 (각 항목은 가중치가 이미 적용된 값)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceBreakdown {
    pub dictionary: f64,
    pub morphology: f64,
    pub rules: f64,
    pub sentence: f64,
    /// 합계 (0.0 ~ 1.0)
    pub total: f64,
}

/// 신뢰도 구간에 따른 출력 전략
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// 원문 유지 + 변환 시도 표시
    VeryLow,
    /// 원문/글로스 혼합
    Low,
    /// 정상 변환
    Normal,
}

impl ConfidenceTier {
    /// 설정된 경계값으로 구간 판정 (구간은 서로 겹치지 않음)
    pub fn from_confidence(confidence: f64, config: &ConverterConfig) -> Self {
        if confidence < config.very_low_threshold {
            ConfidenceTier::VeryLow
        } else if confidence < config.low_threshold {
            ConfidenceTier::Low
        } else {
            ConfidenceTier::Normal
        }
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64).min(1.0)
}

/// 원문 단어 중 사전(직접 또는 어간)으로 해석된 비율
pub fn dictionary_score(words: &[WordMapping]) -> f64 {
    let mapped = words.iter().filter(|w| w.in_dictionary).count();
    ratio(mapped, words.len()) * DICTIONARY_WEIGHT
}

/// 형태소 분석이 어간을 실제로 바꾼 비율
pub fn morphology_score(words: &[WordMapping]) -> f64 {
    let analysed = words.iter().filter(|w| w.analysis.changed_stem()).count();
    ratio(analysed, words.len()) * MORPHOLOGY_WEIGHT
}

/// 시간/장소 단서와 방향동사 태그 적용 여부
pub fn rule_score<S: AsRef<str>>(words: &[WordMapping], processed: &[S]) -> f64 {
    let mut score = 0.0;

    let has_time_place = words.iter().any(|w| {
        SCORED_TIME_WORDS.iter().any(|t| w.original.contains(t))
            || SCORED_PLACE_WORDS.iter().any(|p| w.original.contains(p))
    });
    if has_time_place {
        score += TIME_PLACE_CREDIT;
    }

    let has_tag = processed.iter().any(|w| has_direction_tag(w.as_ref()));
    let has_verb = words
        .iter()
        .any(|w| SCORED_DIRECTIONAL_VERBS.iter().any(|v| w.original.contains(v)));
    if has_verb {
        score += if has_tag {
            DIRECTION_CREDIT
        } else {
            DIRECTION_PARTIAL_CREDIT
        };
    }

    score * RULE_NORMALIZATION
}

/// 표면 단서가 판별된 문장 유형과 일치하는지
pub fn sentence_score(text: &str, sentence_type: SentenceType) -> f64 {
    let confirmed = match sentence_type {
        SentenceType::Question => text.contains('?'),
        SentenceType::Negative => text.contains('안'),
        SentenceType::Imperative => text.contains("세요"),
        SentenceType::Declarative => false,
        SentenceType::Exclamatory => true,
    };

    if !confirmed && sentence_type == SentenceType::Declarative {
        SENTENCE_UNCONFIRMED_DECLARATIVE
    } else {
        SENTENCE_BASELINE
    }
}

/// 전체 신뢰도 계산
pub fn score<S: AsRef<str>>(
    words: &[WordMapping],
    text: &str,
    sentence_type: SentenceType,
    processed: &[S],
) -> ConfidenceBreakdown {
    let dictionary = dictionary_score(words);
    let morphology = morphology_score(words);
    let rules = rule_score(words, processed);
    let sentence = sentence_score(text, sentence_type);
    let total = (dictionary + morphology + rules + sentence).clamp(0.0, 1.0);

    ConfidenceBreakdown {
        dictionary,
        morphology,
        rules,
        sentence,
        total,
    }
}
