//! 문장 유형 판별
//!
//! 토큰화 전의 원문에 대해 의문 → 부정 → 명령 → 감탄 순으로 패턴 묶음을 검사하고
//! 처음 일치한 유형을 사용합니다. 아무것도 맞지 않으면 평서문입니다.

use std::sync::LazyLock;

use regex::RegexSet;
use serde::Serialize;

use crate::core::error::ConvertError;

/// 문장 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceType {
    Question,
    Negative,
    Imperative,
    Exclamatory,
    Declarative,
}

impl SentenceType {
    /// 문장 유형에 대응하는 비수지 신호(NMM) 태그
    pub fn nmm_tag(&self) -> &'static str {
        match self {
            SentenceType::Question => "{NMM:WH?}",
            SentenceType::Negative => "{NMM:neg}",
            SentenceType::Imperative => "{NMM:imp}",
            SentenceType::Exclamatory => "{NMM:excl}",
            SentenceType::Declarative => "{NMM:neutral}",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceType::Question => "question",
            SentenceType::Negative => "negative",
            SentenceType::Imperative => "imperative",
            SentenceType::Exclamatory => "exclamatory",
            SentenceType::Declarative => "declarative",
        }
    }

    /// 원문의 문장 유형 판별
    ///
    /// # Examples
    /// ```
    /// use ksl_gloss::rules::SentenceType;
    ///
    /// assert_eq!(SentenceType::classify("어디 가요?").unwrap(), SentenceType::Question);
    /// assert_eq!(SentenceType::classify("밥 먹어요").unwrap(), SentenceType::Declarative);
    /// ```
    pub fn classify(text: &str) -> Result<Self, ConvertError> {
        let groups = pattern_groups()?;

        for (sentence_type, set) in groups {
            if !set.is_match(text) {
                continue;
            }
            if *sentence_type == SentenceType::Imperative && is_formulaic_greeting(text) {
                continue;
            }
            return Ok(*sentence_type);
        }
        Ok(SentenceType::Declarative)
    }
}

/// 의문: 물음표, 의문 어미, 의문사
const QUESTION_PATTERNS: &[&str] = &[
    r"\?",
    r"니까$", r"나요$", r"까요$",
    r"어디", r"언제", r"무엇", r"누구", r"왜", r"어떻게", r"뭐",
];

/// 부정: 부정 부사(독립 단어), 기타 부정 표현
const NEGATIVE_PATTERNS: &[&str] = &[
    r"\b안\b", r"\b못\b", r"\b없\b",
    r"아니", r"싫", r"싶지\s*않", r"말지\s*말",
];

/// 명령: 명령형 종결 어미
const IMPERATIVE_PATTERNS: &[&str] = &[
    r"세요$", r"어라$", r"아라$", r"가라$", r"오라$",
    r"해라$", r"하지\s*마", r"하지\s*마라",
];

/// 감탄: 느낌표, 감탄사
const EXCLAMATORY_PATTERNS: &[&str] = &[
    r"!", r"아!", r"오!", r"와!", r"어머!", r"세상에!",
];

/// "-세요"로 끝나지만 명령이 아닌 관용 인사말
pub static FORMULAIC_GREETINGS: &[&str] = &[
    "안녕하세요",
    "안녕히 계세요",
    "안녕히 가세요",
    "어서 오세요",
    "어서오세요",
];

fn is_formulaic_greeting(text: &str) -> bool {
    let trimmed = text.trim();
    FORMULAIC_GREETINGS.iter().any(|greeting| trimmed.ends_with(greeting))
}

static PATTERN_GROUPS: LazyLock<Result<Vec<(SentenceType, RegexSet)>, regex::Error>> =
    LazyLock::new(|| {
        [
            (SentenceType::Question, QUESTION_PATTERNS),
            (SentenceType::Negative, NEGATIVE_PATTERNS),
            (SentenceType::Imperative, IMPERATIVE_PATTERNS),
            (SentenceType::Exclamatory, EXCLAMATORY_PATTERNS),
        ]
        .into_iter()
        .map(|(sentence_type, patterns)| RegexSet::new(patterns).map(|set| (sentence_type, set)))
        .collect()
    });

fn pattern_groups() -> Result<&'static [(SentenceType, RegexSet)], ConvertError> {
    PATTERN_GROUPS
        .as_deref()
        .map_err(|e| ConvertError::Pattern(e.to_string()))
}
