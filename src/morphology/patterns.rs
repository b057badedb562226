//! 어미 패턴 테이블
//!
//! 그룹(현재 → 과거 → 미래 → 의향 → 능력) 순서, 그룹 내 나열 순서대로 검사하며
//! 처음 일치한 패턴이 채택됩니다. 모든 패턴은 단어 끝에 고정되고
//! 첫 번째 캡처가 어간 부분입니다.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::core::error::ConvertError;

/// 어미 패턴 그룹
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    Present,
    Past,
    Future,
    Intention,
    Ability,
}

impl PatternCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::Present => "present",
            PatternCategory::Past => "past",
            PatternCategory::Future => "future",
            PatternCategory::Intention => "intention",
            PatternCategory::Ability => "ability",
        }
    }
}

/// 캡처된 어간 부분으로 사전형을 만드는 함수
pub type StemBuilder = fn(&str) -> String;

/// 컴파일 전 패턴 정의
#[derive(Debug, Clone, Copy)]
pub struct SuffixPattern {
    pub category: PatternCategory,
    pub pattern: &'static str,
    /// 어미 유형 (formal, past_polite, want ...)
    pub kind: &'static str,
    /// 없으면 기본 사전형 변환(어간 + "다") 사용
    pub stem: Option<StemBuilder>,
}

/// 기본 사전형 변환
pub fn citation_form(captured: &str) -> String {
    format!("{}다", captured)
}

/// "-고 싶다" 계열: 본동사의 사전형을 복원
fn want_stem(captured: &str) -> String {
    format!("{}다", captured)
}

const fn pattern(
    category: PatternCategory,
    pattern: &'static str,
    kind: &'static str,
) -> SuffixPattern {
    SuffixPattern {
        category,
        pattern,
        kind,
        stem: None,
    }
}

const fn intention(pattern: &'static str, kind: &'static str) -> SuffixPattern {
    SuffixPattern {
        category: PatternCategory::Intention,
        pattern,
        kind,
        stem: Some(want_stem),
    }
}

use PatternCategory::{Ability, Future, Past, Present};

/// 검사 순서대로 나열된 어미 패턴
pub static SUFFIX_PATTERNS: &[SuffixPattern] = &[
    // 현재형
    pattern(Present, r"([가-힣]+)(습니다|ㅂ니다)$", "formal"),
    pattern(Present, r"([가-힣]+)(어요|아요|여요|해요)$", "polite"),
    pattern(Present, r"([가-힣]+)(어|아|여|해)$", "casual"),
    pattern(Present, r"([가-힣]+)(세요|으세요)$", "honorific"),
    pattern(Present, r"([가-힣]+)(네요|구나|군요)$", "exclamatory"),
    pattern(Present, r"([가-힣]+)(요)$", "polite_ending"),
    // 과거형
    pattern(Past, r"([가-힣]+)(었습니다|았습니다|였습니다|했습니다)$", "past_formal"),
    pattern(Past, r"([가-힣]+)(었어요|았어요|였어요|했어요)$", "past_polite"),
    pattern(Past, r"([가-힣]+)(었다|았다|였다|했다)$", "past_casual"),
    pattern(Past, r"([가-힣]+)(었네요|았네요|였네요|했네요)$", "past_exclamatory"),
    // 미래/의지형
    pattern(Future, r"([가-힣]+)(을게요|ㄹ게요)$", "will"),
    pattern(Future, r"([가-힣]+)(겠어요|겠습니다)$", "will_formal"),
    pattern(Future, r"([가-힣]+)(ㄹ래요|을래요)$", "want_to"),
    // 의향/희망형
    intention(r"([가-힣]+)고\s*싶어요$", "want"),
    intention(r"([가-힣]+)고\s*싶습니다$", "want_formal"),
    intention(r"([가-힣]+)고\s*싶다$", "want_casual"),
    // 능력/가능성
    pattern(Ability, r"([가-힣]+)(ㄹ\s*수\s*있어요|을\s*수\s*있어요)$", "can"),
    pattern(Ability, r"([가-힣]+)(ㄹ\s*수\s*있습니다|을\s*수\s*있습니다)$", "can_formal"),
    pattern(Ability, r"([가-힣]+)(야\s*해요|야\s*합니다)$", "must"),
];

/// 조사 패턴 (단일/복합 조사)
pub const PARTICLE_PATTERN: &str =
    r"([가-힣]+)([은는이가을를에의로와과부터까지도만]|에서|으로|로서|와서|해서|라서)$";

/// 격식체 어미 제거 패턴
pub const FORMAL_ENDING_PATTERN: &str = r"입니다|니다$";

/// 컴파일된 어미 패턴
#[derive(Debug)]
pub struct CompiledPattern {
    pub definition: SuffixPattern,
    pub regex: Regex,
}

impl CompiledPattern {
    /// 캡처된 어간 부분으로 사전형 생성
    pub fn build_stem(&self, captured: &str) -> String {
        match self.definition.stem {
            Some(builder) => builder(captured),
            None => citation_form(captured),
        }
    }
}

static COMPILED_PATTERNS: LazyLock<Result<Vec<CompiledPattern>, regex::Error>> =
    LazyLock::new(|| {
        SUFFIX_PATTERNS
            .iter()
            .map(|definition| {
                Regex::new(definition.pattern).map(|regex| CompiledPattern {
                    definition: *definition,
                    regex,
                })
            })
            .collect()
    });

static PARTICLE_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(PARTICLE_PATTERN));

static FORMAL_ENDING_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(FORMAL_ENDING_PATTERN));

fn pattern_error(e: &regex::Error) -> ConvertError {
    ConvertError::Pattern(e.to_string())
}

/// 컴파일된 어미 패턴 목록 (검사 순서 유지)
pub fn suffix_patterns() -> Result<&'static [CompiledPattern], ConvertError> {
    COMPILED_PATTERNS.as_deref().map_err(pattern_error)
}

pub fn particle_regex() -> Result<&'static Regex, ConvertError> {
    PARTICLE_REGEX.as_ref().map_err(pattern_error)
}

pub fn formal_ending_regex() -> Result<&'static Regex, ConvertError> {
    FORMAL_ENDING_REGEX.as_ref().map_err(pattern_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        let compiled = suffix_patterns().unwrap();
        assert_eq!(compiled.len(), SUFFIX_PATTERNS.len());
        assert!(particle_regex().is_ok());
        assert!(formal_ending_regex().is_ok());
    }

    #[test]
    fn test_group_order() {
        // 그룹은 현재 → 과거 → 미래 → 의향 → 능력 순서로 연속 배치
        let order: Vec<PatternCategory> = SUFFIX_PATTERNS.iter().map(|p| p.category).collect();
        let mut seen: Vec<PatternCategory> = Vec::new();
        for category in order {
            if seen.last() != Some(&category) {
                assert!(!seen.contains(&category), "{:?} 그룹이 분리되어 있음", category);
                seen.push(category);
            }
        }
        assert_eq!(
            seen,
            vec![
                PatternCategory::Present,
                PatternCategory::Past,
                PatternCategory::Future,
                PatternCategory::Intention,
                PatternCategory::Ability
            ]
        );
    }

    #[test]
    fn test_intention_uses_custom_stem() {
        let compiled = suffix_patterns().unwrap();
        let want = compiled.iter().find(|p| p.definition.kind == "want").unwrap();
        assert!(want.definition.stem.is_some());
        assert_eq!(want.build_stem("배우"), "배우다");
    }
}
