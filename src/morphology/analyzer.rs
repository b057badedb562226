//! 형태소 분석 캐스케이드
//!
//! 단계 순서:
//! 1. 높임 표현 매핑 (정확 일치)
//! 2. 불규칙 활용 매핑 (정확 일치)
//! 3. 어미 패턴 (현재/과거/미래/의향/능력)
//! 4. 조사 제거
//! 5. 격식체 어미 제거
//!
//! 처음 결과를 낸 단계에서 멈추며, 아무 단계도 맞지 않으면 원형을 그대로 돌려줍니다.

use serde::Serialize;

use super::patterns::{formal_ending_regex, particle_regex, suffix_patterns, PatternCategory};
use super::tables::{HONORIFIC_MAPPINGS, IRREGULAR_CONJUGATIONS};
use crate::core::error::ConvertError;

/// 분석된 어미 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphemeType {
    HonorificMapping,
    Irregular,
    /// 어미 패턴이 선언한 유형 (formal, past_polite, want ...)
    Pattern(&'static str),
    Particle,
    Simple,
    #[serde(rename = "none")]
    NoMatch,
}

impl MorphemeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MorphemeType::HonorificMapping => "honorific_mapping",
            MorphemeType::Irregular => "irregular",
            MorphemeType::Pattern(kind) => *kind,
            MorphemeType::Particle => "particle",
            MorphemeType::Simple => "simple",
            MorphemeType::NoMatch => "none",
        }
    }
}

/// 형태소 분석 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MorphemeAnalysis {
    /// 사전 조회 키
    pub stem: String,
    /// 제거된 어미/조사
    pub suffix: String,
    #[serde(rename = "type")]
    pub kind: MorphemeType,
    /// 어미 패턴으로 분석된 경우의 그룹
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PatternCategory>,
    pub original: String,
}

impl MorphemeAnalysis {
    fn new(word: &str, stem: impl Into<String>, suffix: impl Into<String>, kind: MorphemeType) -> Self {
        Self {
            stem: stem.into(),
            suffix: suffix.into(),
            kind,
            category: None,
            original: word.to_string(),
        }
    }

    /// 분석이 실제로 어간을 바꿨는지 여부
    pub fn changed_stem(&self) -> bool {
        self.kind != MorphemeType::NoMatch && self.stem != self.original
    }
}

/// 캐스케이드의 한 단계: 해당하지 않으면 `Ok(None)`
type Stage = fn(&str) -> Result<Option<MorphemeAnalysis>, ConvertError>;

const CASCADE: &[Stage] = &[
    honorific_mapping,
    irregular_conjugation,
    suffix_pattern,
    particle,
    formal_ending,
];

/// 단어 하나를 분석하여 사전 조회용 어간을 복원
///
/// # Examples
/// ```
/// use ksl_gloss::morphology::{analyze, MorphemeType};
///
/// let result = analyze("드세요").unwrap();
/// assert_eq!(result.stem, "먹다");
/// assert_eq!(result.kind, MorphemeType::HonorificMapping);
/// ```
pub fn analyze(word: &str) -> Result<MorphemeAnalysis, ConvertError> {
    for stage in CASCADE {
        if let Some(result) = stage(word)? {
            return Ok(result);
        }
    }
    Ok(MorphemeAnalysis::new(word, word, "", MorphemeType::NoMatch))
}

fn honorific_mapping(word: &str) -> Result<Option<MorphemeAnalysis>, ConvertError> {
    Ok(HONORIFIC_MAPPINGS
        .get(word)
        .map(|base| MorphemeAnalysis::new(word, *base, "", MorphemeType::HonorificMapping)))
}

fn irregular_conjugation(word: &str) -> Result<Option<MorphemeAnalysis>, ConvertError> {
    Ok(IRREGULAR_CONJUGATIONS.get(word).map(|base| {
        // 어미 = 원형에서 첫 "다"를 뗀 어간을 한 번 제거한 나머지
        let bare = base.replacen('다', "", 1);
        let suffix = word.replacen(bare.as_str(), "", 1);
        MorphemeAnalysis::new(word, *base, suffix, MorphemeType::Irregular)
    }))
}

fn suffix_pattern(word: &str) -> Result<Option<MorphemeAnalysis>, ConvertError> {
    for compiled in suffix_patterns()? {
        let Some(caps) = compiled.regex.captures(word) else {
            continue;
        };
        let Some(stem_part) = caps.get(1) else {
            continue;
        };
        if stem_part.as_str().is_empty() {
            continue;
        }

        let mut result = MorphemeAnalysis::new(
            word,
            compiled.build_stem(stem_part.as_str()),
            &word[stem_part.end()..],
            MorphemeType::Pattern(compiled.definition.kind),
        );
        result.category = Some(compiled.definition.category);
        return Ok(Some(result));
    }
    Ok(None)
}

fn particle(word: &str) -> Result<Option<MorphemeAnalysis>, ConvertError> {
    let regex = particle_regex()?;
    Ok(regex.captures(word).and_then(|caps| {
        let stem = caps.get(1)?;
        let suffix = caps.get(2)?;
        Some(MorphemeAnalysis::new(
            word,
            stem.as_str(),
            suffix.as_str(),
            MorphemeType::Particle,
        ))
    }))
}

fn formal_ending(word: &str) -> Result<Option<MorphemeAnalysis>, ConvertError> {
    let regex = formal_ending_regex()?;
    let clean = regex.replace_all(word, "");
    if clean == word || clean.is_empty() {
        return Ok(None);
    }
    let suffix = word.replacen(&*clean, "", 1);
    Ok(Some(MorphemeAnalysis::new(word, clean.into_owned(), suffix, MorphemeType::Simple)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honorific_mapping_wins_over_irregular() {
        // 드세요는 두 테이블에 모두 있지만 높임 매핑이 먼저
        let result = analyze("드세요").unwrap();
        assert_eq!(result.stem, "먹다");
        assert_eq!(result.suffix, "");
        assert_eq!(result.kind, MorphemeType::HonorificMapping);
        assert!(result.category.is_none());
    }

    #[test]
    fn test_irregular_suffix_residual() {
        let result = analyze("어려워요").unwrap();
        assert_eq!(result.stem, "어렵다");
        assert_eq!(result.kind, MorphemeType::Irregular);
        // "어렵"이 표면형에 없으므로 원형 전체가 남음
        assert_eq!(result.suffix, "어려워요");

        let result = analyze("이해했습니다").unwrap();
        assert_eq!(result.stem, "이해하다");
        // "이해하"는 표면형에 없음
        assert_eq!(result.suffix, "이해했습니다");

        let result = analyze("맛있습니다").unwrap();
        assert_eq!(result.stem, "맛있다");
        assert_eq!(result.suffix, "습니다");
    }

    #[test]
    fn test_present_patterns() {
        let result = analyze("먹어요").unwrap();
        assert_eq!(result.stem, "먹다");
        assert_eq!(result.suffix, "어요");
        assert_eq!(result.kind, MorphemeType::Pattern("polite"));
        assert_eq!(result.category, Some(PatternCategory::Present));

        let result = analyze("읽습니다").unwrap();
        assert_eq!(result.stem, "읽다");
        assert_eq!(result.kind, MorphemeType::Pattern("formal"));

        let result = analyze("가요").unwrap();
        assert_eq!(result.stem, "가다");
        assert_eq!(result.suffix, "요");
        assert_eq!(result.kind, MorphemeType::Pattern("polite_ending"));
    }

    #[test]
    fn test_present_group_shadows_past() {
        // 현재형 "어요"가 과거형 "었어요"보다 먼저 검사됨
        let result = analyze("먹었어요").unwrap();
        assert_eq!(result.stem, "먹었다");
        assert_eq!(result.category, Some(PatternCategory::Present));
    }

    #[test]
    fn test_past_casual() {
        let result = analyze("먹었다").unwrap();
        assert_eq!(result.stem, "먹다");
        assert_eq!(result.suffix, "었다");
        assert_eq!(result.kind, MorphemeType::Pattern("past_casual"));
        assert_eq!(result.category, Some(PatternCategory::Past));
    }

    #[test]
    fn test_present_shadows_future() {
        let result = analyze("먹겠습니다").unwrap();
        // formal(습니다)이 먼저 일치
        assert_eq!(result.kind, MorphemeType::Pattern("formal"));

        let result = analyze("읽을게요").unwrap();
        // polite_ending(요)이 먼저 일치
        assert_eq!(result.category, Some(PatternCategory::Present));
    }

    #[test]
    fn test_intention_pattern() {
        let result = analyze("놀고싶다").unwrap();
        assert_eq!(result.stem, "놀다");
        assert_eq!(result.suffix, "고싶다");
        assert_eq!(result.kind, MorphemeType::Pattern("want_casual"));
        assert_eq!(result.category, Some(PatternCategory::Intention));
    }

    #[test]
    fn test_particle_strip() {
        let result = analyze("학교에서").unwrap();
        assert_eq!(result.stem, "학교");
        assert_eq!(result.suffix, "에서");
        assert_eq!(result.kind, MorphemeType::Particle);

        let result = analyze("밥을").unwrap();
        assert_eq!(result.stem, "밥");
        assert_eq!(result.suffix, "을");
    }

    #[test]
    fn test_formal_ending_strip() {
        let result = analyze("갑니다").unwrap();
        assert_eq!(result.stem, "갑");
        assert_eq!(result.suffix, "니다");
        assert_eq!(result.kind, MorphemeType::Simple);
    }

    #[test]
    fn test_no_match() {
        let result = analyze("커피").unwrap();
        assert_eq!(result.stem, "커피");
        assert_eq!(result.suffix, "");
        assert_eq!(result.kind, MorphemeType::NoMatch);
        assert!(!result.changed_stem());

        let result = analyze("hello").unwrap();
        assert_eq!(result.kind, MorphemeType::NoMatch);
    }

    #[test]
    fn test_changed_stem() {
        assert!(analyze("밥을").unwrap().changed_stem());
        // 정확 매핑이지만 어간이 같으면 변경 아님
        assert!(!analyze("아프다").unwrap().changed_stem());
    }

    #[test]
    fn test_serialized_type_names() {
        let json = serde_json::to_value(analyze("먹어요").unwrap()).unwrap();
        assert_eq!(json["type"], serde_json::json!({"pattern": "polite"}));
        assert_eq!(json["category"], "present");

        let json = serde_json::to_value(analyze("커피").unwrap()).unwrap();
        assert_eq!(json["type"], "none");
        assert!(json.get("category").is_none());
    }
}
