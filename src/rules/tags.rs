//! 수어 태그 생성 (NMM + 방향)

use super::directional::{has_direction_tag, Direction};
use super::sentence_type::SentenceType;
use crate::core::error::ConvertError;

/// 토큰에 방향 태그가 없을 때 원문에서 찾는 이동 동사 표면형
const OUTWARD_FORMS: &[&str] = &["가다", "가요", "가세요"];
const INWARD_FORMS: &[&str] = &["오다", "와요", "오세요"];

/// 문장 유형의 NMM 태그와, 필요하면 원문 기반 방향 태그를 공백으로 이어 반환
pub fn sign_language_tags<S: AsRef<str>>(
    sentence_type: SentenceType,
    text: &str,
    words: &[S],
) -> String {
    let mut tags = vec![sentence_type.nmm_tag()];

    let already_tagged = words.iter().any(|word| has_direction_tag(word.as_ref()));
    if !already_tagged {
        if OUTWARD_FORMS.iter().any(|form| text.contains(form)) {
            tags.push(Direction::FirstToThird.tag());
        } else if INWARD_FORMS.iter().any(|form| text.contains(form)) {
            tags.push(Direction::ThirdToFirst.tag());
        }
    }

    tags.join(" ")
}

/// 변환 없이 문장 유형과 태그만 분석
///
/// # Examples
/// ```
/// use ksl_gloss::rules::{analyze_sentence, SentenceType};
///
/// let (sentence_type, tags) = analyze_sentence("학교에 가요?").unwrap();
/// assert_eq!(sentence_type, SentenceType::Question);
/// assert_eq!(tags, "{NMM:WH?} {dir:1→3}");
/// ```
pub fn analyze_sentence(text: &str) -> Result<(SentenceType, String), ConvertError> {
    let sentence_type = SentenceType::classify(text)?;
    let words: Vec<&str> = text.split_whitespace().collect();
    let tags = sign_language_tags(sentence_type, text, &words);
    Ok((sentence_type, tags))
}
