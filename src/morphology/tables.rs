//! 형태소 분석용 정확 일치 테이블
//!
//! 일반 어미 패턴으로는 복원할 수 없는 높임 표현과 불규칙 활용을 직접 매핑합니다.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 높임 표현 → 기본형
pub static HONORIFIC_MAPPINGS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("드시다", "먹다"),
            ("드세요", "먹다"),
            ("드실래요", "먹다"),
            ("계시다", "있다"),
            ("계세요", "있다"),
            ("주무시다", "자다"),
            ("주무세요", "자다"),
            ("말씀하시다", "말하다"),
            ("말씀해주세요", "말하다"),
        ])
    });

/// 불규칙 활용형 → 기본형
///
/// `+`로 이어진 값은 합성 글로스(예: 가다+원하다)로, 사전 조회가 실패하면 원형이 유지됩니다.
pub static IRREGULAR_CONJUGATIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            // ㅡ 탈락
            ("아파요", "아프다"),
            ("아프다", "아프다"),
            ("예뻐요", "예쁘다"),
            ("바빠요", "바쁘다"),
            // ㅂ 불규칙
            ("아름다워요", "아름답다"),
            ("쉬워요", "쉽다"),
            ("어려워요", "어렵다"),
            // ㄷ 불규칙
            ("걸어요", "걷다"),
            ("들어요", "듣다"),
            // 자주 쓰이는 활용
            ("좋네요", "좋다"),
            ("나쁘네요", "나쁘다"),
            ("추워요", "추다"),
            ("따뜻해요", "따뜻하다"),
            ("시원해요", "시원하다"),
            ("맛있어요", "맛있다"),
            ("맛있습니다", "맛있다"),
            // 과거형
            ("이해했습니다", "이해하다"),
            ("이해했어요", "이해하다"),
            ("도와줬습니다", "도와주다"),
            ("도와줬어요", "도와주다"),
            // 의향형
            ("싶어요", "원하다"),
            ("배우고싶어요", "배우다+원하다"),
            ("가고싶어요", "가다+원하다"),
            ("먹고싶어요", "먹다+원하다"),
            // 높임 표현 (높임 테이블이 먼저 적용됨)
            ("드실래요", "먹다"),
            ("드세요", "먹다"),
            ("계세요", "있다"),
            ("말씀해주세요", "말하다"),
        ])
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honorific_table() {
        assert_eq!(HONORIFIC_MAPPINGS.get("드세요"), Some(&"먹다"));
        assert_eq!(HONORIFIC_MAPPINGS.get("주무세요"), Some(&"자다"));
        assert!(HONORIFIC_MAPPINGS.get("먹어요").is_none());
    }

    #[test]
    fn test_irregular_table() {
        assert_eq!(IRREGULAR_CONJUGATIONS.get("어려워요"), Some(&"어렵다"));
        assert_eq!(IRREGULAR_CONJUGATIONS.get("가고싶어요"), Some(&"가다+원하다"));
    }
}
