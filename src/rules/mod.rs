//! KSL 변환 규칙
//!
//! 변환기가 고정된 순서로 적용하는 독립 규칙들입니다.
//!
//! 1. **시간/장소 전면화**: 시간 + 장소 + 나머지 순으로 재배열
//! 2. **방향동사 태그**: 이동 방향이 있는 동사에 `{dir:1→3}` / `{dir:3→1}` 부착
//! 3. **문장 유형 판별**: 원문 기준 의문/부정/명령/감탄/평서
//! 4. **태그 생성**: 문장 유형별 NMM 태그와 원문 기반 방향 태그

mod directional;
mod sentence_type;
mod tags;
mod word_order;

// 공개 인터페이스
pub use directional::{
    add_directional_tags, direction_for, has_direction_tag, Direction, DIRECTIONAL_VERBS,
    DIRECTION_TAG_PREFIX,
};
pub use sentence_type::{SentenceType, FORMULAIC_GREETINGS};
pub use tags::{analyze_sentence, sign_language_tags};
pub use word_order::{front_time_place, is_place_word, is_time_word, PLACE_WORDS, TIME_WORDS};
