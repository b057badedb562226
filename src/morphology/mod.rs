//! 한국어 형태소 분석 (어미/조사 제거)
//!
//! 공백으로 분리되고 문장부호가 제거된 단어 하나에서 사전 조회용 어간을 복원하고
//! 제거한 어미의 문법 유형을 분류합니다.

mod analyzer;
mod patterns;
mod tables;

// 공개 인터페이스
pub use analyzer::{analyze, MorphemeAnalysis, MorphemeType};
pub use patterns::{PatternCategory, SuffixPattern, SUFFIX_PATTERNS};
pub use tables::{HONORIFIC_MAPPINGS, IRREGULAR_CONJUGATIONS};
