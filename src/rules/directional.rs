//! 방향동사 태그
//!
//! 수어 동작이 화자와 상대 사이를 이동하는 동사에 방향 태그를 붙입니다.

use serde::Serialize;

/// 방향 태그의 공통 접두사
pub const DIRECTION_TAG_PREFIX: &str = "{dir:";

/// 동작 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// 1인칭 → 3인칭
    FirstToThird,
    /// 3인칭 → 1인칭
    ThirdToFirst,
}

impl Direction {
    pub fn tag(&self) -> &'static str {
        match self {
            Direction::FirstToThird => "{dir:1→3}",
            Direction::ThirdToFirst => "{dir:3→1}",
        }
    }
}

/// 방향동사 목록 (부분 일치는 이 순서대로 검사)
pub static DIRECTIONAL_VERBS: &[(&str, Direction)] = &[
    ("가다", Direction::FirstToThird),
    ("오다", Direction::ThirdToFirst),
    ("주다", Direction::FirstToThird),
    ("받다", Direction::ThirdToFirst),
    ("보내다", Direction::FirstToThird),
    ("가져오다", Direction::ThirdToFirst),
    ("가져가다", Direction::FirstToThird),
    ("들어가다", Direction::FirstToThird),
    ("나가다", Direction::FirstToThird),
    ("들어오다", Direction::ThirdToFirst),
    ("나오다", Direction::ThirdToFirst),
    ("올라가다", Direction::FirstToThird),
    ("내려가다", Direction::FirstToThird),
    ("올라오다", Direction::ThirdToFirst),
    ("내려오다", Direction::ThirdToFirst),
];

/// 토큰의 방향 판정: 정확 일치 우선, 없으면 처음 포함되는 동사
pub fn direction_for(word: &str) -> Option<Direction> {
    DIRECTIONAL_VERBS
        .iter()
        .find(|(verb, _)| *verb == word)
        .or_else(|| DIRECTIONAL_VERBS.iter().find(|(verb, _)| word.contains(verb)))
        .map(|(_, direction)| *direction)
}

/// 토큰이 이미 방향 태그를 달고 있는지
pub fn has_direction_tag(word: &str) -> bool {
    word.contains(DIRECTION_TAG_PREFIX)
}

/// 방향동사 토큰에 `"<토큰> <태그>"` 형식으로 태그를 하나 붙임
pub fn add_directional_tags<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            match direction_for(word) {
                Some(direction) => format!("{} {}", word, direction.tag()),
                None => word.to_string(),
            }
        })
        .collect()
}
