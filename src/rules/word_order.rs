//! 시간/장소 전면화
//!
//! KSL 어순(시간 + 장소 + 나머지)에 맞게 글로스 토큰을 재배열합니다.
//! 소속 판정은 양방향 부분 문자열 포함이라 "월", "집", "산"처럼 짧은 항목은
//! 다른 단어에도 걸릴 수 있습니다.

/// 시간 표현
pub static TIME_WORDS: &[&str] = &[
    "오늘", "내일", "어제", "지금", "나중에", "아침", "점심", "저녁",
    "언제", "언제부터", "언제까지", "그때", "이제", "나중", "오전", "오후",
    "새벽", "밤", "주말", "평일", "월요일", "화요일", "수요일", "목요일", "금요일",
    "토요일", "일요일", "월", "년", "시간", "분", "초",
];

/// 장소 표현
pub static PLACE_WORDS: &[&str] = &[
    "학교", "집", "병원", "식당", "회사", "가게", "은행", "역", "공원",
    "도서관", "극장", "카페", "마트", "살롱", "지하철", "버스정류장",
    "공항", "항구", "호텔", "모텔", "운동장", "수영장", "놀이터",
    "산", "바다", "강", "호수", "섬", "동네", "골목", "길가",
];

fn matches_any(word: &str, list: &[&str]) -> bool {
    list.iter()
        .any(|item| word == *item || word.contains(item) || item.contains(word))
}

/// 시간 표현인지 (양방향 포함 검사)
pub fn is_time_word(word: &str) -> bool {
    matches_any(word, TIME_WORDS)
}

/// 장소 표현인지 (양방향 포함 검사)
pub fn is_place_word(word: &str) -> bool {
    matches_any(word, PLACE_WORDS)
}

/// 시간 → 장소 → 나머지 순으로 재배열 (각 묶음 안의 상대 순서 유지)
///
/// 시간과 장소에 모두 해당하면 시간으로 분류됩니다.
pub fn front_time_place<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut time_found = Vec::new();
    let mut place_found = Vec::new();
    let mut other_words = Vec::new();

    for word in words {
        let word = word.as_ref();
        if is_time_word(word) {
            time_found.push(word.to_string());
        } else if is_place_word(word) {
            place_found.push(word.to_string());
        } else {
            other_words.push(word.to_string());
        }
    }

    time_found
        .into_iter()
        .chain(place_found)
        .chain(other_words)
        .collect()
}
