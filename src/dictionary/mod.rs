//! 한국어 → KSL 글로스 사전
//!
//! 기본 어휘로 초기화되며 `add`로만 항목이 추가/덮어쓰기됩니다.
//! 사용자 사전은 JSON 객체 파일로 읽고 쓸 수 있습니다.
//!
//! ```json
//! { "테스트단어": "테스트", "놀다": "놀다" }
//! ```

mod entries;

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub use entries::BASE_ENTRIES;

/// 사전 로드/파싱 에러
#[derive(Debug)]
pub enum DictionaryError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 사전 형식 오류
    FormatError(String),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::IoError(e) => write!(f, "사전 파일 입출력 오류: {}", e),
            DictionaryError::ParseError(s) => write!(f, "사전 JSON 파싱 오류: {}", s),
            DictionaryError::FormatError(s) => write!(f, "사전 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl From<std::io::Error> for DictionaryError {
    fn from(e: std::io::Error) -> Self {
        DictionaryError::IoError(e)
    }
}

/// 한국어 단어 → KSL 글로스 매핑
///
/// 조회는 평균 O(1)이며 삭제 연산은 제공하지 않습니다.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// 기본 어휘로 초기화된 사전 생성
    pub fn new() -> Self {
        let mut dict = Self::empty();
        for (word, gloss) in BASE_ENTRIES {
            dict.add(*word, *gloss);
        }
        dict
    }

    /// 빈 사전 생성
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// JSON 파일에서 사전 로드 (기본 어휘 없이 파일 내용만 사용)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| DictionaryError::ParseError(e.to_string()))?;

        let mut dict = Self::empty();
        dict.merge_json_value(&value)?;
        Ok(dict)
    }

    /// JSON 문자열에서 사전 생성
    pub fn from_json(json_str: &str) -> Result<Self, DictionaryError> {
        let mut dict = Self::empty();
        dict.merge_json(json_str)?;
        Ok(dict)
    }

    /// JSON 문자열의 항목을 현재 사전에 병합 (같은 키는 덮어씀)
    ///
    /// 형식 오류가 있으면 사전은 변경되지 않습니다.
    pub fn merge_json(&mut self, json_str: &str) -> Result<usize, DictionaryError> {
        let value: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| DictionaryError::ParseError(e.to_string()))?;

        self.merge_json_value(&value)
    }

    /// JSON 파일의 항목을 현재 사전에 병합
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> Result<usize, DictionaryError> {
        let file = File::open(path)?;
        let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DictionaryError::ParseError(e.to_string()))?;

        self.merge_json_value(&value)
    }

    fn merge_json_value(&mut self, value: &serde_json::Value) -> Result<usize, DictionaryError> {
        let obj = value
            .as_object()
            .ok_or_else(|| DictionaryError::FormatError("최상위 값이 객체가 아닙니다".into()))?;

        // 전부 검증한 뒤에 반영
        let mut pending = Vec::with_capacity(obj.len());
        for (word, gloss) in obj {
            let gloss = gloss.as_str().ok_or_else(|| {
                DictionaryError::FormatError(format!("글로스가 문자열이 아닙니다: {}", word))
            })?;
            pending.push((word.clone(), gloss.to_string()));
        }

        let count = pending.len();
        for (word, gloss) in pending {
            self.entries.insert(word, gloss);
        }
        Ok(count)
    }

    /// 사전 전체를 JSON 문자열로 직렬화 (키 순서 정렬)
    pub fn to_json(&self) -> Result<String, DictionaryError> {
        let sorted: BTreeMap<&str, &str> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        serde_json::to_string_pretty(&sorted).map_err(|e| DictionaryError::ParseError(e.to_string()))
    }

    /// 사전을 JSON 파일로 저장
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DictionaryError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// 단어의 글로스 조회
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// 항목 추가 또는 덮어쓰기 (검증 없음)
    pub fn add(&mut self, word: impl Into<String>, gloss: impl Into<String>) {
        self.entries.insert(word.into(), gloss.into());
    }

    /// 항목 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
