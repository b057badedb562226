//! 변환 파이프라인 에러

/// 변환 중 발생할 수 있는 내부 처리 오류
///
/// `KslConverter::convert`는 이 에러를 밖으로 내보내지 않고
/// 원문을 그대로 담은 저하 결과로 바꿉니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// 규칙 정규식 컴파일 실패
    Pattern(String),
    /// 정규화 후 남은 단어가 없음 (예: "?!")
    NoTokens,
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::Pattern(s) => write!(f, "규칙 패턴 오류: {}", s),
            ConvertError::NoTokens => write!(f, "정규화 후 변환할 단어가 없습니다"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<regex::Error> for ConvertError {
    fn from(e: regex::Error) -> Self {
        ConvertError::Pattern(e.to_string())
    }
}
