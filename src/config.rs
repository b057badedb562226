//! 변환기 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 디렉토리 생성/파일 쓰기 실패
    IoError(std::io::Error),
    /// 직렬화 실패
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "설정 파일 저장 실패: {}", e),
            ConfigError::SerializeError(s) => write!(f, "직렬화 실패: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

/// KSL 변환기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConverterConfig {
    /// 이 값 미만이면 원문 유지 + 변환 시도 표시
    #[serde(default = "default_very_low_threshold")]
    pub very_low_threshold: f64,
    /// 이 값 미만이면 원문/글로스 혼합 출력
    #[serde(default = "default_low_threshold")]
    pub low_threshold: f64,
    /// 기본 어휘에 병합할 사용자 사전 (JSON)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_dictionary: Option<PathBuf>,
}

fn default_very_low_threshold() -> f64 {
    0.3
}

fn default_low_threshold() -> f64 {
    0.5
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            very_low_threshold: default_very_low_threshold(),
            low_threshold: default_low_threshold(),
            user_dictionary: None,
        }
    }
}

impl ConverterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 신뢰도 구간 경계 설정
    pub fn with_thresholds(mut self, very_low: f64, low: f64) -> Self {
        self.very_low_threshold = very_low;
        self.low_threshold = low;
        self
    }

    /// 사용자 사전 경로 설정
    pub fn with_user_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_dictionary = Some(path.into());
        self
    }
}

/// 설정 파일 경로: ~/.config/ksl-gloss/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("ksl-gloss").join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> ConverterConfig {
    load_config_from(config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: impl AsRef<Path>) -> ConverterConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            ConverterConfig::default()
        }),
        Err(_) => ConverterConfig::default(),
    }
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &ConverterConfig) -> Result<(), ConfigError> {
    save_config_to(config_path(), config)
}

/// 설정 파일 저장
pub fn save_config_to(path: impl AsRef<Path>, config: &ConverterConfig) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert!((config.very_low_threshold - 0.3).abs() < f64::EPSILON);
        assert!((config.low_threshold - 0.5).abs() < f64::EPSILON);
        assert!(config.user_dictionary.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConverterConfig::new()
            .with_thresholds(0.2, 0.6)
            .with_user_dictionary("words.json");

        assert!((config.very_low_threshold - 0.2).abs() < f64::EPSILON);
        assert!((config.low_threshold - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.user_dictionary, Some(PathBuf::from("words.json")));
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let json = r#"{"low_threshold": 0.7}"#;
        let config: ConverterConfig = serde_json::from_str(json).unwrap();
        assert!((config.very_low_threshold - 0.3).abs() < f64::EPSILON);
        assert!((config.low_threshold - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = ConverterConfig::new().with_thresholds(0.25, 0.55);

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_load_invalid_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_config_from(&path), ConverterConfig::default());
        assert_eq!(
            load_config_from(dir.path().join("missing.json")),
            ConverterConfig::default()
        );
    }
}
