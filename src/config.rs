//! 설정 파일 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "CAESAR_CONFIG";

/// 서버 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CaesarConfig {
    /// 리슨 주소
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for CaesarConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// 설정 파일 경로: $CAESAR_CONFIG, 없으면 ~/.config/caesar-toolkit/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("caesar-toolkit").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> CaesarConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> CaesarConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            CaesarConfig::default()
        }),
        Err(_) => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            CaesarConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "caesar-config-{}-{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = CaesarConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = CaesarConfig {
            bind_addr: "0.0.0.0:8080".into(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CaesarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: CaesarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CaesarConfig::default());
    }

    #[test]
    fn test_unknown_field_ignored() {
        // 언어 등 설정할 수 없는 항목은 무시
        let json = r#"{"bind_addr": "0.0.0.0:9000", "default_language": "french"}"#;
        let config: CaesarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file("valid", r#"{"bind_addr": "0.0.0.0:4000"}"#);
        let config = load_config_from(&path);
        assert_eq!(config.bind_addr, "0.0.0.0:4000");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_fallbacks() {
        let missing = std::env::temp_dir().join("caesar-config-does-not-exist.json");
        assert_eq!(load_config_from(&missing), CaesarConfig::default());

        let path = temp_file("broken", "{ not json");
        assert_eq!(load_config_from(&path), CaesarConfig::default());
        let _ = fs::remove_file(path);

        let path = temp_file("wrong-type", r#"{"bind_addr": 3000}"#);
        assert_eq!(load_config_from(&path), CaesarConfig::default());
        let _ = fs::remove_file(path);
    }
}
