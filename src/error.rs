//! 카이사르 툴킷 에러 타입

/// 암호화/복호화/자동 해독 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// 잘못된 입력 (빈 텍스트, 시프트 누락, 지원하지 않는 모드/언어)
    InvalidArgument(String),
    /// 자동 해독 파이프라인이 후보 시프트를 하나도 내지 못함
    NoSolution(String),
    /// 예상하지 못한 내부 오류
    Internal(String),
}

impl CipherError {
    /// 호출자에게 노출할 메시지
    ///
    /// 내부 오류는 상세 내용을 숨기고 고정 문구만 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            CipherError::InvalidArgument(msg) | CipherError::NoSolution(msg) => msg.clone(),
            CipherError::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// 잘못된 입력 계열 에러인지 확인 (NoSolution 포함)
    pub fn is_bad_input(&self) -> bool {
        !matches!(self, CipherError::Internal(_))
    }
}

impl std::fmt::Display for CipherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherError::InvalidArgument(s) => write!(f, "잘못된 입력: {}", s),
            CipherError::NoSolution(s) => write!(f, "해독 실패: {}", s),
            CipherError::Internal(s) => write!(f, "내부 오류: {}", s),
        }
    }
}

impl std::error::Error for CipherError {}

impl From<serde_json::Error> for CipherError {
    fn from(e: serde_json::Error) -> Self {
        CipherError::InvalidArgument(format!("Invalid request body: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_message_hides_internal() {
        let err = CipherError::Internal("index out of bounds".into());
        assert_eq!(err.public_message(), "Internal server error");
        assert!(!err.is_bad_input());
    }

    #[test]
    fn test_public_message_keeps_bad_input() {
        let err = CipherError::InvalidArgument("Text is required".into());
        assert_eq!(err.public_message(), "Text is required");
        assert!(err.is_bad_input());

        let err = CipherError::NoSolution("No valid shifts found".into());
        assert_eq!(err.public_message(), "No valid shifts found");
        assert!(err.is_bad_input());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CipherError = json_err.into();
        assert!(matches!(err, CipherError::InvalidArgument(_)));
    }
}
