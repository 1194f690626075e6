//! 요청/응답 JSON 모델

use serde::{Deserialize, Serialize};

use crate::analysis::ShiftScore;
use crate::core::transform::ShiftedText;

/// `POST /api/caesar` 요청 본문
///
/// 검증은 핸들러에서 하므로 모든 필드가 선택입니다.
///
/// ```
/// use caesar_toolkit::api::models::CaesarRequest;
///
/// let req: CaesarRequest = serde_json::from_str(r#"{"text": "Khoor", "mode": "decode", "shift": 3}"#).unwrap();
/// assert_eq!(req.shift, Some(3));
/// assert!(req.language.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaesarRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// auto | encode | decode | rot13 | brute
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub shift: Option<i64>,
    /// english | french | spanish | german
    #[serde(default)]
    pub language: Option<String>,
}

impl CaesarRequest {
    pub fn new(text: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            mode: Some(mode.into()),
            ..Default::default()
        }
    }

    pub fn with_shift(mut self, shift: i64) -> Self {
        self.shift = Some(shift);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// 모드별 `allShifts` 내용
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllShifts {
    /// auto: 점수 순위
    Ranked(Vec<ShiftScore>),
    /// brute: 26개 디코딩
    Decoded(Vec<ShiftedText>),
}

/// 성공 응답
///
/// 모드에 따라 채워지는 필드가 다릅니다:
/// - encode/decode/rot13: `output`, `shift`
/// - brute: `output` (시프트 0 텍스트), `allShifts`
/// - auto: `output`, `shift`, `confidence`, `allShifts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaesarResponse {
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_shifts: Option<AllShifts>,
}

/// 에러 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /health` 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
