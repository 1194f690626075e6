//! 요청 처리 (모드 분기)
//!
//! 검증 순서: 텍스트 -> 모드 -> 모드별 필수 값.
//! 처리 중 패닉은 경계에서 잡아 `CipherError::Internal`로 보고합니다.

use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

use super::models::{AllShifts, CaesarRequest, CaesarResponse};
use crate::analysis::{auto_decode, Language};
use crate::core::transform::{brute_force, decode, encode, rot13};
use crate::error::CipherError;

/// 요청 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Auto,
    Encode,
    Decode,
    Rot13,
    Brute,
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Mode::Auto),
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            "rot13" => Ok(Mode::Rot13),
            "brute" => Ok(Mode::Brute),
            _ => Err(CipherError::InvalidArgument("Invalid mode".into())),
        }
    }
}

/// 검증을 마친 실행 명령
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Auto { language: Language },
    Encode { shift: i64 },
    Decode { shift: i64 },
    Rot13,
    Brute,
}

impl Command {
    /// 요청에서 명령 생성 (텍스트 검증은 호출자 몫)
    ///
    /// 언어는 auto 모드에서만 검사합니다. 없으면 영어.
    pub fn parse(request: &CaesarRequest) -> Result<Self, CipherError> {
        let mode: Mode = request.mode.as_deref().unwrap_or_default().parse()?;

        match mode {
            Mode::Auto => {
                let language = match request.language.as_deref() {
                    Some(id) => Language::from_id(id)?,
                    None => Language::English,
                };
                Ok(Command::Auto { language })
            }
            Mode::Encode => request
                .shift
                .map(|shift| Command::Encode { shift })
                .ok_or_else(|| {
                    CipherError::InvalidArgument("Shift is required for encode mode".into())
                }),
            Mode::Decode => request
                .shift
                .map(|shift| Command::Decode { shift })
                .ok_or_else(|| {
                    CipherError::InvalidArgument("Shift is required for decode mode".into())
                }),
            Mode::Rot13 => Ok(Command::Rot13),
            Mode::Brute => Ok(Command::Brute),
        }
    }

    /// 명령 실행
    ///
    /// 자동 해독이 후보를 내지 못하면 `CipherError::NoSolution`
    pub fn execute(&self, text: &str) -> Result<CaesarResponse, CipherError> {
        let response = match *self {
            Command::Encode { shift } => CaesarResponse {
                output: encode(text, shift),
                shift: Some(shift),
                confidence: None,
                all_shifts: None,
            },
            Command::Decode { shift } => CaesarResponse {
                output: decode(text, shift),
                shift: Some(shift),
                confidence: None,
                all_shifts: None,
            },
            Command::Rot13 => CaesarResponse {
                output: rot13(text).encoded,
                shift: Some(13),
                confidence: None,
                all_shifts: None,
            },
            Command::Brute => {
                let all = brute_force(text);
                // 대표 출력은 시프트 0 (원문 그대로)
                let output = all.first().map(|s| s.text.clone()).unwrap_or_default();
                CaesarResponse {
                    output,
                    shift: None,
                    confidence: None,
                    all_shifts: Some(AllShifts::Decoded(all)),
                }
            }
            Command::Auto { language } => {
                let outcome = auto_decode(text, language).into_result()?;
                CaesarResponse {
                    output: outcome.decoded.unwrap_or_default(),
                    shift: outcome.shift.map(i64::from),
                    confidence: outcome.confidence,
                    all_shifts: outcome.all_shifts.map(AllShifts::Ranked),
                }
            }
        };
        Ok(response)
    }
}

/// 요청 하나 처리
pub fn handle(request: &CaesarRequest) -> Result<CaesarResponse, CipherError> {
    let text = request
        .text
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| CipherError::InvalidArgument("Text is required".into()))?;

    let command = Command::parse(request)?;
    log::debug!("요청 처리: {:?} ({}자)", command, text.chars().count());

    match panic::catch_unwind(AssertUnwindSafe(|| command.execute(text))) {
        Ok(result) => result,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "알 수 없는 패닉".to_string());
            log::error!("요청 처리 중 패닉: {}", detail);
            Err(CipherError::Internal(detail))
        }
    }
}

/// JSON 본문 문자열 처리
///
/// 본문이 요청 문서가 아니면 `InvalidArgument("Invalid request body: ...")`
pub fn handle_json(body: &str) -> Result<CaesarResponse, CipherError> {
    let request: CaesarRequest = serde_json::from_str(body)?;
    handle(&request)
}
