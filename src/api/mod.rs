//! 요청 경계
//!
//! `{text, mode, shift?, language?}` 요청을 검증하고 모드별 연산으로 분기합니다.
//! HTTP와 무관하게 호출할 수 있으며, `server` 모듈은 이 위에 얹힌 얇은 층입니다.

pub mod handler;
pub mod models;

pub use handler::{handle, handle_json, Command, Mode};
pub use models::{AllShifts, CaesarRequest, CaesarResponse, ErrorResponse, HealthResponse};
