//! HTTP 라우트 핸들러

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::api::handler;
use crate::api::models::{CaesarRequest, CaesarResponse, ErrorResponse, HealthResponse};
use crate::error::CipherError;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// 에러 종류별 상태 코드 (입력 오류 400, 내부 오류 500)
fn error_response(err: CipherError) -> ApiError {
    let status = if err.is_bad_input() {
        log::warn!("요청 거부: {}", err);
        StatusCode::BAD_REQUEST
    } else {
        log::error!("요청 처리 실패: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorResponse {
            error: err.public_message(),
        }),
    )
}

/// `GET /health`
///
/// ```json
/// {"status": "ok", "version": "0.1.0"}
/// ```
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/caesar`
///
/// 본문은 직접 파싱합니다. 요청 문서가 아닌 본문도 `{error}` 형태의 400으로 응답합니다.
pub async fn caesar(body: Bytes) -> Result<Json<CaesarResponse>, ApiError> {
    let request: CaesarRequest =
        serde_json::from_slice(&body).map_err(|e| error_response(CipherError::from(e)))?;

    handler::handle(&request)
        .map(Json)
        .map_err(error_response)
}
