//! HTTP 서버
//!
//! - `GET /health`: 상태 확인
//! - `POST /api/caesar`: 인코딩/디코딩/ROT13/전수 대입/자동 해독
//!
//! 요청마다 독립적으로 계산하며 공유 상태는 없습니다.

pub mod routes;

use axum::routing::{get, post};
use axum::Router;

/// 라우터 생성
///
/// ```no_run
/// use caesar_toolkit::server::build_app;
///
/// #[tokio::main]
/// async fn main() {
///     let app = build_app();
///     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await.unwrap();
///     axum::serve(listener, app).await.unwrap();
/// }
/// ```
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/caesar", post(routes::caesar))
}
