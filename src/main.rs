//! caesar-server - 카이사르 암호 HTTP 서버

use caesar_toolkit::config::{config_path, load_config};
use caesar_toolkit::server::build_app;

#[tokio::main]
async fn main() {
    // 로깅 초기화 (RUST_LOG 없으면 info)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 설정 로드
    let config = load_config();
    log::info!("설정: {}", config_path().display());

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("{} 바인드 실패: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };

    log::info!("caesar-server 시작: http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, build_app()).await {
        log::error!("서버 오류: {}", e);
        std::process::exit(1);
    }
}
