use std::net::SocketAddr;

use hotel_server::config::{establish_connection, AppConfig};
use hotel_server::domain::user::UserService;
use hotel_server::utils::logging::init_logging;
use hotel_server::{app, AppState};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화 (guard는 main 종료까지 유지)
    let _log_guard = init_logging();

    // 3. 설정 및 DB 연결
    let config = AppConfig::from_env().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;

    let db = establish_connection(&config.database_url, config.schema_update)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to connect to the database"))?;

    let state = AppState::new(db, config.clone());

    // 4. 관리자 계정 보장
    if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
        match UserService::ensure_admin(&state, email, password).await {
            Ok(admin) => info!(user_id = admin.user_id, "Admin account ready"),
            Err(e) => error!(error = %e, "Failed to prepare admin account"),
        }
    }

    // 5. 서버 실행
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    info!("Server listening on {}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
