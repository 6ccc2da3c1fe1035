//! 로깅 초기화 모듈
//!
//! 파일에는 항상 JSON, stdout은 `LOG_FORMAT`에 따라 JSON 또는 pretty 포맷으로 출력합니다.

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_FILTER: &str = "info,hotel_server=debug,sqlx=warn";
const LOG_FILE_PREFIX: &str = "hotel-server.log";

/// 로깅 시스템을 초기화합니다.
///
/// - `RUST_LOG`: 로그 레벨 (기본값 `info,hotel_server=debug,sqlx=warn`)
/// - `LOG_DIR`: 일별 로그 파일 디렉토리 (기본값 `logs`), 파일명은 `hotel-server.log.YYYY-MM-DD`
/// - `LOG_FORMAT=pretty`: 로컬 개발용 사람이 읽기 쉬운 stdout 출력
///
/// 반환되는 `WorkerGuard`를 main에서 유지해야 종료 시 버퍼링된 로그가 손실되지 않습니다.
pub fn init_logging() -> WorkerGuard {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());
    let pretty = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("pretty"))
        .unwrap_or(false);

    let (file_writer, guard) = tracing_appender::non_blocking(rolling::daily(&log_dir, LOG_FILE_PREFIX));

    let file_layer = fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false)
        .with_ansi(false)
        .with_writer(file_writer);

    let json_stdout = (!pretty).then(|| {
        fmt::layer()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_current_span(true)
            .flatten_event(false)
    });
    let pretty_stdout = pretty.then(|| fmt::layer().pretty().with_timer(UtcTime::rfc_3339()));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(json_stdout)
        .with(pretty_stdout)
        .try_init()
    {
        // 이미 초기화된 경우에도 서버는 계속 기동
        eprintln!("Failed to initialize tracing: {}", err);
    }

    guard
}
