use std::env;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    /// Access Token 만료 시간 (초)
    pub jwt_expiration: i64,
    pub schema_update: bool,

    // 기동 시 생성할 관리자 계정 (둘 다 설정된 경우에만)
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!(
                "JWT_SECRET 환경변수가 설정되지 않았습니다. 프로덕션 환경에서는 반드시 설정하세요."
            );
            "secret".to_string()
        });

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidExpiration)?;

        let schema_update = env::var("DB_SCHEMA_UPDATE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid DB_SCHEMA_UPDATE value, defaulting to false. Use 'true' or 'false'."
                );
                false
            });

        let admin_email = env::var("ADMIN_EMAIL").ok().filter(|v| !v.is_empty());
        let admin_password = env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty());

        Ok(Self {
            server_port,
            database_url,
            jwt_secret,
            jwt_expiration,
            schema_update,
            admin_email,
            admin_password,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid expiration time")]
    InvalidExpiration,
    #[error("DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,
}
