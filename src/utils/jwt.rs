use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::domain::user::entity::user::UserRole;

const ACCESS_TOKEN_TYPE: &str = "access";

/// JWT Claims 구조체
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (User ID)
    pub sub: String,
    /// 사용자 권한
    pub role: UserRole,
    /// Issued At
    pub iat: usize,
    /// Expiration
    pub exp: usize,
    /// Token Type
    pub token_type: String,
}

/// Access Token 생성
pub fn encode_access_token(
    user_id: i64,
    role: UserRole,
    secret: &str,
    expiration_seconds: i64,
) -> Result<String, AppError> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::seconds(expiration_seconds))
        .ok_or_else(|| AppError::internal_error("Invalid token expiration"))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        iat: now.timestamp() as usize,
        exp: expiration,
        token_type: ACCESS_TOKEN_TYPE.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Token creation failed: {}", e)))
}

/// JWT 토큰 검증
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let validation = Validation::default();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("토큰이 만료되었습니다.".into())
        }
        _ => AppError::Unauthorized("유효하지 않은 토큰입니다.".into()),
    })
}

/// Access Token 검증 (토큰 타입까지 확인)
pub fn decode_access_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let claims = decode_token(token, secret)?;

    if claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(AppError::Unauthorized(
            "유효하지 않은 토큰 타입입니다.".into(),
        ));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_decode() {
        let secret = "test_secret";

        let token =
            encode_access_token(42, UserRole::Admin, secret, 3600).expect("Token generation failed");
        let claims = decode_access_token(&token, secret).expect("Token validation failed");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_invalid_token() {
        let result = decode_token("invalid_token", "test_secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let token = encode_access_token(1, UserRole::Guest, "secret-a", 3600).unwrap();
        let result = decode_access_token(&token, "secret-b");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_expired_token() {
        // 기본 leeway(60초)보다 충분히 과거로 설정
        let token = encode_access_token(1, UserRole::Guest, "secret", -3600).unwrap();
        let result = decode_access_token(&token, "secret");

        match result {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "토큰이 만료되었습니다."),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
