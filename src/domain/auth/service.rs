use tracing::info;

use super::dto::{AuthTokenResponse, LoginRequest, SignupRequest};
use crate::domain::user::entity::user::{self, UserRole};
use crate::domain::user::repository::{NewUser, UserRepository};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::jwt::encode_access_token;
use crate::utils::password::{hash_password, verify_password};

pub struct AuthService;

impl AuthService {
    /// 회원가입 (항상 GUEST 권한)
    pub async fn signup(state: &AppState, req: SignupRequest) -> Result<AuthTokenResponse, AppError> {
        // 1. 이메일 중복 확인
        if UserRepository::find_by_email(&state.db, &req.email)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateEmail(
                "이미 가입된 이메일입니다.".to_string(),
            ));
        }

        // 2. 회원 생성
        let new_user = UserRepository::insert(
            &state.db,
            NewUser {
                email: req.email,
                password_hash: hash_password(&req.password)?,
                name: req.name,
                phone: req.phone,
                role: UserRole::Guest,
            },
        )
        .await?;

        info!(user_id = new_user.user_id, "New guest signed up");

        // 3. JWT 발급
        Self::issue_token(state, new_user)
    }

    /// 이메일/비밀번호 로그인
    pub async fn login(state: &AppState, req: LoginRequest) -> Result<AuthTokenResponse, AppError> {
        let user = UserRepository::find_by_email(&state.db, &req.email)
            .await?
            .ok_or_else(Self::invalid_credentials)?;

        if !verify_password(&req.password, &user.password_hash)? {
            return Err(Self::invalid_credentials());
        }

        Self::issue_token(state, user)
    }

    fn issue_token(state: &AppState, user: user::Model) -> Result<AuthTokenResponse, AppError> {
        let access_token = encode_access_token(
            user.user_id,
            user.role,
            &state.config.jwt_secret,
            state.config.jwt_expiration,
        )?;

        Ok(AuthTokenResponse {
            access_token,
            expires_in: state.config.jwt_expiration,
            user: user.into(),
        })
    }

    // 이메일 존재 여부가 드러나지 않도록 동일한 에러 사용
    fn invalid_credentials() -> AppError {
        AppError::InvalidCredentials("이메일 또는 비밀번호가 올바르지 않습니다.".to_string())
    }
}
