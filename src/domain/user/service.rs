use tracing::{info, warn};

use super::dto::UserResponse;
use super::entity::user::UserRole;
use super::repository::{NewUser, UserRepository};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::password::hash_password;

pub struct UserService;

impl UserService {
    /// 회원 정보 조회
    pub async fn get_profile(state: &AppState, user_id: i64) -> Result<UserResponse, AppError> {
        let user = UserRepository::find_by_id(&state.db, user_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound("존재하지 않는 사용자입니다.".to_string()))?;

        Ok(user.into())
    }

    /// 전체 회원 목록 (관리자)
    pub async fn list_users(state: &AppState) -> Result<Vec<UserResponse>, AppError> {
        let users = UserRepository::find_all(&state.db).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 회원 권한 변경 (관리자)
    pub async fn change_role(
        state: &AppState,
        user_id: i64,
        role: UserRole,
    ) -> Result<UserResponse, AppError> {
        let user = UserRepository::find_by_id(&state.db, user_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound("존재하지 않는 사용자입니다.".to_string()))?;

        let updated = UserRepository::update_role(&state.db, user, role).await?;
        info!(user_id, role = ?role, "User role changed");

        Ok(updated.into())
    }

    /// 기동 시 관리자 계정 보장
    ///
    /// 같은 이메일의 관리자 계정이 이미 있으면 그대로 사용합니다.
    /// 같은 이메일로 가입한 투숙객 계정은 승격하지 않고 409로 거절합니다.
    pub async fn ensure_admin(
        state: &AppState,
        email: &str,
        password: &str,
    ) -> Result<UserResponse, AppError> {
        if let Some(existing) = UserRepository::find_by_email(&state.db, email).await? {
            if existing.role == UserRole::Admin {
                return Ok(existing.into());
            }
            warn!(
                user_id = existing.user_id,
                "ADMIN_EMAIL belongs to a guest account, admin bootstrap skipped"
            );
            return Err(AppError::DuplicateEmail(
                "관리자 이메일로 이미 가입한 일반 회원이 있습니다.".to_string(),
            ));
        }

        let admin = UserRepository::insert(
            &state.db,
            NewUser {
                email: email.to_string(),
                password_hash: hash_password(password)?,
                name: "Administrator".to_string(),
                phone: None,
                role: UserRole::Admin,
            },
        )
        .await?;
        info!(user_id = admin.user_id, "Bootstrap admin account created");

        Ok(admin.into())
    }
}
