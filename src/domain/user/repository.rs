use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entity::user::{self, Entity as User, UserRole};
use crate::utils::error::AppError;

pub struct UserRepository;

/// 신규 사용자 생성 파라미터
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

impl UserRepository {
    pub async fn find_by_id<C>(db: &C, user_id: i64) -> Result<Option<user::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        User::find_by_id(user_id).one(db).await.map_err(AppError::db)
    }

    pub async fn find_by_email<C>(db: &C, email: &str) -> Result<Option<user::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn find_all<C>(db: &C) -> Result<Vec<user::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        User::find()
            .order_by_asc(user::Column::UserId)
            .all(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn insert<C>(db: &C, new_user: NewUser) -> Result<user::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().naive_utc();

        user::ActiveModel {
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            name: Set(new_user.name),
            phone: Set(new_user.phone),
            role: Set(new_user.role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::db)
    }

    pub async fn update_role<C>(
        db: &C,
        model: user::Model,
        role: UserRole,
    ) -> Result<user::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let mut active: user::ActiveModel = model.into();
        active.role = Set(role);
        active.updated_at = Set(Utc::now().naive_utc());
        active.update(db).await.map_err(AppError::db)
    }
}
