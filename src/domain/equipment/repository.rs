use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entity::equipment::{self, Entity as Equipment};
use crate::utils::error::AppError;

pub struct EquipmentRepository;

impl EquipmentRepository {
    pub async fn find_by_id<C>(db: &C, equipment_id: i64) -> Result<Option<equipment::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        Equipment::find_by_id(equipment_id)
            .one(db)
            .await
            .map_err(AppError::db)
    }

    /// 존재하지 않으면 EQUIPMENT4041
    pub async fn get<C>(db: &C, equipment_id: i64) -> Result<equipment::Model, AppError>
    where
        C: ConnectionTrait,
    {
        Self::find_by_id(db, equipment_id)
            .await?
            .ok_or_else(|| AppError::EquipmentNotFound("존재하지 않는 비품입니다.".to_string()))
    }

    /// `room_id`가 있으면 해당 객실 비품만, `unlinked_only`면 미배정 비품만 조회
    pub async fn find_all<C>(
        db: &C,
        room_id: Option<i64>,
        unlinked_only: bool,
    ) -> Result<Vec<equipment::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        let mut query = Equipment::find();

        if let Some(room_id) = room_id {
            query = query.filter(equipment::Column::RoomId.eq(room_id));
        }
        if unlinked_only {
            query = query.filter(equipment::Column::RoomId.is_null());
        }

        query
            .order_by_asc(equipment::Column::EquipmentId)
            .all(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn insert<C>(
        db: &C,
        name: String,
        description: Option<String>,
        room_id: Option<i64>,
    ) -> Result<equipment::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().naive_utc();

        equipment::ActiveModel {
            name: Set(name),
            description: Set(description),
            room_id: Set(room_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::db)
    }

    pub async fn update<C>(db: &C, mut active: equipment::ActiveModel) -> Result<equipment::Model, AppError>
    where
        C: ConnectionTrait,
    {
        active.updated_at = Set(Utc::now().naive_utc());
        active.update(db).await.map_err(AppError::db)
    }

    pub async fn set_room<C>(
        db: &C,
        model: equipment::Model,
        room_id: Option<i64>,
    ) -> Result<equipment::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let mut active: equipment::ActiveModel = model.into();
        active.room_id = Set(room_id);
        Self::update(db, active).await
    }

    /// 객실에 배치된 비품을 모두 미배정으로 되돌리고 변경 건수 반환
    pub async fn unlink_room<C>(db: &C, room_id: i64) -> Result<u64, AppError>
    where
        C: ConnectionTrait,
    {
        Equipment::update_many()
            .col_expr(equipment::Column::RoomId, Expr::value(Option::<i64>::None))
            .col_expr(
                equipment::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(equipment::Column::RoomId.eq(room_id))
            .exec(db)
            .await
            .map(|res| res.rows_affected)
            .map_err(AppError::db)
    }

    pub async fn delete<C>(db: &C, equipment_id: i64) -> Result<(), AppError>
    where
        C: ConnectionTrait,
    {
        Equipment::delete_by_id(equipment_id)
            .exec(db)
            .await
            .map(|_| ())
            .map_err(AppError::db)
    }
}
