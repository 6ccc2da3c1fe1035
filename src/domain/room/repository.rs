use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};

use super::entity::room::{self, Entity as Room, RoomStatus, RoomType};
use crate::utils::error::AppError;

pub struct RoomRepository;

/// 객실 목록 필터
#[derive(Debug, Default, Clone)]
pub struct RoomFilter {
    pub status: Option<RoomStatus>,
    pub room_type: Option<RoomType>,
    pub min_capacity: Option<i32>,
    pub exclude_status: Option<RoomStatus>,
    pub exclude_ids: Vec<i64>,
}

impl RoomRepository {
    pub async fn find_by_id<C>(db: &C, room_id: i64) -> Result<Option<room::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        Room::find_by_id(room_id).one(db).await.map_err(AppError::db)
    }

    /// 존재하지 않으면 ROOM4041
    pub async fn get<C>(db: &C, room_id: i64) -> Result<room::Model, AppError>
    where
        C: ConnectionTrait,
    {
        Self::find_by_id(db, room_id)
            .await?
            .ok_or_else(|| AppError::RoomNotFound("존재하지 않는 객실입니다.".to_string()))
    }

    /// 예약/체크인/요금 등록을 객실 단위로 직렬화하기 위한 행 잠금
    pub fn select_for_update(room_id: i64) -> Select<Room> {
        Room::find_by_id(room_id).lock_exclusive()
    }

    /// 트랜잭션 안에서 객실을 잠그고 조회. 존재하지 않으면 ROOM4041
    pub async fn get_for_update<C>(db: &C, room_id: i64) -> Result<room::Model, AppError>
    where
        C: ConnectionTrait,
    {
        Self::select_for_update(room_id)
            .one(db)
            .await
            .map_err(AppError::db)?
            .ok_or_else(|| AppError::RoomNotFound("존재하지 않는 객실입니다.".to_string()))
    }

    pub async fn find_by_number<C>(db: &C, room_number: &str) -> Result<Option<room::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        Room::find()
            .filter(room::Column::RoomNumber.eq(room_number))
            .one(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn find_all<C>(db: &C, filter: RoomFilter) -> Result<Vec<room::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        let mut query = Room::find();

        if let Some(status) = filter.status {
            query = query.filter(room::Column::Status.eq(status));
        }
        if let Some(status) = filter.exclude_status {
            query = query.filter(room::Column::Status.ne(status));
        }
        if let Some(room_type) = filter.room_type {
            query = query.filter(room::Column::RoomType.eq(room_type));
        }
        if let Some(min_capacity) = filter.min_capacity {
            query = query.filter(room::Column::Capacity.gte(min_capacity));
        }
        if !filter.exclude_ids.is_empty() {
            query = query.filter(room::Column::RoomId.is_not_in(filter.exclude_ids));
        }

        query
            .order_by_asc(room::Column::RoomNumber)
            .all(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn insert<C>(
        db: &C,
        room_number: String,
        room_type: RoomType,
        status: RoomStatus,
        capacity: i32,
        description: Option<String>,
    ) -> Result<room::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().naive_utc();

        room::ActiveModel {
            room_number: Set(room_number),
            room_type: Set(room_type),
            status: Set(status),
            capacity: Set(capacity),
            description: Set(description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::db)
    }

    /// 변경된 필드만 반영된 ActiveModel 저장
    pub async fn update<C>(db: &C, mut active: room::ActiveModel) -> Result<room::Model, AppError>
    where
        C: ConnectionTrait,
    {
        active.updated_at = Set(Utc::now().naive_utc());
        active.update(db).await.map_err(AppError::db)
    }

    pub async fn update_status<C>(
        db: &C,
        model: room::Model,
        status: RoomStatus,
    ) -> Result<room::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let mut active: room::ActiveModel = model.into();
        active.status = Set(status);
        Self::update(db, active).await
    }

    pub async fn delete<C>(db: &C, room_id: i64) -> Result<(), AppError>
    where
        C: ConnectionTrait,
    {
        Room::delete_by_id(room_id)
            .exec(db)
            .await
            .map(|_| ())
            .map_err(AppError::db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn should_lock_room_row_on_mysql() {
        let sql = RoomRepository::select_for_update(7)
            .build(DbBackend::MySql)
            .to_string();

        assert!(sql.contains("`room_id` = 7"));
        assert!(sql.ends_with("FOR UPDATE"));
    }
}
