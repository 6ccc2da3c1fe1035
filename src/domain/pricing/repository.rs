use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entity::price_history::{self, Entity as PriceHistory};
use crate::utils::error::AppError;

pub struct PriceHistoryRepository;

impl PriceHistoryRepository {
    pub async fn find_by_id<C>(
        db: &C,
        price_history_id: i64,
    ) -> Result<Option<price_history::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        PriceHistory::find_by_id(price_history_id)
            .one(db)
            .await
            .map_err(AppError::db)
    }

    /// 객실의 전체 요금 이력 (시작일 오름차순)
    pub async fn find_by_room<C>(db: &C, room_id: i64) -> Result<Vec<price_history::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        PriceHistory::find()
            .filter(price_history::Column::RoomId.eq(room_id))
            .order_by_asc(price_history::Column::StartDate)
            .all(db)
            .await
            .map_err(AppError::db)
    }

    /// 여러 객실에 대해 특정 날짜를 포함하는 요금 구간 조회
    pub async fn find_covering_for_rooms<C>(
        db: &C,
        room_ids: Vec<i64>,
        date: NaiveDate,
    ) -> Result<Vec<price_history::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        PriceHistory::find()
            .filter(price_history::Column::RoomId.is_in(room_ids))
            .filter(price_history::Column::StartDate.lte(date))
            .filter(
                Condition::any()
                    .add(price_history::Column::EndDate.is_null())
                    .add(price_history::Column::EndDate.gte(date)),
            )
            .all(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn insert<C>(
        db: &C,
        room_id: i64,
        price: Decimal,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<price_history::Model, AppError>
    where
        C: ConnectionTrait,
    {
        price_history::ActiveModel {
            room_id: Set(room_id),
            price: Set(price),
            start_date: Set(start_date),
            end_date: Set(end_date),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::db)
    }

    pub async fn delete<C>(db: &C, price_history_id: i64) -> Result<(), AppError>
    where
        C: ConnectionTrait,
    {
        PriceHistory::delete_by_id(price_history_id)
            .exec(db)
            .await
            .map(|_| ())
            .map_err(AppError::db)
    }

    pub async fn delete_by_room<C>(db: &C, room_id: i64) -> Result<u64, AppError>
    where
        C: ConnectionTrait,
    {
        PriceHistory::delete_many()
            .filter(price_history::Column::RoomId.eq(room_id))
            .exec(db)
            .await
            .map(|res| res.rows_affected)
            .map_err(AppError::db)
    }
}
