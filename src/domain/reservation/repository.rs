use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    Iterable, QueryOrder, QuerySelect, Set,
};

use super::entity::reservation::{self, Entity as Reservation, ReservationStatus};
use super::entity::stay::{self, Entity as Stay};
use super::period::StayPeriod;
use crate::utils::error::AppError;

fn active_statuses() -> Vec<ReservationStatus> {
    ReservationStatus::iter().filter(|s| s.is_active()).collect()
}

pub struct ReservationRepository;

impl ReservationRepository {
    pub async fn find_by_id<C>(db: &C, reservation_id: i64) -> Result<Option<reservation::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        Reservation::find_by_id(reservation_id)
            .one(db)
            .await
            .map_err(AppError::db)
    }

    /// 존재하지 않으면 RESERVATION4041
    pub async fn get<C>(db: &C, reservation_id: i64) -> Result<reservation::Model, AppError>
    where
        C: ConnectionTrait,
    {
        Self::find_by_id(db, reservation_id).await?.ok_or_else(|| {
            AppError::ReservationNotFound("존재하지 않는 예약입니다.".to_string())
        })
    }

    /// 사용자 ID가 없으면 전체 예약 조회
    pub async fn find_all<C>(
        db: &C,
        user_id: Option<i64>,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<reservation::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        let mut query = Reservation::find();

        if let Some(user_id) = user_id {
            query = query.filter(reservation::Column::UserId.eq(user_id));
        }
        if let Some(status) = status {
            query = query.filter(reservation::Column::Status.eq(status));
        }

        query
            .order_by_desc(reservation::Column::CheckIn)
            .order_by_desc(reservation::Column::ReservationId)
            .all(db)
            .await
            .map_err(AppError::db)
    }

    /// 객실의 활성 예약 중 기간이 겹치는 예약
    pub async fn find_overlapping<C>(
        db: &C,
        room_id: i64,
        period: StayPeriod,
        exclude_reservation_id: Option<i64>,
    ) -> Result<Vec<reservation::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        let mut query = Reservation::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(reservation::Column::Status.is_in(active_statuses()))
            .filter(reservation::Column::CheckIn.lt(period.check_out()))
            .filter(reservation::Column::CheckOut.gt(period.check_in()));

        if let Some(exclude_id) = exclude_reservation_id {
            query = query.filter(reservation::Column::ReservationId.ne(exclude_id));
        }

        query.all(db).await.map_err(AppError::db)
    }

    /// 기간 내 활성 예약으로 막혀 있는 객실 ID 목록
    pub async fn find_booked_room_ids<C>(db: &C, period: StayPeriod) -> Result<Vec<i64>, AppError>
    where
        C: ConnectionTrait,
    {
        Reservation::find()
            .select_only()
            .column(reservation::Column::RoomId)
            .distinct()
            .filter(reservation::Column::Status.is_in(active_statuses()))
            .filter(reservation::Column::CheckIn.lt(period.check_out()))
            .filter(reservation::Column::CheckOut.gt(period.check_in()))
            .into_tuple::<i64>()
            .all(db)
            .await
            .map_err(AppError::db)
    }

    /// 객실에 현재 체크인 상태인 예약
    pub async fn find_checked_in_for_room<C>(
        db: &C,
        room_id: i64,
    ) -> Result<Option<reservation::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        Reservation::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(reservation::Column::Status.eq(ReservationStatus::CheckedIn))
            .one(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn count_for_room<C>(db: &C, room_id: i64, active_only: bool) -> Result<u64, AppError>
    where
        C: ConnectionTrait,
    {
        let mut query = Reservation::find().filter(reservation::Column::RoomId.eq(room_id));

        if active_only {
            query = query.filter(reservation::Column::Status.is_in(active_statuses()));
        }

        query.count(db).await.map_err(AppError::db)
    }

    pub async fn insert<C>(
        db: &C,
        room_id: i64,
        user_id: i64,
        period: StayPeriod,
        guest_count: i32,
    ) -> Result<reservation::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().naive_utc();

        reservation::ActiveModel {
            room_id: Set(room_id),
            user_id: Set(user_id),
            check_in: Set(period.check_in()),
            check_out: Set(period.check_out()),
            guest_count: Set(guest_count),
            status: Set(ReservationStatus::Confirmed),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::db)
    }

    pub async fn update_period<C>(
        db: &C,
        model: reservation::Model,
        period: StayPeriod,
        guest_count: i32,
    ) -> Result<reservation::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let mut active: reservation::ActiveModel = model.into();
        active.check_in = Set(period.check_in());
        active.check_out = Set(period.check_out());
        active.guest_count = Set(guest_count);
        active.updated_at = Set(Utc::now().naive_utc());
        active.update(db).await.map_err(AppError::db)
    }

    pub async fn update_status<C>(
        db: &C,
        model: reservation::Model,
        status: ReservationStatus,
    ) -> Result<reservation::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let mut active: reservation::ActiveModel = model.into();
        active.status = Set(status);
        active.updated_at = Set(Utc::now().naive_utc());
        active.update(db).await.map_err(AppError::db)
    }
}

pub struct StayRepository;

impl StayRepository {
    pub async fn find_by_id<C>(db: &C, stay_id: i64) -> Result<Option<stay::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        Stay::find_by_id(stay_id).one(db).await.map_err(AppError::db)
    }

    /// 존재하지 않으면 STAY4041
    pub async fn get<C>(db: &C, stay_id: i64) -> Result<stay::Model, AppError>
    where
        C: ConnectionTrait,
    {
        Self::find_by_id(db, stay_id)
            .await?
            .ok_or_else(|| AppError::StayNotFound("존재하지 않는 투숙 기록입니다.".to_string()))
    }

    pub async fn find_by_reservation<C>(
        db: &C,
        reservation_id: i64,
    ) -> Result<Option<stay::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        Stay::find()
            .filter(stay::Column::ReservationId.eq(reservation_id))
            .one(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn open<C>(
        db: &C,
        reservation_id: i64,
        room_id: i64,
        checked_in_at: NaiveDateTime,
    ) -> Result<stay::Model, AppError>
    where
        C: ConnectionTrait,
    {
        stay::ActiveModel {
            reservation_id: Set(reservation_id),
            room_id: Set(room_id),
            checked_in_at: Set(checked_in_at),
            checked_out_at: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::db)
    }

    pub async fn close<C>(
        db: &C,
        model: stay::Model,
        checked_out_at: NaiveDateTime,
    ) -> Result<stay::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let mut active: stay::ActiveModel = model.into();
        active.checked_out_at = Set(Some(checked_out_at));
        active.update(db).await.map_err(AppError::db)
    }
}
