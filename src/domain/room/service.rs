use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, Set, TransactionTrait};
use tracing::{info, warn};

use super::dto::{
    AvailabilityQuery, ChangeRoomStatusRequest, CreateRoomRequest, RoomQuery, RoomResponse,
    UpdateRoomRequest,
};
use super::entity::room::{self, RoomStatus};
use super::repository::{RoomFilter, RoomRepository};
use crate::domain::equipment::repository::EquipmentRepository;
use crate::domain::pricing::repository::PriceHistoryRepository;
use crate::domain::reservation::period::StayPeriod;
use crate::domain::reservation::repository::ReservationRepository;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct RoomService;

impl RoomService {
    /// 객실 목록 조회 (오늘 기준 요금 포함)
    pub async fn list_rooms(state: &AppState, query: RoomQuery) -> Result<Vec<RoomResponse>, AppError> {
        let rooms = RoomRepository::find_all(
            &state.db,
            RoomFilter {
                status: query.status,
                room_type: query.room_type,
                ..Default::default()
            },
        )
        .await?;

        with_prices(&state.db, rooms, Utc::now().date_naive()).await
    }

    /// 객실 단건 조회
    pub async fn get_room(state: &AppState, room_id: i64) -> Result<RoomResponse, AppError> {
        let room = RoomRepository::get(&state.db, room_id).await?;

        let mut responses = with_prices(&state.db, vec![room], Utc::now().date_naive()).await?;
        responses
            .pop()
            .ok_or_else(|| AppError::internal_error("객실 응답 생성에 실패했습니다."))
    }

    /// 객실 등록
    pub async fn create_room(state: &AppState, req: CreateRoomRequest) -> Result<RoomResponse, AppError> {
        let status = req.status.unwrap_or(RoomStatus::Available);
        if status == RoomStatus::Occupied {
            return Err(AppError::bad_request(
                "OCCUPIED 상태는 체크인을 통해서만 지정됩니다.",
            ));
        }

        if RoomRepository::find_by_number(&state.db, &req.room_number)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "이미 존재하는 객실 번호입니다: {}",
                req.room_number
            )));
        }

        let created = RoomRepository::insert(
            &state.db,
            req.room_number,
            req.room_type,
            status,
            req.capacity,
            req.description,
        )
        .await?;

        info!(
            room_id = created.room_id,
            room_number = %created.room_number,
            "Room created"
        );

        Ok(RoomResponse::new(created, None))
    }

    /// 객실 정보 수정
    pub async fn update_room(
        state: &AppState,
        room_id: i64,
        req: UpdateRoomRequest,
    ) -> Result<RoomResponse, AppError> {
        let room = RoomRepository::get(&state.db, room_id).await?;

        if let Some(room_number) = &req.room_number {
            if let Some(existing) = RoomRepository::find_by_number(&state.db, room_number).await? {
                if existing.room_id != room_id {
                    return Err(AppError::Conflict(format!(
                        "이미 존재하는 객실 번호입니다: {}",
                        room_number
                    )));
                }
            }
        }

        let mut active: room::ActiveModel = room.into();
        if let Some(room_number) = req.room_number {
            active.room_number = Set(room_number);
        }
        if let Some(room_type) = req.room_type {
            active.room_type = Set(room_type);
        }
        if let Some(capacity) = req.capacity {
            active.capacity = Set(capacity);
        }
        if let Some(description) = req.description {
            active.description = Set(Some(description));
        }

        let updated = RoomRepository::update(&state.db, active).await?;

        Self::get_room(state, updated.room_id).await
    }

    /// 객실 상태 변경 (AVAILABLE <-> MAINTENANCE)
    pub async fn change_status(
        state: &AppState,
        room_id: i64,
        req: ChangeRoomStatusRequest,
    ) -> Result<RoomResponse, AppError> {
        if req.status == RoomStatus::Occupied {
            return Err(AppError::bad_request(
                "OCCUPIED 상태는 체크인을 통해서만 지정됩니다.",
            ));
        }

        let room = RoomRepository::get(&state.db, room_id).await?;
        if room.status == RoomStatus::Occupied {
            return Err(AppError::RoomUnavailable(
                "투숙 중인 객실의 상태는 변경할 수 없습니다.".to_string(),
            ));
        }

        let previous = room.status;
        let updated = RoomRepository::update_status(&state.db, room, req.status).await?;

        info!(
            room_id,
            from = ?previous,
            to = ?updated.status,
            "Room status changed"
        );

        Self::get_room(state, room_id).await
    }

    /// 객실 삭제
    ///
    /// 예약 기록이 하나라도 있으면 삭제할 수 없습니다.
    /// 연결된 비품은 미배정 상태로 돌리고 요금 이력은 함께 삭제합니다.
    pub async fn delete_room(state: &AppState, room_id: i64) -> Result<(), AppError> {
        RoomRepository::get(&state.db, room_id).await?;

        let reservation_count = ReservationRepository::count_for_room(&state.db, room_id, false).await?;
        if reservation_count > 0 {
            warn!(room_id, reservation_count, "Room delete refused");
            return Err(AppError::RoomUnavailable(
                "예약 기록이 있는 객실은 삭제할 수 없습니다.".to_string(),
            ));
        }

        let txn = state.db.begin().await.map_err(AppError::db)?;

        let unlinked = EquipmentRepository::unlink_room(&txn, room_id).await?;
        let prices = PriceHistoryRepository::delete_by_room(&txn, room_id).await?;
        RoomRepository::delete(&txn, room_id).await?;

        txn.commit().await.map_err(AppError::db)?;

        info!(
            room_id,
            unlinked_equipment = unlinked,
            deleted_prices = prices,
            "Room deleted"
        );

        Ok(())
    }

    /// 예약 가능 객실 검색
    ///
    /// 점검 중인 객실과 기간이 겹치는 활성 예약이 있는 객실은 제외됩니다.
    /// 요금은 체크인 날짜 기준입니다.
    pub async fn search_available(
        state: &AppState,
        query: AvailabilityQuery,
    ) -> Result<Vec<RoomResponse>, AppError> {
        let period = StayPeriod::new(query.check_in, query.check_out)?;

        if let Some(guests) = query.guests {
            if guests < 1 {
                return Err(AppError::bad_request("투숙 인원은 1명 이상이어야 합니다."));
            }
        }

        let booked = ReservationRepository::find_booked_room_ids(&state.db, period).await?;

        let rooms = RoomRepository::find_all(
            &state.db,
            RoomFilter {
                exclude_status: Some(RoomStatus::Maintenance),
                min_capacity: query.guests,
                exclude_ids: booked,
                ..Default::default()
            },
        )
        .await?;

        with_prices(&state.db, rooms, period.check_in()).await
    }
}

/// 객실 목록에 날짜 기준 1박 요금을 붙입니다.
async fn with_prices<C>(
    db: &C,
    rooms: Vec<room::Model>,
    date: NaiveDate,
) -> Result<Vec<RoomResponse>, AppError>
where
    C: ConnectionTrait,
{
    let room_ids = rooms.iter().map(|room| room.room_id).collect();
    let prices: HashMap<i64, Decimal> =
        PriceHistoryRepository::find_covering_for_rooms(db, room_ids, date)
            .await?
            .into_iter()
            .map(|interval| (interval.room_id, interval.price))
            .collect();

    Ok(rooms
        .into_iter()
        .map(|room| {
            let price = prices.get(&room.room_id).copied();
            RoomResponse::new(room, price)
        })
        .collect())
}
