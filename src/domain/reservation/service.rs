use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, TransactionTrait};
use tracing::{info, warn};

use super::dto::{
    ChangeReservationStatusRequest, CreateReservationRequest, ReservationQuery,
    ReservationResponse, ReservationStatusResponse, StayResponse, UpdateReservationRequest,
};
use super::entity::reservation::ReservationStatus;
use super::entity::stay;
use super::period::StayPeriod;
use super::repository::{ReservationRepository, StayRepository};
use crate::domain::bill::dto::BillResponse;
use crate::domain::bill::entity::bill::BillStatus;
use crate::domain::bill::ledger::PaymentSummary;
use crate::domain::bill::repository::BillRepository;
use crate::domain::bill::BillService;
use crate::domain::room::entity::room::{self, RoomStatus};
use crate::domain::room::repository::RoomRepository;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;

pub struct ReservationService;

impl ReservationService {
    /// 예약 생성
    ///
    /// 점검 중인 객실, 수용 인원 초과, 기간이 겹치는 활성 예약이 있으면 거절합니다.
    pub async fn create(
        state: &AppState,
        user: &AuthUser,
        req: CreateReservationRequest,
    ) -> Result<ReservationResponse, AppError> {
        let user_id = user.user_id()?;
        let period = StayPeriod::new(req.check_in, req.check_out)?;
        ensure_not_in_past(period)?;

        let txn = state.db.begin().await.map_err(AppError::db)?;

        // 같은 객실의 예약을 직렬화해 겹치는 예약이 동시에 확정되지 않게 함
        let room = RoomRepository::get_for_update(&txn, req.room_id).await?;
        ensure_bookable(&txn, &room, period, req.guest_count, None).await?;

        let created =
            ReservationRepository::insert(&txn, room.room_id, user_id, period, req.guest_count)
                .await?;

        txn.commit().await.map_err(AppError::db)?;

        info!(
            reservation_id = created.reservation_id,
            room_id = created.room_id,
            user_id,
            check_in = %created.check_in,
            check_out = %created.check_out,
            "Reservation created"
        );

        Ok(created.into())
    }

    /// 예약 목록 (관리자는 전체, 투숙객은 본인 예약만)
    pub async fn list(
        state: &AppState,
        user: &AuthUser,
        query: ReservationQuery,
    ) -> Result<Vec<ReservationResponse>, AppError> {
        let owner = if user.is_admin() {
            None
        } else {
            Some(user.user_id()?)
        };

        let reservations = ReservationRepository::find_all(&state.db, owner, query.status).await?;
        Ok(reservations
            .into_iter()
            .map(ReservationResponse::from)
            .collect())
    }

    pub async fn get(
        state: &AppState,
        user: &AuthUser,
        reservation_id: i64,
    ) -> Result<ReservationResponse, AppError> {
        let reservation = ReservationRepository::get(&state.db, reservation_id).await?;
        user.require_owner_or_admin(reservation.user_id)?;

        Ok(reservation.into())
    }

    /// 예약 기간 변경 (CONFIRMED 상태에서만)
    pub async fn update_dates(
        state: &AppState,
        user: &AuthUser,
        reservation_id: i64,
        req: UpdateReservationRequest,
    ) -> Result<ReservationResponse, AppError> {
        let period = StayPeriod::new(req.check_in, req.check_out)?;
        ensure_not_in_past(period)?;

        let txn = state.db.begin().await.map_err(AppError::db)?;

        let reservation = ReservationRepository::get(&txn, reservation_id).await?;
        user.require_owner_or_admin(reservation.user_id)?;

        if reservation.status != ReservationStatus::Confirmed {
            return Err(AppError::InvalidStatusTransition(format!(
                "{} 상태의 예약은 기간을 변경할 수 없습니다.",
                reservation.status.label()
            )));
        }

        let guest_count = req.guest_count.unwrap_or(reservation.guest_count);
        let room = RoomRepository::get_for_update(&txn, reservation.room_id).await?;
        ensure_bookable(&txn, &room, period, guest_count, Some(reservation_id)).await?;

        let updated = ReservationRepository::update_period(&txn, reservation, period, guest_count).await?;

        txn.commit().await.map_err(AppError::db)?;

        info!(
            reservation_id,
            check_in = %updated.check_in,
            check_out = %updated.check_out,
            "Reservation period changed"
        );

        Ok(updated.into())
    }

    /// 체크인
    ///
    /// 투숙 기록 생성과 객실 OCCUPIED 전환을 하나의 트랜잭션으로 처리합니다.
    pub async fn check_in(state: &AppState, reservation_id: i64) -> Result<ReservationStatusResponse, AppError> {
        let txn = state.db.begin().await.map_err(AppError::db)?;

        let reservation = ReservationRepository::get(&txn, reservation_id).await?;
        let next = reservation.status.transition_to(ReservationStatus::CheckedIn)?;

        let today = Utc::now().date_naive();
        if today < reservation.check_in || today >= reservation.check_out {
            return Err(AppError::bad_request(format!(
                "체크인은 예약 기간({} ~ {}) 중에만 가능합니다.",
                reservation.check_in, reservation.check_out
            )));
        }

        // 객실당 CHECKED_IN 예약 하나를 보장하기 위해 객실 행을 잠금
        let room = RoomRepository::get_for_update(&txn, reservation.room_id).await?;
        if room.status == RoomStatus::Maintenance {
            return Err(AppError::RoomUnavailable("점검 중인 객실입니다.".to_string()));
        }
        if let Some(occupant) =
            ReservationRepository::find_checked_in_for_room(&txn, room.room_id).await?
        {
            warn!(
                reservation_id,
                room_id = room.room_id,
                occupant_reservation_id = occupant.reservation_id,
                "Check-in refused, room already occupied"
            );
            return Err(AppError::RoomUnavailable(
                "이미 다른 예약이 체크인된 객실입니다.".to_string(),
            ));
        }

        let stay = StayRepository::open(&txn, reservation_id, room.room_id, Utc::now().naive_utc()).await?;
        sync_room_status(&txn, room, next).await?;
        let reservation = ReservationRepository::update_status(&txn, reservation, next).await?;

        txn.commit().await.map_err(AppError::db)?;

        info!(
            reservation_id,
            stay_id = stay.stay_id,
            room_id = stay.room_id,
            "Guest checked in"
        );

        Ok(ReservationStatusResponse {
            reservation: reservation.into(),
            stay: Some(stay.into()),
            bill: None,
        })
    }

    /// 체크아웃
    ///
    /// 투숙 종료, 객실 AVAILABLE 전환, 청구서 발행을 하나의 트랜잭션으로 처리합니다.
    pub async fn check_out(
        state: &AppState,
        reservation_id: i64,
        total_amount: Option<Decimal>,
    ) -> Result<ReservationStatusResponse, AppError> {
        let txn = state.db.begin().await.map_err(AppError::db)?;

        let reservation = ReservationRepository::get(&txn, reservation_id).await?;
        let next = reservation.status.transition_to(ReservationStatus::CheckedOut)?;

        let stay = StayRepository::find_by_reservation(&txn, reservation_id)
            .await?
            .ok_or_else(|| AppError::StayNotFound("투숙 기록이 없는 예약입니다.".to_string()))?;
        let stay = StayRepository::close(&txn, stay, Utc::now().naive_utc()).await?;

        let room = RoomRepository::get(&txn, reservation.room_id).await?;
        sync_room_status(&txn, room, next).await?;

        let bill = BillService::issue_for_stay(&txn, &stay, total_amount).await?;
        let reservation = ReservationRepository::update_status(&txn, reservation, next).await?;

        txn.commit().await.map_err(AppError::db)?;

        info!(
            reservation_id,
            stay_id = stay.stay_id,
            bill_id = bill.bill_id,
            "Guest checked out"
        );

        let summary = PaymentSummary::new(bill.total_amount, &[]);

        Ok(ReservationStatusResponse {
            reservation: reservation.into(),
            stay: Some(stay.into()),
            bill: Some(BillResponse::new(bill, summary)),
        })
    }

    /// 예약 취소 (본인 또는 관리자)
    pub async fn cancel(
        state: &AppState,
        user: &AuthUser,
        reservation_id: i64,
    ) -> Result<ReservationStatusResponse, AppError> {
        let reservation = ReservationRepository::get(&state.db, reservation_id).await?;
        user.require_owner_or_admin(reservation.user_id)?;

        let next = reservation.status.transition_to(ReservationStatus::Canceled)?;
        let reservation = ReservationRepository::update_status(&state.db, reservation, next).await?;

        info!(reservation_id, "Reservation canceled");

        Ok(ReservationStatusResponse {
            reservation: reservation.into(),
            stay: None,
            bill: None,
        })
    }

    /// 상태 값으로 전이 요청을 받아 해당 동작으로 위임합니다.
    pub async fn change_status(
        state: &AppState,
        user: &AuthUser,
        reservation_id: i64,
        req: ChangeReservationStatusRequest,
    ) -> Result<ReservationStatusResponse, AppError> {
        match req.status {
            ReservationStatus::CheckedIn => {
                user.require_admin()?;
                Self::check_in(state, reservation_id).await
            }
            ReservationStatus::CheckedOut => {
                user.require_admin()?;
                Self::check_out(state, reservation_id, req.total_amount).await
            }
            ReservationStatus::Canceled => Self::cancel(state, user, reservation_id).await,
            ReservationStatus::Paid => {
                user.require_admin()?;
                Self::mark_paid(state, reservation_id).await
            }
            ReservationStatus::Confirmed => {
                let reservation = ReservationRepository::get(&state.db, reservation_id).await?;
                user.require_owner_or_admin(reservation.user_id)?;
                Err(AppError::InvalidStatusTransition(format!(
                    "{} 상태의 예약은 CONFIRMED 상태로 되돌릴 수 없습니다.",
                    reservation.status.label()
                )))
            }
        }
    }

    /// 청구서가 결제 완료된 체크아웃 예약을 PAID로 전환
    async fn mark_paid(state: &AppState, reservation_id: i64) -> Result<ReservationStatusResponse, AppError> {
        let reservation = ReservationRepository::get(&state.db, reservation_id).await?;
        let next = reservation.status.transition_to(ReservationStatus::Paid)?;

        let stay = StayRepository::find_by_reservation(&state.db, reservation_id)
            .await?
            .ok_or_else(|| AppError::StayNotFound("투숙 기록이 없는 예약입니다.".to_string()))?;
        let bill = BillRepository::find_by_stay(&state.db, stay.stay_id)
            .await?
            .ok_or_else(|| AppError::BillNotFound("청구서가 발행되지 않은 예약입니다.".to_string()))?;

        if bill.status != BillStatus::Paid {
            return Err(AppError::InvalidStatusTransition(
                "청구서 결제가 완료되지 않은 예약입니다.".to_string(),
            ));
        }

        let reservation = ReservationRepository::update_status(&state.db, reservation, next).await?;

        Ok(ReservationStatusResponse {
            reservation: reservation.into(),
            stay: Some(stay.into()),
            bill: None,
        })
    }

    /// 투숙 기록 조회
    pub async fn get_stay(state: &AppState, user: &AuthUser, stay_id: i64) -> Result<StayResponse, AppError> {
        let stay = StayRepository::get(&state.db, stay_id).await?;
        ensure_stay_access(&state.db, user, &stay).await?;

        Ok(stay.into())
    }

    /// 예약의 투숙 기록 조회
    pub async fn get_stay_by_reservation(
        state: &AppState,
        user: &AuthUser,
        reservation_id: i64,
    ) -> Result<StayResponse, AppError> {
        let reservation = ReservationRepository::get(&state.db, reservation_id).await?;
        user.require_owner_or_admin(reservation.user_id)?;

        StayRepository::find_by_reservation(&state.db, reservation_id)
            .await?
            .map(StayResponse::from)
            .ok_or_else(|| AppError::StayNotFound("아직 체크인하지 않은 예약입니다.".to_string()))
    }
}

/// 관리자이거나 투숙 기록에 연결된 예약의 투숙객인지 확인
pub async fn ensure_stay_access<C>(db: &C, user: &AuthUser, stay: &stay::Model) -> Result<(), AppError>
where
    C: ConnectionTrait,
{
    if user.is_admin() {
        return Ok(());
    }

    let reservation = ReservationRepository::get(db, stay.reservation_id).await?;
    user.require_owner_or_admin(reservation.user_id)
}

fn ensure_not_in_past(period: StayPeriod) -> Result<(), AppError> {
    if period.check_in() < Utc::now().date_naive() {
        return Err(AppError::bad_request("지난 날짜로는 예약할 수 없습니다."));
    }
    Ok(())
}

/// 객실 상태, 수용 인원, 기간 중복 검사
async fn ensure_bookable<C>(
    db: &C,
    room: &room::Model,
    period: StayPeriod,
    guest_count: i32,
    exclude_reservation_id: Option<i64>,
) -> Result<(), AppError>
where
    C: ConnectionTrait,
{
    if room.status == RoomStatus::Maintenance {
        return Err(AppError::RoomUnavailable("점검 중인 객실입니다.".to_string()));
    }
    if guest_count > room.capacity {
        return Err(AppError::bad_request(format!(
            "객실 수용 인원({}명)을 초과했습니다.",
            room.capacity
        )));
    }

    let overlapping =
        ReservationRepository::find_overlapping(db, room.room_id, period, exclude_reservation_id)
            .await?;
    if let Some(conflict) = overlapping.first() {
        return Err(AppError::RoomUnavailable(format!(
            "해당 기간에 이미 예약이 있습니다. ({} ~ {})",
            conflict.check_in, conflict.check_out
        )));
    }

    Ok(())
}

/// 예약 상태에 맞춰 객실 상태 갱신
async fn sync_room_status<C>(
    db: &C,
    room: room::Model,
    status: ReservationStatus,
) -> Result<(), AppError>
where
    C: ConnectionTrait,
{
    if let Some(room_status) = status.room_status_after() {
        RoomRepository::update_status(db, room, room_status).await?;
    }
    Ok(())
}
