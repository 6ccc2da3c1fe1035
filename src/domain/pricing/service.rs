use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, TransactionTrait};
use tracing::info;

use super::dto::{AddPriceRequest, PriceResponse, ResolvedPriceResponse};
use super::entity::price_history;
use super::repository::PriceHistoryRepository;
use crate::domain::room::repository::RoomRepository;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::money::{ensure_storable, PRICE_PRECISION};

pub struct PricingService;

impl PricingService {
    /// 객실 요금 이력 조회
    pub async fn list_prices(state: &AppState, room_id: i64) -> Result<Vec<PriceResponse>, AppError> {
        RoomRepository::get(&state.db, room_id).await?;

        let history = PriceHistoryRepository::find_by_room(&state.db, room_id).await?;
        Ok(history.into_iter().map(PriceResponse::from).collect())
    }

    /// 요금 구간 등록
    ///
    /// 같은 객실의 기존 구간과 하루라도 겹치면 PRICE4091.
    pub async fn add_price(
        state: &AppState,
        room_id: i64,
        req: AddPriceRequest,
    ) -> Result<PriceResponse, AppError> {
        if req.price <= Decimal::ZERO {
            return Err(AppError::bad_request("요금은 0보다 커야 합니다."));
        }
        let price = ensure_storable(req.price, PRICE_PRECISION, "요금")?;
        if let Some(end_date) = req.end_date {
            if end_date < req.start_date {
                return Err(AppError::bad_request(
                    "요금 종료일은 시작일보다 빠를 수 없습니다.",
                ));
            }
        }

        let txn = state.db.begin().await.map_err(AppError::db)?;

        // 같은 객실의 요금 등록을 직렬화해 겹치는 구간이 동시에 들어가지 않게 함
        RoomRepository::get_for_update(&txn, room_id).await?;

        let history = PriceHistoryRepository::find_by_room(&txn, room_id).await?;
        if let Some(conflict) = find_overlap(&history, req.start_date, req.end_date) {
            return Err(AppError::PriceOverlap(format!(
                "기존 요금 구간({} ~ {})과 기간이 겹칩니다.",
                conflict.start_date,
                conflict
                    .end_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "종료일 없음".to_string())
            )));
        }

        let created = PriceHistoryRepository::insert(
            &txn,
            room_id,
            price,
            req.start_date,
            req.end_date,
        )
        .await?;

        txn.commit().await.map_err(AppError::db)?;

        info!(
            room_id,
            price_history_id = created.price_history_id,
            price = %created.price,
            "Price interval added"
        );

        Ok(created.into())
    }

    /// 요금 구간 삭제
    pub async fn delete_price(state: &AppState, price_history_id: i64) -> Result<(), AppError> {
        PriceHistoryRepository::find_by_id(&state.db, price_history_id)
            .await?
            .ok_or_else(|| AppError::PriceNotFound("존재하지 않는 요금 구간입니다.".to_string()))?;

        PriceHistoryRepository::delete(&state.db, price_history_id).await
    }

    /// 특정 날짜의 1박 요금 조회
    pub async fn resolve_price(
        state: &AppState,
        room_id: i64,
        date: NaiveDate,
    ) -> Result<ResolvedPriceResponse, AppError> {
        RoomRepository::get(&state.db, room_id).await?;

        let price_per_night = Self::price_on(&state.db, room_id, date).await?;

        Ok(ResolvedPriceResponse {
            room_id,
            date,
            price_per_night,
        })
    }

    /// 트랜잭션 안에서도 사용하는 요금 조회
    pub async fn price_on<C>(db: &C, room_id: i64, date: NaiveDate) -> Result<Decimal, AppError>
    where
        C: ConnectionTrait,
    {
        let history = PriceHistoryRepository::find_by_room(db, room_id).await?;

        covering_price(&history, date).ok_or_else(|| {
            AppError::PriceNotFound(format!("{} 날짜에 해당하는 객실 요금이 없습니다.", date))
        })
    }
}

/// `[start, end]` 구간(양 끝 포함)이 날짜를 포함하는지
fn covers(interval: &price_history::Model, date: NaiveDate) -> bool {
    interval.start_date <= date && interval.end_date.map_or(true, |end| date <= end)
}

/// 날짜를 포함하는 구간의 요금
pub fn covering_price(history: &[price_history::Model], date: NaiveDate) -> Option<Decimal> {
    history
        .iter()
        .find(|interval| covers(interval, date))
        .map(|interval| interval.price)
}

/// 새 구간과 겹치는 기존 구간 (종료일 없음 = 무한대)
pub fn find_overlap(
    history: &[price_history::Model],
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Option<&price_history::Model> {
    history.iter().find(|existing| {
        let starts_before_existing_ends = existing.end_date.map_or(true, |e| start <= e);
        let existing_starts_before_end = end.map_or(true, |e| existing.start_date <= e);
        starts_before_existing_ends && existing_starts_before_end
    })
}
