use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, TransactionTrait};
use tracing::info;

use super::dto::{
    AddPaymentRequest, BillQuery, BillResponse, IssueBillRequest, PaymentResponse,
    PaymentResultResponse,
};
use super::entity::bill;
use super::entity::payment;
use super::ledger::PaymentSummary;
use super::repository::{BillRepository, PaymentRepository};
use crate::domain::pricing::PricingService;
use crate::domain::reservation::entity::reservation::ReservationStatus;
use crate::domain::reservation::entity::stay;
use crate::domain::reservation::period::billable_nights;
use crate::domain::reservation::repository::{ReservationRepository, StayRepository};
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::money::{ensure_storable, AMOUNT_PRECISION};

pub struct BillService;

impl BillService {
    /// 종료된 투숙에 대해 청구서 발행
    ///
    /// 금액이 없으면 `숙박일 수 x 체크인 날짜의 1박 요금`으로 계산합니다.
    /// 체크아웃 트랜잭션 안에서도 호출됩니다.
    pub async fn issue_for_stay<C>(
        db: &C,
        stay: &stay::Model,
        total_amount: Option<Decimal>,
    ) -> Result<bill::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let checked_out_at = stay
            .checked_out_at
            .ok_or_else(|| AppError::bad_request("체크아웃되지 않은 투숙입니다."))?;

        if BillRepository::find_by_stay(db, stay.stay_id).await?.is_some() {
            return Err(AppError::BillAlreadyIssued(
                "이미 청구서가 발행된 투숙입니다.".to_string(),
            ));
        }

        let total_amount = match total_amount {
            Some(amount) if amount <= Decimal::ZERO => {
                return Err(AppError::bad_request("청구 금액은 0보다 커야 합니다."));
            }
            Some(amount) => amount,
            None => {
                let check_in_date = stay.checked_in_at.date();
                let nights = billable_nights(check_in_date, checked_out_at.date());
                let price = PricingService::price_on(db, stay.room_id, check_in_date).await?;
                price * Decimal::from(nights)
            }
        };
        let total_amount = ensure_storable(total_amount, AMOUNT_PRECISION, "청구 금액")?;

        let created = BillRepository::insert(db, stay.stay_id, total_amount).await?;

        info!(
            bill_id = created.bill_id,
            stay_id = stay.stay_id,
            total_amount = %created.total_amount,
            "Bill issued"
        );

        Ok(created)
    }

    /// 청구서 수동 발행 (복구용)
    ///
    /// 체크아웃은 같은 트랜잭션에서 청구서를 발행하므로 정상 흐름에서는 호출되지 않습니다.
    /// 청구서가 운영 중 삭제되었거나 이전 데이터에 청구서가 없는 종료된 투숙만 발행할 수 있고,
    /// 그 외에는 400(진행 중인 투숙) 또는 409 BILL4091을 반환합니다.
    pub async fn issue(state: &AppState, req: IssueBillRequest) -> Result<BillResponse, AppError> {
        let stay = StayRepository::get(&state.db, req.stay_id).await?;

        let created = Self::issue_for_stay(&state.db, &stay, req.total_amount).await?;
        let summary = PaymentSummary::new(created.total_amount, &[]);

        Ok(BillResponse::new(created, summary))
    }

    pub async fn list_bills(state: &AppState, query: BillQuery) -> Result<Vec<BillResponse>, AppError> {
        let bills = BillRepository::find_all(&state.db, query.status).await?;

        let bill_ids = bills.iter().map(|b| b.bill_id).collect();
        let mut payments_by_bill: HashMap<i64, Vec<payment::Model>> = HashMap::new();
        for payment in PaymentRepository::find_by_bills(&state.db, bill_ids).await? {
            payments_by_bill
                .entry(payment.bill_id)
                .or_default()
                .push(payment);
        }

        Ok(bills
            .into_iter()
            .map(|bill| {
                let payments = payments_by_bill
                    .get(&bill.bill_id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let summary = PaymentSummary::new(bill.total_amount, payments);
                BillResponse::new(bill, summary)
            })
            .collect())
    }

    pub async fn get_bill(state: &AppState, user: &AuthUser, bill_id: i64) -> Result<BillResponse, AppError> {
        let bill = BillRepository::get(&state.db, bill_id).await?;
        ensure_bill_access(&state.db, user, &bill).await?;

        let payments = PaymentRepository::find_by_bill(&state.db, bill_id).await?;
        let summary = PaymentSummary::new(bill.total_amount, &payments);

        Ok(BillResponse::new(bill, summary))
    }

    /// 투숙 기록의 청구서 조회
    pub async fn get_bill_by_stay(
        state: &AppState,
        user: &AuthUser,
        stay_id: i64,
    ) -> Result<BillResponse, AppError> {
        StayRepository::get(&state.db, stay_id).await?;

        let bill = BillRepository::find_by_stay(&state.db, stay_id)
            .await?
            .ok_or_else(|| AppError::BillNotFound("청구서가 발행되지 않은 투숙입니다.".to_string()))?;

        Self::get_bill(state, user, bill.bill_id).await
    }

    /// 결제 등록
    ///
    /// 누적 결제액이 청구 금액에 도달하면 청구서를 PAID로 바꾸고
    /// 체크아웃된 예약도 PAID로 전환합니다.
    pub async fn add_payment(
        state: &AppState,
        user: &AuthUser,
        bill_id: i64,
        req: AddPaymentRequest,
    ) -> Result<PaymentResultResponse, AppError> {
        let bill = BillRepository::get(&state.db, bill_id).await?;
        ensure_bill_access(&state.db, user, &bill).await?;

        let txn = state.db.begin().await.map_err(AppError::db)?;

        // 동시 결제가 같은 잔액을 보고 초과 결제하지 않도록 청구서 행을 잠금
        let bill = BillRepository::get_for_update(&txn, bill_id).await?;
        let payments = PaymentRepository::find_by_bill(&txn, bill_id).await?;
        let summary = PaymentSummary::new(bill.total_amount, &payments).apply(req.amount)?;

        let now = Utc::now().naive_utc();
        let payment = PaymentRepository::insert(&txn, bill_id, req.amount, req.method, now).await?;

        let bill = if summary.is_settled() {
            let paid = BillRepository::mark_paid(&txn, bill, now).await?;

            let stay = StayRepository::get(&txn, paid.stay_id).await?;
            let reservation = ReservationRepository::get(&txn, stay.reservation_id).await?;
            if reservation.status == ReservationStatus::CheckedOut {
                let next = reservation.status.transition_to(ReservationStatus::Paid)?;
                ReservationRepository::update_status(&txn, reservation, next).await?;
            }

            paid
        } else {
            bill
        };

        txn.commit().await.map_err(AppError::db)?;

        info!(
            bill_id,
            payment_id = payment.payment_id,
            amount = %payment.amount,
            outstanding = %summary.outstanding(),
            settled = summary.is_settled(),
            "Payment recorded"
        );

        Ok(PaymentResultResponse {
            payment: payment.into(),
            bill: BillResponse::new(bill, summary),
        })
    }

    pub async fn list_payments(
        state: &AppState,
        user: &AuthUser,
        bill_id: i64,
    ) -> Result<Vec<PaymentResponse>, AppError> {
        let bill = BillRepository::get(&state.db, bill_id).await?;
        ensure_bill_access(&state.db, user, &bill).await?;

        let payments = PaymentRepository::find_by_bill(&state.db, bill_id).await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }
}

/// 관리자이거나 청구서에 연결된 예약의 투숙객인지 확인
async fn ensure_bill_access<C>(db: &C, user: &AuthUser, bill: &bill::Model) -> Result<(), AppError>
where
    C: ConnectionTrait,
{
    if user.is_admin() {
        return Ok(());
    }

    let stay = StayRepository::get(db, bill.stay_id).await?;
    let reservation = ReservationRepository::get(db, stay.reservation_id).await?;

    user.require_owner_or_admin(reservation.user_id)
}
