use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};

use super::entity::bill::{self, BillStatus, Entity as Bill};
use super::entity::payment::{self, Entity as Payment, PaymentMethod};
use crate::utils::error::AppError;

pub struct BillRepository;

impl BillRepository {
    pub async fn find_by_id<C>(db: &C, bill_id: i64) -> Result<Option<bill::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        Bill::find_by_id(bill_id).one(db).await.map_err(AppError::db)
    }

    /// 존재하지 않으면 BILL4041
    pub async fn get<C>(db: &C, bill_id: i64) -> Result<bill::Model, AppError>
    where
        C: ConnectionTrait,
    {
        Self::find_by_id(db, bill_id)
            .await?
            .ok_or_else(|| AppError::BillNotFound("존재하지 않는 청구서입니다.".to_string()))
    }

    /// 결제 등록 중 청구서 행 잠금 (`SELECT ... FOR UPDATE`)
    pub fn select_for_update(bill_id: i64) -> Select<Bill> {
        Bill::find_by_id(bill_id).lock_exclusive()
    }

    /// 트랜잭션 안에서 청구서를 잠그고 조회. 존재하지 않으면 BILL4041
    pub async fn get_for_update<C>(db: &C, bill_id: i64) -> Result<bill::Model, AppError>
    where
        C: ConnectionTrait,
    {
        Self::select_for_update(bill_id)
            .one(db)
            .await
            .map_err(AppError::db)?
            .ok_or_else(|| AppError::BillNotFound("존재하지 않는 청구서입니다.".to_string()))
    }

    pub async fn find_by_stay<C>(db: &C, stay_id: i64) -> Result<Option<bill::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        Bill::find()
            .filter(bill::Column::StayId.eq(stay_id))
            .one(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn find_all<C>(db: &C, status: Option<BillStatus>) -> Result<Vec<bill::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        let mut query = Bill::find();

        if let Some(status) = status {
            query = query.filter(bill::Column::Status.eq(status));
        }

        query
            .order_by_desc(bill::Column::IssuedAt)
            .all(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn insert<C>(db: &C, stay_id: i64, total_amount: Decimal) -> Result<bill::Model, AppError>
    where
        C: ConnectionTrait,
    {
        bill::ActiveModel {
            stay_id: Set(stay_id),
            total_amount: Set(total_amount),
            status: Set(BillStatus::Unpaid),
            issued_at: Set(Utc::now().naive_utc()),
            paid_at: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::db)
    }

    pub async fn mark_paid<C>(
        db: &C,
        model: bill::Model,
        paid_at: NaiveDateTime,
    ) -> Result<bill::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let mut active: bill::ActiveModel = model.into();
        active.status = Set(BillStatus::Paid);
        active.paid_at = Set(Some(paid_at));
        active.update(db).await.map_err(AppError::db)
    }
}

pub struct PaymentRepository;

impl PaymentRepository {
    /// 결제 내역 (결제 시각 오름차순)
    pub async fn find_by_bill<C>(db: &C, bill_id: i64) -> Result<Vec<payment::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        Payment::find()
            .filter(payment::Column::BillId.eq(bill_id))
            .order_by_asc(payment::Column::PaidAt)
            .order_by_asc(payment::Column::PaymentId)
            .all(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn find_by_bills<C>(db: &C, bill_ids: Vec<i64>) -> Result<Vec<payment::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        if bill_ids.is_empty() {
            return Ok(Vec::new());
        }

        Payment::find()
            .filter(payment::Column::BillId.is_in(bill_ids))
            .all(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn insert<C>(
        db: &C,
        bill_id: i64,
        amount: Decimal,
        method: PaymentMethod,
        paid_at: NaiveDateTime,
    ) -> Result<payment::Model, AppError>
    where
        C: ConnectionTrait,
    {
        payment::ActiveModel {
            bill_id: Set(bill_id),
            amount: Set(amount),
            method: Set(method),
            paid_at: Set(paid_at),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn should_lock_bill_row_on_mysql() {
        let sql = BillRepository::select_for_update(3)
            .build(DbBackend::MySql)
            .to_string();

        assert!(sql.contains("`bill_id` = 3"));
        assert!(sql.ends_with("FOR UPDATE"));
    }
}
