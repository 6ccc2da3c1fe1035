use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entity::service_order::{self, Entity as ServiceOrder, ServiceOrderStatus};
use crate::utils::error::AppError;

pub struct ServiceOrderRepository;

impl ServiceOrderRepository {
    /// 존재하지 않으면 ORDER4041
    pub async fn get<C>(db: &C, service_order_id: i64) -> Result<service_order::Model, AppError>
    where
        C: ConnectionTrait,
    {
        ServiceOrder::find_by_id(service_order_id)
            .one(db)
            .await
            .map_err(AppError::db)?
            .ok_or_else(|| {
                AppError::ServiceOrderNotFound("존재하지 않는 서비스 주문입니다.".to_string())
            })
    }

    pub async fn find_by_stay<C>(db: &C, stay_id: i64) -> Result<Vec<service_order::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        ServiceOrder::find()
            .filter(service_order::Column::StayId.eq(stay_id))
            .order_by_asc(service_order::Column::CreatedAt)
            .order_by_asc(service_order::Column::ServiceOrderId)
            .all(db)
            .await
            .map_err(AppError::db)
    }

    pub async fn insert<C>(
        db: &C,
        stay_id: i64,
        description: String,
        amount: Decimal,
    ) -> Result<service_order::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().naive_utc();

        service_order::ActiveModel {
            stay_id: Set(stay_id),
            description: Set(description),
            amount: Set(amount),
            status: Set(ServiceOrderStatus::Requested),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::db)
    }

    pub async fn update_status<C>(
        db: &C,
        model: service_order::Model,
        status: ServiceOrderStatus,
    ) -> Result<service_order::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let mut active: service_order::ActiveModel = model.into();
        active.status = Set(status);
        active.updated_at = Set(Utc::now().naive_utc());
        active.update(db).await.map_err(AppError::db)
    }
}
