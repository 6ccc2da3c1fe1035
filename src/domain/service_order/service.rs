use rust_decimal::Decimal;
use tracing::info;

use super::dto::{ChangeServiceOrderStatusRequest, CreateServiceOrderRequest, ServiceOrderResponse};
use super::entity::service_order::ServiceOrderStatus;
use super::repository::ServiceOrderRepository;
use crate::domain::reservation::repository::StayRepository;
use crate::domain::reservation::service::ensure_stay_access;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::money::{ensure_storable, AMOUNT_PRECISION};

pub struct ServiceOrderService;

impl ServiceOrderService {
    /// 투숙 중인 고객의 서비스 주문 접수
    pub async fn create(
        state: &AppState,
        user: &AuthUser,
        stay_id: i64,
        req: CreateServiceOrderRequest,
    ) -> Result<ServiceOrderResponse, AppError> {
        if req.amount < Decimal::ZERO {
            return Err(AppError::bad_request("주문 금액은 0 이상이어야 합니다."));
        }
        let amount = ensure_storable(req.amount, AMOUNT_PRECISION, "주문 금액")?;

        let stay = StayRepository::get(&state.db, stay_id).await?;
        ensure_stay_access(&state.db, user, &stay).await?;

        if !stay.is_open() {
            return Err(AppError::bad_request(
                "체크아웃된 투숙에는 서비스를 주문할 수 없습니다.",
            ));
        }

        let created =
            ServiceOrderRepository::insert(&state.db, stay_id, req.description, amount).await?;

        info!(
            service_order_id = created.service_order_id,
            stay_id,
            amount = %created.amount,
            "Service order requested"
        );

        Ok(created.into())
    }

    pub async fn list_for_stay(
        state: &AppState,
        user: &AuthUser,
        stay_id: i64,
    ) -> Result<Vec<ServiceOrderResponse>, AppError> {
        let stay = StayRepository::get(&state.db, stay_id).await?;
        ensure_stay_access(&state.db, user, &stay).await?;

        let orders = ServiceOrderRepository::find_by_stay(&state.db, stay_id).await?;
        Ok(orders.into_iter().map(ServiceOrderResponse::from).collect())
    }

    /// 주문 처리 (REQUESTED -> DELIVERED | CANCELED)
    pub async fn change_status(
        state: &AppState,
        service_order_id: i64,
        req: ChangeServiceOrderStatusRequest,
    ) -> Result<ServiceOrderResponse, AppError> {
        let order = ServiceOrderRepository::get(&state.db, service_order_id).await?;

        if !order.status.can_transition_to(req.status) {
            return Err(AppError::bad_request(format!(
                "{:?} 상태의 주문은 {:?} 상태로 변경할 수 없습니다.",
                order.status, req.status
            )));
        }

        let updated = ServiceOrderRepository::update_status(&state.db, order, req.status).await?;

        info!(
            service_order_id,
            status = ?updated.status,
            "Service order status changed"
        );

        Ok(updated.into())
    }
}

impl ServiceOrderStatus {
    pub fn can_transition_to(self, next: ServiceOrderStatus) -> bool {
        self == ServiceOrderStatus::Requested && next != ServiceOrderStatus::Requested
    }
}
