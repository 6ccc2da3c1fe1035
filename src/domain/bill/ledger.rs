//! 청구서 결제 합계 계산

use rust_decimal::Decimal;

use super::entity::payment;
use crate::utils::error::AppError;
use crate::utils::money::{ensure_storable, AMOUNT_PRECISION};

/// 청구 금액 대비 결제 현황
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSummary {
    pub total: Decimal,
    pub paid: Decimal,
}

impl PaymentSummary {
    pub fn new(total: Decimal, payments: &[payment::Model]) -> Self {
        Self {
            total,
            paid: payments.iter().map(|p| p.amount).sum(),
        }
    }

    pub fn outstanding(&self) -> Decimal {
        (self.total - self.paid).max(Decimal::ZERO)
    }

    pub fn is_settled(&self) -> bool {
        self.paid >= self.total
    }

    /// 결제를 반영한 새 합계. 0 이하 금액, 센트 미만 금액, 초과 결제는 BILL4001
    pub fn apply(&self, amount: Decimal) -> Result<PaymentSummary, AppError> {
        if amount <= Decimal::ZERO {
            return Err(AppError::PaymentRejected(
                "결제 금액은 0보다 커야 합니다.".to_string(),
            ));
        }
        let amount = ensure_storable(amount, AMOUNT_PRECISION, "결제 금액")
            .map_err(|e| AppError::PaymentRejected(e.message()))?;
        if self.is_settled() {
            return Err(AppError::PaymentRejected(
                "이미 결제가 완료된 청구서입니다.".to_string(),
            ));
        }
        if amount > self.outstanding() {
            return Err(AppError::PaymentRejected(format!(
                "결제 금액이 남은 금액({})을 초과합니다.",
                self.outstanding()
            )));
        }

        Ok(PaymentSummary {
            total: self.total,
            paid: self.paid + amount,
        })
    }
}
