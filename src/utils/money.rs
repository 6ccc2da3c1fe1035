//! 금액 검증
//!
//! 금액 컬럼은 모두 소수 둘째 자리까지 저장합니다.
//! 요금은 `DECIMAL(10,2)`, 청구/결제/주문 금액은 `DECIMAL(12,2)`입니다.

use rust_decimal::Decimal;

use super::error::AppError;

/// 소수 자릿수
pub const MONEY_SCALE: u32 = 2;
/// `price_history.price` 전체 자릿수
pub const PRICE_PRECISION: u32 = 10;
/// `bill.total_amount`, `payment.amount`, `service_order.amount` 전체 자릿수
pub const AMOUNT_PRECISION: u32 = 12;

/// 컬럼에 그대로 저장할 수 있는 금액인지 확인합니다.
///
/// 소수 셋째 자리 이하가 있거나 정수부가 `precision - 2` 자리를 넘으면 400.
/// 부호 검사는 호출하는 쪽에서 합니다.
pub fn ensure_storable(amount: Decimal, precision: u32, field: &str) -> Result<Decimal, AppError> {
    let normalized = amount.normalize();

    if normalized.scale() > MONEY_SCALE {
        return Err(AppError::bad_request(format!(
            "{}은(는) 소수 둘째 자리까지만 입력할 수 있습니다.",
            field
        )));
    }

    let limit = Decimal::from(10_i64.pow(precision - MONEY_SCALE));
    if normalized.abs() >= limit {
        return Err(AppError::bad_request(format!(
            "{}이(가) 허용 범위를 초과했습니다.",
            field
        )));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn should_accept_two_decimal_places() {
        assert_eq!(
            ensure_storable(dec("120000.50"), PRICE_PRECISION, "요금").unwrap(),
            dec("120000.5")
        );
        // 0 꼬리는 자릿수로 세지 않음
        assert!(ensure_storable(dec("99.9900"), AMOUNT_PRECISION, "금액").is_ok());
    }

    #[test]
    fn should_reject_sub_cent_values() {
        let err = ensure_storable(dec("0.001"), PRICE_PRECISION, "요금").unwrap_err();
        assert_eq!(err.error_code(), "COMMON400");

        assert!(ensure_storable(dec("10.005"), AMOUNT_PRECISION, "금액").is_err());
    }

    #[test]
    fn should_reject_values_beyond_column_precision() {
        assert!(ensure_storable(dec("99999999.99"), PRICE_PRECISION, "요금").is_ok());
        assert!(ensure_storable(dec("100000000"), PRICE_PRECISION, "요금").is_err());

        assert!(ensure_storable(dec("9999999999.99"), AMOUNT_PRECISION, "금액").is_ok());
        assert!(ensure_storable(dec("10000000000"), AMOUNT_PRECISION, "금액").is_err());
    }
}
