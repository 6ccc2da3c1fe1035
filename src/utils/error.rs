use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};
use validator::ValidationErrors;

use super::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
    Conflict(String),
    InternalError(String),
    ValidationError(String),
    JsonParseFailed(String),

    // 인증 / 회원
    InvalidCredentials(String),
    UserNotFound(String),
    DuplicateEmail(String),

    // 객실 / 요금
    RoomNotFound(String),
    RoomUnavailable(String),
    PriceNotFound(String),
    PriceOverlap(String),

    // 예약 / 투숙
    ReservationNotFound(String),
    InvalidStatusTransition(String),
    StayNotFound(String),

    // 청구서 / 결제
    BillNotFound(String),
    BillAlreadyIssued(String),
    PaymentRejected(String),

    // 비품 / 서비스 주문
    EquipmentNotFound(String),
    EquipmentInUse(String),
    ServiceOrderNotFound(String),
}

impl AppError {
    /// 에러 메시지 반환
    pub fn message(&self) -> String {
        match self {
            AppError::JsonParseFailed(msg) => format!("잘못된 요청 형식입니다: {}", msg),
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::Conflict(msg)
            | AppError::InternalError(msg)
            | AppError::ValidationError(msg)
            | AppError::InvalidCredentials(msg)
            | AppError::UserNotFound(msg)
            | AppError::DuplicateEmail(msg)
            | AppError::RoomNotFound(msg)
            | AppError::RoomUnavailable(msg)
            | AppError::PriceNotFound(msg)
            | AppError::PriceOverlap(msg)
            | AppError::ReservationNotFound(msg)
            | AppError::InvalidStatusTransition(msg)
            | AppError::StayNotFound(msg)
            | AppError::BillNotFound(msg)
            | AppError::BillAlreadyIssued(msg)
            | AppError::PaymentRejected(msg)
            | AppError::EquipmentNotFound(msg)
            | AppError::EquipmentInUse(msg)
            | AppError::ServiceOrderNotFound(msg) => msg.clone(),
        }
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> String {
        match self {
            AppError::BadRequest(_) => "COMMON400",
            AppError::NotFound(_) => "COMMON404",
            AppError::Unauthorized(_) => "AUTH4001",
            AppError::Forbidden(_) => "COMMON403",
            AppError::Conflict(_) => "COMMON409",
            AppError::InternalError(_) => "COMMON500",
            AppError::ValidationError(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::InvalidCredentials(_) => "AUTH4011",
            AppError::UserNotFound(_) => "USER4041",
            AppError::DuplicateEmail(_) => "USER4091",
            AppError::RoomNotFound(_) => "ROOM4041",
            AppError::RoomUnavailable(_) => "ROOM4091",
            AppError::PriceNotFound(_) => "PRICE4041",
            AppError::PriceOverlap(_) => "PRICE4091",
            AppError::ReservationNotFound(_) => "RESERVATION4041",
            AppError::InvalidStatusTransition(_) => "RESERVATION4001",
            AppError::StayNotFound(_) => "STAY4041",
            AppError::BillNotFound(_) => "BILL4041",
            AppError::BillAlreadyIssued(_) => "BILL4091",
            AppError::PaymentRejected(_) => "BILL4001",
            AppError::EquipmentNotFound(_) => "EQUIPMENT4041",
            AppError::EquipmentInUse(_) => "EQUIPMENT4091",
            AppError::ServiceOrderNotFound(_) => "ORDER4041",
        }
        .to_string()
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::ValidationError(_)
            | AppError::JsonParseFailed(_)
            | AppError::InvalidStatusTransition(_)
            | AppError::PaymentRejected(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_)
            | AppError::UserNotFound(_)
            | AppError::RoomNotFound(_)
            | AppError::PriceNotFound(_)
            | AppError::ReservationNotFound(_)
            | AppError::StayNotFound(_)
            | AppError::BillNotFound(_)
            | AppError::EquipmentNotFound(_)
            | AppError::ServiceOrderNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_)
            | AppError::DuplicateEmail(_)
            | AppError::RoomUnavailable(_)
            | AppError::PriceOverlap(_)
            | AppError::BillAlreadyIssued(_)
            | AppError::EquipmentInUse(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        // 에러 로깅
        match &self {
            AppError::InternalError(_) => {
                error!("Internal Server Error: {}", message);
            }
            _ => {
                warn!("Error [{}]: {}", error_code, message);
            }
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

/// validator 검증 실패를 AppError로 변환 (첫 번째 메시지만 노출)
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "입력값이 올바르지 않습니다.".to_string());

        AppError::ValidationError(message)
    }
}

/// 편의 함수들
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        AppError::Forbidden(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        AppError::InternalError(msg.into())
    }

    /// DB 에러를 내부 에러로 변환 (repository 경계에서 사용)
    pub fn db(err: sea_orm::DbErr) -> Self {
        AppError::InternalError(format!("DB Error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "이름은 필수입니다"))]
        name: String,
    }

    #[test]
    fn should_map_domain_errors_to_status_and_code() {
        let err = AppError::RoomUnavailable("이미 예약된 객실입니다.".into());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "ROOM4091");

        let err = AppError::InvalidStatusTransition("잘못된 상태 변경".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "RESERVATION4001");
    }

    #[test]
    fn should_expose_first_validation_message() {
        let sample = Sample {
            name: String::new(),
        };
        let err: AppError = sample.validate().unwrap_err().into();

        assert_eq!(err.error_code(), "COMMON400");
        assert_eq!(err.message(), "이름은 필수입니다");
    }
}
