pub mod config;
pub mod domain;
pub mod global;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::{
    auth, bill, equipment, health, pricing, reservation, room, service_order, user,
};
use crate::global::middleware::request_id_middleware;
pub use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::handler::health_check,
        auth::handler::signup,
        auth::handler::login,
        auth::handler::logout,
        user::handler::get_me,
        user::handler::list_users,
        user::handler::change_role,
        room::handler::list_rooms,
        room::handler::search_available,
        room::handler::get_room,
        room::handler::create_room,
        room::handler::update_room,
        room::handler::change_room_status,
        room::handler::delete_room,
        pricing::handler::list_prices,
        pricing::handler::add_price,
        pricing::handler::delete_price,
        pricing::handler::resolve_price,
        reservation::handler::create_reservation,
        reservation::handler::list_reservations,
        reservation::handler::get_reservation,
        reservation::handler::update_reservation,
        reservation::handler::check_in,
        reservation::handler::check_out,
        reservation::handler::cancel_reservation,
        reservation::handler::change_reservation_status,
        reservation::handler::get_reservation_stay,
        reservation::handler::get_stay,
        bill::handler::issue_bill,
        bill::handler::list_bills,
        bill::handler::get_bill,
        bill::handler::get_stay_bill,
        bill::handler::add_payment,
        bill::handler::list_payments,
        equipment::handler::list_equipment,
        equipment::handler::list_room_equipment,
        equipment::handler::get_equipment,
        equipment::handler::create_equipment,
        equipment::handler::update_equipment,
        equipment::handler::delete_equipment,
        equipment::handler::assign_equipment,
        equipment::handler::unassign_equipment,
        service_order::handler::create_service_order,
        service_order::handler::list_service_orders,
        service_order::handler::change_service_order_status,
    ),
    components(
        schemas(
            health::dto::HealthStatus,
            health::dto::HealthState,
            health::dto::HealthChecks,
            health::dto::CheckResult,
            auth::dto::SignupRequest,
            auth::dto::LoginRequest,
            auth::dto::AuthTokenResponse,
            auth::dto::SuccessAuthTokenResponse,
            auth::dto::SuccessLogoutResponse,
            user::entity::user::UserRole,
            user::dto::UserResponse,
            user::dto::ChangeRoleRequest,
            user::dto::SuccessUserResponse,
            user::dto::SuccessUserListResponse,
            room::entity::room::RoomType,
            room::entity::room::RoomStatus,
            room::dto::RoomResponse,
            room::dto::CreateRoomRequest,
            room::dto::UpdateRoomRequest,
            room::dto::ChangeRoomStatusRequest,
            room::dto::SuccessRoomResponse,
            room::dto::SuccessRoomListResponse,
            pricing::dto::PriceResponse,
            pricing::dto::AddPriceRequest,
            pricing::dto::ResolvedPriceResponse,
            pricing::dto::SuccessPriceResponse,
            pricing::dto::SuccessPriceListResponse,
            pricing::dto::SuccessResolvedPriceResponse,
            reservation::entity::reservation::ReservationStatus,
            reservation::dto::ReservationResponse,
            reservation::dto::StayResponse,
            reservation::dto::ReservationStatusResponse,
            reservation::dto::CreateReservationRequest,
            reservation::dto::UpdateReservationRequest,
            reservation::dto::CheckOutRequest,
            reservation::dto::ChangeReservationStatusRequest,
            reservation::dto::SuccessReservationResponse,
            reservation::dto::SuccessReservationListResponse,
            reservation::dto::SuccessReservationStatusResponse,
            reservation::dto::SuccessStayResponse,
            bill::entity::bill::BillStatus,
            bill::entity::payment::PaymentMethod,
            bill::dto::BillResponse,
            bill::dto::PaymentResponse,
            bill::dto::IssueBillRequest,
            bill::dto::AddPaymentRequest,
            bill::dto::PaymentResultResponse,
            bill::dto::SuccessBillResponse,
            bill::dto::SuccessBillListResponse,
            bill::dto::SuccessPaymentResultResponse,
            bill::dto::SuccessPaymentListResponse,
            equipment::dto::EquipmentResponse,
            equipment::dto::CreateEquipmentRequest,
            equipment::dto::UpdateEquipmentRequest,
            equipment::dto::AssignEquipmentRequest,
            equipment::dto::SuccessEquipmentResponse,
            equipment::dto::SuccessEquipmentListResponse,
            service_order::entity::service_order::ServiceOrderStatus,
            service_order::dto::ServiceOrderResponse,
            service_order::dto::CreateServiceOrderRequest,
            service_order::dto::ChangeServiceOrderStatusRequest,
            service_order::dto::SuccessServiceOrderResponse,
            service_order::dto::SuccessServiceOrderListResponse,
            utils::response::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "헬스체크 API"),
        (name = "Auth", description = "인증 API"),
        (name = "User", description = "회원 API"),
        (name = "Room", description = "객실 API"),
        (name = "Pricing", description = "객실 요금 API"),
        (name = "Reservation", description = "예약 API"),
        (name = "Stay", description = "투숙 기록 API"),
        (name = "Bill", description = "청구/결제 API"),
        (name = "Equipment", description = "비품 API"),
        (name = "ServiceOrder", description = "서비스 주문 API")
    )
)]
pub struct ApiDoc;

/// Bearer JWT 인증 스키마 등록
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        // Auth
        .route("/api/v1/auth/signup", post(auth::handler::signup))
        .route("/api/v1/auth/login", post(auth::handler::login))
        .route("/api/v1/auth/logout", post(auth::handler::logout))
        // User
        .route("/api/v1/users", get(user::handler::list_users))
        .route("/api/v1/users/me", get(user::handler::get_me))
        .route(
            "/api/v1/users/:user_id/role",
            patch(user::handler::change_role),
        )
        // Room
        .route(
            "/api/v1/rooms",
            get(room::handler::list_rooms).post(room::handler::create_room),
        )
        .route(
            "/api/v1/rooms/available",
            get(room::handler::search_available),
        )
        .route(
            "/api/v1/rooms/:room_id",
            get(room::handler::get_room)
                .patch(room::handler::update_room)
                .delete(room::handler::delete_room),
        )
        .route(
            "/api/v1/rooms/:room_id/status",
            patch(room::handler::change_room_status),
        )
        .route(
            "/api/v1/rooms/:room_id/equipment",
            get(equipment::handler::list_room_equipment),
        )
        // Pricing
        .route(
            "/api/v1/rooms/:room_id/prices",
            get(pricing::handler::list_prices).post(pricing::handler::add_price),
        )
        .route(
            "/api/v1/rooms/:room_id/price",
            get(pricing::handler::resolve_price),
        )
        .route(
            "/api/v1/prices/:price_history_id",
            axum::routing::delete(pricing::handler::delete_price),
        )
        // Reservation
        .route(
            "/api/v1/reservations",
            get(reservation::handler::list_reservations)
                .post(reservation::handler::create_reservation),
        )
        .route(
            "/api/v1/reservations/:reservation_id",
            get(reservation::handler::get_reservation)
                .patch(reservation::handler::update_reservation),
        )
        .route(
            "/api/v1/reservations/:reservation_id/check-in",
            post(reservation::handler::check_in),
        )
        .route(
            "/api/v1/reservations/:reservation_id/check-out",
            post(reservation::handler::check_out),
        )
        .route(
            "/api/v1/reservations/:reservation_id/cancel",
            post(reservation::handler::cancel_reservation),
        )
        .route(
            "/api/v1/reservations/:reservation_id/status",
            patch(reservation::handler::change_reservation_status),
        )
        .route(
            "/api/v1/reservations/:reservation_id/stay",
            get(reservation::handler::get_reservation_stay),
        )
        // Stay
        .route("/api/v1/stays/:stay_id", get(reservation::handler::get_stay))
        .route("/api/v1/stays/:stay_id/bill", get(bill::handler::get_stay_bill))
        .route(
            "/api/v1/stays/:stay_id/service-orders",
            get(service_order::handler::list_service_orders)
                .post(service_order::handler::create_service_order),
        )
        // Bill
        .route(
            "/api/v1/bills",
            get(bill::handler::list_bills).post(bill::handler::issue_bill),
        )
        .route("/api/v1/bills/:bill_id", get(bill::handler::get_bill))
        .route(
            "/api/v1/bills/:bill_id/payments",
            get(bill::handler::list_payments).post(bill::handler::add_payment),
        )
        // Equipment
        .route(
            "/api/v1/equipment",
            get(equipment::handler::list_equipment).post(equipment::handler::create_equipment),
        )
        .route(
            "/api/v1/equipment/:equipment_id",
            get(equipment::handler::get_equipment)
                .patch(equipment::handler::update_equipment)
                .delete(equipment::handler::delete_equipment),
        )
        .route(
            "/api/v1/equipment/:equipment_id/room",
            put(equipment::handler::assign_equipment)
                .delete(equipment::handler::unassign_equipment),
        )
        // Service order
        .route(
            "/api/v1/service-orders/:service_order_id/status",
            patch(service_order::handler::change_service_order_status),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
