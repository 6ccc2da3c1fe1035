/// 예약 생애주기 통합 테스트
/// 예약 → 체크인 → 체크아웃(청구서 발행) → 결제 → PAID
mod common;

use axum::http::StatusCode;
use chrono::Utc;
use hotel_server::domain::bill::entity::bill;
use hotel_server::domain::bill::repository::BillRepository;
use hotel_server::domain::reservation::entity::reservation::{self, ReservationStatus};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde_json::{json, Value};

use common::{dec, decimal, days_from_today, spawn_app, today, TestApp};

struct Booked {
    admin: String,
    guest: String,
    room_id: i64,
    reservation_id: i64,
}

/// 요금이 등록된 객실에 오늘부터 2박 예약
async fn booked_room(app: &TestApp, price: &str) -> Booked {
    let admin = app.admin_token().await;
    let guest = app.guest_token("traveler@hotel.test").await;
    let room_id = app.create_room(&admin, "1001", 2).await;
    app.add_open_price(&admin, room_id, price).await;

    let (status, body) = app
        .reserve(&guest, room_id, today(), days_from_today(2))
        .await;
    assert_eq!(status, StatusCode::OK, "reservation failed: {}", body);

    Booked {
        admin,
        guest,
        room_id,
        reservation_id: body["result"]["reservationId"].as_i64().unwrap(),
    }
}

async fn check_in(app: &TestApp, booked: &Booked) -> Value {
    let (status, body) = app
        .post(
            &format!("/api/v1/reservations/{}/check-in", booked.reservation_id),
            Some(&booked.admin),
            json!({}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "check-in failed: {}", body);
    body
}

async fn check_out(app: &TestApp, booked: &Booked) -> Value {
    let (status, body) = app
        .post(
            &format!("/api/v1/reservations/{}/check-out", booked.reservation_id),
            Some(&booked.admin),
            json!({}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "check-out failed: {}", body);
    body
}

async fn room_status(app: &TestApp, room_id: i64) -> Value {
    let (_, body) = app.get(&format!("/api/v1/rooms/{}", room_id), None).await;
    body["result"]["status"].clone()
}

#[tokio::test]
async fn should_create_confirmed_reservation() {
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;

    let (status, body) = app
        .get(
            &format!("/api/v1/reservations/{}", booked.reservation_id),
            Some(&booked.guest),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["status"], "CONFIRMED");
    assert_eq!(body["result"]["nights"], 2);
    assert_eq!(body["result"]["roomId"], booked.room_id);
}

#[tokio::test]
async fn should_reject_overlapping_reservation_but_allow_back_to_back() {
    // Arrange
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;
    let other = app.guest_token("other@hotel.test").await;

    // Act
    let (overlap_status, overlap_body) = app
        .reserve(&other, booked.room_id, days_from_today(1), days_from_today(3))
        .await;
    let (adjacent_status, _) = app
        .reserve(&other, booked.room_id, days_from_today(2), days_from_today(4))
        .await;

    // Assert
    assert_eq!(overlap_status, StatusCode::CONFLICT);
    assert_eq!(overlap_body["code"], "ROOM4091");
    assert_eq!(adjacent_status, StatusCode::OK);
}

#[tokio::test]
async fn should_reject_invalid_reservation_requests() {
    let app = spawn_app().await;
    let admin = app.admin_token().await;
    let guest = app.guest_token("invalid@hotel.test").await;
    let room_id = app.create_room(&admin, "1002", 2).await;

    // 과거 체크인
    let (status, _) = app
        .reserve(&guest, room_id, days_from_today(-1), days_from_today(1))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 체크아웃이 체크인보다 빠름
    let (status, _) = app
        .reserve(&guest, room_id, days_from_today(3), days_from_today(2))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 수용 인원 초과
    let (status, _) = app
        .post(
            "/api/v1/reservations",
            Some(&guest),
            json!({
                "roomId": room_id,
                "checkIn": days_from_today(1),
                "checkOut": days_from_today(2),
                "guestCount": 5
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 없는 객실
    let (status, body) = app
        .reserve(&guest, 9999, days_from_today(1), days_from_today(2))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ROOM4041");
}

#[tokio::test]
async fn should_reject_reservation_for_room_under_maintenance() {
    let app = spawn_app().await;
    let admin = app.admin_token().await;
    let guest = app.guest_token("maint@hotel.test").await;
    let room_id = app.create_room(&admin, "1003", 2).await;
    app.patch(
        &format!("/api/v1/rooms/{}/status", room_id),
        Some(&admin),
        json!({ "status": "MAINTENANCE" }),
    )
    .await;

    let (status, body) = app
        .reserve(&guest, room_id, days_from_today(1), days_from_today(2))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ROOM4091");
}

#[tokio::test]
async fn should_check_in_and_mark_room_occupied() {
    // Arrange
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;
    let uri = format!("/api/v1/reservations/{}/check-in", booked.reservation_id);

    // Act
    let (status, body) = app.post(&uri, Some(&booked.admin), json!({})).await;
    let (again_status, again_body) = app.post(&uri, Some(&booked.admin), json!({})).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["reservation"]["status"], "CHECKED_IN");
    assert!(body["result"]["stay"]["stayId"].is_i64());
    assert!(body["result"]["stay"]["checkedOutAt"].is_null());
    assert_eq!(room_status(&app, booked.room_id).await, "OCCUPIED");

    assert_eq!(again_status, StatusCode::BAD_REQUEST);
    assert_eq!(again_body["code"], "RESERVATION4001");
}

#[tokio::test]
async fn should_not_allow_guest_to_check_in() {
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;

    let (status, _) = app
        .post(
            &format!("/api/v1/reservations/{}/check-in", booked.reservation_id),
            Some(&booked.guest),
            json!({}),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn should_refuse_check_in_before_reservation_period() {
    let app = spawn_app().await;
    let admin = app.admin_token().await;
    let guest = app.guest_token("early@hotel.test").await;
    let room_id = app.create_room(&admin, "1004", 2).await;
    let (_, body) = app
        .reserve(&guest, room_id, days_from_today(3), days_from_today(5))
        .await;
    let reservation_id = body["result"]["reservationId"].as_i64().unwrap();

    let (status, _) = app
        .post(
            &format!("/api/v1/reservations/{}/check-in", reservation_id),
            Some(&admin),
            json!({}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(room_status(&app, room_id).await, "AVAILABLE");
}

#[tokio::test]
async fn should_check_out_and_issue_bill_from_price_history() {
    // Arrange
    let app = spawn_app().await;
    let booked = booked_room(&app, "120000").await;
    app.post(
        &format!("/api/v1/reservations/{}/check-in", booked.reservation_id),
        Some(&booked.admin),
        json!({}),
    )
    .await;

    // Act
    let (status, body) = app
        .post(
            &format!("/api/v1/reservations/{}/check-out", booked.reservation_id),
            Some(&booked.admin),
            json!({}),
        )
        .await;

    // Assert: 당일 퇴실은 1박으로 청구
    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    assert_eq!(result["reservation"]["status"], "CHECKED_OUT");
    assert!(result["stay"]["checkedOutAt"].is_string());
    assert_eq!(result["bill"]["status"], "UNPAID");
    assert_eq!(decimal(&result["bill"]["totalAmount"]), dec("120000"));
    assert_eq!(decimal(&result["bill"]["outstandingAmount"]), dec("120000"));
    assert_eq!(room_status(&app, booked.room_id).await, "AVAILABLE");
}

#[tokio::test]
async fn should_check_out_with_supplied_total_amount() {
    let app = spawn_app().await;
    let booked = booked_room(&app, "120000").await;
    app.post(
        &format!("/api/v1/reservations/{}/check-in", booked.reservation_id),
        Some(&booked.admin),
        json!({}),
    )
    .await;

    let (status, body) = app
        .patch(
            &format!("/api/v1/reservations/{}/status", booked.reservation_id),
            Some(&booked.admin),
            json!({ "status": "CHECKED_OUT", "totalAmount": "99000.50" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["result"]["bill"]["totalAmount"]), dec("99000.50"));
}

#[tokio::test]
async fn should_roll_back_check_out_when_price_missing() {
    // Arrange: 요금 없이 예약/체크인
    let app = spawn_app().await;
    let admin = app.admin_token().await;
    let guest = app.guest_token("noprice@hotel.test").await;
    let room_id = app.create_room(&admin, "1005", 2).await;
    let (_, body) = app.reserve(&guest, room_id, today(), days_from_today(1)).await;
    let reservation_id = body["result"]["reservationId"].as_i64().unwrap();
    app.post(
        &format!("/api/v1/reservations/{}/check-in", reservation_id),
        Some(&admin),
        json!({}),
    )
    .await;

    // Act
    let (status, body) = app
        .post(
            &format!("/api/v1/reservations/{}/check-out", reservation_id),
            Some(&admin),
            json!({}),
        )
        .await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PRICE4041");

    let (_, reservation) = app
        .get(&format!("/api/v1/reservations/{}", reservation_id), Some(&admin))
        .await;
    assert_eq!(reservation["result"]["status"], "CHECKED_IN");
    assert_eq!(room_status(&app, room_id).await, "OCCUPIED");

    let (_, stay) = app
        .get(
            &format!("/api/v1/reservations/{}/stay", reservation_id),
            Some(&admin),
        )
        .await;
    assert!(stay["result"]["checkedOutAt"].is_null());
}

#[tokio::test]
async fn should_settle_bill_with_payments_and_mark_reservation_paid() {
    // Arrange
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;
    app.post(
        &format!("/api/v1/reservations/{}/check-in", booked.reservation_id),
        Some(&booked.admin),
        json!({}),
    )
    .await;
    let (_, checked_out) = app
        .post(
            &format!("/api/v1/reservations/{}/check-out", booked.reservation_id),
            Some(&booked.admin),
            json!({}),
        )
        .await;
    let bill_id = checked_out["result"]["bill"]["billId"].as_i64().unwrap();
    let payments_uri = format!("/api/v1/bills/{}/payments", bill_id);

    // Act: 부분 결제
    let (status, partial) = app
        .post(
            &payments_uri,
            Some(&booked.guest),
            json!({ "amount": "40000", "method": "CARD" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(partial["result"]["bill"]["status"], "UNPAID");
    assert_eq!(decimal(&partial["result"]["bill"]["outstandingAmount"]), dec("60000"));

    // 잔액 초과 결제
    let (status, over) = app
        .post(
            &payments_uri,
            Some(&booked.guest),
            json!({ "amount": "60000.01", "method": "CASH" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(over["code"], "BILL4001");

    // 잔액 결제
    let (status, settled) = app
        .post(
            &payments_uri,
            Some(&booked.admin),
            json!({ "amount": "60000", "method": "TRANSFER" }),
        )
        .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settled["result"]["bill"]["status"], "PAID");
    assert!(settled["result"]["bill"]["paidAt"].is_string());

    let (_, reservation) = app
        .get(
            &format!("/api/v1/reservations/{}", booked.reservation_id),
            Some(&booked.guest),
        )
        .await;
    assert_eq!(reservation["result"]["status"], "PAID");

    let (_, payments) = app.get(&payments_uri, Some(&booked.guest)).await;
    assert_eq!(payments["result"].as_array().unwrap().len(), 2);

    // 완납 후 추가 결제 불가
    let (status, _) = app
        .post(
            &payments_uri,
            Some(&booked.admin),
            json!({ "amount": "1", "method": "CASH" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_second_bill_for_same_stay() {
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;
    let (_, checked_in) = app
        .post(
            &format!("/api/v1/reservations/{}/check-in", booked.reservation_id),
            Some(&booked.admin),
            json!({}),
        )
        .await;
    let stay_id = checked_in["result"]["stay"]["stayId"].as_i64().unwrap();

    // 체크아웃 전에는 발행 불가
    let (status, _) = app
        .post("/api/v1/bills", Some(&booked.admin), json!({ "stayId": stay_id }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    app.post(
        &format!("/api/v1/reservations/{}/check-out", booked.reservation_id),
        Some(&booked.admin),
        json!({}),
    )
    .await;

    let (status, body) = app
        .post("/api/v1/bills", Some(&booked.admin), json!({ "stayId": stay_id }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "BILL4091");

    let (status, bill) = app
        .get(&format!("/api/v1/stays/{}/bill", stay_id), Some(&booked.guest))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&bill["result"]["totalAmount"]), dec("100000"));
}

#[tokio::test]
async fn should_cancel_own_reservation_and_restrict_others() {
    // Arrange
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;
    let stranger = app.guest_token("stranger@hotel.test").await;
    let uri = format!("/api/v1/reservations/{}", booked.reservation_id);

    // Act
    let (forbidden_status, _) = app.get(&uri, Some(&stranger)).await;
    let (stranger_cancel, _) = app
        .post(&format!("{}/cancel", uri), Some(&stranger), json!({}))
        .await;
    let (status, body) = app
        .post(&format!("{}/cancel", uri), Some(&booked.guest), json!({}))
        .await;

    // Assert
    assert_eq!(forbidden_status, StatusCode::FORBIDDEN);
    assert_eq!(stranger_cancel, StatusCode::FORBIDDEN);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["reservation"]["status"], "CANCELED");

    // 취소된 예약의 기간은 다시 예약 가능
    let (rebook, _) = app
        .reserve(&stranger, booked.room_id, today(), days_from_today(1))
        .await;
    assert_eq!(rebook, StatusCode::OK);
}

#[tokio::test]
async fn should_not_cancel_checked_in_reservation() {
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;
    app.post(
        &format!("/api/v1/reservations/{}/check-in", booked.reservation_id),
        Some(&booked.admin),
        json!({}),
    )
    .await;

    let (status, body) = app
        .post(
            &format!("/api/v1/reservations/{}/cancel", booked.reservation_id),
            Some(&booked.guest),
            json!({}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "RESERVATION4001");
}

#[tokio::test]
async fn should_update_dates_of_confirmed_reservation() {
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;

    // 자기 자신과의 겹침은 무시
    let (status, body) = app
        .patch(
            &format!("/api/v1/reservations/{}", booked.reservation_id),
            Some(&booked.guest),
            json!({ "checkIn": days_from_today(1), "checkOut": days_from_today(4) }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["nights"], 3);
}

#[tokio::test]
async fn should_list_only_own_reservations_for_guest() {
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;
    let other = app.guest_token("list@hotel.test").await;
    app.reserve(&other, booked.room_id, days_from_today(5), days_from_today(6))
        .await;

    let (_, mine) = app.get("/api/v1/reservations", Some(&booked.guest)).await;
    let (_, all) = app.get("/api/v1/reservations", Some(&booked.admin)).await;
    let (_, confirmed) = app
        .get("/api/v1/reservations?status=CONFIRMED", Some(&booked.admin))
        .await;

    assert_eq!(mine["result"].as_array().unwrap().len(), 1);
    assert_eq!(all["result"].as_array().unwrap().len(), 2);
    assert_eq!(confirmed["result"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_refuse_second_check_in_while_room_is_occupied() {
    // Arrange: 체크아웃 날짜가 지났지만 아직 퇴실하지 않은 투숙객
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;
    let (_, me) = app.get("/api/v1/users/me", Some(&booked.guest)).await;
    let now = Utc::now().naive_utc();
    reservation::ActiveModel {
        room_id: Set(booked.room_id),
        user_id: Set(me["result"]["userId"].as_i64().unwrap()),
        check_in: Set(days_from_today(-3)),
        check_out: Set(days_from_today(-1)),
        guest_count: Set(1),
        status: Set(ReservationStatus::CheckedIn),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&app.state.db)
    .await
    .unwrap();

    // Act
    let (status, body) = app
        .post(
            &format!("/api/v1/reservations/{}/check-in", booked.reservation_id),
            Some(&booked.admin),
            json!({}),
        )
        .await;

    // Assert
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ROOM4091");

    let (_, reservation) = app
        .get(
            &format!("/api/v1/reservations/{}", booked.reservation_id),
            Some(&booked.admin),
        )
        .await;
    assert_eq!(reservation["result"]["status"], "CONFIRMED");
}

#[tokio::test]
async fn should_mark_paid_only_after_bill_is_paid() {
    // Arrange
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;
    check_in(&app, &booked).await;
    let checked_out = check_out(&app, &booked).await;
    let bill_id = checked_out["result"]["bill"]["billId"].as_i64().unwrap();
    let status_uri = format!("/api/v1/reservations/{}/status", booked.reservation_id);

    // Act: 미결제 청구서
    let (unpaid_status, unpaid_body) = app
        .patch(&status_uri, Some(&booked.admin), json!({ "status": "PAID" }))
        .await;

    // 청구서만 결제 완료된 상태 (예: 결제 후 예약 갱신 전)
    let bill = BillRepository::get(&app.state.db, bill_id).await.unwrap();
    BillRepository::mark_paid(&app.state.db, bill, Utc::now().naive_utc())
        .await
        .unwrap();

    let (paid_status, paid_body) = app
        .patch(&status_uri, Some(&booked.admin), json!({ "status": "PAID" }))
        .await;

    // Assert
    assert_eq!(unpaid_status, StatusCode::BAD_REQUEST);
    assert_eq!(unpaid_body["code"], "RESERVATION4001");
    assert_eq!(paid_status, StatusCode::OK);
    assert_eq!(paid_body["result"]["reservation"]["status"], "PAID");
}

#[tokio::test]
async fn should_reissue_missing_bill_for_closed_stay() {
    // Arrange: 체크아웃 후 청구서가 유실된 투숙
    let app = spawn_app().await;
    let booked = booked_room(&app, "80000").await;
    check_in(&app, &booked).await;
    let checked_out = check_out(&app, &booked).await;
    let stay_id = checked_out["result"]["stay"]["stayId"].as_i64().unwrap();
    let bill_id = checked_out["result"]["bill"]["billId"].as_i64().unwrap();
    bill::Entity::delete_by_id(bill_id)
        .exec(&app.state.db)
        .await
        .unwrap();

    // Act
    let (status, body) = app
        .post("/api/v1/bills", Some(&booked.admin), json!({ "stayId": stay_id }))
        .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["stayId"], stay_id);
    assert_eq!(body["result"]["status"], "UNPAID");
    assert_eq!(decimal(&body["result"]["totalAmount"]), dec("80000"));
}

#[tokio::test]
async fn should_reject_amounts_finer_than_cents() {
    // Arrange
    let app = spawn_app().await;
    let booked = booked_room(&app, "100000").await;
    check_in(&app, &booked).await;

    // Act: 청구 금액 지정
    let (total_status, _) = app
        .post(
            &format!("/api/v1/reservations/{}/check-out", booked.reservation_id),
            Some(&booked.admin),
            json!({ "totalAmount": "1.005" }),
        )
        .await;

    // Assert: 실패한 체크아웃은 롤백
    assert_eq!(total_status, StatusCode::BAD_REQUEST);
    assert_eq!(room_status(&app, booked.room_id).await, "OCCUPIED");

    // Act: 결제 금액
    let checked_out = check_out(&app, &booked).await;
    let bill_id = checked_out["result"]["bill"]["billId"].as_i64().unwrap();
    let payments_uri = format!("/api/v1/bills/{}/payments", bill_id);
    let (payment_status, payment_body) = app
        .post(
            &payments_uri,
            Some(&booked.guest),
            json!({ "amount": "0.004", "method": "CARD" }),
        )
        .await;

    // Assert
    assert_eq!(payment_status, StatusCode::BAD_REQUEST);
    assert_eq!(payment_body["code"], "BILL4001");
    let (_, payments) = app.get(&payments_uri, Some(&booked.guest)).await;
    assert!(payments["result"].as_array().unwrap().is_empty());
}

