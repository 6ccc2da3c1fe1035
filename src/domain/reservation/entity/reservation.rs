use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 예약 상태
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// 예약 확정
    #[sea_orm(string_value = "CONFIRMED")]
    Confirmed,
    /// 투숙 중
    #[sea_orm(string_value = "CHECKED_IN")]
    CheckedIn,
    /// 퇴실 완료 (청구서 발행됨)
    #[sea_orm(string_value = "CHECKED_OUT")]
    CheckedOut,
    /// 결제 완료
    #[sea_orm(string_value = "PAID")]
    Paid,
    /// 예약 취소
    #[sea_orm(string_value = "CANCELED")]
    Canceled,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub reservation_id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub check_in: Date,
    pub check_out: Date,
    pub guest_count: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::room::entity::room::Entity",
        from = "Column::RoomId",
        to = "crate::domain::room::entity::room::Column::RoomId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Room,
    #[sea_orm(
        belongs_to = "crate::domain::user::entity::user::Entity",
        from = "Column::UserId",
        to = "crate::domain::user::entity::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(has_one = "super::stay::Entity")]
    Stay,
}

impl Related<crate::domain::room::entity::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<crate::domain::user::entity::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::stay::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stay.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
