use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 객실 타입
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    #[sea_orm(string_value = "SINGLE")]
    Single,
    #[sea_orm(string_value = "DOUBLE")]
    Double,
    #[sea_orm(string_value = "TWIN")]
    Twin,
    #[sea_orm(string_value = "SUITE")]
    Suite,
}

/// 객실 상태
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    /// 입실 가능
    #[sea_orm(string_value = "AVAILABLE")]
    Available,
    /// 투숙 중 (체크인 시 전환)
    #[sea_orm(string_value = "OCCUPIED")]
    Occupied,
    /// 점검 중 (예약/체크인 불가)
    #[sea_orm(string_value = "MAINTENANCE")]
    Maintenance,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub room_id: i64,
    #[sea_orm(unique)]
    pub room_number: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub capacity: i32,
    pub description: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::pricing::entity::price_history::Entity")]
    PriceHistory,
    #[sea_orm(has_many = "crate::domain::reservation::entity::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "crate::domain::equipment::entity::equipment::Entity")]
    Equipment,
}

impl Related<crate::domain::pricing::entity::price_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PriceHistory.def()
    }
}

impl Related<crate::domain::reservation::entity::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<crate::domain::equipment::entity::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
