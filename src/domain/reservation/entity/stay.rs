use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 실제 투숙 기록 (체크인 시 생성, 체크아웃 시 종료)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stay")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub stay_id: i64,
    #[sea_orm(unique)]
    pub reservation_id: i64,
    pub room_id: i64,
    pub checked_in_at: DateTime,
    pub checked_out_at: Option<DateTime>,
}

impl Model {
    pub fn is_open(&self) -> bool {
        self.checked_out_at.is_none()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::ReservationId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Reservation,
    #[sea_orm(has_one = "crate::domain::bill::entity::bill::Entity")]
    Bill,
    #[sea_orm(has_many = "crate::domain::service_order::entity::service_order::Entity")]
    ServiceOrder,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<crate::domain::bill::entity::bill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bill.def()
    }
}

impl Related<crate::domain::service_order::entity::service_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
