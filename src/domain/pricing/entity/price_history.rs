use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 객실별 1박 요금 이력. `end_date`가 없으면 종료일 없는 현재 요금
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "price_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub price_history_id: i64,
    pub room_id: i64,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::room::entity::room::Entity",
        from = "Column::RoomId",
        to = "crate::domain::room::entity::room::Column::RoomId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Room,
}

impl Related<crate::domain::room::entity::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
