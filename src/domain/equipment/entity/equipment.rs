use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 객실 비품. `room_id`가 없으면 어느 객실에도 배치되지 않은 재사용 가능 비품
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub equipment_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub room_id: Option<i64>,
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
        on_delete = "SetNull"
    )]
    Room,
}

impl Related<crate::domain::room::entity::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
