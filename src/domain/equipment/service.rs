use sea_orm::Set;
use tracing::info;

use super::dto::{
    AssignEquipmentRequest, CreateEquipmentRequest, EquipmentQuery, EquipmentResponse,
    UpdateEquipmentRequest,
};
use super::entity::equipment;
use super::repository::EquipmentRepository;
use crate::domain::room::repository::RoomRepository;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct EquipmentService;

impl EquipmentService {
    pub async fn list_equipment(
        state: &AppState,
        query: EquipmentQuery,
    ) -> Result<Vec<EquipmentResponse>, AppError> {
        if query.unlinked && query.room_id.is_some() {
            return Err(AppError::bad_request(
                "roomId와 unlinked 조건은 함께 사용할 수 없습니다.",
            ));
        }

        let items = EquipmentRepository::find_all(&state.db, query.room_id, query.unlinked).await?;
        Ok(items.into_iter().map(EquipmentResponse::from).collect())
    }

    /// 객실에 배치된 비품 목록
    pub async fn list_for_room(
        state: &AppState,
        room_id: i64,
    ) -> Result<Vec<EquipmentResponse>, AppError> {
        RoomRepository::get(&state.db, room_id).await?;

        let items = EquipmentRepository::find_all(&state.db, Some(room_id), false).await?;
        Ok(items.into_iter().map(EquipmentResponse::from).collect())
    }

    pub async fn get_equipment(
        state: &AppState,
        equipment_id: i64,
    ) -> Result<EquipmentResponse, AppError> {
        EquipmentRepository::get(&state.db, equipment_id)
            .await
            .map(EquipmentResponse::from)
    }

    pub async fn create_equipment(
        state: &AppState,
        req: CreateEquipmentRequest,
    ) -> Result<EquipmentResponse, AppError> {
        if let Some(room_id) = req.room_id {
            RoomRepository::get(&state.db, room_id).await?;
        }

        let created =
            EquipmentRepository::insert(&state.db, req.name, req.description, req.room_id).await?;

        info!(
            equipment_id = created.equipment_id,
            room_id = ?created.room_id,
            "Equipment created"
        );

        Ok(created.into())
    }

    pub async fn update_equipment(
        state: &AppState,
        equipment_id: i64,
        req: UpdateEquipmentRequest,
    ) -> Result<EquipmentResponse, AppError> {
        let item = EquipmentRepository::get(&state.db, equipment_id).await?;

        let mut active: equipment::ActiveModel = item.into();
        if let Some(name) = req.name {
            active.name = Set(name);
        }
        if let Some(description) = req.description {
            active.description = Set(Some(description));
        }

        EquipmentRepository::update(&state.db, active)
            .await
            .map(EquipmentResponse::from)
    }

    pub async fn delete_equipment(state: &AppState, equipment_id: i64) -> Result<(), AppError> {
        EquipmentRepository::get(&state.db, equipment_id).await?;
        EquipmentRepository::delete(&state.db, equipment_id).await
    }

    /// 비품을 객실에 배치
    ///
    /// 다른 객실에 배치된 비품은 먼저 회수해야 합니다.
    pub async fn assign(
        state: &AppState,
        equipment_id: i64,
        req: AssignEquipmentRequest,
    ) -> Result<EquipmentResponse, AppError> {
        let item = EquipmentRepository::get(&state.db, equipment_id).await?;
        RoomRepository::get(&state.db, req.room_id).await?;

        match item.room_id {
            Some(current) if current == req.room_id => return Ok(item.into()),
            Some(current) => {
                return Err(AppError::EquipmentInUse(format!(
                    "이미 다른 객실(ID: {})에 배치된 비품입니다.",
                    current
                )))
            }
            None => {}
        }

        let updated = EquipmentRepository::set_room(&state.db, item, Some(req.room_id)).await?;

        info!(equipment_id, room_id = req.room_id, "Equipment assigned");

        Ok(updated.into())
    }

    /// 비품 회수 (미배정 상태로)
    pub async fn unassign(state: &AppState, equipment_id: i64) -> Result<EquipmentResponse, AppError> {
        let item = EquipmentRepository::get(&state.db, equipment_id).await?;

        if item.room_id.is_none() {
            return Ok(item.into());
        }

        let updated = EquipmentRepository::set_room(&state.db, item, None).await?;

        info!(equipment_id, "Equipment unassigned");

        Ok(updated.into())
    }
}
