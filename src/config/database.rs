use crate::domain::{
    bill::entity::{bill, payment},
    equipment::entity::equipment,
    pricing::entity::price_history,
    reservation::entity::{reservation, stay},
    room::entity::room,
    service_order::entity::service_order,
    user::entity::user,
};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, Statement};
use tracing::info;

pub async fn establish_connection(
    database_url: &str,
    schema_update: bool,
) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    info!("Successfully connected to the database.");

    if schema_update {
        // Auto-create tables (Schema Sync)
        create_tables(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

/// 엔티티 정의로부터 테이블과 인덱스를 생성합니다. (이미 있으면 건너뜀)
pub async fn create_tables<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let schema = Schema::new(db.get_database_backend());

    info!("Starting database schema synchronization...");

    // Order matters for foreign keys! (Parent first, then Child)

    // 1. Independent Entities
    create_table_if_not_exists(db, &schema, user::Entity).await?;
    create_table_if_not_exists(db, &schema, room::Entity).await?;

    // 2. Room 종속
    create_table_if_not_exists(db, &schema, price_history::Entity).await?;
    create_table_if_not_exists(db, &schema, equipment::Entity).await?;
    create_table_if_not_exists(db, &schema, reservation::Entity).await?;

    // 3. Reservation 종속
    create_table_if_not_exists(db, &schema, stay::Entity).await?;

    // 4. Stay 종속
    create_table_if_not_exists(db, &schema, bill::Entity).await?;
    create_table_if_not_exists(db, &schema, service_order::Entity).await?;
    create_table_if_not_exists(db, &schema, payment::Entity).await?;

    // 가용 객실 조회 / 요금 조회용 인덱스
    create_index_if_not_exists(
        db,
        "idx_reservation_room_period",
        "reservation",
        &["room_id", "check_in", "check_out"],
    )
    .await?;
    create_index_if_not_exists(
        db,
        "idx_price_history_room_start",
        "price_history",
        &["room_id", "start_date"],
    )
    .await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_index_if_not_exists<C>(
    db: &C,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    let cols = columns.join(", ");
    let sql = format!("CREATE INDEX {} ON {} ({})", index_name, table_name, cols);
    let stmt = Statement::from_string(backend, sql);
    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate") || err_str.contains("exists") {
                Ok(())
            } else {
                tracing::error!("Failed to create index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_table_if_not_exists<C, E>(db: &C, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    db.execute(create_stmt).await.map(|_| ()).map_err(|e| {
        tracing::error!("Failed to create table {}: {}", entity.table_name(), e);
        e
    })
}
