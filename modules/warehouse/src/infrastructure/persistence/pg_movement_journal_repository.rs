// PostgreSQL MovementJournalRepository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;

use crate::WarehouseError;
use crate::domain::entities::StockMovement;
use crate::domain::repositories::MovementJournalRepository;
use crate::domain::value_objects::{MovementId, MovementType, ProductId, WarehouseId};

/// PostgreSQL implementation of MovementJournalRepository. Read-only; the
/// ledger and transfer transactions own the inserts.
pub struct PgMovementJournalRepository {
    pool: PgPool,
}

impl PgMovementJournalRepository {
    /// Creates a new PgMovementJournalRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovementJournalRepository for PgMovementJournalRepository {
    async fn find_paginated(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<StockMovement>, i64), WarehouseError> {
        let offset = (page - 1) * page_size;

        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM stock_movements WHERE warehouse_id = $1 AND product_id = $2",
        )
        .bind(warehouse_id.into_uuid())
        .bind(product_id.into_uuid())
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT id, warehouse_id, product_id, product_sku, movement_type,
                   quantity, reference_type, reference_id, notes, created_at
            FROM stock_movements
            WHERE warehouse_id = $1 AND product_id = $2
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(warehouse_id.into_uuid())
        .bind(product_id.into_uuid())
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let movements: Result<Vec<StockMovement>, WarehouseError> =
            rows.into_iter().map(|r| r.try_into()).collect();

        Ok((movements?, count.0))
    }
}

/// Internal row type for mapping stock_movements database results
#[derive(sqlx::FromRow)]
struct MovementRow {
    id: uuid::Uuid,
    warehouse_id: uuid::Uuid,
    product_id: uuid::Uuid,
    product_sku: String,
    movement_type: String,
    quantity: i32,
    reference_type: Option<String>,
    reference_id: Option<String>,
    notes: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<MovementRow> for StockMovement {
    type Error = WarehouseError;

    fn try_from(row: MovementRow) -> Result<Self, Self::Error> {
        Ok(StockMovement::reconstitute(
            MovementId::from_uuid(row.id),
            WarehouseId::from_uuid(row.warehouse_id),
            ProductId::from_uuid(row.product_id),
            row.product_sku,
            MovementType::from_str(&row.movement_type)?,
            row.quantity,
            row.reference_type,
            row.reference_id,
            row.notes,
            row.created_at,
        ))
    }
}
