// PostgreSQL ReservationLogRepository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;

use crate::WarehouseError;
use crate::domain::entities::ReservationLogEntry;
use crate::domain::repositories::ReservationLogRepository;
use crate::domain::value_objects::{
    LogEntryId, ProductId, ReservationReference, ReservationStatus, WarehouseId,
};

/// PostgreSQL implementation of ReservationLogRepository. Read-only; the
/// engine appends entries inside its own transactions.
pub struct PgReservationLogRepository {
    pool: PgPool,
}

impl PgReservationLogRepository {
    /// Creates a new PgReservationLogRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationLogRepository for PgReservationLogRepository {
    async fn find_paginated(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<ReservationLogEntry>, i64), WarehouseError> {
        let offset = (page - 1) * page_size;

        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM reservation_logs WHERE warehouse_id = $1 AND product_id = $2",
        )
        .bind(warehouse_id.into_uuid())
        .bind(product_id.into_uuid())
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, LogEntryRow>(
            r#"
            SELECT id, warehouse_id, product_id, quantity, status, reference, created_at
            FROM reservation_logs
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

        let entries: Result<Vec<ReservationLogEntry>, WarehouseError> =
            rows.into_iter().map(|r| r.try_into()).collect();

        Ok((entries?, count.0))
    }
}

/// Internal row type for mapping reservation_logs database results
#[derive(sqlx::FromRow)]
struct LogEntryRow {
    id: uuid::Uuid,
    warehouse_id: uuid::Uuid,
    product_id: uuid::Uuid,
    quantity: i32,
    status: String,
    reference: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<LogEntryRow> for ReservationLogEntry {
    type Error = WarehouseError;

    fn try_from(row: LogEntryRow) -> Result<Self, Self::Error> {
        Ok(ReservationLogEntry::reconstitute(
            LogEntryId::from_uuid(row.id),
            WarehouseId::from_uuid(row.warehouse_id),
            ProductId::from_uuid(row.product_id),
            row.quantity,
            ReservationStatus::from_str(&row.status)?,
            ReservationReference::from_string(row.reference),
            row.created_at,
        ))
    }
}
