// PostgreSQL ReservationEngine implementation
//
// Every operation is one transaction around SELECT ... FOR UPDATE on the
// target ledger row, so reserve/commit/cancel for a given (warehouse,
// product) pair execute strictly one at a time. Validation failures roll the
// transaction back and append nothing.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::WarehouseError;
use crate::domain::entities::{ReservationLogEntry, StockMovement, WarehouseStock};
use crate::domain::repositories::{ReservationEngine, ReservationGrant};
use crate::domain::value_objects::{
    MovementType, ProductId, ReservationReference, ReservationStatus, WarehouseId,
};

use super::pg_stock_ledger_repository::insert_movement;
use super::stock_row::{STOCK_COLUMNS, StockRow};

/// PostgreSQL implementation of ReservationEngine
pub struct PgReservationEngine {
    pool: PgPool,
}

impl PgReservationEngine {
    /// Creates a new PgReservationEngine with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationEngine for PgReservationEngine {
    #[instrument(skip(self))]
    async fn reserve(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<ReservationGrant, WarehouseError> {
        let mut tx = self.pool.begin().await?;

        // Reserving from a row that was never stocked is never valid.
        let mut stock = lock_row(&mut tx, warehouse_id, product_id)
            .await?
            .ok_or(WarehouseError::StockNotFound {
                warehouse_id: warehouse_id.into_uuid(),
                product_id: product_id.into_uuid(),
            })?;

        stock.reserve(quantity)?;
        stock.check_invariants()?;
        update_counters(&mut tx, &stock).await?;

        let reference = ReservationReference::generate(warehouse_id, product_id);
        let entry = ReservationLogEntry::create(
            warehouse_id,
            product_id,
            quantity,
            ReservationStatus::Pending,
            reference.clone(),
        )?;
        insert_log_entry(&mut tx, &entry).await?;

        tx.commit().await?;

        Ok(ReservationGrant { reference, stock })
    }

    #[instrument(skip(self))]
    async fn commit(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        quantity: i32,
        reference: &ReservationReference,
    ) -> Result<WarehouseStock, WarehouseError> {
        let mut tx = self.pool.begin().await?;

        let mut stock = lock_row(&mut tx, warehouse_id, product_id)
            .await?
            .ok_or(WarehouseError::StockNotFound {
                warehouse_id: warehouse_id.into_uuid(),
                product_id: product_id.into_uuid(),
            })?;

        check_reference_open(&mut tx, reference, quantity, TerminalGuard::Commit).await?;

        stock.commit_reservation(quantity)?;
        stock.check_invariants()?;
        update_counters(&mut tx, &stock).await?;

        let movement = StockMovement::create(
            warehouse_id,
            product_id,
            stock.product_sku(),
            MovementType::StockOut,
            quantity,
            Some("reservation".to_string()),
            Some(reference.to_string()),
            None,
        )?;
        insert_movement(&mut tx, &movement).await?;

        let entry = ReservationLogEntry::create(
            warehouse_id,
            product_id,
            quantity,
            ReservationStatus::Committed,
            reference.clone(),
        )?;
        insert_log_entry(&mut tx, &entry).await?;

        tx.commit().await?;

        Ok(stock)
    }

    #[instrument(skip(self))]
    async fn cancel(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        quantity: i32,
        reference: &ReservationReference,
    ) -> Result<WarehouseStock, WarehouseError> {
        let mut tx = self.pool.begin().await?;

        let mut stock = lock_row(&mut tx, warehouse_id, product_id)
            .await?
            .ok_or(WarehouseError::StockNotFound {
                warehouse_id: warehouse_id.into_uuid(),
                product_id: product_id.into_uuid(),
            })?;

        check_reference_open(&mut tx, reference, quantity, TerminalGuard::Cancel).await?;

        stock.release(quantity)?;
        stock.check_invariants()?;
        update_counters(&mut tx, &stock).await?;

        // Physical stock is unchanged, so no movement entry is produced.
        let entry = ReservationLogEntry::create(
            warehouse_id,
            product_id,
            quantity,
            ReservationStatus::Cancelled,
            reference.clone(),
        )?;
        insert_log_entry(&mut tx, &entry).await?;

        tx.commit().await?;

        Ok(stock)
    }
}

/// Locks the ledger row for the duration of the transaction.
async fn lock_row(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    warehouse_id: WarehouseId,
    product_id: ProductId,
) -> Result<Option<WarehouseStock>, WarehouseError> {
    let row = sqlx::query_as::<_, StockRow>(&format!(
        r#"
        SELECT {STOCK_COLUMNS}
        FROM warehouse_stock
        WHERE warehouse_id = $1 AND product_id = $2
        FOR UPDATE
        "#,
    ))
    .bind(warehouse_id.into_uuid())
    .bind(product_id.into_uuid())
    .fetch_optional(&mut **tx)
    .await?;

    row.map(|r| r.try_into()).transpose()
}

async fn update_counters(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    stock: &WarehouseStock,
) -> Result<(), WarehouseError> {
    sqlx::query(
        r#"
        UPDATE warehouse_stock
        SET quantity = $2, reserved_quantity = $3, updated_at = $4
        WHERE id = $1
        "#,
    )
    .bind(stock.id().into_uuid())
    .bind(stock.quantity())
    .bind(stock.reserved_quantity())
    .bind(stock.updated_at())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

async fn insert_log_entry(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    entry: &ReservationLogEntry,
) -> Result<(), WarehouseError> {
    sqlx::query(
        r#"
        INSERT INTO reservation_logs (
            id, warehouse_id, product_id, quantity, status, reference, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(entry.id().into_uuid())
    .bind(entry.warehouse_id().into_uuid())
    .bind(entry.product_id().into_uuid())
    .bind(entry.quantity())
    .bind(entry.status().to_string())
    .bind(entry.reference().as_str())
    .bind(entry.created_at())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

enum TerminalGuard {
    Commit,
    Cancel,
}

/// Verifies, inside the row-lock transaction, that the reference is known,
/// has not already reached a terminal state, and holds at least `quantity`
/// pending units. Each reference gets at most one terminal transition.
async fn check_reference_open(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    reference: &ReservationReference,
    quantity: i32,
    guard: TerminalGuard,
) -> Result<(), WarehouseError> {
    let entries: Vec<(String, i32)> = sqlx::query_as(
        "SELECT status, quantity FROM reservation_logs WHERE reference = $1",
    )
    .bind(reference.as_str())
    .fetch_all(&mut **tx)
    .await?;

    if entries.is_empty() {
        return Err(WarehouseError::ReservationNotFound(reference.to_string()));
    }

    let mut pending_total = 0i32;
    for (status, qty) in &entries {
        let status: ReservationStatus = status.parse()?;
        if status.is_terminal() {
            return Err(WarehouseError::ReservationAlreadyFinalized(
                reference.to_string(),
            ));
        }
        if status == ReservationStatus::Pending {
            pending_total += qty;
        }
    }

    if pending_total < quantity {
        return Err(match guard {
            TerminalGuard::Commit => WarehouseError::CannotCommitMoreThanReserved,
            TerminalGuard::Cancel => WarehouseError::CannotCancelMoreThanReserved,
        });
    }

    Ok(())
}
