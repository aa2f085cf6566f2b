// PostgreSQL TransferCoordinator implementation
//
// Locks both ledger rows ordered by warehouse id (smaller first), so two
// transfers crossing the same pair in opposite directions queue instead of
// deadlocking. The transfer record is inserted as `pending` before the
// working transaction; a shortfall marks it `failed` in its own write.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::WarehouseError;
use crate::domain::entities::{StockMovement, StockTransfer, WarehouseStock};
use crate::domain::repositories::TransferCoordinator;
use crate::domain::value_objects::{MovementType, ProductId, StockId, WarehouseId};

use super::pg_stock_ledger_repository::insert_movement;
use super::stock_row::{STOCK_COLUMNS, StockRow};

/// PostgreSQL implementation of TransferCoordinator
pub struct PgTransferCoordinator {
    pool: PgPool,
}

impl PgTransferCoordinator {
    /// Creates a new PgTransferCoordinator with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_pending(&self, transfer: &StockTransfer) -> Result<(), WarehouseError> {
        sqlx::query(
            r#"
            INSERT INTO stock_transfers (
                id, source_warehouse_id, target_warehouse_id, product_id, product_sku,
                quantity, status, transfer_reference, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(transfer.id().into_uuid())
        .bind(transfer.source_warehouse_id().into_uuid())
        .bind(transfer.target_warehouse_id().into_uuid())
        .bind(transfer.product_id().into_uuid())
        .bind(transfer.product_sku())
        .bind(transfer.quantity())
        .bind(transfer.status().to_string())
        .bind(transfer.transfer_reference())
        .bind(transfer.created_at())
        .bind(transfer.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn mark_failed(&self, transfer: &mut StockTransfer) -> Result<(), WarehouseError> {
        transfer.fail()?;
        sqlx::query("UPDATE stock_transfers SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(transfer.id().into_uuid())
            .bind(transfer.status().to_string())
            .bind(transfer.updated_at())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl TransferCoordinator for PgTransferCoordinator {
    #[instrument(skip(self))]
    async fn transfer(
        &self,
        source_warehouse_id: WarehouseId,
        target_warehouse_id: WarehouseId,
        product_id: ProductId,
        product_sku: &str,
        quantity: i32,
        transfer_reference: String,
    ) -> Result<StockTransfer, WarehouseError> {
        let mut transfer = StockTransfer::create(
            source_warehouse_id,
            target_warehouse_id,
            product_id,
            product_sku,
            quantity,
            transfer_reference,
        )?;
        self.insert_pending(&transfer).await?;

        let mut tx = self.pool.begin().await?;

        // The target row may not exist yet; seed it empty before taking the
        // ordered locks so both rows are lockable.
        let now = chrono::Utc::now();
        sqlx::query(
            r#"
            INSERT INTO warehouse_stock (
                id, warehouse_id, product_id, product_sku,
                quantity, reserved_quantity, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, 0, 0, $5, $5)
            ON CONFLICT (warehouse_id, product_id) DO NOTHING
            "#,
        )
        .bind(StockId::new().into_uuid())
        .bind(target_warehouse_id.into_uuid())
        .bind(product_id.into_uuid())
        .bind(product_sku)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        // Deterministic lock order: smaller warehouse id first.
        let mut lock_order = [source_warehouse_id, target_warehouse_id];
        lock_order.sort();
        let mut locked: Vec<(WarehouseId, Option<WarehouseStock>)> = Vec::with_capacity(2);
        for warehouse_id in lock_order {
            let stock = lock_row(&mut tx, warehouse_id, product_id).await?;
            locked.push((warehouse_id, stock));
        }
        let mut take = |warehouse_id: WarehouseId| {
            locked
                .iter_mut()
                .find(|(id, _)| *id == warehouse_id)
                .and_then(|(_, stock)| stock.take())
        };

        // A source that was never stocked fails the same way a shortfall does.
        let source = take(source_warehouse_id);
        let mut source = match source {
            Some(source) => source,
            None => {
                drop(tx);
                self.mark_failed(&mut transfer).await?;
                return Err(WarehouseError::InsufficientStock);
            }
        };

        // Rejections roll back everything but the pending record, which is
        // then flipped to failed in its own write.
        if let Err(e) = source.withdraw(quantity) {
            drop(tx);
            self.mark_failed(&mut transfer).await?;
            return Err(e);
        }

        let mut target = take(target_warehouse_id).ok_or(WarehouseError::StockNotFound {
            warehouse_id: target_warehouse_id.into_uuid(),
            product_id: product_id.into_uuid(),
        })?;
        target.deposit(quantity)?;

        for stock in [&source, &target] {
            stock.check_invariants()?;
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
            .execute(&mut *tx)
            .await?;
        }

        let out_movement = StockMovement::create(
            source_warehouse_id,
            product_id,
            source.product_sku(),
            MovementType::TransferOut,
            quantity,
            Some("transfer".to_string()),
            Some(transfer.transfer_reference().to_string()),
            None,
        )?;
        insert_movement(&mut tx, &out_movement).await?;

        let in_movement = StockMovement::create(
            target_warehouse_id,
            product_id,
            target.product_sku(),
            MovementType::TransferIn,
            quantity,
            Some("transfer".to_string()),
            Some(transfer.transfer_reference().to_string()),
            None,
        )?;
        insert_movement(&mut tx, &in_movement).await?;

        transfer.complete()?;
        sqlx::query("UPDATE stock_transfers SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(transfer.id().into_uuid())
            .bind(transfer.status().to_string())
            .bind(transfer.updated_at())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(transfer)
    }
}

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
