// PostgreSQL StockLedgerRepository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::WarehouseError;
use crate::domain::entities::{StockMovement, WarehouseStock};
use crate::domain::repositories::StockLedgerRepository;
use crate::domain::value_objects::{MovementType, ProductId, StockId, WarehouseId};

use super::stock_row::{STOCK_COLUMNS, StockRow};

/// PostgreSQL implementation of StockLedgerRepository.
///
/// `add_stock` runs lock-or-create, the counter update and the `stock_in`
/// journal append in one transaction, so the row and its journal can never
/// diverge.
pub struct PgStockLedgerRepository {
    pool: PgPool,
}

impl PgStockLedgerRepository {
    /// Creates a new PgStockLedgerRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockLedgerRepository for PgStockLedgerRepository {
    async fn find_by_warehouse_and_product(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
    ) -> Result<Option<WarehouseStock>, WarehouseError> {
        let row = sqlx::query_as::<_, StockRow>(&format!(
            "SELECT {STOCK_COLUMNS} FROM warehouse_stock WHERE warehouse_id = $1 AND product_id = $2",
        ))
        .bind(warehouse_id.into_uuid())
        .bind(product_id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.try_into()).transpose()
    }

    async fn find_paginated(
        &self,
        warehouse_id: WarehouseId,
        product_id: Option<ProductId>,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<WarehouseStock>, i64), WarehouseError> {
        let offset = (page - 1) * page_size;

        let (rows, total): (Vec<StockRow>, i64) = match product_id {
            Some(product_id) => {
                let count: (i64,) = sqlx::query_as(
                    "SELECT COUNT(*) FROM warehouse_stock WHERE warehouse_id = $1 AND product_id = $2",
                )
                .bind(warehouse_id.into_uuid())
                .bind(product_id.into_uuid())
                .fetch_one(&self.pool)
                .await?;
                let rows = sqlx::query_as::<_, StockRow>(&format!(
                    r#"
                    SELECT {STOCK_COLUMNS}
                    FROM warehouse_stock
                    WHERE warehouse_id = $1 AND product_id = $2
                    ORDER BY created_at DESC
                    LIMIT $3 OFFSET $4
                    "#,
                ))
                .bind(warehouse_id.into_uuid())
                .bind(product_id.into_uuid())
                .bind(page_size)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                (rows, count.0)
            }
            None => {
                let count: (i64,) =
                    sqlx::query_as("SELECT COUNT(*) FROM warehouse_stock WHERE warehouse_id = $1")
                        .bind(warehouse_id.into_uuid())
                        .fetch_one(&self.pool)
                        .await?;
                let rows = sqlx::query_as::<_, StockRow>(&format!(
                    r#"
                    SELECT {STOCK_COLUMNS}
                    FROM warehouse_stock
                    WHERE warehouse_id = $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                ))
                .bind(warehouse_id.into_uuid())
                .bind(page_size)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                (rows, count.0)
            }
        };

        let stocks: Result<Vec<WarehouseStock>, WarehouseError> =
            rows.into_iter().map(|r| r.try_into()).collect();

        Ok((stocks?, total))
    }

    async fn add_stock(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        product_sku: &str,
        quantity: i32,
        reference: Option<String>,
        notes: Option<String>,
    ) -> Result<WarehouseStock, WarehouseError> {
        let mut tx = self.pool.begin().await?;

        // Lazily create the ledger row; the unique (warehouse_id, product_id)
        // index makes concurrent first stock-ins converge on one row.
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
        .bind(warehouse_id.into_uuid())
        .bind(product_id.into_uuid())
        .bind(product_sku)
        .bind(now)
        .execute(&mut *tx)
        .await?;

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
        .fetch_one(&mut *tx)
        .await?;

        let mut stock: WarehouseStock = row.try_into()?;
        stock.add_stock(quantity)?;

        sqlx::query(
            "UPDATE warehouse_stock SET quantity = $2, updated_at = $3 WHERE id = $1",
        )
        .bind(stock.id().into_uuid())
        .bind(stock.quantity())
        .bind(stock.updated_at())
        .execute(&mut *tx)
        .await?;

        let reference_type = reference.as_ref().map(|_| "receipt".to_string());
        let movement = StockMovement::create(
            warehouse_id,
            product_id,
            stock.product_sku(),
            MovementType::StockIn,
            quantity,
            reference_type,
            reference,
            notes,
        )?;
        insert_movement(&mut tx, &movement).await?;

        tx.commit().await?;

        Ok(stock)
    }
}

/// Appends a journal entry inside an open ledger transaction.
pub(crate) async fn insert_movement(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    movement: &StockMovement,
) -> Result<(), WarehouseError> {
    sqlx::query(
        r#"
        INSERT INTO stock_movements (
            id, warehouse_id, product_id, product_sku, movement_type,
            quantity, reference_type, reference_id, notes, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(movement.id().into_uuid())
    .bind(movement.warehouse_id().into_uuid())
    .bind(movement.product_id().into_uuid())
    .bind(movement.product_sku())
    .bind(movement.movement_type().to_string())
    .bind(movement.quantity())
    .bind(movement.reference_type())
    .bind(movement.reference_id())
    .bind(movement.notes())
    .bind(movement.created_at())
    .execute(&mut **tx)
    .await?;

    Ok(())
}
