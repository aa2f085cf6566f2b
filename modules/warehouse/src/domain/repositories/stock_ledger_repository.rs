// StockLedgerRepository trait - persistence port for ledger rows

use async_trait::async_trait;

use crate::WarehouseError;
use crate::domain::entities::WarehouseStock;
use crate::domain::value_objects::{ProductId, WarehouseId};

/// Repository trait for the stock ledger.
///
/// Reads take the database's read-committed view and never wait on
/// reservation row locks. `add_stock` is the single write entry point: it
/// locks (or lazily creates) the ledger row and appends the `stock_in`
/// journal entry in the same transaction.
#[async_trait]
pub trait StockLedgerRepository: Send + Sync {
    /// Finds the ledger row for a (warehouse, product) pair
    async fn find_by_warehouse_and_product(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
    ) -> Result<Option<WarehouseStock>, WarehouseError>;

    /// Lists ledger rows of a warehouse with pagination and an optional
    /// product filter. Returns (rows, total_count)
    async fn find_paginated(
        &self,
        warehouse_id: WarehouseId,
        product_id: Option<ProductId>,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<WarehouseStock>, i64), WarehouseError>;

    /// Adds received stock to the row, creating it on first stock-in with
    /// the given SKU snapshot. Atomic with its `stock_in` movement.
    async fn add_stock(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        product_sku: &str,
        quantity: i32,
        reference: Option<String>,
        notes: Option<String>,
    ) -> Result<WarehouseStock, WarehouseError>;
}
