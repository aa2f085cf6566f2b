// MovementJournalRepository trait - read port over the movement journal

use async_trait::async_trait;

use crate::WarehouseError;
use crate::domain::entities::StockMovement;
use crate::domain::value_objects::{ProductId, WarehouseId};

/// Read-only port over `stock_movements`. Appends happen exclusively inside
/// the ledger and transfer transactions; history is served newest-first.
#[async_trait]
pub trait MovementJournalRepository: Send + Sync {
    /// Lists movements for a (warehouse, product) pair in reverse
    /// chronological order. Returns (movements, total_count)
    async fn find_paginated(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<StockMovement>, i64), WarehouseError>;
}
