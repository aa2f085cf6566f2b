// ReservationLogRepository trait - read port over reservation history

use async_trait::async_trait;

use crate::WarehouseError;
use crate::domain::entities::ReservationLogEntry;
use crate::domain::value_objects::{ProductId, WarehouseId};

/// Read-only port over `reservation_logs`. The engine appends entries inside
/// its own transactions.
#[async_trait]
pub trait ReservationLogRepository: Send + Sync {
    /// Lists reservation log entries for a (warehouse, product) pair in
    /// reverse chronological order. Returns (entries, total_count)
    async fn find_paginated(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<ReservationLogEntry>, i64), WarehouseError>;
}
