// ReservationEngine trait - transactional reserve/commit/cancel port

use async_trait::async_trait;

use crate::WarehouseError;
use crate::domain::entities::WarehouseStock;
use crate::domain::value_objects::{ProductId, ReservationReference, WarehouseId};

/// Snapshot returned by a successful reserve: the fresh reference plus the
/// ledger row as it looked after the reservation was taken.
#[derive(Debug, Clone)]
pub struct ReservationGrant {
    pub reference: ReservationReference,
    pub stock: WarehouseStock,
}

/// Port for the reservation state machine.
///
/// Every operation runs as one transaction holding an exclusive lock on the
/// `(warehouse, product)` ledger row, so at most one reserve/commit/cancel
/// per row executes at a time. Different rows never block each other.
/// Implementations must refuse a commit or cancel whose reference already
/// reached a terminal state.
#[async_trait]
pub trait ReservationEngine: Send + Sync {
    /// Sets `quantity` aside on the row and appends a `pending` log entry.
    /// Fails with `StockNotFound` when the row does not exist and
    /// `InsufficientStock` when `available < quantity`; failed attempts
    /// append nothing.
    async fn reserve(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<ReservationGrant, WarehouseError>;

    /// Converts reserved stock into a stock-out: decrements both counters,
    /// appends a `stock_out` movement and a `committed` log entry.
    async fn commit(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        quantity: i32,
        reference: &ReservationReference,
    ) -> Result<WarehouseStock, WarehouseError>;

    /// Returns reserved stock to availability and appends a `cancelled` log
    /// entry. Physical stock is unchanged, so no movement is produced.
    async fn cancel(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        quantity: i32,
        reference: &ReservationReference,
    ) -> Result<WarehouseStock, WarehouseError>;
}
