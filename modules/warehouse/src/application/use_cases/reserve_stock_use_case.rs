// ReserveStockUseCase - sets stock aside and hands back a reference

use std::sync::Arc;

use crate::WarehouseError;
use crate::application::dtos::commands::ReserveStockCommand;
use crate::application::dtos::responses::ReservationGrantResponse;
use crate::domain::repositories::{ReservationEngine, WarehouseRepository};
use crate::domain::value_objects::{ProductId, WarehouseId};

/// Use case for reserving stock.
///
/// Verifies the warehouse is active, then delegates to the engine, which
/// serializes per-row access under an exclusive lock. Reserving from a
/// missing ledger row is never valid.
pub struct ReserveStockUseCase<W, E>
where
    W: WarehouseRepository,
    E: ReservationEngine,
{
    warehouse_repo: Arc<W>,
    engine: Arc<E>,
}

impl<W, E> ReserveStockUseCase<W, E>
where
    W: WarehouseRepository,
    E: ReservationEngine,
{
    pub fn new(warehouse_repo: Arc<W>, engine: Arc<E>) -> Self {
        Self {
            warehouse_repo,
            engine,
        }
    }

    /// # Errors
    /// * `WarehouseError::InvalidQuantity` - non-positive quantity
    /// * `WarehouseError::WarehouseNotFound` / `WarehouseInactive`
    /// * `WarehouseError::StockNotFound` - no ledger row for the pair
    /// * `WarehouseError::InsufficientStock` - `available < quantity`
    pub async fn execute(
        &self,
        command: ReserveStockCommand,
    ) -> Result<ReservationGrantResponse, WarehouseError> {
        if command.quantity <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }

        let warehouse_id = WarehouseId::from_uuid(command.warehouse_id);
        let warehouse = self
            .warehouse_repo
            .find_by_id(warehouse_id)
            .await?
            .ok_or(WarehouseError::WarehouseNotFound(command.warehouse_id))?;
        if !warehouse.is_active() {
            return Err(WarehouseError::WarehouseInactive(command.warehouse_id));
        }

        let grant = self
            .engine
            .reserve(
                warehouse_id,
                ProductId::from_uuid(command.product_id),
                command.quantity,
            )
            .await?;

        Ok(grant.into())
    }
}
