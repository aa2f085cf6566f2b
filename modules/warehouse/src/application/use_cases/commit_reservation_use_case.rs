// CommitReservationUseCase - converts held stock into a stock-out

use std::sync::Arc;

use crate::WarehouseError;
use crate::application::dtos::commands::CommitReservationCommand;
use crate::application::dtos::responses::StockResponse;
use crate::domain::repositories::ReservationEngine;
use crate::domain::value_objects::{ProductId, ReservationReference, WarehouseId};

/// Use case for committing a reservation. The reference must match the one
/// handed out by the original reserve; a reference that already reached a
/// terminal state is refused.
pub struct CommitReservationUseCase<E>
where
    E: ReservationEngine,
{
    engine: Arc<E>,
}

impl<E> CommitReservationUseCase<E>
where
    E: ReservationEngine,
{
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// # Errors
    /// * `WarehouseError::InvalidQuantity` - non-positive quantity
    /// * `WarehouseError::CannotCommitMoreThanReserved`
    /// * `WarehouseError::ReservationAlreadyFinalized`
    pub async fn execute(
        &self,
        command: CommitReservationCommand,
    ) -> Result<StockResponse, WarehouseError> {
        if command.quantity <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }

        let stock = self
            .engine
            .commit(
                WarehouseId::from_uuid(command.warehouse_id),
                ProductId::from_uuid(command.product_id),
                command.quantity,
                &ReservationReference::from_string(command.reference),
            )
            .await?;

        Ok(stock.into())
    }
}
