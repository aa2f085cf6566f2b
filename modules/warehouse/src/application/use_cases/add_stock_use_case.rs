// AddStockUseCase - receives stock into a warehouse ledger row

use std::sync::Arc;

use crate::WarehouseError;
use crate::application::dtos::commands::AddStockCommand;
use crate::application::dtos::responses::StockResponse;
use crate::domain::repositories::{StockLedgerRepository, WarehouseRepository};
use crate::domain::value_objects::{ProductId, WarehouseId};

/// Use case for receiving stock. Creates the ledger row lazily on first
/// stock-in; the row update and its `stock_in` journal entry are atomic.
pub struct AddStockUseCase<W, L>
where
    W: WarehouseRepository,
    L: StockLedgerRepository,
{
    warehouse_repo: Arc<W>,
    ledger_repo: Arc<L>,
}

impl<W, L> AddStockUseCase<W, L>
where
    W: WarehouseRepository,
    L: StockLedgerRepository,
{
    pub fn new(warehouse_repo: Arc<W>, ledger_repo: Arc<L>) -> Self {
        Self {
            warehouse_repo,
            ledger_repo,
        }
    }

    /// # Errors
    /// * `WarehouseError::InvalidQuantity` - non-positive quantity
    /// * `WarehouseError::WarehouseNotFound` / `WarehouseInactive`
    pub async fn execute(&self, command: AddStockCommand) -> Result<StockResponse, WarehouseError> {
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

        let stock = self
            .ledger_repo
            .add_stock(
                warehouse_id,
                ProductId::from_uuid(command.product_id),
                &command.product_sku,
                command.quantity,
                command.reference,
                command.notes,
            )
            .await?;

        Ok(stock.into())
    }
}
