// GetStockUseCase - reads one ledger row

use std::sync::Arc;

use uuid::Uuid;

use crate::WarehouseError;
use crate::application::dtos::responses::StockResponse;
use crate::domain::repositories::StockLedgerRepository;
use crate::domain::value_objects::{ProductId, WarehouseId};

pub struct GetStockUseCase<L>
where
    L: StockLedgerRepository,
{
    ledger_repo: Arc<L>,
}

impl<L> GetStockUseCase<L>
where
    L: StockLedgerRepository,
{
    pub fn new(ledger_repo: Arc<L>) -> Self {
        Self { ledger_repo }
    }

    pub async fn execute(
        &self,
        warehouse_id: Uuid,
        product_id: Uuid,
    ) -> Result<StockResponse, WarehouseError> {
        let stock = self
            .ledger_repo
            .find_by_warehouse_and_product(
                WarehouseId::from_uuid(warehouse_id),
                ProductId::from_uuid(product_id),
            )
            .await?
            .ok_or(WarehouseError::StockNotFound {
                warehouse_id,
                product_id,
            })?;

        Ok(stock.into())
    }
}
