// ListStockUseCase - paginated ledger rows for a warehouse

use std::sync::Arc;

use common::PaginatedResponse;

use crate::WarehouseError;
use crate::application::dtos::commands::ListStockQuery;
use crate::application::dtos::responses::StockResponse;
use crate::domain::repositories::StockLedgerRepository;
use crate::domain::value_objects::{ProductId, WarehouseId};

pub struct ListStockUseCase<L>
where
    L: StockLedgerRepository,
{
    ledger_repo: Arc<L>,
}

impl<L> ListStockUseCase<L>
where
    L: StockLedgerRepository,
{
    pub fn new(ledger_repo: Arc<L>) -> Self {
        Self { ledger_repo }
    }

    pub async fn execute(
        &self,
        query: ListStockQuery,
    ) -> Result<PaginatedResponse<StockResponse>, WarehouseError> {
        if query.page <= 0 || query.page_size <= 0 {
            return Err(WarehouseError::InvalidPagination);
        }

        let (rows, total) = self
            .ledger_repo
            .find_paginated(
                WarehouseId::from_uuid(query.warehouse_id),
                query.product_id.map(ProductId::from_uuid),
                query.page,
                query.page_size,
            )
            .await?;

        Ok(PaginatedResponse::new(
            rows.into_iter().map(StockResponse::from).collect(),
            total,
            query.page,
            query.page_size,
        ))
    }
}
