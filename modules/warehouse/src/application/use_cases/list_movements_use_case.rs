// ListMovementsUseCase - movement history for one ledger row

use std::sync::Arc;

use common::PaginatedResponse;

use crate::WarehouseError;
use crate::application::dtos::commands::ListMovementsQuery;
use crate::application::dtos::responses::MovementResponse;
use crate::domain::repositories::MovementJournalRepository;
use crate::domain::value_objects::{ProductId, WarehouseId};

pub struct ListMovementsUseCase<M>
where
    M: MovementJournalRepository,
{
    journal_repo: Arc<M>,
}

impl<M> ListMovementsUseCase<M>
where
    M: MovementJournalRepository,
{
    pub fn new(journal_repo: Arc<M>) -> Self {
        Self { journal_repo }
    }

    pub async fn execute(
        &self,
        query: ListMovementsQuery,
    ) -> Result<PaginatedResponse<MovementResponse>, WarehouseError> {
        if query.page <= 0 || query.page_size <= 0 {
            return Err(WarehouseError::InvalidPagination);
        }

        let (movements, total) = self
            .journal_repo
            .find_paginated(
                WarehouseId::from_uuid(query.warehouse_id),
                ProductId::from_uuid(query.product_id),
                query.page,
                query.page_size,
            )
            .await?;

        Ok(PaginatedResponse::new(
            movements.into_iter().map(MovementResponse::from).collect(),
            total,
            query.page,
            query.page_size,
        ))
    }
}
