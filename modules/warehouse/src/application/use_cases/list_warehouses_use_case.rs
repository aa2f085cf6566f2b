// ListWarehousesUseCase - paginated warehouse directory

use std::sync::Arc;

use common::PaginatedResponse;

use crate::WarehouseError;
use crate::application::dtos::commands::ListWarehousesQuery;
use crate::application::dtos::responses::WarehouseResponse;
use crate::domain::repositories::WarehouseRepository;

pub struct ListWarehousesUseCase<W>
where
    W: WarehouseRepository,
{
    warehouse_repo: Arc<W>,
}

impl<W> ListWarehousesUseCase<W>
where
    W: WarehouseRepository,
{
    pub fn new(warehouse_repo: Arc<W>) -> Self {
        Self { warehouse_repo }
    }

    pub async fn execute(
        &self,
        query: ListWarehousesQuery,
    ) -> Result<PaginatedResponse<WarehouseResponse>, WarehouseError> {
        if query.page <= 0 || query.page_size <= 0 {
            return Err(WarehouseError::InvalidPagination);
        }

        let (warehouses, total) = self
            .warehouse_repo
            .find_paginated(query.page, query.page_size)
            .await?;

        Ok(PaginatedResponse::new(
            warehouses.into_iter().map(WarehouseResponse::from).collect(),
            total,
            query.page,
            query.page_size,
        ))
    }
}
