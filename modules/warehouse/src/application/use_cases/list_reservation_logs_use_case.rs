// ListReservationLogsUseCase - reservation history for one ledger row

use std::sync::Arc;

use common::PaginatedResponse;

use crate::WarehouseError;
use crate::application::dtos::commands::ListReservationLogsQuery;
use crate::application::dtos::responses::ReservationLogResponse;
use crate::domain::repositories::ReservationLogRepository;
use crate::domain::value_objects::{ProductId, WarehouseId};

pub struct ListReservationLogsUseCase<R>
where
    R: ReservationLogRepository,
{
    log_repo: Arc<R>,
}

impl<R> ListReservationLogsUseCase<R>
where
    R: ReservationLogRepository,
{
    pub fn new(log_repo: Arc<R>) -> Self {
        Self { log_repo }
    }

    pub async fn execute(
        &self,
        query: ListReservationLogsQuery,
    ) -> Result<PaginatedResponse<ReservationLogResponse>, WarehouseError> {
        if query.page <= 0 || query.page_size <= 0 {
            return Err(WarehouseError::InvalidPagination);
        }

        let (entries, total) = self
            .log_repo
            .find_paginated(
                WarehouseId::from_uuid(query.warehouse_id),
                ProductId::from_uuid(query.product_id),
                query.page,
                query.page_size,
            )
            .await?;

        Ok(PaginatedResponse::new(
            entries
                .into_iter()
                .map(ReservationLogResponse::from)
                .collect(),
            total,
            query.page,
            query.page_size,
        ))
    }
}
