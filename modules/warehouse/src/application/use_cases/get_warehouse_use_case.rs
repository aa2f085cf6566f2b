// GetWarehouseUseCase - fetches one warehouse by id

use std::sync::Arc;

use uuid::Uuid;

use crate::WarehouseError;
use crate::application::dtos::responses::WarehouseResponse;
use crate::domain::repositories::WarehouseRepository;
use crate::domain::value_objects::WarehouseId;

pub struct GetWarehouseUseCase<W>
where
    W: WarehouseRepository,
{
    warehouse_repo: Arc<W>,
}

impl<W> GetWarehouseUseCase<W>
where
    W: WarehouseRepository,
{
    pub fn new(warehouse_repo: Arc<W>) -> Self {
        Self { warehouse_repo }
    }

    pub async fn execute(&self, warehouse_id: Uuid) -> Result<WarehouseResponse, WarehouseError> {
        let warehouse = self
            .warehouse_repo
            .find_by_id(WarehouseId::from_uuid(warehouse_id))
            .await?
            .ok_or(WarehouseError::WarehouseNotFound(warehouse_id))?;

        Ok(warehouse.into())
    }
}
