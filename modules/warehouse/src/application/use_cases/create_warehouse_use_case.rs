// CreateWarehouseUseCase - registers a new warehouse

use std::sync::Arc;

use crate::WarehouseError;
use crate::application::dtos::commands::CreateWarehouseCommand;
use crate::application::dtos::responses::WarehouseResponse;
use crate::domain::entities::Warehouse;
use crate::domain::repositories::WarehouseRepository;

/// Use case for creating a warehouse. Codes must be unique.
pub struct CreateWarehouseUseCase<W>
where
    W: WarehouseRepository,
{
    warehouse_repo: Arc<W>,
}

impl<W> CreateWarehouseUseCase<W>
where
    W: WarehouseRepository,
{
    pub fn new(warehouse_repo: Arc<W>) -> Self {
        Self { warehouse_repo }
    }

    pub async fn execute(
        &self,
        command: CreateWarehouseCommand,
    ) -> Result<WarehouseResponse, WarehouseError> {
        if self
            .warehouse_repo
            .find_by_code(&command.code)
            .await?
            .is_some()
        {
            return Err(WarehouseError::DuplicateWarehouseCode(command.code));
        }

        let warehouse = Warehouse::create(command.code, command.name, command.address)?;
        self.warehouse_repo.save(&warehouse).await?;

        Ok(warehouse.into())
    }
}
