// UpdateWarehouseUseCase - updates display attributes and the active flag

use std::sync::Arc;

use uuid::Uuid;

use crate::WarehouseError;
use crate::application::dtos::commands::UpdateWarehouseCommand;
use crate::application::dtos::responses::WarehouseResponse;
use crate::domain::repositories::WarehouseRepository;
use crate::domain::value_objects::WarehouseId;

pub struct UpdateWarehouseUseCase<W>
where
    W: WarehouseRepository,
{
    warehouse_repo: Arc<W>,
}

impl<W> UpdateWarehouseUseCase<W>
where
    W: WarehouseRepository,
{
    pub fn new(warehouse_repo: Arc<W>) -> Self {
        Self { warehouse_repo }
    }

    pub async fn execute(
        &self,
        warehouse_id: Uuid,
        command: UpdateWarehouseCommand,
    ) -> Result<WarehouseResponse, WarehouseError> {
        let id = WarehouseId::from_uuid(warehouse_id);
        let mut warehouse = self
            .warehouse_repo
            .find_by_id(id)
            .await?
            .ok_or(WarehouseError::WarehouseNotFound(warehouse_id))?;

        warehouse.update(command.name, command.address);
        match command.is_active {
            Some(true) => warehouse.activate(),
            Some(false) => warehouse.deactivate(),
            None => {}
        }

        self.warehouse_repo.update(&warehouse).await?;

        Ok(warehouse.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::domain::entities::Warehouse;

    struct MockWarehouseRepository {
        warehouses: Mutex<HashMap<WarehouseId, Warehouse>>,
    }

    impl MockWarehouseRepository {
        fn with(warehouse: Warehouse) -> Self {
            let mut map = HashMap::new();
            map.insert(warehouse.id(), warehouse);
            Self {
                warehouses: Mutex::new(map),
            }
        }
    }

    #[async_trait]
    impl WarehouseRepository for MockWarehouseRepository {
        async fn save(&self, _warehouse: &Warehouse) -> Result<(), WarehouseError> {
            unimplemented!()
        }

        async fn find_by_id(
            &self,
            id: WarehouseId,
        ) -> Result<Option<Warehouse>, WarehouseError> {
            let warehouses = self.warehouses.lock().unwrap();
            Ok(warehouses.get(&id).cloned())
        }

        async fn find_by_code(&self, _code: &str) -> Result<Option<Warehouse>, WarehouseError> {
            unimplemented!()
        }

        async fn update(&self, warehouse: &Warehouse) -> Result<(), WarehouseError> {
            let mut warehouses = self.warehouses.lock().unwrap();
            warehouses.insert(warehouse.id(), warehouse.clone());
            Ok(())
        }

        async fn find_paginated(
            &self,
            _page: i64,
            _page_size: i64,
        ) -> Result<(Vec<Warehouse>, i64), WarehouseError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_deactivate_warehouse() {
        let warehouse = Warehouse::create("WH-01", "North", None).unwrap();
        let id = warehouse.id().into_uuid();
        let repo = Arc::new(MockWarehouseRepository::with(warehouse));

        let use_case = UpdateWarehouseUseCase::new(repo);
        let response = use_case
            .execute(
                id,
                UpdateWarehouseCommand {
                    name: None,
                    address: None,
                    is_active: Some(false),
                },
            )
            .await
            .unwrap();

        assert!(!response.is_active);
    }

    #[tokio::test]
    async fn test_unknown_warehouse() {
        let warehouse = Warehouse::create("WH-01", "North", None).unwrap();
        let repo = Arc::new(MockWarehouseRepository::with(warehouse));

        let use_case = UpdateWarehouseUseCase::new(repo);
        let result = use_case
            .execute(
                Uuid::nil(),
                UpdateWarehouseCommand {
                    name: Some("renamed".to_string()),
                    address: None,
                    is_active: None,
                },
            )
            .await;

        assert!(matches!(result, Err(WarehouseError::WarehouseNotFound(_))));
    }
}
