// TransferStockUseCase - moves quantity between two warehouses

use std::sync::Arc;

use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::WarehouseError;
use crate::application::dtos::commands::TransferStockCommand;
use crate::application::dtos::responses::TransferResponse;
use crate::domain::repositories::{TransferCoordinator, WarehouseRepository};
use crate::domain::value_objects::{ProductId, WarehouseId};

/// Use case for inter-warehouse transfers. Both warehouses must be active
/// and distinct; the coordinator owns the locking and the journal entries.
pub struct TransferStockUseCase<W, T>
where
    W: WarehouseRepository,
    T: TransferCoordinator,
{
    warehouse_repo: Arc<W>,
    coordinator: Arc<T>,
}

impl<W, T> TransferStockUseCase<W, T>
where
    W: WarehouseRepository,
    T: TransferCoordinator,
{
    pub fn new(warehouse_repo: Arc<W>, coordinator: Arc<T>) -> Self {
        Self {
            warehouse_repo,
            coordinator,
        }
    }

    /// # Errors
    /// * `WarehouseError::InvalidQuantity` / `SameWarehouseTransfer`
    /// * `WarehouseError::WarehouseNotFound` / `WarehouseInactive`
    /// * `WarehouseError::InsufficientStock` - `source.available < quantity`;
    ///   the transfer record is persisted as `failed`
    pub async fn execute(
        &self,
        command: TransferStockCommand,
    ) -> Result<TransferResponse, WarehouseError> {
        if command.quantity <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        if command.source_warehouse_id == command.target_warehouse_id {
            return Err(WarehouseError::SameWarehouseTransfer);
        }

        for id in [command.source_warehouse_id, command.target_warehouse_id] {
            let warehouse = self
                .warehouse_repo
                .find_by_id(WarehouseId::from_uuid(id))
                .await?
                .ok_or(WarehouseError::WarehouseNotFound(id))?;
            if !warehouse.is_active() {
                return Err(WarehouseError::WarehouseInactive(id));
            }
        }

        let reference = command
            .reference
            .unwrap_or_else(generate_transfer_reference);

        let transfer = self
            .coordinator
            .transfer(
                WarehouseId::from_uuid(command.source_warehouse_id),
                WarehouseId::from_uuid(command.target_warehouse_id),
                ProductId::from_uuid(command.product_id),
                &command.product_sku,
                command.quantity,
                reference,
            )
            .await?;

        Ok(transfer.into())
    }
}

fn generate_transfer_reference() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("TRF-{}-{}", chrono::Utc::now().timestamp(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::domain::entities::{StockTransfer, Warehouse, WarehouseStock};
    use crate::domain::value_objects::TransferStatus;

    struct MockWarehouseRepository {
        warehouses: Mutex<HashMap<WarehouseId, Warehouse>>,
    }

    impl MockWarehouseRepository {
        fn with(warehouses: Vec<Warehouse>) -> Self {
            let map = warehouses.into_iter().map(|w| (w.id(), w)).collect();
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

        async fn update(&self, _warehouse: &Warehouse) -> Result<(), WarehouseError> {
            unimplemented!()
        }

        async fn find_paginated(
            &self,
            _page: i64,
            _page_size: i64,
        ) -> Result<(Vec<Warehouse>, i64), WarehouseError> {
            unimplemented!()
        }
    }

    // Coordinator mock with the ledger semantics of the real adapter: the
    // source must cover the quantity from `available`, reserved stock stays,
    // and a shortfall leaves a failed transfer record behind.
    struct MockTransferCoordinator {
        rows: Mutex<HashMap<(WarehouseId, ProductId), WarehouseStock>>,
        transfers: Mutex<Vec<StockTransfer>>,
    }

    impl MockTransferCoordinator {
        fn with(rows: Vec<WarehouseStock>) -> Self {
            let map = rows
                .into_iter()
                .map(|s| ((s.warehouse_id(), s.product_id()), s))
                .collect();
            Self {
                rows: Mutex::new(map),
                transfers: Mutex::new(Vec::new()),
            }
        }

        fn row(&self, warehouse_id: WarehouseId, product_id: ProductId) -> Option<WarehouseStock> {
            self.rows
                .lock()
                .unwrap()
                .get(&(warehouse_id, product_id))
                .cloned()
        }

        fn recorded(&self) -> Vec<StockTransfer> {
            self.transfers.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TransferCoordinator for MockTransferCoordinator {
        async fn transfer(
            &self,
            source_warehouse_id: WarehouseId,
            target_warehouse_id: WarehouseId,
            product_id: ProductId,
            product_sku: &str,
            quantity: i32,
            transfer_reference: String,
        ) -> Result<StockTransfer, WarehouseError> {
            let mut transfer = StockTransfer::create(
                source_warehouse_id,
                target_warehouse_id,
                product_id,
                product_sku,
                quantity,
                transfer_reference,
            )?;
            let mut rows = self.rows.lock().unwrap();

            let source = rows.get_mut(&(source_warehouse_id, product_id));
            let withdrawn = match source {
                Some(source) => source.withdraw(quantity),
                None => Err(WarehouseError::StockNotFound {
                    warehouse_id: source_warehouse_id.into_uuid(),
                    product_id: product_id.into_uuid(),
                }),
            };
            if let Err(e) = withdrawn {
                transfer.fail()?;
                self.transfers.lock().unwrap().push(transfer);
                return Err(e);
            }

            match rows.get_mut(&(target_warehouse_id, product_id)) {
                Some(target) => target.deposit(quantity)?,
                None => {
                    let target = WarehouseStock::create(
                        target_warehouse_id,
                        product_id,
                        product_sku,
                        quantity,
                    )?;
                    rows.insert((target_warehouse_id, product_id), target);
                }
            }

            transfer.complete()?;
            self.transfers.lock().unwrap().push(transfer.clone());
            Ok(transfer)
        }
    }

    fn setup(
        source_quantity: i32,
        source_reserved: i32,
    ) -> (
        Arc<MockWarehouseRepository>,
        Arc<MockTransferCoordinator>,
        WarehouseId,
        WarehouseId,
        ProductId,
    ) {
        let source = Warehouse::create("WH-SRC", "Source", None).unwrap();
        let target = Warehouse::create("WH-DST", "Target", None).unwrap();
        let product_id = ProductId::new();
        let mut stock =
            WarehouseStock::create(source.id(), product_id, "SKU-001", source_quantity).unwrap();
        if source_reserved > 0 {
            stock.reserve(source_reserved).unwrap();
        }
        let source_id = source.id();
        let target_id = target.id();
        (
            Arc::new(MockWarehouseRepository::with(vec![source, target])),
            Arc::new(MockTransferCoordinator::with(vec![stock])),
            source_id,
            target_id,
            product_id,
        )
    }

    #[tokio::test]
    async fn test_transfer_conserves_total_quantity() {
        let (warehouse_repo, coordinator, source_id, target_id, product_id) = setup(10, 3);
        let use_case = TransferStockUseCase::new(warehouse_repo, coordinator.clone());

        let response = use_case
            .execute(TransferStockCommand {
                source_warehouse_id: source_id.into_uuid(),
                target_warehouse_id: target_id.into_uuid(),
                product_id: product_id.into_uuid(),
                product_sku: "SKU-001".to_string(),
                quantity: 4,
                reference: Some("TRF-TEST".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(response.status, "completed");
        assert_eq!(response.transfer_reference, "TRF-TEST");

        let source = coordinator.row(source_id, product_id).unwrap();
        let target = coordinator.row(target_id, product_id).unwrap();
        assert_eq!(source.quantity(), 6);
        assert_eq!(source.reserved_quantity(), 3);
        assert_eq!(source.available(), 3);
        assert_eq!(target.quantity(), 4);
        assert_eq!(target.reserved_quantity(), 0);
        assert_eq!(source.quantity() + target.quantity(), 10);
    }

    #[tokio::test]
    async fn test_insufficient_source_records_failed_transfer() {
        let (warehouse_repo, coordinator, source_id, target_id, product_id) = setup(5, 4);
        let use_case = TransferStockUseCase::new(warehouse_repo, coordinator.clone());

        let result = use_case
            .execute(TransferStockCommand {
                source_warehouse_id: source_id.into_uuid(),
                target_warehouse_id: target_id.into_uuid(),
                product_id: product_id.into_uuid(),
                product_sku: "SKU-001".to_string(),
                quantity: 2,
                reference: None,
            })
            .await;

        assert!(matches!(result, Err(WarehouseError::InsufficientStock)));

        // Ledger rows untouched, transfer record left in failed state.
        let source = coordinator.row(source_id, product_id).unwrap();
        assert_eq!(source.quantity(), 5);
        assert_eq!(source.reserved_quantity(), 4);
        assert!(coordinator.row(target_id, product_id).is_none());

        let recorded = coordinator.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].status(), TransferStatus::Failed);
    }

    #[tokio::test]
    async fn test_same_warehouse_rejected() {
        let (warehouse_repo, coordinator, source_id, _, product_id) = setup(5, 0);
        let use_case = TransferStockUseCase::new(warehouse_repo, coordinator);

        let result = use_case
            .execute(TransferStockCommand {
                source_warehouse_id: source_id.into_uuid(),
                target_warehouse_id: source_id.into_uuid(),
                product_id: product_id.into_uuid(),
                product_sku: "SKU-001".to_string(),
                quantity: 1,
                reference: None,
            })
            .await;

        assert!(matches!(result, Err(WarehouseError::SameWarehouseTransfer)));
    }

    #[tokio::test]
    async fn test_generated_reference_when_absent() {
        let (warehouse_repo, coordinator, source_id, target_id, product_id) = setup(10, 0);
        let use_case = TransferStockUseCase::new(warehouse_repo, coordinator);

        let response = use_case
            .execute(TransferStockCommand {
                source_warehouse_id: source_id.into_uuid(),
                target_warehouse_id: target_id.into_uuid(),
                product_id: product_id.into_uuid(),
                product_sku: "SKU-001".to_string(),
                quantity: 1,
                reference: None,
            })
            .await
            .unwrap();

        assert!(response.transfer_reference.starts_with("TRF-"));
    }
}
