// CancelReservationUseCase - returns held stock to availability

use std::sync::Arc;

use crate::WarehouseError;
use crate::application::dtos::commands::CancelReservationCommand;
use crate::application::dtos::responses::StockResponse;
use crate::domain::repositories::ReservationEngine;
use crate::domain::value_objects::{ProductId, ReservationReference, WarehouseId};

/// Use case for cancelling a reservation. Physical stock is untouched; only
/// `reserved_quantity` shrinks. The reserved-quantity guard keeps a
/// double-cancel from racing a commit.
pub struct CancelReservationUseCase<E>
where
    E: ReservationEngine,
{
    engine: Arc<E>,
}

impl<E> CancelReservationUseCase<E>
where
    E: ReservationEngine,
{
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// # Errors
    /// * `WarehouseError::InvalidQuantity` - non-positive quantity
    /// * `WarehouseError::CannotCancelMoreThanReserved`
    /// * `WarehouseError::ReservationAlreadyFinalized`
    pub async fn execute(
        &self,
        command: CancelReservationCommand,
    ) -> Result<StockResponse, WarehouseError> {
        if command.quantity <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }

        let stock = self
            .engine
            .cancel(
                WarehouseId::from_uuid(command.warehouse_id),
                ProductId::from_uuid(command.product_id),
                command.quantity,
                &ReservationReference::from_string(command.reference),
            )
            .await?;

        Ok(stock.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::domain::entities::WarehouseStock;
    use crate::domain::repositories::ReservationGrant;

    struct MockReservationEngine {
        rows: Mutex<HashMap<(WarehouseId, ProductId), WarehouseStock>>,
        finalized: Mutex<Vec<String>>,
    }

    impl MockReservationEngine {
        fn with(stock: WarehouseStock) -> Self {
            let mut map = HashMap::new();
            map.insert((stock.warehouse_id(), stock.product_id()), stock);
            Self {
                rows: Mutex::new(map),
                finalized: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ReservationEngine for MockReservationEngine {
        async fn reserve(
            &self,
            warehouse_id: WarehouseId,
            product_id: ProductId,
            quantity: i32,
        ) -> Result<ReservationGrant, WarehouseError> {
            let mut rows = self.rows.lock().unwrap();
            let stock = rows.get_mut(&(warehouse_id, product_id)).unwrap();
            stock.reserve(quantity)?;
            Ok(ReservationGrant {
                reference: ReservationReference::generate(warehouse_id, product_id),
                stock: stock.clone(),
            })
        }

        async fn commit(
            &self,
            _warehouse_id: WarehouseId,
            _product_id: ProductId,
            _quantity: i32,
            _reference: &ReservationReference,
        ) -> Result<WarehouseStock, WarehouseError> {
            unimplemented!()
        }

        async fn cancel(
            &self,
            warehouse_id: WarehouseId,
            product_id: ProductId,
            quantity: i32,
            reference: &ReservationReference,
        ) -> Result<WarehouseStock, WarehouseError> {
            let mut finalized = self.finalized.lock().unwrap();
            if finalized.iter().any(|r| r == reference.as_str()) {
                return Err(WarehouseError::ReservationAlreadyFinalized(
                    reference.to_string(),
                ));
            }
            let mut rows = self.rows.lock().unwrap();
            let stock = rows.get_mut(&(warehouse_id, product_id)).ok_or(
                WarehouseError::StockNotFound {
                    warehouse_id: warehouse_id.into_uuid(),
                    product_id: product_id.into_uuid(),
                },
            )?;
            stock.release(quantity)?;
            finalized.push(reference.to_string());
            Ok(stock.clone())
        }
    }

    async fn reserved_setup(
        quantity: i32,
        reserved: i32,
    ) -> (Arc<MockReservationEngine>, CancelReservationCommand) {
        let warehouse_id = WarehouseId::new();
        let product_id = ProductId::new();
        let stock = WarehouseStock::create(warehouse_id, product_id, "SKU-001", quantity).unwrap();
        let engine = Arc::new(MockReservationEngine::with(stock));
        let grant = engine
            .reserve(warehouse_id, product_id, reserved)
            .await
            .unwrap();
        let command = CancelReservationCommand {
            warehouse_id: warehouse_id.into_uuid(),
            product_id: product_id.into_uuid(),
            quantity: reserved,
            reference: grant.reference.into_string(),
        };
        (engine, command)
    }

    #[tokio::test]
    async fn test_cancel_restores_pre_reserve_state() {
        let (engine, command) = reserved_setup(5, 2).await;
        let use_case = CancelReservationUseCase::new(engine);

        let response = use_case.execute(command).await.unwrap();

        assert_eq!(response.quantity, 5);
        assert_eq!(response.reserved_quantity, 0);
        assert_eq!(response.available, 5);
    }

    #[tokio::test]
    async fn test_cancel_more_than_reserved() {
        let (engine, mut command) = reserved_setup(5, 2).await;
        command.quantity = 4;
        let use_case = CancelReservationUseCase::new(engine);

        let result = use_case.execute(command).await;
        assert!(matches!(
            result,
            Err(WarehouseError::CannotCancelMoreThanReserved)
        ));
    }

    #[tokio::test]
    async fn test_double_cancel_is_refused() {
        let (engine, command) = reserved_setup(5, 2).await;
        let use_case = CancelReservationUseCase::new(engine);

        use_case.execute(command.clone()).await.unwrap();
        let result = use_case.execute(command).await;

        assert!(matches!(
            result,
            Err(WarehouseError::ReservationAlreadyFinalized(_))
        ));
    }
}
