// CreateOrderUseCase - reserves stock line by line, then persists the order

use std::sync::Arc;

use tracing::warn;

use crate::OrderError;
use crate::application::dtos::commands::CreateOrderCommand;
use crate::application::dtos::responses::OrderResponse;
use crate::domain::entities::{Order, OrderLine, OrderReservation};
use crate::domain::repositories::OrderRepository;
use crate::domain::services::{ReservationLine, WarehouseGateway};

/// Use case for creating an order.
///
/// Stock is reserved before any order row is written, so a failed order
/// never exists half-stocked. If any line cannot be reserved, or the insert
/// itself fails, every reservation already taken is released again; a
/// failing release is logged and left to the expiry sweep.
pub struct CreateOrderUseCase<R, G>
where
    R: OrderRepository,
    G: WarehouseGateway,
{
    order_repo: Arc<R>,
    gateway: Arc<G>,
}

impl<R, G> CreateOrderUseCase<R, G>
where
    R: OrderRepository,
    G: WarehouseGateway,
{
    pub fn new(order_repo: Arc<R>, gateway: Arc<G>) -> Self {
        Self {
            order_repo,
            gateway,
        }
    }

    /// # Errors
    /// * `OrderError::EmptyOrder` / `InvalidQuantity` / `InvalidPrice`
    /// * `OrderError::InsufficientStock` - some line could not be reserved
    pub async fn execute(&self, command: CreateOrderCommand) -> Result<OrderResponse, OrderError> {
        let lines = command
            .items
            .into_iter()
            .map(|item| OrderLine {
                product_id: item.product_id,
                warehouse_id: item.warehouse_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect();
        let order = Order::create(command.user_id, lines)?;

        let mut reservations: Vec<OrderReservation> = Vec::with_capacity(order.items().len());
        for item in order.items() {
            let reserved = self
                .gateway
                .reserve(
                    order.id().into_uuid(),
                    item.warehouse_id(),
                    item.product_id(),
                    item.quantity(),
                    order.payment_deadline(),
                )
                .await;
            match reserved {
                Ok(reference) => reservations.push(OrderReservation::create(
                    order.id(),
                    item.product_id(),
                    item.warehouse_id(),
                    item.quantity(),
                    reference,
                    order.payment_deadline(),
                )),
                Err(e) => {
                    self.release_all(&reservations).await;
                    return Err(e);
                }
            }
        }

        if let Err(e) = self
            .order_repo
            .save_with_reservations(&order, &reservations)
            .await
        {
            self.release_all(&reservations).await;
            return Err(e);
        }

        Ok(order.into())
    }

    /// Rolls back every reservation taken so far, best effort.
    async fn release_all(&self, reservations: &[OrderReservation]) {
        for reservation in reservations {
            let line = ReservationLine {
                order_id: reservation.order_id().into_uuid(),
                warehouse_id: reservation.warehouse_id(),
                product_id: reservation.product_id(),
                quantity: reservation.quantity(),
                reference: reservation.reference().to_string(),
            };
            if let Err(e) = self.gateway.release(&line).await {
                warn!(
                    reference = %reservation.reference(),
                    error = %e,
                    "Failed to release reservation while rolling back order creation"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::application::dtos::commands::CreateOrderItemCommand;
    use crate::domain::value_objects::OrderId;

    struct MockOrderRepository {
        orders: Mutex<Vec<(Order, Vec<OrderReservation>)>>,
        fail_saves: bool,
    }

    impl MockOrderRepository {
        fn new() -> Self {
            Self {
                orders: Mutex::new(Vec::new()),
                fail_saves: false,
            }
        }

        fn failing() -> Self {
            Self {
                orders: Mutex::new(Vec::new()),
                fail_saves: true,
            }
        }

        fn saved_count(&self) -> usize {
            self.orders.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepository {
        async fn save_with_reservations(
            &self,
            order: &Order,
            reservations: &[OrderReservation],
        ) -> Result<(), OrderError> {
            if self.fail_saves {
                return Err(OrderError::Database(sqlx::Error::PoolClosed));
            }
            let mut orders = self.orders.lock().unwrap();
            orders.push((order.clone(), reservations.to_vec()));
            Ok(())
        }

        async fn find_by_id(&self, _id: OrderId) -> Result<Option<Order>, OrderError> {
            unimplemented!()
        }

        async fn update_status(&self, _order: &Order) -> Result<(), OrderError> {
            unimplemented!()
        }

        async fn update_status_deactivating_reservations(
            &self,
            _order: &Order,
        ) -> Result<(), OrderError> {
            unimplemented!()
        }

        async fn find_expired_pending(
            &self,
            _now: DateTime<Utc>,
        ) -> Result<Vec<Order>, OrderError> {
            unimplemented!()
        }
    }

    // Gateway mock with ledger counters per (warehouse, product) so rollback
    // behavior is observable.
    struct MockWarehouseGateway {
        rows: Mutex<HashMap<(Uuid, Uuid), (i32, i32)>>,
    }

    impl MockWarehouseGateway {
        fn with(rows: Vec<((Uuid, Uuid), (i32, i32))>) -> Self {
            Self {
                rows: Mutex::new(rows.into_iter().collect()),
            }
        }

        fn row(&self, warehouse_id: Uuid, product_id: Uuid) -> (i32, i32) {
            self.rows.lock().unwrap()[&(warehouse_id, product_id)]
        }
    }

    #[async_trait]
    impl WarehouseGateway for MockWarehouseGateway {
        async fn reserve(
            &self,
            _order_id: Uuid,
            warehouse_id: Uuid,
            product_id: Uuid,
            quantity: i32,
            _reserve_until: DateTime<Utc>,
        ) -> Result<String, OrderError> {
            let mut rows = self.rows.lock().unwrap();
            let (total, reserved) = rows
                .get_mut(&(warehouse_id, product_id))
                .ok_or(OrderError::InsufficientStock)?;
            if *total - *reserved < quantity {
                return Err(OrderError::InsufficientStock);
            }
            *reserved += quantity;
            Ok(format!("RSV-{warehouse_id}-{product_id}"))
        }

        async fn commit(&self, _line: &ReservationLine) -> Result<(), OrderError> {
            unimplemented!()
        }

        async fn release(&self, line: &ReservationLine) -> Result<(), OrderError> {
            let mut rows = self.rows.lock().unwrap();
            let (_, reserved) = rows
                .get_mut(&(line.warehouse_id, line.product_id))
                .ok_or(OrderError::InsufficientStock)?;
            *reserved -= line.quantity;
            Ok(())
        }
    }

    fn line(product_id: Uuid, warehouse_id: Uuid, quantity: i32) -> CreateOrderItemCommand {
        CreateOrderItemCommand {
            product_id,
            warehouse_id,
            quantity,
            unit_price: dec!(3.00),
        }
    }

    #[tokio::test]
    async fn test_create_order_reserves_and_persists() {
        let warehouse_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let gateway = Arc::new(MockWarehouseGateway::with(vec![(
            (warehouse_id, product_id),
            (5, 0),
        )]));
        let repo = Arc::new(MockOrderRepository::new());
        let use_case = CreateOrderUseCase::new(repo.clone(), gateway.clone());

        let response = use_case
            .execute(CreateOrderCommand {
                user_id: Uuid::new_v4(),
                items: vec![line(product_id, warehouse_id, 2)],
            })
            .await
            .unwrap();

        assert_eq!(response.status, "pending");
        assert_eq!(response.total_amount, dec!(6.00));
        assert_eq!(repo.saved_count(), 1);
        assert_eq!(gateway.row(warehouse_id, product_id), (5, 2));
    }

    #[tokio::test]
    async fn test_partial_failure_releases_reserved_lines() {
        let warehouse_id = Uuid::new_v4();
        let in_stock = Uuid::new_v4();
        let sold_out = Uuid::new_v4();
        let gateway = Arc::new(MockWarehouseGateway::with(vec![
            ((warehouse_id, in_stock), (5, 0)),
            ((warehouse_id, sold_out), (1, 1)),
        ]));
        let repo = Arc::new(MockOrderRepository::new());
        let use_case = CreateOrderUseCase::new(repo.clone(), gateway.clone());

        let result = use_case
            .execute(CreateOrderCommand {
                user_id: Uuid::new_v4(),
                items: vec![
                    line(in_stock, warehouse_id, 2),
                    line(sold_out, warehouse_id, 1),
                ],
            })
            .await;

        assert!(matches!(result, Err(OrderError::InsufficientStock)));
        assert_eq!(repo.saved_count(), 0);
        // Line one's hold was rolled back.
        assert_eq!(gateway.row(warehouse_id, in_stock), (5, 0));
    }

    #[tokio::test]
    async fn test_db_failure_releases_reservations() {
        let warehouse_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let gateway = Arc::new(MockWarehouseGateway::with(vec![(
            (warehouse_id, product_id),
            (5, 0),
        )]));
        let repo = Arc::new(MockOrderRepository::failing());
        let use_case = CreateOrderUseCase::new(repo, gateway.clone());

        let result = use_case
            .execute(CreateOrderCommand {
                user_id: Uuid::new_v4(),
                items: vec![line(product_id, warehouse_id, 2)],
            })
            .await;

        assert!(matches!(result, Err(OrderError::Database(_))));
        assert_eq!(gateway.row(warehouse_id, product_id), (5, 0));
    }

    #[tokio::test]
    async fn test_empty_order_never_reaches_the_warehouse() {
        let gateway = Arc::new(MockWarehouseGateway::with(Vec::new()));
        let repo = Arc::new(MockOrderRepository::new());
        let use_case = CreateOrderUseCase::new(repo, gateway);

        let result = use_case
            .execute(CreateOrderCommand {
                user_id: Uuid::new_v4(),
                items: Vec::new(),
            })
            .await;

        assert!(matches!(result, Err(OrderError::EmptyOrder)));
    }
}
