// UpdateOrderStatusUseCase - workflow transitions with warehouse side effects

use std::str::FromStr;
use std::sync::Arc;

use tracing::error;
use uuid::Uuid;

use crate::OrderError;
use crate::application::dtos::commands::UpdateOrderStatusCommand;
use crate::application::dtos::responses::OrderResponse;
use crate::domain::repositories::{OrderRepository, OrderReservationRepository};
use crate::domain::services::{ReservationLine, WarehouseGateway};
use crate::domain::value_objects::{OrderId, OrderStatus};

/// Use case for explicit status changes.
///
/// pending -> paid commits the reservations, pending -> cancelled releases
/// them, paid -> completed is a plain update. In both reservation-ending
/// transitions the database write happens first; warehouse failures are
/// logged and reconciled later rather than unwinding the order.
pub struct UpdateOrderStatusUseCase<R, V, G>
where
    R: OrderRepository,
    V: OrderReservationRepository,
    G: WarehouseGateway,
{
    order_repo: Arc<R>,
    reservation_repo: Arc<V>,
    gateway: Arc<G>,
}

impl<R, V, G> UpdateOrderStatusUseCase<R, V, G>
where
    R: OrderRepository,
    V: OrderReservationRepository,
    G: WarehouseGateway,
{
    pub fn new(order_repo: Arc<R>, reservation_repo: Arc<V>, gateway: Arc<G>) -> Self {
        Self {
            order_repo,
            reservation_repo,
            gateway,
        }
    }

    /// # Errors
    /// * `OrderError::OrderNotFound`
    /// * `OrderError::InvalidOrderStatusValue` - unknown target status
    /// * `OrderError::InvalidOrderStatus` - transition outside the workflow
    pub async fn execute(
        &self,
        order_id: Uuid,
        command: UpdateOrderStatusCommand,
    ) -> Result<OrderResponse, OrderError> {
        let target = OrderStatus::from_str(&command.status)?;
        if target == OrderStatus::Pending {
            return Err(OrderError::InvalidOrderStatus);
        }

        let id = OrderId::from_uuid(order_id);
        let mut order = self
            .order_repo
            .find_by_id(id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        match target {
            OrderStatus::Completed => {
                order.complete()?;
                self.order_repo.update_status(&order).await?;
            }
            OrderStatus::Paid | OrderStatus::Cancelled => {
                let reservations = self.reservation_repo.find_active_by_order(id).await?;

                order.transition_to(target)?;
                self.order_repo
                    .update_status_deactivating_reservations(&order)
                    .await?;

                for reservation in &reservations {
                    let line = ReservationLine {
                        order_id,
                        warehouse_id: reservation.warehouse_id(),
                        product_id: reservation.product_id(),
                        quantity: reservation.quantity(),
                        reference: reservation.reference().to_string(),
                    };
                    let result = match target {
                        OrderStatus::Paid => self.gateway.commit(&line).await,
                        _ => self.gateway.release(&line).await,
                    };
                    if let Err(e) = result {
                        error!(
                            order_id = %order_id,
                            reference = %reservation.reference(),
                            target = %target,
                            error = %e,
                            "Warehouse side effect failed after status change; left for reconciliation"
                        );
                    }
                }
            }
            OrderStatus::Pending => unreachable!("rejected above"),
        }

        Ok(order.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::domain::entities::{Order, OrderLine, OrderReservation};
    use crate::domain::value_objects::OrderReservationId;

    struct MockOrderRepository {
        orders: Mutex<HashMap<OrderId, Order>>,
    }

    impl MockOrderRepository {
        fn with(order: Order) -> Self {
            let mut map = HashMap::new();
            map.insert(order.id(), order);
            Self {
                orders: Mutex::new(map),
            }
        }
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepository {
        async fn save_with_reservations(
            &self,
            _order: &Order,
            _reservations: &[OrderReservation],
        ) -> Result<(), OrderError> {
            unimplemented!()
        }

        async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
            let orders = self.orders.lock().unwrap();
            Ok(orders.get(&id).cloned())
        }

        async fn update_status(&self, order: &Order) -> Result<(), OrderError> {
            let mut orders = self.orders.lock().unwrap();
            orders.insert(order.id(), order.clone());
            Ok(())
        }

        async fn update_status_deactivating_reservations(
            &self,
            order: &Order,
        ) -> Result<(), OrderError> {
            let mut orders = self.orders.lock().unwrap();
            orders.insert(order.id(), order.clone());
            Ok(())
        }

        async fn find_expired_pending(
            &self,
            _now: DateTime<Utc>,
        ) -> Result<Vec<Order>, OrderError> {
            unimplemented!()
        }
    }

    struct MockReservationRepository {
        reservations: Mutex<Vec<OrderReservation>>,
    }

    #[async_trait]
    impl OrderReservationRepository for MockReservationRepository {
        async fn find_active_by_order(
            &self,
            order_id: OrderId,
        ) -> Result<Vec<OrderReservation>, OrderError> {
            let reservations = self.reservations.lock().unwrap();
            Ok(reservations
                .iter()
                .filter(|r| r.order_id() == order_id && r.is_active())
                .cloned()
                .collect())
        }

        async fn find_expired_active(
            &self,
            _now: DateTime<Utc>,
        ) -> Result<Vec<OrderReservation>, OrderError> {
            unimplemented!()
        }

        async fn deactivate(&self, _id: OrderReservationId) -> Result<(), OrderError> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct MockWarehouseGateway {
        committed: Mutex<Vec<String>>,
        released: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl WarehouseGateway for MockWarehouseGateway {
        async fn reserve(
            &self,
            _order_id: Uuid,
            _warehouse_id: Uuid,
            _product_id: Uuid,
            _quantity: i32,
            _reserve_until: DateTime<Utc>,
        ) -> Result<String, OrderError> {
            unimplemented!()
        }

        async fn commit(&self, line: &ReservationLine) -> Result<(), OrderError> {
            self.committed.lock().unwrap().push(line.reference.clone());
            Ok(())
        }

        async fn release(&self, line: &ReservationLine) -> Result<(), OrderError> {
            self.released.lock().unwrap().push(line.reference.clone());
            Ok(())
        }
    }

    fn setup(
        status: &str,
    ) -> (
        Arc<MockOrderRepository>,
        Arc<MockReservationRepository>,
        Arc<MockWarehouseGateway>,
        Uuid,
    ) {
        let mut order = Order::create(
            Uuid::new_v4(),
            vec![OrderLine {
                product_id: Uuid::new_v4(),
                warehouse_id: Uuid::new_v4(),
                quantity: 2,
                unit_price: dec!(3.00),
            }],
        )
        .unwrap();
        if status == "paid" {
            order.mark_paid().unwrap();
        }
        let item = &order.items()[0];
        let reservation = OrderReservation::create(
            order.id(),
            item.product_id(),
            item.warehouse_id(),
            item.quantity(),
            "RSV-1",
            Utc::now() + Duration::hours(24),
        );
        let order_id = order.id().into_uuid();
        (
            Arc::new(MockOrderRepository::with(order)),
            Arc::new(MockReservationRepository {
                reservations: Mutex::new(vec![reservation]),
            }),
            Arc::new(MockWarehouseGateway::default()),
            order_id,
        )
    }

    #[tokio::test]
    async fn test_cancel_releases_reservations() {
        let (order_repo, reservation_repo, gateway, order_id) = setup("pending");
        let use_case = UpdateOrderStatusUseCase::new(order_repo, reservation_repo, gateway.clone());

        let response = use_case
            .execute(
                order_id,
                UpdateOrderStatusCommand {
                    status: "cancelled".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.status, "cancelled");
        assert_eq!(gateway.released.lock().unwrap().as_slice(), ["RSV-1"]);
        assert!(gateway.committed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_paid_commits_reservations() {
        let (order_repo, reservation_repo, gateway, order_id) = setup("pending");
        let use_case = UpdateOrderStatusUseCase::new(order_repo, reservation_repo, gateway.clone());

        let response = use_case
            .execute(
                order_id,
                UpdateOrderStatusCommand {
                    status: "paid".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.status, "paid");
        assert_eq!(gateway.committed.lock().unwrap().as_slice(), ["RSV-1"]);
    }

    #[tokio::test]
    async fn test_complete_requires_paid() {
        let (order_repo, reservation_repo, gateway, order_id) = setup("paid");
        let use_case = UpdateOrderStatusUseCase::new(order_repo, reservation_repo, gateway.clone());

        let response = use_case
            .execute(
                order_id,
                UpdateOrderStatusCommand {
                    status: "completed".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.status, "completed");
        // Completion is DB-only.
        assert!(gateway.committed.lock().unwrap().is_empty());
        assert!(gateway.released.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_unknown_and_illegal_targets() {
        let (order_repo, reservation_repo, gateway, order_id) = setup("pending");
        let use_case = UpdateOrderStatusUseCase::new(order_repo, reservation_repo, gateway);

        let result = use_case
            .execute(
                order_id,
                UpdateOrderStatusCommand {
                    status: "shipped".to_string(),
                },
            )
            .await;
        assert!(matches!(result, Err(OrderError::InvalidOrderStatusValue)));

        let result = use_case
            .execute(
                order_id,
                UpdateOrderStatusCommand {
                    status: "completed".to_string(),
                },
            )
            .await;
        assert!(matches!(result, Err(OrderError::InvalidOrderStatus)));
    }
}
