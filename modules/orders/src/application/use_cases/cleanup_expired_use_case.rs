// CleanupExpiredUseCase - the expiry sweep over orders and reservations

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::OrderError;
use crate::application::dtos::responses::CleanupResult;
use crate::domain::entities::OrderReservation;
use crate::domain::repositories::{OrderRepository, OrderReservationRepository};
use crate::domain::services::{ReservationLine, WarehouseGateway};

/// Use case for the periodic expiry sweep.
///
/// Pass one cancels pending orders past their payment deadline and releases
/// their reservations. Pass two catches live reservations past expiry whose
/// parent order was not handled in pass one. Re-entrant and idempotent: an
/// already-inactive reservation is skipped, and a warehouse-side "already
/// finalized" rejection is logged at warning level and swallowed. A failure
/// on one order never stops the sweep.
pub struct CleanupExpiredUseCase<R, V, G>
where
    R: OrderRepository,
    V: OrderReservationRepository,
    G: WarehouseGateway,
{
    order_repo: Arc<R>,
    reservation_repo: Arc<V>,
    gateway: Arc<G>,
}

impl<R, V, G> CleanupExpiredUseCase<R, V, G>
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

    pub async fn execute(&self) -> Result<CleanupResult, OrderError> {
        let now = Utc::now();
        let mut result = CleanupResult {
            cancelled_orders: 0,
            released_reservations: 0,
            failed_releases: 0,
            cleaned_at: now,
        };
        let mut handled_orders: HashSet<Uuid> = HashSet::new();

        // Pass one: expired pending orders.
        for mut order in self.order_repo.find_expired_pending(now).await? {
            let order_id = order.id();
            let reservations = match self.reservation_repo.find_active_by_order(order_id).await {
                Ok(reservations) => reservations,
                Err(e) => {
                    warn!(order_id = %order_id, error = %e, "Skipping expired order this sweep");
                    continue;
                }
            };

            if let Err(e) = order.cancel() {
                // Another worker got here first; nothing to undo.
                warn!(order_id = %order_id, error = %e, "Expired order no longer pending");
                continue;
            }
            if let Err(e) = self
                .order_repo
                .update_status_deactivating_reservations(&order)
                .await
            {
                warn!(order_id = %order_id, error = %e, "Failed to cancel expired order");
                continue;
            }

            handled_orders.insert(order_id.into_uuid());
            result.cancelled_orders += 1;

            for reservation in &reservations {
                self.release(reservation, &mut result).await;
            }
        }

        // Pass two: orphaned live reservations past expiry.
        for reservation in self.reservation_repo.find_expired_active(now).await? {
            if handled_orders.contains(&reservation.order_id().into_uuid()) {
                continue;
            }
            if let Err(e) = self.reservation_repo.deactivate(reservation.id()).await {
                warn!(
                    reference = %reservation.reference(),
                    error = %e,
                    "Failed to deactivate expired reservation"
                );
                continue;
            }
            self.release(&reservation, &mut result).await;
        }

        info!(
            cancelled_orders = result.cancelled_orders,
            released_reservations = result.released_reservations,
            failed_releases = result.failed_releases,
            "Completed expiry sweep"
        );

        Ok(result)
    }

    async fn release(&self, reservation: &OrderReservation, result: &mut CleanupResult) {
        let line = ReservationLine {
            order_id: reservation.order_id().into_uuid(),
            warehouse_id: reservation.warehouse_id(),
            product_id: reservation.product_id(),
            quantity: reservation.quantity(),
            reference: reservation.reference().to_string(),
        };
        match self.gateway.release(&line).await {
            Ok(()) => result.released_reservations += 1,
            Err(OrderError::ReservationRejected(message)) => {
                // Warehouse side already terminal; local state is what counts.
                warn!(reference = %line.reference, message, "Release rejected by warehouse");
            }
            Err(e) => {
                warn!(reference = %line.reference, error = %e, "Release failed; next sweep retries");
                result.failed_releases += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::domain::entities::{Order, OrderLine};
    use crate::domain::value_objects::{OrderId, OrderReservationId, OrderStatus};

    struct MockOrderRepository {
        orders: Mutex<HashMap<OrderId, Order>>,
    }

    impl MockOrderRepository {
        fn with(orders: Vec<Order>) -> Self {
            Self {
                orders: Mutex::new(orders.into_iter().map(|o| (o.id(), o)).collect()),
            }
        }

        fn status_of(&self, id: OrderId) -> OrderStatus {
            self.orders.lock().unwrap()[&id].status()
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

        async fn find_by_id(&self, _id: OrderId) -> Result<Option<Order>, OrderError> {
            unimplemented!()
        }

        async fn update_status(&self, _order: &Order) -> Result<(), OrderError> {
            unimplemented!()
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
            now: DateTime<Utc>,
        ) -> Result<Vec<Order>, OrderError> {
            let orders = self.orders.lock().unwrap();
            Ok(orders
                .values()
                .filter(|o| o.is_payment_expired(now))
                .cloned()
                .collect())
        }
    }

    struct MockReservationRepository {
        reservations: Mutex<HashMap<OrderReservationId, OrderReservation>>,
    }

    impl MockReservationRepository {
        fn with(reservations: Vec<OrderReservation>) -> Self {
            Self {
                reservations: Mutex::new(
                    reservations.into_iter().map(|r| (r.id(), r)).collect(),
                ),
            }
        }

        fn active_count(&self) -> usize {
            self.reservations
                .lock()
                .unwrap()
                .values()
                .filter(|r| r.is_active())
                .count()
        }
    }

    #[async_trait]
    impl OrderReservationRepository for MockReservationRepository {
        async fn find_active_by_order(
            &self,
            order_id: OrderId,
        ) -> Result<Vec<OrderReservation>, OrderError> {
            let mut reservations = self.reservations.lock().unwrap();
            let matching: Vec<OrderReservation> = reservations
                .values()
                .filter(|r| r.order_id() == order_id && r.is_active())
                .cloned()
                .collect();
            // The paired repository call deactivates in the same transaction.
            for reservation in reservations.values_mut() {
                if reservation.order_id() == order_id {
                    reservation.deactivate();
                }
            }
            Ok(matching)
        }

        async fn find_expired_active(
            &self,
            now: DateTime<Utc>,
        ) -> Result<Vec<OrderReservation>, OrderError> {
            let reservations = self.reservations.lock().unwrap();
            Ok(reservations
                .values()
                .filter(|r| r.is_expired(now))
                .cloned()
                .collect())
        }

        async fn deactivate(&self, id: OrderReservationId) -> Result<(), OrderError> {
            let mut reservations = self.reservations.lock().unwrap();
            if let Some(reservation) = reservations.get_mut(&id) {
                reservation.deactivate();
            }
            Ok(())
        }
    }

    struct MockWarehouseGateway {
        released: Mutex<Vec<String>>,
        reject_with: Option<String>,
    }

    impl MockWarehouseGateway {
        fn new() -> Self {
            Self {
                released: Mutex::new(Vec::new()),
                reject_with: None,
            }
        }

        fn rejecting(message: &str) -> Self {
            Self {
                released: Mutex::new(Vec::new()),
                reject_with: Some(message.to_string()),
            }
        }
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

        async fn commit(&self, _line: &ReservationLine) -> Result<(), OrderError> {
            unimplemented!()
        }

        async fn release(&self, line: &ReservationLine) -> Result<(), OrderError> {
            if let Some(message) = &self.reject_with {
                return Err(OrderError::ReservationRejected(message.clone()));
            }
            self.released.lock().unwrap().push(line.reference.clone());
            Ok(())
        }
    }

    fn expired_order() -> (Order, OrderReservation) {
        let order = Order::create(
            Uuid::new_v4(),
            vec![OrderLine {
                product_id: Uuid::new_v4(),
                warehouse_id: Uuid::new_v4(),
                quantity: 2,
                unit_price: dec!(3.00),
            }],
        )
        .unwrap();
        // Rewind the deadline so the order reads as expired.
        let item = &order.items()[0];
        let reservation = OrderReservation::create(
            order.id(),
            item.product_id(),
            item.warehouse_id(),
            item.quantity(),
            "RSV-1",
            Utc::now() - Duration::hours(1),
        );
        let order = Order::reconstitute(
            order.id(),
            order.user_id(),
            OrderStatus::Pending,
            order.total_amount(),
            Utc::now() - Duration::hours(1),
            order.items().to_vec(),
            order.created_at(),
            order.updated_at(),
        );
        (order, reservation)
    }

    #[tokio::test]
    async fn test_expired_order_cancelled_and_released() {
        let (order, reservation) = expired_order();
        let order_id = order.id();
        let order_repo = Arc::new(MockOrderRepository::with(vec![order]));
        let reservation_repo = Arc::new(MockReservationRepository::with(vec![reservation]));
        let gateway = Arc::new(MockWarehouseGateway::new());

        let use_case = CleanupExpiredUseCase::new(
            order_repo.clone(),
            reservation_repo.clone(),
            gateway.clone(),
        );
        let result = use_case.execute().await.unwrap();

        assert_eq!(result.cancelled_orders, 1);
        assert_eq!(result.released_reservations, 1);
        assert_eq!(order_repo.status_of(order_id), OrderStatus::Cancelled);
        assert_eq!(reservation_repo.active_count(), 0);
        assert_eq!(gateway.released.lock().unwrap().as_slice(), ["RSV-1"]);
    }

    #[tokio::test]
    async fn test_sweep_is_idempotent() {
        let (order, reservation) = expired_order();
        let order_repo = Arc::new(MockOrderRepository::with(vec![order]));
        let reservation_repo = Arc::new(MockReservationRepository::with(vec![reservation]));
        let gateway = Arc::new(MockWarehouseGateway::new());

        let use_case = CleanupExpiredUseCase::new(
            order_repo.clone(),
            reservation_repo.clone(),
            gateway.clone(),
        );
        use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(second.cancelled_orders, 0);
        assert_eq!(second.released_reservations, 0);
        assert_eq!(gateway.released.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_terminal_rejection_is_swallowed() {
        let (order, reservation) = expired_order();
        let order_repo = Arc::new(MockOrderRepository::with(vec![order]));
        let reservation_repo = Arc::new(MockReservationRepository::with(vec![reservation]));
        let gateway = Arc::new(MockWarehouseGateway::rejecting("already finalized"));

        let use_case = CleanupExpiredUseCase::new(order_repo, reservation_repo.clone(), gateway);
        let result = use_case.execute().await.unwrap();

        // The order is still cancelled locally and the sweep reports success.
        assert_eq!(result.cancelled_orders, 1);
        assert_eq!(result.released_reservations, 0);
        assert_eq!(result.failed_releases, 0);
        assert_eq!(reservation_repo.active_count(), 0);
    }

    #[tokio::test]
    async fn test_live_orders_untouched() {
        let order = Order::create(
            Uuid::new_v4(),
            vec![OrderLine {
                product_id: Uuid::new_v4(),
                warehouse_id: Uuid::new_v4(),
                quantity: 1,
                unit_price: dec!(1.00),
            }],
        )
        .unwrap();
        let order_id = order.id();
        let order_repo = Arc::new(MockOrderRepository::with(vec![order]));
        let reservation_repo = Arc::new(MockReservationRepository::with(Vec::new()));
        let gateway = Arc::new(MockWarehouseGateway::new());

        let use_case = CleanupExpiredUseCase::new(order_repo.clone(), reservation_repo, gateway);
        let result = use_case.execute().await.unwrap();

        assert_eq!(result.cancelled_orders, 0);
        assert_eq!(order_repo.status_of(order_id), OrderStatus::Pending);
    }
}
