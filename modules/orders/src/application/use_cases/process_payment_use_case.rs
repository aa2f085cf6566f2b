// ProcessPaymentUseCase - marks an order paid and commits its reservations

use std::sync::Arc;

use tracing::error;
use uuid::Uuid;

use crate::OrderError;
use crate::application::dtos::responses::OrderResponse;
use crate::domain::repositories::{OrderRepository, OrderReservationRepository};
use crate::domain::services::{ReservationLine, WarehouseGateway};
use crate::domain::value_objects::OrderId;

/// Use case for payment completion.
///
/// The database commit happens before the warehouse calls: a failed commit
/// leaves a paid order whose stock-out is reconciled later, never a
/// stock-out without an order. Commit failures do not unmark the order.
pub struct ProcessPaymentUseCase<R, V, G>
where
    R: OrderRepository,
    V: OrderReservationRepository,
    G: WarehouseGateway,
{
    order_repo: Arc<R>,
    reservation_repo: Arc<V>,
    gateway: Arc<G>,
}

impl<R, V, G> ProcessPaymentUseCase<R, V, G>
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
    /// * `OrderError::InvalidOrderStatus` - order is not pending
    pub async fn execute(&self, order_id: Uuid) -> Result<OrderResponse, OrderError> {
        let id = OrderId::from_uuid(order_id);
        let mut order = self
            .order_repo
            .find_by_id(id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        // Snapshot the live reservations before they are deactivated.
        let reservations = self.reservation_repo.find_active_by_order(id).await?;

        order.mark_paid()?;
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
            if let Err(e) = self.gateway.commit(&line).await {
                error!(
                    order_id = %order_id,
                    reference = %reservation.reference(),
                    error = %e,
                    "Reservation commit failed after payment; left for reconciliation"
                );
            }
        }

        Ok(order.into())
    }
}
