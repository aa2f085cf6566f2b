// OrderRepository trait - persistence port for orders

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::OrderError;
use crate::domain::entities::{Order, OrderReservation};
use crate::domain::value_objects::OrderId;

/// Repository trait for Order persistence operations.
///
/// Status changes that end an order's pending phase deactivate the local
/// reservation mirror rows in the same transaction, so a non-pending order
/// can never own a live reservation.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order, its items and its reservation mirror rows in one
    /// transaction.
    async fn save_with_reservations(
        &self,
        order: &Order,
        reservations: &[OrderReservation],
    ) -> Result<(), OrderError>;

    /// Finds an order with its items
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError>;

    /// Persists a status change only (e.g. paid -> completed)
    async fn update_status(&self, order: &Order) -> Result<(), OrderError>;

    /// Persists a status change and deactivates every reservation mirror row
    /// of the order in the same transaction (pending -> paid / cancelled).
    async fn update_status_deactivating_reservations(
        &self,
        order: &Order,
    ) -> Result<(), OrderError>;

    /// Finds pending orders whose payment deadline has passed
    async fn find_expired_pending(&self, now: DateTime<Utc>) -> Result<Vec<Order>, OrderError>;
}
