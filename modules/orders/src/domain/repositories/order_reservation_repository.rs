// OrderReservationRepository trait - persistence port for reservation mirrors

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::OrderError;
use crate::domain::entities::OrderReservation;
use crate::domain::value_objects::{OrderId, OrderReservationId};

/// Repository trait for the local reservation mirror rows.
#[async_trait]
pub trait OrderReservationRepository: Send + Sync {
    /// Finds the live reservations of an order
    async fn find_active_by_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderReservation>, OrderError>;

    /// Finds live reservations whose expiry has passed
    async fn find_expired_active(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<OrderReservation>, OrderError>;

    /// Marks one reservation inactive
    async fn deactivate(&self, id: OrderReservationId) -> Result<(), OrderError>;
}
