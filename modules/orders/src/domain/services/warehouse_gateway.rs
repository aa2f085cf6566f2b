// WarehouseGateway trait - port to the warehouse service

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::OrderError;

/// One order line's reservation identity, used for commit and release.
/// Always constructed from the actual line; there are no defaults.
#[derive(Debug, Clone)]
pub struct ReservationLine {
    pub order_id: Uuid,
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub reference: String,
}

/// Port to the warehouse's reservation engine. The synchronous HTTP
/// implementation and the message-bus implementation are behaviorally
/// equivalent; the choice is a deployment parameter.
#[async_trait]
pub trait WarehouseGateway: Send + Sync {
    /// Reserves stock for one order line. Returns the warehouse reference.
    async fn reserve(
        &self,
        order_id: Uuid,
        warehouse_id: Uuid,
        product_id: Uuid,
        quantity: i32,
        reserve_until: DateTime<Utc>,
    ) -> Result<String, OrderError>;

    /// Commits a reservation after payment. Implementations may report a
    /// reconcilable failure as success once it has been logged.
    async fn commit(&self, line: &ReservationLine) -> Result<(), OrderError>;

    /// Releases a reservation back to availability.
    async fn release(&self, line: &ReservationLine) -> Result<(), OrderError>;
}
