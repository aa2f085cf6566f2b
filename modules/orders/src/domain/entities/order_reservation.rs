// OrderReservation entity - local mirror of one warehouse reservation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{OrderId, OrderReservationId};

/// OrderReservation entity. The `reference` string matches the warehouse
/// ledger's reservation reference and is echoed back on every later phase.
/// `is_active = true` requires the parent order to still be pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReservation {
    id: OrderReservationId,
    order_id: OrderId,
    product_id: Uuid,
    warehouse_id: Uuid,
    quantity: i32,
    reference: String,
    expires_at: DateTime<Utc>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderReservation {
    /// Creates a live reservation mirror row.
    pub fn create(
        order_id: OrderId,
        product_id: Uuid,
        warehouse_id: Uuid,
        quantity: i32,
        reference: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: OrderReservationId::new(),
            order_id,
            product_id,
            warehouse_id,
            quantity,
            reference: reference.into(),
            expires_at,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes an OrderReservation from persistence
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: OrderReservationId,
        order_id: OrderId,
        product_id: Uuid,
        warehouse_id: Uuid,
        quantity: i32,
        reference: String,
        expires_at: DateTime<Utc>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            order_id,
            product_id,
            warehouse_id,
            quantity,
            reference,
            expires_at,
            is_active,
            created_at,
            updated_at,
        }
    }

    /// Marks the mirror row inactive. Idempotent.
    pub fn deactivate(&mut self) {
        if self.is_active {
            self.is_active = false;
            self.updated_at = Utc::now();
        }
    }

    /// Returns true for a live reservation past its expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at < now
    }

    pub fn id(&self) -> OrderReservationId {
        self.id
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    pub fn warehouse_id(&self) -> Uuid {
        self.warehouse_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn reservation() -> OrderReservation {
        OrderReservation::create(
            OrderId::new(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            2,
            "RSV-test",
            Utc::now() + Duration::hours(24),
        )
    }

    #[test]
    fn test_created_active() {
        let reservation = reservation();
        assert!(reservation.is_active());
        assert_eq!(reservation.reference(), "RSV-test");
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut reservation = reservation();
        reservation.deactivate();
        let stamped = reservation.updated_at();

        reservation.deactivate();
        assert!(!reservation.is_active());
        assert_eq!(reservation.updated_at(), stamped);
    }

    #[test]
    fn test_expiry_requires_active() {
        let mut reservation = reservation();
        let later = Utc::now() + Duration::hours(25);

        assert!(reservation.is_expired(later));
        reservation.deactivate();
        assert!(!reservation.is_expired(later));
    }
}
