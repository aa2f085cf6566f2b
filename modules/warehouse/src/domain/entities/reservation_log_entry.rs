// ReservationLogEntry entity - append-only reservation state transitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::WarehouseError;
use crate::domain::value_objects::{
    LogEntryId, ProductId, ReservationReference, ReservationStatus, WarehouseId,
};

/// ReservationLogEntry entity. One logical reservation produces several
/// entries sharing a reference as its state machine progresses; entries are
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationLogEntry {
    id: LogEntryId,
    warehouse_id: WarehouseId,
    product_id: ProductId,
    quantity: i32,
    status: ReservationStatus,
    reference: ReservationReference,
    created_at: DateTime<Utc>,
}

impl ReservationLogEntry {
    /// Creates a new log entry.
    pub fn create(
        warehouse_id: WarehouseId,
        product_id: ProductId,
        quantity: i32,
        status: ReservationStatus,
        reference: ReservationReference,
    ) -> Result<Self, WarehouseError> {
        if quantity <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        Ok(Self {
            id: LogEntryId::new(),
            warehouse_id,
            product_id,
            quantity,
            status,
            reference,
            created_at: Utc::now(),
        })
    }

    /// Reconstitutes a ReservationLogEntry from persistence
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: LogEntryId,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        quantity: i32,
        status: ReservationStatus,
        reference: ReservationReference,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            warehouse_id,
            product_id,
            quantity,
            status,
            reference,
            created_at,
        }
    }

    pub fn id(&self) -> LogEntryId {
        self.id
    }

    pub fn warehouse_id(&self) -> WarehouseId {
        self.warehouse_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn reference(&self) -> &ReservationReference {
        &self.reference
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_entry() {
        let warehouse_id = WarehouseId::new();
        let product_id = ProductId::new();
        let reference = ReservationReference::generate(warehouse_id, product_id);

        let entry = ReservationLogEntry::create(
            warehouse_id,
            product_id,
            3,
            ReservationStatus::Pending,
            reference.clone(),
        )
        .unwrap();

        assert_eq!(entry.status(), ReservationStatus::Pending);
        assert_eq!(entry.quantity(), 3);
        assert_eq!(entry.reference(), &reference);
    }

    #[test]
    fn test_create_rejects_non_positive_quantity() {
        let warehouse_id = WarehouseId::new();
        let product_id = ProductId::new();
        let result = ReservationLogEntry::create(
            warehouse_id,
            product_id,
            -1,
            ReservationStatus::Pending,
            ReservationReference::generate(warehouse_id, product_id),
        );
        assert!(matches!(result, Err(WarehouseError::InvalidQuantity)));
    }
}
