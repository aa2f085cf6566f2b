// StockMovement entity - append-only journal entry for quantity changes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::WarehouseError;
use crate::domain::value_objects::{MovementId, MovementType, ProductId, WarehouseId};

/// StockMovement entity recording one atomic change to a ledger row's
/// `quantity`. Entries are immutable; reservations never produce one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    id: MovementId,
    warehouse_id: WarehouseId,
    product_id: ProductId,
    product_sku: String,
    movement_type: MovementType,
    quantity: i32,
    reference_type: Option<String>,
    reference_id: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl StockMovement {
    /// Creates a new journal entry. The quantity is always the positive
    /// magnitude of the change; direction lives in `movement_type`.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        warehouse_id: WarehouseId,
        product_id: ProductId,
        product_sku: impl Into<String>,
        movement_type: MovementType,
        quantity: i32,
        reference_type: Option<String>,
        reference_id: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, WarehouseError> {
        if quantity <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        Ok(Self {
            id: MovementId::new(),
            warehouse_id,
            product_id,
            product_sku: product_sku.into(),
            movement_type,
            quantity,
            reference_type,
            reference_id,
            notes,
            created_at: Utc::now(),
        })
    }

    /// Reconstitutes a StockMovement from persistence
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MovementId,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        product_sku: String,
        movement_type: MovementType,
        quantity: i32,
        reference_type: Option<String>,
        reference_id: Option<String>,
        notes: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            warehouse_id,
            product_id,
            product_sku,
            movement_type,
            quantity,
            reference_type,
            reference_id,
            notes,
            created_at,
        }
    }

    pub fn id(&self) -> MovementId {
        self.id
    }

    pub fn warehouse_id(&self) -> WarehouseId {
        self.warehouse_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn product_sku(&self) -> &str {
        &self.product_sku
    }

    pub fn movement_type(&self) -> MovementType {
        self.movement_type
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn reference_type(&self) -> Option<&str> {
        self.reference_type.as_deref()
    }

    pub fn reference_id(&self) -> Option<&str> {
        self.reference_id.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_movement() {
        let movement = StockMovement::create(
            WarehouseId::new(),
            ProductId::new(),
            "SKU-001",
            MovementType::StockIn,
            25,
            Some("purchase".to_string()),
            Some("PO-1001".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(movement.movement_type(), MovementType::StockIn);
        assert_eq!(movement.quantity(), 25);
        assert_eq!(movement.reference_id(), Some("PO-1001"));
    }

    #[test]
    fn test_create_rejects_non_positive_quantity() {
        let result = StockMovement::create(
            WarehouseId::new(),
            ProductId::new(),
            "SKU-001",
            MovementType::StockOut,
            0,
            None,
            None,
            None,
        );
        assert!(matches!(result, Err(WarehouseError::InvalidQuantity)));
    }
}
