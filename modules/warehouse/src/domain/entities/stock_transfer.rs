// StockTransfer entity - record of quantity moved between warehouses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::WarehouseError;
use crate::domain::value_objects::{ProductId, TransferId, TransferStatus, WarehouseId};

/// StockTransfer entity. Created `Pending`; transitions exactly once to
/// `Completed` or `Failed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockTransfer {
    id: TransferId,
    source_warehouse_id: WarehouseId,
    target_warehouse_id: WarehouseId,
    product_id: ProductId,
    product_sku: String,
    quantity: i32,
    status: TransferStatus,
    transfer_reference: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StockTransfer {
    /// Creates a new pending transfer.
    pub fn create(
        source_warehouse_id: WarehouseId,
        target_warehouse_id: WarehouseId,
        product_id: ProductId,
        product_sku: impl Into<String>,
        quantity: i32,
        transfer_reference: impl Into<String>,
    ) -> Result<Self, WarehouseError> {
        if quantity <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        if source_warehouse_id == target_warehouse_id {
            return Err(WarehouseError::SameWarehouseTransfer);
        }
        let now = Utc::now();
        Ok(Self {
            id: TransferId::new(),
            source_warehouse_id,
            target_warehouse_id,
            product_id,
            product_sku: product_sku.into(),
            quantity,
            status: TransferStatus::Pending,
            transfer_reference: transfer_reference.into(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a StockTransfer from persistence
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TransferId,
        source_warehouse_id: WarehouseId,
        target_warehouse_id: WarehouseId,
        product_id: ProductId,
        product_sku: String,
        quantity: i32,
        status: TransferStatus,
        transfer_reference: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            source_warehouse_id,
            target_warehouse_id,
            product_id,
            product_sku,
            quantity,
            status,
            transfer_reference,
            created_at,
            updated_at,
        }
    }

    /// Marks the transfer completed.
    pub fn complete(&mut self) -> Result<(), WarehouseError> {
        if self.status != TransferStatus::Pending {
            return Err(WarehouseError::InvalidTransferStatusTransition);
        }
        self.status = TransferStatus::Completed;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Marks the transfer failed.
    pub fn fail(&mut self) -> Result<(), WarehouseError> {
        if self.status != TransferStatus::Pending {
            return Err(WarehouseError::InvalidTransferStatusTransition);
        }
        self.status = TransferStatus::Failed;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn id(&self) -> TransferId {
        self.id
    }

    pub fn source_warehouse_id(&self) -> WarehouseId {
        self.source_warehouse_id
    }

    pub fn target_warehouse_id(&self) -> WarehouseId {
        self.target_warehouse_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn product_sku(&self) -> &str {
        &self.product_sku
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn status(&self) -> TransferStatus {
        self.status
    }

    pub fn transfer_reference(&self) -> &str {
        &self.transfer_reference
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

    fn transfer() -> StockTransfer {
        StockTransfer::create(
            WarehouseId::new(),
            WarehouseId::new(),
            ProductId::new(),
            "SKU-001",
            4,
            "TRF-1",
        )
        .unwrap()
    }

    #[test]
    fn test_create_transfer() {
        let transfer = transfer();
        assert_eq!(transfer.status(), TransferStatus::Pending);
        assert_eq!(transfer.quantity(), 4);
    }

    #[test]
    fn test_same_warehouse_rejected() {
        let warehouse_id = WarehouseId::new();
        let result = StockTransfer::create(
            warehouse_id,
            warehouse_id,
            ProductId::new(),
            "SKU-001",
            4,
            "TRF-1",
        );
        assert!(matches!(result, Err(WarehouseError::SameWarehouseTransfer)));
    }

    #[test]
    fn test_terminal_transition_is_single_shot() {
        let mut transfer = transfer();
        transfer.complete().unwrap();
        assert_eq!(transfer.status(), TransferStatus::Completed);

        assert!(matches!(
            transfer.fail(),
            Err(WarehouseError::InvalidTransferStatusTransition)
        ));

        let mut failed = self::transfer();
        failed.fail().unwrap();
        assert_eq!(failed.status(), TransferStatus::Failed);
        assert!(matches!(
            failed.complete(),
            Err(WarehouseError::InvalidTransferStatusTransition)
        ));
    }
}
