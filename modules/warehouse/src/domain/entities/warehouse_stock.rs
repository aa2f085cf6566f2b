// WarehouseStock entity - authoritative ledger row per (warehouse, product)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::WarehouseError;
use crate::domain::value_objects::{ProductId, StockId, WarehouseId};

/// WarehouseStock entity representing the inventory counters for one product
/// at one warehouse. There is exactly one row per `(warehouse_id,
/// product_id)` pair; it is created lazily on first stock-in and never
/// destroyed.
///
/// Invariants:
/// - `quantity >= 0`
/// - `reserved_quantity >= 0`
/// - `reserved_quantity <= quantity`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseStock {
    id: StockId,
    warehouse_id: WarehouseId,
    product_id: ProductId,
    product_sku: String,
    quantity: i32,
    reserved_quantity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WarehouseStock {
    /// Creates a new ledger row from a first stock-in.
    pub fn create(
        warehouse_id: WarehouseId,
        product_id: ProductId,
        product_sku: impl Into<String>,
        quantity: i32,
    ) -> Result<Self, WarehouseError> {
        if quantity <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        let now = Utc::now();
        Ok(Self {
            id: StockId::new(),
            warehouse_id,
            product_id,
            product_sku: product_sku.into(),
            quantity,
            reserved_quantity: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a WarehouseStock from persistence
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: StockId,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        product_sku: String,
        quantity: i32,
        reserved_quantity: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, WarehouseError> {
        let stock = Self {
            id,
            warehouse_id,
            product_id,
            product_sku,
            quantity,
            reserved_quantity,
            created_at,
            updated_at,
        };
        stock.check_invariants()?;
        Ok(stock)
    }

    /// Validates the counter invariants, returning the violated rule.
    pub fn check_invariants(&self) -> Result<(), WarehouseError> {
        if self.quantity < 0 {
            return Err(WarehouseError::NegativeStock);
        }
        if self.reserved_quantity < 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        if self.reserved_quantity > self.quantity {
            return Err(WarehouseError::ReservedExceedsQuantity);
        }
        Ok(())
    }

    /// Returns the quantity available for new reservations.
    pub fn available(&self) -> i32 {
        (self.quantity - self.reserved_quantity).max(0)
    }

    /// Adds received stock to the row.
    pub fn add_stock(&mut self, qty: i32) -> Result<(), WarehouseError> {
        if qty <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        self.quantity += qty;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Sets stock aside for a reservation without removing it.
    pub fn reserve(&mut self, qty: i32) -> Result<(), WarehouseError> {
        if qty <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        if qty > self.available() {
            return Err(WarehouseError::InsufficientStock);
        }
        self.reserved_quantity += qty;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Returns reserved stock to availability.
    pub fn release(&mut self, qty: i32) -> Result<(), WarehouseError> {
        if qty <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        if qty > self.reserved_quantity {
            return Err(WarehouseError::CannotCancelMoreThanReserved);
        }
        self.reserved_quantity -= qty;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Converts reserved stock into removed stock.
    pub fn commit_reservation(&mut self, qty: i32) -> Result<(), WarehouseError> {
        if qty <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        if qty > self.reserved_quantity {
            return Err(WarehouseError::CannotCommitMoreThanReserved);
        }
        self.quantity -= qty;
        self.reserved_quantity -= qty;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Removes unreserved stock, e.g. the source side of a transfer.
    /// Reserved stock is untouchable here; only `available` may leave.
    pub fn withdraw(&mut self, qty: i32) -> Result<(), WarehouseError> {
        if qty <= 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        if qty > self.available() {
            return Err(WarehouseError::InsufficientStock);
        }
        self.quantity -= qty;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Adds stock arriving from another warehouse.
    pub fn deposit(&mut self, qty: i32) -> Result<(), WarehouseError> {
        self.add_stock(qty)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> StockId {
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

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn reserved_quantity(&self) -> i32 {
        self.reserved_quantity
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
    use proptest::prelude::*;

    fn stock_with(quantity: i32) -> WarehouseStock {
        WarehouseStock::create(WarehouseId::new(), ProductId::new(), "SKU-001", quantity).unwrap()
    }

    #[test]
    fn test_create_rejects_non_positive_quantity() {
        let result = WarehouseStock::create(WarehouseId::new(), ProductId::new(), "SKU-001", 0);
        assert!(matches!(result, Err(WarehouseError::InvalidQuantity)));

        let result = WarehouseStock::create(WarehouseId::new(), ProductId::new(), "SKU-001", -3);
        assert!(matches!(result, Err(WarehouseError::InvalidQuantity)));
    }

    #[test]
    fn test_available() {
        let mut stock = stock_with(10);
        stock.reserve(3).unwrap();

        assert_eq!(stock.quantity(), 10);
        assert_eq!(stock.reserved_quantity(), 3);
        assert_eq!(stock.available(), 7);
    }

    #[test]
    fn test_reserve_insufficient() {
        let mut stock = stock_with(5);
        stock.reserve(4).unwrap();

        let result = stock.reserve(2);
        assert!(matches!(result, Err(WarehouseError::InsufficientStock)));
        assert_eq!(stock.reserved_quantity(), 4);
    }

    #[test]
    fn test_release_returns_to_pre_reserve_state() {
        let mut stock = stock_with(10);
        stock.reserve(6).unwrap();
        stock.release(6).unwrap();

        assert_eq!(stock.quantity(), 10);
        assert_eq!(stock.reserved_quantity(), 0);
    }

    #[test]
    fn test_release_more_than_reserved() {
        let mut stock = stock_with(10);
        stock.reserve(2).unwrap();

        let result = stock.release(3);
        assert!(matches!(result, Err(WarehouseError::CannotCancelMoreThanReserved)));
    }

    #[test]
    fn test_commit_reduces_only_quantity_net() {
        let mut stock = stock_with(10);
        stock.reserve(4).unwrap();
        stock.commit_reservation(4).unwrap();

        assert_eq!(stock.quantity(), 6);
        assert_eq!(stock.reserved_quantity(), 0);
        assert_eq!(stock.available(), 6);
    }

    #[test]
    fn test_commit_more_than_reserved() {
        let mut stock = stock_with(10);
        stock.reserve(2).unwrap();

        let result = stock.commit_reservation(3);
        assert!(matches!(result, Err(WarehouseError::CannotCommitMoreThanReserved)));
    }

    #[test]
    fn test_withdraw_spares_reserved_stock() {
        let mut stock = stock_with(10);
        stock.reserve(3).unwrap();

        stock.withdraw(4).unwrap();
        assert_eq!(stock.quantity(), 6);
        assert_eq!(stock.reserved_quantity(), 3);
        assert_eq!(stock.available(), 3);

        let result = stock.withdraw(4);
        assert!(matches!(result, Err(WarehouseError::InsufficientStock)));
    }

    #[test]
    fn test_reconstitute_rejects_reserved_above_quantity() {
        let now = Utc::now();
        let result = WarehouseStock::reconstitute(
            StockId::new(),
            WarehouseId::new(),
            ProductId::new(),
            "SKU-001".to_string(),
            5,
            7,
            now,
            now,
        );
        assert!(matches!(result, Err(WarehouseError::ReservedExceedsQuantity)));
    }

    proptest! {
        // No sequence of ledger operations may break the counter invariants;
        // rejected operations must leave the counters untouched.
        #[test]
        fn prop_invariants_hold_under_any_operation_sequence(
            initial in 1i32..500,
            ops in proptest::collection::vec((0u8..5, 1i32..100), 0..50),
        ) {
            let mut stock = stock_with(initial);
            for (op, qty) in ops {
                let before = (stock.quantity(), stock.reserved_quantity());
                let result = match op {
                    0 => stock.add_stock(qty),
                    1 => stock.reserve(qty),
                    2 => stock.release(qty),
                    3 => stock.commit_reservation(qty),
                    _ => stock.withdraw(qty),
                };
                if result.is_err() {
                    prop_assert_eq!(before, (stock.quantity(), stock.reserved_quantity()));
                }
                prop_assert!(stock.quantity() >= 0);
                prop_assert!(stock.reserved_quantity() >= 0);
                prop_assert!(stock.reserved_quantity() <= stock.quantity());
            }
        }
    }
}
