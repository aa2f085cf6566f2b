// OrderItem entity - one line of an order

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::OrderError;
use crate::domain::value_objects::{OrderId, OrderItemId};

/// OrderItem entity. Each line names the warehouse its stock is reserved
/// from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    order_id: OrderId,
    product_id: Uuid,
    warehouse_id: Uuid,
    quantity: i32,
    unit_price: Decimal,
}

impl OrderItem {
    /// Creates a new order line.
    pub fn create(
        order_id: OrderId,
        product_id: Uuid,
        warehouse_id: Uuid,
        quantity: i32,
        unit_price: Decimal,
    ) -> Result<Self, OrderError> {
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity);
        }
        if unit_price <= Decimal::ZERO {
            return Err(OrderError::InvalidPrice);
        }
        Ok(Self {
            id: OrderItemId::new(),
            order_id,
            product_id,
            warehouse_id,
            quantity,
            unit_price,
        })
    }

    /// Reconstitutes an OrderItem from persistence
    pub fn reconstitute(
        id: OrderItemId,
        order_id: OrderId,
        product_id: Uuid,
        warehouse_id: Uuid,
        quantity: i32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id,
            order_id,
            product_id,
            warehouse_id,
            quantity,
            unit_price,
        }
    }

    /// Line subtotal (quantity * unit_price)
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    pub fn id(&self) -> OrderItemId {
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

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_subtotal() {
        let item = OrderItem::create(
            OrderId::new(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            2,
            dec!(3.00),
        )
        .unwrap();
        assert_eq!(item.subtotal(), dec!(6.00));
    }

    #[test]
    fn test_rejects_bad_input() {
        let result = OrderItem::create(
            OrderId::new(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            0,
            dec!(3.00),
        );
        assert!(matches!(result, Err(OrderError::InvalidQuantity)));

        let result = OrderItem::create(
            OrderId::new(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            1,
            dec!(0),
        );
        assert!(matches!(result, Err(OrderError::InvalidPrice)));
    }
}
