// Command DTOs for order operations

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of a create-order request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderItemCommand {
    pub product_id: Uuid,
    pub warehouse_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Command to create an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderCommand {
    pub user_id: Uuid,
    pub items: Vec<CreateOrderItemCommand>,
}

/// Command to change an order's status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusCommand {
    /// Target status: "paid", "cancelled" or "completed"
    pub status: String,
}
