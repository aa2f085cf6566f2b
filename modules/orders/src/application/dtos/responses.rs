// Response DTOs for order operations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Order, OrderItem};

/// One order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub warehouse_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id().into_uuid(),
            product_id: item.product_id(),
            warehouse_id: item.warehouse_id(),
            quantity: item.quantity(),
            unit_price: item.unit_price(),
            subtotal: item.subtotal(),
        }
    }
}

/// Order details with items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub total_amount: Decimal,
    pub payment_deadline: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id().into_uuid(),
            user_id: order.user_id(),
            status: order.status().to_string(),
            total_amount: order.total_amount(),
            payment_deadline: order.payment_deadline(),
            items: order.items().iter().map(OrderItemResponse::from).collect(),
            created_at: order.created_at(),
            updated_at: order.updated_at(),
        }
    }
}

/// Result of one reaper sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupResult {
    /// Orders moved from pending to cancelled
    pub cancelled_orders: usize,
    /// Reservations released at the warehouse
    pub released_reservations: usize,
    /// Releases that failed and were left for the next sweep
    pub failed_releases: usize,
    /// Timestamp of the sweep
    pub cleaned_at: DateTime<Utc>,
}
