// Orders module errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum OrderError {
    // Order errors
    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("Order has no items")]
    EmptyOrder,

    #[error("Item quantity must be positive")]
    InvalidQuantity,

    #[error("Item price must be positive")]
    InvalidPrice,

    #[error("Invalid order status transition")]
    InvalidOrderStatus,

    #[error("Invalid order status value")]
    InvalidOrderStatusValue,

    // Reservation errors surfaced from the warehouse
    #[error("Insufficient stock available for one or more items")]
    InsufficientStock,

    #[error("Warehouse rejected the reservation: {0}")]
    ReservationRejected(String),

    // Warehouse transport errors
    #[error("Warehouse service unavailable: {0}")]
    WarehouseUnavailable(String),

    #[error("Warehouse service error: {0}")]
    WarehouseError(String),

    // Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
