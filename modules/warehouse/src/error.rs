// Warehouse module errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum WarehouseError {
    // Warehouse errors
    #[error("Warehouse not found: {0}")]
    WarehouseNotFound(Uuid),

    #[error("Warehouse is inactive: {0}")]
    WarehouseInactive(Uuid),

    #[error("Warehouse code '{0}' already exists")]
    DuplicateWarehouseCode(String),

    #[error("Invalid warehouse code: must be alphanumeric with hyphens, 2-20 characters")]
    InvalidWarehouseCode,

    // Ledger errors
    #[error("No stock record for product {product_id} in warehouse {warehouse_id}")]
    StockNotFound {
        warehouse_id: Uuid,
        product_id: Uuid,
    },

    #[error("Insufficient stock available")]
    InsufficientStock,

    #[error("Cannot have negative stock")]
    NegativeStock,

    #[error("Reserved quantity cannot exceed total quantity")]
    ReservedExceedsQuantity,

    #[error("Quantity must be positive")]
    InvalidQuantity,

    // Reservation errors
    #[error("Cannot cancel more than the reserved quantity")]
    CannotCancelMoreThanReserved,

    #[error("Cannot commit more than the reserved quantity")]
    CannotCommitMoreThanReserved,

    #[error("Reservation '{0}' not found")]
    ReservationNotFound(String),

    #[error("Reservation '{0}' has already been committed or cancelled")]
    ReservationAlreadyFinalized(String),

    #[error("Invalid reservation status")]
    InvalidReservationStatus,

    // Transfer errors
    #[error("Transfer not found: {0}")]
    TransferNotFound(Uuid),

    #[error("Cannot transfer to the same warehouse")]
    SameWarehouseTransfer,

    #[error("Invalid transfer status")]
    InvalidTransferStatus,

    #[error("Invalid transfer status transition")]
    InvalidTransferStatusTransition,

    // Validation errors
    #[error("Invalid movement type")]
    InvalidMovementType,

    #[error("Page and page size must be positive")]
    InvalidPagination,

    // Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
