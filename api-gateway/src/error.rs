// API Gateway error handling
//
// Maps domain errors to HTTP statuses and the `{success, error}` envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use common::{ApiResponse, ErrorResponse};
use orders::OrderError;
use warehouse::WarehouseError;

/// Unified error type for the API Gateway.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    response: ErrorResponse,
}

impl AppError {
    /// Creates a new AppError with the given status code and error response.
    pub fn new(status: StatusCode, response: ErrorResponse) -> Self {
        Self { status, response }
    }

    /// Returns the HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns a reference to the error response.
    pub fn response(&self) -> &ErrorResponse {
        &self.response
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiResponse::<()>::err(self.response.into_body())),
        )
            .into_response()
    }
}

// =============================================================================
// From<WarehouseError> Implementation
// =============================================================================

impl From<WarehouseError> for AppError {
    fn from(err: WarehouseError) -> Self {
        let (status, response) = match &err {
            // -----------------------------------------------------------------
            // 404 Not Found
            // -----------------------------------------------------------------
            WarehouseError::WarehouseNotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("WAREHOUSE_NOT_FOUND", format!("Warehouse not found: {}", id)),
            ),
            WarehouseError::StockNotFound {
                warehouse_id,
                product_id,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    "STOCK_NOT_FOUND",
                    format!(
                        "No stock record for product {} in warehouse {}",
                        product_id, warehouse_id
                    ),
                ),
            ),
            WarehouseError::ReservationNotFound(reference) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    "RESERVATION_NOT_FOUND",
                    format!("Reservation '{}' not found", reference),
                ),
            ),
            WarehouseError::TransferNotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("TRANSFER_NOT_FOUND", format!("Transfer not found: {}", id)),
            ),

            // -----------------------------------------------------------------
            // 409 Conflict
            // -----------------------------------------------------------------
            WarehouseError::DuplicateWarehouseCode(code) => (
                StatusCode::CONFLICT,
                ErrorResponse::new(
                    "DUPLICATE_WAREHOUSE_CODE",
                    format!("Warehouse code '{}' already exists", code),
                ),
            ),
            WarehouseError::ReservationAlreadyFinalized(reference) => (
                StatusCode::CONFLICT,
                ErrorResponse::new(
                    "RESERVATION_ALREADY_FINALIZED",
                    format!(
                        "Reservation '{}' has already been committed or cancelled",
                        reference
                    ),
                ),
            ),

            // -----------------------------------------------------------------
            // 400 Bad Request - business rules and validation
            // -----------------------------------------------------------------
            WarehouseError::WarehouseInactive(id) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("WAREHOUSE_INACTIVE", format!("Warehouse is inactive: {}", id)),
            ),
            WarehouseError::InsufficientStock => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INSUFFICIENT_STOCK", "Insufficient stock available"),
            ),
            WarehouseError::CannotCancelMoreThanReserved => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    "CANNOT_CANCEL_MORE_THAN_RESERVED",
                    "Cannot cancel more than the reserved quantity",
                ),
            ),
            WarehouseError::CannotCommitMoreThanReserved => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    "CANNOT_COMMIT_MORE_THAN_RESERVED",
                    "Cannot commit more than the reserved quantity",
                ),
            ),
            WarehouseError::SameWarehouseTransfer => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("SAME_WAREHOUSE_TRANSFER", "Cannot transfer to the same warehouse"),
            ),
            WarehouseError::InvalidTransferStatusTransition => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_STATUS_TRANSITION", "Invalid transfer status transition"),
            ),
            WarehouseError::InvalidWarehouseCode => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error(
                    "Invalid warehouse code: must be alphanumeric with hyphens, 2-20 characters",
                ),
            ),
            WarehouseError::NegativeStock => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Cannot have negative stock"),
            ),
            WarehouseError::ReservedExceedsQuantity => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Reserved quantity cannot exceed total quantity"),
            ),
            WarehouseError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Quantity must be positive"),
            ),
            WarehouseError::InvalidReservationStatus => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Invalid reservation status"),
            ),
            WarehouseError::InvalidMovementType => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Invalid movement type"),
            ),
            WarehouseError::InvalidTransferStatus => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Invalid transfer status"),
            ),
            WarehouseError::InvalidPagination => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Page and page size must be positive"),
            ),

            // -----------------------------------------------------------------
            // 500 Internal Server Error
            // -----------------------------------------------------------------
            WarehouseError::Database(cause) => {
                error!(error = %cause, "Warehouse database error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal_error())
            }
        };

        AppError::new(status, response)
    }
}

// =============================================================================
// From<OrderError> Implementation
// =============================================================================

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let (status, response) = match &err {
            // 404 Not Found
            OrderError::OrderNotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("ORDER_NOT_FOUND", format!("Order not found: {}", id)),
            ),

            // 400 Bad Request
            OrderError::EmptyOrder => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Order has no items"),
            ),
            OrderError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Item quantity must be positive"),
            ),
            OrderError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Item price must be positive"),
            ),
            OrderError::InvalidOrderStatusValue => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error("Invalid order status value"),
            ),
            OrderError::InvalidOrderStatus => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_STATUS_TRANSITION", "Invalid order status transition"),
            ),
            OrderError::InsufficientStock => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    "INSUFFICIENT_STOCK",
                    "Insufficient stock available for one or more items",
                ),
            ),

            // 409 Conflict
            OrderError::ReservationRejected(message) => (
                StatusCode::CONFLICT,
                ErrorResponse::new("RESERVATION_REJECTED", message.clone()),
            ),

            // 502 / 503 - warehouse transport
            OrderError::WarehouseUnavailable(cause) => {
                error!(error = %cause, "Warehouse service unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new("WAREHOUSE_UNAVAILABLE", "Warehouse service unavailable"),
                )
            }
            OrderError::WarehouseError(cause) => {
                error!(error = %cause, "Warehouse service error");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::new("WAREHOUSE_ERROR", "Warehouse service error"),
                )
            }

            // 500 Internal Server Error
            OrderError::Database(cause) => {
                error!(error = %cause, "Order database error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal_error())
            }
        };

        AppError::new(status, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_stock_not_found_maps_to_404() {
        let app_error: AppError = WarehouseError::StockNotFound {
            warehouse_id: Uuid::nil(),
            product_id: Uuid::nil(),
        }
        .into();
        assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
        assert_eq!(app_error.response().error_code, "STOCK_NOT_FOUND");
    }

    #[test]
    fn test_insufficient_stock_maps_to_400() {
        let app_error: AppError = WarehouseError::InsufficientStock.into();
        assert_eq!(app_error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app_error.response().error_code, "INSUFFICIENT_STOCK");
    }

    #[test]
    fn test_finalized_reservation_maps_to_409() {
        let app_error: AppError =
            WarehouseError::ReservationAlreadyFinalized("RSV-1".to_string()).into();
        assert_eq!(app_error.status(), StatusCode::CONFLICT);
        assert_eq!(app_error.response().error_code, "RESERVATION_ALREADY_FINALIZED");
    }

    #[test]
    fn test_warehouse_database_error_is_not_leaked() {
        let app_error: AppError = WarehouseError::Database(sqlx::Error::PoolClosed).into();
        assert_eq!(app_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_error.response().error_code, "INTERNAL_ERROR");
        assert_eq!(app_error.response().message, "Internal error");
    }

    #[test]
    fn test_order_not_found_maps_to_404() {
        let app_error: AppError = OrderError::OrderNotFound(Uuid::nil()).into();
        assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
        assert_eq!(app_error.response().error_code, "ORDER_NOT_FOUND");
    }

    #[test]
    fn test_order_insufficient_stock_keeps_the_kind() {
        let app_error: AppError = OrderError::InsufficientStock.into();
        assert_eq!(app_error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app_error.response().error_code, "INSUFFICIENT_STOCK");
        assert_eq!(
            app_error.response().message,
            "Insufficient stock available for one or more items"
        );
    }

    #[test]
    fn test_warehouse_unavailable_maps_to_503() {
        let app_error: AppError = OrderError::WarehouseUnavailable("timeout".to_string()).into();
        assert_eq!(app_error.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(app_error.response().error_code, "WAREHOUSE_UNAVAILABLE");
    }

    #[test]
    fn test_illegal_transition_maps_to_400() {
        let app_error: AppError = OrderError::InvalidOrderStatus.into();
        assert_eq!(app_error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app_error.response().error_code, "INVALID_STATUS_TRANSITION");
    }
}
