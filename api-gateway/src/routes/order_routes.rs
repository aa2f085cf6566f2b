// Order routes
//
// Order lifecycle endpoints plus the operator-triggered expiry sweep.

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::handlers::{
    cleanup_reservations_handler, create_order_handler, get_order_handler,
    process_payment_handler, update_order_status_handler,
};
use crate::middleware::api_key_middleware;
use crate::state::AppState;

/// Creates the orders router.
///
/// # Routes
///
/// - `POST  /orders` - create an order (reserves stock first)
/// - `GET   /orders/{id}` - order details
/// - `POST  /orders/{id}/payment` - mark paid, commit reservations
/// - `PATCH /orders/{id}/status` - explicit status transition
/// - `POST  /reservations/cleanup` - run the expiry sweep now
pub fn order_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order_handler))
        .route("/orders/{id}", get(get_order_handler))
        .route("/orders/{id}/payment", post(process_payment_handler))
        .route("/orders/{id}/status", patch(update_order_status_handler))
        .route("/reservations/cleanup", post(cleanup_reservations_handler))
        .layer(middleware::from_fn_with_state(state, api_key_middleware))
}
