// Inventory routes
//
// Reservation engine endpoints, ledger reads and stock transfers. All routes
// sit behind the API key middleware.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::handlers::{
    cancel_reservation_handler, commit_reservation_handler, get_stock_handler,
    list_movements_handler, list_reservation_logs_handler, list_stock_handler,
    reserve_stock_handler, transfer_stock_handler,
};
use crate::middleware::api_key_middleware;
use crate::state::AppState;

/// Creates the inventory router.
///
/// # Routes
///
/// - `POST /inventory/reserve` - reserve stock, returns the reference
/// - `POST /inventory/reserve/cancel` - release a reservation
/// - `POST /inventory/reserve/commit` - convert a reservation to a stock-out
/// - `GET  /inventory/warehouses/{w}/stock` - paginated ledger rows
/// - `GET  /inventory/warehouses/{w}/products/{p}/stock` - one ledger row
/// - `GET  /inventory/warehouses/{w}/products/{p}/reservations` - history
/// - `GET  /inventory/warehouses/{w}/products/{p}/movements` - journal
/// - `POST /stock/transfer` - move quantity between warehouses
pub fn inventory_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/inventory/reserve", post(reserve_stock_handler))
        .route("/inventory/reserve/cancel", post(cancel_reservation_handler))
        .route("/inventory/reserve/commit", post(commit_reservation_handler))
        .route("/inventory/warehouses/{w}/stock", get(list_stock_handler))
        .route(
            "/inventory/warehouses/{w}/products/{p}/stock",
            get(get_stock_handler),
        )
        .route(
            "/inventory/warehouses/{w}/products/{p}/reservations",
            get(list_reservation_logs_handler),
        )
        .route(
            "/inventory/warehouses/{w}/products/{p}/movements",
            get(list_movements_handler),
        )
        .route("/stock/transfer", post(transfer_stock_handler))
        .layer(middleware::from_fn_with_state(state, api_key_middleware))
}
