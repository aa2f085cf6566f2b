// Warehouse routes
//
// Admin endpoints for the warehouse directory and stock intake.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::handlers::{
    add_stock_handler, create_warehouse_handler, get_warehouse_handler, list_warehouses_handler,
    update_warehouse_handler,
};
use crate::middleware::api_key_middleware;
use crate::state::AppState;

/// Creates the warehouses router.
///
/// # Routes
///
/// - `POST /warehouses` - create a warehouse
/// - `GET  /warehouses` - list warehouses
/// - `GET  /warehouses/{w}` - warehouse details
/// - `PUT  /warehouses/{w}` - update attributes / active flag
/// - `POST /warehouses/{w}/stock` - receive stock
pub fn warehouse_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/warehouses",
            post(create_warehouse_handler).get(list_warehouses_handler),
        )
        .route(
            "/warehouses/{w}",
            get(get_warehouse_handler).put(update_warehouse_handler),
        )
        .route("/warehouses/{w}/stock", post(add_stock_handler))
        .layer(middleware::from_fn_with_state(state, api_key_middleware))
}
