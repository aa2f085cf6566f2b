mod inventory_routes;
mod order_routes;
mod warehouse_routes;

pub use inventory_routes::inventory_router;
pub use order_routes::order_router;
pub use warehouse_routes::warehouse_router;
