// Domain entities for the warehouse module

mod reservation_log_entry;
mod stock_movement;
mod stock_transfer;
mod warehouse;
mod warehouse_stock;

pub use reservation_log_entry::ReservationLogEntry;
pub use stock_movement::StockMovement;
pub use stock_transfer::StockTransfer;
pub use warehouse::Warehouse;
pub use warehouse_stock::WarehouseStock;
