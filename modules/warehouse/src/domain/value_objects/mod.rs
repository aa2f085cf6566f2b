// Value objects for the warehouse module

mod log_entry_id;
mod movement_id;
mod movement_type;
mod product_id;
mod reservation_reference;
mod reservation_status;
mod stock_id;
mod transfer_id;
mod transfer_status;
mod warehouse_id;

pub use log_entry_id::LogEntryId;
pub use movement_id::MovementId;
pub use movement_type::MovementType;
pub use product_id::ProductId;
pub use reservation_reference::ReservationReference;
pub use reservation_status::ReservationStatus;
pub use stock_id::StockId;
pub use transfer_id::TransferId;
pub use transfer_status::TransferStatus;
pub use warehouse_id::WarehouseId;
