pub mod inventory;
pub mod orders;
pub mod warehouses;

pub use inventory::{
    cancel_reservation_handler, commit_reservation_handler, get_stock_handler,
    list_movements_handler, list_reservation_logs_handler, list_stock_handler,
    reserve_stock_handler, transfer_stock_handler,
};
pub use orders::{
    cleanup_reservations_handler, create_order_handler, get_order_handler,
    process_payment_handler, update_order_status_handler,
};
pub use warehouses::{
    add_stock_handler, create_warehouse_handler, get_warehouse_handler, list_warehouses_handler,
    update_warehouse_handler,
};
