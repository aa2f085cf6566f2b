// Value objects for the orders module

mod order_id;
mod order_item_id;
mod order_reservation_id;
mod order_status;

pub use order_id::OrderId;
pub use order_item_id::OrderItemId;
pub use order_reservation_id::OrderReservationId;
pub use order_status::OrderStatus;
