// Domain entities for the orders module

mod order;
mod order_item;
mod order_reservation;

pub use order::{Order, OrderLine};
pub use order_item::OrderItem;
pub use order_reservation::OrderReservation;
