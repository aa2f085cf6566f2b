// Repository traits (ports) for the orders module

mod order_repository;
mod order_reservation_repository;

pub use order_repository::OrderRepository;
pub use order_reservation_repository::OrderReservationRepository;
