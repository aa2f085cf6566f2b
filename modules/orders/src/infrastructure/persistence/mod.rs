// PostgreSQL adapters for the orders module

mod pg_order_repository;
mod pg_order_reservation_repository;

pub use pg_order_repository::PgOrderRepository;
pub use pg_order_reservation_repository::PgOrderReservationRepository;
