mod warehouse_gateway;

pub use warehouse_gateway::{ReservationLine, WarehouseGateway};
