// Warehouse gateway adapters (HTTP and AMQP)

mod amqp_warehouse_gateway;
mod http_warehouse_gateway;

pub use amqp_warehouse_gateway::{
    AmqpWarehouseGateway, DEFAULT_RESPONSE_TIMEOUT, spawn_response_consumer,
};
pub use http_warehouse_gateway::{HttpWarehouseGateway, WarehouseClientConfig};
