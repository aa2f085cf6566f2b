// Messaging module - RabbitMQ topic-exchange bus for inventory messages

pub mod bus;
pub mod config;
pub mod correlation;
pub mod message;

mod error;

pub use bus::{AmqpBus, decode_and_ack};
pub use config::AmqpConfig;
pub use correlation::CorrelationTable;
pub use error::BusError;
pub use message::{
    ConfirmItem, ConfirmRequest, InventoryMessage, OperationResponse, REQUEST_BINDING,
    RESPONSE_BINDING, ReleaseRequest, ReserveItem, ReserveRequest, ReserveResponse,
    ReserveResponseItem,
};
