// Messaging module errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("Consume error: {0}")]
    Consume(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timed out waiting for a response")]
    ResponseTimeout,

    #[error("Response channel closed before a reply arrived")]
    ResponseChannelClosed,
}
