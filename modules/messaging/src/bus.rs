// AMQP (RabbitMQ) bus for inventory messages
//
// Uses a durable topic exchange; messages are persistent JSON bodies routed
// by their `type` tag.

use deadpool_lapin::{Manager, Pool, PoolError};
use lapin::{
    BasicProperties, Channel, ExchangeKind,
    options::{
        BasicAckOptions, BasicConsumeOptions, BasicPublishOptions, ExchangeDeclareOptions,
        QueueBindOptions, QueueDeclareOptions,
    },
    types::FieldTable,
};
use tracing::{debug, info};

use crate::config::AmqpConfig;
use crate::error::BusError;
use crate::message::InventoryMessage;

/// Persistent delivery mode per the AMQP spec.
const DELIVERY_MODE_PERSISTENT: u8 = 2;

/// AMQP bus shared by publishers and consumers.
pub struct AmqpBus {
    pool: Pool,
    config: AmqpConfig,
}

impl AmqpBus {
    /// Connects, declares the topic exchange and verifies the connection.
    pub async fn connect(config: AmqpConfig) -> Result<Self, BusError> {
        let manager = Manager::new(config.url(), Default::default());
        let pool = Pool::builder(manager)
            .max_size(10)
            .build()
            .map_err(|e| BusError::Connection(format!("Failed to create pool: {}", e)))?;

        let conn = pool
            .get()
            .await
            .map_err(|e| BusError::Connection(format!("Failed to connect: {}", e)))?;

        let channel = conn
            .create_channel()
            .await
            .map_err(|e| BusError::Connection(format!("Failed to create channel: {}", e)))?;

        channel
            .exchange_declare(
                &config.exchange,
                ExchangeKind::Topic,
                ExchangeDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|e| BusError::Connection(format!("Failed to declare exchange: {}", e)))?;

        info!(exchange = %config.exchange, host = %config.host, "Connected to AMQP");

        Ok(Self { pool, config })
    }

    /// Gets a channel from the pool.
    async fn channel(&self) -> Result<Channel, BusError> {
        let conn = self.pool.get().await.map_err(|e: PoolError| {
            BusError::Connection(format!("Failed to get connection from pool: {}", e))
        })?;

        conn.create_channel()
            .await
            .map_err(|e| BusError::Connection(format!("Failed to create channel: {}", e)))
    }

    /// Publishes a message under its own routing key.
    pub async fn publish(&self, message: &InventoryMessage) -> Result<(), BusError> {
        let channel = self.channel().await?;
        let payload = serde_json::to_vec(message)?;
        let routing_key = message.routing_key();

        channel
            .basic_publish(
                &self.config.exchange,
                routing_key,
                BasicPublishOptions::default(),
                &payload,
                BasicProperties::default()
                    .with_delivery_mode(DELIVERY_MODE_PERSISTENT)
                    .with_content_type("application/json".into()),
            )
            .await
            .map_err(|e| BusError::Publish(format!("Failed to publish: {}", e)))?
            .await
            .map_err(|e| BusError::Publish(format!("Publish not confirmed: {}", e)))?;

        debug!(
            routing_key,
            correlation_id = %message.correlation_id(),
            "Published inventory message"
        );

        Ok(())
    }

    /// Declares a durable queue, binds it to the exchange with the pattern
    /// and returns a consumer stream.
    pub async fn subscribe(
        &self,
        queue: &str,
        binding_key: &str,
        consumer_tag: &str,
    ) -> Result<lapin::Consumer, BusError> {
        let channel = self.channel().await?;

        channel
            .queue_declare(
                queue,
                QueueDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|e| BusError::Consume(format!("Failed to declare queue: {}", e)))?;

        channel
            .queue_bind(
                queue,
                &self.config.exchange,
                binding_key,
                QueueBindOptions::default(),
                FieldTable::default(),
            )
            .await
            .map_err(|e| BusError::Consume(format!("Failed to bind queue: {}", e)))?;

        let consumer = channel
            .basic_consume(
                queue,
                consumer_tag,
                BasicConsumeOptions::default(),
                FieldTable::default(),
            )
            .await
            .map_err(|e| BusError::Consume(format!("Failed to start consumer: {}", e)))?;

        info!(queue, binding_key, "Subscribed to AMQP queue");

        Ok(consumer)
    }

    /// Queue name this service consumes from.
    pub fn queue(&self) -> &str {
        &self.config.queue
    }
}

/// Decodes a delivery and acknowledges it. Malformed payloads are still
/// acked so they do not redeliver forever; the error is reported back.
pub async fn decode_and_ack(
    delivery: lapin::message::Delivery,
) -> Result<InventoryMessage, BusError> {
    let decoded = serde_json::from_slice::<InventoryMessage>(&delivery.data);
    delivery
        .ack(BasicAckOptions::default())
        .await
        .map_err(|e| BusError::Consume(format!("Failed to ack delivery: {}", e)))?;

    Ok(decoded?)
}
