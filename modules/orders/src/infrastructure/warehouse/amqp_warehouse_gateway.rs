// AMQP WarehouseGateway implementation
//
// Publishes inventory requests and awaits responses matched by correlation
// id. Behaviorally equivalent to the HTTP gateway at the engine: a reserve
// timeout counts as insufficient stock, while confirm/release timeouts are
// logged for reconciliation and left to the expiry sweep.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use tracing::{debug, error, warn};
use uuid::Uuid;

use messaging::{
    AmqpBus, BusError, ConfirmItem, ConfirmRequest, CorrelationTable, InventoryMessage,
    RESPONSE_BINDING, ReleaseRequest, ReserveItem, ReserveRequest, decode_and_ack,
};

use crate::OrderError;
use crate::domain::services::{ReservationLine, WarehouseGateway};

/// Default bounded wait for a response.
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);

/// AMQP implementation of WarehouseGateway
pub struct AmqpWarehouseGateway {
    bus: Arc<AmqpBus>,
    correlation: Arc<CorrelationTable>,
    response_timeout: Duration,
}

impl AmqpWarehouseGateway {
    pub fn new(
        bus: Arc<AmqpBus>,
        correlation: Arc<CorrelationTable>,
        response_timeout: Duration,
    ) -> Self {
        Self {
            bus,
            correlation,
            response_timeout,
        }
    }

    /// Publishes a request and awaits its response. Registration happens
    /// before the publish so the response cannot race past the waiter.
    async fn request(&self, message: InventoryMessage) -> Result<InventoryMessage, BusError> {
        let correlation_id = message.correlation_id();
        let rx = self.correlation.register(correlation_id);

        if let Err(e) = self.bus.publish(&message).await {
            self.correlation.forget(correlation_id);
            return Err(e);
        }

        self.correlation
            .wait(correlation_id, rx, self.response_timeout)
            .await
    }
}

#[async_trait]
impl WarehouseGateway for AmqpWarehouseGateway {
    async fn reserve(
        &self,
        order_id: Uuid,
        warehouse_id: Uuid,
        product_id: Uuid,
        quantity: i32,
        reserve_until: DateTime<Utc>,
    ) -> Result<String, OrderError> {
        let message = InventoryMessage::Reserve(ReserveRequest {
            order_id,
            timestamp: Utc::now(),
            correlation_id: Uuid::new_v4(),
            items: vec![ReserveItem {
                warehouse_id,
                product_id,
                quantity,
            }],
            reserve_until,
        });

        let response = match self.request(message).await {
            Ok(response) => response,
            // A reserve that cannot be confirmed in time is treated as a
            // failed reservation; nothing has been promised to the caller.
            Err(BusError::ResponseTimeout) => return Err(OrderError::InsufficientStock),
            Err(e) => return Err(OrderError::WarehouseUnavailable(e.to_string())),
        };

        match response {
            InventoryMessage::ReserveResponse(response) if response.success => response
                .items
                .into_iter()
                .next()
                .and_then(|item| item.reference)
                .ok_or_else(|| {
                    OrderError::WarehouseError("reserve response without reference".to_string())
                }),
            InventoryMessage::ReserveResponse(_) => Err(OrderError::InsufficientStock),
            other => Err(OrderError::WarehouseError(format!(
                "unexpected response type {}",
                other.routing_key()
            ))),
        }
    }

    async fn commit(&self, line: &ReservationLine) -> Result<(), OrderError> {
        let message = InventoryMessage::Confirm(ConfirmRequest {
            order_id: line.order_id,
            timestamp: Utc::now(),
            correlation_id: Uuid::new_v4(),
            items: vec![ConfirmItem {
                warehouse_id: line.warehouse_id,
                product_id: line.product_id,
                quantity: line.quantity,
                reference: line.reference.clone(),
            }],
        });

        match self.request(message).await {
            Ok(InventoryMessage::ConfirmResponse(response)) if response.success => Ok(()),
            Ok(InventoryMessage::ConfirmResponse(response)) => Err(
                OrderError::ReservationRejected(
                    response.error.unwrap_or_else(|| "commit rejected".to_string()),
                ),
            ),
            Ok(other) => Err(OrderError::WarehouseError(format!(
                "unexpected response type {}",
                other.routing_key()
            ))),
            Err(BusError::ResponseTimeout) => {
                // The ledger may or may not have applied the commit; the
                // reconciliation sweep settles it.
                error!(
                    reference = %line.reference,
                    "Commit response timed out; left for reconciliation"
                );
                Ok(())
            }
            Err(e) => Err(OrderError::WarehouseUnavailable(e.to_string())),
        }
    }

    async fn release(&self, line: &ReservationLine) -> Result<(), OrderError> {
        // Always built from the actual order line.
        let message = InventoryMessage::Release(ReleaseRequest {
            order_id: line.order_id,
            timestamp: Utc::now(),
            correlation_id: Uuid::new_v4(),
            warehouse_id: line.warehouse_id,
            product_id: line.product_id,
            quantity: line.quantity,
            reference: line.reference.clone(),
        });

        match self.request(message).await {
            Ok(InventoryMessage::ReleaseResponse(response)) if response.success => Ok(()),
            Ok(InventoryMessage::ReleaseResponse(response)) => Err(
                OrderError::ReservationRejected(
                    response.error.unwrap_or_else(|| "release rejected".to_string()),
                ),
            ),
            Ok(other) => Err(OrderError::WarehouseError(format!(
                "unexpected response type {}",
                other.routing_key()
            ))),
            Err(BusError::ResponseTimeout) => {
                error!(
                    reference = %line.reference,
                    "Release response timed out; expiry sweep retries"
                );
                Ok(())
            }
            Err(e) => Err(OrderError::WarehouseUnavailable(e.to_string())),
        }
    }
}

/// Runs the order-side response consumer: deliveries on `inventory.*.response`
/// are matched to waiters through the correlation table.
pub fn spawn_response_consumer(
    bus: Arc<AmqpBus>,
    correlation: Arc<CorrelationTable>,
    queue: String,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut consumer = match bus
            .subscribe(&queue, RESPONSE_BINDING, "order-responses")
            .await
        {
            Ok(consumer) => consumer,
            Err(e) => {
                error!(error = %e, "Response consumer failed to subscribe");
                return;
            }
        };

        while let Some(delivery) = consumer.next().await {
            let delivery = match delivery {
                Ok(delivery) => delivery,
                Err(e) => {
                    error!(error = %e, "Response consumer delivery error");
                    continue;
                }
            };
            let message = match decode_and_ack(delivery).await {
                Ok(message) => message,
                Err(e) => {
                    warn!(error = %e, "Dropping undecodable response");
                    continue;
                }
            };
            if !message.is_response() {
                debug!(routing_key = message.routing_key(), "Ignoring non-response");
                continue;
            }
            if !correlation.complete(message) {
                // Late arrival after its waiter timed out.
                debug!("Dropping unmatched response");
            }
        }
    })
}
