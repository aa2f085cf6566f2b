// Correlation table pairing async requests with their responses
//
// Mutex-guarded map keyed by correlation id; each entry has a single writer
// (the consumer loop) and a single reader (the request task). Created at
// service start, dropped at shutdown.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::oneshot;
use uuid::Uuid;

use crate::error::BusError;
use crate::message::InventoryMessage;

/// In-process table from correlation id to the task awaiting the response.
#[derive(Default)]
pub struct CorrelationTable {
    waiters: Mutex<HashMap<Uuid, oneshot::Sender<InventoryMessage>>>,
}

impl CorrelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers interest in a correlation id. Must happen before the
    /// request is published so the response cannot slip past.
    pub fn register(&self, correlation_id: Uuid) -> oneshot::Receiver<InventoryMessage> {
        let (tx, rx) = oneshot::channel();
        let mut waiters = self.waiters.lock().unwrap();
        waiters.insert(correlation_id, tx);
        rx
    }

    /// Delivers a response to its waiter. Returns false when nobody is
    /// waiting (late or duplicate response), which callers log and drop.
    pub fn complete(&self, message: InventoryMessage) -> bool {
        let sender = {
            let mut waiters = self.waiters.lock().unwrap();
            waiters.remove(&message.correlation_id())
        };
        match sender {
            Some(sender) => sender.send(message).is_ok(),
            None => false,
        }
    }

    /// Drops a registration, e.g. after a timeout.
    pub fn forget(&self, correlation_id: Uuid) {
        let mut waiters = self.waiters.lock().unwrap();
        waiters.remove(&correlation_id);
    }

    /// Awaits the response with a bounded wait; the registration is removed
    /// on timeout so the table cannot grow unbounded.
    pub async fn wait(
        &self,
        correlation_id: Uuid,
        rx: oneshot::Receiver<InventoryMessage>,
        timeout: Duration,
    ) -> Result<InventoryMessage, BusError> {
        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(message)) => Ok(message),
            Ok(Err(_)) => {
                self.forget(correlation_id);
                Err(BusError::ResponseChannelClosed)
            }
            Err(_) => {
                self.forget(correlation_id);
                Err(BusError::ResponseTimeout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::message::OperationResponse;

    fn response(correlation_id: Uuid) -> InventoryMessage {
        InventoryMessage::ConfirmResponse(OperationResponse {
            order_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            correlation_id,
            success: true,
            error: None,
        })
    }

    #[tokio::test]
    async fn test_register_complete_round_trip() {
        let table = CorrelationTable::new();
        let correlation_id = Uuid::new_v4();

        let rx = table.register(correlation_id);
        assert!(table.complete(response(correlation_id)));

        let message = table
            .wait(correlation_id, rx, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(message.correlation_id(), correlation_id);
    }

    #[tokio::test]
    async fn test_unmatched_response_is_reported() {
        let table = CorrelationTable::new();
        assert!(!table.complete(response(Uuid::new_v4())));
    }

    #[tokio::test]
    async fn test_wait_times_out_and_cleans_up() {
        let table = CorrelationTable::new();
        let correlation_id = Uuid::new_v4();

        let rx = table.register(correlation_id);
        let result = table
            .wait(correlation_id, rx, Duration::from_millis(10))
            .await;
        assert!(matches!(result, Err(BusError::ResponseTimeout)));

        // The slot is gone; a late response finds no waiter.
        assert!(!table.complete(response(correlation_id)));
    }
}
