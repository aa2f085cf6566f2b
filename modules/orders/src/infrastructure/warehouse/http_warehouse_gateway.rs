// HTTP WarehouseGateway implementation
//
// Talks to the warehouse service's REST surface. Transient failures
// (connect errors, timeouts, 5xx) are retried with a fixed delay; business
// rejections are surfaced immediately.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use common::ApiResponse;

use crate::OrderError;
use crate::domain::services::{ReservationLine, WarehouseGateway};

/// Error code the warehouse uses for an oversell rejection.
const INSUFFICIENT_STOCK_CODE: &str = "INSUFFICIENT_STOCK";

/// Configuration for the warehouse HTTP client.
#[derive(Debug, Clone)]
pub struct WarehouseClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for WarehouseClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// HTTP implementation of WarehouseGateway
pub struct HttpWarehouseGateway {
    client: reqwest::Client,
    config: WarehouseClientConfig,
}

#[derive(Serialize)]
struct ReserveBody {
    warehouse_id: Uuid,
    product_id: Uuid,
    quantity: i32,
}

#[derive(Serialize)]
struct ReferenceBody {
    warehouse_id: Uuid,
    product_id: Uuid,
    quantity: i32,
    reference: String,
}

#[derive(Deserialize)]
struct GrantBody {
    reference: String,
}

impl HttpWarehouseGateway {
    pub fn new(config: WarehouseClientConfig) -> Result<Self, OrderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OrderError::WarehouseUnavailable(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Posts a JSON body, retrying transient failures.
    async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, OrderError> {
        let url = format!("{}{}", self.config.base_url, path);
        let mut attempt = 0;
        loop {
            let result = self
                .client
                .post(&url)
                .header("X-API-Key", &self.config.api_key)
                .json(body)
                .send()
                .await;

            match result {
                Ok(response) if response.status().is_server_error() => {
                    if attempt >= self.config.max_retries {
                        return Err(OrderError::WarehouseError(format!(
                            "{} returned {}",
                            path,
                            response.status()
                        )));
                    }
                }
                Ok(response) => return Ok(response),
                Err(e) => {
                    if attempt >= self.config.max_retries {
                        return Err(OrderError::WarehouseUnavailable(e.to_string()));
                    }
                }
            }

            attempt += 1;
            debug!(path, attempt, "Retrying warehouse call");
            tokio::time::sleep(self.config.retry_delay).await;
        }
    }

    /// Extracts the envelope, turning error codes into domain errors.
    async fn read_envelope<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, OrderError> {
        let status = response.status();
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| OrderError::WarehouseError(format!("malformed response: {e}")))?;

        if envelope.success {
            return envelope
                .data
                .ok_or_else(|| OrderError::WarehouseError("empty success envelope".to_string()));
        }

        let error = envelope.error.ok_or_else(|| {
            OrderError::WarehouseError(format!("unexplained failure ({status})"))
        })?;
        if error.code == INSUFFICIENT_STOCK_CODE {
            Err(OrderError::InsufficientStock)
        } else {
            Err(OrderError::ReservationRejected(error.message))
        }
    }
}

#[async_trait]
impl WarehouseGateway for HttpWarehouseGateway {
    async fn reserve(
        &self,
        _order_id: Uuid,
        warehouse_id: Uuid,
        product_id: Uuid,
        quantity: i32,
        _reserve_until: DateTime<Utc>,
    ) -> Result<String, OrderError> {
        let response = self
            .post(
                "/inventory/reserve",
                &ReserveBody {
                    warehouse_id,
                    product_id,
                    quantity,
                },
            )
            .await?;
        let grant: GrantBody = self.read_envelope(response).await?;
        Ok(grant.reference)
    }

    async fn commit(&self, line: &ReservationLine) -> Result<(), OrderError> {
        let response = self
            .post(
                "/inventory/reserve/commit",
                &ReferenceBody {
                    warehouse_id: line.warehouse_id,
                    product_id: line.product_id,
                    quantity: line.quantity,
                    reference: line.reference.clone(),
                },
            )
            .await?;
        self.read_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }

    async fn release(&self, line: &ReservationLine) -> Result<(), OrderError> {
        let response = self
            .post(
                "/inventory/reserve/cancel",
                &ReferenceBody {
                    warehouse_id: line.warehouse_id,
                    product_id: line.product_id,
                    quantity: line.quantity,
                    reference: line.reference.clone(),
                },
            )
            .await
            .map_err(|e| {
                warn!(reference = %line.reference, error = %e, "Release transport failed");
                e
            })?;
        self.read_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }
}
