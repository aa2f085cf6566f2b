// Inventory message model
//
// JSON bodies on a topic exchange. The `type` field is the discriminator;
// deserialization dispatches on it. Every message carries `order_id`,
// `timestamp` and `correlation_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Binding pattern matching every response topic.
pub const RESPONSE_BINDING: &str = "inventory.*.response";

/// Binding pattern matching every request topic (one word after the prefix,
/// so responses do not match).
pub const REQUEST_BINDING: &str = "inventory.*";

/// One line of a reserve request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveItem {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

/// One line of a confirm request; the reference echoes the reserve response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmItem {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub reference: String,
}

/// Reserve request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveRequest {
    pub order_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub items: Vec<ReserveItem>,
    pub reserve_until: DateTime<Utc>,
}

/// Confirm request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub order_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub items: Vec<ConfirmItem>,
}

/// Release request payload. Every field is required; releases are always
/// built from the actual order line, never from defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseRequest {
    pub order_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub reference: String,
}

/// Per-line outcome of a reserve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveResponseItem {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Whether the line could be reserved.
    pub available: bool,
    /// Warehouse reference for the line when `available`.
    pub reference: Option<String>,
}

/// Reserve response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveResponse {
    pub order_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub success: bool,
    pub reservation_id: Option<Uuid>,
    pub items: Vec<ReserveResponseItem>,
}

/// Confirm/release response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResponse {
    pub order_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub success: bool,
    pub error: Option<String>,
}

/// All messages exchanged between the order and warehouse services.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InventoryMessage {
    #[serde(rename = "inventory.reserve")]
    Reserve(ReserveRequest),
    #[serde(rename = "inventory.confirm")]
    Confirm(ConfirmRequest),
    #[serde(rename = "inventory.release")]
    Release(ReleaseRequest),
    #[serde(rename = "inventory.reserve.response")]
    ReserveResponse(ReserveResponse),
    #[serde(rename = "inventory.confirm.response")]
    ConfirmResponse(OperationResponse),
    #[serde(rename = "inventory.release.response")]
    ReleaseResponse(OperationResponse),
}

impl InventoryMessage {
    /// Correlation id pairing a request with its response.
    pub fn correlation_id(&self) -> Uuid {
        match self {
            InventoryMessage::Reserve(m) => m.correlation_id,
            InventoryMessage::Confirm(m) => m.correlation_id,
            InventoryMessage::Release(m) => m.correlation_id,
            InventoryMessage::ReserveResponse(m) => m.correlation_id,
            InventoryMessage::ConfirmResponse(m) => m.correlation_id,
            InventoryMessage::ReleaseResponse(m) => m.correlation_id,
        }
    }

    /// Routing key the message is published under; equals its `type` tag.
    pub fn routing_key(&self) -> &'static str {
        match self {
            InventoryMessage::Reserve(_) => "inventory.reserve",
            InventoryMessage::Confirm(_) => "inventory.confirm",
            InventoryMessage::Release(_) => "inventory.release",
            InventoryMessage::ReserveResponse(_) => "inventory.reserve.response",
            InventoryMessage::ConfirmResponse(_) => "inventory.confirm.response",
            InventoryMessage::ReleaseResponse(_) => "inventory.release.response",
        }
    }

    /// Returns true for response messages.
    pub fn is_response(&self) -> bool {
        matches!(
            self,
            InventoryMessage::ReserveResponse(_)
                | InventoryMessage::ConfirmResponse(_)
                | InventoryMessage::ReleaseResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserve_message() -> InventoryMessage {
        InventoryMessage::Reserve(ReserveRequest {
            order_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            correlation_id: Uuid::new_v4(),
            items: vec![ReserveItem {
                warehouse_id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
                quantity: 2,
            }],
            reserve_until: Utc::now(),
        })
    }

    #[test]
    fn test_type_tag_round_trip() {
        let message = reserve_message();
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"type\":\"inventory.reserve\""));

        let parsed: InventoryMessage = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, InventoryMessage::Reserve(_)));
        assert_eq!(parsed.correlation_id(), message.correlation_id());
    }

    #[test]
    fn test_routing_key_matches_tag() {
        let message = reserve_message();
        assert_eq!(message.routing_key(), "inventory.reserve");
        assert!(!message.is_response());

        let response = InventoryMessage::ReleaseResponse(OperationResponse {
            order_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            correlation_id: Uuid::new_v4(),
            success: true,
            error: None,
        });
        assert_eq!(response.routing_key(), "inventory.release.response");
        assert!(response.is_response());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{"type":"inventory.unknown","order_id":"00000000-0000-0000-0000-000000000000"}"#;
        let parsed: Result<InventoryMessage, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
