// ReservationReference value object - shared identifier of a logical reservation

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProductId, WarehouseId};

/// Length of the random suffix disambiguating same-second references.
const SUFFIX_LEN: usize = 6;

/// Identifier shared between the warehouse ledger and the order service for
/// one logical reservation across its state transitions.
///
/// Format: `RSV-{warehouse_id}-{product_id}-{unix_seconds}-{suffix}`. The
/// suffix keeps two reservations taken in the same second on the same row
/// from colliding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationReference(String);

impl ReservationReference {
    /// Generates a fresh reference for a ledger row.
    pub fn generate(warehouse_id: WarehouseId, product_id: ProductId) -> Self {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect();
        Self(format!(
            "RSV-{}-{}-{}-{}",
            warehouse_id.into_uuid(),
            product_id.into_uuid(),
            chrono::Utc::now().timestamp(),
            suffix,
        ))
    }

    /// Wraps a reference echoed back by a caller.
    pub fn from_string(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ReservationReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_embeds_row_identity() {
        let warehouse_id = WarehouseId::new();
        let product_id = ProductId::new();

        let reference = ReservationReference::generate(warehouse_id, product_id);

        assert!(reference.as_str().starts_with("RSV-"));
        assert!(reference.as_str().contains(&warehouse_id.into_uuid().to_string()));
        assert!(reference.as_str().contains(&product_id.into_uuid().to_string()));
    }

    #[test]
    fn test_same_second_references_do_not_collide() {
        let warehouse_id = WarehouseId::new();
        let product_id = ProductId::new();

        let a = ReservationReference::generate(warehouse_id, product_id);
        let b = ReservationReference::generate(warehouse_id, product_id);

        assert_ne!(a, b);
    }

    #[test]
    fn test_round_trip_through_string() {
        let reference = ReservationReference::from_string("RSV-custom");
        assert_eq!(reference.as_str(), "RSV-custom");
        assert_eq!(reference.to_string(), "RSV-custom");
    }
}
