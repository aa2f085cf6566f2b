// MovementType enum - kinds of journaled quantity changes

use crate::WarehouseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of physical quantity change recorded in the movement journal.
/// Reservations do not produce movements; only changes to `quantity` do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    /// Stock received into a warehouse
    StockIn,
    /// Stock removed (committed reservation)
    StockOut,
    /// Stock arriving from another warehouse
    TransferIn,
    /// Stock leaving for another warehouse
    TransferOut,
}

impl MovementType {
    /// Returns all available movement types
    pub fn all() -> &'static [MovementType] {
        &[
            MovementType::StockIn,
            MovementType::StockOut,
            MovementType::TransferIn,
            MovementType::TransferOut,
        ]
    }

    /// Returns true if this movement type increases quantity
    pub fn is_inbound(&self) -> bool {
        matches!(self, MovementType::StockIn | MovementType::TransferIn)
    }

    /// Returns true if this movement type decreases quantity
    pub fn is_outbound(&self) -> bool {
        matches!(self, MovementType::StockOut | MovementType::TransferOut)
    }
}

impl FromStr for MovementType {
    type Err = WarehouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "stock_in" | "stockin" | "in" => Ok(MovementType::StockIn),
            "stock_out" | "stockout" | "out" => Ok(MovementType::StockOut),
            "transfer_in" | "transferin" => Ok(MovementType::TransferIn),
            "transfer_out" | "transferout" => Ok(MovementType::TransferOut),
            _ => Err(WarehouseError::InvalidMovementType),
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementType::StockIn => write!(f, "stock_in"),
            MovementType::StockOut => write!(f, "stock_out"),
            MovementType::TransferIn => write!(f, "transfer_in"),
            MovementType::TransferOut => write!(f, "transfer_out"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(MovementType::from_str("stock_in").unwrap(), MovementType::StockIn);
        assert_eq!(MovementType::from_str("stock_out").unwrap(), MovementType::StockOut);
        assert_eq!(MovementType::from_str("transfer_in").unwrap(), MovementType::TransferIn);
        assert_eq!(MovementType::from_str("transfer_out").unwrap(), MovementType::TransferOut);
    }

    #[test]
    fn test_invalid() {
        let result = MovementType::from_str("adjustment");
        assert!(matches!(result, Err(WarehouseError::InvalidMovementType)));
    }

    #[test]
    fn test_display() {
        assert_eq!(MovementType::StockIn.to_string(), "stock_in");
        assert_eq!(MovementType::TransferOut.to_string(), "transfer_out");
    }

    #[test]
    fn test_direction() {
        assert!(MovementType::StockIn.is_inbound());
        assert!(MovementType::TransferIn.is_inbound());
        assert!(MovementType::StockOut.is_outbound());
        assert!(MovementType::TransferOut.is_outbound());
        assert!(!MovementType::StockOut.is_inbound());
    }
}
