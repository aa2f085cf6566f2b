// ReservationStatus enum - state of a logical reservation

use crate::WarehouseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// State recorded for one reservation log entry.
/// `Committed` and `Cancelled` are absorbing; a reference whose latest entry
/// is terminal accepts no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Stock is held for the caller
    Pending,
    /// Held stock was converted into a stock-out
    Committed,
    /// Held stock was returned to availability
    Cancelled,
}

impl ReservationStatus {
    /// Returns all available reservation statuses
    pub fn all() -> &'static [ReservationStatus] {
        &[
            ReservationStatus::Pending,
            ReservationStatus::Committed,
            ReservationStatus::Cancelled,
        ]
    }

    /// Returns true if the status is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::Committed | ReservationStatus::Cancelled)
    }
}

impl FromStr for ReservationStatus {
    type Err = WarehouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ReservationStatus::Pending),
            "committed" | "confirmed" => Ok(ReservationStatus::Committed),
            "cancelled" | "canceled" => Ok(ReservationStatus::Cancelled),
            _ => Err(WarehouseError::InvalidReservationStatus),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Pending => write!(f, "pending"),
            ReservationStatus::Committed => write!(f, "committed"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(ReservationStatus::from_str("pending").unwrap(), ReservationStatus::Pending);
        assert_eq!(ReservationStatus::from_str("committed").unwrap(), ReservationStatus::Committed);
        assert_eq!(ReservationStatus::from_str("cancelled").unwrap(), ReservationStatus::Cancelled);
        assert_eq!(ReservationStatus::from_str("canceled").unwrap(), ReservationStatus::Cancelled);
    }

    #[test]
    fn test_invalid() {
        let result = ReservationStatus::from_str("expired");
        assert!(matches!(result, Err(WarehouseError::InvalidReservationStatus)));
    }

    #[test]
    fn test_is_terminal() {
        assert!(!ReservationStatus::Pending.is_terminal());
        assert!(ReservationStatus::Committed.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(ReservationStatus::Pending.to_string(), "pending");
        assert_eq!(ReservationStatus::Committed.to_string(), "committed");
    }
}
