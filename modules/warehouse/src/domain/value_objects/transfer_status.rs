// TransferStatus enum - lifecycle of an inter-warehouse transfer

use crate::WarehouseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a stock transfer. Created `Pending`, transitions once
/// to either terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    Completed,
    Failed,
}

impl TransferStatus {
    /// Returns all available transfer statuses
    pub fn all() -> &'static [TransferStatus] {
        &[
            TransferStatus::Pending,
            TransferStatus::Completed,
            TransferStatus::Failed,
        ]
    }

    /// Returns true if the transfer reached a final state
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferStatus::Completed | TransferStatus::Failed)
    }
}

impl FromStr for TransferStatus {
    type Err = WarehouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TransferStatus::Pending),
            "completed" | "complete" => Ok(TransferStatus::Completed),
            "failed" => Ok(TransferStatus::Failed),
            _ => Err(WarehouseError::InvalidTransferStatus),
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferStatus::Pending => write!(f, "pending"),
            TransferStatus::Completed => write!(f, "completed"),
            TransferStatus::Failed => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(TransferStatus::from_str("pending").unwrap(), TransferStatus::Pending);
        assert_eq!(TransferStatus::from_str("completed").unwrap(), TransferStatus::Completed);
        assert_eq!(TransferStatus::from_str("failed").unwrap(), TransferStatus::Failed);
    }

    #[test]
    fn test_is_terminal() {
        assert!(!TransferStatus::Pending.is_terminal());
        assert!(TransferStatus::Completed.is_terminal());
        assert!(TransferStatus::Failed.is_terminal());
    }
}
