// OrderStatus enum - workflow status for orders

use crate::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status of an order.
///
/// A `Pending` order owns zero or more live reservations; once it leaves
/// `Pending` none may remain live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting for payment; holds live reservations
    Pending,
    /// Payment confirmed; reservations committed at the warehouse
    Paid,
    /// Abandoned or rejected; reservations released
    Cancelled,
    /// Fulfilled
    Completed,
}

impl OrderStatus {
    /// Returns all available order statuses
    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Cancelled,
            OrderStatus::Completed,
        ]
    }

    /// Returns true if the order is in a final state
    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Completed)
    }

    /// Validates transition from current status to new status
    pub fn can_transition_to(&self, new_status: OrderStatus) -> bool {
        matches!(
            (self, new_status),
            (OrderStatus::Pending, OrderStatus::Paid)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Paid, OrderStatus::Completed)
        )
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(OrderError::InvalidOrderStatusValue),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(OrderStatus::from_str("pending").unwrap(), OrderStatus::Pending);
        assert_eq!(OrderStatus::from_str("paid").unwrap(), OrderStatus::Paid);
        assert_eq!(OrderStatus::from_str("cancelled").unwrap(), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::from_str("canceled").unwrap(), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::from_str("completed").unwrap(), OrderStatus::Completed);
    }

    #[test]
    fn test_invalid_value() {
        assert!(matches!(
            OrderStatus::from_str("shipped"),
            Err(OrderError::InvalidOrderStatusValue)
        ));
    }

    #[test]
    fn test_valid_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Paid));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Paid.can_transition_to(OrderStatus::Completed));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
        assert!(!OrderStatus::Paid.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Paid));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn test_is_final() {
        assert!(!OrderStatus::Pending.is_final());
        assert!(!OrderStatus::Paid.is_final());
        assert!(OrderStatus::Cancelled.is_final());
        assert!(OrderStatus::Completed.is_final());
    }
}
