// Order entity - one purchase with its line items

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::OrderError;
use crate::domain::entities::OrderItem;
use crate::domain::value_objects::{OrderId, OrderStatus};

/// How long a pending order may wait for payment.
const PAYMENT_WINDOW_HOURS: i64 = 24;

/// Order entity. Owns its line items; local reservation rows reference the
/// order by id and are loaded on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: Uuid,
    status: OrderStatus,
    total_amount: Decimal,
    payment_deadline: DateTime<Utc>,
    items: Vec<OrderItem>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Input line for order creation.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product_id: Uuid,
    pub warehouse_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl Order {
    /// Creates a new pending order with a 24 h payment deadline. Requires a
    /// non-empty item list; every line is validated.
    pub fn create(user_id: Uuid, lines: Vec<OrderLine>) -> Result<Self, OrderError> {
        if lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let id = OrderId::new();
        let items = lines
            .into_iter()
            .map(|line| {
                OrderItem::create(
                    id,
                    line.product_id,
                    line.warehouse_id,
                    line.quantity,
                    line.unit_price,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total_amount = items.iter().map(OrderItem::subtotal).sum();
        let now = Utc::now();

        Ok(Self {
            id,
            user_id,
            status: OrderStatus::Pending,
            total_amount,
            payment_deadline: now + Duration::hours(PAYMENT_WINDOW_HOURS),
            items,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes an Order from persistence
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: OrderId,
        user_id: Uuid,
        status: OrderStatus,
        total_amount: Decimal,
        payment_deadline: DateTime<Utc>,
        items: Vec<OrderItem>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            status,
            total_amount,
            payment_deadline,
            items,
            created_at,
            updated_at,
        }
    }

    /// Transitions to a new status, rejecting anything outside the workflow.
    pub fn transition_to(&mut self, new_status: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(new_status) {
            return Err(OrderError::InvalidOrderStatus);
        }
        self.status = new_status;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Marks the order paid (pending only).
    pub fn mark_paid(&mut self) -> Result<(), OrderError> {
        self.transition_to(OrderStatus::Paid)
    }

    /// Cancels the order (pending only).
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.transition_to(OrderStatus::Cancelled)
    }

    /// Completes the order (paid only).
    pub fn complete(&mut self) -> Result<(), OrderError> {
        self.transition_to(OrderStatus::Completed)
    }

    /// Returns true when the payment deadline has passed for a pending order.
    pub fn is_payment_expired(&self, now: DateTime<Utc>) -> bool {
        self.status == OrderStatus::Pending && self.payment_deadline < now
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn payment_deadline(&self) -> DateTime<Utc> {
        self.payment_deadline
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
