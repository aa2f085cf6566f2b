// PostgreSQL OrderReservationRepository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::OrderError;
use crate::domain::entities::OrderReservation;
use crate::domain::repositories::OrderReservationRepository;
use crate::domain::value_objects::{OrderId, OrderReservationId};

/// PostgreSQL implementation of OrderReservationRepository.
/// The expiry sweeps rely on the range indexes over (expires_at, is_active).
pub struct PgOrderReservationRepository {
    pool: PgPool,
}

impl PgOrderReservationRepository {
    /// Creates a new PgOrderReservationRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderReservationRepository for PgOrderReservationRepository {
    async fn find_active_by_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderReservation>, OrderError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT id, order_id, product_id, warehouse_id, quantity,
                   reference, expires_at, is_active, created_at, updated_at
            FROM stock_reservations
            WHERE order_id = $1 AND is_active = TRUE
            ORDER BY id
            "#,
        )
        .bind(order_id.into_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderReservation::from).collect())
    }

    async fn find_expired_active(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<OrderReservation>, OrderError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT id, order_id, product_id, warehouse_id, quantity,
                   reference, expires_at, is_active, created_at, updated_at
            FROM stock_reservations
            WHERE is_active = TRUE AND expires_at < $1
            ORDER BY expires_at
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderReservation::from).collect())
    }

    async fn deactivate(&self, id: OrderReservationId) -> Result<(), OrderError> {
        sqlx::query(
            r#"
            UPDATE stock_reservations
            SET is_active = FALSE, updated_at = $2
            WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(id.into_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Internal row type for mapping stock_reservations database results
#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: uuid::Uuid,
    order_id: uuid::Uuid,
    product_id: uuid::Uuid,
    warehouse_id: uuid::Uuid,
    quantity: i32,
    reference: String,
    expires_at: DateTime<Utc>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReservationRow> for OrderReservation {
    fn from(row: ReservationRow) -> Self {
        OrderReservation::reconstitute(
            OrderReservationId::from_uuid(row.id),
            OrderId::from_uuid(row.order_id),
            row.product_id,
            row.warehouse_id,
            row.quantity,
            row.reference,
            row.expires_at,
            row.is_active,
            row.created_at,
            row.updated_at,
        )
    }
}
