// PostgreSQL OrderRepository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::str::FromStr;

use crate::OrderError;
use crate::domain::entities::{Order, OrderItem, OrderReservation};
use crate::domain::repositories::OrderRepository;
use crate::domain::value_objects::{OrderId, OrderItemId, OrderStatus};

/// PostgreSQL implementation of OrderRepository
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Creates a new PgOrderRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, OrderError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, order_id, product_id, warehouse_id, quantity, unit_price
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(order_id.into_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderItem::from).collect())
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn save_with_reservations(
        &self,
        order: &Order,
        reservations: &[OrderReservation],
    ) -> Result<(), OrderError> {
        // One transaction for the order, its items and the mirror rows.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                id, user_id, status, total_amount, payment_deadline, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(order.id().into_uuid())
        .bind(order.user_id())
        .bind(order.status().to_string())
        .bind(order.total_amount())
        .bind(order.payment_deadline())
        .bind(order.created_at())
        .bind(order.updated_at())
        .execute(&mut *tx)
        .await?;

        for item in order.items() {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    id, order_id, product_id, warehouse_id, quantity, unit_price
                )
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(item.id().into_uuid())
            .bind(item.order_id().into_uuid())
            .bind(item.product_id())
            .bind(item.warehouse_id())
            .bind(item.quantity())
            .bind(item.unit_price())
            .execute(&mut *tx)
            .await?;
        }

        for reservation in reservations {
            sqlx::query(
                r#"
                INSERT INTO stock_reservations (
                    id, order_id, product_id, warehouse_id, quantity,
                    reference, expires_at, is_active, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(reservation.id().into_uuid())
            .bind(reservation.order_id().into_uuid())
            .bind(reservation.product_id())
            .bind(reservation.warehouse_id())
            .bind(reservation.quantity())
            .bind(reservation.reference())
            .bind(reservation.expires_at())
            .bind(reservation.is_active())
            .bind(reservation.created_at())
            .bind(reservation.updated_at())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, status, total_amount, payment_deadline, created_at, updated_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let items = self.load_items(id).await?;
                Ok(Some(row.into_order(items)?))
            }
            None => Ok(None),
        }
    }

    async fn update_status(&self, order: &Order) -> Result<(), OrderError> {
        sqlx::query("UPDATE orders SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(order.id().into_uuid())
            .bind(order.status().to_string())
            .bind(order.updated_at())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_status_deactivating_reservations(
        &self,
        order: &Order,
    ) -> Result<(), OrderError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE orders SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(order.id().into_uuid())
            .bind(order.status().to_string())
            .bind(order.updated_at())
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            UPDATE stock_reservations
            SET is_active = FALSE, updated_at = $2
            WHERE order_id = $1 AND is_active = TRUE
            "#,
        )
        .bind(order.id().into_uuid())
        .bind(order.updated_at())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_expired_pending(&self, now: DateTime<Utc>) -> Result<Vec<Order>, OrderError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, status, total_amount, payment_deadline, created_at, updated_at
            FROM orders
            WHERE status = 'pending' AND payment_deadline < $1
            ORDER BY payment_deadline
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let items = self.load_items(OrderId::from_uuid(row.id)).await?;
            orders.push(row.into_order(items)?);
        }

        Ok(orders)
    }
}

/// Internal row type for mapping orders database results
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: uuid::Uuid,
    user_id: uuid::Uuid,
    status: String,
    total_amount: Decimal,
    payment_deadline: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        Ok(Order::reconstitute(
            OrderId::from_uuid(self.id),
            self.user_id,
            OrderStatus::from_str(&self.status)?,
            self.total_amount,
            self.payment_deadline,
            items,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Internal row type for mapping order_items database results
#[derive(sqlx::FromRow)]
struct ItemRow {
    id: uuid::Uuid,
    order_id: uuid::Uuid,
    product_id: uuid::Uuid,
    warehouse_id: uuid::Uuid,
    quantity: i32,
    unit_price: Decimal,
}

impl From<ItemRow> for OrderItem {
    fn from(row: ItemRow) -> Self {
        OrderItem::reconstitute(
            OrderItemId::from_uuid(row.id),
            OrderId::from_uuid(row.order_id),
            row.product_id,
            row.warehouse_id,
            row.quantity,
            row.unit_price,
        )
    }
}
