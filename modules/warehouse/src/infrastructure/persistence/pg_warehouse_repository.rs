// PostgreSQL WarehouseRepository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::WarehouseError;
use crate::domain::entities::Warehouse;
use crate::domain::repositories::WarehouseRepository;
use crate::domain::value_objects::WarehouseId;

/// PostgreSQL implementation of WarehouseRepository
pub struct PgWarehouseRepository {
    pool: PgPool,
}

impl PgWarehouseRepository {
    /// Creates a new PgWarehouseRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseRepository for PgWarehouseRepository {
    async fn save(&self, warehouse: &Warehouse) -> Result<(), WarehouseError> {
        sqlx::query(
            r#"
            INSERT INTO warehouses (id, code, name, address, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(warehouse.id().into_uuid())
        .bind(warehouse.code())
        .bind(warehouse.name())
        .bind(warehouse.address())
        .bind(warehouse.is_active())
        .bind(warehouse.created_at())
        .bind(warehouse.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: WarehouseId) -> Result<Option<Warehouse>, WarehouseError> {
        let row = sqlx::query_as::<_, WarehouseRow>(
            r#"
            SELECT id, code, name, address, is_active, created_at, updated_at
            FROM warehouses
            WHERE id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Warehouse::from))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Warehouse>, WarehouseError> {
        let row = sqlx::query_as::<_, WarehouseRow>(
            r#"
            SELECT id, code, name, address, is_active, created_at, updated_at
            FROM warehouses
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Warehouse::from))
    }

    async fn update(&self, warehouse: &Warehouse) -> Result<(), WarehouseError> {
        sqlx::query(
            r#"
            UPDATE warehouses
            SET name = $2, address = $3, is_active = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(warehouse.id().into_uuid())
        .bind(warehouse.name())
        .bind(warehouse.address())
        .bind(warehouse.is_active())
        .bind(warehouse.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_paginated(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<Warehouse>, i64), WarehouseError> {
        let offset = (page - 1) * page_size;

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM warehouses")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, WarehouseRow>(
            r#"
            SELECT id, code, name, address, is_active, created_at, updated_at
            FROM warehouses
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((rows.into_iter().map(Warehouse::from).collect(), count.0))
    }
}

/// Internal row type for mapping warehouse database results
#[derive(sqlx::FromRow)]
struct WarehouseRow {
    id: uuid::Uuid,
    code: String,
    name: String,
    address: Option<String>,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<WarehouseRow> for Warehouse {
    fn from(row: WarehouseRow) -> Self {
        Warehouse::reconstitute(
            WarehouseId::from_uuid(row.id),
            row.code,
            row.name,
            row.address,
            row.is_active,
            row.created_at,
            row.updated_at,
        )
    }
}
