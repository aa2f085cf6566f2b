// WarehouseRepository trait - persistence port for warehouses

use async_trait::async_trait;

use crate::WarehouseError;
use crate::domain::entities::Warehouse;
use crate::domain::value_objects::WarehouseId;

/// Repository trait for Warehouse persistence operations.
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// Saves a new warehouse
    async fn save(&self, warehouse: &Warehouse) -> Result<(), WarehouseError>;

    /// Finds a warehouse by its unique ID
    async fn find_by_id(&self, id: WarehouseId) -> Result<Option<Warehouse>, WarehouseError>;

    /// Finds a warehouse by its unique code
    async fn find_by_code(&self, code: &str) -> Result<Option<Warehouse>, WarehouseError>;

    /// Persists updated display attributes and the active flag
    async fn update(&self, warehouse: &Warehouse) -> Result<(), WarehouseError>;

    /// Lists warehouses with pagination. Returns (warehouses, total_count)
    async fn find_paginated(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<Warehouse>, i64), WarehouseError>;
}
