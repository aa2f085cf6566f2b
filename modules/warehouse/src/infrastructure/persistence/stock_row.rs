// Shared row mapping for warehouse_stock query results

use crate::WarehouseError;
use crate::domain::entities::WarehouseStock;
use crate::domain::value_objects::{ProductId, StockId, WarehouseId};

/// Internal row type for mapping warehouse_stock database results
#[derive(sqlx::FromRow)]
pub(crate) struct StockRow {
    pub id: uuid::Uuid,
    pub warehouse_id: uuid::Uuid,
    pub product_id: uuid::Uuid,
    pub product_sku: String,
    pub quantity: i32,
    pub reserved_quantity: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<StockRow> for WarehouseStock {
    type Error = WarehouseError;

    fn try_from(row: StockRow) -> Result<Self, Self::Error> {
        WarehouseStock::reconstitute(
            StockId::from_uuid(row.id),
            WarehouseId::from_uuid(row.warehouse_id),
            ProductId::from_uuid(row.product_id),
            row.product_sku,
            row.quantity,
            row.reserved_quantity,
            row.created_at,
            row.updated_at,
        )
    }
}

/// Column list shared by every warehouse_stock SELECT.
pub(crate) const STOCK_COLUMNS: &str =
    "id, warehouse_id, product_id, product_sku, quantity, reserved_quantity, created_at, updated_at";
