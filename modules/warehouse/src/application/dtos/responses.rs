// Response DTOs for warehouse operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    ReservationLogEntry, StockMovement, StockTransfer, Warehouse, WarehouseStock,
};
use crate::domain::repositories::ReservationGrant;

/// Warehouse details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Warehouse> for WarehouseResponse {
    fn from(warehouse: Warehouse) -> Self {
        Self {
            id: warehouse.id().into_uuid(),
            code: warehouse.code().to_string(),
            name: warehouse.name().to_string(),
            address: warehouse.address().map(str::to_string),
            is_active: warehouse.is_active(),
            created_at: warehouse.created_at(),
            updated_at: warehouse.updated_at(),
        }
    }
}

/// Snapshot of one ledger row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockResponse {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub product_sku: String,
    pub quantity: i32,
    pub reserved_quantity: i32,
    pub available: i32,
    pub updated_at: DateTime<Utc>,
}

impl From<WarehouseStock> for StockResponse {
    fn from(stock: WarehouseStock) -> Self {
        Self {
            warehouse_id: stock.warehouse_id().into_uuid(),
            product_id: stock.product_id().into_uuid(),
            product_sku: stock.product_sku().to_string(),
            quantity: stock.quantity(),
            reserved_quantity: stock.reserved_quantity(),
            available: stock.available(),
            updated_at: stock.updated_at(),
        }
    }
}

/// Result of a successful reserve: the reference plus the row snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationGrantResponse {
    pub reference: String,
    pub stock: StockResponse,
}

impl From<ReservationGrant> for ReservationGrantResponse {
    fn from(grant: ReservationGrant) -> Self {
        Self {
            reference: grant.reference.into_string(),
            stock: grant.stock.into(),
        }
    }
}

/// One reservation log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationLogResponse {
    pub id: Uuid,
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub status: String,
    pub reference: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationLogEntry> for ReservationLogResponse {
    fn from(entry: ReservationLogEntry) -> Self {
        Self {
            id: entry.id().into_uuid(),
            warehouse_id: entry.warehouse_id().into_uuid(),
            product_id: entry.product_id().into_uuid(),
            quantity: entry.quantity(),
            status: entry.status().to_string(),
            reference: entry.reference().to_string(),
            created_at: entry.created_at(),
        }
    }
}

/// One movement journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementResponse {
    pub id: Uuid,
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub product_sku: String,
    pub movement_type: String,
    pub quantity: i32,
    pub reference_type: Option<String>,
    pub reference_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<StockMovement> for MovementResponse {
    fn from(movement: StockMovement) -> Self {
        Self {
            id: movement.id().into_uuid(),
            warehouse_id: movement.warehouse_id().into_uuid(),
            product_id: movement.product_id().into_uuid(),
            product_sku: movement.product_sku().to_string(),
            movement_type: movement.movement_type().to_string(),
            quantity: movement.quantity(),
            reference_type: movement.reference_type().map(str::to_string),
            reference_id: movement.reference_id().map(str::to_string),
            notes: movement.notes().map(str::to_string),
            created_at: movement.created_at(),
        }
    }
}

/// Details of a stock transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResponse {
    pub id: Uuid,
    pub source_warehouse_id: Uuid,
    pub target_warehouse_id: Uuid,
    pub product_id: Uuid,
    pub product_sku: String,
    pub quantity: i32,
    pub status: String,
    pub transfer_reference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StockTransfer> for TransferResponse {
    fn from(transfer: StockTransfer) -> Self {
        Self {
            id: transfer.id().into_uuid(),
            source_warehouse_id: transfer.source_warehouse_id().into_uuid(),
            target_warehouse_id: transfer.target_warehouse_id().into_uuid(),
            product_id: transfer.product_id().into_uuid(),
            product_sku: transfer.product_sku().to_string(),
            quantity: transfer.quantity(),
            status: transfer.status().to_string(),
            transfer_reference: transfer.transfer_reference().to_string(),
            created_at: transfer.created_at(),
            updated_at: transfer.updated_at(),
        }
    }
}
