// Command DTOs for warehouse operations
//
// Commands use primitive types (String, Uuid, i32) rather than domain value
// objects to keep the application boundary clean; validation happens in the
// use cases.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Warehouse Commands
// =============================================================================

/// Command to create a new warehouse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWarehouseCommand {
    /// Unique warehouse code (alphanumeric with hyphens)
    pub code: String,
    /// Display name
    pub name: String,
    /// Optional street address
    pub address: Option<String>,
}

/// Command to update an existing warehouse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWarehouseCommand {
    /// New name (if changing)
    pub name: Option<String>,
    /// New address (if changing)
    pub address: Option<String>,
    /// New active status (if changing)
    pub is_active: Option<bool>,
}

// =============================================================================
// Stock Commands
// =============================================================================

/// Command to receive stock into a warehouse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddStockCommand {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    /// SKU snapshot recorded on the ledger row and journal entry
    pub product_sku: String,
    pub quantity: i32,
    /// External document backing the stock-in (e.g. a purchase order number)
    pub reference: Option<String>,
    pub notes: Option<String>,
}

/// Command to reserve stock for a caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveStockCommand {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Command to commit a pending reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitReservationCommand {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Reference returned by the original reserve
    pub reference: String,
}

/// Command to cancel a pending reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelReservationCommand {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Reference returned by the original reserve
    pub reference: String,
}

/// Command to move stock between warehouses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferStockCommand {
    pub source_warehouse_id: Uuid,
    pub target_warehouse_id: Uuid,
    pub product_id: Uuid,
    pub product_sku: String,
    pub quantity: i32,
    /// Caller-supplied reference; generated when absent
    pub reference: Option<String>,
}

// =============================================================================
// Queries
// =============================================================================

/// Query for listing ledger rows of a warehouse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListStockQuery {
    pub warehouse_id: Uuid,
    pub product_id: Option<Uuid>,
    pub page: i64,
    pub page_size: i64,
}

/// Query for reservation history of a ledger row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListReservationLogsQuery {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub page: i64,
    pub page_size: i64,
}

/// Query for movement history of a ledger row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMovementsQuery {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub page: i64,
    pub page_size: i64,
}

/// Query for listing warehouses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWarehousesQuery {
    pub page: i64,
    pub page_size: i64,
}
