// TransferCoordinator trait - atomic two-row stock moves

use async_trait::async_trait;

use crate::WarehouseError;
use crate::domain::entities::StockTransfer;
use crate::domain::value_objects::{ProductId, WarehouseId};

/// Port for moving quantity between two ledger rows.
///
/// Implementations persist the transfer record in `pending` first, then lock
/// both ledger rows ordered by warehouse id (smaller first) so that
/// opposite-direction transfers on the same pair cannot deadlock. An
/// insufficient source marks the transfer `failed` in its own committed
/// write; success moves the quantity, appends the `transfer_out` /
/// `transfer_in` movement pair and completes the record, all in one
/// transaction. Neither row's reserved quantity changes.
#[async_trait]
pub trait TransferCoordinator: Send + Sync {
    async fn transfer(
        &self,
        source_warehouse_id: WarehouseId,
        target_warehouse_id: WarehouseId,
        product_id: ProductId,
        product_sku: &str,
        quantity: i32,
        transfer_reference: String,
    ) -> Result<StockTransfer, WarehouseError>;
}
