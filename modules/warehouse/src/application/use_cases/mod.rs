// Use cases for the warehouse module

mod add_stock_use_case;
mod cancel_reservation_use_case;
mod commit_reservation_use_case;
mod create_warehouse_use_case;
mod get_stock_use_case;
mod get_warehouse_use_case;
mod list_movements_use_case;
mod list_reservation_logs_use_case;
mod list_stock_use_case;
mod list_warehouses_use_case;
mod reserve_stock_use_case;
mod transfer_stock_use_case;
mod update_warehouse_use_case;

pub use add_stock_use_case::AddStockUseCase;
pub use cancel_reservation_use_case::CancelReservationUseCase;
pub use commit_reservation_use_case::CommitReservationUseCase;
pub use create_warehouse_use_case::CreateWarehouseUseCase;
pub use get_stock_use_case::GetStockUseCase;
pub use get_warehouse_use_case::GetWarehouseUseCase;
pub use list_movements_use_case::ListMovementsUseCase;
pub use list_reservation_logs_use_case::ListReservationLogsUseCase;
pub use list_stock_use_case::ListStockUseCase;
pub use list_warehouses_use_case::ListWarehousesUseCase;
pub use reserve_stock_use_case::ReserveStockUseCase;
pub use transfer_stock_use_case::TransferStockUseCase;
pub use update_warehouse_use_case::UpdateWarehouseUseCase;
