// PostgreSQL adapters for the warehouse module

mod pg_movement_journal_repository;
mod pg_reservation_engine;
mod pg_reservation_log_repository;
mod pg_stock_ledger_repository;
mod pg_transfer_coordinator;
mod pg_warehouse_repository;
mod stock_row;

pub use pg_movement_journal_repository::PgMovementJournalRepository;
pub use pg_reservation_engine::PgReservationEngine;
pub use pg_reservation_log_repository::PgReservationLogRepository;
pub use pg_stock_ledger_repository::PgStockLedgerRepository;
pub use pg_transfer_coordinator::PgTransferCoordinator;
pub use pg_warehouse_repository::PgWarehouseRepository;
