// Repository traits (ports) for the warehouse module

mod movement_journal_repository;
mod reservation_engine;
mod reservation_log_repository;
mod stock_ledger_repository;
mod transfer_coordinator;
mod warehouse_repository;

pub use movement_journal_repository::MovementJournalRepository;
pub use reservation_engine::{ReservationEngine, ReservationGrant};
pub use reservation_log_repository::ReservationLogRepository;
pub use stock_ledger_repository::StockLedgerRepository;
pub use transfer_coordinator::TransferCoordinator;
pub use warehouse_repository::WarehouseRepository;
