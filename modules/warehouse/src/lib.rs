// Warehouse module - stock ledger, movement journal, reservations, transfers
//
// Clean Architecture layers:
// - domain: entities, value objects, repository traits
// - application: use cases, DTOs
// - infrastructure: PostgreSQL adapters

pub mod application;
pub mod domain;
pub mod infrastructure;

mod error;

// =============================================================================
// Public API - Re-exports for convenient access
// =============================================================================

// Error type
pub use error::WarehouseError;

// Domain layer
pub use domain::entities::{
    ReservationLogEntry, StockMovement, StockTransfer, Warehouse, WarehouseStock,
};
pub use domain::repositories::{
    MovementJournalRepository, ReservationEngine, ReservationGrant, ReservationLogRepository,
    StockLedgerRepository, TransferCoordinator, WarehouseRepository,
};
pub use domain::value_objects::{
    LogEntryId, MovementId, MovementType, ProductId, ReservationReference, ReservationStatus,
    StockId, TransferId, TransferStatus, WarehouseId,
};

// Application layer
pub use application::dtos::commands::{
    AddStockCommand, CancelReservationCommand, CommitReservationCommand, CreateWarehouseCommand,
    ListMovementsQuery, ListReservationLogsQuery, ListStockQuery, ListWarehousesQuery,
    ReserveStockCommand, TransferStockCommand, UpdateWarehouseCommand,
};
pub use application::dtos::responses::{
    MovementResponse, ReservationGrantResponse, ReservationLogResponse, StockResponse,
    TransferResponse, WarehouseResponse,
};
pub use application::use_cases::{
    AddStockUseCase, CancelReservationUseCase, CommitReservationUseCase, CreateWarehouseUseCase,
    GetStockUseCase, GetWarehouseUseCase, ListMovementsUseCase, ListReservationLogsUseCase,
    ListStockUseCase, ListWarehousesUseCase, ReserveStockUseCase, TransferStockUseCase,
    UpdateWarehouseUseCase,
};

// Infrastructure layer
pub use infrastructure::persistence::{
    PgMovementJournalRepository, PgReservationEngine, PgReservationLogRepository,
    PgStockLedgerRepository, PgTransferCoordinator, PgWarehouseRepository,
};
