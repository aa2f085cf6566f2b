// Application state for sharing dependencies across handlers
//
// Holds Arc-wrapped PostgreSQL adapters and the warehouse gateway chosen at
// startup (HTTP or AMQP). Handlers construct use cases from these on demand.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use orders::{
    AmqpWarehouseGateway, HttpWarehouseGateway, OrderError, PgOrderRepository,
    PgOrderReservationRepository, ReservationLine, WarehouseGateway,
};
use warehouse::{
    PgMovementJournalRepository, PgReservationEngine, PgReservationLogRepository,
    PgStockLedgerRepository, PgTransferCoordinator, PgWarehouseRepository,
};

/// Warehouse gateway selected by deployment configuration. Both transports
/// are behaviorally equivalent at the engine.
pub enum AnyWarehouseGateway {
    Http(HttpWarehouseGateway),
    Amqp(AmqpWarehouseGateway),
}

#[async_trait]
impl WarehouseGateway for AnyWarehouseGateway {
    async fn reserve(
        &self,
        order_id: Uuid,
        warehouse_id: Uuid,
        product_id: Uuid,
        quantity: i32,
        reserve_until: DateTime<Utc>,
    ) -> Result<String, OrderError> {
        match self {
            AnyWarehouseGateway::Http(gateway) => {
                gateway
                    .reserve(order_id, warehouse_id, product_id, quantity, reserve_until)
                    .await
            }
            AnyWarehouseGateway::Amqp(gateway) => {
                gateway
                    .reserve(order_id, warehouse_id, product_id, quantity, reserve_until)
                    .await
            }
        }
    }

    async fn commit(&self, line: &ReservationLine) -> Result<(), OrderError> {
        match self {
            AnyWarehouseGateway::Http(gateway) => gateway.commit(line).await,
            AnyWarehouseGateway::Amqp(gateway) => gateway.commit(line).await,
        }
    }

    async fn release(&self, line: &ReservationLine) -> Result<(), OrderError> {
        match self {
            AnyWarehouseGateway::Http(gateway) => gateway.release(line).await,
            AnyWarehouseGateway::Amqp(gateway) => gateway.release(line).await,
        }
    }
}

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    // Warehouse side
    warehouse_repo: Arc<PgWarehouseRepository>,
    ledger_repo: Arc<PgStockLedgerRepository>,
    movement_repo: Arc<PgMovementJournalRepository>,
    reservation_log_repo: Arc<PgReservationLogRepository>,
    reservation_engine: Arc<PgReservationEngine>,
    transfer_coordinator: Arc<PgTransferCoordinator>,
    // Order side
    order_repo: Arc<PgOrderRepository>,
    order_reservation_repo: Arc<PgOrderReservationRepository>,
    warehouse_gateway: Arc<AnyWarehouseGateway>,
    // Auth
    api_key: Arc<String>,
}

impl AppState {
    /// Builds the state from a connection pool and the configured gateway.
    pub fn new(pool: PgPool, warehouse_gateway: AnyWarehouseGateway, api_key: String) -> Self {
        Self {
            warehouse_repo: Arc::new(PgWarehouseRepository::new(pool.clone())),
            ledger_repo: Arc::new(PgStockLedgerRepository::new(pool.clone())),
            movement_repo: Arc::new(PgMovementJournalRepository::new(pool.clone())),
            reservation_log_repo: Arc::new(PgReservationLogRepository::new(pool.clone())),
            reservation_engine: Arc::new(PgReservationEngine::new(pool.clone())),
            transfer_coordinator: Arc::new(PgTransferCoordinator::new(pool.clone())),
            order_repo: Arc::new(PgOrderRepository::new(pool.clone())),
            order_reservation_repo: Arc::new(PgOrderReservationRepository::new(pool)),
            warehouse_gateway: Arc::new(warehouse_gateway),
            api_key: Arc::new(api_key),
        }
    }

    pub fn warehouse_repo(&self) -> Arc<PgWarehouseRepository> {
        self.warehouse_repo.clone()
    }

    pub fn ledger_repo(&self) -> Arc<PgStockLedgerRepository> {
        self.ledger_repo.clone()
    }

    pub fn movement_repo(&self) -> Arc<PgMovementJournalRepository> {
        self.movement_repo.clone()
    }

    pub fn reservation_log_repo(&self) -> Arc<PgReservationLogRepository> {
        self.reservation_log_repo.clone()
    }

    pub fn reservation_engine(&self) -> Arc<PgReservationEngine> {
        self.reservation_engine.clone()
    }

    pub fn transfer_coordinator(&self) -> Arc<PgTransferCoordinator> {
        self.transfer_coordinator.clone()
    }

    pub fn order_repo(&self) -> Arc<PgOrderRepository> {
        self.order_repo.clone()
    }

    pub fn order_reservation_repo(&self) -> Arc<PgOrderReservationRepository> {
        self.order_reservation_repo.clone()
    }

    pub fn warehouse_gateway(&self) -> Arc<AnyWarehouseGateway> {
        self.warehouse_gateway.clone()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}
