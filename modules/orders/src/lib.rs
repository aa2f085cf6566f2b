// Orders module - order lifecycle, reservation tracking, expiry sweeps
//
// Clean Architecture layers:
// - domain: entities, value objects, repository traits, warehouse port
// - application: use cases, DTOs
// - infrastructure: PostgreSQL adapters, warehouse gateways, reaper task

pub mod application;
pub mod domain;
pub mod infrastructure;

mod error;

// =============================================================================
// Public API - Re-exports for convenient access
// =============================================================================

// Error type
pub use error::OrderError;

// Domain layer
pub use domain::entities::{Order, OrderItem, OrderLine, OrderReservation};
pub use domain::repositories::{OrderRepository, OrderReservationRepository};
pub use domain::services::{ReservationLine, WarehouseGateway};
pub use domain::value_objects::{OrderId, OrderItemId, OrderReservationId, OrderStatus};

// Application layer
pub use application::dtos::commands::{
    CreateOrderCommand, CreateOrderItemCommand, UpdateOrderStatusCommand,
};
pub use application::dtos::responses::{CleanupResult, OrderItemResponse, OrderResponse};
pub use application::use_cases::{
    CleanupExpiredUseCase, CreateOrderUseCase, GetOrderUseCase, ProcessPaymentUseCase,
    UpdateOrderStatusUseCase,
};

// Infrastructure layer
pub use infrastructure::persistence::{PgOrderRepository, PgOrderReservationRepository};
pub use infrastructure::reaper::{DEFAULT_REAPER_INTERVAL, spawn_reaper};
pub use infrastructure::warehouse::{
    AmqpWarehouseGateway, DEFAULT_RESPONSE_TIMEOUT, HttpWarehouseGateway, WarehouseClientConfig,
    spawn_response_consumer,
};
