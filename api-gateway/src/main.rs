// API Gateway entry point
//
// Wires the PostgreSQL pool, the warehouse gateway (HTTP or AMQP per
// configuration), the background tasks (expiry reaper, bus consumers) and
// the HTTP router.

use std::sync::Arc;

use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use common::health::infrastructure::health_check_simple;
use messaging::{AmqpBus, CorrelationTable};
use orders::{
    AmqpWarehouseGateway, CleanupExpiredUseCase, DEFAULT_RESPONSE_TIMEOUT, HttpWarehouseGateway,
    spawn_reaper, spawn_response_consumer,
};

mod config;
mod consumer;
mod error;
mod handlers;
mod middleware;
mod routes;
mod state;

use config::AppConfig;
use crate::middleware::request_id_middleware;
use routes::{inventory_router, order_router, warehouse_router};
use state::{AnyWarehouseGateway, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&config.database_url)
        .await
        .expect("failed to connect to PostgreSQL");

    // Warehouse gateway: message bus when async mode is on, HTTP otherwise.
    let mut bus: Option<Arc<AmqpBus>> = None;
    let gateway = if config.warehouse_async_mode {
        let connected = Arc::new(
            AmqpBus::connect(config.rabbitmq.clone())
                .await
                .expect("failed to connect to RabbitMQ"),
        );
        let correlation = Arc::new(CorrelationTable::new());
        let _responses = spawn_response_consumer(
            connected.clone(),
            correlation.clone(),
            format!("{}.responses", config.rabbitmq.queue),
        );
        let gateway = AmqpWarehouseGateway::new(
            connected.clone(),
            correlation,
            DEFAULT_RESPONSE_TIMEOUT,
        );
        bus = Some(connected);
        AnyWarehouseGateway::Amqp(gateway)
    } else {
        AnyWarehouseGateway::Http(
            HttpWarehouseGateway::new(config.warehouse_client())
                .expect("failed to build warehouse HTTP client"),
        )
    };

    let state = AppState::new(pool, gateway, config.api_key.clone());

    // Warehouse-side request consumer shares the engine with the HTTP routes.
    if let Some(bus) = bus {
        let _requests = consumer::spawn_inventory_consumer(
            bus,
            state.clone(),
            format!("{}.requests", config.rabbitmq.queue),
        );
    }

    // Periodic expiry sweep.
    let cleanup = Arc::new(CleanupExpiredUseCase::new(
        state.order_repo(),
        state.order_reservation_repo(),
        state.warehouse_gateway(),
    ));
    let _reaper = spawn_reaper(cleanup, config.cleanup_interval);

    let app = Router::new()
        .route("/health", get(health_check_simple))
        .merge(inventory_router(state.clone()))
        .merge(warehouse_router(state.clone()))
        .merge(order_router(state.clone()))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.web_port))
        .await
        .expect("failed to bind listen port");
    info!(port = config.web_port, "API Gateway listening");
    axum::serve(listener, app).await.expect("server error");
}
