// =============================================================================
// Inventory handlers
// =============================================================================
//
// REST endpoints over the reservation engine, ledger and journals:
// - POST /inventory/reserve
// - POST /inventory/reserve/cancel
// - POST /inventory/reserve/commit
// - GET  /inventory/warehouses/{w}/stock
// - GET  /inventory/warehouses/{w}/products/{p}/stock
// - GET  /inventory/warehouses/{w}/products/{p}/reservations
// - GET  /inventory/warehouses/{w}/products/{p}/movements
// - POST /stock/transfer

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use common::{ApiResponse, PaginatedResponse};
use warehouse::{
    CancelReservationCommand, CancelReservationUseCase, CommitReservationCommand,
    CommitReservationUseCase, GetStockUseCase, ListMovementsQuery, ListMovementsUseCase,
    ListReservationLogsQuery, ListReservationLogsUseCase, ListStockQuery, ListStockUseCase,
    MovementResponse, ReservationGrantResponse, ReservationLogResponse, ReserveStockCommand,
    ReserveStockUseCase, StockResponse, TransferResponse, TransferStockCommand,
    TransferStockUseCase,
};

use crate::error::AppError;
use crate::state::AppState;

pub fn default_page() -> i64 {
    1
}

pub fn default_limit() -> i64 {
    20
}

/// Pagination query parameters (HTTP API layer)
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Stock listing parameters with an optional product filter
#[derive(Debug, Deserialize)]
pub struct StockListParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub product_id: Option<Uuid>,
}

/// Handler for POST /inventory/reserve
///
/// Reserves stock on one ledger row and returns the reference plus a row
/// snapshot. 404 when the row does not exist, 400 on insufficient stock.
pub async fn reserve_stock_handler(
    State(state): State<AppState>,
    Json(command): Json<ReserveStockCommand>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationGrantResponse>>), AppError> {
    let use_case =
        ReserveStockUseCase::new(state.warehouse_repo(), state.reservation_engine());
    let response = use_case.execute(command).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(response))))
}

/// Handler for POST /inventory/reserve/cancel
pub async fn cancel_reservation_handler(
    State(state): State<AppState>,
    Json(command): Json<CancelReservationCommand>,
) -> Result<Json<ApiResponse<StockResponse>>, AppError> {
    let use_case = CancelReservationUseCase::new(state.reservation_engine());
    let response = use_case.execute(command).await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for POST /inventory/reserve/commit
pub async fn commit_reservation_handler(
    State(state): State<AppState>,
    Json(command): Json<CommitReservationCommand>,
) -> Result<Json<ApiResponse<StockResponse>>, AppError> {
    let use_case = CommitReservationUseCase::new(state.reservation_engine());
    let response = use_case.execute(command).await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for GET /inventory/warehouses/{w}/stock
pub async fn list_stock_handler(
    State(state): State<AppState>,
    Path(warehouse_id): Path<Uuid>,
    Query(params): Query<StockListParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<StockResponse>>>, AppError> {
    let use_case = ListStockUseCase::new(state.ledger_repo());
    let response = use_case
        .execute(ListStockQuery {
            warehouse_id,
            product_id: params.product_id,
            page: params.page,
            page_size: params.limit,
        })
        .await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for GET /inventory/warehouses/{w}/products/{p}/stock
pub async fn get_stock_handler(
    State(state): State<AppState>,
    Path((warehouse_id, product_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<StockResponse>>, AppError> {
    let use_case = GetStockUseCase::new(state.ledger_repo());
    let response = use_case.execute(warehouse_id, product_id).await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for GET /inventory/warehouses/{w}/products/{p}/reservations
///
/// Paginated reservation history, newest first.
pub async fn list_reservation_logs_handler(
    State(state): State<AppState>,
    Path((warehouse_id, product_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<PageParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<ReservationLogResponse>>>, AppError> {
    let use_case = ListReservationLogsUseCase::new(state.reservation_log_repo());
    let response = use_case
        .execute(ListReservationLogsQuery {
            warehouse_id,
            product_id,
            page: params.page,
            page_size: params.limit,
        })
        .await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for GET /inventory/warehouses/{w}/products/{p}/movements
pub async fn list_movements_handler(
    State(state): State<AppState>,
    Path((warehouse_id, product_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<PageParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<MovementResponse>>>, AppError> {
    let use_case = ListMovementsUseCase::new(state.movement_repo());
    let response = use_case
        .execute(ListMovementsQuery {
            warehouse_id,
            product_id,
            page: params.page,
            page_size: params.limit,
        })
        .await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for POST /stock/transfer
///
/// Moves quantity between two warehouses; the transfer record ends
/// `completed` or `failed`.
pub async fn transfer_stock_handler(
    State(state): State<AppState>,
    Json(command): Json<TransferStockCommand>,
) -> Result<(StatusCode, Json<ApiResponse<TransferResponse>>), AppError> {
    let use_case =
        TransferStockUseCase::new(state.warehouse_repo(), state.transfer_coordinator());
    let response = use_case.execute(command).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(response))))
}
