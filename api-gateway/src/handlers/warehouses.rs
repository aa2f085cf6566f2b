// =============================================================================
// Warehouse handlers
// =============================================================================
//
// Admin endpoints for the warehouse directory and stock intake:
// - POST /warehouses
// - GET  /warehouses
// - GET  /warehouses/{w}
// - PUT  /warehouses/{w}
// - POST /warehouses/{w}/stock

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use common::{ApiResponse, PaginatedResponse};
use warehouse::{
    AddStockCommand, AddStockUseCase, CreateWarehouseCommand, CreateWarehouseUseCase,
    GetWarehouseUseCase, ListWarehousesQuery, ListWarehousesUseCase, StockResponse,
    UpdateWarehouseCommand, UpdateWarehouseUseCase, WarehouseResponse,
};

use crate::error::AppError;
use crate::handlers::inventory::PageParams;
use crate::state::AppState;

/// Stock intake body (warehouse id comes from the path)
#[derive(Debug, Deserialize)]
pub struct AddStockBody {
    pub product_id: Uuid,
    pub product_sku: String,
    pub quantity: i32,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

/// Handler for POST /warehouses
pub async fn create_warehouse_handler(
    State(state): State<AppState>,
    Json(command): Json<CreateWarehouseCommand>,
) -> Result<(StatusCode, Json<ApiResponse<WarehouseResponse>>), AppError> {
    let use_case = CreateWarehouseUseCase::new(state.warehouse_repo());
    let response = use_case.execute(command).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(response))))
}

/// Handler for GET /warehouses
pub async fn list_warehouses_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<WarehouseResponse>>>, AppError> {
    let use_case = ListWarehousesUseCase::new(state.warehouse_repo());
    let response = use_case
        .execute(ListWarehousesQuery {
            page: params.page,
            page_size: params.limit,
        })
        .await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for GET /warehouses/{w}
pub async fn get_warehouse_handler(
    State(state): State<AppState>,
    Path(warehouse_id): Path<Uuid>,
) -> Result<Json<ApiResponse<WarehouseResponse>>, AppError> {
    let use_case = GetWarehouseUseCase::new(state.warehouse_repo());
    let response = use_case.execute(warehouse_id).await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for PUT /warehouses/{w}
pub async fn update_warehouse_handler(
    State(state): State<AppState>,
    Path(warehouse_id): Path<Uuid>,
    Json(command): Json<UpdateWarehouseCommand>,
) -> Result<Json<ApiResponse<WarehouseResponse>>, AppError> {
    let use_case = UpdateWarehouseUseCase::new(state.warehouse_repo());
    let response = use_case.execute(warehouse_id, command).await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for POST /warehouses/{w}/stock
///
/// Receives stock; creates the ledger row on first stock-in.
pub async fn add_stock_handler(
    State(state): State<AppState>,
    Path(warehouse_id): Path<Uuid>,
    Json(body): Json<AddStockBody>,
) -> Result<(StatusCode, Json<ApiResponse<StockResponse>>), AppError> {
    let use_case = AddStockUseCase::new(state.warehouse_repo(), state.ledger_repo());
    let response = use_case
        .execute(AddStockCommand {
            warehouse_id,
            product_id: body.product_id,
            product_sku: body.product_sku,
            quantity: body.quantity,
            reference: body.reference,
            notes: body.notes,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(response))))
}
