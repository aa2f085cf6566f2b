// =============================================================================
// Order handlers
// =============================================================================
//
// - POST  /orders
// - GET   /orders/{id}
// - POST  /orders/{id}/payment
// - PATCH /orders/{id}/status
// - POST  /reservations/cleanup

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use common::ApiResponse;
use orders::{
    CleanupExpiredUseCase, CleanupResult, CreateOrderCommand, CreateOrderUseCase, GetOrderUseCase,
    OrderResponse, ProcessPaymentUseCase, UpdateOrderStatusCommand, UpdateOrderStatusUseCase,
};

use crate::error::AppError;
use crate::state::AppState;

/// Handler for POST /orders
///
/// Reserves stock for every line before the order is persisted; on failure
/// nothing is written and partial reservations are released.
pub async fn create_order_handler(
    State(state): State<AppState>,
    Json(command): Json<CreateOrderCommand>,
) -> Result<(StatusCode, Json<ApiResponse<OrderResponse>>), AppError> {
    let use_case = CreateOrderUseCase::new(state.order_repo(), state.warehouse_gateway());
    let response = use_case.execute(command).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(response))))
}

/// Handler for GET /orders/{id}
pub async fn get_order_handler(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let use_case = GetOrderUseCase::new(state.order_repo());
    let response = use_case.execute(order_id).await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for POST /orders/{id}/payment
///
/// Marks the order paid and commits its reservations at the warehouse.
pub async fn process_payment_handler(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let use_case = ProcessPaymentUseCase::new(
        state.order_repo(),
        state.order_reservation_repo(),
        state.warehouse_gateway(),
    );
    let response = use_case.execute(order_id).await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for PATCH /orders/{id}/status
pub async fn update_order_status_handler(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(command): Json<UpdateOrderStatusCommand>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let use_case = UpdateOrderStatusUseCase::new(
        state.order_repo(),
        state.order_reservation_repo(),
        state.warehouse_gateway(),
    );
    let response = use_case.execute(order_id, command).await?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Handler for POST /reservations/cleanup
///
/// Operator-triggered run of the expiry sweep.
pub async fn cleanup_reservations_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CleanupResult>>, AppError> {
    let use_case = CleanupExpiredUseCase::new(
        state.order_repo(),
        state.order_reservation_repo(),
        state.warehouse_gateway(),
    );
    let response = use_case.execute().await?;
    Ok(Json(ApiResponse::ok(response)))
}
