// Warehouse-side inventory request consumer
//
// Consumes reserve/confirm/release requests from the bus, runs them through
// the same use cases the HTTP surface uses, and publishes the response under
// the request's correlation id.

use std::sync::Arc;

use chrono::Utc;
use futures::StreamExt;
use tracing::{debug, error, warn};
use uuid::Uuid;

use messaging::{
    AmqpBus, ConfirmRequest, InventoryMessage, OperationResponse, REQUEST_BINDING, ReleaseRequest,
    ReserveRequest, ReserveResponse, ReserveResponseItem, decode_and_ack,
};
use warehouse::{
    CancelReservationCommand, CancelReservationUseCase, CommitReservationCommand,
    CommitReservationUseCase, ReserveStockCommand, ReserveStockUseCase,
};

use crate::state::AppState;

/// Runs the warehouse-side request consumer loop.
pub fn spawn_inventory_consumer(
    bus: Arc<AmqpBus>,
    state: AppState,
    queue: String,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut consumer = match bus
            .subscribe(&queue, REQUEST_BINDING, "warehouse-requests")
            .await
        {
            Ok(consumer) => consumer,
            Err(e) => {
                error!(error = %e, "Inventory consumer failed to subscribe");
                return;
            }
        };

        while let Some(delivery) = consumer.next().await {
            let delivery = match delivery {
                Ok(delivery) => delivery,
                Err(e) => {
                    error!(error = %e, "Inventory consumer delivery error");
                    continue;
                }
            };
            let message = match decode_and_ack(delivery).await {
                Ok(message) => message,
                Err(e) => {
                    warn!(error = %e, "Dropping undecodable request");
                    continue;
                }
            };

            let response = match message {
                InventoryMessage::Reserve(request) => handle_reserve(&state, request).await,
                InventoryMessage::Confirm(request) => handle_confirm(&state, request).await,
                InventoryMessage::Release(request) => handle_release(&state, request).await,
                other => {
                    debug!(routing_key = other.routing_key(), "Ignoring non-request");
                    continue;
                }
            };

            if let Err(e) = bus.publish(&response).await {
                error!(
                    error = %e,
                    correlation_id = %response.correlation_id(),
                    "Failed to publish inventory response"
                );
            }
        }
    })
}

/// Reserves every line. On a partial failure the lines already reserved are
/// released again and the response reports which line was short.
async fn handle_reserve(state: &AppState, request: ReserveRequest) -> InventoryMessage {
    let reserve = ReserveStockUseCase::new(state.warehouse_repo(), state.reservation_engine());
    let cancel = CancelReservationUseCase::new(state.reservation_engine());

    let mut items: Vec<ReserveResponseItem> = Vec::with_capacity(request.items.len());
    let mut granted: Vec<(Uuid, Uuid, i32, String)> = Vec::new();
    let mut all_available = true;

    for item in &request.items {
        if !all_available {
            // A previous line already failed; report the rest unattempted.
            items.push(unavailable(item.warehouse_id, item.product_id, item.quantity));
            continue;
        }
        let result = reserve
            .execute(ReserveStockCommand {
                warehouse_id: item.warehouse_id,
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .await;
        match result {
            Ok(grant) => {
                granted.push((
                    item.warehouse_id,
                    item.product_id,
                    item.quantity,
                    grant.reference.clone(),
                ));
                items.push(ReserveResponseItem {
                    warehouse_id: item.warehouse_id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    available: true,
                    reference: Some(grant.reference),
                });
            }
            Err(e) => {
                warn!(
                    order_id = %request.order_id,
                    warehouse_id = %item.warehouse_id,
                    product_id = %item.product_id,
                    error = %e,
                    "Reserve request line failed"
                );
                all_available = false;
                items.push(unavailable(item.warehouse_id, item.product_id, item.quantity));
            }
        }
    }

    if !all_available {
        for (warehouse_id, product_id, quantity, reference) in granted {
            let rollback = cancel
                .execute(CancelReservationCommand {
                    warehouse_id,
                    product_id,
                    quantity,
                    reference: reference.clone(),
                })
                .await;
            if let Err(e) = rollback {
                warn!(reference, error = %e, "Failed to roll back partial reserve");
            }
        }
        for item in &mut items {
            item.available = false;
            item.reference = None;
        }
    }

    InventoryMessage::ReserveResponse(ReserveResponse {
        order_id: request.order_id,
        timestamp: Utc::now(),
        correlation_id: request.correlation_id,
        success: all_available,
        reservation_id: all_available.then(Uuid::new_v4),
        items,
    })
}

async fn handle_confirm(state: &AppState, request: ConfirmRequest) -> InventoryMessage {
    let commit = CommitReservationUseCase::new(state.reservation_engine());

    let mut failure: Option<String> = None;
    for item in &request.items {
        let result = commit
            .execute(CommitReservationCommand {
                warehouse_id: item.warehouse_id,
                product_id: item.product_id,
                quantity: item.quantity,
                reference: item.reference.clone(),
            })
            .await;
        if let Err(e) = result {
            warn!(
                order_id = %request.order_id,
                reference = %item.reference,
                error = %e,
                "Confirm request line failed"
            );
            failure.get_or_insert_with(|| e.to_string());
        }
    }

    InventoryMessage::ConfirmResponse(OperationResponse {
        order_id: request.order_id,
        timestamp: Utc::now(),
        correlation_id: request.correlation_id,
        success: failure.is_none(),
        error: failure,
    })
}

async fn handle_release(state: &AppState, request: ReleaseRequest) -> InventoryMessage {
    let cancel = CancelReservationUseCase::new(state.reservation_engine());

    let result = cancel
        .execute(CancelReservationCommand {
            warehouse_id: request.warehouse_id,
            product_id: request.product_id,
            quantity: request.quantity,
            reference: request.reference.clone(),
        })
        .await;

    let error = result.err().map(|e| {
        warn!(
            order_id = %request.order_id,
            reference = %request.reference,
            error = %e,
            "Release request failed"
        );
        e.to_string()
    });

    InventoryMessage::ReleaseResponse(OperationResponse {
        order_id: request.order_id,
        timestamp: Utc::now(),
        correlation_id: request.correlation_id,
        success: error.is_none(),
        error,
    })
}

fn unavailable(warehouse_id: Uuid, product_id: Uuid, quantity: i32) -> ReserveResponseItem {
    ReserveResponseItem {
        warehouse_id,
        product_id,
        quantity,
        available: false,
        reference: None,
    }
}
