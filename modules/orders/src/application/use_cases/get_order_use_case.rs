// GetOrderUseCase - fetches one order with its items

use std::sync::Arc;

use uuid::Uuid;

use crate::OrderError;
use crate::application::dtos::responses::OrderResponse;
use crate::domain::repositories::OrderRepository;
use crate::domain::value_objects::OrderId;

pub struct GetOrderUseCase<R>
where
    R: OrderRepository,
{
    order_repo: Arc<R>,
}

impl<R> GetOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(order_repo: Arc<R>) -> Self {
        Self { order_repo }
    }

    pub async fn execute(&self, order_id: Uuid) -> Result<OrderResponse, OrderError> {
        let order = self
            .order_repo
            .find_by_id(OrderId::from_uuid(order_id))
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        Ok(order.into())
    }
}
