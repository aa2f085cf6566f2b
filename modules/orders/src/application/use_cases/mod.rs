// Use cases for the orders module

mod cleanup_expired_use_case;
mod create_order_use_case;
mod get_order_use_case;
mod process_payment_use_case;
mod update_order_status_use_case;

pub use cleanup_expired_use_case::CleanupExpiredUseCase;
pub use create_order_use_case::CreateOrderUseCase;
pub use get_order_use_case::GetOrderUseCase;
pub use process_payment_use_case::ProcessPaymentUseCase;
pub use update_order_status_use_case::UpdateOrderStatusUseCase;
