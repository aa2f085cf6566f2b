// Shared types: response envelope, pagination, health check

pub mod envelope;
pub mod health;

pub use envelope::{ApiResponse, ErrorBody, ErrorResponse, PaginatedResponse};
pub use health::{HealthCheckUseCase, HealthState, HealthStatus};
