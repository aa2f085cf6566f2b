// Expiry reaper task - periodic sweep over expired orders and reservations

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::application::use_cases::CleanupExpiredUseCase;
use crate::domain::repositories::{OrderRepository, OrderReservationRepository};
use crate::domain::services::WarehouseGateway;

/// Default sweep interval.
pub const DEFAULT_REAPER_INTERVAL: Duration = Duration::from_secs(60);

/// Spawns the periodic expiry sweep. The same use case backs the
/// operator-triggered cleanup endpoint, so a slow manual run and the timer
/// tick may overlap; the sweep is idempotent, so overlap is harmless.
pub fn spawn_reaper<R, V, G>(
    use_case: Arc<CleanupExpiredUseCase<R, V, G>>,
    interval: Duration,
) -> tokio::task::JoinHandle<()>
where
    R: OrderRepository + 'static,
    V: OrderReservationRepository + 'static,
    G: WarehouseGateway + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match use_case.execute().await {
                Ok(result) if result.cancelled_orders > 0 || result.released_reservations > 0 => {
                    info!(
                        cancelled_orders = result.cancelled_orders,
                        released_reservations = result.released_reservations,
                        failed_releases = result.failed_releases,
                        "Expiry sweep cleaned up"
                    );
                }
                Ok(_) => debug!("Expiry sweep found nothing to do"),
                Err(e) => error!(error = %e, "Expiry sweep failed"),
            }
        }
    })
}
