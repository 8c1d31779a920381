use std::time::Duration;

use tokio::time::{Instant, sleep};

use crate::domain::delay::DelayRequest;
use crate::domain::entities::{TimingReport, iso_timestamp};
use crate::domain::ports::Clock;

// Suspends the calling request for the resolved delay, then reports timing.
pub struct DelayUseCase<C> {
    pub clock: C,
}

impl<C> DelayUseCase<C>
where
    C: Clock,
{
    pub async fn execute(&self, request: DelayRequest) -> TimingReport {
        let start_time = self.clock.now().timestamp_millis();
        let started = Instant::now();

        // Timer-based wait: the runtime keeps serving other requests meanwhile.
        sleep(Duration::from_millis(request.effective_ms)).await;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let end_time = start_time.saturating_add(i64::try_from(elapsed_ms).unwrap_or(i64::MAX));

        TimingReport {
            requested_delay: request.requested_ms,
            actual_delay: request.effective_ms,
            start_time,
            end_time,
            actual_response_time: elapsed_ms,
            timestamp: iso_timestamp(self.clock.now()),
        }
    }
}
