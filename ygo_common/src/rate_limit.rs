//! Sliding-window gate for outbound API calls

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Admits at most `max_calls` calls in any `period`.
///
/// Callers over the quota are delayed until the window admits them; calls are
/// never dropped.
#[derive(Debug)]
pub struct RateLimiter {
    max_calls: usize,
    period: Duration,
    admitted: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(max_calls: usize, period: Duration) -> Self {
        let max_calls = max_calls.max(1);
        Self {
            max_calls,
            period,
            admitted: Mutex::new(VecDeque::with_capacity(max_calls)),
        }
    }

    /// Wait for a permit
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut admitted = self.admitted.lock().await;
                let now = Instant::now();

                while let Some(oldest) = admitted.front() {
                    if now.duration_since(*oldest) >= self.period {
                        admitted.pop_front();
                    } else {
                        break;
                    }
                }

                if admitted.len() < self.max_calls {
                    admitted.push_back(now);
                    return;
                }

                match admitted.front() {
                    Some(oldest) => self.period - now.duration_since(*oldest),
                    None => continue,
                }
            };

            log::debug!("Rate limit reached, waiting {:?}", wait);
            tokio::time::sleep(wait).await;
        }
    }

    pub fn max_calls(&self) -> usize {
        self.max_calls
    }
}
