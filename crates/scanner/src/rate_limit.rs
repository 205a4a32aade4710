//! Request spacing for external API courtesy.

use std::time::Duration;

use tokio::time::Instant;

/// Enforces a minimum interval between consecutive requests.
///
/// The first call to [`wait`](RateLimiter::wait) returns immediately;
/// later calls sleep only for the remainder of the interval.
#[derive(Debug)]
pub struct RateLimiter {
    delay: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_request: None,
        }
    }

    /// Waits until at least `delay` has passed since the previous call.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.delay {
                tokio::time::sleep(self.delay - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}
