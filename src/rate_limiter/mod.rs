use std::time::Duration;
use tokio::time::sleep;

/// Paces requests to one remote host.
///
/// The first request goes out immediately; every later one waits the
/// configured delay. One limiter instance is shared per run, so the delay
/// applies across all requests regardless of which worker issues them.
pub struct RateLimiter {
    delay: Duration,
    requests_made: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            requests_made: 0,
        }
    }

    pub async fn throttle(&mut self) {
        if self.requests_made > 0 {
            sleep(self.delay).await;
        }
        self.requests_made += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_request_is_not_delayed() {
        let mut limiter = RateLimiter::new(10_000);
        let start = std::time::Instant::now();
        limiter.throttle().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn later_requests_wait_the_configured_delay() {
        let mut limiter = RateLimiter::new(50);
        limiter.throttle().await;
        let start = std::time::Instant::now();
        limiter.throttle().await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
