use governor::{Quota, RateLimiter, Jitter};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use crate::config::constants::{GITHUB_BURST_PER_SECOND, GITHUB_REQUESTS_PER_MINUTE, STACKEXCHANGE_REQUESTS_PER_SECOND};

#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    burst_limiter: Option<Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>>,
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

impl ApiRateLimiter {
    pub fn per_minute(requests: u32, burst_per_second: u32) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_minute(non_zero(requests)))),
            burst_limiter: Some(Arc::new(RateLimiter::direct(Quota::per_second(non_zero(burst_per_second))))),
        }
    }

    pub fn per_second(requests: u32) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_second(non_zero(requests)))),
            burst_limiter: None,
        }
    }

    /// GitHub search allows 30 authenticated requests a minute.
    pub fn github() -> Self {
        Self::per_minute(GITHUB_REQUESTS_PER_MINUTE, GITHUB_BURST_PER_SECOND)
    }

    /// StackExchange throttles anything above 30 requests a second per IP.
    pub fn stackexchange() -> Self {
        Self::per_second(STACKEXCHANGE_REQUESTS_PER_SECOND)
    }

    pub async fn acquire(&self) {
        if let Some(burst) = &self.burst_limiter {
            burst.until_ready().await;
        }
        self.limiter.until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100))).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_acquire_within_quota_returns() {
        let limiter = ApiRateLimiter::per_second(50);

        for _ in 0..3 {
            limiter.acquire().await;
        }
    }

    #[test]
    fn test_zero_quota_is_clamped() {
        let limiter = ApiRateLimiter::per_second(0);

        assert!(limiter.limiter.check().is_ok());
        assert!(limiter.limiter.check().is_err());
    }
}
