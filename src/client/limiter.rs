use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Token bucket shared by every request of one client.
///
/// Starts full. A request that finds the bucket empty is refused rather than
/// delayed.
#[derive(Debug)]
pub struct RateLimiter {
    bucket: Mutex<Bucket>,
    refill_every: Duration,
    burst: u32,
}

#[derive(Debug)]
struct Bucket {
    tokens: u32,
    last_refill: Instant,
}

impl RateLimiter {
    pub fn new(requests_per_minute: u32, burst: u32) -> Self {
        let refill_every = Duration::from_secs(60) / requests_per_minute.max(1);
        Self {
            bucket: Mutex::new(Bucket { tokens: burst, last_refill: Instant::now() }),
            refill_every,
            burst,
        }
    }

    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    pub fn try_acquire_at(&self, now: Instant) -> bool {
        let mut bucket = self.bucket.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let elapsed = now.saturating_duration_since(bucket.last_refill);
        let earned = u32::try_from(elapsed.as_nanos() / self.refill_every.as_nanos()).unwrap_or(u32::MAX);
        bucket.tokens = bucket.tokens.saturating_add(earned).min(self.burst);
        if bucket.tokens == self.burst {
            // a full bucket does not bank time
            bucket.last_refill = now;
        } else {
            bucket.last_refill += self.refill_every * earned;
        }

        if bucket.tokens == 0 {
            return false;
        }
        bucket.tokens -= 1;
        true
    }
}

impl Default for RateLimiter {
    /// 6 requests per minute, bursts of 3
    fn default() -> Self {
        Self::new(6, 3)
    }
}
