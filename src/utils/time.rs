// src/utils/time.rs - Cross-platform time utilities

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Cross-platform time utilities that work on both native and WASM
pub struct Time;

impl Time {
    /// Get current UTC time - works on both native and WASM
    pub fn now() -> DateTime<Utc> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Utc::now()
        }

        #[cfg(target_arch = "wasm32")]
        {
            let millis = js_sys::Date::now() as i64;
            Self::from_millis(millis)
        }
    }

    /// Get current timestamp as milliseconds since epoch
    pub fn now_millis() -> u64 {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Utc::now().timestamp_millis() as u64
        }

        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() as u64
        }
    }

    /// Create a DateTime from milliseconds since epoch, clamping to the epoch
    /// when the value is out of range
    pub fn from_millis(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Suspends the current task for `duration`. A zero duration returns
/// immediately without touching the timer.
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(duration.as_millis().min(u32::MAX as u128) as u32)
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis_round_trip() {
        let now = Time::now();
        let restored = Time::from_millis(now.timestamp_millis());
        assert_eq!(restored.timestamp_millis(), now.timestamp_millis());
    }

    #[tokio::test]
    async fn test_zero_sleep_returns() {
        sleep(Duration::ZERO).await;
        sleep(Duration::from_millis(1)).await;
    }
}
