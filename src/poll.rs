//! Change-Poller
//!
//! Bounded-retry polling until an observed on-chain value (a balance, an
//! owner, a token clone address) differs from a known baseline. Used after
//! submitting a state-changing transaction whose effect is asynchronous from
//! the caller's perspective.
//!
//! Two exhaustion modes exist because call sites genuinely differ:
//!
//! - [`wait_or_timeout`] resolves with `false` when no change was observed
//!   (balance and ownership waits).
//! - [`wait_or_fail`] raises [`Error::Timeout`] with a diagnostic
//!   (token-clone-address waits).
//!
//! The poller never inspects *why* a value changed, only *that* it changed;
//! it is unaware of transaction hashes and receipts, and its fetch function
//! must be idempotent and read-only.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};

/// Bounded-retry schedule for a single wait.
#[derive(Debug, Clone, Copy)]
pub struct PollSpec {
    /// Sleep between consecutive fetches.
    pub interval: Duration,
    /// Maximum number of fetches before giving up.
    pub max_attempts: u32,
}

impl PollSpec {
    /// Create a new poll schedule.
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }
}

impl Default for PollSpec {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 30,
        }
    }
}

/// Core loop shared by both modes: fetch up to `max_attempts` times, sleeping
/// between attempts (never after the last one), and stop at the first value
/// that differs from the baseline.
async fn poll_changed<T, F, Fut>(spec: &PollSpec, baseline: &T, mut fetch: F) -> Result<Option<T>>
where
    T: PartialEq,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    for attempt in 1..=spec.max_attempts {
        let current = fetch().await?;
        if current != *baseline {
            debug!(attempt, "Observed value change");
            return Ok(Some(current));
        }
        if attempt < spec.max_attempts {
            tokio::time::sleep(spec.interval).await;
        }
    }
    Ok(None)
}

/// Wait until the fetched value differs from `baseline`.
///
/// Returns `Ok(true)` as soon as a change is observed, `Ok(false)` after
/// `max_attempts` fetches with no change. Fetch errors propagate.
pub async fn wait_or_timeout<T, F, Fut>(spec: &PollSpec, baseline: &T, fetch: F) -> Result<bool>
where
    T: PartialEq,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match poll_changed(spec, baseline, fetch).await? {
        Some(_) => Ok(true),
        None => {
            debug!(
                max_attempts = spec.max_attempts,
                interval_ms = spec.interval.as_millis() as u64,
                "Poll exhausted without observing a change"
            );
            Ok(false)
        }
    }
}

/// Wait until the fetched value differs from `baseline`, returning the new
/// value, or fail with [`Error::Timeout`] carrying the `what` diagnostic
/// after `max_attempts` fetches.
pub async fn wait_or_fail<T, F, Fut>(
    spec: &PollSpec,
    what: &str,
    baseline: &T,
    fetch: F,
) -> Result<T>
where
    T: PartialEq,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    poll_changed(spec, baseline, fetch)
        .await?
        .ok_or_else(|| Error::Timeout(what.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn spec(interval_ms: u64, max_attempts: u32) -> PollSpec {
        PollSpec::new(Duration::from_millis(interval_ms), max_attempts)
    }

    /// Fetch that returns the baseline for the first `k` calls and a
    /// different value afterwards, counting calls.
    fn stepped_fetch(
        calls: &AtomicU32,
        k: u32,
    ) -> impl FnMut() -> std::future::Ready<Result<U256>> + '_ {
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            std::future::ready(Ok(if n < k { U256::ZERO } else { U256::from(7) }))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_change_on_attempt_k_plus_one() {
        let calls = AtomicU32::new(0);
        let k = 3u32;
        let start = tokio::time::Instant::now();

        let changed = wait_or_timeout(&spec(100, 10), &U256::ZERO, stepped_fetch(&calls, k))
            .await
            .unwrap();

        assert!(changed);
        assert_eq!(calls.load(Ordering::SeqCst), k + 1);
        // k intervening sleeps, none after the change
        assert_eq!(start.elapsed(), Duration::from_millis(100 * k as u64));
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_change_needs_no_sleep() {
        let calls = AtomicU32::new(0);
        let start = tokio::time::Instant::now();

        let changed = wait_or_timeout(&spec(100, 10), &U256::ZERO, stepped_fetch(&calls, 0))
            .await
            .unwrap();

        assert!(changed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_is_silent_in_timeout_mode() {
        let calls = AtomicU32::new(0);
        let max = 5u32;

        let changed = wait_or_timeout(&spec(50, max), &U256::ZERO, stepped_fetch(&calls, 100))
            .await
            .unwrap();

        assert!(!changed);
        assert_eq!(calls.load(Ordering::SeqCst), max);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_fails_in_fail_mode() {
        let calls = AtomicU32::new(0);
        let max = 5u32;

        let err = wait_or_fail(
            &spec(50, max),
            "token clone for 0xdead on Mainnet",
            &U256::ZERO,
            stepped_fetch(&calls, 100),
        )
        .await
        .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), max);
        match err {
            Error::Timeout(what) => assert!(what.contains("token clone")),
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fail_mode_returns_new_value() {
        let calls = AtomicU32::new(0);

        let value = wait_or_fail(&spec(50, 10), "balance", &U256::ZERO, stepped_fetch(&calls, 2))
            .await
            .unwrap();

        assert_eq!(value, U256::from(7));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_error_propagates() {
        let mut first = true;
        let result: Result<bool> = wait_or_timeout(&spec(50, 10), &U256::ZERO, move || {
            let out = if first {
                Ok(U256::ZERO)
            } else {
                Err(Error::FailedTransaction("node went away".into()))
            };
            first = false;
            std::future::ready(out)
        })
        .await;

        assert!(matches!(result, Err(Error::FailedTransaction(_))));
    }
}
