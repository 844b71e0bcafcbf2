//! Bounded retry for DOM mutations whose target may not exist yet.
//!
//! The host page can still be rendering when the overlay runs, so the
//! element a fragment belongs in may appear later. [`converge`] keeps
//! re-running an action on a fixed interval until it reports success or the
//! attempt budget runs out. Exhaustion is logged and otherwise swallowed:
//! there is no caller left to report it to.

use std::time::Duration;

/// Interval and attempt limit for one convergence sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl RetryBudget {
    pub const DEFAULT_INTERVAL_MS: u64 = 100;
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

    #[must_use]
    pub fn new(interval_ms: u64, max_attempts: u32) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            max_attempts,
        }
    }
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS, Self::DEFAULT_MAX_ATTEMPTS)
    }
}

/// Runs `action` until it returns `true`, at most `budget.max_attempts` times.
///
/// `action` must check its own precondition and only mutate when it holds;
/// returning `false` means "nothing done, try again later". Waits between
/// attempts are timer sleeps, so no thread is held while waiting. A zero
/// budget never invokes `action`.
pub async fn converge<F>(budget: RetryBudget, mut action: F)
where
    F: FnMut() -> bool,
{
    let mut remaining = budget.max_attempts;
    while remaining > 0 {
        remaining -= 1;
        if action() {
            tracing::trace!(
                attempts = budget.max_attempts - remaining,
                "convergence succeeded"
            );
            return;
        }
        if remaining > 0 {
            tokio::time::sleep(budget.interval).await;
        }
    }
    tracing::warn!(
        max_attempts = budget.max_attempts,
        interval_ms = u64::try_from(budget.interval.as_millis()).unwrap_or(u64::MAX),
        "injection target never appeared; giving up"
    );
}

/// Starts a convergence sequence on the current [`tokio::task::LocalSet`]
/// and returns immediately.
///
/// The sequence cannot be cancelled; it runs to success or exhaustion.
/// Independent sequences are not coordinated with each other.
///
/// # Panics
///
/// Panics if called outside a `LocalSet` context.
pub fn spawn_convergence<F>(budget: RetryBudget, action: F)
where
    F: FnMut() -> bool + 'static,
{
    drop(tokio::task::spawn_local(converge(budget, action)));
}
