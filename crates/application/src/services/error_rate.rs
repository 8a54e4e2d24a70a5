use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_ERROR_WINDOW: Duration = Duration::from_secs(60);

/// Counts errors over a trailing window, plus a lifetime total.
///
/// Shared by every fetch path (which only increment) and the reporting job
/// (which only reads).
pub struct ErrorRateCounter {
    window: Duration,
    events: Mutex<VecDeque<Instant>>,
    total: AtomicU64,
}

impl ErrorRateCounter {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_ERROR_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            events: Mutex::new(VecDeque::new()),
            total: AtomicU64::new(0),
        }
    }

    pub fn incr(&self) {
        let now = Instant::now();
        let mut events = self.events();
        Self::prune(&mut events, now, self.window);
        events.push_back(now);
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    /// Errors recorded within the trailing window.
    pub fn rate(&self) -> u64 {
        let mut events = self.events();
        Self::prune(&mut events, Instant::now(), self.window);
        events.len() as u64
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    fn events(&self) -> MutexGuard<'_, VecDeque<Instant>> {
        // The queue stays consistent even if a holder panicked mid-update.
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn prune(events: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while let Some(oldest) = events.front() {
            if now.duration_since(*oldest) < window {
                break;
            }
            events.pop_front();
        }
    }
}

impl Default for ErrorRateCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_events_leave_the_window() {
        let counter = ErrorRateCounter::with_window(Duration::from_secs(10));
        counter.incr();
        counter.incr();
        assert_eq!(counter.rate(), 2);

        tokio::time::advance(Duration::from_secs(5)).await;
        counter.incr();
        assert_eq!(counter.rate(), 3);

        tokio::time::advance(Duration::from_secs(6)).await;
        assert_eq!(counter.rate(), 1);
        assert_eq!(counter.total(), 3);
    }
}
