//! Pointer-move rate limiting
//!
//! Leading and trailing edge: the first sample after a quiet window is
//! released immediately; later samples inside the window overwrite a single
//! pending slot, released once the window closes. A sample never waits
//! longer than one interval.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval: Duration,
    last_release: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            last_release: None,
            pending: None,
        }
    }

    pub fn set_interval(&mut self, interval_ms: u64) {
        self.interval = Duration::from_millis(interval_ms);
    }

    /// Offer a sample; returns it back if it should be evaluated now
    pub fn offer(&mut self, sample: T, now: Instant) -> Option<T> {
        if self.window_open(now) {
            self.pending = Some(sample);
            None
        } else {
            self.pending = None;
            self.last_release = Some(now);
            Some(sample)
        }
    }

    /// Release the pending sample if its window has closed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_none() || self.window_open(now) {
            return None;
        }
        self.last_release = Some(now);
        self.pending.take()
    }

    /// When the pending sample becomes releasable
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref()?;
        self.last_release.map(|t| t + self.interval)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending sample and forget the last release
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_release = None;
    }

    fn window_open(&self, now: Instant) -> bool {
        match self.last_release {
            Some(last) => now.saturating_duration_since(last) < self.interval,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_leading_edge_passes_through() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(16);
        assert_eq!(throttle.offer(1, t0), Some(1));
    }

    #[test]
    fn test_samples_inside_window_keep_latest() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(16);
        assert_eq!(throttle.offer(1, t0), Some(1));
        assert_eq!(throttle.offer(2, t0 + ms(4)), None);
        assert_eq!(throttle.offer(3, t0 + ms(8)), None);

        assert_eq!(throttle.next_deadline(), Some(t0 + ms(16)));
        assert_eq!(throttle.poll(t0 + ms(15)), None);
        assert_eq!(throttle.poll(t0 + ms(16)), Some(3));
        assert_eq!(throttle.poll(t0 + ms(40)), None);
    }

    #[test]
    fn test_zero_interval_never_holds() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(0);
        assert_eq!(throttle.offer(1, t0), Some(1));
        assert_eq!(throttle.offer(2, t0), Some(2));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn test_reset_drops_pending() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(16);
        throttle.offer(1, t0);
        throttle.offer(2, t0 + ms(1));
        throttle.reset();
        assert_eq!(throttle.next_deadline(), None);
        assert_eq!(throttle.offer(3, t0 + ms(2)), Some(3));
    }
}
