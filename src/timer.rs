//! Deadline-based timer coordination
//!
//! Timers never run on their own. Each pending timer is a deadline in one of
//! three fixed slots (left close, right close, window out); the event loop
//! asks for [`TimerCoordinator::next_deadline`] and calls
//! [`TimerCoordinator::take_due`] once it has passed. Scheduling into an
//! occupied slot replaces the old deadline, and cancelling empties the slot,
//! so a cancel issued before the tick always wins.

use std::time::{Duration, Instant};

use crate::panel::PanelSide;

/// What a pending timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Collapse one side
    Close(PanelSide),
    /// Collapse every automatic side
    WindowOut,
}

impl TimerKind {
    /// Tie-break order for timers sharing a deadline
    fn order(&self) -> u8 {
        match self {
            TimerKind::Close(PanelSide::Left) => 0,
            TimerKind::Close(PanelSide::Right) => 1,
            TimerKind::WindowOut => 2,
        }
    }
}

/// Convert a configured delay in (possibly fractional) milliseconds
///
/// Negative or non-finite values, which validation rejects, fire immediately.
fn delay_from_ms(delay_ms: f64) -> Duration {
    Duration::try_from_secs_f64(delay_ms / 1000.0).unwrap_or(Duration::ZERO)
}

/// An in-flight scheduled action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub kind: TimerKind,
    pub fire_at: Instant,
}

/// Owns every pending close and window-out timer
#[derive(Debug, Default, Clone)]
pub struct TimerCoordinator {
    close_left: Option<Instant>,
    close_right: Option<Instant>,
    window_out: Option<Instant>,
}

impl TimerCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: TimerKind) -> &Option<Instant> {
        match kind {
            TimerKind::Close(PanelSide::Left) => &self.close_left,
            TimerKind::Close(PanelSide::Right) => &self.close_right,
            TimerKind::WindowOut => &self.window_out,
        }
    }

    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<Instant> {
        match kind {
            TimerKind::Close(PanelSide::Left) => &mut self.close_left,
            TimerKind::Close(PanelSide::Right) => &mut self.close_right,
            TimerKind::WindowOut => &mut self.window_out,
        }
    }

    fn schedule(&mut self, kind: TimerKind, delay: Duration, now: Instant) -> PendingTimer {
        let fire_at = now + delay;
        if self.slot_mut(kind).replace(fire_at).is_some() {
            tracing::trace!(target: "timer", ?kind, "superseded pending timer");
        }
        tracing::debug!(target: "timer", ?kind, delay_ms = delay.as_millis() as u64, "scheduled");
        PendingTimer { kind, fire_at }
    }

    fn cancel(&mut self, kind: TimerKind) -> bool {
        let cancelled = self.slot_mut(kind).take().is_some();
        if cancelled {
            tracing::debug!(target: "timer", ?kind, "cancelled");
        }
        cancelled
    }

    /// Start (or restart) the close timer for a side
    pub fn schedule_close(&mut self, side: PanelSide, delay_ms: f64, now: Instant) -> PendingTimer {
        self.schedule(TimerKind::Close(side), delay_from_ms(delay_ms), now)
    }

    /// Cancel the close timer for a side; returns whether one was pending
    pub fn cancel_close(&mut self, side: PanelSide) -> bool {
        self.cancel(TimerKind::Close(side))
    }

    /// Start (or restart) the shared window-out timer
    pub fn schedule_window_out(&mut self, delay_ms: f64, now: Instant) -> PendingTimer {
        self.schedule(TimerKind::WindowOut, delay_from_ms(delay_ms), now)
    }

    /// Cancel the window-out timer; returns whether one was pending
    pub fn cancel_window_out(&mut self) -> bool {
        self.cancel(TimerKind::WindowOut)
    }

    /// Cancel everything (used on teardown)
    pub fn cancel_all(&mut self) {
        self.close_left = None;
        self.close_right = None;
        self.window_out = None;
    }

    /// Deadline of a pending timer, if any
    pub fn pending(&self, kind: TimerKind) -> Option<PendingTimer> {
        self.slot(kind).map(|fire_at| PendingTimer { kind, fire_at })
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.slot(kind).is_some()
    }

    /// Every pending timer, earliest first
    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        let mut timers: Vec<PendingTimer> = [
            TimerKind::Close(PanelSide::Left),
            TimerKind::Close(PanelSide::Right),
            TimerKind::WindowOut,
        ]
        .into_iter()
        .filter_map(|kind| self.pending(kind))
        .collect();
        timers.sort_by_key(|t| (t.fire_at, t.kind.order()));
        timers
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.close_left, self.close_right, self.window_out]
            .into_iter()
            .flatten()
            .min()
    }

    /// Remove and return every timer due at `now`, earliest first
    ///
    /// Each returned timer has left its slot, so it fires exactly once.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let due: Vec<TimerKind> = self
            .pending_timers()
            .into_iter()
            .filter(|t| t.fire_at <= now)
            .map(|t| t.kind)
            .collect();
        for kind in &due {
            *self.slot_mut(*kind) = None;
        }
        due
    }
}
