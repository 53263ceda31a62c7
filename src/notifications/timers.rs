// SPDX-License-Identifier: MPL-2.0
//! Pending toast timers and the clock they are measured against.
//!
//! Each toast has at most one pending timer. Scheduling a timer for an ID
//! replaces whatever was pending for it, and cancelling removes it, so a
//! stale expiry can never fire after a dismissal or a removal.

use super::notification::ToastId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Source of the current instant for timer deadlines.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> Instant;
}

/// Wall-clock time via [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one clone and hand the
/// other to a store.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// What happens when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Time-to-live elapsed: dismiss the toast.
    Expire,
    /// Grace delay elapsed: remove the toast.
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub deadline: Instant,
}

/// Table of pending timers, at most one per toast.
#[derive(Debug, Default)]
pub struct Timers {
    pending: HashMap<ToastId, Timer>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a timer, returning the one it replaced.
    pub fn schedule(&mut self, id: ToastId, kind: TimerKind, deadline: Instant) -> Option<Timer> {
        self.pending.insert(id, Timer { kind, deadline })
    }

    /// Cancels the pending timer for `id`, if any.
    pub fn cancel(&mut self, id: ToastId) -> Option<Timer> {
        self.pending.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Timer> {
        self.pending.get(&id).copied()
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|t| t.deadline).min()
    }

    /// Takes the earliest timer due at `now`.
    ///
    /// Ties are broken by ID so that older toasts fire first.
    pub fn pop_due(&mut self, now: Instant) -> Option<(ToastId, TimerKind)> {
        let (&id, timer) = self
            .pending
            .iter()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(id, t)| (t.deadline, **id))?;
        let kind = timer.kind;
        self.pending.remove(&id);
        Some((id, kind))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
