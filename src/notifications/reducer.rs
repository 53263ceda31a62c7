// SPDX-License-Identifier: MPL-2.0
//! State transitions for the toast registry.
//!
//! `reduce` applies one [`Action`] to the registry and reports what happened
//! in a [`Transition`]. It knows nothing about time, listeners or history;
//! the store turns the transition into timer and notification side effects.

use super::notification::{Toast, ToastId, ToastUpdate};
use crate::domain::toast::MaxVisible;
use std::time::Duration;

/// A requested change to the registry.
#[derive(Debug, Clone)]
pub enum Action {
    /// Insert a toast at the front (newest first).
    Add(Toast),
    /// Merge fields into the toast with this ID.
    Update(ToastId, ToastUpdate),
    /// Close one toast, or every open toast when `None`.
    Dismiss(Option<ToastId>),
    /// Drop one toast, or every toast when `None`.
    Remove(Option<ToastId>),
}

/// Outcome of applying an [`Action`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Whether the registry changed at all.
    pub changed: bool,
    /// Toasts that need an expiry timer, with their own duration if any.
    pub expiring: Vec<(ToastId, Option<Duration>)>,
    /// Toasts that were open and are now closed.
    pub dismissed: Vec<ToastId>,
    /// Toasts removed on request.
    pub removed: Vec<Toast>,
    /// Toasts pushed out by the registry bound.
    pub evicted: Vec<Toast>,
}

impl Transition {
    fn unchanged() -> Self {
        Self::default()
    }

    /// Drains every toast that left the registry, removed or evicted.
    pub fn departed(&mut self) -> impl Iterator<Item = Toast> + '_ {
        self.removed.drain(..).chain(self.evicted.drain(..))
    }
}

/// Applies `action` to `toasts`.
///
/// The registry is ordered newest first. Unknown IDs are silently ignored.
pub fn reduce(toasts: &mut Vec<Toast>, action: Action, limit: MaxVisible) -> Transition {
    match action {
        Action::Add(toast) => {
            let id = toast.id();
            let duration = toast.duration();
            toasts.insert(0, toast);
            let evicted = if toasts.len() > limit.value() {
                toasts.split_off(limit.value())
            } else {
                Vec::new()
            };
            Transition {
                changed: true,
                expiring: vec![(id, duration)],
                evicted,
                ..Transition::default()
            }
        }
        Action::Update(id, update) => {
            let Some(toast) = toasts.iter_mut().find(|t| t.id() == id) else {
                return Transition::unchanged();
            };
            if update.is_empty() {
                return Transition::unchanged();
            }
            // A new duration restarts the countdown, but only while still showing.
            let expiring = match update.duration {
                Some(duration) if toast.is_open() => vec![(id, Some(duration))],
                _ => Vec::new(),
            };
            toast.merge(update);
            Transition {
                changed: true,
                expiring,
                ..Transition::default()
            }
        }
        Action::Dismiss(target) => {
            let dismissed: Vec<ToastId> = toasts
                .iter_mut()
                .filter(|t| t.is_open() && target.is_none_or(|id| t.id() == id))
                .map(|t| {
                    t.close();
                    t.id()
                })
                .collect();
            Transition {
                changed: !dismissed.is_empty(),
                dismissed,
                ..Transition::default()
            }
        }
        Action::Remove(None) => {
            let removed = std::mem::take(toasts);
            Transition {
                changed: !removed.is_empty(),
                removed,
                ..Transition::default()
            }
        }
        Action::Remove(Some(id)) => match toasts.iter().position(|t| t.id() == id) {
            Some(pos) => Transition {
                changed: true,
                removed: vec![toasts.remove(pos)],
                ..Transition::default()
            },
            None => Transition::unchanged(),
        },
    }
}
