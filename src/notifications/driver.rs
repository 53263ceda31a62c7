// SPDX-License-Identifier: MPL-2.0
//! Async driver for toast timers.
//!
//! The store only fires timers when [`ToastStore::tick`] is called. GUI
//! runtimes usually have their own periodic tick; applications running on
//! tokio can spawn this ticker instead.

use super::store::ToastStore;
use super::timers::Clock;
use crate::domain::toast::TickInterval;
use std::time::Instant;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Clock that follows tokio's timer, including paused test time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Spawns a task that ticks `store` every `interval`.
///
/// The task only holds a weak reference and stops on its own once every
/// other handle to the store is gone. Abort the returned handle to stop it
/// earlier.
pub fn spawn_ticker(store: &ToastStore, interval: TickInterval) -> JoinHandle<()> {
    let store = store.downgrade();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.as_duration());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let Some(store) = store.upgrade() else {
                tracing::trace!("toast store dropped, stopping ticker");
                break;
            };
            let fired = store.tick();
            if fired > 0 {
                tracing::trace!(fired, "toast timers fired");
            }
        }
    })
}
