// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! This module provides pure domain types for the toast store:
//! - [`MaxVisible`]: Registry size bound
//! - [`DefaultDuration`]: Fallback time-to-live
//! - [`GraceDelay`]: Exit delay between dismissal and removal
//! - [`HistoryCapacity`]: Removed-toast ring buffer size
//! - [`TickInterval`]: Async driver tick rate

mod newtypes;

pub use newtypes::{
    duration_bounds, grace_delay_bounds, history_capacity_bounds, max_visible_bounds,
    tick_interval_bounds, DefaultDuration, GraceDelay, HistoryCapacity, MaxVisible, TickInterval,
};
