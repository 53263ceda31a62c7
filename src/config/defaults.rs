// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Registry**: Maximum number of simultaneously visible toasts
//! - **Timing**: Auto-dismiss duration, exit grace delay, driver tick rate
//! - **History**: Capacity of the removed-toast ring buffer

// ==========================================================================
// Registry Defaults
// ==========================================================================

/// Default maximum number of toasts held in the registry.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Minimum allowed registry size.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum allowed registry size.
pub const MAX_MAX_VISIBLE: usize = 20;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time-to-live for a toast that does not carry its own duration (ms).
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Minimum default time-to-live (ms).
pub const MIN_DURATION_MS: u64 = 500;

/// Maximum default time-to-live (ms).
pub const MAX_DURATION_MS: u64 = 120_000;

/// Delay between a toast being dismissed and it leaving the registry (ms).
///
/// Reserved for exit animations in the rendering layer.
pub const DEFAULT_GRACE_DELAY_MS: u64 = 1_000;

/// Minimum grace delay (ms). Zero removes on the next tick.
pub const MIN_GRACE_DELAY_MS: u64 = 0;

/// Maximum grace delay (ms).
pub const MAX_GRACE_DELAY_MS: u64 = 10_000;

/// Time-to-live given to loading toasts when the caller sets none (ms).
///
/// Long enough that an in-flight operation resolves the toast first.
pub const LOADING_DURATION_MS: u64 = 1_000_000;

/// Default interval between driver ticks (ms).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum driver tick interval (ms).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum driver tick interval (ms).
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of removed toasts kept for a notification center.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Minimum history capacity. Zero disables history.
pub const MIN_HISTORY_CAPACITY: usize = 0;

/// Maximum history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 1_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_VISIBLE > 0);
    assert!(DEFAULT_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);

    assert!(MIN_DURATION_MS > 0);
    assert!(DEFAULT_DURATION_MS >= MIN_DURATION_MS);
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
    assert!(LOADING_DURATION_MS > MAX_DURATION_MS);

    assert!(DEFAULT_GRACE_DELAY_MS >= MIN_GRACE_DELAY_MS);
    assert!(DEFAULT_GRACE_DELAY_MS <= MAX_GRACE_DELAY_MS);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);
};
