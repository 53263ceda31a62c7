// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for toast store settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Registry size bounds (1 to 20 toasts).
pub mod max_visible_bounds {
    /// Minimum number of toasts held at once.
    pub const MIN: usize = 1;
    /// Maximum number of toasts held at once.
    pub const MAX: usize = 20;
    /// Default number of toasts held at once.
    pub const DEFAULT: usize = 3;
}

/// Default time-to-live bounds in milliseconds (0.5s to 2min).
pub mod duration_bounds {
    /// Minimum default duration.
    pub const MIN_MS: u64 = 500;
    /// Maximum default duration.
    pub const MAX_MS: u64 = 120_000;
    /// Default duration.
    pub const DEFAULT_MS: u64 = 5_000;
}

/// Grace delay bounds in milliseconds (0 to 10s).
pub mod grace_delay_bounds {
    /// Minimum grace delay.
    pub const MIN_MS: u64 = 0;
    /// Maximum grace delay.
    pub const MAX_MS: u64 = 10_000;
    /// Default grace delay.
    pub const DEFAULT_MS: u64 = 1_000;
}

/// History capacity bounds (0 to 1000 entries).
pub mod history_capacity_bounds {
    /// Minimum capacity; zero keeps no history.
    pub const MIN: usize = 0;
    /// Maximum capacity.
    pub const MAX: usize = 1_000;
    /// Default capacity.
    pub const DEFAULT: usize = 50;
}

/// Tick interval bounds in milliseconds (10ms to 1s).
pub mod tick_interval_bounds {
    /// Minimum tick interval.
    pub const MIN_MS: u64 = 10;
    /// Maximum tick interval.
    pub const MAX_MS: u64 = 1_000;
    /// Default tick interval.
    pub const DEFAULT_MS: u64 = 100;
}

// =============================================================================
// MaxVisible
// =============================================================================

/// Upper bound on the number of toasts in the registry.
///
/// Adding beyond this bound evicts the oldest entries outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new registry bound, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_visible_bounds::MIN, max_visible_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(max_visible_bounds::DEFAULT)
    }
}

// =============================================================================
// DefaultDuration
// =============================================================================

/// Time-to-live applied to toasts that do not carry their own duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultDuration(u64);

impl DefaultDuration {
    /// Creates a new default duration in milliseconds, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(duration_bounds::MIN_MS, duration_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DefaultDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// GraceDelay
// =============================================================================

/// Interval between dismissal (`open = false`) and removal from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraceDelay(u64);

impl GraceDelay {
    /// Creates a new grace delay in milliseconds, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(grace_delay_bounds::MIN_MS, grace_delay_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if dismissed toasts leave on the very next tick.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl Default for GraceDelay {
    fn default() -> Self {
        Self(grace_delay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// HistoryCapacity
// =============================================================================

/// Number of removed toasts remembered by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new history capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_capacity_bounds::MIN, history_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if history is disabled.
    #[must_use]
    pub fn is_disabled(self) -> bool {
        self.0 == 0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Interval at which an async driver fires due timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new tick interval in milliseconds, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(tick_interval_bounds::MIN_MS, tick_interval_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_interval_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
