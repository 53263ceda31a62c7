// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record held by the store, the `NewToast`
//! draft producers hand to it, and the option/update structures used to
//! shape both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast.
///
/// Identifiers come from a process-wide counter, so they stay unique across
/// every store instance and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Presentation style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Neutral styling.
    #[default]
    Default,
    /// Error styling.
    Destructive,
}

/// What the producer meant to report.
///
/// The kind is kept on the record for renderers that want to tell a warning
/// from a success, but only [`Variant`] is guaranteed to drive styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    /// Operation completed successfully.
    Success,
    /// Neutral status update.
    #[default]
    Info,
    /// Cautionary condition that did not block the operation.
    Warning,
    /// Operation failed.
    Error,
    /// Operation still in flight.
    Loading,
}

impl ToastKind {
    /// Returns the presentation variant for this kind.
    ///
    /// Errors are destructive, everything else uses the default style.
    #[must_use]
    pub fn variant(self) -> Variant {
        match self {
            ToastKind::Error => Variant::Destructive,
            ToastKind::Success | ToastKind::Info | ToastKind::Warning | ToastKind::Loading => {
                Variant::Default
            }
        }
    }
}

/// User-triggerable affordance attached to a toast (e.g. "Undo").
///
/// The store never interprets it; the renderer shows `label` and reports
/// `command` back to the application when the user activates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastAction {
    pub label: String,
    pub command: String,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
        }
    }
}

/// Optional fields a producer may attach when creating a toast.
///
/// Every field defaults to `None`: no description, the store's default
/// time-to-live, and no action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub description: Option<String>,
    pub duration: Option<Duration>,
    pub action: Option<ToastAction>,
}

impl ToastOptions {
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// A toast that has not been added to a store yet.
///
/// The store assigns the identifier and the `open` flag on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewToast {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: ToastKind,
    pub variant: Variant,
    pub duration: Option<Duration>,
    pub action: Option<ToastAction>,
}

impl NewToast {
    /// Creates a draft of the given kind, styled with the kind's variant.
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            kind,
            variant: kind.variant(),
            ..Self::default()
        }
    }

    /// Merges producer options into the draft. Fields left `None` are kept.
    #[must_use]
    pub fn with_options(mut self, options: ToastOptions) -> Self {
        let ToastOptions {
            description,
            duration,
            action,
        } = options;
        self.description = description.or(self.description);
        self.duration = duration.or(self.duration);
        self.action = action.or(self.action);
        self
    }

    /// Overrides the variant derived from the kind.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub(crate) fn into_toast(self, id: ToastId) -> Toast {
        Toast {
            id,
            title: self.title,
            description: self.description,
            kind: self.kind,
            variant: self.variant,
            duration: self.duration,
            open: true,
            action: self.action,
        }
    }
}

/// Partial update merged into an existing toast.
///
/// `None` leaves the corresponding field unchanged. The identifier and the
/// `open` flag cannot be changed through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<ToastKind>,
    pub variant: Option<Variant>,
    pub duration: Option<Duration>,
    pub action: Option<ToastAction>,
}

impl ToastUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the kind and restyles the toast with that kind's variant.
    ///
    /// Call [`ToastUpdate::variant`] afterwards to pick a different style.
    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self.variant = Some(kind.variant());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets a new time-to-live, counted from the moment the update is applied.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Returns true if applying this update would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A toast held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    id: ToastId,
    title: Option<String>,
    description: Option<String>,
    kind: ToastKind,
    variant: Variant,
    duration: Option<Duration>,
    open: bool,
    action: Option<ToastAction>,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the toast's own time-to-live, if it set one.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns false once the toast has been dismissed and is waiting for removal.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    pub(crate) fn merge(&mut self, update: ToastUpdate) {
        let ToastUpdate {
            title,
            description,
            kind,
            variant,
            duration,
            action,
        } = update;
        if let Some(title) = title {
            self.title = Some(title);
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(kind) = kind {
            self.kind = kind;
        }
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(duration) = duration {
            self.duration = Some(duration);
        }
        if let Some(action) = action {
            self.action = Some(action);
        }
    }
}
