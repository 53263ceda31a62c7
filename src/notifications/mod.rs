// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Toasts inform users about the outcome of
//! asynchronous operations (record saved, upload failed, label scanned)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Toast` record, `NewToast` drafts, options and updates
//! - [`reducer`] - Pure state transitions on the registry
//! - [`timers`] - Per-toast expiry/removal timers and the `Clock` trait
//! - [`store`] - `ToastStore` owning the registry and its listeners
//! - [`notifier`] - `Notifier` producer API returning `ToastHandle`s
//! - [`feed`] - `ToastFeed` consumer API for rendering layers
//! - [`driver`] - tokio ticker firing due timers
//!
//! # Usage
//!
//! ```
//! use toastline::config::Config;
//! use toastline::notifications::{Notifier, ToastFeed, ToastOptions, ToastStore};
//!
//! let store = ToastStore::new(&Config::default());
//! let feed = ToastFeed::attach(&store);
//! let notify = Notifier::new(store.clone());
//!
//! let saved = notify.success("Prescription saved", ToastOptions::default());
//! assert_eq!(feed.visible().len(), 1);
//!
//! saved.dismiss();
//! assert!(feed.visible().is_empty());
//! ```
//!
//! # Lifecycle
//!
//! `created -> open -> (update)* -> dismissing (open = false) -> removed`.
//! Dismissal comes from the producer's handle, the consumer's feed, or the
//! expiry timer. Removal happens after the grace delay, on eviction, or on
//! an explicit remove. Removed toasts cannot come back.

pub mod driver;
pub mod feed;
mod history;
pub mod notification;
pub mod notifier;
pub mod reducer;
pub mod store;
pub mod timers;

pub use driver::{spawn_ticker, TokioClock};
pub use feed::ToastFeed;
pub use history::CircularBuffer;
pub use notification::{
    NewToast, Toast, ToastAction, ToastId, ToastKind, ToastOptions, ToastUpdate, Variant,
};
pub use notifier::{Notifier, PromiseMessages, ToastHandle};
pub use store::{Listener, Subscription, ToastStore, WeakToastStore};
pub use timers::{Clock, ManualClock, SystemClock};
