// SPDX-License-Identifier: MPL-2.0
//! `toastline` is an in-memory toast notification store.
//!
//! It keeps the list of short-lived, user-facing notifications an
//! application shows after asynchronous operations, expires them on a timer,
//! and publishes every change to the rendering layers subscribed to it.
//! Producers go through [`notifications::Notifier`], consumers through
//! [`notifications::ToastFeed`].

#![doc(html_root_url = "https://docs.rs/toastline/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;

use notifications::ToastStore;
use std::sync::OnceLock;

static GLOBAL: OnceLock<ToastStore> = OnceLock::new();

/// Returns the process-wide store, creating it with default settings on
/// first use.
///
/// Prefer passing a [`ToastStore`] explicitly; this accessor exists for call
/// sites that cannot be handed one, such as panic hooks.
///
/// Timers only fire when [`ToastStore::tick`] runs. Nothing ticks this store
/// by default: call [`notifications::spawn_ticker`] on it (or tick it from
/// the UI loop), otherwise its toasts never expire and dismissed ones are
/// never removed.
pub fn global() -> &'static ToastStore {
    GLOBAL.get_or_init(ToastStore::default)
}

/// Installs `store` as the process-wide store.
///
/// Returns `false` if [`global`] was already initialized, in which case the
/// existing store is kept.
pub fn init_global(store: ToastStore) -> bool {
    GLOBAL.set(store).is_ok()
}
