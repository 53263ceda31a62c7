// SPDX-License-Identifier: MPL-2.0
//! Producer-facing shorthand for the toast store.
//!
//! Application code reports outcomes through a [`Notifier`] and gets back a
//! [`ToastHandle`] bound to the toast it created, so a long-running
//! operation can turn its "loading" toast into "done" without tracking IDs.
//! Nothing here can fail: these calls are made from error paths.

use super::notification::{NewToast, Toast, ToastId, ToastKind, ToastOptions, ToastUpdate};
use super::store::ToastStore;
use crate::config::LOADING_DURATION_MS;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Cheap, cloneable front end to a [`ToastStore`].
#[derive(Debug, Clone)]
pub struct Notifier {
    store: ToastStore,
}

impl Notifier {
    #[must_use]
    pub fn new(store: ToastStore) -> Self {
        Self { store }
    }

    /// Returns a notifier bound to the process-wide store.
    ///
    /// As with [`crate::global`], the store still needs a ticker for its
    /// timers to fire.
    #[must_use]
    pub fn global() -> Self {
        Self::new(crate::global().clone())
    }

    #[must_use]
    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    /// Reports a successful operation.
    pub fn success(&self, title: impl Into<String>, options: ToastOptions) -> ToastHandle {
        self.show(ToastKind::Success, title, options)
    }

    /// Reports a failed operation with destructive styling.
    pub fn error(&self, title: impl Into<String>, options: ToastOptions) -> ToastHandle {
        self.show(ToastKind::Error, title, options)
    }

    /// Reports a cautionary condition.
    pub fn warning(&self, title: impl Into<String>, options: ToastOptions) -> ToastHandle {
        self.show(ToastKind::Warning, title, options)
    }

    /// Reports a neutral status update.
    pub fn info(&self, title: impl Into<String>, options: ToastOptions) -> ToastHandle {
        self.show(ToastKind::Info, title, options)
    }

    /// Shows a toast for an operation still in flight.
    ///
    /// Without an explicit duration it stays up until updated or dismissed.
    pub fn loading(&self, title: impl Into<String>, options: ToastOptions) -> ToastHandle {
        self.show(ToastKind::Loading, title, options)
    }

    /// Shows a toast of any kind.
    pub fn show(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        mut options: ToastOptions,
    ) -> ToastHandle {
        if kind == ToastKind::Loading && options.duration.is_none() {
            options.duration = Some(Duration::from_millis(LOADING_DURATION_MS));
        }
        let id = self.store.add(NewToast::new(kind, title).with_options(options));
        ToastHandle {
            id,
            store: self.store.clone(),
        }
    }

    /// Closes one toast, or every open toast when `id` is `None`.
    pub fn dismiss(&self, id: Option<ToastId>) {
        self.store.dismiss(id);
    }

    /// Tracks `future` with a single toast.
    ///
    /// A loading toast is shown while the future runs. On completion the same
    /// toast becomes a success, or an error whose description is the error's
    /// message, and starts counting down the default duration. The future's
    /// output is returned unchanged.
    pub async fn promise<F, T, E>(&self, future: F, messages: PromiseMessages) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let handle = self.loading(messages.loading, ToastOptions::default());
        let result = future.await;
        let settled = ToastUpdate::new().duration(self.store.default_duration());
        match &result {
            Ok(_) => handle.update(settled.kind(ToastKind::Success).title(messages.success)),
            Err(err) => handle.update(
                settled
                    .kind(ToastKind::Error)
                    .title(messages.error)
                    .description(err.to_string()),
            ),
        }
        result
    }
}

/// Titles shown by [`Notifier::promise`] for each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromiseMessages {
    pub loading: String,
    pub success: String,
    pub error: String,
}

impl PromiseMessages {
    pub fn new(
        loading: impl Into<String>,
        success: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            loading: loading.into(),
            success: success.into(),
            error: error.into(),
        }
    }
}

/// Reference to one toast, returned to the producer that created it.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    id: ToastId,
    store: ToastStore,
}

impl ToastHandle {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Merges fields into the toast. Does nothing once it has been removed.
    pub fn update(&self, update: ToastUpdate) {
        self.store.update(self.id, update);
    }

    /// Closes the toast; it leaves the list after the grace delay.
    pub fn dismiss(&self) {
        self.store.dismiss(Some(self.id));
    }

    /// Drops the toast immediately.
    pub fn remove(&self) {
        self.store.remove(Some(self.id));
    }

    /// Returns true while the toast is still in the list, open or closing.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.store.contains(self.id)
    }

    /// Returns the current state of the toast, if it is still in the list.
    #[must_use]
    pub fn get(&self) -> Option<Toast> {
        self.store.get(self.id)
    }
}
