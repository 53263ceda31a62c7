// SPDX-License-Identifier: MPL-2.0
//! Consumer-facing view of the toast list.
//!
//! A rendering layer attaches a [`ToastFeed`] when it mounts and drops it
//! when it unmounts. The feed keeps the latest list in a `watch` channel,
//! so synchronous renderers read it directly and async ones await changes.

use super::notification::{Toast, ToastId};
use super::store::{Subscription, ToastStore};
use tokio::sync::watch;

/// Live, self-updating copy of a store's toast list.
#[derive(Debug)]
pub struct ToastFeed {
    store: ToastStore,
    receiver: watch::Receiver<Vec<Toast>>,
    subscription: Subscription,
}

impl ToastFeed {
    /// Subscribes to `store` and captures its current list.
    #[must_use]
    pub fn attach(store: &ToastStore) -> Self {
        let (sender, mut receiver) = watch::channel(Vec::new());
        let subscription = store.subscribe(move |toasts| {
            sender.send_replace(toasts.to_vec());
        });
        // The list delivered on subscribe is the starting point, not a change.
        receiver.mark_unchanged();
        Self {
            store: store.clone(),
            receiver,
            subscription,
        }
    }

    /// Returns the latest list, newest first, including closing toasts.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.receiver.borrow().clone()
    }

    /// Returns only the toasts that are still open.
    #[must_use]
    pub fn visible(&self) -> Vec<Toast> {
        self.receiver
            .borrow()
            .iter()
            .filter(|t| t.is_open())
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.receiver.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receiver.borrow().is_empty()
    }

    /// Waits for the next change and returns the new list.
    ///
    /// Returns `None` once the feed is detached.
    pub async fn changed(&mut self) -> Option<Vec<Toast>> {
        if !self.subscription.is_active() {
            return None;
        }
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Closes a toast on the user's behalf, or all of them when `id` is `None`.
    pub fn dismiss(&self, id: Option<ToastId>) {
        self.store.dismiss(id);
    }

    /// Stops receiving updates. Calling this more than once does nothing.
    pub fn detach(&mut self) {
        self.subscription.unsubscribe();
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::notifications::notification::{NewToast, ToastKind};
    use std::time::Duration;

    fn info(title: &str) -> NewToast {
        NewToast::new(ToastKind::Info, title)
    }

    #[test]
    fn attach_captures_current_list() {
        let store = ToastStore::new(&Config::default());
        store.add(info("A"));

        let feed = ToastFeed::attach(&store);
        assert_eq!(feed.len(), 1);
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn feed_follows_store_changes() {
        let store = ToastStore::new(&Config::default());
        let feed = ToastFeed::attach(&store);

        let id = store.add(info("A"));
        store.add(info("B"));
        assert_eq!(feed.len(), 2);

        feed.dismiss(Some(id));
        assert_eq!(feed.toasts().len(), 2);
        assert_eq!(feed.visible().len(), 1);
        assert_eq!(feed.visible()[0].title(), Some("B"));
    }

    #[test]
    fn detach_and_drop_release_the_listener() {
        let store = ToastStore::new(&Config::default());
        let mut feed = ToastFeed::attach(&store);
        let other = ToastFeed::attach(&store);
        assert_eq!(store.listener_count(), 2);

        feed.detach();
        feed.detach();
        assert!(!feed.is_attached());
        assert_eq!(store.listener_count(), 1);

        store.add(info("A"));
        assert!(feed.is_empty());
        assert_eq!(other.len(), 1);

        drop(other);
        assert_eq!(store.listener_count(), 0);
    }

    #[tokio::test]
    async fn changed_resolves_on_next_mutation() {
        let store = ToastStore::new(&Config::default());
        let mut feed = ToastFeed::attach(&store);

        let producer = store.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            producer.add(info("Refill reminder"));
        });

        let toasts = feed.changed().await.expect("feed attached");
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title(), Some("Refill reminder"));
    }

    #[tokio::test]
    async fn changed_returns_none_after_detach() {
        let store = ToastStore::new(&Config::default());
        let mut feed = ToastFeed::attach(&store);
        feed.detach();
        assert!(feed.changed().await.is_none());
    }
}
