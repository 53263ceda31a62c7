// SPDX-License-Identifier: MPL-2.0
//! Toast registry, listeners and timers.
//!
//! The `ToastStore` is the single owner of the live toast list. Every
//! mutation runs through the reducer under one lock, the resulting list is
//! copied out, and only then are listeners called, with no lock held. A
//! listener therefore always sees a complete list and may call back into
//! the store.

use super::history::CircularBuffer;
use super::notification::{NewToast, Toast, ToastId, ToastUpdate};
use super::reducer::{self, Action};
use super::timers::{Clock, SystemClock, TimerKind, Timers};
use crate::config::Config;
use crate::domain::toast::{DefaultDuration, GraceDelay, HistoryCapacity, MaxVisible};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

/// Callback invoked with the full toast list after every change.
pub type Listener = Arc<dyn Fn(&[Toast]) + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy)]
struct Settings {
    max_visible: MaxVisible,
    default_duration: DefaultDuration,
    grace_delay: GraceDelay,
    history_capacity: HistoryCapacity,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            max_visible: config.max_visible(),
            default_duration: config.default_duration(),
            grace_delay: config.grace_delay(),
            history_capacity: config.history_capacity(),
        }
    }
}

#[derive(Debug)]
struct State {
    toasts: Vec<Toast>,
    timers: Timers,
    history: CircularBuffer<Toast>,
    /// Bumped on every change; listeners never see a version twice.
    version: u64,
    published: Arc<Vec<Toast>>,
}

struct Slot {
    key: u64,
    listener: Listener,
    seen: u64,
}

/// Delivery is serialized: one caller drains notifications while the
/// others only flag that the list changed again.
#[derive(Debug, Default)]
struct Delivery {
    running: bool,
    pending: bool,
}

struct Inner {
    state: Mutex<State>,
    listeners: Mutex<Vec<Slot>>,
    delivery: Mutex<Delivery>,
    next_listener: AtomicU64,
    clock: Arc<dyn Clock>,
    settings: Settings,
}

/// Clears `Delivery::running` if a listener panics mid-round.
struct DeliveryGuard<'a> {
    delivery: &'a Mutex<Delivery>,
    armed: bool,
}

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut delivery = lock(self.delivery);
            delivery.running = false;
            delivery.pending = false;
        }
    }
}

impl Inner {
    /// Brings every listener up to the latest list.
    ///
    /// If a round is already running, on this thread (a listener re-entered
    /// the store) or another, that round picks the change up before it ends.
    fn notify(&self) {
        {
            let mut delivery = lock(&self.delivery);
            delivery.pending = true;
            if delivery.running {
                return;
            }
            delivery.running = true;
        }
        let mut guard = DeliveryGuard {
            delivery: &self.delivery,
            armed: true,
        };
        loop {
            {
                let mut delivery = lock(&self.delivery);
                if !delivery.pending {
                    delivery.running = false;
                    guard.armed = false;
                    return;
                }
                delivery.pending = false;
            }
            self.deliver_latest();
        }
    }

    fn deliver_latest(&self) {
        let listeners: Vec<(u64, Listener)> = lock(&self.listeners)
            .iter()
            .map(|slot| (slot.key, Arc::clone(&slot.listener)))
            .collect();
        for (key, listener) in listeners {
            // Re-read per listener: an earlier listener may have changed the list.
            let (version, toasts) = {
                let state = lock(&self.state);
                (state.version, Arc::clone(&state.published))
            };
            if self.mark_seen(key, version) {
                listener(&toasts);
            }
        }
    }

    /// Records that `key` is about to receive `version`. Returns `false` if
    /// it already has it, or has unsubscribed in the meantime.
    fn mark_seen(&self, key: u64, version: u64) -> bool {
        let mut listeners = lock(&self.listeners);
        match listeners.iter_mut().find(|slot| slot.key == key) {
            Some(slot) if slot.seen < version => {
                slot.seen = version;
                true
            }
            _ => false,
        }
    }

    fn unsubscribe(&self, key: u64) {
        lock(&self.listeners).retain(|slot| slot.key != key);
    }
}

/// Process-wide registry of live toasts.
///
/// Cloning is cheap and every clone refers to the same registry.
#[derive(Clone)]
pub struct ToastStore {
    inner: Arc<Inner>,
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastStore")
            .field("toasts", &self.len())
            .field("listeners", &self.listener_count())
            .field("settings", &self.inner.settings)
            .finish_non_exhaustive()
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ToastStore {
    /// Creates an isolated store driven by the system clock.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates an isolated store reading time from `clock`.
    #[must_use]
    pub fn with_clock(config: &Config, clock: impl Clock + 'static) -> Self {
        let settings = Settings::from(config);
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State {
                    toasts: Vec::new(),
                    timers: Timers::new(),
                    history: CircularBuffer::new(settings.history_capacity),
                    version: 1,
                    published: Arc::new(Vec::new()),
                }),
                listeners: Mutex::new(Vec::new()),
                delivery: Mutex::new(Delivery::default()),
                next_listener: AtomicU64::new(0),
                clock: Arc::new(clock),
                settings,
            }),
        }
    }

    /// Adds a toast and returns its newly assigned ID.
    ///
    /// The toast goes to the front of the list. If the list then holds more
    /// than the configured maximum, the oldest toasts are dropped outright.
    pub fn add(&self, toast: NewToast) -> ToastId {
        let id = ToastId::new();
        tracing::debug!(%id, kind = ?toast.kind, "toast added");
        self.apply(Action::Add(toast.into_toast(id)));
        id
    }

    /// Merges `update` into the toast with this ID, keeping its position.
    ///
    /// Unknown IDs are ignored: the toast may already have expired.
    pub fn update(&self, id: ToastId, update: ToastUpdate) {
        self.apply(Action::Update(id, update));
    }

    /// Closes one toast, or every open toast when `id` is `None`.
    ///
    /// Closed toasts stay in the list with `open == false` until the grace
    /// delay elapses, then they are removed. Any pending expiry is cancelled.
    pub fn dismiss(&self, id: Option<ToastId>) {
        self.apply(Action::Dismiss(id));
    }

    /// Removes one toast, or every toast when `id` is `None`, without waiting
    /// for the grace delay.
    pub fn remove(&self, id: Option<ToastId>) {
        self.apply(Action::Remove(id));
    }

    /// Fires every timer that is due, oldest deadline first.
    ///
    /// Expired toasts are dismissed and dismissed toasts whose grace delay has
    /// elapsed are removed. Each fired timer notifies listeners on its own.
    /// Returns the number of timers fired.
    pub fn tick(&self) -> usize {
        let now = self.inner.clock.now();
        let mut fired = 0;
        loop {
            let changed = {
                let mut state = lock(&self.inner.state);
                let Some((id, kind)) = state.timers.pop_due(now) else {
                    break;
                };
                fired += 1;
                tracing::trace!(%id, ?kind, "toast timer fired");
                let action = match kind {
                    TimerKind::Expire => Action::Dismiss(Some(id)),
                    TimerKind::Remove => Action::Remove(Some(id)),
                };
                self.transition(&mut state, action)
            };
            if changed {
                self.inner.notify();
            }
        }
        fired
    }

    /// Registers a listener and calls it with the current list.
    ///
    /// Afterwards it is called with the full list after every change, until
    /// the returned [`Subscription`] is unsubscribed or dropped. Registering
    /// the same closure twice yields two independent subscriptions.
    ///
    /// The first call happens before `subscribe` returns, unless another
    /// notification round is in progress; that round then delivers it.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[Toast]) + Send + Sync + 'static,
    {
        let key = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner.listeners).push(Slot {
            key,
            listener: Arc::new(listener),
            seen: 0,
        });
        tracing::trace!(key, "toast listener subscribed");
        self.inner.notify();

        Subscription {
            key,
            store: Arc::downgrade(&self.inner),
            active: true,
        }
    }

    /// Returns a copy of the current list, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast> {
        lock(&self.inner.state).toasts.clone()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Toast> {
        lock(&self.inner.state)
            .toasts
            .iter()
            .find(|t| t.id() == id)
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        lock(&self.inner.state).toasts.iter().any(|t| t.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.inner.state).toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.inner.state).toasts.is_empty()
    }

    /// Returns the toasts that have left the registry, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Toast> {
        lock(&self.inner.state).history.iter().cloned().collect()
    }

    /// Returns the earliest instant at which [`ToastStore::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        lock(&self.inner.state).timers.next_deadline()
    }

    /// Returns the time-to-live applied to toasts without their own duration.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.inner.settings.default_duration.as_duration()
    }

    /// Returns the delay between dismissal and removal.
    #[must_use]
    pub fn grace_delay(&self) -> Duration {
        self.inner.settings.grace_delay.as_duration()
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.inner.settings.max_visible.value()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.inner.listeners).len()
    }

    /// Returns a handle that does not keep the store alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakToastStore {
        WeakToastStore {
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn apply(&self, action: Action) {
        let changed = {
            let mut state = lock(&self.inner.state);
            self.transition(&mut state, action)
        };
        if changed {
            self.inner.notify();
        }
    }

    /// Runs the reducer and its timer/history side effects under the state lock.
    ///
    /// Returns whether there is a new list to publish.
    fn transition(&self, state: &mut State, action: Action) -> bool {
        let settings = self.inner.settings;
        let mut transition = reducer::reduce(&mut state.toasts, action, settings.max_visible);
        if !transition.changed {
            return false;
        }

        let now = self.inner.clock.now();
        for (id, duration) in transition.expiring.drain(..) {
            let ttl = duration.unwrap_or_else(|| settings.default_duration.as_duration());
            // A deadline past what `Instant` can hold means the toast never expires.
            match now.checked_add(ttl) {
                Some(deadline) => {
                    state.timers.schedule(id, TimerKind::Expire, deadline);
                }
                None => {
                    tracing::trace!(%id, ?ttl, "toast duration out of range, not expiring");
                    state.timers.cancel(id);
                }
            }
        }
        for id in transition.dismissed.drain(..) {
            tracing::debug!(%id, "toast dismissed");
            match now.checked_add(settings.grace_delay.as_duration()) {
                Some(deadline) => state.timers.schedule(id, TimerKind::Remove, deadline),
                None => state.timers.cancel(id),
            };
        }
        for toast in &transition.evicted {
            tracing::debug!(id = %toast.id(), "toast evicted");
        }
        for toast in transition.departed() {
            tracing::debug!(id = %toast.id(), "toast left the registry");
            state.timers.cancel(toast.id());
            state.history.push(toast);
        }

        state.version += 1;
        state.published = Arc::new(state.toasts.clone());
        true
    }
}

/// Non-owning reference to a [`ToastStore`].
#[derive(Clone)]
pub struct WeakToastStore {
    inner: Weak<Inner>,
}

impl WeakToastStore {
    /// Returns the store if any strong handle is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<ToastStore> {
        self.inner.upgrade().map(|inner| ToastStore { inner })
    }
}

impl fmt::Debug for WeakToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakToastStore")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

/// Registration of a store listener.
///
/// Dropping the subscription unsubscribes the listener.
#[must_use = "dropping a Subscription unsubscribes its listener"]
#[derive(Debug)]
pub struct Subscription {
    key: u64,
    store: Weak<Inner>,
    active: bool,
}

impl Subscription {
    /// Removes the listener. Calling this more than once does nothing.
    pub fn unsubscribe(&mut self) {
        if !std::mem::take(&mut self.active) {
            return;
        }
        if let Some(inner) = self.store.upgrade() {
            inner.unsubscribe(self.key);
            tracing::trace!(key = self.key, "toast listener unsubscribed");
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active && self.store.strong_count() > 0
    }

    /// Keeps the listener registered for the rest of the store's lifetime.
    pub fn forget(mut self) {
        self.active = false;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inner")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::notification::ToastKind;
    use crate::notifications::timers::ManualClock;

    fn store_with(max_visible: usize, grace_ms: u64) -> (ToastStore, ManualClock) {
        let clock = ManualClock::new();
        let config = Config {
            max_visible: Some(max_visible),
            grace_delay_ms: Some(grace_ms),
            default_duration_ms: Some(5_000),
            ..Config::default()
        };
        (ToastStore::with_clock(&config, clock.clone()), clock)
    }

    fn info(title: &str) -> NewToast {
        NewToast::new(ToastKind::Info, title)
    }

    fn titles(store: &ToastStore) -> Vec<String> {
        store
            .snapshot()
            .iter()
            .filter_map(|t| t.title().map(str::to_owned))
            .collect()
    }

    #[test]
    fn add_keeps_most_recent_within_limit() {
        let (store, _) = store_with(3, 1_000);
        for title in ["A", "B", "C", "D"] {
            store.add(info(title));
        }
        assert_eq!(titles(&store), vec!["D", "C", "B"]);
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.history()[0].title(), Some("A"));
    }

    #[test]
    fn evicted_toast_timer_is_cancelled() {
        let (store, clock) = store_with(1, 1_000);
        store.add(info("A"));
        store.add(info("B"));

        clock.advance(Duration::from_secs(10));
        // Only B's expiry remains: one dismissal.
        assert_eq!(store.tick(), 1);
    }

    #[test]
    fn dismiss_then_grace_delay_removes() {
        let (store, clock) = store_with(3, 1_000);
        let id = store.add(info("Saved"));

        store.dismiss(Some(id));
        assert_eq!(store.get(id).map(|t| t.is_open()), Some(false));

        clock.advance(Duration::from_millis(999));
        store.tick();
        assert!(store.contains(id));

        clock.advance(Duration::from_millis(1));
        store.tick();
        assert!(!store.contains(id));
    }

    #[test]
    fn dismiss_cancels_pending_expiry() {
        let (store, clock) = store_with(3, 1_000);
        let id = store.add(info("A"));
        store.dismiss(Some(id));

        // Past both the grace delay and the original expiry: exactly one
        // timer (the removal) fires.
        clock.advance(Duration::from_secs(6));
        assert_eq!(store.tick(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_cancels_every_timer() {
        let (store, clock) = store_with(3, 1_000);
        let id = store.add(info("A"));
        store.remove(Some(id));

        clock.advance(Duration::from_secs(60));
        assert_eq!(store.tick(), 0);
        assert!(store.next_deadline().is_none());
    }

    #[test]
    fn expiry_dismisses_then_removes() {
        let (store, clock) = store_with(3, 500);
        let id = store.add(info("A"));

        clock.advance(Duration::from_millis(5_000));
        assert_eq!(store.tick(), 1);
        assert_eq!(store.get(id).map(|t| t.is_open()), Some(false));

        clock.advance(Duration::from_millis(500));
        assert_eq!(store.tick(), 1);
        assert!(!store.contains(id));
    }

    #[test]
    fn own_duration_overrides_default() {
        let (store, clock) = store_with(3, 1_000);
        let mut draft = info("short");
        draft.duration = Some(Duration::from_millis(100));
        let id = store.add(draft);

        clock.advance(Duration::from_millis(100));
        store.tick();
        assert_eq!(store.get(id).map(|t| t.is_open()), Some(false));
    }

    #[test]
    fn zero_grace_delay_removes_on_the_same_tick() {
        let (store, clock) = store_with(3, 0);
        let id = store.add(info("A"));

        clock.advance(Duration::from_millis(5_000));
        assert_eq!(store.tick(), 2);
        assert!(!store.contains(id));
    }

    #[test]
    fn update_with_duration_restarts_countdown() {
        let (store, clock) = store_with(3, 1_000);
        let id = store.add(info("Loading"));

        clock.advance(Duration::from_millis(4_000));
        store.update(id, ToastUpdate::new().duration(Duration::from_millis(3_000)));

        clock.advance(Duration::from_millis(2_000));
        store.tick();
        assert_eq!(store.get(id).map(|t| t.is_open()), Some(true));

        clock.advance(Duration::from_millis(1_000));
        store.tick();
        assert_eq!(store.get(id).map(|t| t.is_open()), Some(false));
    }

    #[test]
    fn subscribe_delivers_current_list_immediately() {
        let (store, _) = store_with(3, 1_000);
        store.add(info("A"));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let _subscription = store.subscribe(move |toasts| {
            lock(&sink).push(toasts.len());
        });

        assert_eq!(*lock(&seen), vec![1]);
    }

    #[test]
    fn two_listeners_each_see_one_identical_list_per_add() {
        let (store, _) = store_with(3, 1_000);
        let first = Arc::new(Mutex::new(Vec::<Vec<Toast>>::new()));
        let second = Arc::new(Mutex::new(Vec::<Vec<Toast>>::new()));
        let (a, b) = (Arc::clone(&first), Arc::clone(&second));
        let _s1 = store.subscribe(move |toasts| lock(&a).push(toasts.to_vec()));
        let _s2 = store.subscribe(move |toasts| lock(&b).push(toasts.to_vec()));
        lock(&first).clear();
        lock(&second).clear();

        store.add(info("A"));

        let first = lock(&first);
        let second = lock(&second);
        assert_eq!(first.len(), 1);
        assert_eq!(*first, *second);
    }

    #[test]
    fn unsubscribed_listener_is_never_called_again() {
        let (store, _) = store_with(3, 1_000);
        let calls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&calls);
        let mut subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        subscription.unsubscribe();
        subscription.unsubscribe();
        store.add(info("A"));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn same_closure_subscribed_twice_is_independent() {
        let (store, _) = store_with(3, 1_000);
        let calls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&calls);
        let listener = move |_: &[Toast]| {
            counter.fetch_add(1, Ordering::SeqCst);
        };

        let mut first = store.subscribe(listener.clone());
        let _second = store.subscribe(listener);
        calls.store(0, Ordering::SeqCst);

        first.unsubscribe();
        store.add(info("A"));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let (store, _) = store_with(3, 1_000);
        {
            let _subscription = store.subscribe(|_| {});
            assert_eq!(store.listener_count(), 1);
        }
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn forgotten_subscription_stays_registered() {
        let (store, _) = store_with(3, 1_000);
        store.subscribe(|_| {}).forget();
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn no_op_mutations_do_not_notify() {
        let (store, _) = store_with(3, 1_000);
        let calls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&calls);
        let _subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        calls.store(0, Ordering::SeqCst);

        let unknown = ToastId::new();
        store.update(unknown, ToastUpdate::new().title("X"));
        store.dismiss(Some(unknown));
        store.remove(Some(unknown));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    /// Subscribes a listener that closes anything titled "auto-close".
    fn auto_closer(store: &ToastStore) -> Subscription {
        let weak = store.downgrade();
        store.subscribe(move |toasts| {
            let Some(store) = weak.upgrade() else {
                return;
            };
            if let Some(toast) = toasts
                .iter()
                .find(|t| t.is_open() && t.title() == Some("auto-close"))
            {
                store.dismiss(Some(toast.id()));
            }
        })
    }

    #[test]
    fn listener_sees_complete_list_and_may_reenter() {
        let (store, _) = store_with(3, 1_000);
        let _closer = auto_closer(&store);

        let id = store.add(info("auto-close"));
        assert_eq!(store.get(id).map(|t| t.is_open()), Some(false));
    }

    #[test]
    fn reentrant_listener_does_not_leave_later_listeners_stale() {
        let (store, _) = store_with(3, 1_000);
        let _closer = auto_closer(&store);
        let last = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&last);
        let _recorder = store.subscribe(move |toasts| *lock(&sink) = toasts.to_vec());
        let feed = crate::notifications::ToastFeed::attach(&store);

        let id = store.add(info("auto-close"));

        assert_eq!(store.get(id).map(|t| t.is_open()), Some(false));
        assert_eq!(feed.toasts(), store.snapshot());
        assert_eq!(*lock(&last), store.snapshot());
    }

    #[test]
    fn listener_never_sees_an_older_list_after_a_newer_one() {
        let (store, _) = store_with(3, 1_000);
        let _closer = auto_closer(&store);
        let lists = Arc::new(Mutex::new(Vec::<Vec<Toast>>::new()));
        let sink = Arc::clone(&lists);
        let _recorder = store.subscribe(move |toasts| lock(&sink).push(toasts.to_vec()));
        lock(&lists).clear();

        store.add(info("auto-close"));

        // The recorder runs after the closer, so it only gets the closed list.
        let lists = lock(&lists);
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].first().map(Toast::is_open), Some(false));
    }

    #[test]
    fn concurrent_producers_leave_feeds_in_sync() {
        let (store, _) = store_with(5, 1_000);
        let feed = crate::notifications::ToastFeed::attach(&store);

        let producers: Vec<_> = (0..4)
            .map(|n| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        let id = store.add(info(&format!("dose {n}-{i}")));
                        if i % 3 == 0 {
                            store.dismiss(Some(id));
                        }
                    }
                })
            })
            .collect();
        for producer in producers {
            producer.join().expect("producer thread");
        }

        assert_eq!(feed.toasts(), store.snapshot());
    }

    #[test]
    fn listener_subscribing_during_a_round_gets_the_current_list() {
        let (store, _) = store_with(3, 1_000);
        let late = Arc::new(Mutex::new(Vec::<Vec<Toast>>::new()));
        let held = Arc::new(Mutex::new(Vec::<Subscription>::new()));
        let (weak, sink, keep) = (store.downgrade(), Arc::clone(&late), Arc::clone(&held));
        let _spawner = store.subscribe(move |toasts| {
            if toasts.is_empty() || !lock(&keep).is_empty() {
                return;
            }
            let Some(store) = weak.upgrade() else {
                return;
            };
            let sink = Arc::clone(&sink);
            let subscription = store.subscribe(move |toasts| lock(&sink).push(toasts.to_vec()));
            lock(&keep).push(subscription);
        });

        store.add(info("A"));

        assert_eq!(*lock(&late), vec![store.snapshot()]);
    }

    #[test]
    fn unbounded_duration_on_add_never_expires() {
        let (store, clock) = store_with(3, 1_000);
        let mut draft = info("forever");
        draft.duration = Some(Duration::MAX);

        let id = store.add(draft);
        assert!(store.next_deadline().is_none());

        clock.advance(Duration::from_secs(365 * 24 * 3600));
        assert_eq!(store.tick(), 0);
        assert_eq!(store.get(id).map(|t| t.is_open()), Some(true));

        store.dismiss(Some(id));
        clock.advance(Duration::from_secs(1));
        store.tick();
        assert!(!store.contains(id));
    }

    #[test]
    fn unbounded_duration_on_update_cancels_expiry() {
        let (store, clock) = store_with(3, 1_000);
        let id = store.add(info("Uploading"));

        store.update(
            id,
            ToastUpdate::new()
                .title("Still uploading")
                .duration(Duration::from_secs(u64::MAX)),
        );

        assert_eq!(titles(&store), vec!["Still uploading"]);
        clock.advance(Duration::from_secs(60));
        assert_eq!(store.tick(), 0);
        assert_eq!(store.get(id).map(|t| t.is_open()), Some(true));
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let (store, _) = store_with(3, 1_000);
        let mut subscription = store.subscribe(|_| {});
        drop(store);
        assert!(!subscription.is_active());
        subscription.unsubscribe();
    }

    #[test]
    fn weak_store_upgrades_while_alive() {
        let (store, _) = store_with(3, 1_000);
        let weak = store.downgrade();
        assert!(weak.upgrade().is_some());
        drop(store);
        assert!(weak.upgrade().is_none());
    }
}
