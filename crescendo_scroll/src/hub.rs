// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared aggregator: one scroll listener, one computation per frame, ordered fan-out.
//!
//! ## Lifecycle
//!
//! - The first [`ScrollHub::subscribe`] attaches the scroll listener and samples
//!   the viewport immediately, so [`ScrollHub::current_state`] is meaningful
//!   before any scrolling happens.
//! - [`ScrollHub::handle_scroll`] requests a frame; further notifications before
//!   that frame runs are coalesced.
//! - [`ScrollHub::handle_frame`] samples once and calls every subscriber, in
//!   registration order, with the same snapshot.
//! - When the last [`Subscription`] is released the listener is detached and any
//!   pending frame is cancelled.
//!
//! ## Re-entrancy
//!
//! No internal borrow is held while callbacks run. A callback may read
//! [`ScrollHub::current_state`], subscribe, or unsubscribe anything. The list of
//! recipients is fixed when delivery starts: a subscriber removed mid-delivery
//! still receives the snapshot in flight, and one added mid-delivery waits for
//! the next frame.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Ref, RefCell};
use core::fmt;

use crate::{
    ConfigError, FrameScheduler, ScrollConfig, ScrollSampler, ScrollState, ViewportSource,
};

/// Identifier of a registered subscriber, unique per hub.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw value, for logging.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Counters describing how much work the hub has done.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HubStats {
    /// Scroll notifications received while listening.
    pub scroll_events: u64,
    /// Notifications dropped because a frame was already pending.
    pub coalesced: u64,
    /// Frames that produced a new snapshot.
    pub frames: u64,
    /// Successful callback invocations.
    pub deliveries: u64,
    /// Callback invocations that panicked (only caught with the `std` feature).
    pub failures: u64,
}

type Callback = Rc<RefCell<dyn FnMut(&ScrollState)>>;

#[derive(Clone)]
struct Entry {
    id: SubscriptionId,
    callback: Callback,
}

struct HubInner<V, S: FrameScheduler> {
    viewport: V,
    scheduler: S,
    sampler: ScrollSampler,
    subscribers: Vec<Entry>,
    next_id: u64,
    pending: Option<S::Handle>,
    listening: bool,
    stats: HubStats,
}

impl<V: ViewportSource, S: FrameScheduler> HubInner<V, S> {
    fn start(&mut self) {
        self.listening = true;
        self.viewport.attach_scroll_listener();
        self.sampler.reset();
        let state = self.sample();
        tracing::debug!(
            scroll_y = state.scroll_y,
            progress = state.scroll_progress,
            "scroll listener attached"
        );
    }

    fn stop(&mut self) {
        self.listening = false;
        self.viewport.detach_scroll_listener();
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
            tracing::trace!(?handle, "pending frame cancelled");
        }
        tracing::debug!("scroll listener detached");
    }

    fn sample(&mut self) -> ScrollState {
        let metrics = self.viewport.metrics();
        if metrics.is_none() {
            tracing::debug!("viewport metrics unavailable, publishing zero state");
        }
        self.sampler.sample(metrics)
    }
}

/// Removal half of the hub, type-erased so [`Subscription`] needs no generics.
trait Registry {
    fn remove(&mut self, id: SubscriptionId) -> bool;
    fn contains(&self, id: SubscriptionId) -> bool;
}

impl<V: ViewportSource, S: FrameScheduler> Registry for HubInner<V, S> {
    fn remove(&mut self, id: SubscriptionId) -> bool {
        let Some(index) = self.subscribers.iter().position(|e| e.id == id) else {
            return false;
        };
        self.subscribers.remove(index);
        tracing::trace!(subscription = id.0, "unsubscribed");
        if self.subscribers.is_empty() && self.listening {
            self.stop();
        }
        true
    }

    fn contains(&self, id: SubscriptionId) -> bool {
        self.subscribers.iter().any(|e| e.id == id)
    }
}

/// Single source of truth for scroll-derived state on one page.
///
/// Construct one per page (or scroll container) and hand clones to every
/// consumer; clones share the same listener, state, and subscriber list. The
/// hub is single-threaded by construction and is neither `Send` nor `Sync`.
///
/// ```
/// use crescendo_scroll::{ScrollDirection, ScrollHub};
/// use crescendo_scroll::sim::{ManualScheduler, SimulatedViewport};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let viewport = SimulatedViewport::new(2800.0, 800.0);
/// let frames = ManualScheduler::new();
/// let hub = ScrollHub::new(viewport.clone(), frames.clone());
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = seen.clone();
/// let _sub = hub.subscribe(move |state| sink.borrow_mut().push(*state));
///
/// for y in [100.0, 400.0, 1000.0] {
///     viewport.scroll_to(y);
///     hub.handle_scroll();
/// }
/// frames.fire(&hub);
///
/// // Three notifications, one frame, one delivery with the latest offset.
/// let seen = seen.borrow();
/// assert_eq!(seen.len(), 1);
/// assert_eq!(seen[0].scroll_y, 1000.0);
/// assert_eq!(seen[0].direction, ScrollDirection::Down);
/// ```
pub struct ScrollHub<V, S>
where
    V: ViewportSource + 'static,
    S: FrameScheduler + 'static,
{
    inner: Rc<RefCell<HubInner<V, S>>>,
}

impl<V, S> ScrollHub<V, S>
where
    V: ViewportSource + 'static,
    S: FrameScheduler + 'static,
{
    /// Creates an idle hub with the default configuration.
    ///
    /// Nothing is attached until the first subscriber arrives.
    #[must_use]
    pub fn new(viewport: V, scheduler: S) -> Self {
        Self::from_sampler(viewport, scheduler, ScrollSampler::new())
    }

    /// Creates an idle hub with a validated configuration.
    pub fn with_config(
        viewport: V,
        scheduler: S,
        config: ScrollConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_sampler(
            viewport,
            scheduler,
            ScrollSampler::with_config(config)?,
        ))
    }

    fn from_sampler(viewport: V, scheduler: S, sampler: ScrollSampler) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                viewport,
                scheduler,
                sampler,
                subscribers: Vec::new(),
                next_id: 0,
                pending: None,
                listening: false,
                stats: HubStats::default(),
            })),
        }
    }

    /// Registers `callback` for every snapshot computed from now on.
    ///
    /// The callback is not invoked for the current snapshot; read
    /// [`ScrollHub::current_state`] when mounting.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&ScrollState) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let id = SubscriptionId(inner.next_id);
            let callback: Callback = Rc::new(RefCell::new(callback));
            inner.subscribers.push(Entry { id, callback });
            tracing::trace!(subscription = id.0, "subscribed");
            if !inner.listening {
                inner.start();
            }
            id
        };
        let registry: Rc<RefCell<dyn Registry>> = self.inner.clone();
        Subscription {
            registry: Rc::downgrade(&registry),
            id,
        }
    }

    /// The most recently computed snapshot. Never triggers a recomputation.
    #[must_use]
    pub fn current_state(&self) -> ScrollState {
        self.inner.borrow().sampler.last()
    }

    /// Host entry point for a scroll notification.
    ///
    /// Requests a frame unless one is already pending, in which case the
    /// notification is coalesced. Ignored while nobody is subscribed.
    pub fn handle_scroll(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.listening {
            return;
        }
        inner.stats.scroll_events += 1;
        if inner.pending.is_some() {
            inner.stats.coalesced += 1;
            tracing::trace!(coalesced = inner.stats.coalesced, "scroll event coalesced");
            return;
        }
        let handle = inner.scheduler.request_frame();
        inner.pending = Some(handle);
    }

    /// Host entry point for the frame boundary requested by [`ScrollHub::handle_scroll`].
    ///
    /// Samples once and delivers the snapshot to every subscriber in
    /// registration order. A frame that was not requested, or was cancelled,
    /// does nothing.
    pub fn handle_frame(&self) {
        let (state, recipients) = {
            let mut inner = self.inner.borrow_mut();
            if inner.pending.take().is_none() {
                tracing::trace!("unrequested frame ignored");
                return;
            }
            let state = inner.sample();
            inner.stats.frames += 1;
            (state, inner.subscribers.clone())
        };
        self.deliver(&state, &recipients);
    }

    fn deliver(&self, state: &ScrollState, recipients: &[Entry]) {
        let mut delivered = 0;
        let mut failed = 0;
        for entry in recipients {
            let Ok(mut callback) = entry.callback.try_borrow_mut() else {
                tracing::warn!(
                    subscription = entry.id.0,
                    "subscriber re-entered during its own delivery, skipped"
                );
                continue;
            };
            if invoke(&mut *callback, state) {
                delivered += 1;
            } else {
                failed += 1;
                tracing::error!(subscription = entry.id.0, "scroll subscriber panicked");
            }
        }
        let mut inner = self.inner.borrow_mut();
        inner.stats.deliveries += delivered;
        inner.stats.failures += failed;
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Whether the scroll listener is attached.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.inner.borrow().listening
    }

    /// Whether a frame has been requested and has not run yet.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Work counters since construction.
    #[must_use]
    pub fn stats(&self) -> HubStats {
        self.inner.borrow().stats
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> ScrollConfig {
        *self.inner.borrow().sampler.config()
    }

    /// Borrows the viewport source.
    ///
    /// Do not hold the guard across calls into the hub.
    #[must_use]
    pub fn viewport(&self) -> Ref<'_, V> {
        Ref::map(self.inner.borrow(), |inner| &inner.viewport)
    }

    /// Borrows the frame scheduler.
    ///
    /// Do not hold the guard across calls into the hub.
    #[must_use]
    pub fn scheduler(&self) -> Ref<'_, S> {
        Ref::map(self.inner.borrow(), |inner| &inner.scheduler)
    }
}

impl<V, S> Clone for ScrollHub<V, S>
where
    V: ViewportSource + 'static,
    S: FrameScheduler + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V, S> fmt::Debug for ScrollHub<V, S>
where
    V: ViewportSource + 'static,
    S: FrameScheduler + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ScrollHub")
            .field("subscribers", &inner.subscribers.len())
            .field("listening", &inner.listening)
            .field("pending", &inner.pending)
            .field("state", &inner.sampler.last())
            .field("stats", &inner.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "std")]
fn invoke(callback: &mut dyn FnMut(&ScrollState), state: &ScrollState) -> bool {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| callback(state))).is_ok()
}

#[cfg(not(feature = "std"))]
fn invoke(callback: &mut dyn FnMut(&ScrollState), state: &ScrollState) -> bool {
    callback(state);
    true
}

/// Handle returned by [`ScrollHub::subscribe`].
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`]
/// when the consumer goes away.
#[must_use = "the subscription stays registered until `unsubscribe` is called"]
#[derive(Clone, Debug)]
pub struct Subscription {
    registry: Weak<RefCell<dyn Registry>>,
    id: SubscriptionId,
}

impl Subscription {
    /// Identifier of this subscription.
    #[must_use]
    pub const fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Deregisters the callback. Safe to call any number of times.
    ///
    /// Returns `true` only for the call that actually removed it.
    pub fn unsubscribe(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.borrow_mut().remove(self.id),
            None => false,
        }
    }

    /// Whether the callback is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScrollDirection;
    use crate::sim::{ManualScheduler, SimulatedViewport};
    use alloc::vec;

    type Log = Rc<RefCell<Vec<(u32, ScrollState)>>>;
    type TestHub = ScrollHub<SimulatedViewport, ManualScheduler>;

    fn page() -> (SimulatedViewport, ManualScheduler, TestHub) {
        let viewport = SimulatedViewport::new(2800.0, 800.0);
        let frames = ManualScheduler::new();
        let hub = ScrollHub::new(viewport.clone(), frames.clone());
        (viewport, frames, hub)
    }

    fn recorder(hub: &TestHub, tag: u32, log: &Log) -> Subscription {
        let log = log.clone();
        hub.subscribe(move |state| log.borrow_mut().push((tag, *state)))
    }

    fn scroll(viewport: &SimulatedViewport, frames: &ManualScheduler, hub: &TestHub, y: f64) {
        viewport.scroll_to(y);
        hub.handle_scroll();
        frames.fire(hub);
    }

    #[test]
    fn first_subscription_attaches_once_and_samples() {
        let (viewport, _frames, hub) = page();
        viewport.scroll_to(1000.0);
        assert!(!hub.is_listening());

        let a = hub.subscribe(|_| {});
        let b = hub.subscribe(|_| {});
        assert!(viewport.is_listening());
        assert_eq!(viewport.attach_count(), 1);
        assert_eq!(hub.subscriber_count(), 2);

        let initial = hub.current_state();
        assert_eq!(initial.scroll_progress, 0.5);
        assert_eq!(initial.direction, ScrollDirection::None);

        a.unsubscribe();
        b.unsubscribe();
    }

    #[test]
    fn end_to_end_scenario() {
        let (viewport, frames, hub) = page();
        let log: Log = Rc::default();
        let _sub = recorder(&hub, 0, &log);

        let initial = hub.current_state();
        assert_eq!(initial.scroll_progress, 0.0);
        assert!(!initial.is_scrolled);
        assert_eq!(initial.direction, ScrollDirection::None);

        scroll(&viewport, &frames, &hub, 1000.0);
        scroll(&viewport, &frames, &hub, 2000.0);
        scroll(&viewport, &frames, &hub, 500.0);

        let log = log.borrow();
        let got: Vec<(f64, bool, ScrollDirection)> = log
            .iter()
            .map(|(_, s)| (s.scroll_progress, s.is_scrolled, s.direction))
            .collect();
        assert_eq!(
            got,
            vec![
                (0.5, true, ScrollDirection::Down),
                (1.0, true, ScrollDirection::Down),
                (0.25, true, ScrollDirection::Up),
            ]
        );
        assert_eq!(hub.current_state(), log[2].1);
    }

    #[test]
    fn hundred_events_in_one_frame_coalesce() {
        let (viewport, frames, hub) = page();
        let log: Log = Rc::default();
        let _a = recorder(&hub, 1, &log);
        let _b = recorder(&hub, 2, &log);

        for i in 1..=100 {
            viewport.scroll_to(f64::from(i) * 10.0);
            hub.handle_scroll();
        }
        assert_eq!(frames.requested(), 1);
        assert!(frames.fire(&hub));

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].0, 1);
        assert_eq!(log[1].0, 2);
        assert!(log.iter().all(|(_, s)| s.scroll_y == 1000.0));

        let stats = hub.stats();
        assert_eq!(stats.scroll_events, 100);
        assert_eq!(stats.coalesced, 99);
        assert_eq!(stats.frames, 1);
        assert_eq!(stats.deliveries, 2);
    }

    #[test]
    fn subscribers_are_notified_in_registration_order() {
        let (viewport, frames, hub) = page();
        let log: Log = Rc::default();
        let subs: Vec<Subscription> = (0..5).map(|tag| recorder(&hub, tag, &log)).collect();
        scroll(&viewport, &frames, &hub, 300.0);
        let tags: Vec<u32> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec![0, 1, 2, 3, 4]);
        assert_eq!(subs.len(), 5);
    }

    #[test]
    fn unsubscribe_is_idempotent_and_isolated() {
        let (viewport, frames, hub) = page();
        let log: Log = Rc::default();
        let a = recorder(&hub, 1, &log);
        let _b = recorder(&hub, 2, &log);

        assert!(a.is_active());
        assert!(a.unsubscribe());
        assert!(!a.unsubscribe());
        assert!(!a.is_active());
        assert_eq!(hub.subscriber_count(), 1);
        assert!(hub.is_listening());

        scroll(&viewport, &frames, &hub, 120.0);
        let tags: Vec<u32> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec![2]);
    }

    #[test]
    fn last_unsubscribe_detaches_and_cancels_pending_frame() {
        let (viewport, frames, hub) = page();
        let sub = hub.subscribe(|_| {});
        viewport.scroll_to(400.0);
        hub.handle_scroll();
        assert!(hub.has_pending_frame());
        assert_eq!(frames.pending_frames(), 1);

        sub.unsubscribe();
        assert!(!hub.is_listening());
        assert!(!viewport.is_listening());
        assert_eq!(viewport.detach_count(), 1);
        assert!(!hub.has_pending_frame());
        assert_eq!(frames.pending_frames(), 0);
        assert_eq!(frames.cancelled(), 1);

        // Scrolls and stray frames with nobody listening do nothing.
        hub.handle_scroll();
        hub.handle_frame();
        assert_eq!(frames.requested(), 1);
        assert_eq!(hub.stats().frames, 0);
    }

    #[test]
    fn resubscribing_starts_a_fresh_session() {
        let (viewport, frames, hub) = page();
        let sub = hub.subscribe(|_| {});
        scroll(&viewport, &frames, &hub, 900.0);
        sub.unsubscribe();

        viewport.scroll_to(1200.0);
        let log: Log = Rc::default();
        let _again = recorder(&hub, 0, &log);
        assert_eq!(viewport.attach_count(), 2);
        let initial = hub.current_state();
        assert_eq!(initial.scroll_y, 1200.0);
        assert_eq!(initial.direction, ScrollDirection::None);
    }

    #[test]
    fn unsubscribing_during_delivery_does_not_disturb_fan_out() {
        let (viewport, frames, hub) = page();
        let log: Log = Rc::default();

        let victim: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let killer = {
            let victim = victim.clone();
            let log = log.clone();
            hub.subscribe(move |state| {
                log.borrow_mut().push((1, *state));
                if let Some(sub) = victim.borrow().as_ref() {
                    sub.unsubscribe();
                }
            })
        };
        *victim.borrow_mut() = Some(recorder(&hub, 2, &log));
        let _tail = recorder(&hub, 3, &log);

        scroll(&viewport, &frames, &hub, 200.0);
        let tags: Vec<u32> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec![1, 2, 3]);

        scroll(&viewport, &frames, &hub, 300.0);
        let tags: Vec<u32> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec![1, 2, 3, 1, 3]);
        assert!(killer.is_active());
    }

    #[test]
    fn callbacks_may_unsubscribe_themselves_and_read_state() {
        let (viewport, frames, hub) = page();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sub = {
            let slot = slot.clone();
            let seen = seen.clone();
            let reader = hub.clone();
            hub.subscribe(move |state| {
                assert_eq!(reader.current_state(), *state);
                seen.borrow_mut().push(state.scroll_y);
                if let Some(me) = slot.borrow().as_ref() {
                    me.unsubscribe();
                }
            })
        };
        *slot.borrow_mut() = Some(sub);

        scroll(&viewport, &frames, &hub, 100.0);
        scroll(&viewport, &frames, &hub, 200.0);
        assert_eq!(*seen.borrow(), vec![100.0]);
        assert!(!hub.is_listening());
    }

    #[test]
    fn subscriber_added_during_delivery_waits_for_next_frame() {
        let (viewport, frames, hub) = page();
        let log: Log = Rc::default();
        let late: Rc<RefCell<Vec<Subscription>>> = Rc::default();
        let _spawner = {
            let hub2 = hub.clone();
            let log = log.clone();
            let late = late.clone();
            hub.subscribe(move |_| {
                if late.borrow().is_empty() {
                    late.borrow_mut().push(recorder(&hub2, 9, &log));
                }
            })
        };

        scroll(&viewport, &frames, &hub, 100.0);
        assert!(log.borrow().is_empty());
        scroll(&viewport, &frames, &hub, 200.0);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].1.scroll_y, 200.0);
    }

    #[test]
    fn unavailable_metrics_publish_zero_state() {
        let viewport = SimulatedViewport::unavailable();
        let frames = ManualScheduler::new();
        let hub = ScrollHub::new(viewport.clone(), frames.clone());
        let log: Log = Rc::default();
        let _sub = recorder(&hub, 0, &log);
        assert_eq!(hub.current_state(), ScrollState::ZERO);

        hub.handle_scroll();
        frames.fire(&hub);
        assert_eq!(log.borrow()[0].1, ScrollState::ZERO);

        viewport.set_extents(2800.0, 800.0);
        viewport.scroll_to(1000.0);
        hub.handle_scroll();
        frames.fire(&hub);
        let state = log.borrow()[1].1;
        assert_eq!(state.scroll_progress, 0.5);
        assert_eq!(state.direction, ScrollDirection::None);
    }

    #[test]
    fn scroll_requested_from_a_callback_schedules_the_next_frame() {
        let (viewport, frames, hub) = page();
        let _sub = {
            let hub2 = hub.clone();
            hub.subscribe(move |_| hub2.handle_scroll())
        };
        scroll(&viewport, &frames, &hub, 100.0);
        assert!(hub.has_pending_frame());
        assert_eq!(hub.stats().frames, 1);
    }

    #[test]
    fn custom_config_is_used() {
        let viewport = SimulatedViewport::new(2800.0, 800.0);
        let frames = ManualScheduler::new();
        let config = ScrollConfig {
            scrolled_threshold: 500.0,
        };
        let hub = ScrollHub::with_config(viewport.clone(), frames.clone(), config).unwrap();
        assert_eq!(hub.config(), config);
        let _sub = hub.subscribe(|_| {});
        scroll(&viewport, &frames, &hub, 400.0);
        assert!(!hub.current_state().is_scrolled);

        assert!(
            ScrollHub::with_config(
                SimulatedViewport::default(),
                ManualScheduler::new(),
                ScrollConfig {
                    scrolled_threshold: f64::NAN,
                },
            )
            .is_err()
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn panicking_subscriber_is_isolated() {
        let (viewport, frames, hub) = page();
        let log: Log = Rc::default();
        let _a = recorder(&hub, 1, &log);
        let _bad = hub.subscribe(|_| panic!("consumer failure"));
        let _c = recorder(&hub, 3, &log);

        scroll(&viewport, &frames, &hub, 250.0);
        scroll(&viewport, &frames, &hub, 350.0);

        let tags: Vec<u32> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec![1, 3, 1, 3]);
        let stats = hub.stats();
        assert_eq!(stats.failures, 2);
        assert_eq!(stats.deliveries, 4);
        assert_eq!(hub.subscriber_count(), 3);
    }

    #[test]
    fn subscription_outliving_hub_is_inert() {
        let (_viewport, _frames, hub) = page();
        let sub = hub.subscribe(|_| {});
        drop(hub);
        assert!(!sub.is_active());
        assert!(!sub.unsubscribe());
    }
}
