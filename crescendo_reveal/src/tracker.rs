// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal state for a set of observed targets.

use alloc::vec::Vec;
use core::hash::Hash;

use crescendo_scroll::ScrollState;
use hashbrown::HashMap;
use kurbo::{Rect, Size};
use smallvec::SmallVec;

use crate::geometry::{intersection_ratio, touches, viewport_rect};
use crate::{RevealConfig, RevealError};

/// A visibility transition reported by [`RevealTracker::update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealEvent<K> {
    /// At least `threshold` of the target is inside the root.
    Entered(K),
    /// No part of the target touches the root any more. Dropping below
    /// `threshold` while still partly visible does not count. Never reported
    /// with `trigger_once`.
    Exited(K),
}

/// Events from one update. Most frames report none or a handful.
pub type RevealEvents<K> = SmallVec<[RevealEvent<K>; 4]>;

#[derive(Clone, Debug)]
struct Target<K> {
    key: K,
    rect: Rect,
    intersecting: bool,
    has_intersected: bool,
}

/// Tracks which targets are inside the (margin-adjusted) viewport.
///
/// Targets are document-space rectangles keyed by `K`. Call
/// [`RevealTracker::update`] with the current root after each scroll snapshot
/// or layout change; it reports only transitions, in observation order.
///
/// ```
/// use crescendo_reveal::{RevealConfig, RevealEvent, RevealTracker};
/// use kurbo::{Rect, Size};
///
/// let mut tracker = RevealTracker::new(RevealConfig::default()).unwrap();
/// tracker.observe("services", Rect::new(0.0, 1200.0, 1280.0, 2000.0));
///
/// let viewport = Size::new(1280.0, 800.0);
/// assert!(tracker.update_for_offset(0.0, viewport).is_empty());
///
/// // 10% of the section's 800px is 80px: it reveals once the viewport bottom passes 1280.
/// let events = tracker.update_for_offset(480.0, viewport);
/// assert_eq!(events.as_slice(), &[RevealEvent::Entered("services")]);
/// assert!(tracker.has_intersected(&"services"));
/// ```
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    config: RevealConfig,
    targets: Vec<Target<K>>,
    index: HashMap<K, usize>,
}

impl<K: Clone + Eq + Hash> RevealTracker<K> {
    /// Creates an empty tracker with a validated configuration.
    pub fn new(config: RevealConfig) -> Result<Self, RevealError> {
        config.validate()?;
        Ok(Self {
            config,
            targets: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Starts observing `key` at `rect`, or moves it if already observed.
    ///
    /// Returns `true` if the key was not observed before. Moving a target keeps
    /// its reveal history.
    pub fn observe(&mut self, key: K, rect: Rect) -> bool {
        if let Some(&slot) = self.index.get(&key) {
            self.targets[slot].rect = rect;
            return false;
        }
        self.index.insert(key.clone(), self.targets.len());
        self.targets.push(Target {
            key,
            rect,
            intersecting: false,
            has_intersected: false,
        });
        true
    }

    /// Stops observing `key`. Returns `false` if it was not observed.
    pub fn unobserve(&mut self, key: &K) -> bool {
        let Some(slot) = self.index.remove(key) else {
            return false;
        };
        self.targets.remove(slot);
        for (i, target) in self.targets.iter().enumerate().skip(slot) {
            if let Some(entry) = self.index.get_mut(&target.key) {
                *entry = i;
            }
        }
        true
    }

    /// Stops observing everything.
    pub fn clear(&mut self) {
        self.targets.clear();
        self.index.clear();
    }

    /// Number of observed targets, including ones frozen by `trigger_once`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if nothing is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Whether `key` is intersecting as of the last update.
    #[must_use]
    pub fn is_intersecting(&self, key: &K) -> bool {
        self.get(key).is_some_and(|t| t.intersecting)
    }

    /// Whether `key` has intersected at least once.
    #[must_use]
    pub fn has_intersected(&self, key: &K) -> bool {
        self.get(key).is_some_and(|t| t.has_intersected)
    }

    /// Whether `key` is observed and still evaluated on update.
    #[must_use]
    pub fn is_watching(&self, key: &K) -> bool {
        self.get(key).is_some_and(|t| !self.is_frozen(t))
    }

    fn get(&self, key: &K) -> Option<&Target<K>> {
        self.index.get(key).map(|&slot| &self.targets[slot])
    }

    fn is_frozen(&self, target: &Target<K>) -> bool {
        self.config.trigger_once && target.has_intersected
    }

    /// Re-evaluates every watched target against `root` and reports transitions.
    pub fn update(&mut self, root: Rect) -> RevealEvents<K> {
        let root = root.abs().inset(self.config.root_margin);
        let threshold = self.config.threshold;
        let trigger_once = self.config.trigger_once;
        let mut events = RevealEvents::new();
        for target in &mut self.targets {
            if trigger_once && target.has_intersected {
                continue;
            }
            let rect = target.rect.abs();
            let touching = touches(rect, root);
            let intersecting = if target.intersecting {
                touching
            } else {
                touching && intersection_ratio(rect, root) >= threshold
            };
            if intersecting == target.intersecting {
                continue;
            }
            target.intersecting = intersecting;
            if intersecting {
                target.has_intersected = true;
                events.push(RevealEvent::Entered(target.key.clone()));
            } else {
                events.push(RevealEvent::Exited(target.key.clone()));
            }
        }
        events
    }

    /// [`RevealTracker::update`] with the viewport of `size` scrolled to `scroll_y`.
    pub fn update_for_offset(&mut self, scroll_y: f64, size: Size) -> RevealEvents<K> {
        self.update(viewport_rect(scroll_y, size))
    }

    /// [`RevealTracker::update`] driven by a scroll snapshot.
    pub fn update_for_scroll(&mut self, state: &ScrollState, size: Size) -> RevealEvents<K> {
        self.update_for_offset(state.scroll_y, size)
    }
}

impl<K: Clone + Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            config: RevealConfig::default(),
            targets: Vec::new(),
            index: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Insets;

    const VIEWPORT: Size = Size::new(1000.0, 800.0);

    fn tracker(trigger_once: bool) -> RevealTracker<u32> {
        let mut tracker = RevealTracker::new(RevealConfig {
            trigger_once,
            ..RevealConfig::default()
        })
        .unwrap();
        tracker.observe(1, Rect::new(0.0, 0.0, 1000.0, 600.0));
        tracker.observe(2, Rect::new(0.0, 1000.0, 1000.0, 2000.0));
        tracker.observe(3, Rect::new(0.0, 2500.0, 1000.0, 3000.0));
        tracker
    }

    #[test]
    fn reports_entries_in_observation_order() {
        let mut tracker = tracker(true);
        let events = tracker.update_for_offset(0.0, VIEWPORT);
        assert_eq!(events.as_slice(), &[RevealEvent::Entered(1)]);

        // Target 2 needs 100px (10%) inside: viewport bottom must reach 1100.
        assert!(tracker.update_for_offset(299.0, VIEWPORT).is_empty());
        let events = tracker.update_for_offset(300.0, VIEWPORT);
        assert_eq!(events.as_slice(), &[RevealEvent::Entered(2)]);
    }

    #[test]
    fn trigger_once_freezes_revealed_targets() {
        let mut tracker = tracker(true);
        tracker.update_for_offset(0.0, VIEWPORT);
        assert!(!tracker.is_watching(&1));
        assert!(tracker.is_watching(&2));

        // Scrolled past it: target 1 stays revealed, no exit event.
        let events = tracker.update_for_offset(1900.0, VIEWPORT);
        assert_eq!(
            events.into_vec(),
            vec![RevealEvent::Entered(2), RevealEvent::Entered(3)]
        );
        assert!(tracker.is_intersecting(&1));
        assert!(tracker.has_intersected(&1));
    }

    #[test]
    fn continuous_mode_reports_exits() {
        let mut tracker = tracker(false);
        tracker.update_for_offset(0.0, VIEWPORT);
        let events = tracker.update_for_offset(1500.0, VIEWPORT);
        assert_eq!(
            events.into_vec(),
            vec![RevealEvent::Exited(1), RevealEvent::Entered(2)]
        );
        assert!(!tracker.is_intersecting(&1));
        assert!(tracker.has_intersected(&1));
        assert!(tracker.is_watching(&1));

        let events = tracker.update_for_offset(0.0, VIEWPORT);
        assert_eq!(
            events.into_vec(),
            vec![RevealEvent::Entered(1), RevealEvent::Exited(2)]
        );
    }

    #[test]
    fn partly_visible_target_stays_intersecting_below_threshold() {
        let mut tracker = tracker(false);
        tracker.update_for_offset(0.0, VIEWPORT);
        let events = tracker.update_for_offset(300.0, VIEWPORT);
        assert_eq!(events.as_slice(), &[RevealEvent::Entered(2)]);

        // 50px of target 2 remain in view: under 10%, but still touching.
        assert!(tracker.update_for_offset(250.0, VIEWPORT).is_empty());
        assert!(tracker.is_intersecting(&2));

        let events = tracker.update_for_offset(150.0, VIEWPORT);
        assert_eq!(events.as_slice(), &[RevealEvent::Exited(2)]);
        assert!(!tracker.is_intersecting(&2));
    }

    #[test]
    fn root_margin_reveals_early() {
        let config = RevealConfig {
            threshold: 0.0,
            root_margin: Insets::new(0.0, 0.0, 0.0, 200.0),
            trigger_once: true,
        };
        let mut tracker = RevealTracker::new(config).unwrap();
        tracker.observe("footer", Rect::new(0.0, 1000.0, 1000.0, 1200.0));
        // Viewport bottom at 800 plus 200px of margin touches the footer's top edge.
        let events = tracker.update_for_offset(0.0, VIEWPORT);
        assert_eq!(events.as_slice(), &[RevealEvent::Entered("footer")]);
    }

    #[test]
    fn negative_margin_delays_reveal() {
        let config = RevealConfig {
            threshold: 0.0,
            root_margin: Insets::new(0.0, 0.0, 0.0, -100.0),
            trigger_once: false,
        };
        let mut tracker = RevealTracker::new(config).unwrap();
        tracker.observe(7, Rect::new(0.0, 750.0, 1000.0, 900.0));
        assert!(tracker.update_for_offset(0.0, VIEWPORT).is_empty());
        assert_eq!(
            tracker.update_for_offset(50.0, VIEWPORT).as_slice(),
            &[RevealEvent::Entered(7)]
        );
    }

    #[test]
    fn observe_moves_and_unobserve_reindexes() {
        let mut tracker = tracker(false);
        assert!(!tracker.observe(2, Rect::new(0.0, 100.0, 1000.0, 300.0)));
        assert_eq!(tracker.len(), 3);

        assert!(tracker.unobserve(&1));
        assert!(!tracker.unobserve(&1));
        assert_eq!(tracker.len(), 2);

        let events = tracker.update_for_offset(0.0, VIEWPORT);
        assert_eq!(events.as_slice(), &[RevealEvent::Entered(2)]);
        assert!(tracker.is_intersecting(&2));
        assert!(!tracker.is_intersecting(&1));

        tracker.clear();
        assert!(tracker.is_empty());
    }

    #[test]
    fn scroll_snapshots_drive_updates() {
        let mut tracker = tracker(true);
        let state = ScrollState {
            scroll_y: 1900.0,
            scroll_progress: 1.0,
            is_scrolled: true,
            direction: crescendo_scroll::ScrollDirection::Down,
        };
        let events = tracker.update_for_scroll(&state, VIEWPORT);
        assert_eq!(
            events.into_vec(),
            vec![RevealEvent::Entered(2), RevealEvent::Entered(3)]
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RevealConfig {
            threshold: 2.0,
            ..RevealConfig::default()
        };
        assert!(RevealTracker::<u32>::new(config).is_err());
    }
}
