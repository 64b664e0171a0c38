// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crescendo Reveal: scroll-triggered entrance tracking.
//!
//! Sections of a long page often fade or slide in the first time they scroll
//! into view. This crate answers "has this element been revealed yet?" without
//! a browser intersection observer: targets are document-space [`kurbo::Rect`]s,
//! the root is the viewport rectangle (optionally grown or shrunk by a
//! [`kurbo::Insets`] margin), and [`RevealTracker::update`] reports
//! [`RevealEvent::Entered`] / [`RevealEvent::Exited`] transitions.
//!
//! A target intersects when at least `threshold` of its area lies inside the
//! root (default `0.1`). With `trigger_once` (the default) a target stops being
//! evaluated after its first entry and stays revealed.
//!
//! The tracker pairs naturally with a [`crescendo_scroll::ScrollHub`]
//! subscriber:
//!
//! ```rust
//! use crescendo_reveal::{RevealEvent, RevealTracker};
//! use crescendo_scroll::ScrollHub;
//! use crescendo_scroll::sim::{ManualScheduler, SimulatedViewport};
//! use kurbo::{Rect, Size};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let viewport = SimulatedViewport::new(3000.0, 800.0);
//! let frames = ManualScheduler::new();
//! let hub = ScrollHub::new(viewport.clone(), frames.clone());
//!
//! let tracker = Rc::new(RefCell::new(RevealTracker::default()));
//! tracker.borrow_mut().observe("services", Rect::new(0.0, 1200.0, 1280.0, 2000.0));
//!
//! let revealed = Rc::new(RefCell::new(Vec::new()));
//! let (t, r) = (tracker.clone(), revealed.clone());
//! let _sub = hub.subscribe(move |state| {
//!     for event in t.borrow_mut().update_for_scroll(state, Size::new(1280.0, 800.0)) {
//!         if let RevealEvent::Entered(key) = event {
//!             r.borrow_mut().push(key);
//!         }
//!     }
//! });
//!
//! viewport.scroll_to(600.0);
//! hub.handle_scroll();
//! frames.fire(&hub);
//! assert_eq!(*revealed.borrow(), vec!["services"]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`RevealConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod geometry;
mod tracker;

pub use config::{DEFAULT_REVEAL_THRESHOLD, RevealConfig, RevealError};
pub use geometry::{intersection_ratio, viewport_rect};
pub use tracker::{RevealEvent, RevealEvents, RevealTracker};
