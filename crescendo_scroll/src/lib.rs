// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crescendo Scroll: one scroll listener, many cheap consumers.
//!
//! ## Overview
//!
//! Scroll-driven pages tend to grow one `scroll` listener per visual effect: a
//! progress bar, a parallax background, header chrome, an overlay. This crate
//! replaces them with a single aggregator, [`ScrollHub`], that observes the
//! viewport once, computes a small immutable [`ScrollState`] at most once per
//! rendered frame, and fans it out to every subscriber in registration order.
//!
//! A [`ScrollState`] carries:
//! - `scroll_y`: the vertical offset, never negative;
//! - `scroll_progress`: the offset normalized against the scrollable extent,
//!   clamped to `[0, 1]` and `0` for pages that do not scroll;
//! - `is_scrolled`: whether the offset is past a threshold (50px by default);
//! - `direction`: [`ScrollDirection::Down`], [`ScrollDirection::Up`], or
//!   [`ScrollDirection::None`] for the first sample and unchanged offsets.
//!
//! ## Hosts
//!
//! The crate knows nothing about browsers. A host implements two seams:
//! - [`ViewportSource`]: layout metrics plus attaching/detaching the one scroll listener;
//! - [`FrameScheduler`]: a "run before next paint" request/cancel primitive.
//!
//! and forwards two notifications: [`ScrollHub::handle_scroll`] when the page
//! scrolls and [`ScrollHub::handle_frame`] when the requested frame arrives.
//! The [`sim`] module provides shared-handle doubles for tests and for hosts
//! that run their own frame loop.
//!
//! For hosts that already sample once per frame, [`ScrollSampler`] is the
//! pure derivation step without scheduling or subscribers.
//!
//! ## Example
//!
//! ```
//! use crescendo_scroll::{ScrollDirection, ScrollHub};
//! use crescendo_scroll::sim::{ManualScheduler, SimulatedViewport};
//!
//! // An 800px viewport over a 2800px document: 2000px of scrollable extent.
//! let viewport = SimulatedViewport::new(2800.0, 800.0);
//! let frames = ManualScheduler::new();
//! let hub = ScrollHub::new(viewport.clone(), frames.clone());
//!
//! let progress_bar = hub.subscribe(|state| {
//!     // Apply `scaleX(state.scroll_progress)` to the bar element here.
//!     assert!((0.0..=1.0).contains(&state.scroll_progress));
//! });
//! assert_eq!(hub.current_state().direction, ScrollDirection::None);
//!
//! viewport.scroll_to(1000.0);
//! hub.handle_scroll();
//! frames.fire(&hub);
//!
//! let state = hub.current_state();
//! assert_eq!(state.scroll_progress, 0.5);
//! assert!(state.is_scrolled);
//! assert_eq!(state.direction, ScrollDirection::Down);
//!
//! progress_bar.unsubscribe();
//! assert!(!hub.is_listening());
//! ```
//!
//! ## Failures
//!
//! Missing layout metrics publish [`ScrollState::ZERO`] instead of an error.
//! With the `std` feature, a panicking subscriber is caught, logged through
//! `tracing`, and counted in [`HubStats::failures`]; the remaining subscribers
//! still receive the snapshot.
//!
//! ## Features
//!
//! - `std` (default): panic isolation for subscribers and `std` support in dependencies.
//! - `serde`: `Serialize`/`Deserialize` for [`ScrollState`], [`ScrollDirection`],
//!   [`ViewportMetrics`], and [`ScrollConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod host;
mod hub;
mod sampler;
pub mod sim;
mod state;

pub use error::ConfigError;
pub use host::{FrameScheduler, ViewportSource};
pub use hub::{HubStats, ScrollHub, Subscription, SubscriptionId};
pub use sampler::ScrollSampler;
pub use state::{
    DEFAULT_SCROLLED_THRESHOLD, ScrollConfig, ScrollDirection, ScrollState, ViewportMetrics,
};
