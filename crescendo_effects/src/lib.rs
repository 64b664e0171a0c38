// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crescendo Effects: scroll-driven presentation as pure functions.
//!
//! Each effect turns a [`ScrollState`](crescendo_scroll::ScrollState) snapshot
//! into a short list of [`StyleCommand`]s for the one element it is bound to.
//! Effects hold their parameters (plus, for the header, whether it is currently
//! hidden) and never touch a rendering target or feed anything back into the
//! aggregator, so the same snapshot can drive a DOM, a retained scene or a test
//! assertion.
//!
//! - [`ProgressBar`]: `scaleX(progress)` anchored at the left edge.
//! - [`Parallax`]: vertical translation proportional to the offset.
//! - [`HeaderChrome`]: [`ChromeFlags`] for a fixed header once the page is scrolled,
//!   optionally hiding it while the reader scrolls down.
//! - [`OverlayDarkening`]: opacity interpolated by progress.
//! - [`SectionSpy`]: which in-page section the navigation should highlight.
//!
//! Transforms are [`kurbo::Affine`] values in element-local coordinates.
//!
//! ## Example
//!
//! ```rust
//! use crescendo_effects::{HeaderChrome, Parallax, ProgressBar, ScrollEffect, StyleCommand};
//! use crescendo_scroll::ScrollHub;
//! use crescendo_scroll::sim::{ManualScheduler, SimulatedViewport};
//! use kurbo::Affine;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let viewport = SimulatedViewport::new(2800.0, 800.0);
//! let frames = ManualScheduler::new();
//! let hub = ScrollHub::new(viewport.clone(), frames.clone());
//!
//! let mut effects: Vec<Box<dyn ScrollEffect>> = vec![
//!     Box::new(ProgressBar),
//!     Box::new(Parallax::default()),
//!     Box::new(HeaderChrome::new()),
//! ];
//! let applied = Rc::new(RefCell::new(Vec::new()));
//! let sink = applied.clone();
//! let sub = hub.subscribe(move |state| {
//!     let mut sink = sink.borrow_mut();
//!     sink.clear();
//!     for effect in &mut effects {
//!         sink.extend(effect.commands(state));
//!     }
//! });
//!
//! viewport.scroll_to(1000.0);
//! hub.handle_scroll();
//! frames.fire(&hub);
//!
//! let applied = applied.borrow();
//! assert_eq!(applied[0], StyleCommand::Transform(Affine::scale_non_uniform(0.5, 1.0)));
//! assert_eq!(applied[1], StyleCommand::Transform(Affine::translate((0.0, 500.0))));
//! sub.unsubscribe();
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for effect parameters.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chrome;
mod command;
mod error;
mod overlay;
mod parallax;
mod progress;
mod spy;

pub use chrome::{ChromeFlags, HeaderChrome};
pub use command::{ScrollEffect, StyleCommand, StyleCommands};
pub use error::EffectError;
pub use overlay::OverlayDarkening;
pub use parallax::{DEFAULT_PARALLAX_FACTOR, Parallax};
pub use progress::ProgressBar;
pub use spy::{DEFAULT_ACTIVATION_OFFSET, SectionSpy};
