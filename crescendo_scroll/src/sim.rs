// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated host for tests, demos, and non-browser embedders.
//!
//! [`SimulatedViewport`] and [`ManualScheduler`] are cheap shared handles: keep a
//! clone, hand the other to [`ScrollHub::new`](crate::ScrollHub::new), and drive
//! the page from the outside.
//!
//! ```
//! use crescendo_scroll::ScrollHub;
//! use crescendo_scroll::sim::{ManualScheduler, SimulatedViewport};
//!
//! let viewport = SimulatedViewport::new(2800.0, 800.0);
//! let frames = ManualScheduler::new();
//! let hub = ScrollHub::new(viewport.clone(), frames.clone());
//!
//! let sub = hub.subscribe(|_| {});
//! assert!(viewport.is_listening());
//!
//! viewport.scroll_to(1000.0);
//! hub.handle_scroll();
//! assert_eq!(frames.pending_frames(), 1);
//! assert!(frames.fire(&hub));
//! assert_eq!(hub.current_state().scroll_progress, 0.5);
//!
//! sub.unsubscribe();
//! assert!(!viewport.is_listening());
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::{FrameScheduler, ScrollHub, ViewportMetrics, ViewportSource};

#[derive(Debug, Default)]
struct ViewportModel {
    metrics: Option<ViewportMetrics>,
    listening: bool,
    attach_count: usize,
    detach_count: usize,
}

/// In-memory [`ViewportSource`] with settable metrics.
#[derive(Clone, Debug, Default)]
pub struct SimulatedViewport {
    model: Rc<RefCell<ViewportModel>>,
}

impl SimulatedViewport {
    /// Creates a viewport at offset `0` over a document of the given heights.
    #[must_use]
    pub fn new(document_extent: f64, viewport_extent: f64) -> Self {
        let viewport = Self::default();
        viewport.set_metrics(Some(ViewportMetrics::new(
            0.0,
            document_extent,
            viewport_extent,
        )));
        viewport
    }

    /// Creates a viewport whose metrics are not available yet.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Replaces the reported metrics; `None` simulates layout not being ready.
    pub fn set_metrics(&self, metrics: Option<ViewportMetrics>) {
        self.model.borrow_mut().metrics = metrics;
    }

    /// Moves the scroll offset, keeping extents.
    ///
    /// Does nothing while metrics are unavailable.
    pub fn scroll_to(&self, scroll_offset: f64) {
        if let Some(metrics) = self.model.borrow_mut().metrics.as_mut() {
            metrics.scroll_offset = scroll_offset;
        }
    }

    /// Changes the document and viewport heights, keeping the offset.
    pub fn set_extents(&self, document_extent: f64, viewport_extent: f64) {
        let mut model = self.model.borrow_mut();
        let scroll_offset = model.metrics.map_or(0.0, |m| m.scroll_offset);
        model.metrics = Some(ViewportMetrics::new(
            scroll_offset,
            document_extent,
            viewport_extent,
        ));
    }

    /// Whether a scroll listener is currently attached.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.model.borrow().listening
    }

    /// How many times a listener has been attached.
    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.model.borrow().attach_count
    }

    /// How many times a listener has been detached.
    #[must_use]
    pub fn detach_count(&self) -> usize {
        self.model.borrow().detach_count
    }
}

impl ViewportSource for SimulatedViewport {
    fn metrics(&self) -> Option<ViewportMetrics> {
        self.model.borrow().metrics
    }

    fn attach_scroll_listener(&mut self) {
        let mut model = self.model.borrow_mut();
        model.listening = true;
        model.attach_count += 1;
    }

    fn detach_scroll_listener(&mut self) {
        let mut model = self.model.borrow_mut();
        model.listening = false;
        model.detach_count += 1;
    }
}

/// Handle for a frame requested from a [`ManualScheduler`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

#[derive(Debug, Default)]
struct SchedulerModel {
    next_id: u64,
    pending: Vec<FrameId>,
    requested: usize,
    cancelled: usize,
}

/// A [`FrameScheduler`] whose frames only run when [`ManualScheduler::fire`] is called.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    model: Rc<RefCell<SchedulerModel>>,
}

impl ManualScheduler {
    /// Creates a scheduler with no pending frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requested frames that have neither run nor been cancelled.
    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.model.borrow().pending.len()
    }

    /// Total frames requested so far.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.model.borrow().requested
    }

    /// Total frames cancelled so far.
    #[must_use]
    pub fn cancelled(&self) -> usize {
        self.model.borrow().cancelled
    }

    /// Reaches a frame boundary: if anything is pending, clears it and runs the hub's frame.
    ///
    /// Returns `true` if a frame ran.
    pub fn fire<V>(&self, hub: &ScrollHub<V, Self>) -> bool
    where
        V: ViewportSource + 'static,
    {
        let had_pending = {
            let mut model = self.model.borrow_mut();
            let had_pending = !model.pending.is_empty();
            model.pending.clear();
            had_pending
        };
        if had_pending {
            hub.handle_frame();
        }
        had_pending
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = FrameId;

    fn request_frame(&mut self) -> FrameId {
        let mut model = self.model.borrow_mut();
        model.next_id += 1;
        let id = FrameId(model.next_id);
        model.pending.push(id);
        model.requested += 1;
        id
    }

    fn cancel_frame(&mut self, handle: FrameId) {
        let mut model = self.model.borrow_mut();
        let before = model.pending.len();
        model.pending.retain(|id| *id != handle);
        if model.pending.len() != before {
            model.cancelled += 1;
        }
    }
}
