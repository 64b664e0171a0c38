// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seams: where the aggregator reads layout and schedules frames.
//!
//! A browser binding would implement [`ViewportSource`] over the window's scroll
//! metrics and a passive `scroll` listener, and [`FrameScheduler`] over
//! `requestAnimationFrame` / `cancelAnimationFrame`. Test harnesses and
//! non-browser hosts can use the doubles in [`sim`](crate::sim).
//!
//! Implementations must not call back into the owning
//! [`ScrollHub`](crate::ScrollHub) synchronously from these methods; deliver
//! scroll notifications and frame callbacks later, from the host's event loop.

use crate::ViewportMetrics;

/// Source of scroll notifications and layout metrics.
pub trait ViewportSource {
    /// Reads the current offset and extents.
    ///
    /// Return `None` while metrics are not available (for example before the
    /// first layout); the aggregator then publishes a zero-valued state.
    fn metrics(&self) -> Option<ViewportMetrics>;

    /// Starts forwarding scroll notifications to
    /// [`ScrollHub::handle_scroll`](crate::ScrollHub::handle_scroll).
    ///
    /// Called exactly once per listening session.
    fn attach_scroll_listener(&mut self);

    /// Stops forwarding scroll notifications.
    fn detach_scroll_listener(&mut self);
}

/// A "run before next paint" primitive.
pub trait FrameScheduler {
    /// Token identifying a requested frame callback.
    type Handle: Copy + core::fmt::Debug;

    /// Requests a single callback to
    /// [`ScrollHub::handle_frame`](crate::ScrollHub::handle_frame) at the next frame boundary.
    fn request_frame(&mut self) -> Self::Handle;

    /// Cancels a previously requested callback that has not run yet.
    fn cancel_frame(&mut self, handle: Self::Handle);
}
