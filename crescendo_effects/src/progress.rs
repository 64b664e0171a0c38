// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading-progress bar.

use crescendo_scroll::ScrollState;
use kurbo::Affine;
use smallvec::smallvec;

use crate::{ScrollEffect, StyleCommand, StyleCommands};

/// A full-width bar scaled horizontally by scroll progress, anchored at its left edge.
///
/// Synchronous renderers can call [`ProgressBar::scale`] with
/// [`ScrollHub::current_state`](crescendo_scroll::ScrollHub::current_state)
/// instead of subscribing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressBar;

impl ProgressBar {
    /// Horizontal scale factor in `[0, 1]`.
    #[must_use]
    pub fn scale(&self, state: &ScrollState) -> f64 {
        state.scroll_progress.clamp(0.0, 1.0)
    }

    /// The `scaleX` transform for `state`.
    #[must_use]
    pub fn transform(&self, state: &ScrollState) -> Affine {
        Affine::scale_non_uniform(self.scale(state), 1.0)
    }
}

impl ScrollEffect for ProgressBar {
    fn commands(&mut self, state: &ScrollState) -> StyleCommands {
        smallvec![StyleCommand::Transform(self.transform(state))]
    }
}
