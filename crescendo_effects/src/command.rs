// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation commands and the [`ScrollEffect`] trait.

use crescendo_scroll::ScrollState;
use kurbo::Affine;
use smallvec::SmallVec;

use crate::ChromeFlags;

/// A single presentation update for the element an effect is bound to.
///
/// Commands carry no element identity: the host binds each effect to one
/// element (or layer) and applies whatever that effect returns to it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleCommand {
    /// Replace the element's transform, in element-local coordinates with the
    /// origin at its top-left corner.
    Transform(Affine),
    /// Replace the element's opacity, in `[0, 1]`.
    Opacity(f64),
    /// Replace the element's chrome state.
    Chrome(ChromeFlags),
}

/// Commands produced for one snapshot. Effects emit one or two.
pub type StyleCommands = SmallVec<[StyleCommand; 2]>;

/// A visual effect driven by scroll state.
///
/// Nothing flows back into the aggregator. Most implementations are pure; an
/// effect may keep presentation memory between snapshots (see [`HeaderChrome`]),
/// so call it once per delivered snapshot, in delivery order.
///
/// [`HeaderChrome`]: crate::HeaderChrome
pub trait ScrollEffect {
    /// Computes the presentation updates for `state`.
    fn commands(&mut self, state: &ScrollState) -> StyleCommands;
}

impl<E: ScrollEffect + ?Sized> ScrollEffect for &mut E {
    fn commands(&mut self, state: &ScrollState) -> StyleCommands {
        (**self).commands(state)
    }
}
