// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal configuration and its validation errors.

use kurbo::Insets;

/// Default fraction of a target that must be visible to count as revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Error returned when a [`RevealConfig`] is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RevealError {
    /// The threshold was outside `[0, 1]` or not finite.
    #[error("reveal threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
    /// A root margin component was not finite.
    #[error("root margin must be finite, got {0:?}")]
    InvalidRootMargin(Insets),
}

/// Parameters for a [`RevealTracker`](crate::RevealTracker).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RevealConfig {
    /// Visible fraction of the target's area required to be intersecting.
    ///
    /// `0.0` means any overlap or edge contact.
    pub threshold: f64,
    /// Growth (positive) or shrinkage (negative) of the root before testing.
    pub root_margin: Insets,
    /// Stop evaluating a target after it first intersects; it stays revealed.
    pub trigger_once: bool,
}

impl RevealConfig {
    /// Checks the threshold range and that the margin is finite.
    pub fn validate(&self) -> Result<(), RevealError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(RevealError::InvalidThreshold(self.threshold));
        }
        let m = self.root_margin;
        if ![m.x0, m.y0, m.x1, m.y1].iter().all(|v| v.is_finite()) {
            return Err(RevealError::InvalidRootMargin(m));
        }
        Ok(())
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: Insets::ZERO,
            trigger_once: true,
        }
    }
}
