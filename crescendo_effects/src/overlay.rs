// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay that darkens as the reader moves down the page.

use crescendo_scroll::ScrollState;
use smallvec::smallvec;

use crate::{EffectError, ScrollEffect, StyleCommand, StyleCommands};

/// Interpolates an overlay's opacity linearly with scroll progress.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayDarkening {
    /// Opacity at the top of the page.
    pub min_opacity: f64,
    /// Opacity once the page is fully scrolled.
    pub max_opacity: f64,
}

impl OverlayDarkening {
    /// Creates a validated overlay.
    pub fn try_new(min_opacity: f64, max_opacity: f64) -> Result<Self, EffectError> {
        let overlay = Self {
            min_opacity,
            max_opacity,
        };
        overlay.validate()?;
        Ok(overlay)
    }

    /// Checks `0 <= min_opacity <= max_opacity <= 1`.
    pub fn validate(&self) -> Result<(), EffectError> {
        let (min, max) = (self.min_opacity, self.max_opacity);
        // NaN fails every comparison, so it lands here too.
        if !(0.0 <= min && min <= max && max <= 1.0) {
            return Err(EffectError::InvalidOpacity { min, max });
        }
        Ok(())
    }

    /// Opacity for `state`.
    #[must_use]
    pub fn opacity(&self, state: &ScrollState) -> f64 {
        let t = state.scroll_progress.clamp(0.0, 1.0);
        self.min_opacity + (self.max_opacity - self.min_opacity) * t
    }
}

impl Default for OverlayDarkening {
    fn default() -> Self {
        Self {
            min_opacity: 0.4,
            max_opacity: 1.0,
        }
    }
}

impl ScrollEffect for OverlayDarkening {
    fn commands(&mut self, state: &ScrollState) -> StyleCommands {
        smallvec![StyleCommand::Opacity(self.opacity(state))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crescendo_scroll::ScrollDirection;

    fn at(progress: f64) -> ScrollState {
        ScrollState {
            scroll_y: progress * 2000.0,
            scroll_progress: progress,
            is_scrolled: true,
            direction: ScrollDirection::Down,
        }
    }

    #[test]
    fn interpolates_between_bounds() {
        let mut overlay = OverlayDarkening::try_new(0.2, 0.8).unwrap();
        assert_eq!(overlay.opacity(&ScrollState::ZERO), 0.2);
        assert!((overlay.opacity(&at(0.5)) - 0.5).abs() < 1e-12);
        assert!((overlay.opacity(&at(1.0)) - 0.8).abs() < 1e-12);
        assert_eq!(overlay.commands(&ScrollState::ZERO)[0], StyleCommand::Opacity(0.2));
    }

    #[test]
    fn rejects_bad_bounds() {
        for (min, max) in [(-0.1, 0.5), (0.6, 0.5), (0.0, 1.5), (f64::NAN, 1.0)] {
            assert!(
                matches!(
                    OverlayDarkening::try_new(min, max),
                    Err(EffectError::InvalidOpacity { .. })
                ),
                "{min}..{max} should be rejected"
            );
        }
        assert!(OverlayDarkening::default().validate().is_ok());
    }
}
