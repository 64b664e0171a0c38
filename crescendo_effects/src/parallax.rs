// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallax background translation.

use crescendo_scroll::ScrollState;
use kurbo::Affine;
use smallvec::smallvec;

use crate::{EffectError, ScrollEffect, StyleCommand, StyleCommands};

/// Default ratio between background travel and scroll travel.
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.5;

/// Translates a background layer vertically by a fraction of the scroll offset.
///
/// With a factor of `0.5` the background appears to move at half the speed of
/// the content. Negative factors move it against the scroll.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parallax {
    /// Background travel per pixel scrolled.
    pub factor: f64,
    /// Optional cap on the magnitude of the translation.
    pub max_offset: Option<f64>,
}

impl Parallax {
    /// Creates a validated parallax effect without a cap.
    pub fn try_new(factor: f64) -> Result<Self, EffectError> {
        let parallax = Self {
            factor,
            max_offset: None,
        };
        parallax.validate()?;
        Ok(parallax)
    }

    /// Returns a copy that never translates further than `max_offset`.
    pub fn with_max_offset(self, max_offset: f64) -> Result<Self, EffectError> {
        let parallax = Self {
            max_offset: Some(max_offset),
            ..self
        };
        parallax.validate()?;
        Ok(parallax)
    }

    /// Checks that the factor is finite and any cap is finite and non-negative.
    pub fn validate(&self) -> Result<(), EffectError> {
        if !self.factor.is_finite() {
            return Err(EffectError::NonFiniteFactor(self.factor));
        }
        if let Some(cap) = self.max_offset {
            if !cap.is_finite() || cap < 0.0 {
                return Err(EffectError::InvalidOffsetCap(cap));
            }
        }
        Ok(())
    }

    /// Vertical translation for `state`, in pixels.
    #[must_use]
    pub fn offset(&self, state: &ScrollState) -> f64 {
        let offset = state.scroll_y * self.factor;
        match self.max_offset {
            Some(cap) => offset.clamp(-cap, cap),
            None => offset,
        }
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            factor: DEFAULT_PARALLAX_FACTOR,
            max_offset: None,
        }
    }
}

impl ScrollEffect for Parallax {
    fn commands(&mut self, state: &ScrollState) -> StyleCommands {
        smallvec![StyleCommand::Transform(Affine::translate((
            0.0,
            self.offset(state)
        )))]
    }
}
