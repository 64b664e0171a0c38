// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for rejected effect parameters.

/// Error returned when an effect is constructed with invalid parameters.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EffectError {
    /// A parallax factor was NaN or infinite.
    #[error("parallax factor must be finite, got {0}")]
    NonFiniteFactor(f64),
    /// A parallax cap was negative or not finite.
    #[error("parallax offset cap must be finite and non-negative, got {0}")]
    InvalidOffsetCap(f64),
    /// Opacity bounds were outside `[0, 1]` or out of order.
    #[error("opacity bounds must satisfy 0 <= min <= max <= 1, got {min}..{max}")]
    InvalidOpacity {
        /// Requested opacity at the top of the page.
        min: f64,
        /// Requested opacity at the bottom of the page.
        max: f64,
    },
    /// A section activation offset was not finite.
    #[error("activation offset must be finite, got {0}")]
    InvalidActivationOffset(f64),
}
