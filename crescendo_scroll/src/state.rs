// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll snapshots, layout metrics, and aggregator configuration.

use crate::ConfigError;

/// Default distance, in pixels, past which [`ScrollState::is_scrolled`] becomes `true`.
pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 50.0;

/// Vertical scroll direction derived from two consecutive samples.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollDirection {
    /// The offset decreased (content moved toward the top of the document).
    Up,
    /// The offset increased.
    Down,
    /// First sample, or the offset did not change.
    #[default]
    None,
}

impl ScrollDirection {
    /// Compares `current` against `previous` with strict inequality.
    ///
    /// A missing `previous` (the very first sample) always yields [`ScrollDirection::None`].
    #[must_use]
    pub fn between(previous: Option<f64>, current: f64) -> Self {
        match previous {
            Some(prev) if current > prev => Self::Down,
            Some(prev) if current < prev => Self::Up,
            _ => Self::None,
        }
    }
}

/// Immutable snapshot of scroll-derived presentation state.
///
/// Snapshots are produced by [`ScrollSampler`](crate::ScrollSampler) and delivered
/// by [`ScrollHub`](crate::ScrollHub). Consumers only ever receive copies.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Current vertical offset in pixels. Never negative.
    pub scroll_y: f64,
    /// `scroll_y` normalized against the scrollable extent, always in `[0, 1]`.
    pub scroll_progress: f64,
    /// Whether `scroll_y` is strictly past the configured threshold.
    pub is_scrolled: bool,
    /// Direction relative to the previous sample.
    pub direction: ScrollDirection,
}

impl ScrollState {
    /// The zero-valued snapshot: top of the page, nothing scrolled, no direction.
    pub const ZERO: Self = Self {
        scroll_y: 0.0,
        scroll_progress: 0.0,
        is_scrolled: false,
        direction: ScrollDirection::None,
    };

    /// Derives a snapshot from raw metrics and the previously sampled offset.
    ///
    /// The offset is sanitized first: non-finite or negative reads (elastic
    /// over-scroll above the top) are treated as `0`. Progress is clamped to
    /// `[0, 1]` and is exactly `0` when the document does not scroll.
    #[must_use]
    pub fn derive(metrics: ViewportMetrics, previous: Option<f64>, config: &ScrollConfig) -> Self {
        let scroll_y = metrics.sanitized_offset();
        let extent = metrics.scrollable_extent();
        let scroll_progress = if extent > 0.0 {
            (scroll_y / extent).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            scroll_y,
            scroll_progress,
            is_scrolled: scroll_y > config.scrolled_threshold,
            direction: ScrollDirection::between(previous, scroll_y),
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Layout metrics read from the viewport on demand.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportMetrics {
    /// Raw vertical scroll offset as reported by the host.
    pub scroll_offset: f64,
    /// Total height of the scrollable document.
    pub document_extent: f64,
    /// Height of the visible viewport.
    pub viewport_extent: f64,
}

impl ViewportMetrics {
    /// Creates metrics from an offset, document height, and viewport height.
    #[must_use]
    pub const fn new(scroll_offset: f64, document_extent: f64, viewport_extent: f64) -> Self {
        Self {
            scroll_offset,
            document_extent,
            viewport_extent,
        }
    }

    /// Distance the viewport can travel: `document_extent - viewport_extent`, never negative.
    ///
    /// Non-finite extents yield `0`.
    #[must_use]
    pub fn scrollable_extent(&self) -> f64 {
        let extent = self.document_extent - self.viewport_extent;
        if extent.is_finite() && extent > 0.0 {
            extent
        } else {
            0.0
        }
    }

    /// Whether the document is taller than the viewport.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.scrollable_extent() > 0.0
    }

    pub(crate) fn sanitized_offset(&self) -> f64 {
        if self.scroll_offset.is_finite() && self.scroll_offset > 0.0 {
            self.scroll_offset
        } else {
            0.0
        }
    }
}

/// Configuration for deriving [`ScrollState`] values.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollConfig {
    /// Pixels past which [`ScrollState::is_scrolled`] is set (strictly greater than).
    pub scrolled_threshold: f64,
}

impl ScrollConfig {
    /// Checks that the threshold is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scrolled_threshold.is_finite() || self.scrolled_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.scrolled_threshold));
        }
        Ok(())
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
        }
    }
}
