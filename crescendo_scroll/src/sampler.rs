// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure sampling state machine that turns raw metrics into [`ScrollState`] snapshots.

use crate::{ConfigError, ScrollConfig, ScrollState, ViewportMetrics};

/// Derives successive [`ScrollState`] snapshots and remembers the previous offset.
///
/// This is the host-independent half of the aggregator: it performs no scheduling
/// and holds no subscribers. [`ScrollHub`](crate::ScrollHub) owns one and feeds it
/// metrics once per frame, but hosts that already run their own frame loop can
/// drive it directly.
///
/// ```
/// use crescendo_scroll::{ScrollDirection, ScrollSampler, ViewportMetrics};
///
/// let mut sampler = ScrollSampler::new();
/// let first = sampler.sample(Some(ViewportMetrics::new(0.0, 2800.0, 800.0)));
/// assert_eq!(first.direction, ScrollDirection::None);
///
/// let next = sampler.sample(Some(ViewportMetrics::new(1000.0, 2800.0, 800.0)));
/// assert_eq!(next.scroll_progress, 0.5);
/// assert_eq!(next.direction, ScrollDirection::Down);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScrollSampler {
    config: ScrollConfig,
    previous: Option<f64>,
    last: ScrollState,
}

impl ScrollSampler {
    /// Creates a sampler with the default 50px scrolled threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sampler with a validated configuration.
    pub fn with_config(config: ScrollConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            previous: None,
            last: ScrollState::ZERO,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Computes the next snapshot.
    ///
    /// `None` metrics (layout not available yet) produce [`ScrollState::ZERO`]
    /// and leave the stored previous offset untouched, so the next real sample
    /// still compares against the last real one.
    pub fn sample(&mut self, metrics: Option<ViewportMetrics>) -> ScrollState {
        let state = match metrics {
            Some(metrics) => {
                let state = ScrollState::derive(metrics, self.previous, &self.config);
                self.previous = Some(state.scroll_y);
                state
            }
            None => ScrollState::ZERO,
        };
        self.last = state;
        state
    }

    /// The most recently computed snapshot.
    #[must_use]
    pub const fn last(&self) -> ScrollState {
        self.last
    }

    /// Offset recorded by the last successful sample, if any.
    #[must_use]
    pub const fn previous_offset(&self) -> Option<f64> {
        self.previous
    }

    /// Forgets sampling history so the next sample is treated as the first.
    pub fn reset(&mut self) {
        self.previous = None;
        self.last = ScrollState::ZERO;
    }
}
