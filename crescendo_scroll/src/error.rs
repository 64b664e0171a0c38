// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// Error returned when a [`ScrollConfig`](crate::ScrollConfig) is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The scrolled threshold was negative or not finite.
    #[error("scrolled threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
}
