// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section tracking for in-page navigation.

use alloc::vec::Vec;

use crescendo_scroll::ScrollState;

use crate::EffectError;

/// Default distance from the top of the viewport at which a section becomes active.
pub const DEFAULT_ACTIVATION_OFFSET: f64 = 150.0;

#[derive(Clone, Debug)]
struct Section<K> {
    key: K,
    top: f64,
}

/// Highlights the navigation entry for the section currently being read.
///
/// Sections are registered in document order with the document-space offset
/// of their top edge. The active section is the last one whose top has
/// reached `activation_offset` pixels from the top of the viewport. When none
/// has, the previous choice is kept; before any update that is the first
/// registered section.
///
/// ```
/// use crescendo_effects::SectionSpy;
/// use crescendo_scroll::{ScrollDirection, ScrollState};
///
/// let mut spy = SectionSpy::new();
/// spy.push("about", 0.0);
/// spy.push("services", 900.0);
///
/// let at = |scroll_y: f64| ScrollState {
///     scroll_y,
///     scroll_progress: 0.0,
///     is_scrolled: true,
///     direction: ScrollDirection::Down,
/// };
/// assert_eq!(spy.update(&at(700.0)), None);
/// assert_eq!(spy.active(), Some(&"about"));
/// assert_eq!(spy.update(&at(760.0)), Some("services"));
/// ```
#[derive(Clone, Debug)]
pub struct SectionSpy<K> {
    sections: Vec<Section<K>>,
    activation_offset: f64,
    active: Option<usize>,
}

impl<K: Clone + PartialEq> SectionSpy<K> {
    /// Creates an empty spy with the default activation offset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            activation_offset: DEFAULT_ACTIVATION_OFFSET,
            active: None,
        }
    }

    /// Creates an empty spy with a custom activation offset.
    pub fn with_activation_offset(activation_offset: f64) -> Result<Self, EffectError> {
        if !activation_offset.is_finite() {
            return Err(EffectError::InvalidActivationOffset(activation_offset));
        }
        Ok(Self {
            activation_offset,
            ..Self::new()
        })
    }

    /// Appends a section below all previously registered ones.
    pub fn push(&mut self, key: K, top: f64) {
        self.sections.push(Section { key, top });
        if self.active.is_none() {
            self.active = Some(0);
        }
    }

    /// Updates the top offset of a section after layout changes.
    ///
    /// Returns `false` if no section has that key.
    pub fn set_top(&mut self, key: &K, top: f64) -> bool {
        match self.sections.iter_mut().find(|s| s.key == *key) {
            Some(section) => {
                section.top = top;
                true
            }
            None => false,
        }
    }

    /// Number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if no sections are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The activation offset in pixels.
    #[must_use]
    pub const fn activation_offset(&self) -> f64 {
        self.activation_offset
    }

    /// The currently active section.
    #[must_use]
    pub fn active(&self) -> Option<&K> {
        self.active.map(|index| &self.sections[index].key)
    }

    /// Re-evaluates against `state`, returning the new active key if it changed.
    pub fn update(&mut self, state: &ScrollState) -> Option<K> {
        let candidate = self
            .sections
            .iter()
            .rposition(|s| s.top - state.scroll_y <= self.activation_offset)?;
        if self.active == Some(candidate) {
            return None;
        }
        self.active = Some(candidate);
        Some(self.sections[candidate].key.clone())
    }
}

impl<K: Clone + PartialEq> Default for SectionSpy<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crescendo_scroll::ScrollDirection;

    fn at(scroll_y: f64) -> ScrollState {
        ScrollState {
            scroll_y,
            scroll_progress: 0.0,
            is_scrolled: scroll_y > 50.0,
            direction: ScrollDirection::None,
        }
    }

    fn page() -> SectionSpy<&'static str> {
        let mut spy = SectionSpy::new();
        spy.push("about", 0.0);
        spy.push("services", 1200.0);
        spy.push("connect", 2400.0);
        spy
    }

    #[test]
    fn first_section_is_active_initially() {
        let spy = page();
        assert_eq!(spy.active(), Some(&"about"));
        assert_eq!(spy.len(), 3);
        assert!(SectionSpy::<u8>::new().active().is_none());
    }

    #[test]
    fn activation_follows_scroll_both_ways() {
        let mut spy = page();
        assert_eq!(spy.update(&at(1049.0)), None);
        assert_eq!(spy.update(&at(1050.0)), Some("services"));
        assert_eq!(spy.update(&at(1500.0)), None);
        assert_eq!(spy.update(&at(2300.0)), Some("connect"));
        assert_eq!(spy.update(&at(100.0)), Some("about"));
    }

    #[test]
    fn keeps_previous_when_nothing_qualifies() {
        let mut spy = SectionSpy::new();
        spy.push("hero", 400.0);
        spy.push("footer", 1600.0);
        assert_eq!(spy.update(&at(0.0)), None);
        assert_eq!(spy.active(), Some(&"hero"));
    }

    #[test]
    fn relayout_moves_boundaries() {
        let mut spy = page();
        assert!(spy.set_top(&"services", 600.0));
        assert!(!spy.set_top(&"missing", 10.0));
        assert_eq!(spy.update(&at(450.0)), Some("services"));
    }

    #[test]
    fn custom_offset_validation() {
        let spy = SectionSpy::<u32>::with_activation_offset(80.0).unwrap();
        assert_eq!(spy.activation_offset(), 80.0);
        assert!(SectionSpy::<u32>::with_activation_offset(f64::INFINITY).is_err());
    }
}
