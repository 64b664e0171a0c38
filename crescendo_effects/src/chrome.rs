// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header chrome that changes once the page is scrolled.

use crescendo_scroll::{ScrollDirection, ScrollState};
use smallvec::smallvec;

use crate::{ScrollEffect, StyleCommand, StyleCommands};

bitflags::bitflags! {
    /// Visual state of a fixed header.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ChromeFlags: u8 {
        /// The page is scrolled past the threshold.
        const SCROLLED  = 0b0000_0001;
        /// Reduced height.
        const CONDENSED = 0b0000_0010;
        /// Opaque, blurred backdrop behind the header.
        const BACKDROP  = 0b0000_0100;
        /// Slid out of view while the reader scrolls down.
        const HIDDEN    = 0b0000_1000;
    }
}

/// Maps scroll state onto [`ChromeFlags`].
///
/// At the top of the page the header is transparent and full height. Past the
/// scrolled threshold it becomes `SCROLLED | CONDENSED | BACKDROP`. With
/// `hide_on_scroll_down`, scrolling down past the threshold also sets `HIDDEN`
/// and scrolling up clears it. A snapshot with no direction (an unchanged
/// offset) keeps whatever the previous one decided, so the header remembers
/// whether it is hidden between updates.
///
/// ```
/// use crescendo_effects::{ChromeFlags, HeaderChrome};
/// use crescendo_scroll::{ScrollDirection, ScrollState};
///
/// let mut header = HeaderChrome::hiding();
/// let mut at = |scroll_y, direction| {
///     header.update(&ScrollState {
///         scroll_y,
///         scroll_progress: scroll_y / 2000.0,
///         is_scrolled: scroll_y > 50.0,
///         direction,
///     })
/// };
/// assert!(at(400.0, ScrollDirection::Down).contains(ChromeFlags::HIDDEN));
/// assert!(at(400.0, ScrollDirection::None).contains(ChromeFlags::HIDDEN));
/// assert!(!at(300.0, ScrollDirection::Up).contains(ChromeFlags::HIDDEN));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeaderChrome {
    /// Hide the header while scrolling down.
    pub hide_on_scroll_down: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    hidden: bool,
}

impl HeaderChrome {
    /// Header that stays visible at all times.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hide_on_scroll_down: false,
            hidden: false,
        }
    }

    /// Header that hides while the reader scrolls down.
    #[must_use]
    pub const fn hiding() -> Self {
        Self {
            hide_on_scroll_down: true,
            hidden: false,
        }
    }

    /// Whether the last update left the header hidden.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Folds `state` into the header and returns the resulting flags.
    pub fn update(&mut self, state: &ScrollState) -> ChromeFlags {
        if !state.is_scrolled {
            self.hidden = false;
            return ChromeFlags::empty();
        }
        if self.hide_on_scroll_down {
            match state.direction {
                ScrollDirection::Down => self.hidden = true,
                ScrollDirection::Up => self.hidden = false,
                ScrollDirection::None => {}
            }
        }
        let mut flags = ChromeFlags::SCROLLED | ChromeFlags::CONDENSED | ChromeFlags::BACKDROP;
        flags.set(ChromeFlags::HIDDEN, self.hidden);
        flags
    }
}

impl ScrollEffect for HeaderChrome {
    fn commands(&mut self, state: &ScrollState) -> StyleCommands {
        smallvec![StyleCommand::Chrome(self.update(state))]
    }
}
