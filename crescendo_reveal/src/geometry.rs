// Copyright 2025 the Crescendo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection geometry in document space.

use kurbo::{Rect, Size};

/// The document-space rectangle covered by a viewport of `size` scrolled to `scroll_y`.
#[must_use]
pub fn viewport_rect(scroll_y: f64, size: Size) -> Rect {
    Rect::new(0.0, scroll_y, size.width, scroll_y + size.height)
}

/// Fraction of `target`'s area that lies inside `root`, in `[0, 1]`.
///
/// Degenerate (zero-area) targets report `1.0` when they touch the root and
/// `0.0` otherwise, so empty anchors still reveal.
#[must_use]
pub fn intersection_ratio(target: Rect, root: Rect) -> f64 {
    let target = target.abs();
    let root = root.abs();
    let area = target.area();
    if area > 0.0 {
        (target.intersect(root).area() / area).clamp(0.0, 1.0)
    } else if touches(target, root) {
        1.0
    } else {
        0.0
    }
}

/// Overlap test that counts shared edges, like an intersection observer does.
pub(crate) fn touches(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}
