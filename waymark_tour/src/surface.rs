// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use waymark_highlight::ElementStyler;

/// Host seam for everything the tour engine needs from the live surface.
///
/// The engine owns no elements and renders nothing; it reads geometry,
/// queries targets, scrolls, and writes scoped style overrides exclusively
/// through this trait. A DOM host implements it over node handles; a canvas
/// or scene-graph host over its own IDs. The inherited [`ElementStyler`]
/// methods carry the highlight treatment (see `waymark_highlight`).
///
/// Coordinates are viewport-relative device pixels throughout, matching
/// what [`waymark_anchor::compute_anchor`] expects.
pub trait TourSurface: ElementStyler {
    /// Single first-match query for a selector string, against the live
    /// surface. `None` when nothing matches.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Current bounding rectangle of the element in viewport coordinates,
    /// or `None` when the element cannot be measured (for example after it
    /// was detached).
    fn bounding_rect(&self, element: &Self::Element) -> Option<Rect>;

    /// Returns `true` while the element is still attached to the live
    /// surface. Pending settle callbacks check this before re-measuring.
    fn is_attached(&self, element: &Self::Element) -> bool;

    /// Current viewport size in device pixels.
    fn viewport(&self) -> Size;

    /// Scrolls the element into view. The engine re-measures after a settle
    /// delay (see [`crate::SETTLE_DELAY_MS`]) so layout and smooth scrolling
    /// can finish first.
    fn scroll_into_view(&mut self, element: &Self::Element);
}
