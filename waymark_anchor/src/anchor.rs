// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::placement::Placement;

/// Default gap in pixels between a target edge and the popover.
pub const DEFAULT_SPACING: f64 = 12.0;

/// Assumed popover box and viewport margin used by the clamp step.
///
/// The popover's real size is not known at anchoring time (the host renders
/// it after the anchor is computed), so clamping works against this fixed
/// budget instead. Hosts whose popover deviates substantially from the
/// default box should adjust these to match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopoverMetrics {
    /// Assumed popover width in pixels.
    pub width: f64,
    /// Assumed popover height budget in pixels.
    pub height: f64,
    /// Minimum distance kept between the popover box and the viewport edges.
    pub margin: f64,
}

impl Default for PopoverMetrics {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 180.0,
            margin: 16.0,
        }
    }
}

/// Alignment of the popover box relative to its anchor point, per axis.
///
/// This is the headless analogue of the centering transform in CSS-style
/// positioning: `Start` puts the box's leading edge at the anchor point,
/// `Center` its midpoint (`translate(-50%)`), and `End` its trailing edge
/// (`translate(-100%)`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// The box's leading (left/top) edge sits at the anchor point.
    #[default]
    Start,
    /// The box is centered on the anchor point.
    Center,
    /// The box's trailing (right/bottom) edge sits at the anchor point.
    End,
}

impl Align {
    /// Distance from the box's leading edge to its anchor reference point.
    fn offset(self, extent: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => extent / 2.0,
            Self::End => extent,
        }
    }
}

/// A computed popover anchor: a point in viewport coordinates plus the
/// alignment of the popover box around that point on each axis.
///
/// Hosts translate this into their own style system; for a CSS host,
/// `point` maps to `left`/`top` and `Center`/`End` alignment to a
/// `translate(-50%)`/`translate(-100%)` on the matching axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Anchor point in viewport coordinates.
    pub point: Point,
    /// Horizontal alignment of the popover box around `point`.
    pub align_x: Align,
    /// Vertical alignment of the popover box around `point`.
    pub align_y: Align,
}

impl Anchor {
    /// The viewport-centered fallback anchor used when a step's target could
    /// not be resolved.
    #[must_use]
    pub fn centered_in(viewport: Size) -> Self {
        Self {
            point: Point::new(viewport.width / 2.0, viewport.height / 2.0),
            align_x: Align::Center,
            align_y: Align::Center,
        }
    }

    /// Resolves the top-left origin of a popover of the given size placed at
    /// this anchor.
    #[must_use]
    pub fn resolved_origin(&self, size: Size) -> Point {
        Point::new(
            self.point.x - self.align_x.offset(size.width),
            self.point.y - self.align_y.offset(size.height),
        )
    }

    /// The effective popover box implied by this anchor and the assumed
    /// popover size in `metrics`. This is the box the clamp step keeps
    /// inside the viewport.
    #[must_use]
    pub fn effective_box(&self, metrics: &PopoverMetrics) -> Rect {
        let origin = self.resolved_origin(Size::new(metrics.width, metrics.height));
        Rect::new(
            origin.x,
            origin.y,
            origin.x + metrics.width,
            origin.y + metrics.height,
        )
    }
}

/// Computes the popover anchor for a target rectangle and placement.
///
/// - `rect == None` (unresolved target) returns the viewport-centered
///   fallback anchor unchanged; clamping only applies to rect-derived
///   anchors.
/// - Otherwise the raw anchor point sits on the target edge named by the
///   placement, offset outward by `spacing`, with `Center`/`End` alignment
///   where the placement name says so.
/// - The clamp step then pins the effective box (see
///   [`Anchor::effective_box`]) inside `[margin, viewport − margin]` on each
///   axis. Pinning an axis replaces its alignment with [`Align::Start`],
///   since the pinned coordinate is an absolute edge position.
///
/// This function is pure: identical inputs always produce identical output.
#[must_use]
pub fn compute_anchor(
    rect: Option<Rect>,
    placement: Placement,
    spacing: f64,
    viewport: Size,
    metrics: &PopoverMetrics,
) -> Anchor {
    let Some(rect) = rect else {
        return Anchor::centered_in(viewport);
    };

    let (point, align_x, align_y) = match placement {
        Placement::BottomStart => (
            Point::new(rect.x0, rect.y1 + spacing),
            Align::Start,
            Align::Start,
        ),
        Placement::BottomCenter => (
            Point::new(rect.center().x, rect.y1 + spacing),
            Align::Center,
            Align::Start,
        ),
        Placement::BottomEnd => (
            Point::new(rect.x1, rect.y1 + spacing),
            Align::End,
            Align::Start,
        ),
        Placement::TopStart => (
            Point::new(rect.x0, rect.y0 - spacing),
            Align::Start,
            Align::End,
        ),
        Placement::TopCenter => (
            Point::new(rect.center().x, rect.y0 - spacing),
            Align::Center,
            Align::End,
        ),
        Placement::RightCenter => (
            Point::new(rect.x1 + spacing, rect.center().y),
            Align::Start,
            Align::Center,
        ),
        Placement::LeftCenter => (
            Point::new(rect.x0 - spacing, rect.center().y),
            Align::End,
            Align::Center,
        ),
    };

    let mut anchor = Anchor {
        point,
        align_x,
        align_y,
    };
    clamp_axis(
        &mut anchor.point.x,
        &mut anchor.align_x,
        metrics.width,
        viewport.width,
        metrics.margin,
    );
    clamp_axis(
        &mut anchor.point.y,
        &mut anchor.align_y,
        metrics.height,
        viewport.height,
        metrics.margin,
    );
    anchor
}

/// Pins one axis of the effective box into `[margin, viewport − margin]`.
///
/// The minimum edge is checked first, then the maximum; on a viewport too
/// small to satisfy both, the maximum wins. Pinning replaces the axis
/// alignment with `Start` because the pinned coordinate is already an edge.
fn clamp_axis(coord: &mut f64, align: &mut Align, extent: f64, viewport_extent: f64, margin: f64) {
    let mut leading = *coord - align.offset(extent);
    if leading < margin {
        leading = margin;
        *coord = leading;
        *align = Align::Start;
    }
    if leading + extent > viewport_extent - margin {
        *coord = viewport_extent - margin - extent;
        *align = Align::Start;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{Align, Anchor, DEFAULT_SPACING, PopoverMetrics, compute_anchor};
    use crate::placement::Placement;

    const VIEWPORT: Size = Size::new(1280.0, 800.0);

    fn metrics() -> PopoverMetrics {
        PopoverMetrics::default()
    }

    // A rect far from every edge, so raw placement needs no clamping.
    fn roomy_rect() -> Rect {
        Rect::new(500.0, 350.0, 700.0, 420.0)
    }

    #[test]
    fn compute_anchor_is_deterministic() {
        let a = compute_anchor(
            Some(roomy_rect()),
            Placement::TopCenter,
            DEFAULT_SPACING,
            VIEWPORT,
            &metrics(),
        );
        let b = compute_anchor(
            Some(roomy_rect()),
            Placement::TopCenter,
            DEFAULT_SPACING,
            VIEWPORT,
            &metrics(),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn missing_rect_centers_in_viewport() {
        let anchor = compute_anchor(None, Placement::BottomEnd, 20.0, VIEWPORT, &metrics());
        assert_eq!(anchor.point, Point::new(640.0, 400.0));
        assert_eq!(anchor.align_x, Align::Center);
        assert_eq!(anchor.align_y, Align::Center);
    }

    #[test]
    fn raw_placements_sit_on_the_named_edges() {
        let rect = roomy_rect();
        let spacing = 10.0;
        let m = metrics();

        let bottom_start = compute_anchor(Some(rect), Placement::BottomStart, spacing, VIEWPORT, &m);
        assert_eq!(bottom_start.point, Point::new(500.0, 430.0));
        assert_eq!(bottom_start.align_x, Align::Start);
        assert_eq!(bottom_start.align_y, Align::Start);

        let bottom_center =
            compute_anchor(Some(rect), Placement::BottomCenter, spacing, VIEWPORT, &m);
        assert_eq!(bottom_center.point, Point::new(600.0, 430.0));
        assert_eq!(bottom_center.align_x, Align::Center);

        let bottom_end = compute_anchor(Some(rect), Placement::BottomEnd, spacing, VIEWPORT, &m);
        assert_eq!(bottom_end.point, Point::new(700.0, 430.0));
        assert_eq!(bottom_end.align_x, Align::End);

        let top_start = compute_anchor(Some(rect), Placement::TopStart, spacing, VIEWPORT, &m);
        assert_eq!(top_start.point, Point::new(500.0, 340.0));
        assert_eq!(top_start.align_y, Align::End);

        let top_center = compute_anchor(Some(rect), Placement::TopCenter, spacing, VIEWPORT, &m);
        assert_eq!(top_center.point, Point::new(600.0, 340.0));
        assert_eq!(top_center.align_x, Align::Center);
        assert_eq!(top_center.align_y, Align::End);

        let right_center = compute_anchor(Some(rect), Placement::RightCenter, spacing, VIEWPORT, &m);
        assert_eq!(right_center.point, Point::new(710.0, 385.0));
        assert_eq!(right_center.align_x, Align::Start);
        assert_eq!(right_center.align_y, Align::Center);

        let left_center = compute_anchor(Some(rect), Placement::LeftCenter, spacing, VIEWPORT, &m);
        assert_eq!(left_center.point, Point::new(490.0, 385.0));
        assert_eq!(left_center.align_x, Align::End);
        assert_eq!(left_center.align_y, Align::Center);
    }

    #[test]
    fn clamp_pins_left_edge_and_drops_centering() {
        // Target hugging the left viewport edge; a centered popover would
        // spill past the margin.
        let rect = Rect::new(4.0, 300.0, 44.0, 340.0);
        let m = metrics();
        let anchor = compute_anchor(Some(rect), Placement::BottomCenter, 10.0, VIEWPORT, &m);
        assert_eq!(anchor.point.x, m.margin);
        assert_eq!(anchor.align_x, Align::Start);
        // The vertical axis is unaffected.
        assert_eq!(anchor.point.y, 350.0);
    }

    #[test]
    fn clamp_pins_right_edge() {
        let rect = Rect::new(1200.0, 300.0, 1270.0, 340.0);
        let m = metrics();
        let anchor = compute_anchor(Some(rect), Placement::BottomStart, 10.0, VIEWPORT, &m);
        assert_eq!(anchor.point.x, VIEWPORT.width - m.margin - m.width);
        assert_eq!(anchor.align_x, Align::Start);
    }

    #[test]
    fn clamp_pins_top_and_bottom_edges() {
        let m = metrics();

        // Near the top: `top-center` would place the popover above the viewport.
        let near_top = Rect::new(500.0, 10.0, 700.0, 50.0);
        let above = compute_anchor(Some(near_top), Placement::TopCenter, 10.0, VIEWPORT, &m);
        assert_eq!(above.point.y, m.margin);
        assert_eq!(above.align_y, Align::Start);

        // Near the bottom: `bottom-start` would run past the height budget.
        let near_bottom = Rect::new(500.0, 740.0, 700.0, 790.0);
        let below = compute_anchor(Some(near_bottom), Placement::BottomStart, 10.0, VIEWPORT, &m);
        assert_eq!(below.point.y, VIEWPORT.height - m.margin - m.height);
        assert_eq!(below.align_y, Align::Start);
    }

    #[test]
    fn clamped_box_stays_inside_the_margins_for_every_placement() {
        let m = metrics();
        // Rects pushed against corners and edges, plus one far outside the
        // viewport entirely (a target mid-scroll).
        let rects = [
            Rect::new(0.0, 0.0, 30.0, 30.0),
            Rect::new(1250.0, 0.0, 1280.0, 30.0),
            Rect::new(0.0, 770.0, 30.0, 800.0),
            Rect::new(1250.0, 770.0, 1280.0, 800.0),
            Rect::new(-200.0, -300.0, -100.0, -250.0),
            Rect::new(2000.0, 1400.0, 2100.0, 1460.0),
        ];
        for rect in rects {
            for placement in Placement::ALL {
                let anchor =
                    compute_anchor(Some(rect), placement, DEFAULT_SPACING, VIEWPORT, &m);
                let bounds = anchor.effective_box(&m);
                assert!(
                    bounds.x0 >= m.margin && bounds.x1 <= VIEWPORT.width - m.margin,
                    "{} horizontally out of bounds for {rect:?}: {bounds:?}",
                    placement.name(),
                );
                assert!(
                    bounds.y0 >= m.margin && bounds.y1 <= VIEWPORT.height - m.margin,
                    "{} vertically out of bounds for {rect:?}: {bounds:?}",
                    placement.name(),
                );
            }
        }
    }

    #[test]
    fn resolved_origin_honors_alignment() {
        let anchor = Anchor {
            point: Point::new(100.0, 200.0),
            align_x: Align::Center,
            align_y: Align::End,
        };
        let origin = anchor.resolved_origin(Size::new(40.0, 30.0));
        assert_eq!(origin, Point::new(80.0, 170.0));
    }

    #[test]
    fn unclamped_anchor_keeps_its_alignment() {
        let anchor = compute_anchor(
            Some(roomy_rect()),
            Placement::BottomCenter,
            DEFAULT_SPACING,
            VIEWPORT,
            &metrics(),
        );
        assert_eq!(anchor.align_x, Align::Center);
        assert_eq!(anchor.align_y, Align::Start);
    }
}
