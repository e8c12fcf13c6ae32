// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Named anchor position of a popover relative to its target rectangle.
///
/// The first word names the target edge the popover sits against (offset
/// outward by the step's spacing); the second names the alignment along the
/// perpendicular axis. `BottomStart` is the canonical default, and
/// [`Placement::from_name`] falls back to it for unrecognized names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Below the target, left edges aligned.
    #[default]
    BottomStart,
    /// Below the target, centered on its horizontal midpoint.
    BottomCenter,
    /// Below the target, right edges aligned.
    BottomEnd,
    /// Above the target, left edges aligned.
    TopStart,
    /// Above the target, centered on its horizontal midpoint.
    TopCenter,
    /// To the right of the target, centered on its vertical midpoint.
    RightCenter,
    /// To the left of the target, centered on its vertical midpoint.
    LeftCenter,
}

impl Placement {
    /// All placements, in wire-name order.
    pub const ALL: [Self; 7] = [
        Self::BottomStart,
        Self::BottomCenter,
        Self::BottomEnd,
        Self::TopStart,
        Self::TopCenter,
        Self::RightCenter,
        Self::LeftCenter,
    ];

    /// Parses a placement from its wire name (for example `"top-center"`).
    ///
    /// Unrecognized names fall back to [`Placement::BottomStart`], so step
    /// definitions sourced from loosely validated data never fail here.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "bottom-start" => Self::BottomStart,
            "bottom-center" => Self::BottomCenter,
            "bottom-end" => Self::BottomEnd,
            "top-start" => Self::TopStart,
            "top-center" => Self::TopCenter,
            "right-center" => Self::RightCenter,
            "left-center" => Self::LeftCenter,
            _ => Self::BottomStart,
        }
    }

    /// Returns the wire name of this placement.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BottomStart => "bottom-start",
            Self::BottomCenter => "bottom-center",
            Self::BottomEnd => "bottom-end",
            Self::TopStart => "top-start",
            Self::TopCenter => "top-center",
            Self::RightCenter => "right-center",
            Self::LeftCenter => "left-center",
        }
    }
}
