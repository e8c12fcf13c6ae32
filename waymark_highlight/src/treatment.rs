// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

/// Stacking order given to a highlighted target. Kept one level below the
/// popover layer so the popover always paints over its own target.
pub const HIGHLIGHT_STACK_ORDER: i32 = 10_000;

/// Stacking order of the popover overlay layer.
pub const POPOVER_STACK_ORDER: i32 = 10_001;

/// Class added to the highlighted element so external stylesheets can hook
/// additional presentation onto the active target.
pub const MARKER_CLASS: &str = "waymark-target";

/// The override values the highlight writes onto a target element.
///
/// Values are host-interpreted strings; the defaults speak CSS since that is
/// the most common host, but a non-DOM surface is free to map them to its
/// own styling vocabulary (or supply its own treatment).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightTreatment {
    /// Positioning scheme forced onto statically positioned targets, so the
    /// outline and elevation render above flow siblings.
    pub forced_position: String,
    /// Raised stacking order, below [`POPOVER_STACK_ORDER`].
    pub stack_order: String,
    /// Soft outline keeping the target visually distinct.
    pub outline: String,
    /// Solid background keeping the target legible against backdrop dimming.
    pub background: String,
    /// Corner rounding matching the popover's visual language.
    pub corner_radius: String,
}

impl Default for HighlightTreatment {
    fn default() -> Self {
        Self {
            forced_position: String::from("relative"),
            stack_order: format!("{HIGHLIGHT_STACK_ORDER}"),
            outline: String::from("0 0 0 4px rgba(255, 255, 255, 0.4)"),
            background: String::from("#ffffff"),
            corner_radius: String::from("6px"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HIGHLIGHT_STACK_ORDER, HighlightTreatment, POPOVER_STACK_ORDER};

    #[test]
    fn highlight_stacks_below_the_popover() {
        assert!(HIGHLIGHT_STACK_ORDER < POPOVER_STACK_ORDER);
    }

    #[test]
    fn default_treatment_uses_the_highlight_stack_order() {
        let treatment = HighlightTreatment::default();
        assert_eq!(treatment.stack_order, "10000");
        assert_eq!(treatment.forced_position, "relative");
    }
}
