// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-ready view of the active step.
//!
//! The engine does not paint the popover; it hands the host a
//! [`PopoverFrame`] — everything a renderer needs for one paint of the
//! overlay. Hosts should render the frame in a top-level overlay layer
//! (a portal, in DOM terms) at [`waymark_highlight::POPOVER_STACK_ORDER`],
//! so the stacking contract with the highlighted target holds no matter
//! where the tour entry point lives in the host's own tree.

use waymark_anchor::Anchor;

use crate::step::Step;

/// Default caption of the advance button on non-final steps.
pub const DEFAULT_NEXT_LABEL: &str = "Next";

/// Default caption of the advance button on the final step.
pub const DEFAULT_FINISH_LABEL: &str = "Done";

/// Everything the host needs to paint the popover for one step.
///
/// Borrowed from the tour's step list; re-request a frame after every engine
/// call that reported a change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopoverFrame<'a> {
    /// 1-based number of the active step, for "step X of N" indicators.
    pub step_number: usize,
    /// Total number of steps.
    pub step_count: usize,
    /// Step headline.
    pub title: &'a str,
    /// Step body text.
    pub description: &'a str,
    /// Optional secondary hint line.
    pub hint: Option<&'a str>,
    /// Whether the back control is enabled (false on the first step).
    pub back_enabled: bool,
    /// Whether this is the final step.
    pub is_last: bool,
    /// Caption for the advance control: the step's own label if set,
    /// otherwise [`DEFAULT_NEXT_LABEL`], or [`DEFAULT_FINISH_LABEL`] on the
    /// final step.
    pub advance_label: &'a str,
    /// Where the popover anchors in the viewport.
    pub anchor: Anchor,
}

impl<'a> PopoverFrame<'a> {
    /// Builds the frame for `steps[index]` with the given anchor.
    ///
    /// Returns `None` for an out-of-range index.
    #[must_use]
    pub fn for_step<E>(steps: &'a [Step<E>], index: usize, anchor: Anchor) -> Option<Self> {
        let step = steps.get(index)?;
        let is_last = index + 1 == steps.len();
        let advance_label = if is_last {
            step.finish_label.as_deref().unwrap_or(DEFAULT_FINISH_LABEL)
        } else {
            step.next_label.as_deref().unwrap_or(DEFAULT_NEXT_LABEL)
        };
        Some(Self {
            step_number: index + 1,
            step_count: steps.len(),
            title: &step.title,
            description: &step.description,
            hint: step.hint.as_deref(),
            back_enabled: index > 0,
            is_last,
            advance_label,
            anchor,
        })
    }
}
