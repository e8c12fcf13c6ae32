// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step definitions and lazy target resolution.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use waymark_anchor::{DEFAULT_SPACING, Placement};

use crate::surface::TourSurface;

/// Reference to a step's target element.
///
/// Targets are resolved lazily, once per step activation, and never cached
/// across activations — the host surface may have re-rendered between
/// visits, so yesterday's handle is not trusted to still mean anything.
pub enum Target<E> {
    /// A selector string, resolved through a single first-match query
    /// against the live surface.
    Selector(String),
    /// A concrete element handle, used as-is.
    Element(E),
    /// A zero-argument lookup returning the element, or `None` when it is
    /// not currently mounted.
    Lookup(Box<dyn Fn() -> Option<E>>),
}

impl<E> Target<E> {
    /// Target by selector string.
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }

    /// Target by direct element handle.
    pub fn element(element: E) -> Self {
        Self::Element(element)
    }

    /// Target by lookup function.
    pub fn lookup(lookup: impl Fn() -> Option<E> + 'static) -> Self {
        Self::Lookup(Box::new(lookup))
    }
}

impl<E: Clone> Target<E> {
    /// Resolves this target against the live surface.
    ///
    /// A lookup or query that yields nothing resolves to `None`, which is
    /// not an error: the step stays active with a viewport-centered popover
    /// and no highlight.
    pub fn resolve<S: TourSurface<Element = E>>(&self, surface: &S) -> Option<E> {
        match self {
            Self::Selector(selector) => surface.query_selector(selector),
            Self::Element(element) => Some(element.clone()),
            Self::Lookup(lookup) => lookup(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Target<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(selector) => f.debug_tuple("Selector").field(selector).finish(),
            Self::Element(element) => f.debug_tuple("Element").field(element).finish(),
            Self::Lookup(_) => f.write_str("Lookup(..)"),
        }
    }
}

/// One stop in a tour: a target reference plus descriptive content.
///
/// Steps are plain data and immutable once the tour opens; the engine only
/// reads them. Text fields are opaque to the engine.
#[derive(Debug)]
pub struct Step<E> {
    /// Where the popover anchors and the highlight lands.
    pub target: Target<E>,
    /// Popover placement relative to the target.
    pub placement: Placement,
    /// Pixel gap between the target edge and the popover.
    pub spacing: f64,
    /// Headline shown in the popover.
    pub title: String,
    /// Body text shown in the popover.
    pub description: String,
    /// Optional secondary hint line.
    pub hint: Option<String>,
    /// Caption override for the advance button on non-final steps.
    pub next_label: Option<String>,
    /// Caption override for the advance button on the final step.
    pub finish_label: Option<String>,
}

impl<E> Step<E> {
    /// Creates a step with default placement and spacing and empty text.
    pub fn new(target: Target<E>) -> Self {
        Self {
            target,
            placement: Placement::default(),
            spacing: DEFAULT_SPACING,
            title: String::new(),
            description: String::new(),
            hint: None,
            next_label: None,
            finish_label: None,
        }
    }

    /// Sets the popover placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the spacing between target edge and popover.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the popover headline.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the popover body text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the secondary hint line.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Overrides the advance caption for non-final steps.
    #[must_use]
    pub fn with_next_label(mut self, label: impl Into<String>) -> Self {
        self.next_label = Some(label.into());
        self
    }

    /// Overrides the advance caption for the final step.
    #[must_use]
    pub fn with_finish_label(mut self, label: impl Into<String>) -> Self {
        self.finish_label = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use waymark_anchor::Placement;

    use super::{Step, Target};

    #[test]
    fn step_defaults() {
        let step: Step<u32> = Step::new(Target::selector("#save"));
        assert_eq!(step.placement, Placement::BottomStart);
        assert_eq!(step.spacing, waymark_anchor::DEFAULT_SPACING);
        assert!(step.title.is_empty());
        assert!(step.hint.is_none());
    }

    #[test]
    fn builder_setters_stick() {
        let step: Step<u32> = Step::new(Target::element(7))
            .with_placement(Placement::TopCenter)
            .with_spacing(20.0)
            .with_title("Save your work")
            .with_description("This button persists the draft.")
            .with_hint("You can also press Ctrl+S.")
            .with_next_label("Onward")
            .with_finish_label("All done");
        assert_eq!(step.placement, Placement::TopCenter);
        assert_eq!(step.spacing, 20.0);
        assert_eq!(step.title, "Save your work");
        assert_eq!(step.hint.as_deref(), Some("You can also press Ctrl+S."));
        assert_eq!(step.next_label.as_deref(), Some("Onward"));
        assert_eq!(step.finish_label.as_deref(), Some("All done"));
    }

    #[test]
    fn lookup_targets_debug_without_exposing_the_closure() {
        let target: Target<u32> = Target::lookup(|| Some(3));
        assert_eq!(format!("{target:?}"), "Lookup(..)");
    }
}
