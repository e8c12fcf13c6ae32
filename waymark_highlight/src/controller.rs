// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Apply/release of the highlight treatment through the host styling seam.

use alloc::string::String;

use crate::patch::{StylePatch, StyleProp};
use crate::treatment::HighlightTreatment;

/// Host seam for reading and writing element presentation.
///
/// Hosts implement this over whatever element handle their environment uses
/// (a DOM node wrapper, a scene-graph ID, a widget handle). The engine calls
/// it only for the currently targeted element, and always symmetrically:
/// every [`apply`] is followed by exactly one [`release`] on the same
/// element before another element is highlighted or the tour ends.
pub trait ElementStyler {
    /// Host-specific element handle.
    type Element;

    /// Reads the element's current inline value for `prop`, if set.
    fn inline_style(&self, element: &Self::Element, prop: StyleProp) -> Option<String>;

    /// Writes (`Some`) or clears (`None`) the element's inline value for `prop`.
    fn set_inline_style(&mut self, element: &Self::Element, prop: StyleProp, value: Option<&str>);

    /// Returns `true` if the element is in default static flow, i.e. has no
    /// effective positioning scheme of its own. Only then does the highlight
    /// force one.
    fn has_static_position(&self, element: &Self::Element) -> bool;

    /// Adds the marker class (see [`crate::MARKER_CLASS`]) to the element.
    fn add_marker_class(&mut self, element: &Self::Element);

    /// Removes the marker class from the element.
    fn remove_marker_class(&mut self, element: &Self::Element);
}

/// Applies the highlight treatment to `element`, returning the patch that
/// reverses it.
///
/// Every property is snapshotted before it is overridden, so an element that
/// already carried an explicit inline value — including `position` — gets it
/// back verbatim on [`release`]. The positioning scheme itself is only
/// touched when the element is statically positioned.
#[must_use]
pub fn apply<S: ElementStyler>(
    styler: &mut S,
    element: &S::Element,
    treatment: &HighlightTreatment,
) -> StylePatch {
    let mut patch = StylePatch::new();

    if styler.has_static_position(element) {
        record_and_set(
            styler,
            element,
            &mut patch,
            StyleProp::Position,
            &treatment.forced_position,
        );
    }
    record_and_set(
        styler,
        element,
        &mut patch,
        StyleProp::StackOrder,
        &treatment.stack_order,
    );
    record_and_set(
        styler,
        element,
        &mut patch,
        StyleProp::Outline,
        &treatment.outline,
    );
    record_and_set(
        styler,
        element,
        &mut patch,
        StyleProp::Background,
        &treatment.background,
    );
    record_and_set(
        styler,
        element,
        &mut patch,
        StyleProp::CornerRadius,
        &treatment.corner_radius,
    );

    styler.add_marker_class(element);
    patch
}

/// Reverts a previously applied highlight on `element`.
///
/// Restores each snapshotted original (clearing properties that had none)
/// and removes the marker class. Properties the patch never recorded — such
/// as a `position` that was not forced — are left untouched.
pub fn release<S: ElementStyler>(styler: &mut S, element: &S::Element, patch: &StylePatch) {
    for (prop, entry) in patch.iter() {
        styler.set_inline_style(element, prop, entry.original.as_deref());
    }
    styler.remove_marker_class(element);
}

fn record_and_set<S: ElementStyler>(
    styler: &mut S,
    element: &S::Element,
    patch: &mut StylePatch,
    prop: StyleProp,
    value: &str,
) {
    let original = styler.inline_style(element, prop);
    patch.record(prop, original, String::from(value));
    styler.set_inline_style(element, prop, Some(value));
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};

    use super::{ElementStyler, apply, release};
    use crate::patch::StyleProp;
    use crate::treatment::HighlightTreatment;

    /// Single-element fake host keeping inline styles in a map.
    #[derive(Default)]
    struct FakeStyler {
        inline: BTreeMap<StyleProp, String>,
        marked: bool,
    }

    impl ElementStyler for FakeStyler {
        type Element = ();

        fn inline_style(&self, _el: &(), prop: StyleProp) -> Option<String> {
            self.inline.get(&prop).cloned()
        }

        fn set_inline_style(&mut self, _el: &(), prop: StyleProp, value: Option<&str>) {
            match value {
                Some(v) => {
                    self.inline.insert(prop, v.to_string());
                }
                None => {
                    self.inline.remove(&prop);
                }
            }
        }

        fn has_static_position(&self, _el: &()) -> bool {
            !self.inline.contains_key(&StyleProp::Position)
        }

        fn add_marker_class(&mut self, _el: &()) {
            self.marked = true;
        }

        fn remove_marker_class(&mut self, _el: &()) {
            self.marked = false;
        }
    }

    #[test]
    fn apply_writes_all_overrides_and_the_marker_class() {
        let mut host = FakeStyler::default();
        let treatment = HighlightTreatment::default();

        let patch = apply(&mut host, &(), &treatment);

        assert!(host.marked);
        assert_eq!(
            host.inline.get(&StyleProp::Position),
            Some(&treatment.forced_position)
        );
        assert_eq!(
            host.inline.get(&StyleProp::StackOrder),
            Some(&treatment.stack_order)
        );
        assert_eq!(host.inline.get(&StyleProp::Outline), Some(&treatment.outline));
        assert_eq!(
            host.inline.get(&StyleProp::Background),
            Some(&treatment.background)
        );
        assert_eq!(
            host.inline.get(&StyleProp::CornerRadius),
            Some(&treatment.corner_radius)
        );
        assert_eq!(patch.len(), 5);
    }

    #[test]
    fn release_restores_a_pristine_element() {
        let mut host = FakeStyler::default();
        let patch = apply(&mut host, &(), &HighlightTreatment::default());

        release(&mut host, &(), &patch);

        assert!(!host.marked);
        assert!(host.inline.is_empty());
    }

    #[test]
    fn pre_existing_position_is_neither_forced_nor_recorded() {
        let mut host = FakeStyler::default();
        host.inline
            .insert(StyleProp::Position, "absolute".to_string());

        let patch = apply(&mut host, &(), &HighlightTreatment::default());

        // The element keeps its own positioning scheme throughout.
        assert_eq!(
            host.inline.get(&StyleProp::Position).map(String::as_str),
            Some("absolute")
        );
        assert!(patch.get(StyleProp::Position).is_none());

        release(&mut host, &(), &patch);
        assert_eq!(
            host.inline.get(&StyleProp::Position).map(String::as_str),
            Some("absolute")
        );
    }

    #[test]
    fn release_restores_snapshotted_inline_values() {
        let mut host = FakeStyler::default();
        host.inline
            .insert(StyleProp::Background, "tomato".to_string());
        host.inline
            .insert(StyleProp::CornerRadius, "50%".to_string());

        let patch = apply(&mut host, &(), &HighlightTreatment::default());
        assert_eq!(
            patch.get(StyleProp::Background).unwrap().original.as_deref(),
            Some("tomato")
        );

        release(&mut host, &(), &patch);

        assert_eq!(
            host.inline.get(&StyleProp::Background).map(String::as_str),
            Some("tomato")
        );
        assert_eq!(
            host.inline.get(&StyleProp::CornerRadius).map(String::as_str),
            Some("50%")
        );
        // Properties that had no original are cleared, not left dangling.
        assert!(!host.inline.contains_key(&StyleProp::Outline));
        assert!(!host.inline.contains_key(&StyleProp::StackOrder));
    }

    #[test]
    fn custom_treatment_values_flow_through() {
        let mut host = FakeStyler::default();
        let treatment = HighlightTreatment {
            outline: "0 0 0 2px black".to_string(),
            ..HighlightTreatment::default()
        };

        let _patch = apply(&mut host, &(), &treatment);
        assert_eq!(
            host.inline.get(&StyleProp::Outline).map(String::as_str),
            Some("0 0 0 2px black")
        );
    }
}
