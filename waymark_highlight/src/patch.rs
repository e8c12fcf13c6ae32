// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reversible style patch: explicit data describing exactly what the
//! highlight changed on an element, so release logic is a replay of recorded
//! originals rather than a mirror image of apply.

use alloc::string::String;
use alloc::vec::Vec;

/// The inline style properties the highlight treatment touches.
///
/// The set is closed: release only ever clears or restores these five, so a
/// highlight cycle can never disturb unrelated styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProp {
    /// The element's positioning scheme (forced to a positioned context only
    /// when the element was statically positioned).
    Position,
    /// Stacking order, raised to just below the popover layer.
    StackOrder,
    /// The soft outline drawn around the target.
    Outline,
    /// Solid background keeping the target legible against backdrop dimming.
    Background,
    /// Corner rounding matching the popover's visual language.
    CornerRadius,
}

impl StyleProp {
    /// All patchable properties.
    pub const ALL: [Self; 5] = [
        Self::Position,
        Self::StackOrder,
        Self::Outline,
        Self::Background,
        Self::CornerRadius,
    ];

    /// The CSS property name a DOM-backed host maps this to.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::StackOrder => "z-index",
            Self::Outline => "box-shadow",
            Self::Background => "background",
            Self::CornerRadius => "border-radius",
        }
    }
}

/// One recorded property change: the pre-existing inline value (if any) and
/// the override written in its place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchEntry {
    /// Inline value the element had before the override, `None` if unset.
    pub original: Option<String>,
    /// The override value the highlight wrote.
    pub value: String,
}

/// A reversible set of property overrides applied to one element.
///
/// Entries are kept sorted by property for lookup; a property appears at
/// most once. The patch is inert data — applying and reverting it is the
/// controller's job (see [`crate::apply`] / [`crate::release`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StylePatch {
    entries: Vec<(StyleProp, PatchEntry)>,
}

impl StylePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the patch records no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Records an override, snapshotting the pre-existing value alongside it.
    ///
    /// Recording the same property again replaces the override but keeps the
    /// first snapshot, so release still restores the true original.
    pub fn record(&mut self, prop: StyleProp, original: Option<String>, value: String) {
        match self.entries.binary_search_by_key(&prop, |(p, _)| *p) {
            Ok(idx) => self.entries[idx].1.value = value,
            Err(idx) => self.entries.insert(idx, (prop, PatchEntry { original, value })),
        }
    }

    /// Looks up the recorded entry for a property.
    #[must_use]
    pub fn get(&self, prop: StyleProp) -> Option<&PatchEntry> {
        self.entries
            .binary_search_by_key(&prop, |(p, _)| *p)
            .ok()
            .map(|idx| &self.entries[idx].1)
    }

    /// Iterates over the recorded entries in property order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProp, &PatchEntry)> + '_ {
        self.entries.iter().map(|(p, e)| (*p, e))
    }
}
