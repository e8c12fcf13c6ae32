// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Highlight: reversible style patches for tour target emphasis.
//!
//! While a tour step is active, its target element carries a visual emphasis
//! treatment: a marker class for stylesheet hooks, a raised stacking order
//! (below the popover layer), a soft outline, a solid background, and
//! rounded corners, with the element forced into a positioned context when
//! it was statically positioned. This crate models that treatment as an
//! explicit, reversible [`StylePatch`] — a record of property →
//! original/override pairs — rather than a hand-written inverse of apply.
//!
//! The engine never owns host elements. All reads and writes go through the
//! host-implemented [`ElementStyler`] seam, and [`apply`] snapshots every
//! pre-existing inline value before overriding it, so [`release`] restores
//! the element exactly — including an explicit `position` the element
//! already had for unrelated reasons.
//!
//! ## Minimal example
//!
//! ```rust
//! use waymark_highlight::{
//!     apply, release, ElementStyler, HighlightTreatment, StyleProp,
//! };
//!
//! // A toy host: one element, styles kept in a vector.
//! #[derive(Default)]
//! struct OneElement {
//!     inline: Vec<(StyleProp, String)>,
//!     marked: bool,
//! }
//!
//! impl ElementStyler for OneElement {
//!     type Element = ();
//!
//!     fn inline_style(&self, _el: &(), prop: StyleProp) -> Option<String> {
//!         self.inline
//!             .iter()
//!             .find(|(p, _)| *p == prop)
//!             .map(|(_, v)| v.clone())
//!     }
//!
//!     fn set_inline_style(&mut self, _el: &(), prop: StyleProp, value: Option<&str>) {
//!         self.inline.retain(|(p, _)| *p != prop);
//!         if let Some(value) = value {
//!             self.inline.push((prop, value.to_owned()));
//!         }
//!     }
//!
//!     fn has_static_position(&self, _el: &()) -> bool {
//!         self.inline.iter().all(|(p, _)| *p != StyleProp::Position)
//!     }
//!
//!     fn add_marker_class(&mut self, _el: &()) {
//!         self.marked = true;
//!     }
//!
//!     fn remove_marker_class(&mut self, _el: &()) {
//!         self.marked = false;
//!     }
//! }
//!
//! let mut host = OneElement::default();
//! let patch = apply(&mut host, &(), &HighlightTreatment::default());
//! assert!(host.marked);
//! assert!(host.inline_style(&(), StyleProp::Outline).is_some());
//!
//! release(&mut host, &(), &patch);
//! assert!(!host.marked);
//! assert!(host.inline.is_empty());
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod controller;
mod patch;
mod treatment;

pub use controller::{ElementStyler, apply, release};
pub use patch::{PatchEntry, StylePatch, StyleProp};
pub use treatment::{
    HIGHLIGHT_STACK_ORDER, HighlightTreatment, MARKER_CLASS, POPOVER_STACK_ORDER,
};
