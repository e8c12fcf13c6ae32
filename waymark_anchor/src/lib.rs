// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Anchor: headless popover placement and viewport clamping.
//!
//! This crate computes where a tour popover should sit relative to a target
//! rectangle. It is pure geometry: given a target's bounding rectangle, a
//! requested [`Placement`], a spacing offset, and the viewport size, it
//! produces an [`Anchor`] — an anchor point plus per-axis alignment — and
//! clamps it so the popover's assumed box never leaves the viewport.
//!
//! It does **not** measure elements, scroll, or render anything. Callers are
//! expected to:
//! - Measure the target rectangle themselves (for example through the
//!   `waymark_tour` host surface).
//! - Translate the resulting [`Anchor`] into their own style system
//!   (CSS `left`/`top` plus centering transforms, canvas offsets, etc.).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use waymark_anchor::{compute_anchor, Align, Placement, PopoverMetrics, DEFAULT_SPACING};
//!
//! let viewport = Size::new(1280.0, 800.0);
//! let target = Rect::new(500.0, 300.0, 700.0, 340.0);
//! let metrics = PopoverMetrics::default();
//!
//! // Anchor below the target, centered on its horizontal midpoint.
//! let anchor = compute_anchor(
//!     Some(target),
//!     Placement::BottomCenter,
//!     DEFAULT_SPACING,
//!     viewport,
//!     &metrics,
//! );
//! assert_eq!(anchor.point.x, 600.0);
//! assert_eq!(anchor.point.y, 340.0 + DEFAULT_SPACING);
//! assert_eq!(anchor.align_x, Align::Center);
//!
//! // An unresolved target falls back to the viewport center.
//! let fallback = compute_anchor(None, Placement::BottomCenter, 0.0, viewport, &metrics);
//! assert_eq!(fallback.point.x, 640.0);
//! assert_eq!(fallback.align_y, Align::Center);
//! ```
//!
//! ## Clamping
//!
//! Raw placement can push the popover off-screen near viewport edges. The
//! clamp step measures the effective box implied by the anchor point, the
//! alignment, and the assumed popover size in [`PopoverMetrics`], then pins
//! the offending edge to the margin and drops centering on that axis. See
//! [`compute_anchor`] for the exact rules.
//!
//! This crate is `no_std`.

#![no_std]

mod anchor;
mod placement;

pub use anchor::{Align, Anchor, DEFAULT_SPACING, PopoverMetrics, compute_anchor};
pub use placement::Placement;
