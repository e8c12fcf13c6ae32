// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Tour: a headless guided product tour engine.
//!
//! Given an ordered list of [`Step`]s, each referencing a target element on
//! the host surface, the engine sequentially highlights each target,
//! computes a popover anchor for it, and drives forward/backward/exit
//! navigation — while keeping geometry fresh across scroll and resize. It
//! renders nothing and owns no elements: every read and write of the live
//! surface goes through the host-implemented [`TourSurface`] trait, and all
//! notifications come back as returned [`TourEvent`] values.
//!
//! The heavy lifting is split across the Waymark kernels:
//! - `waymark_anchor` — placement geometry and viewport clamping.
//! - `waymark_highlight` — the reversible style patch marking the target.
//! - this crate — the navigational state machine, lazy target resolution,
//!   keyboard mapping, settle-delay discipline, and the [`PopoverFrame`]
//!   view the host paints.
//!
//! ## Wiring pattern
//!
//! 1. Implement [`TourSurface`] over your element handles.
//! 2. Call [`Tour::open`]/[`Tour::next`]/[`Tour::back`]/[`Tour::goto`]/
//!    [`Tour::close`] from your controls and route key events through
//!    [`Tour::handle_key`] while [`Tour::is_open`].
//! 3. After any call that returned events or `true`, repaint from
//!    [`Tour::popover_frame`].
//! 4. On [`TourEvent::SettleRequested`], start a [`SETTLE_DELAY_MS`] timer
//!    and then call [`Tour::settle`] with the event's generation; call
//!    [`Tour::viewport_changed`] from your scroll/resize listeners while the
//!    tour is open.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use waymark_highlight::{ElementStyler, StyleProp};
//! use waymark_tour::{Key, Step, Target, Tour, TourEvent, TourSurface};
//!
//! // Toy host surface: one element, inline styles kept in a vector.
//! #[derive(Default)]
//! struct Page {
//!     styles: Vec<(StyleProp, String)>,
//!     marked: bool,
//! }
//!
//! impl ElementStyler for Page {
//!     type Element = &'static str;
//!
//!     fn inline_style(&self, _el: &&'static str, prop: StyleProp) -> Option<String> {
//!         self.styles
//!             .iter()
//!             .find(|(p, _)| *p == prop)
//!             .map(|(_, v)| v.clone())
//!     }
//!
//!     fn set_inline_style(&mut self, _el: &&'static str, prop: StyleProp, value: Option<&str>) {
//!         self.styles.retain(|(p, _)| *p != prop);
//!         if let Some(value) = value {
//!             self.styles.push((prop, value.to_owned()));
//!         }
//!     }
//!
//!     fn has_static_position(&self, _el: &&'static str) -> bool {
//!         true
//!     }
//!
//!     fn add_marker_class(&mut self, _el: &&'static str) {
//!         self.marked = true;
//!     }
//!
//!     fn remove_marker_class(&mut self, _el: &&'static str) {
//!         self.marked = false;
//!     }
//! }
//!
//! impl TourSurface for Page {
//!     fn query_selector(&self, selector: &str) -> Option<&'static str> {
//!         (selector == "#save").then_some("save")
//!     }
//!
//!     fn bounding_rect(&self, _el: &&'static str) -> Option<Rect> {
//!         Some(Rect::new(40.0, 40.0, 140.0, 80.0))
//!     }
//!
//!     fn is_attached(&self, _el: &&'static str) -> bool {
//!         true
//!     }
//!
//!     fn viewport(&self) -> Size {
//!         Size::new(1024.0, 768.0)
//!     }
//!
//!     fn scroll_into_view(&mut self, _el: &&'static str) {}
//! }
//!
//! let mut page = Page::default();
//! let mut tour = Tour::new(vec![
//!     Step::new(Target::selector("#save")).with_title("Save your work"),
//! ]);
//!
//! let events = tour.open(&mut page);
//! assert_eq!(events[0], TourEvent::StepChanged(0));
//! assert!(page.marked);
//!
//! let frame = tour.popover_frame().unwrap();
//! assert_eq!((frame.step_number, frame.step_count), (1, 1));
//!
//! // Escape closes and releases the highlight.
//! let events = tour.handle_key(&mut page, Key::Escape);
//! assert_eq!(events[0], TourEvent::Closed { completed: false });
//! assert!(!page.marked);
//! ```
//!
//! ## Degradation, not errors
//!
//! There is no error surface. An unresolvable target keeps the step active
//! with a viewport-centered popover and no highlight; out-of-range
//! navigation clamps or closes; a settle callback arriving after its step
//! ended is rejected by its stale generation. See the individual operation
//! docs for the exact rules.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod events;
mod keymap;
mod popover;
mod step;
mod surface;
mod tour;

pub use events::{TourEvent, TourEvents};
pub use keymap::{Key, TourCommand, command_for};
pub use popover::{DEFAULT_FINISH_LABEL, DEFAULT_NEXT_LABEL, PopoverFrame};
pub use step::{Step, Target};
pub use surface::TourSurface;
pub use tour::{SETTLE_DELAY_MS, Tour, TourDebugInfo, TourState};
