// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Rect;
use waymark_anchor::{Anchor, PopoverMetrics, compute_anchor};
use waymark_highlight::{HighlightTreatment, StylePatch, apply, release};

use crate::events::{TourEvent, TourEvents};
use crate::keymap::{Key, TourCommand, command_for};
use crate::popover::PopoverFrame;
use crate::step::Step;
use crate::surface::TourSurface;

/// Milliseconds to wait between scrolling a target into view and
/// re-measuring its rectangle, so layout and smooth scrolling settle first.
pub const SETTLE_DELAY_MS: u64 = 100;

/// Navigational state of a tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourState {
    /// No session; initial and terminal between sessions.
    Closed,
    /// A session with the given zero-based step active.
    Active(usize),
}

/// The tour engine: an ordered step list plus the session state driving it.
///
/// `Tour` owns no host elements. Per step it acquires exactly one scoped
/// styling override (a [`StylePatch`]) on the current target and releases it
/// before targeting another element or ending the session, on every exit
/// path: explicit close, keyboard cancel, terminal `next()`, or host
/// teardown calling [`Tour::close`].
///
/// All operations take the host surface as an argument and return the
/// [`TourEvent`]s the transition produced; see the crate docs for the
/// wiring pattern.
#[derive(Debug)]
pub struct Tour<E> {
    steps: Vec<Step<E>>,
    state: TourState,
    current: Option<E>,
    patch: Option<StylePatch>,
    rect: Option<Rect>,
    anchor: Option<Anchor>,
    settle_generation: u64,
    metrics: PopoverMetrics,
    treatment: HighlightTreatment,
}

impl<E: Clone> Tour<E> {
    /// Creates a closed tour over the given steps.
    #[must_use]
    pub fn new(steps: Vec<Step<E>>) -> Self {
        Self {
            steps,
            state: TourState::Closed,
            current: None,
            patch: None,
            rect: None,
            anchor: None,
            settle_generation: 0,
            metrics: PopoverMetrics::default(),
            treatment: HighlightTreatment::default(),
        }
    }

    /// Replaces the assumed popover box used for anchor clamping.
    #[must_use]
    pub fn with_metrics(mut self, metrics: PopoverMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replaces the highlight treatment applied to targets.
    #[must_use]
    pub fn with_treatment(mut self, treatment: HighlightTreatment) -> Self {
        self.treatment = treatment;
        self
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, TourState::Active(_))
    }

    /// Zero-based index of the active step, `None` while closed.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            TourState::Active(index) => Some(index),
            TourState::Closed => None,
        }
    }

    /// Number of steps in the tour.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Last-measured bounding rectangle of the active target, `None` while
    /// closed or when the target is unresolved.
    #[must_use]
    pub fn current_rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Current popover anchor, `None` while closed.
    #[must_use]
    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    /// Opens the tour on step 0.
    ///
    /// No-op when already open or when the step list is empty (there is no
    /// step 0 to land on).
    pub fn open<S: TourSurface<Element = E>>(&mut self, surface: &mut S) -> TourEvents {
        let mut events = TourEvents::new();
        if self.is_open() || self.steps.is_empty() {
            return events;
        }
        self.activate(surface, 0, &mut events);
        events
    }

    /// Advances to the next step; past the last step, closes the tour and
    /// signals completion.
    pub fn next<S: TourSurface<Element = E>>(&mut self, surface: &mut S) -> TourEvents {
        let mut events = TourEvents::new();
        match self.state {
            TourState::Active(index) if index + 1 < self.steps.len() => {
                self.activate(surface, index + 1, &mut events);
            }
            TourState::Active(_) => self.end(surface, true, &mut events),
            TourState::Closed => {}
        }
        events
    }

    /// Retreats to the previous step; no-op on the first step or while
    /// closed.
    pub fn back<S: TourSurface<Element = E>>(&mut self, surface: &mut S) -> TourEvents {
        let mut events = TourEvents::new();
        if let TourState::Active(index) = self.state {
            if index > 0 {
                self.activate(surface, index - 1, &mut events);
            }
        }
        events
    }

    /// Jumps directly to step `index` (step-indicator navigation).
    ///
    /// Out-of-range indices are a no-op, as is calling while closed. Jumping
    /// to the already-active index re-activates it: the target is resolved
    /// afresh, since the surface may have re-rendered.
    pub fn goto<S: TourSurface<Element = E>>(
        &mut self,
        surface: &mut S,
        index: usize,
    ) -> TourEvents {
        let mut events = TourEvents::new();
        if self.is_open() && index < self.steps.len() {
            self.activate(surface, index, &mut events);
        }
        events
    }

    /// Closes the tour from any active state (explicit cancel, backdrop
    /// click). No-op while closed.
    pub fn close<S: TourSurface<Element = E>>(&mut self, surface: &mut S) -> TourEvents {
        let mut events = TourEvents::new();
        self.end(surface, false, &mut events);
        events
    }

    /// Applies the keyboard contract: Escape closes, the arrow keys
    /// navigate. Inert while closed.
    pub fn handle_key<S: TourSurface<Element = E>>(
        &mut self,
        surface: &mut S,
        key: Key,
    ) -> TourEvents {
        if !self.is_open() {
            return TourEvents::new();
        }
        match command_for(key) {
            TourCommand::Close => self.close(surface),
            TourCommand::Next => self.next(surface),
            TourCommand::Back => self.back(surface),
        }
    }

    /// Settle callback: re-measures the target after the post-scroll delay.
    ///
    /// The host calls this [`SETTLE_DELAY_MS`] after receiving
    /// [`TourEvent::SettleRequested`], passing the event's generation. A
    /// stale generation (the step changed or the tour closed in the
    /// meantime) or a detached target makes this a silent no-op. Returns
    /// `true` when geometry was re-measured.
    pub fn settle<S: TourSurface<Element = E>>(&mut self, surface: &S, generation: u64) -> bool {
        if !self.is_open() || generation != self.settle_generation {
            return false;
        }
        let Some(element) = self.current.clone() else {
            return false;
        };
        if !surface.is_attached(&element) {
            return false;
        }
        self.rect = surface.bounding_rect(&element);
        self.recompute_anchor(surface);
        true
    }

    /// Reacts to a viewport scroll or resize while a step is active:
    /// re-measures the target and recomputes the anchor without touching the
    /// active index. Returns `true` when the anchor changed.
    pub fn viewport_changed<S: TourSurface<Element = E>>(&mut self, surface: &S) -> bool {
        if !self.is_open() {
            return false;
        }
        if let Some(element) = self.current.clone() {
            self.rect = if surface.is_attached(&element) {
                surface.bounding_rect(&element)
            } else {
                None
            };
        }
        let previous = self.anchor;
        self.recompute_anchor(surface);
        self.anchor != previous
    }

    /// Render-ready view of the active step, `None` while closed.
    #[must_use]
    pub fn popover_frame(&self) -> Option<PopoverFrame<'_>> {
        let TourState::Active(index) = self.state else {
            return None;
        };
        let anchor = self.anchor?;
        PopoverFrame::for_step(&self.steps, index, anchor)
    }

    /// Snapshot of the session state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TourDebugInfo {
        TourDebugInfo {
            state: self.state,
            step_count: self.steps.len(),
            target_resolved: self.current.is_some(),
            rect: self.rect,
            anchor: self.anchor,
            settle_generation: self.settle_generation,
        }
    }

    /// Commits a transition into `index`: releases the previous highlight,
    /// invalidates any pending settle, resolves and measures the new target,
    /// and recomputes the anchor.
    fn activate<S: TourSurface<Element = E>>(
        &mut self,
        surface: &mut S,
        index: usize,
        events: &mut TourEvents,
    ) {
        self.release_current(surface);
        self.settle_generation = self.settle_generation.wrapping_add(1);
        self.state = TourState::Active(index);

        let resolved = self.steps[index].target.resolve(&*surface);
        self.rect = None;
        if let Some(element) = &resolved {
            surface.scroll_into_view(element);
            self.rect = surface.bounding_rect(element);
            self.patch = Some(apply(surface, element, &self.treatment));
        }
        self.current = resolved;
        self.recompute_anchor(&*surface);

        events.push(TourEvent::StepChanged(index));
        // Nothing was scrolled for an unresolved target, so there is no
        // layout to wait out and no settle to request.
        if self.current.is_some() {
            events.push(TourEvent::SettleRequested {
                generation: self.settle_generation,
            });
        }
    }

    /// Ends the session from any active state, reversing every per-step
    /// side effect.
    fn end<S: TourSurface<Element = E>>(
        &mut self,
        surface: &mut S,
        completed: bool,
        events: &mut TourEvents,
    ) {
        if !self.is_open() {
            return;
        }
        self.release_current(surface);
        self.settle_generation = self.settle_generation.wrapping_add(1);
        self.state = TourState::Closed;
        self.rect = None;
        self.anchor = None;
        events.push(TourEvent::Closed { completed });
    }

    /// Releases the highlight on the previous target, if any. Driven by the
    /// recorded patch, so it restores exactly what apply changed.
    fn release_current<S: TourSurface<Element = E>>(&mut self, surface: &mut S) {
        if let (Some(element), Some(patch)) = (self.current.take(), self.patch.take()) {
            release(surface, &element, &patch);
        }
    }

    fn recompute_anchor<S: TourSurface<Element = E>>(&mut self, surface: &S) {
        if let TourState::Active(index) = self.state {
            let step = &self.steps[index];
            self.anchor = Some(compute_anchor(
                self.rect,
                step.placement,
                step.spacing,
                surface.viewport(),
                &self.metrics,
            ));
        }
    }
}

/// Debug snapshot of a [`Tour`] session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TourDebugInfo {
    /// Navigational state.
    pub state: TourState,
    /// Number of steps in the tour.
    pub step_count: usize,
    /// Whether the active step's target resolved to an element.
    pub target_resolved: bool,
    /// Last-measured target rectangle.
    pub rect: Option<Rect>,
    /// Current popover anchor.
    pub anchor: Option<Anchor>,
    /// Generation of the most recent activation; pending settles carrying
    /// an older generation are rejected.
    pub settle_generation: u64,
}
