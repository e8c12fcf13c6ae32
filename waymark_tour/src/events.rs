// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Notification emitted by a committed tour transition.
///
/// Events are returned from the engine call that produced them rather than
/// delivered through stored callbacks, so hosts decide how to route them
/// (invoke an `on_step_change` handler, re-render, schedule a timer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourEvent {
    /// A step became active; carries the new zero-based index.
    StepChanged(usize),
    /// The tour closed. `completed` is `true` only when the close was the
    /// terminal `next()` past the last step.
    Closed {
        /// Whether the tour ran to completion rather than being cancelled.
        completed: bool,
    },
    /// The active step scrolled its target into view; the host should call
    /// [`crate::Tour::settle`] with this generation after
    /// [`crate::SETTLE_DELAY_MS`] milliseconds. A stale generation is
    /// silently rejected.
    SettleRequested {
        /// Generation token tying the request to the activation that made it.
        generation: u64,
    },
}

/// Event buffer returned by engine operations. A transition emits at most a
/// step change plus a settle request, so two slots stay inline.
pub type TourEvents = SmallVec<[TourEvent; 2]>;
