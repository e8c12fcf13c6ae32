// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard contract while the tour is open.
//!
//! Hosts attach their global key listener when the tour opens and detach it
//! when the tour closes; [`crate::Tour::handle_key`] is additionally inert
//! while closed, so a listener that outlives its welcome cannot corrupt
//! state — it can only leak, which the attach/detach discipline prevents.

/// The keys the tour responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Cancel key: closes the tour.
    Escape,
    /// Forward navigation: advances to the next step.
    ArrowRight,
    /// Backward navigation: retreats to the previous step.
    ArrowLeft,
}

/// Navigation command a key maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourCommand {
    /// Close the tour without completing it.
    Close,
    /// Advance (or finish on the last step).
    Next,
    /// Retreat (no-op on the first step).
    Back,
}

/// Maps a key to its tour command.
#[must_use]
pub fn command_for(key: Key) -> TourCommand {
    match key {
        Key::Escape => TourCommand::Close,
        Key::ArrowRight => TourCommand::Next,
        Key::ArrowLeft => TourCommand::Back,
    }
}

#[cfg(test)]
mod tests {
    use super::{Key, TourCommand, command_for};

    #[test]
    fn bindings_match_the_contract() {
        assert_eq!(command_for(Key::Escape), TourCommand::Close);
        assert_eq!(command_for(Key::ArrowRight), TourCommand::Next);
        assert_eq!(command_for(Key::ArrowLeft), TourCommand::Back);
    }
}
