//! Direction input buffering

use super::grid::Direction;

/// Audible response to a proposed direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// A genuine new intent was accepted
    Turn,
    /// Reversal onto the neck, rejected
    Invalid,
    /// Accepted but nothing changed
    Silent,
}

/// Holds at most one direction waiting for the next tick.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    pending: Option<Direction>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer `direction` for the next tick.
    ///
    /// Reversals are checked against `current` only, never against what is pending.
    /// `force_feedback` makes any accepted direction report [`Feedback::Turn`].
    pub fn propose(
        &mut self,
        current: Direction,
        direction: Direction,
        force_feedback: bool,
    ) -> Feedback {
        if direction.is_opposite(current) {
            return Feedback::Invalid;
        }
        let is_new = direction != current && self.pending != Some(direction);
        self.pending = Some(direction);
        if force_feedback || is_new {
            Feedback::Turn
        } else {
            Feedback::Silent
        }
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Consume the buffered direction.
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
