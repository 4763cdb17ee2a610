//! # Hand-off Errors
//!
//! This module defines the errors a hand-off can surface. Every blocking wait in the
//! framework ends in one of three ways: the awaited stage arrives, the wait policy's
//! bound elapses (`Timeout`), or the board is closed underneath the waiter (`Closed`).
//! The remaining variants report protocol violations on the board or on a slot.

use std::time::Duration;

/// Errors that can occur while publishing, consuming or waiting on a hand-off.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum HandoffError {
    #[error("Timed out after {waited:?} waiting for stage {waiting_for}")]
    Timeout { waiting_for: String, waited: Duration },

    #[error("Board closed while waiting for stage {waiting_for}")]
    Closed { waiting_for: String },

    #[error("Signal {signal} fired out of order: expected stage {expected}, found {found}")]
    OutOfOrder {
        signal: String,
        expected: String,
        found: String,
    },

    #[error("Slot {slot} still holds an unconsumed item")]
    Occupied { slot: &'static str },

    #[error("Slot {slot} is empty")]
    Empty { slot: &'static str },

    #[error("Board is busy at stage {stage}")]
    Busy { stage: String },
}

impl HandoffError {
    /// Returns `true` for errors caused by someone else's failure closing the board.
    ///
    /// The orchestrator uses this to prefer the originating error over the
    /// `Closed` errors it cascades into the remaining actors.
    pub fn is_cascade(&self) -> bool {
        matches!(self, HandoffError::Closed { .. })
    }
}
