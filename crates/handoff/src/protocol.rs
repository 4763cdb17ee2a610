//! # Protocol Trait
//!
//! A `Protocol` is the transition table of a linear hand-off pipeline. It names the
//! stages the shared board can be in and the signals that move it between them.
//!
//! # Architecture Note
//! Ad hoc pipelines tend to grow one condition variable per hand-off, and two waits
//! can end up sharing a predicate that means different things depending on who is
//! asking. Describing the whole pipeline as one table of `signal -> (from, to)` lets
//! the [`StageBoard`](crate::StageBoard) validate every transition in one place and
//! gives every waiter a distinct, named stage to wait for.

use std::fmt::{Debug, Display};

/// A single edge of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<S> {
    pub from: S,
    pub to: S,
}

impl<S> Transition<S> {
    pub fn new(from: S, to: S) -> Self {
        Self { from, to }
    }
}

/// Transition table for a hand-off pipeline.
///
/// Implementors are usually zero-sized marker types; the stages and signals carry
/// the actual data.
pub trait Protocol: Send + Sync + 'static {
    /// A state of the shared board.
    type Stage: Copy + Eq + Debug + Display + Send + Sync + 'static;

    /// A named notification that advances the board by exactly one edge.
    type Signal: Copy + Eq + Debug + Display + Send + Sync + 'static;

    /// The stage a fresh (or reset) board starts in.
    fn initial() -> Self::Stage;

    /// Returns `true` once a traversal has ended and the board may be reset.
    fn is_terminal(stage: Self::Stage) -> bool;

    /// The edge a signal is allowed to take.
    fn transition(signal: Self::Signal) -> Transition<Self::Stage>;
}
