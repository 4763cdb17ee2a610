//! # Stage Board
//!
//! The `StageBoard` is the signalling half of every hand-off in a pipeline. It holds a
//! single stage value drawn from a [`Protocol`] and replaces the usual collection of
//! free-standing condition variables with one state-transition table.
//!
//! ## How a hand-off works
//!
//! 1. The producer publishes data into a [`HandoffSlot`](crate::HandoffSlot).
//! 2. The producer calls [`StageBoard::advance`] with its signal. The board checks the
//!    signal's edge against the current stage and moves forward by exactly one step.
//! 3. The consumer, suspended in [`StageBoard::wait_for`], wakes up once the board
//!    shows the stage it asked for and reads the slot.
//!
//! Waits are predicate-checked: a waiter that wakes up for any other reason simply
//! re-evaluates the stage and goes back to sleep. Bounded waits time out on stalls: the
//! clock restarts whenever the board moves or a long stage reports progress with
//! [`StageBoard::touch`]. Every wait also ends when the board is
//! closed, which is how cancellation reaches actors that are parked on a stage that
//! will never arrive.
//!
//! ## Implementation Details
//!
//! The stage lives in a `tokio::sync::watch` channel. `advance` mutates it under the
//! channel's write lock with `send_if_modified`, so the transition check, the update
//! and the [`SignalListener`] callback happen atomically with respect to other signals.

use crate::error::HandoffError;
use crate::policy::WaitPolicy;
use crate::protocol::{Protocol, Transition};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Observer of accepted signals.
///
/// Called while the board's write lock is held, so implementations must be quick and
/// must not touch the board.
pub trait SignalListener<P: Protocol>: Send + Sync {
    fn on_signal(&self, signal: P::Signal, transition: Transition<P::Stage>);
}

#[derive(Debug, Clone, Copy)]
struct BoardState<S> {
    stage: S,
    closed: bool,
    /// Bumped by `touch`.
    progress: u64,
}

/// Shared finite-state machine gating every hand-off of a pipeline.
pub struct StageBoard<P: Protocol> {
    state: watch::Sender<BoardState<P::Stage>>,
    listener: Option<Arc<dyn SignalListener<P>>>,
}

impl<P: Protocol> StageBoard<P> {
    /// Creates a board at [`Protocol::initial`].
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a board that reports every accepted signal to `listener`.
    pub fn with_listener(listener: Arc<dyn SignalListener<P>>) -> Self {
        Self::build(Some(listener))
    }

    fn build(listener: Option<Arc<dyn SignalListener<P>>>) -> Self {
        let (state, _) = watch::channel(BoardState {
            stage: P::initial(),
            closed: false,
            progress: 0,
        });
        Self { state, listener }
    }

    pub fn current(&self) -> P::Stage {
        self.state.borrow().stage
    }

    pub fn is_closed(&self) -> bool {
        self.state.borrow().closed
    }

    /// Fires a signal, moving the board along the signal's edge.
    ///
    /// # Errors
    /// - [`HandoffError::OutOfOrder`] if the board is not at the edge's source stage.
    /// - [`HandoffError::Closed`] if the board has been closed.
    pub fn advance(&self, signal: P::Signal) -> Result<P::Stage, HandoffError> {
        let edge = P::transition(signal);
        let mut outcome = Ok(edge.to);

        self.state.send_if_modified(|state| {
            if state.closed {
                outcome = Err(HandoffError::Closed {
                    waiting_for: edge.to.to_string(),
                });
                return false;
            }
            if state.stage != edge.from {
                outcome = Err(HandoffError::OutOfOrder {
                    signal: signal.to_string(),
                    expected: edge.from.to_string(),
                    found: state.stage.to_string(),
                });
                return false;
            }
            state.stage = edge.to;
            if let Some(listener) = &self.listener {
                listener.on_signal(signal, edge);
            }
            true
        });

        match &outcome {
            Ok(_) => debug!(%signal, from = %edge.from, to = %edge.to, "Signal"),
            Err(e) => warn!(%signal, error = %e, "Signal rejected"),
        }
        outcome
    }

    /// Suspends until the board shows `stage`.
    ///
    /// A bounded policy limits how long the board may go without progress, not the
    /// total wait: every accepted signal and every [`touch`](Self::touch) restarts the clock.
    ///
    /// # Errors
    /// - [`HandoffError::Timeout`] if the board makes no progress within the policy's bound.
    /// - [`HandoffError::Closed`] if the board is closed before the stage arrives.
    pub async fn wait_for(&self, stage: P::Stage, policy: WaitPolicy) -> Result<(), HandoffError> {
        let mut receiver = self.state.subscribe();
        debug!(%stage, ?policy, "Waiting");

        let closed = || HandoffError::Closed {
            waiting_for: stage.to_string(),
        };

        loop {
            let seen = *receiver.borrow_and_update();
            if seen.stage == stage {
                return Ok(());
            }
            if seen.closed {
                return Err(closed());
            }

            let changed = match policy.limit() {
                None => receiver.changed().await,
                Some(limit) => tokio::time::timeout(limit, receiver.changed())
                    .await
                    .map_err(|_| HandoffError::Timeout {
                        waiting_for: stage.to_string(),
                        waited: limit,
                    })?,
            };
            changed.map_err(|_| closed())?;
        }
    }

    /// Records progress inside the current stage.
    ///
    /// The stage does not move, but every bounded waiter starts its clock again. Use it
    /// from long stages made of several steps. A closed board ignores it.
    pub fn touch(&self) {
        self.state.send_if_modified(|state| {
            if state.closed {
                return false;
            }
            state.progress = state.progress.wrapping_add(1);
            true
        });
    }

    /// Closes the board, waking every waiter with [`HandoffError::Closed`].
    pub fn close(&self) {
        let changed = self.state.send_if_modified(|state| {
            let was_open = !state.closed;
            state.closed = true;
            was_open
        });
        if changed {
            info!(stage = %self.current(), "Board closed");
        }
    }

    /// Returns a finished board to [`Protocol::initial`].
    ///
    /// A board that is already at the initial stage is left alone.
    ///
    /// # Errors
    /// - [`HandoffError::Busy`] while a traversal is still in flight.
    /// - [`HandoffError::Closed`] once the board has been closed.
    pub fn reset(&self) -> Result<(), HandoffError> {
        let mut outcome = Ok(());
        self.state.send_if_modified(|state| {
            if state.closed {
                outcome = Err(HandoffError::Closed {
                    waiting_for: P::initial().to_string(),
                });
                return false;
            }
            if state.stage == P::initial() {
                return false;
            }
            if !P::is_terminal(state.stage) {
                outcome = Err(HandoffError::Busy {
                    stage: state.stage.to_string(),
                });
                return false;
            }
            state.stage = P::initial();
            true
        });
        if outcome.is_ok() {
            debug!(stage = %P::initial(), "Board reset");
        }
        outcome
    }
}

impl<P: Protocol> Default for StageBoard<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Protocol> fmt::Debug for StageBoard<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = *self.state.borrow();
        f.debug_struct("StageBoard")
            .field("stage", &state.stage)
            .field("closed", &state.closed)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
