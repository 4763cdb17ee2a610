//! # Instrumented Listener for Tests
//!
//! [`SignalRecorder`] is a [`SignalListener`] that remembers every accepted signal
//! together with the instant it fired. Plug it into a board with
//! [`StageBoard::with_listener`](crate::StageBoard::with_listener), run the pipeline,
//! then assert on the recorded order.
//!
//! ```rust
//! use handoff::mock::SignalRecorder;
//! use handoff::{Protocol, StageBoard, Transition};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)] enum Stage { Idle, Done }
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)] enum Signal { Finish }
//! impl std::fmt::Display for Stage {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{:?}", self) }
//! }
//! impl std::fmt::Display for Signal {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{:?}", self) }
//! }
//!
//! struct OneStep;
//! impl Protocol for OneStep {
//!     type Stage = Stage; type Signal = Signal;
//!     fn initial() -> Stage { Stage::Idle }
//!     fn is_terminal(stage: Stage) -> bool { stage == Stage::Done }
//!     fn transition(_: Signal) -> Transition<Stage> { Transition::new(Stage::Idle, Stage::Done) }
//! }
//!
//! let recorder = Arc::new(SignalRecorder::<OneStep>::new());
//! let board = StageBoard::with_listener(recorder.clone());
//! board.advance(Signal::Finish).unwrap();
//!
//! assert_eq!(recorder.signals(), vec![Signal::Finish]);
//! recorder.assert_monotonic();
//! ```

use crate::board::SignalListener;
use crate::protocol::{Protocol, Transition};
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

/// One accepted signal as seen by the recorder.
pub struct FiredSignal<P: Protocol> {
    pub signal: P::Signal,
    pub transition: Transition<P::Stage>,
    pub at: Instant,
}

// Manual impls: a derive would demand `P: Clone` / `P: Debug` of the marker type.
impl<P: Protocol> Clone for FiredSignal<P> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal,
            transition: self.transition,
            at: self.at,
        }
    }
}

impl<P: Protocol> fmt::Debug for FiredSignal<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiredSignal")
            .field("signal", &self.signal)
            .field("transition", &self.transition)
            .field("at", &self.at)
            .finish()
    }
}

/// Records accepted signals with their fire time.
pub struct SignalRecorder<P: Protocol> {
    fired: Mutex<Vec<FiredSignal<P>>>,
}

impl<P: Protocol> SignalRecorder<P> {
    pub fn new() -> Self {
        Self {
            fired: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far, in fire order.
    pub fn fired(&self) -> Vec<FiredSignal<P>> {
        self.fired.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn signals(&self) -> Vec<P::Signal> {
        self.fired().into_iter().map(|fired| fired.signal).collect()
    }

    /// Asserts that timestamps never go backwards and that every edge starts where
    /// the previous one ended.
    ///
    /// # Panics
    /// Panics with a description of the first violation.
    pub fn assert_monotonic(&self) {
        let fired = self.fired();
        for pair in fired.windows(2) {
            let (earlier, later) = (&pair[0], &pair[1]);
            assert!(
                earlier.at <= later.at,
                "signal {} fired before {}",
                later.signal,
                earlier.signal
            );
            assert_eq!(
                earlier.transition.to, later.transition.from,
                "signal {} did not continue from {}",
                later.signal, earlier.signal
            );
        }
    }

    /// Asserts the exact sequence of recorded signals.
    ///
    /// # Panics
    /// Panics if the recorded sequence differs from `expected`.
    pub fn assert_sequence(&self, expected: &[P::Signal]) {
        assert_eq!(self.signals(), expected, "unexpected signal sequence");
    }
}

impl<P: Protocol> Default for SignalRecorder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Protocol> SignalListener<P> for SignalRecorder<P> {
    fn on_signal(&self, signal: P::Signal, transition: Transition<P::Stage>) {
        self.fired.lock().unwrap_or_else(PoisonError::into_inner).push(FiredSignal {
            signal,
            transition,
            at: Instant::now(),
        });
    }
}
