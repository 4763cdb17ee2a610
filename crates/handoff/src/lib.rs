//! # Handoff
//!
//! This crate provides the building blocks for pipelines of concurrently running actors
//! that pass work to each other in a strict order. Each actor waits for its turn,
//! does its share of the work, publishes the result and tells the next actor to go.
//!
//! ## Why a Board and Slots?
//!
//! The textbook version of such a pipeline uses a global queue per data type, a mutex
//! per queue and a condition variable per hand-off. It works, but:
//!
//! - every hand-off is its own condition, so the order of the protocol only exists in
//!   the program text;
//! - two waits can share the same "queue is non-empty" predicate while meaning
//!   different things;
//! - a lost notification parks its successor forever.
//!
//! This crate splits the concerns:
//!
//! 1. **Protocol** ([`Protocol`]) - the transition table, written once.
//! 2. **Signalling** ([`StageBoard`]) - one shared stage value, validated advances and
//!    predicate-checked waits with an explicit [`WaitPolicy`].
//! 3. **Data** ([`HandoffSlot`]) - single-slot holders that own their item and their lock.
//!
//! ## Example
//!
//! ```rust
//! use handoff::{HandoffSlot, Protocol, StageBoard, Transition, WaitPolicy};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)] enum Stage { Empty, Sent, Read }
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)] enum Signal { Sent, Read }
//! impl std::fmt::Display for Stage {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{:?}", self) }
//! }
//! impl std::fmt::Display for Signal {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{:?}", self) }
//! }
//!
//! struct Letter;
//! impl Protocol for Letter {
//!     type Stage = Stage;
//!     type Signal = Signal;
//!     fn initial() -> Stage { Stage::Empty }
//!     fn is_terminal(stage: Stage) -> bool { stage == Stage::Read }
//!     fn transition(signal: Signal) -> Transition<Stage> {
//!         match signal {
//!             Signal::Sent => Transition::new(Stage::Empty, Stage::Sent),
//!             Signal::Read => Transition::new(Stage::Sent, Stage::Read),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let board = Arc::new(StageBoard::<Letter>::new());
//!     let mailbox = Arc::new(HandoffSlot::new("mailbox"));
//!
//!     let reader = {
//!         let (board, mailbox) = (board.clone(), mailbox.clone());
//!         tokio::spawn(async move {
//!             board.wait_for(Stage::Sent, WaitPolicy::Unbounded).await.unwrap();
//!             let text: String = mailbox.take().unwrap();
//!             board.advance(Signal::Read).unwrap();
//!             text
//!         })
//!     };
//!
//!     mailbox.publish("hello".to_string()).unwrap();
//!     board.advance(Signal::Sent).unwrap();
//!
//!     assert_eq!(reader.await.unwrap(), "hello");
//!     assert_eq!(board.current(), Stage::Read);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`SignalRecorder`](mock::SignalRecorder) that records
//! every accepted signal with its timestamp, for asserting protocol order.

pub mod board;
pub mod error;
pub mod mock;
pub mod policy;
pub mod protocol;
pub mod slot;

// Re-export core types for convenience
pub use board::{SignalListener, StageBoard};
pub use error::HandoffError;
pub use policy::WaitPolicy;
pub use protocol::{Protocol, Transition};
pub use slot::HandoffSlot;
