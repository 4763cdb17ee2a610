//! Error types for the orchestration layer.

use crate::actors::ActorError;
use handoff::HandoffError;
use thiserror::Error;

/// Errors surfaced to whoever runs the kitchen.
#[derive(Debug, Error)]
pub enum KitchenError {
    /// An actor failed during a traversal.
    #[error(transparent)]
    Actor(#[from] ActorError),

    /// The pass could not be prepared for a new traversal.
    #[error("Pass not ready: {0}")]
    Handoff(#[from] HandoffError),

    /// An actor task panicked or vanished without reporting.
    #[error("Actor task ended abnormally: {0}")]
    Join(String),

    /// The configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl KitchenError {
    /// `true` for errors that only echo someone else's failure.
    pub fn is_cascade(&self) -> bool {
        match self {
            KitchenError::Actor(e) => e.is_cascade(),
            _ => false,
        }
    }
}
