//! Error types for the stage actors.

use crate::model::{ModelError, Role};
use handoff::HandoffError;
use thiserror::Error;

/// Errors that stop an actor before it completes its part of a traversal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActorError {
    /// A wait, publish, read or signal failed.
    #[error("{role} hand-off failed: {source}")]
    Handoff {
        role: Role,
        #[source]
        source: HandoffError,
    },

    /// The ingredient source produced something that is not a valid order.
    #[error("{role} could not place an order: {source}")]
    InvalidOrder {
        role: Role,
        #[source]
        source: ModelError,
    },
}

impl ActorError {
    /// Adapter for `map_err` on hand-off results.
    pub fn handoff(role: Role) -> impl FnOnce(HandoffError) -> Self {
        move |source| ActorError::Handoff { role, source }
    }

    pub fn role(&self) -> Role {
        match self {
            ActorError::Handoff { role, .. } | ActorError::InvalidOrder { role, .. } => *role,
        }
    }

    /// `true` when the actor only failed because another actor's failure closed the board.
    pub fn is_cascade(&self) -> bool {
        matches!(self, ActorError::Handoff { source, .. } if source.is_cascade())
    }
}
