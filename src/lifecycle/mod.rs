//! # Lifecycle
//!
//! Everything needed to run the kitchen as a program:
//!
//! - [`KitchenConfig`]: defaults plus environment overrides
//! - [`Kitchen`]: wires the pass and collaborators, runs traversals, shuts down
//! - [`setup_tracing`]: the subscriber used by the binary

pub mod config;
pub mod error;
pub mod kitchen;
pub mod tracing;

pub use config::KitchenConfig;
pub use error::KitchenError;
pub use kitchen::{Kitchen, KitchenBuilder, ServiceReport};
pub use self::tracing::setup_tracing;
