//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing` subscriber for the binary.
//!
//! ## What Gets Traced
//!
//! - **Narration** (`info`): every [`KitchenEvent`](crate::collaborators::KitchenEvent),
//!   tagged with the role that produced it.
//! - **Transactions** (`info`): the customer's completed order and the chef's published meal.
//! - **Protocol** (`debug`): every signal with its from/to stages, every wait and every
//!   slot publish/take.
//! - **Failures** (`warn`): failed waits, rejected signals and aborted traversals.
//!
//! ## Usage
//!
//! ```bash
//! # Narration only (default)
//! cargo run
//!
//! # Narration plus the board's signals
//! RUST_LOG=debug cargo run
//!
//! # Only the hand-off machinery
//! RUST_LOG=handoff=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes structured logging, filtered by `RUST_LOG` (default `info`).
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
