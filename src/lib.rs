//! # Kitchen Pipeline
//!
//! > **Four actors, one order, strict hand-offs.**
//!
//! A customer picks ingredients and places an order. The waiter relays it, the cook
//! prepares each ingredient, the chef cooks the meal, the waiter brings it back and the
//! customer eats it. Every actor is its own tokio task, and every hand-off is guarded by
//! a single shared state machine from the [`handoff`] crate.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One Board, Named Stages
//! There is exactly one place that knows the order of the protocol:
//! [`KitchenProtocol`](model::KitchenProtocol). Actors wait for a named
//! [`Stage`](model::Stage) and fire a [`Signal`](model::Signal); the board rejects
//! anything out of order. The cook and the chef wait for different stages even though
//! both read the same order channel.
//!
//! ### No Lost Wake-ups
//! Waits are predicate-checked. An actor that starts waiting after its stage has already
//! been reached returns at once, and a missing signal ends in a timeout (or stays parked,
//! if the policy says so) instead of a silent hang.
//!
//! ### Cancellation
//! If any actor fails, the orchestrator closes the board. Every parked actor wakes with a
//! `Closed` error and the whole traversal is joined before the error is returned.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Ingredients, orders, meals, roles and the stage machine.
//!
//! ### 2. The Actors ([`actors`])
//! [`Customer`](actors::Customer), [`Waiter`](actors::Waiter), [`Cook`](actors::Cook)
//! and [`Chef`](actors::Chef), all implementing [`StageActor`](actors::StageActor), plus
//! the shared [`Pass`](actors::Pass).
//!
//! ### 3. The Seams ([`collaborators`])
//! Where randomness, time and narration come from. Swap them to make runs deterministic.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`Kitchen`](lifecycle::Kitchen) wires everything together and runs traversals;
//! [`KitchenConfig`](lifecycle::KitchenConfig) reads the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # One order with the reference timings
//! cargo run
//!
//! # Three fast, reproducible orders
//! KITCHEN_TIME_UNIT_MS=50 KITCHEN_ROUNDS=3 KITCHEN_SEED=7 cargo run
//!
//! # Watch the board
//! RUST_LOG=debug KITCHEN_SCRIPT=3,7,1 cargo run
//! ```

pub mod actors;
pub mod collaborators;
pub mod lifecycle;
pub mod model;
