//! # Stage Actors
//!
//! The four actors of the kitchen, each one an independently scheduled tokio task:
//!
//! | Actor | Waits for | Reads | Fires |
//! |-------|-----------|-------|-------|
//! | [`Customer`] | - / `MealDelivered` | takes the meal | `OrderAvailable`, `MealConsumed` |
//! | [`Waiter`] | `OrderPublished` / `MealPublished` | checks both channels | `OrderTaken`, `MealTaken` |
//! | [`Cook`] | `OrderAcked` | peeks the order | `IngredientsReady` |
//! | [`Chef`] | `IngredientsPrepped` | takes the order | `MealPrepared` |
//!
//! ## Context Injection
//!
//! Actors are constructed with only their own configuration. Everything shared (the
//! [`Pass`], the work simulator, the observer and the wait policy) arrives in a
//! [`StageContext`] when the orchestrator calls [`StageActor::run`]. This keeps the
//! actors free of global state and lets tests run a single actor against a hand-built
//! pass.

pub mod chef;
pub mod cook;
pub mod customer;
pub mod error;
pub mod waiter;

pub use chef::*;
pub use cook::*;
pub use customer::*;
pub use error::*;
pub use waiter::*;

use crate::collaborators::{KitchenEvent, Observer, WorkSimulator};
use crate::model::{KitchenProtocol, Meal, Order, Role, Signal, Stage};
use async_trait::async_trait;
use handoff::{HandoffError, HandoffSlot, SignalListener, StageBoard, WaitPolicy};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, warn};

pub type OrderChannel = HandoffSlot<Order>;
pub type MealChannel = HandoffSlot<Meal>;
pub type KitchenBoard = StageBoard<KitchenProtocol>;

/// The hand-off point shared by all actors: the board and both channels.
#[derive(Debug)]
pub struct Pass {
    pub board: KitchenBoard,
    pub orders: OrderChannel,
    pub meals: MealChannel,
}

impl Pass {
    pub fn new() -> Self {
        Self::with_board(KitchenBoard::new())
    }

    /// A pass whose board reports every accepted signal to `listener`.
    pub fn with_listener(listener: Arc<dyn SignalListener<KitchenProtocol>>) -> Self {
        Self::with_board(KitchenBoard::with_listener(listener))
    }

    fn with_board(board: KitchenBoard) -> Self {
        Self {
            board,
            orders: OrderChannel::new("orders"),
            meals: MealChannel::new("meals"),
        }
    }

    /// Prepares the pass for the next traversal.
    ///
    /// # Errors
    /// Fails if an order is still in flight, an item was left behind, or the board
    /// has been closed.
    pub fn reset(&self) -> Result<(), HandoffError> {
        if !self.orders.is_empty() {
            return Err(HandoffError::Occupied {
                slot: self.orders.name(),
            });
        }
        if !self.meals.is_empty() {
            return Err(HandoffError::Occupied {
                slot: self.meals.name(),
            });
        }
        self.board.reset()
    }

    /// Closes the board and drops anything still sitting in the channels.
    pub fn abandon(&self) {
        self.board.close();
        let order = self.orders.clear();
        let meal = self.meals.clear();
        if order.is_some() || meal.is_some() {
            warn!(?order, ?meal, "Abandoned items on the pass");
        }
    }
}

impl Default for Pass {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared dependencies injected into every actor at run time.
#[derive(Clone)]
pub struct StageContext {
    pub pass: Arc<Pass>,
    pub work: Arc<dyn WorkSimulator>,
    pub observer: Arc<dyn Observer>,
    pub policy: WaitPolicy,
}

impl StageContext {
    pub fn new(
        pass: Arc<Pass>,
        work: Arc<dyn WorkSimulator>,
        observer: Arc<dyn Observer>,
        policy: WaitPolicy,
    ) -> Self {
        Self {
            pass,
            work,
            observer,
            policy,
        }
    }

    fn narrate(&self, role: Role, event: KitchenEvent) {
        self.observer.notify(role, &event);
    }

    /// Predicate-checked wait for `stage` under the context's policy.
    async fn await_stage(&self, role: Role, stage: Stage) -> Result<(), ActorError> {
        debug!(%role, %stage, "Waiting");
        self.pass
            .board
            .wait_for(stage, self.policy)
            .await
            .map_err(|source| {
                warn!(%role, %stage, error = %source, "Wait failed");
                ActorError::Handoff { role, source }
            })
    }

    fn signal(&self, role: Role, signal: Signal) -> Result<Stage, ActorError> {
        self.pass
            .board
            .advance(signal)
            .map_err(ActorError::handoff(role))
    }

    /// Re-checks that the channel gating a stage actually holds its item.
    fn ensure_present<T>(&self, role: Role, slot: &HandoffSlot<T>) -> Result<(), ActorError> {
        if slot.is_empty() {
            return Err(ActorError::Handoff {
                role,
                source: HandoffError::Empty { slot: slot.name() },
            });
        }
        Ok(())
    }
}

/// One stage of the kitchen.
///
/// `run` consumes the actor: every actor takes part in exactly one traversal.
#[async_trait]
pub trait StageActor: Send + Sized + 'static {
    /// What the actor hands back to the orchestrator on success.
    type Output: Send + Debug + 'static;

    fn role(&self) -> Role;

    async fn run(self, ctx: StageContext) -> Result<Self::Output, ActorError>;
}
