//! # Waiter
//!
//! The only actor with two turns per traversal.
//!
//! - **Phase A**: wait for `OrderPublished`, relay the order, fire `OrderTaken`.
//! - **Phase B**: wait for `MealPublished`, deliver the meal, fire `MealTaken`.
//!
//! The waiter never touches the items themselves; it only confirms they are there.
//! No lock is held between the phases: each check takes and releases one slot's
//! lock on its own.

use super::{ActorError, StageActor, StageContext};
use crate::collaborators::{KitchenEvent, Task};
use crate::model::{Role, Signal, Stage};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, Default)]
pub struct Waiter;

impl Waiter {
    pub fn new() -> Self {
        Self
    }

    async fn take_order(&self, ctx: &StageContext) -> Result<(), ActorError> {
        let role = self.role();
        ctx.await_stage(role, Stage::OrderPublished).await?;
        ctx.ensure_present(role, &ctx.pass.orders)?;

        ctx.narrate(role, KitchenEvent::OrderReceived);
        ctx.work.simulate(Task::RelayOrder).await;
        ctx.narrate(role, KitchenEvent::OrderRelayed);
        ctx.signal(role, Signal::OrderTaken)?;
        Ok(())
    }

    async fn deliver_meal(&self, ctx: &StageContext) -> Result<(), ActorError> {
        let role = self.role();
        ctx.await_stage(role, Stage::MealPublished).await?;
        ctx.ensure_present(role, &ctx.pass.meals)?;

        ctx.narrate(role, KitchenEvent::MealPickedUp);
        ctx.work.simulate(Task::Deliver).await;
        ctx.narrate(role, KitchenEvent::MealDelivered);
        ctx.signal(role, Signal::MealTaken)?;
        Ok(())
    }
}

#[async_trait]
impl StageActor for Waiter {
    type Output = ();

    fn role(&self) -> Role {
        Role::Waiter
    }

    #[instrument(name = "waiter", skip_all)]
    async fn run(self, ctx: StageContext) -> Result<(), ActorError> {
        self.take_order(&ctx).await?;
        debug!("Order relayed, waiting for the meal");
        self.deliver_meal(&ctx).await
    }
}
