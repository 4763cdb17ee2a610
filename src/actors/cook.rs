//! # Cook
//!
//! Waits for the waiter's `OrderTaken`, reads the order in place and preps each
//! ingredient in sequence, one unit of work per ingredient. Each finished ingredient is
//! reported as progress on the board, so a long order never looks like a stall to the
//! actors waiting downstream. The order stays on the channel for the chef, who is
//! responsible for removing it.

use super::{ActorError, StageActor, StageContext};
use crate::collaborators::{KitchenEvent, Task};
use crate::model::{Role, Signal, Stage};
use async_trait::async_trait;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, Default)]
pub struct Cook;

impl Cook {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StageActor for Cook {
    /// Number of ingredients prepped.
    type Output = usize;

    fn role(&self) -> Role {
        Role::Cook
    }

    #[instrument(name = "cook", skip_all)]
    async fn run(self, ctx: StageContext) -> Result<usize, ActorError> {
        let role = self.role();
        ctx.await_stage(role, Stage::OrderAcked).await?;
        let order = ctx.pass.orders.peek().map_err(ActorError::handoff(role))?;

        ctx.narrate(role, KitchenEvent::PreparingIngredients);
        for ingredient in order.ingredients() {
            ctx.narrate(
                role,
                KitchenEvent::PreparingIngredient {
                    ingredient: *ingredient,
                },
            );
            ctx.work.simulate(Task::PrepIngredient(*ingredient)).await;
            ctx.pass.board.touch();
        }
        ctx.narrate(role, KitchenEvent::IngredientsReady);

        ctx.signal(role, Signal::IngredientsReady)?;
        info!(prepped = order.len(), "Ingredients ready");
        Ok(order.len())
    }
}
