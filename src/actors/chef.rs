//! # Chef
//!
//! Waits for the cook's `IngredientsReady`, removes the order from its channel,
//! cooks it in one composite step and publishes the resulting meal.

use super::{ActorError, StageActor, StageContext};
use crate::collaborators::{KitchenEvent, Task};
use crate::model::{Meal, Role, Signal, Stage};
use async_trait::async_trait;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, Default)]
pub struct Chef;

impl Chef {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StageActor for Chef {
    /// The meal as published.
    type Output = Meal;

    fn role(&self) -> Role {
        Role::Chef
    }

    #[instrument(name = "chef", skip_all)]
    async fn run(self, ctx: StageContext) -> Result<Meal, ActorError> {
        let role = self.role();
        ctx.await_stage(role, Stage::IngredientsPrepped).await?;
        let order = ctx.pass.orders.take().map_err(ActorError::handoff(role))?;

        ctx.narrate(role, KitchenEvent::CookingStarted);
        ctx.work.simulate(Task::Cook).await;
        let meal = Meal::from_order(&order);

        ctx.pass
            .meals
            .publish(meal.clone())
            .map_err(ActorError::handoff(role))?;
        ctx.narrate(role, KitchenEvent::MealCooked { meal: meal.clone() });
        ctx.signal(role, Signal::MealPrepared)?;

        info!(%order, %meal, "Meal published");
        Ok(meal)
    }
}
