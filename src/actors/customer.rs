//! # Customer
//!
//! Starts and ends every traversal. The customer picks ingredients, publishes the
//! order, fires `OrderAvailable`, then parks until the waiter has delivered the meal.
//! It is the only actor whose output is the transaction itself.

use super::{ActorError, StageActor, StageContext};
use crate::collaborators::{IngredientSource, KitchenEvent, Task};
use crate::model::{Meal, Order, Role, Signal, Stage};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

/// What the customer walked away with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerReceipt {
    pub order: Order,
    pub meal: Meal,
}

pub struct Customer {
    source: Arc<dyn IngredientSource>,
    order_size: usize,
}

impl Customer {
    pub fn new(source: Arc<dyn IngredientSource>, order_size: usize) -> Self {
        Self { source, order_size }
    }
}

#[async_trait]
impl StageActor for Customer {
    type Output = CustomerReceipt;

    fn role(&self) -> Role {
        Role::Customer
    }

    #[instrument(name = "customer", skip_all)]
    async fn run(self, ctx: StageContext) -> Result<CustomerReceipt, ActorError> {
        let role = self.role();

        ctx.narrate(role, KitchenEvent::ChoosingIngredients);
        ctx.work.simulate(Task::ChooseIngredients).await;
        let order = Order::new(self.source.draw(self.order_size))
            .map_err(|source| ActorError::InvalidOrder { role, source })?;
        ctx.narrate(
            role,
            KitchenEvent::IngredientsChosen {
                order: order.clone(),
            },
        );

        ctx.narrate(role, KitchenEvent::OrderPlaced);
        ctx.pass
            .orders
            .publish(order.clone())
            .map_err(ActorError::handoff(role))?;
        ctx.signal(role, Signal::OrderAvailable)?;

        ctx.await_stage(role, Stage::MealDelivered).await?;
        let meal = ctx.pass.meals.take().map_err(ActorError::handoff(role))?;
        ctx.signal(role, Signal::MealConsumed)?;
        ctx.narrate(role, KitchenEvent::MealReceived { meal: meal.clone() });

        info!(%order, %meal, "Transaction complete");
        Ok(CustomerReceipt { order, meal })
    }
}
