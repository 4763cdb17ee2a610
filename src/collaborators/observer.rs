//! # Narration
//!
//! Actors report what they are doing through an [`Observer`]. The default
//! [`TracingObserver`] turns each event into an `info` log line tagged with the role;
//! [`EventLog`] keeps them in memory so tests can assert on the narration.

use crate::model::{Ingredient, Meal, Order, Role};
use std::fmt::Display;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Something worth narrating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KitchenEvent {
    ChoosingIngredients,
    IngredientsChosen { order: Order },
    OrderPlaced,
    OrderReceived,
    OrderRelayed,
    PreparingIngredients,
    PreparingIngredient { ingredient: Ingredient },
    IngredientsReady,
    CookingStarted,
    MealCooked { meal: Meal },
    MealPickedUp,
    MealDelivered,
    MealReceived { meal: Meal },
}

impl Display for KitchenEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KitchenEvent::ChoosingIngredients => write!(f, "choosing ingredients..."),
            KitchenEvent::IngredientsChosen { order } => {
                write!(f, "done choosing, ingredients are {}", order)
            }
            KitchenEvent::OrderPlaced => write!(f, "giving order to the waiter"),
            KitchenEvent::OrderReceived => write!(f, "order taken, sending it to the cook"),
            KitchenEvent::OrderRelayed => write!(f, "order sent"),
            KitchenEvent::PreparingIngredients => write!(f, "preparing ingredients..."),
            KitchenEvent::PreparingIngredient { ingredient } => {
                write!(f, "preparing {}...", ingredient)
            }
            KitchenEvent::IngredientsReady => write!(f, "ingredients ready"),
            KitchenEvent::CookingStarted => write!(f, "ingredients received, starting to cook"),
            KitchenEvent::MealCooked { meal } => write!(f, "done cooking {}, sending meal", meal),
            KitchenEvent::MealPickedUp => write!(f, "meal ready, delivering it to the customer"),
            KitchenEvent::MealDelivered => write!(f, "meal delivered"),
            KitchenEvent::MealReceived { meal } => write!(f, "meal {} received, yum", meal),
        }
    }
}

/// Receives narration events from the actors.
pub trait Observer: Send + Sync {
    fn notify(&self, role: Role, event: &KitchenEvent);
}

/// Narrates through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn notify(&self, role: Role, event: &KitchenEvent) {
        info!(%role, "{}", event);
    }
}

/// Keeps every event in arrival order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<(Role, KitchenEvent)>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Role, KitchenEvent)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn by_role(&self, role: Role) -> Vec<KitchenEvent> {
        self.events()
            .into_iter()
            .filter(|(who, _)| *who == role)
            .map(|(_, event)| event)
            .collect()
    }
}

impl Observer for EventLog {
    fn notify(&self, role: Role, event: &KitchenEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((role, event.clone()));
    }
}
