//! # Kitchen Protocol
//!
//! The kitchen's hand-off sequence written as one transition table.
//!
//! ```text
//! Empty --OrderAvailable--> OrderPublished --OrderTaken--> OrderAcked
//!       --IngredientsReady--> IngredientsPrepped --MealPrepared--> MealPublished
//!       --MealTaken--> MealDelivered --MealConsumed--> MealConsumed
//! ```
//!
//! The cook waits for `OrderAcked` and the chef for `IngredientsPrepped`. Both read the
//! same order channel, but they no longer share a "channel is non-empty" condition:
//! each has its own named stage.

use crate::model::Role;
use handoff::{Protocol, Transition};
use serde::Serialize;
use std::fmt::Display;

/// State of the shared board during one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stage {
    Empty,
    OrderPublished,
    OrderAcked,
    IngredientsPrepped,
    MealPublished,
    MealDelivered,
    MealConsumed,
}

/// The six signals of a traversal, in firing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Signal {
    OrderAvailable,
    OrderTaken,
    IngredientsReady,
    MealPrepared,
    MealTaken,
    MealConsumed,
}

impl Signal {
    pub const SEQUENCE: [Signal; 6] = [
        Signal::OrderAvailable,
        Signal::OrderTaken,
        Signal::IngredientsReady,
        Signal::MealPrepared,
        Signal::MealTaken,
        Signal::MealConsumed,
    ];

    /// The actor allowed to fire this signal.
    pub fn fired_by(&self) -> Role {
        match self {
            Signal::OrderAvailable | Signal::MealConsumed => Role::Customer,
            Signal::OrderTaken | Signal::MealTaken => Role::Waiter,
            Signal::IngredientsReady => Role::Cook,
            Signal::MealPrepared => Role::Chef,
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Empty => "EMPTY",
            Stage::OrderPublished => "ORDER_PUBLISHED",
            Stage::OrderAcked => "ORDER_ACKED_BY_WAITER",
            Stage::IngredientsPrepped => "INGREDIENTS_PREPPED",
            Stage::MealPublished => "ORDER_CONSUMED_MEAL_PUBLISHED",
            Stage::MealDelivered => "MEAL_DELIVERED",
            Stage::MealConsumed => "MEAL_CONSUMED",
        };
        f.write_str(name)
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Signal::OrderAvailable => "order available",
            Signal::OrderTaken => "order taken",
            Signal::IngredientsReady => "ingredients ready",
            Signal::MealPrepared => "meal prepared",
            Signal::MealTaken => "meal taken",
            Signal::MealConsumed => "meal consumed",
        };
        f.write_str(name)
    }
}

/// Marker type binding [`Stage`] and [`Signal`] into a [`Protocol`].
#[derive(Debug, Clone, Copy)]
pub struct KitchenProtocol;

impl Protocol for KitchenProtocol {
    type Stage = Stage;
    type Signal = Signal;

    fn initial() -> Stage {
        Stage::Empty
    }

    fn is_terminal(stage: Stage) -> bool {
        stage == Stage::MealConsumed
    }

    fn transition(signal: Signal) -> Transition<Stage> {
        match signal {
            Signal::OrderAvailable => Transition::new(Stage::Empty, Stage::OrderPublished),
            Signal::OrderTaken => Transition::new(Stage::OrderPublished, Stage::OrderAcked),
            Signal::IngredientsReady => {
                Transition::new(Stage::OrderAcked, Stage::IngredientsPrepped)
            }
            Signal::MealPrepared => Transition::new(Stage::IngredientsPrepped, Stage::MealPublished),
            Signal::MealTaken => Transition::new(Stage::MealPublished, Stage::MealDelivered),
            Signal::MealConsumed => Transition::new(Stage::MealDelivered, Stage::MealConsumed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_chains_from_empty_to_consumed() {
        let mut stage = KitchenProtocol::initial();
        for signal in Signal::SEQUENCE {
            let edge = KitchenProtocol::transition(signal);
            assert_eq!(edge.from, stage, "{signal} does not continue from {stage}");
            assert!(edge.to > edge.from);
            stage = edge.to;
        }
        assert!(KitchenProtocol::is_terminal(stage));
    }

    #[test]
    fn cook_and_chef_gates_are_distinct() {
        let cook_gate = KitchenProtocol::transition(Signal::OrderTaken).to;
        let chef_gate = KitchenProtocol::transition(Signal::IngredientsReady).to;
        assert_ne!(cook_gate, chef_gate);
    }
}
