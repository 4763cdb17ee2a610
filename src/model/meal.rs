use crate::model::Order;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The dish the chef sends out.
///
/// Its name is derived from the order alone: the ingredient identifiers concatenated
/// in order, so `[3, 7, 1]` always becomes `"371"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meal {
    name: String,
}

impl Meal {
    pub fn from_order(order: &Order) -> Self {
        let name = order.ingredients().iter().map(ToString::to_string).collect();
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
