use crate::model::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a selectable ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ingredient(pub u8);

impl From<u8> for Ingredient {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The bounded set of ingredients a customer may pick from: `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pantry {
    pub max: u8,
}

impl Pantry {
    pub fn new(max: u8) -> Self {
        Self { max }
    }

    /// Looks up an ingredient by identifier.
    ///
    /// # Errors
    /// Returns [`ModelError::IngredientOutOfRange`] for identifiers above `max`.
    pub fn ingredient(&self, id: u8) -> Result<Ingredient, ModelError> {
        if id > self.max {
            return Err(ModelError::IngredientOutOfRange { id, max: self.max });
        }
        Ok(Ingredient(id))
    }

    pub fn contains(&self, ingredient: Ingredient) -> bool {
        ingredient.0 <= self.max
    }
}

impl Default for Pantry {
    fn default() -> Self {
        Self::new(9)
    }
}
