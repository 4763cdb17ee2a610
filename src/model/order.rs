use crate::model::{Ingredient, ModelError};
use serde::Serialize;
use std::fmt::Display;

/// An ordered list of ingredients chosen by the customer.
///
/// Created by the customer, read in place by the cook and removed by the chef.
/// The sequence is never empty and never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    ingredients: Vec<Ingredient>,
}

impl Order {
    /// Creates a new Order.
    ///
    /// # Errors
    /// Returns [`ModelError::EmptyOrder`] if `ingredients` is empty.
    pub fn new(ingredients: Vec<Ingredient>) -> Result<Self, ModelError> {
        if ingredients.is_empty() {
            return Err(ModelError::EmptyOrder);
        }
        Ok(Self { ingredients })
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl TryFrom<Vec<u8>> for Order {
    type Error = ModelError;

    fn try_from(ids: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(ids.into_iter().map(Ingredient).collect())
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<String> = self.ingredients.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", ids.join(" "))
    }
}
