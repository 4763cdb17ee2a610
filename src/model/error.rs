//! Error types for the kitchen's data model.

use thiserror::Error;

/// Errors raised while building orders and ingredients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An order must name at least one ingredient.
    #[error("Order has no ingredients")]
    EmptyOrder,

    /// The ingredient identifier is outside the pantry's range.
    #[error("Ingredient {id} is outside the pantry range 0..={max}")]
    IngredientOutOfRange { id: u8, max: u8 },
}
