//! External collaborators the actors call but do not own.
//!
//! - [`IngredientSource`] - where a customer's picks come from.
//! - [`WorkSimulator`] - stands in for the time a task takes.
//! - [`Observer`] - receives narration events. Purely advisory: nothing here ever
//!   gates the protocol.

pub mod ingredients;
pub mod observer;
pub mod work;

pub use ingredients::*;
pub use observer::*;
pub use work::*;
