//! Pure data structures flowing through the kitchen, plus the kitchen's hand-off protocol.

pub mod error;
pub mod ingredient;
pub mod meal;
pub mod order;
pub mod role;
pub mod stage;

pub use error::*;
pub use ingredient::*;
pub use meal::*;
pub use order::*;
pub use role::*;
pub use stage::*;
