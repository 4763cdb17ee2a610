//! # Ingredient Sources
//!
//! A customer asks its [`IngredientSource`] for `count` picks and turns them into an
//! order. Sources produce identifiers inside their pantry by construction, so nothing
//! downstream re-validates them.

use crate::model::{Ingredient, ModelError, Pantry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Supplies ingredient picks for new orders.
pub trait IngredientSource: Send + Sync {
    fn draw(&self, count: usize) -> Vec<Ingredient>;
}

/// Uniform picks with replacement over the whole pantry.
#[derive(Debug)]
pub struct RandomIngredients {
    pantry: Pantry,
    rng: Mutex<StdRng>,
}

impl RandomIngredients {
    pub fn new(pantry: Pantry) -> Self {
        Self {
            pantry,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A reproducible source: the same seed always yields the same picks.
    pub fn seeded(pantry: Pantry, seed: u64) -> Self {
        Self {
            pantry,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IngredientSource for RandomIngredients {
    fn draw(&self, count: usize) -> Vec<Ingredient> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        (0..count)
            .map(|_| Ingredient(rng.gen_range(0..=self.pantry.max)))
            .collect()
    }
}

/// Replays a fixed list of picks, cycling when more are requested than scripted.
#[derive(Debug, Clone)]
pub struct ScriptedIngredients {
    picks: Vec<Ingredient>,
}

impl ScriptedIngredients {
    pub fn new<I>(picks: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<Ingredient>,
    {
        Self {
            picks: picks.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a script after checking every pick against the pantry.
    ///
    /// # Errors
    /// Returns [`ModelError::IngredientOutOfRange`] for the first pick outside the pantry.
    pub fn within(pantry: Pantry, ids: &[u8]) -> Result<Self, ModelError> {
        let picks = ids
            .iter()
            .map(|id| pantry.ingredient(*id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { picks })
    }

    pub fn picks(&self) -> &[Ingredient] {
        &self.picks
    }
}

impl IngredientSource for ScriptedIngredients {
    fn draw(&self, count: usize) -> Vec<Ingredient> {
        self.picks.iter().cycle().take(count).copied().collect()
    }
}
