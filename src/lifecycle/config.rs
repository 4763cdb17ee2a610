//! # Configuration
//!
//! [`KitchenConfig::default`] is the reference scenario: three ingredients drawn from
//! `0..=9`, one-second time units and a single traversal. Every field can be
//! overridden from the environment:
//!
//! | Variable | Field | Notes |
//! |----------|-------|-------|
//! | `KITCHEN_ORDER_SIZE` | `order_size` | at least 1 |
//! | `KITCHEN_INGREDIENT_MAX` | `ingredient_max` | pantry is `0..=max` |
//! | `KITCHEN_TIME_UNIT_MS` | `time_unit_ms` | length of one work unit |
//! | `KITCHEN_WAIT_TIMEOUT_MS` | `wait_timeout_ms` | longest stall without progress, `0` waits forever |
//! | `KITCHEN_ROUNDS` | `rounds` | sequential traversals, at least 1 |
//! | `KITCHEN_SEED` | `seed` | reproducible random picks |
//! | `KITCHEN_SCRIPT` | `script` | fixed picks, e.g. `3,7,1` |

use crate::collaborators::WorkDurations;
use crate::lifecycle::KitchenError;
use crate::model::Pantry;
use handoff::WaitPolicy;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

pub const ORDER_SIZE_VAR: &str = "KITCHEN_ORDER_SIZE";
pub const INGREDIENT_MAX_VAR: &str = "KITCHEN_INGREDIENT_MAX";
pub const TIME_UNIT_VAR: &str = "KITCHEN_TIME_UNIT_MS";
pub const WAIT_TIMEOUT_VAR: &str = "KITCHEN_WAIT_TIMEOUT_MS";
pub const ROUNDS_VAR: &str = "KITCHEN_ROUNDS";
pub const SEED_VAR: &str = "KITCHEN_SEED";
pub const SCRIPT_VAR: &str = "KITCHEN_SCRIPT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    pub order_size: usize,
    pub ingredient_max: u8,
    pub time_unit_ms: u64,
    /// Longest time the board may go without progress. `None` or `Some(0)` keeps every
    /// wait unbounded.
    pub wait_timeout_ms: Option<u64>,
    pub rounds: usize,
    pub seed: Option<u64>,
    /// Fixed ingredient picks, replayed instead of random draws.
    pub script: Option<Vec<u8>>,
    pub durations: WorkDurations,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            order_size: 3,
            ingredient_max: 9,
            time_unit_ms: 1000,
            wait_timeout_ms: Some(30_000),
            rounds: 1,
            seed: None,
            script: None,
            durations: WorkDurations::default(),
        }
    }
}

impl KitchenConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, KitchenError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, then validates the result.
    ///
    /// A script without an explicit order size sets the order size to the script's length.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, KitchenError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(SCRIPT_VAR) {
            let script = parse_script(&raw)?;
            config.order_size = script.len();
            config.script = Some(script);
        }
        if let Some(order_size) = parse(&lookup, ORDER_SIZE_VAR)? {
            config.order_size = order_size;
        }
        if let Some(ingredient_max) = parse(&lookup, INGREDIENT_MAX_VAR)? {
            config.ingredient_max = ingredient_max;
        }
        if let Some(time_unit_ms) = parse(&lookup, TIME_UNIT_VAR)? {
            config.time_unit_ms = time_unit_ms;
        }
        if let Some(wait_timeout_ms) = parse(&lookup, WAIT_TIMEOUT_VAR)? {
            config.wait_timeout_ms = Some(wait_timeout_ms);
        }
        if let Some(rounds) = parse(&lookup, ROUNDS_VAR)? {
            config.rounds = rounds;
        }
        if let Some(seed) = parse(&lookup, SEED_VAR)? {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), KitchenError> {
        if self.order_size == 0 {
            return Err(KitchenError::Config("order_size must be at least 1".into()));
        }
        if self.rounds == 0 {
            return Err(KitchenError::Config("rounds must be at least 1".into()));
        }
        if let Some(script) = &self.script {
            if script.is_empty() {
                return Err(KitchenError::Config("script names no ingredients".into()));
            }
            let pantry = self.pantry();
            for id in script {
                pantry
                    .ingredient(*id)
                    .map_err(|e| KitchenError::Config(e.to_string()))?;
            }
        }
        Ok(())
    }

    pub fn pantry(&self) -> Pantry {
        Pantry::new(self.ingredient_max)
    }

    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        WaitPolicy::from_limit(self.wait_timeout_ms.map(Duration::from_millis))
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, KitchenError>
where
    T: FromStr,
    T::Err: Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| KitchenError::Config(format!("{key}={raw:?}: {e}")))
        })
        .transpose()
}

fn parse_script(raw: &str) -> Result<Vec<u8>, KitchenError> {
    raw.split(',')
        .map(str::trim)
        .filter(|pick| !pick.is_empty())
        .map(|pick| {
            pick.parse::<u8>()
                .map_err(|e| KitchenError::Config(format!("{SCRIPT_VAR} pick {pick:?}: {e}")))
        })
        .collect()
}
