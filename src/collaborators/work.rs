//! # Work Simulation
//!
//! Every task in the kitchen takes a number of abstract time units. A
//! [`WorkSimulator`] turns those units into an actual delay (or none at all).
//! Actors never hold a slot's lock while simulating work.

use crate::model::Ingredient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

/// A unit of simulated work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    ChooseIngredients,
    RelayOrder,
    PrepIngredient(Ingredient),
    Cook,
    Deliver,
}

/// Time units per task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDurations {
    pub choose: u32,
    pub relay: u32,
    /// Per ingredient, not per order.
    pub prep: u32,
    pub cook: u32,
    pub deliver: u32,
}

impl WorkDurations {
    pub fn units(&self, task: Task) -> u32 {
        match task {
            Task::ChooseIngredients => self.choose,
            Task::RelayOrder => self.relay,
            Task::PrepIngredient(_) => self.prep,
            Task::Cook => self.cook,
            Task::Deliver => self.deliver,
        }
    }
}

impl Default for WorkDurations {
    fn default() -> Self {
        Self {
            choose: 2,
            relay: 2,
            prep: 2,
            cook: 3,
            deliver: 2,
        }
    }
}

/// Performs (or pretends to perform) a task.
#[async_trait]
pub trait WorkSimulator: Send + Sync {
    async fn simulate(&self, task: Task);
}

/// Sleeps `units × unit` for every task.
#[derive(Debug, Clone)]
pub struct SleepSimulator {
    unit: Duration,
    durations: WorkDurations,
}

impl SleepSimulator {
    pub fn new(unit: Duration, durations: WorkDurations) -> Self {
        Self { unit, durations }
    }

    pub fn duration_of(&self, task: Task) -> Duration {
        self.unit * self.durations.units(task)
    }
}

#[async_trait]
impl WorkSimulator for SleepSimulator {
    async fn simulate(&self, task: Task) {
        let delay = self.duration_of(task);
        trace!(?task, ?delay, "Working");
        tokio::time::sleep(delay).await;
    }
}

/// Finishes every task instantly, only yielding to the scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl WorkSimulator for NoDelay {
    async fn simulate(&self, _task: Task) {
        tokio::task::yield_now().await;
    }
}
