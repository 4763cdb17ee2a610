use crate::actors::{
    ActorError, Chef, Cook, Customer, CustomerReceipt, Pass, StageActor, StageContext, Waiter,
};
use crate::collaborators::{
    IngredientSource, Observer, RandomIngredients, ScriptedIngredients, SleepSimulator,
    TracingObserver, WorkSimulator,
};
use crate::lifecycle::{KitchenConfig, KitchenError};
use crate::model::{KitchenProtocol, Meal, Order, Role};
use handoff::SignalListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, info_span, warn, Instrument};

/// The outcome of one completed traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReport {
    /// 1-based count of traversals served by this kitchen.
    pub round: usize,
    pub order: Order,
    /// The meal the customer consumed.
    pub meal: Meal,
    /// Ingredients the cook prepared.
    pub prepped: usize,
    /// The meal the chef published.
    pub published: Meal,
}

/// The runtime orchestrator for the kitchen.
///
/// `Kitchen` is responsible for:
/// - **Wiring**: building the shared [`Pass`] and injecting it, together with the
///   collaborators, into every actor through a [`StageContext`]
/// - **Structured concurrency**: all four actors of a traversal run in one `JoinSet`
///   and are joined before [`serve_order`](Kitchen::serve_order) returns
/// - **Cancellation**: the first failure closes the board, aborts the remaining actors
///   and is reported as the traversal's error
///
/// # Example
///
/// ```ignore
/// let kitchen = Kitchen::new(KitchenConfig::from_env()?)?;
/// let report = kitchen.serve_order().await?;
/// println!("{} became {}", report.order, report.meal);
/// kitchen.shutdown();
/// ```
pub struct Kitchen {
    config: KitchenConfig,
    pass: Arc<Pass>,
    source: Arc<dyn IngredientSource>,
    work: Arc<dyn WorkSimulator>,
    observer: Arc<dyn Observer>,
    served: AtomicUsize,
}

/// What each actor hands back, tagged by who returned it.
#[derive(Debug)]
enum StageOutcome {
    Customer(CustomerReceipt),
    Waiter,
    Cook(usize),
    Chef(Meal),
}

#[derive(Default)]
struct Outcomes {
    receipt: Option<CustomerReceipt>,
    waiter_done: bool,
    prepped: Option<usize>,
    published: Option<Meal>,
}

impl Outcomes {
    fn record(&mut self, outcome: StageOutcome) {
        match outcome {
            StageOutcome::Customer(receipt) => self.receipt = Some(receipt),
            StageOutcome::Waiter => self.waiter_done = true,
            StageOutcome::Cook(prepped) => self.prepped = Some(prepped),
            StageOutcome::Chef(meal) => self.published = Some(meal),
        }
    }

    fn into_report(self, round: usize) -> Result<ServiceReport, KitchenError> {
        let missing = |role: Role| KitchenError::Join(format!("{role} did not report"));
        let receipt = self.receipt.ok_or_else(|| missing(Role::Customer))?;
        if !self.waiter_done {
            return Err(missing(Role::Waiter));
        }
        let prepped = self.prepped.ok_or_else(|| missing(Role::Cook))?;
        let published = self.published.ok_or_else(|| missing(Role::Chef))?;
        Ok(ServiceReport {
            round,
            order: receipt.order,
            meal: receipt.meal,
            prepped,
            published,
        })
    }
}

type Crew = JoinSet<(Role, Result<StageOutcome, ActorError>)>;

fn spawn_stage<A: StageActor>(
    crew: &mut Crew,
    actor: A,
    ctx: StageContext,
    tag: fn(A::Output) -> StageOutcome,
) {
    let role = actor.role();
    crew.spawn(async move { (role, actor.run(ctx).await.map(tag)) });
}

impl Kitchen {
    /// Builds a kitchen with the default collaborators for `config`.
    pub fn new(config: KitchenConfig) -> Result<Self, KitchenError> {
        KitchenBuilder::new(config).build()
    }

    pub fn builder(config: KitchenConfig) -> KitchenBuilder {
        KitchenBuilder::new(config)
    }

    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    pub fn pass(&self) -> &Arc<Pass> {
        &self.pass
    }

    /// Traversals completed so far.
    pub fn served(&self) -> usize {
        self.served.load(Ordering::SeqCst)
    }

    /// Runs one full traversal: customer, waiter, cook, chef, waiter, customer.
    ///
    /// The four actors are spawned together and all of them are joined before this
    /// returns. On failure the pass is abandoned and must not be reused.
    pub async fn serve_order(&self) -> Result<ServiceReport, KitchenError> {
        self.pass.reset()?;

        let ctx = StageContext::new(
            self.pass.clone(),
            self.work.clone(),
            self.observer.clone(),
            self.config.wait_policy(),
        );

        let mut crew = Crew::new();
        spawn_stage(
            &mut crew,
            Customer::new(self.source.clone(), self.config.order_size),
            ctx.clone(),
            StageOutcome::Customer,
        );
        spawn_stage(&mut crew, Waiter::new(), ctx.clone(), |()| {
            StageOutcome::Waiter
        });
        spawn_stage(&mut crew, Cook::new(), ctx.clone(), StageOutcome::Cook);
        spawn_stage(&mut crew, Chef::new(), ctx, StageOutcome::Chef);

        let mut outcomes = Outcomes::default();
        let mut failure: Option<KitchenError> = None;

        while let Some(joined) = crew.join_next().await {
            let err = match joined {
                Ok((_, Ok(outcome))) => {
                    outcomes.record(outcome);
                    continue;
                }
                Ok((role, Err(e))) => {
                    warn!(%role, error = %e, "Actor failed");
                    KitchenError::Actor(e)
                }
                Err(e) if e.is_cancelled() => continue,
                Err(e) => {
                    error!(error = %e, "Actor task panicked");
                    KitchenError::Join(e.to_string())
                }
            };

            failure = match failure {
                None => {
                    self.pass.abandon();
                    crew.abort_all();
                    Some(err)
                }
                // Keep the root cause over errors caused by the close.
                Some(first) if first.is_cascade() && !err.is_cascade() => Some(err),
                Some(first) => Some(first),
            };
        }

        if let Some(err) = failure {
            return Err(err);
        }

        let report = self.complete_round(outcomes)?;
        info!(
            round = report.round,
            order = %report.order,
            meal = %report.meal,
            "Order served"
        );
        Ok(report)
    }

    /// Turns a clean traversal into its report. Only a report counts as served.
    fn complete_round(&self, outcomes: Outcomes) -> Result<ServiceReport, KitchenError> {
        let report = outcomes.into_report(self.served() + 1)?;
        self.served.fetch_add(1, Ordering::SeqCst);
        Ok(report)
    }

    /// Runs `rounds` traversals back to back, stopping at the first failure.
    pub async fn serve(&self, rounds: usize) -> Result<Vec<ServiceReport>, KitchenError> {
        let mut reports = Vec::with_capacity(rounds);
        for round in 1..=rounds {
            let report = self
                .serve_order()
                .instrument(info_span!("round", round))
                .await?;
            reports.push(report);
        }
        Ok(reports)
    }

    /// Closes the board. Nothing can be served afterwards.
    pub fn shutdown(self) {
        info!(served = self.served(), "Closing kitchen");
        self.pass.abandon();
    }
}

/// Assembles a [`Kitchen`], replacing any of its default collaborators.
pub struct KitchenBuilder {
    config: KitchenConfig,
    source: Option<Arc<dyn IngredientSource>>,
    work: Option<Arc<dyn WorkSimulator>>,
    observer: Option<Arc<dyn Observer>>,
    listener: Option<Arc<dyn SignalListener<KitchenProtocol>>>,
}

impl KitchenBuilder {
    pub fn new(config: KitchenConfig) -> Self {
        Self {
            config,
            source: None,
            work: None,
            observer: None,
            listener: None,
        }
    }

    pub fn ingredients(mut self, source: Arc<dyn IngredientSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn work(mut self, work: Arc<dyn WorkSimulator>) -> Self {
        self.work = Some(work);
        self
    }

    pub fn observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Reports every accepted signal on the board to `listener`.
    pub fn signal_listener(mut self, listener: Arc<dyn SignalListener<KitchenProtocol>>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn build(self) -> Result<Kitchen, KitchenError> {
        let config = self.config;
        config.validate()?;

        let source: Arc<dyn IngredientSource> = match (self.source, &config.script, config.seed) {
            (Some(source), _, _) => source,
            (None, Some(script), _) => Arc::new(
                ScriptedIngredients::within(config.pantry(), script)
                    .map_err(|e| KitchenError::Config(e.to_string()))?,
            ),
            (None, None, Some(seed)) => Arc::new(RandomIngredients::seeded(config.pantry(), seed)),
            (None, None, None) => Arc::new(RandomIngredients::new(config.pantry())),
        };
        let work: Arc<dyn WorkSimulator> = match self.work {
            Some(work) => work,
            None => Arc::new(SleepSimulator::new(config.time_unit(), config.durations)),
        };
        let observer: Arc<dyn Observer> = match self.observer {
            Some(observer) => observer,
            None => Arc::new(TracingObserver),
        };
        let pass = match self.listener {
            Some(listener) => Pass::with_listener(listener),
            None => Pass::new(),
        };

        Ok(Kitchen {
            config,
            pass: Arc::new(pass),
            source,
            work,
            observer,
            served: AtomicUsize::new(0),
        })
    }
}
