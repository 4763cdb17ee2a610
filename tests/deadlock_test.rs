use async_trait::async_trait;
use handoff::{HandoffError, WaitPolicy};
use kitchen_pipeline::actors::{
    ActorError, Cook, Customer, Pass, StageActor, StageContext, Waiter,
};
use kitchen_pipeline::collaborators::{
    EventLog, IngredientSource, NoDelay, ScriptedIngredients, Task, WorkSimulator,
};
use kitchen_pipeline::lifecycle::{Kitchen, KitchenConfig, KitchenError};
use kitchen_pipeline::model::{Ingredient, Role, Stage};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Waits for its stage, then walks away without cooking or signalling.
struct SilentChef;

#[async_trait]
impl StageActor for SilentChef {
    type Output = ();

    fn role(&self) -> Role {
        Role::Chef
    }

    async fn run(self, ctx: StageContext) -> Result<(), ActorError> {
        ctx.pass
            .board
            .wait_for(Stage::IngredientsPrepped, ctx.policy)
            .await
            .map_err(ActorError::handoff(Role::Chef))
    }
}

/// Never finishes cooking.
struct StuckStove;

#[async_trait]
impl WorkSimulator for StuckStove {
    async fn simulate(&self, task: Task) {
        if task == Task::Cook {
            std::future::pending::<()>().await;
        }
    }
}

struct BrokenPantry;

impl IngredientSource for BrokenPantry {
    fn draw(&self, _count: usize) -> Vec<Ingredient> {
        panic!("pantry is on fire");
    }
}

struct Crew {
    customer: JoinHandle<Result<kitchen_pipeline::actors::CustomerReceipt, ActorError>>,
    waiter: JoinHandle<Result<(), ActorError>>,
    cook: JoinHandle<Result<usize, ActorError>>,
    chef: JoinHandle<Result<(), ActorError>>,
}

fn spawn_with_silent_chef(pass: Arc<Pass>, policy: WaitPolicy) -> Crew {
    let ctx = StageContext::new(pass, Arc::new(NoDelay), Arc::new(EventLog::new()), policy);
    let source = Arc::new(ScriptedIngredients::new([3u8, 7, 1]));
    Crew {
        customer: tokio::spawn(Customer::new(source, 3).run(ctx.clone())),
        waiter: tokio::spawn(Waiter::new().run(ctx.clone())),
        cook: tokio::spawn(Cook::new().run(ctx.clone())),
        chef: tokio::spawn(SilentChef.run(ctx)),
    }
}

#[tokio::test]
async fn test_missing_signal_parks_forever_when_unbounded() {
    let pass = Arc::new(Pass::new());
    let crew = spawn_with_silent_chef(pass.clone(), WaitPolicy::Unbounded);

    assert_eq!(crew.cook.await.unwrap().unwrap(), 3);
    crew.chef.await.unwrap().unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(!crew.waiter.is_finished(), "waiter should still wait for the meal");
    assert!(!crew.customer.is_finished(), "customer should still wait for the meal");
    assert_eq!(pass.board.current(), Stage::IngredientsPrepped);

    // Cancelling is the only way out
    pass.abandon();
    let waiter = crew.waiter.await.unwrap().unwrap_err();
    let customer = crew.customer.await.unwrap().unwrap_err();
    assert!(waiter.is_cascade());
    assert!(customer.is_cascade());
    assert!(matches!(
        customer,
        ActorError::Handoff {
            role: Role::Customer,
            source: HandoffError::Closed { .. }
        }
    ));
}

#[tokio::test]
async fn test_missing_signal_times_out_when_bounded() {
    let pass = Arc::new(Pass::new());
    let crew = spawn_with_silent_chef(
        pass.clone(),
        WaitPolicy::Bounded(Duration::from_millis(100)),
    );

    let waiter = crew.waiter.await.unwrap().unwrap_err();
    let customer = crew.customer.await.unwrap().unwrap_err();
    assert!(crew.cook.await.unwrap().is_ok());
    assert!(crew.chef.await.unwrap().is_ok());

    for (err, role) in [(waiter, Role::Waiter), (customer, Role::Customer)] {
        assert_eq!(err.role(), role);
        assert!(!err.is_cascade());
        assert!(matches!(
            err,
            ActorError::Handoff {
                source: HandoffError::Timeout { .. },
                ..
            }
        ));
    }
    // The order was prepped but never cooked
    assert!(!pass.orders.is_empty());
}

#[tokio::test]
async fn test_stalled_chef_fails_the_traversal_and_closes_the_pass() {
    let config = KitchenConfig {
        script: Some(vec![3, 7, 1]),
        wait_timeout_ms: Some(100),
        ..KitchenConfig::default()
    };
    let kitchen = Kitchen::builder(config)
        .work(Arc::new(StuckStove))
        .build()
        .unwrap();

    let result = tokio::time::timeout(Duration::from_secs(5), kitchen.serve_order())
        .await
        .expect("a stalled chef must not hang the kitchen");

    let err = result.unwrap_err();
    assert!(!err.is_cascade(), "root cause expected, got {err}");
    assert!(matches!(
        err,
        KitchenError::Actor(ActorError::Handoff {
            source: HandoffError::Timeout { .. },
            ..
        })
    ));
    assert!(kitchen.pass().board.is_closed());
    assert!(kitchen.pass().meals.is_empty());

    // An abandoned pass cannot serve again
    assert!(matches!(
        kitchen.serve_order().await,
        Err(KitchenError::Handoff(HandoffError::Closed { .. }))
    ));
}

#[tokio::test]
async fn test_panicking_collaborator_is_reported() {
    let config = KitchenConfig {
        wait_timeout_ms: Some(0),
        ..KitchenConfig::default()
    };
    let kitchen = Kitchen::builder(config)
        .ingredients(Arc::new(BrokenPantry))
        .work(Arc::new(NoDelay))
        .build()
        .unwrap();

    let result = tokio::time::timeout(Duration::from_secs(5), kitchen.serve_order())
        .await
        .expect("other actors must be released after a panic");

    assert!(matches!(result, Err(KitchenError::Join(_))));
    assert!(kitchen.pass().board.is_closed());
}
