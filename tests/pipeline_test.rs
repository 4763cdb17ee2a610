use handoff::mock::SignalRecorder;
use kitchen_pipeline::actors::Pass;
use kitchen_pipeline::collaborators::{
    EventLog, KitchenEvent, NoDelay, Observer, ScriptedIngredients,
};
use kitchen_pipeline::lifecycle::{Kitchen, KitchenConfig};
use kitchen_pipeline::model::{Ingredient, KitchenProtocol, Meal, Order, Role, Signal, Stage};
use std::sync::{Arc, Mutex, OnceLock};

fn fast_config() -> KitchenConfig {
    KitchenConfig {
        wait_timeout_ms: Some(2_000),
        ..KitchenConfig::default()
    }
}

/// Tracks, on every narrated event, how many items sit on the pass.
#[derive(Default)]
struct OccupancyGauge {
    pass: OnceLock<Arc<Pass>>,
    peak: Mutex<usize>,
}

impl Observer for OccupancyGauge {
    fn notify(&self, _role: Role, _event: &KitchenEvent) {
        if let Some(pass) = self.pass.get() {
            let in_flight = pass.orders.len() + pass.meals.len();
            let mut peak = self.peak.lock().unwrap();
            *peak = (*peak).max(in_flight);
        }
    }
}

#[tokio::test]
async fn test_reference_order_becomes_its_meal() {
    let kitchen = Kitchen::builder(fast_config())
        .ingredients(Arc::new(ScriptedIngredients::new([3u8, 7, 1])))
        .work(Arc::new(NoDelay))
        .build()
        .expect("kitchen should build");

    let report = kitchen.serve_order().await.expect("order should be served");

    assert_eq!(report.order, Order::try_from(vec![3, 7, 1]).unwrap());
    assert_eq!(report.meal, Meal::from_order(&report.order));
    assert_eq!(report.meal.name(), "371");
    assert_eq!(report.published, report.meal);
    assert_eq!(report.prepped, 3);
    kitchen.shutdown();
}

#[tokio::test]
async fn test_single_ingredient_order() {
    let config = KitchenConfig {
        order_size: 1,
        script: Some(vec![5]),
        ..fast_config()
    };
    let kitchen = Kitchen::builder(config)
        .work(Arc::new(NoDelay))
        .build()
        .unwrap();

    let report = kitchen.serve_order().await.unwrap();
    assert_eq!(report.meal.name(), "5");
    assert_eq!(report.prepped, 1);
}

const PARALLEL_ROUNDS: usize = 5;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_signals_fire_once_each_in_protocol_order() {
    let recorder = Arc::new(SignalRecorder::<KitchenProtocol>::new());
    let kitchen = Kitchen::builder(fast_config())
        .work(Arc::new(NoDelay))
        .signal_listener(recorder.clone())
        .build()
        .unwrap();

    kitchen.serve(PARALLEL_ROUNDS).await.unwrap();

    let fired = recorder.fired();
    assert_eq!(fired.len(), PARALLEL_ROUNDS * Signal::SEQUENCE.len());
    for round in fired.chunks(Signal::SEQUENCE.len()) {
        let signals: Vec<Signal> = round.iter().map(|fired| fired.signal).collect();
        assert_eq!(signals, Signal::SEQUENCE);
        assert_eq!(round[0].transition.from, Stage::Empty);
        for pair in round.windows(2) {
            assert_eq!(pair[0].transition.to, pair[1].transition.from);
            assert!(pair[0].at <= pair[1].at);
        }
    }
    assert_eq!(kitchen.pass().board.current(), Stage::MealConsumed);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_at_most_one_item_in_flight() {
    let gauge = Arc::new(OccupancyGauge::default());
    let kitchen = Kitchen::builder(fast_config())
        .work(Arc::new(NoDelay))
        .observer(gauge.clone())
        .build()
        .unwrap();
    gauge.pass.set(kitchen.pass().clone()).ok();

    kitchen.serve(PARALLEL_ROUNDS).await.unwrap();

    assert_eq!(*gauge.peak.lock().unwrap(), 1);
    assert_eq!(kitchen.served(), PARALLEL_ROUNDS);
    assert!(kitchen.pass().orders.is_empty());
    assert!(kitchen.pass().meals.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_long_order_fits_the_default_wait_bound() {
    // Default timings scaled down 100x, keeping the ratio of wait bound to time unit
    let defaults = KitchenConfig::default();
    let config = KitchenConfig {
        order_size: 14,
        time_unit_ms: defaults.time_unit_ms / 100,
        wait_timeout_ms: defaults.wait_timeout_ms.map(|ms| ms / 100),
        seed: Some(7),
        ..defaults
    };
    // Real sleeps: the cook alone needs 28 units, the bound is 30
    let kitchen = Kitchen::new(config).unwrap();

    let report = kitchen.serve_order().await.unwrap();

    assert_eq!(report.prepped, 14);
    assert_eq!(report.order.len(), 14);
    assert_eq!(report.meal, Meal::from_order(&report.order));
}

#[tokio::test]
async fn test_rounds_reuse_the_pass() {
    let config = KitchenConfig {
        seed: Some(42),
        ..fast_config()
    };
    let kitchen = Kitchen::builder(config).work(Arc::new(NoDelay)).build().unwrap();

    let reports = kitchen.serve(4).await.unwrap();

    assert_eq!(reports.len(), 4);
    assert_eq!(kitchen.served(), 4);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.round, i + 1);
        assert_eq!(report.order.len(), 3);
        assert!(report.order.ingredients().iter().all(|i| i.0 <= 9));
        assert_eq!(report.meal, Meal::from_order(&report.order));
    }
}

#[tokio::test]
async fn test_narration_follows_the_pipeline() {
    let log = Arc::new(EventLog::new());
    let kitchen = Kitchen::builder(fast_config())
        .ingredients(Arc::new(ScriptedIngredients::new([3u8, 7, 1])))
        .work(Arc::new(NoDelay))
        .observer(log.clone())
        .build()
        .unwrap();

    kitchen.serve_order().await.unwrap();

    let order = Order::try_from(vec![3, 7, 1]).unwrap();
    let meal = Meal::from_order(&order);
    let expected = vec![
        (Role::Customer, KitchenEvent::ChoosingIngredients),
        (Role::Customer, KitchenEvent::IngredientsChosen { order }),
        (Role::Customer, KitchenEvent::OrderPlaced),
        (Role::Waiter, KitchenEvent::OrderReceived),
        (Role::Waiter, KitchenEvent::OrderRelayed),
        (Role::Cook, KitchenEvent::PreparingIngredients),
        (Role::Cook, KitchenEvent::PreparingIngredient { ingredient: Ingredient(3) }),
        (Role::Cook, KitchenEvent::PreparingIngredient { ingredient: Ingredient(7) }),
        (Role::Cook, KitchenEvent::PreparingIngredient { ingredient: Ingredient(1) }),
        (Role::Cook, KitchenEvent::IngredientsReady),
        (Role::Chef, KitchenEvent::CookingStarted),
        (Role::Chef, KitchenEvent::MealCooked { meal: meal.clone() }),
        (Role::Waiter, KitchenEvent::MealPickedUp),
        (Role::Waiter, KitchenEvent::MealDelivered),
        (Role::Customer, KitchenEvent::MealReceived { meal }),
    ];
    assert_eq!(log.events(), expected);
}
