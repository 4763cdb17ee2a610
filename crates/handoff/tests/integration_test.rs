use handoff::mock::SignalRecorder;
use handoff::{HandoffError, HandoffSlot, Protocol, StageBoard, Transition, WaitPolicy};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

// --- Test Protocol: a three-station bucket brigade ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Empty,
    Filled,
    Passed,
    Poured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shout {
    Fill,
    Pass,
    Pour,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for Shout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

struct Brigade;

impl Protocol for Brigade {
    type Stage = Bucket;
    type Signal = Shout;

    fn initial() -> Bucket {
        Bucket::Empty
    }

    fn is_terminal(stage: Bucket) -> bool {
        stage == Bucket::Poured
    }

    fn transition(signal: Shout) -> Transition<Bucket> {
        match signal {
            Shout::Fill => Transition::new(Bucket::Empty, Bucket::Filled),
            Shout::Pass => Transition::new(Bucket::Filled, Bucket::Passed),
            Shout::Pour => Transition::new(Bucket::Passed, Bucket::Poured),
        }
    }
}

// --- Tests ---

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_brigade_runs_in_order_across_threads() {
    let recorder = Arc::new(SignalRecorder::<Brigade>::new());
    let board = Arc::new(StageBoard::with_listener(recorder.clone()));
    let bucket = Arc::new(HandoffSlot::new("bucket"));
    let policy = WaitPolicy::Bounded(Duration::from_secs(5));

    // Spawn the consumers first so they are already parked when the producer starts
    let pourer = {
        let (board, bucket) = (board.clone(), bucket.clone());
        tokio::spawn(async move {
            board.wait_for(Bucket::Passed, policy).await?;
            let litres: u32 = bucket.take()?;
            board.advance(Shout::Pour)?;
            Ok::<_, HandoffError>(litres)
        })
    };
    let passer = {
        let (board, bucket) = (board.clone(), bucket.clone());
        tokio::spawn(async move {
            board.wait_for(Bucket::Filled, policy).await?;
            let litres: u32 = bucket.peek()?;
            tokio::time::sleep(Duration::from_millis(5)).await;
            board.advance(Shout::Pass)?;
            Ok::<_, HandoffError>(litres)
        })
    };

    bucket.publish(10u32).unwrap();
    board.advance(Shout::Fill).unwrap();

    assert_eq!(passer.await.unwrap().unwrap(), 10);
    assert_eq!(pourer.await.unwrap().unwrap(), 10);
    assert!(bucket.is_empty());

    recorder.assert_sequence(&[Shout::Fill, Shout::Pass, Shout::Pour]);
    recorder.assert_monotonic();

    // A finished brigade can start over
    board.reset().unwrap();
    assert_eq!(board.current(), Bucket::Empty);
}

#[tokio::test]
async fn test_missing_signal_under_both_policies() {
    let board = Arc::new(StageBoard::<Brigade>::new());
    board.advance(Shout::Fill).unwrap();
    // Nobody shouts Pass

    let bounded = board
        .wait_for(Bucket::Passed, WaitPolicy::Bounded(Duration::from_millis(30)))
        .await;
    assert!(matches!(bounded, Err(HandoffError::Timeout { .. })));

    let unbounded = {
        let board = board.clone();
        tokio::spawn(async move { board.wait_for(Bucket::Passed, WaitPolicy::Unbounded).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!unbounded.is_finished(), "unbounded waiter should stay parked");

    board.close();
    let closed = unbounded.await.unwrap();
    assert!(matches!(closed, Err(HandoffError::Closed { .. })));
}
