//! Integration tests for the shared tick task.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tickstack_core::{Event, MemoryStore, Ticker, TimerRegistry, TimerStatus};

#[tokio::test]
async fn ticker_drives_timers_to_completion() {
    let registry = Arc::new(Mutex::new(TimerRegistry::open(MemoryStore::new())));
    let id = {
        let mut reg = registry.lock().unwrap();
        let id = reg.create("Quick", 3, "Work", false).unwrap().id;
        reg.start(id);
        id
    };

    // A fast period keeps the test snappy; one tick still advances one
    // logical second of countdown.
    let ticker = Ticker::spawn_with_period(Arc::clone(&registry), Duration::from_millis(5));
    let mut events = ticker.subscribe();

    let completed = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            match events.recv().await {
                Ok(Event::TimerCompleted { id, .. }) => break id,
                Ok(_) => continue,
                Err(e) => panic!("event channel closed: {e}"),
            }
        }
    })
    .await
    .expect("timer should complete well within the timeout");

    assert_eq!(completed, id);
    ticker.join().await;

    let reg = registry.lock().unwrap();
    assert_eq!(reg.get(id).unwrap().status, TimerStatus::Completed);
    assert_eq!(reg.history().len(), 1);
}

#[tokio::test]
async fn ticker_emits_halfway_before_completion() {
    let registry = Arc::new(Mutex::new(TimerRegistry::open(MemoryStore::new())));
    {
        let mut reg = registry.lock().unwrap();
        let id = reg.create("Alerted", 4, "Work", true).unwrap().id;
        reg.start(id);
    }

    let ticker = Ticker::spawn_with_period(Arc::clone(&registry), Duration::from_millis(5));
    let mut events = ticker.subscribe();

    let order = tokio::time::timeout(Duration::from_secs(2), async {
        let mut seen = Vec::new();
        loop {
            match events.recv().await {
                Ok(Event::HalfwayReached { .. }) => seen.push("halfway"),
                Ok(Event::TimerCompleted { .. }) => {
                    seen.push("completed");
                    break seen;
                }
                Ok(_) => continue,
                Err(e) => panic!("event channel closed: {e}"),
            }
        }
    })
    .await
    .expect("events should arrive well within the timeout");

    assert_eq!(order, vec!["halfway", "completed"]);
    ticker.join().await;
}

#[tokio::test]
async fn stopped_ticker_no_longer_advances() {
    let registry = Arc::new(Mutex::new(TimerRegistry::open(MemoryStore::new())));
    let id = {
        let mut reg = registry.lock().unwrap();
        let id = reg.create("Slow", 1000, "Work", false).unwrap().id;
        reg.start(id);
        id
    };

    let ticker = Ticker::spawn_with_period(Arc::clone(&registry), Duration::from_millis(5));
    tokio::time::sleep(Duration::from_millis(50)).await;
    ticker.join().await;

    let remaining = registry.lock().unwrap().get(id).unwrap().remaining;
    assert!(remaining < 1000, "ticker should have advanced the timer");

    tokio::time::sleep(Duration::from_millis(50)).await;
    let after = registry.lock().unwrap().get(id).unwrap().remaining;
    assert_eq!(remaining, after, "no ticks after shutdown");
}
