use crate::scanner::{ScanEngine, ScanOutcome};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn engine(seed: u64, success_rate: f64) -> ScanEngine<StdRng> {
    ScanEngine::new(
        StdRng::seed_from_u64(seed),
        Duration::from_millis(0),
        success_rate,
    )
}

#[tokio::test]
async fn forced_success_yields_recognized_reading() {
    let mut engine = engine(42, 1.0);

    let ScanOutcome::Recognized(reading) = engine.scan().await else {
        panic!("success_rate 1.0 must always recognize");
    };

    // Award follows the kind, weight stays in the simulated range.
    assert_that!(reading.capivaras, eq(reading.kind.capivaras()));
    assert!((0.5..5.5).contains(&reading.weight_kg));
}

#[tokio::test]
async fn forced_failure_yields_unrecognized() {
    let mut engine = engine(42, 0.0);

    assert_that!(engine.scan().await, eq(&ScanOutcome::Unrecognized));
}

#[tokio::test]
async fn same_seed_yields_same_outcome() {
    let first = engine(7, 1.0).scan().await;
    let second = engine(7, 1.0).scan().await;

    assert_that!(first, eq(&second));
}

#[tokio::test]
async fn every_recognized_outcome_resolves_exactly_once_per_scan() {
    let mut engine = engine(3, 1.0);

    // Consecutive scans are independent draws from the same engine.
    let outcomes = [engine.scan().await, engine.scan().await];
    for outcome in outcomes {
        assert!(matches!(outcome, ScanOutcome::Recognized(_)));
    }
}

#[tokio::test(start_paused = true)]
async fn scan_waits_for_the_configured_delay() {
    let mut engine = ScanEngine::new(StdRng::seed_from_u64(1), Duration::from_millis(2000), 1.0);

    let before = tokio::time::Instant::now();
    engine.scan().await;
    let elapsed = before.elapsed();

    assert!(elapsed >= Duration::from_millis(2000));
}
