//! Tests for the continuous audit loop: cycle cadence and cooperative
//! cancellation, run under a paused clock so no real time passes.

mod common;

use std::time::Duration;

use tokio::sync::watch;

use common::MockCluster;
use kaudit::schedule;

#[tokio::test(start_paused = true)]
async fn cancellation_during_the_sleep_stops_after_one_cycle() {
    let cluster = MockCluster::granting();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut cycles = 0;
    schedule::run_loop(
        &cluster,
        "default",
        Duration::from_secs(1),
        |_result| {
            cycles += 1;
            // Request shutdown while the loop is about to wait out the
            // interval; it must not start a second cycle.
            let _ = shutdown_tx.send(true);
        },
        shutdown_rx,
    )
    .await;

    assert_eq!(cycles, 1);
}

#[tokio::test(start_paused = true)]
async fn shutdown_requested_before_the_loop_runs_no_cycle() {
    let cluster = MockCluster::granting();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    shutdown_tx.send(true).expect("receiver alive");

    let mut cycles = 0;
    schedule::run_loop(
        &cluster,
        "default",
        Duration::from_secs(30),
        |_result| cycles += 1,
        shutdown_rx,
    )
    .await;

    assert_eq!(cycles, 0);
    assert!(cluster.recorded_calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn closed_shutdown_channel_stops_the_loop() {
    let cluster = MockCluster::granting();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    drop(shutdown_tx);

    let mut cycles = 0;
    schedule::run_loop(
        &cluster,
        "default",
        Duration::from_secs(30),
        |_result| cycles += 1,
        shutdown_rx,
    )
    .await;

    assert_eq!(cycles, 1);
}

#[tokio::test(start_paused = true)]
async fn each_cycle_produces_an_independent_result() {
    let cluster = MockCluster::granting();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut seen = Vec::new();
    schedule::run_loop(
        &cluster,
        "default",
        Duration::from_secs(1),
        |result| {
            seen.push(result.verdicts.len());
            if seen.len() == 3 {
                let _ = shutdown_tx.send(true);
            }
        },
        shutdown_rx,
    )
    .await;

    assert_eq!(seen, vec![6, 6, 6]);
}
