use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::clock::wall_clock_now;
use crate::state::{SharedSim, TickUpdate, UpdateTx};

/// Drive the simulation at a fixed period until the daemon shuts down.
///
/// While paused the interval keeps firing but the state is left untouched,
/// so resuming never bursts to catch up.
pub async fn run_tick_loop(
    sim: SharedSim,
    update_tx: UpdateTx,
    tick_secs: f64,
    paused: Arc<AtomicBool>,
) {
    let mut interval = tokio::time::interval(Duration::from_secs_f64(tick_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        if paused.load(Ordering::Relaxed) {
            continue;
        }

        let update = {
            let mut guard = sim.lock();
            let clock = wall_clock_now();
            let crate::state::SimState {
                ref mut stations,
                ref mut activities,
                ref mut rng,
                ref mut tick,
                ..
            } = *guard;
            gate_core::tick_stations(stations, clock, rng);
            let appended = gate_core::maybe_append(activities, clock, rng);
            *tick += 1;
            tracing::debug!(
                tick = *tick,
                appended = appended.is_some(),
                log_len = activities.len(),
                "tick"
            );
            TickUpdate {
                tick: *tick,
                stations: stations.clone(),
                appended,
            }
        };

        let _ = update_tx.send(update);
    }
}
