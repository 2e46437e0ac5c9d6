use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use gate_core::{Station, TruckActivity};
use parking_lot::Mutex;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tokio::sync::broadcast;

pub struct SimState {
    pub stations: Vec<Station>,
    pub activities: Vec<TruckActivity>,
    pub tick: u64,
    pub seed: u64,
    pub rng: ChaCha8Rng,
}

/// What the SSE stream carries after each tick.
#[derive(Debug, Clone, Serialize)]
pub struct TickUpdate {
    pub tick: u64,
    pub stations: Vec<Station>,
    /// Present only on ticks where the activity feed grew.
    pub appended: Option<TruckActivity>,
}

pub type SharedSim = Arc<Mutex<SimState>>;
pub type UpdateTx = broadcast::Sender<TickUpdate>;

#[derive(Clone)]
pub struct AppState {
    pub sim: SharedSim,
    pub update_tx: UpdateTx,
    pub paused: Arc<AtomicBool>,
    pub tick_secs: f64,
}
