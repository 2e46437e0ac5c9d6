//! Weighbridge gate monitor daemon: fixed-interval simulation ticks plus a
//! read-only HTTP API for the dashboard.

mod clock;
mod routes;
mod state;
mod tick_loop;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use crate::state::{AppState, SimState};

#[derive(Parser)]
#[command(name = "gate_daemon", about = "Weighbridge gate monitor daemon")]
struct Cli {
    #[arg(long, default_value_t = 8090)]
    port: u16,
    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Simulation tick period in seconds.
    #[arg(long, default_value_t = 5.0)]
    tick_secs: f64,
    /// Origin allowed to call the API.
    #[arg(long, default_value = "http://localhost:5173")]
    cors_origin: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);

    let sim = Arc::new(parking_lot::Mutex::new(SimState {
        stations: gate_core::seed::initial_stations(),
        activities: gate_core::seed::initial_activities(),
        tick: 0,
        seed,
        rng: ChaCha8Rng::seed_from_u64(seed),
    }));
    let (update_tx, _) = tokio::sync::broadcast::channel(64);
    let paused = Arc::new(AtomicBool::new(false));

    let app_state = AppState {
        sim: sim.clone(),
        update_tx: update_tx.clone(),
        paused: paused.clone(),
        tick_secs: cli.tick_secs,
    };

    let ticker = tokio::spawn(tick_loop::run_tick_loop(
        sim,
        update_tx,
        cli.tick_secs,
        paused,
    ));

    let router = routes::make_router_with_cors(app_state, &cli.cors_origin);
    let addr = format!("127.0.0.1:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, seed, tick_secs = cli.tick_secs, "gate_daemon listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    // Dropping the ticker cancels the interval; ticks carry no failure mode,
    // so there is nothing to flush.
    ticker.abort();
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
