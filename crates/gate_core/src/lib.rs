//! `gate_core` — synthetic weighbridge gate simulation.
//!
//! No IO, no wall clock, no ambient randomness. Every entry point that rolls
//! dice takes the caller's Rng; every entry point that needs the time of day
//! takes a [`ClockTime`] value. Callers own the snapshots.

pub mod activity;
mod ids;
pub mod journey;
pub mod seed;
pub mod station;
pub mod time;
mod types;
pub mod view;

pub use activity::{maybe_append, ACTIVITY_LOG_CAP};
pub use journey::reconstruct;
pub use station::tick_stations;
pub use time::{ClockTime, CompactTime, MalformedTimeFormat};
pub use types::*;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

#[cfg(test)]
mod tests;
