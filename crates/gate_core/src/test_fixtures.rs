//! Shared test fixtures for `gate_core` and downstream crates.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ids;
use crate::time::ClockTime;
use crate::types::{ActivityStatus, StationKind, TruckActivity};

/// Deterministic RNG seeded with 42.
pub fn make_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// An activity row anchored at 10:00 at the given checkpoint.
pub fn activity_at(
    location: StationKind,
    status: ActivityStatus,
    rng: &mut ChaCha8Rng,
) -> TruckActivity {
    TruckActivity {
        id: ids::truck_ref(rng),
        truck_id: ids::truck_ref(rng),
        status,
        timestamp: ClockTime::from_hm(10, 0),
        location,
        po_number: ids::po_number(rng),
        sequence: ids::sequence(rng, 8, 12),
    }
}
