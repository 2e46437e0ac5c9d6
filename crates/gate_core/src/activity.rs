//! The truck activity feed.

use rand::Rng;

use crate::ids;
use crate::time::ClockTime;
use crate::types::{ActivityStatus, StationKind, TruckActivity};

/// How many log rows the feed keeps, newest first. Oldest rows fall off.
pub const ACTIVITY_LOG_CAP: usize = 20;

/// Chance per tick that a new activity row appears.
const APPEND_CHANCE: f64 = 0.3;

/// With probability 0.3, prepend one synthetic activity row and truncate the
/// log to [`ACTIVITY_LOG_CAP`]. Returns the new row so callers can stream it.
pub fn maybe_append(
    log: &mut Vec<TruckActivity>,
    clock: ClockTime,
    rng: &mut impl Rng,
) -> Option<TruckActivity> {
    if rng.gen::<f64>() >= APPEND_CHANCE {
        return None;
    }
    let activity = TruckActivity {
        id: ids::truck_ref(rng),
        truck_id: ids::truck_ref(rng),
        status: ActivityStatus::ALL[rng.gen_range(0..ActivityStatus::ALL.len())],
        timestamp: clock,
        location: StationKind::ORDER[rng.gen_range(0..StationKind::ORDER.len())],
        po_number: ids::po_number(rng),
        sequence: ids::sequence(rng, 8, 12),
    };
    log.insert(0, activity.clone());
    log.truncate(ACTIVITY_LOG_CAP);
    Some(activity)
}
