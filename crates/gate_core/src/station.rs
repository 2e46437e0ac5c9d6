//! Per-tick station mutation.

use rand::Rng;

use crate::ids;
use crate::time::ClockTime;
use crate::types::{
    format_weight_kg, Station, StationKind, StationStatus, PROCESS_STATUSES, SAMPLE_TRUCK_IMAGES,
};

/// Chance per tick that a station changes state at all.
const MUTATION_CHANCE: f64 = 0.1;
/// Extra chance that Gate Out reads as idle regardless of the drawn status;
/// the exit gate stands open more often than the rest of the line.
const GATE_OUT_IDLE_CHANCE: f64 = 0.5;

const STATION_WEIGHT_KG: std::ops::Range<u32> = 10_000..40_000;

/// Advance every station by one tick.
///
/// Each station independently keeps its state with probability 0.9;
/// otherwise it is rewritten in full (no partial-field updates). Order and
/// length of the slice are preserved.
pub fn tick_stations(stations: &mut [Station], clock: ClockTime, rng: &mut impl Rng) {
    for station in stations.iter_mut() {
        if rng.gen::<f64>() >= MUTATION_CHANCE {
            continue;
        }
        mutate_station(station, clock, rng);
    }
}

fn mutate_station(station: &mut Station, clock: ClockTime, rng: &mut impl Rng) {
    const STATUSES: [StationStatus; 3] = [
        StationStatus::Active,
        StationStatus::Warning,
        StationStatus::Idle,
    ];
    let new_status = STATUSES[rng.gen_range(0..STATUSES.len())];

    let is_idle = new_status == StationStatus::Idle
        || (station.kind == StationKind::GateOut && rng.gen::<f64>() < GATE_OUT_IDLE_CHANCE);

    // Images persist across busy ticks; only idling clears them.
    if is_idle {
        station.image = None;
    } else if station.image.is_none() {
        station.image =
            Some(SAMPLE_TRUCK_IMAGES[rng.gen_range(0..SAMPLE_TRUCK_IMAGES.len())].to_string());
    }

    station.status = new_status;
    station.timestamp = clock;
    if is_idle {
        station.po_number = None;
        station.sequence = None;
        station.process_status = "Idle".to_string();
        station.weight = None;
    } else {
        station.po_number = Some(ids::po_number(rng));
        station.sequence = Some(ids::sequence(rng, 5, 9));
        station.process_status =
            PROCESS_STATUSES[rng.gen_range(0..PROCESS_STATUSES.len())].to_string();
        station.weight = station
            .kind
            .is_weighing()
            .then(|| format_weight_kg(rng.gen_range(STATION_WEIGHT_KG)));
    }
}
