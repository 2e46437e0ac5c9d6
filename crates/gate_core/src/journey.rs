//! Journey reconstruction.
//!
//! A single activity row pins a truck to one checkpoint at one time; the
//! rest of its journey is synthesized around that anchor. Steps before the
//! anchor get back-dated timestamps and sample images, the anchor step
//! mirrors the activity's own status, and later steps stay pending. The
//! result is recomputed on every call: the cosmetic fields (images, weights,
//! back-dated minutes) are drawn from the caller's Rng each time.

use rand::Rng;

use crate::time::CompactTime;
use crate::types::{
    format_weight_kg, ActivityStatus, JourneyStatus, JourneyStep, StationKind, StepStatus,
    TruckActivity, TruckJourney, SAMPLE_TRUCK_IMAGES,
};

/// Minutes of dwell assumed per checkpoint when back-dating prior steps.
const BACKDATE_STEP_MINS: i32 = 5;
/// Random extra dwell added on top, per prior step.
const BACKDATE_JITTER_MINS: i32 = 3;

const STEP_WEIGHT_KG: std::ops::Range<u32> = 10_000..30_000;

/// Synthesize the full four-step journey behind one activity row.
pub fn reconstruct(activity: &TruckActivity, rng: &mut impl Rng) -> TruckJourney {
    let current_index = activity.location.index();
    let anchor = activity.timestamp.as_compact();

    let mut steps = StationKind::ORDER.map(|kind| JourneyStep {
        kind,
        status: StepStatus::Pending,
        timestamp: None,
        image: None,
        weight: None,
        process_status: "Pending".to_string(),
    });

    // Steps already passed: completed, back-dated from the anchor.
    for i in 0..current_index {
        let backdate =
            (current_index - i) as i32 * BACKDATE_STEP_MINS + rng.gen_range(0..BACKDATE_JITTER_MINS);
        let step = &mut steps[i];
        step.status = StepStatus::Completed;
        step.timestamp = Some(anchor.add_minutes(-backdate));
        step.image = Some(SAMPLE_TRUCK_IMAGES[i % SAMPLE_TRUCK_IMAGES.len()].to_string());
        step.process_status = "Completed".to_string();
        if step.kind.is_weighing() {
            step.weight = Some(format_weight_kg(rng.gen_range(STEP_WEIGHT_KG)));
        }
    }

    // The anchor step reflects the activity itself; its status label passes
    // through unmapped.
    {
        let step = &mut steps[current_index];
        step.status = if activity.status == ActivityStatus::Completed {
            StepStatus::Completed
        } else {
            StepStatus::InProgress
        };
        step.timestamp = Some(anchor);
        step.image =
            Some(SAMPLE_TRUCK_IMAGES[current_index % SAMPLE_TRUCK_IMAGES.len()].to_string());
        step.process_status = activity.status.label().to_string();
        if step.kind.is_weighing() {
            step.weight = Some(format_weight_kg(rng.gen_range(STEP_WEIGHT_KG)));
        }
    }

    // A completed Gate Out row means the journey is over, whatever the
    // upstream steps claim.
    if activity.location == StationKind::GateOut && activity.status == ActivityStatus::Completed {
        steps[StationKind::ORDER.len() - 1].status = StepStatus::Completed;
    }

    let start_time = steps[0].timestamp;
    let last_completed = steps
        .iter()
        .rev()
        .find(|step| step.status == StepStatus::Completed);

    let end_time = last_completed
        .filter(|step| step.kind == StationKind::GateOut)
        .and_then(|step| step.timestamp);

    let total_duration_mins = match (start_time, last_completed.and_then(|s| s.timestamp)) {
        (Some(start), Some(last)) => {
            // Non-positive spans (midnight wrap) clamp to a minimum of 1.
            Some(last.0.minutes_since(start.0).max(1).unsigned_abs())
        }
        _ => None,
    };

    TruckJourney {
        truck_id: activity.truck_id.clone(),
        po_number: activity.po_number.clone(),
        overall_status: if end_time.is_some() {
            JourneyStatus::Completed
        } else {
            JourneyStatus::InProgress
        },
        start_time,
        end_time,
        total_duration_mins,
        steps,
    }
}

/// `"--.--"` when the journey has no start yet; the dashboard's placeholder.
pub fn display_start_time(journey: &TruckJourney) -> String {
    journey
        .start_time
        .map_or_else(|| "--.--".to_string(), |t: CompactTime| t.to_string())
}

/// `"N mins"` rendering of the derived duration.
pub fn display_duration(journey: &TruckJourney) -> Option<String> {
    journey.total_duration_mins.map(|mins| format!("{mins} mins"))
}
