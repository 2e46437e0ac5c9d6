//! Type definitions for `gate_core`.

use serde::Serialize;

use crate::time::{ClockTime, CompactTime};

/// Captured-frame URLs the simulation assigns to non-idle stations and
/// completed journey steps. Opaque to the engine; never fetched.
pub const SAMPLE_TRUCK_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1628153434751-2454a35368c1?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1599553251212-34f71a93e36e?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1590212151029-1a705103a03c?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1582209761386-7b28271131c9?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1582209761304-42f1d247f136?q=80&w=800&auto=format&fit=crop",
];

/// Sub-states a busy station cycles through.
pub const PROCESS_STATUSES: [&str; 4] = [
    "Checking Documents",
    "Awaiting Tare",
    "Final Weighing",
    "Gate Opening",
];

// ---------------------------------------------------------------------------
// Stations
// ---------------------------------------------------------------------------

/// The four fixed checkpoints on a truck's path, in journey order.
///
/// The display layer maps a kind to its icon; the engine only cares about
/// ordering and whether the checkpoint weighs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum StationKind {
    GateIn,
    WeighbridgeOne,
    WeighbridgeTwo,
    GateOut,
}

impl StationKind {
    /// Journey order: Gate In < WB 1 < WB 2 < Gate Out.
    pub const ORDER: [StationKind; 4] = [
        StationKind::GateIn,
        StationKind::WeighbridgeOne,
        StationKind::WeighbridgeTwo,
        StationKind::GateOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StationKind::GateIn => "Gate In",
            StationKind::WeighbridgeOne => "WB 1",
            StationKind::WeighbridgeTwo => "WB 2",
            StationKind::GateOut => "Gate Out",
        }
    }

    pub fn is_weighing(self) -> bool {
        matches!(self, StationKind::WeighbridgeOne | StationKind::WeighbridgeTwo)
    }

    /// Position in [`StationKind::ORDER`].
    pub fn index(self) -> usize {
        match self {
            StationKind::GateIn => 0,
            StationKind::WeighbridgeOne => 1,
            StationKind::WeighbridgeTwo => 2,
            StationKind::GateOut => 3,
        }
    }
}

impl From<StationKind> for &'static str {
    fn from(kind: StationKind) -> Self {
        kind.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StationStatus {
    Active,
    Warning,
    Idle,
}

#[derive(Debug, Clone, Serialize)]
pub struct Station {
    pub id: String,
    pub kind: StationKind,
    pub status: StationStatus,
    /// Retained across non-idle ticks; cleared whenever the station idles.
    pub image: Option<String>,
    pub po_number: Option<String>,
    pub sequence: Option<String>,
    pub timestamp: ClockTime,
    pub process_status: String,
    /// Pre-formatted `"N kg"`; only ever set on weighing stations.
    pub weight: Option<String>,
}

// ---------------------------------------------------------------------------
// Activity log
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityStatus {
    Completed,
    Weighing,
    Waiting,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 4] = [
        ActivityStatus::Completed,
        ActivityStatus::Weighing,
        ActivityStatus::Waiting,
        ActivityStatus::InProgress,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityStatus::Completed => "Completed",
            ActivityStatus::Weighing => "Weighing",
            ActivityStatus::Waiting => "Waiting",
            ActivityStatus::InProgress => "In Progress",
        }
    }
}

/// One row of the truck activity feed. Immutable once appended.
///
/// `id` and `truck_id` share the `TRK-` pattern but are drawn independently;
/// they may legitimately differ.
#[derive(Debug, Clone, Serialize)]
pub struct TruckActivity {
    pub id: String,
    pub truck_id: String,
    pub status: ActivityStatus,
    pub timestamp: ClockTime,
    pub location: StationKind,
    pub po_number: String,
    pub sequence: String,
}

// ---------------------------------------------------------------------------
// Reconstructed journeys
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JourneyStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

#[derive(Debug, Clone, Serialize)]
pub struct JourneyStep {
    pub kind: StationKind,
    pub status: StepStatus,
    pub timestamp: Option<CompactTime>,
    pub image: Option<String>,
    pub weight: Option<String>,
    /// Raw sub-state label: "Pending"/"Completed", or the source activity's
    /// own status on the current step.
    pub process_status: String,
}

/// A full four-step journey derived from a single activity row. Recomputed
/// on every request; never cached.
#[derive(Debug, Clone, Serialize)]
pub struct TruckJourney {
    pub truck_id: String,
    pub po_number: String,
    pub overall_status: JourneyStatus,
    pub start_time: Option<CompactTime>,
    pub end_time: Option<CompactTime>,
    pub total_duration_mins: Option<u32>,
    pub steps: [JourneyStep; 4],
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Render a weight the way the dashboard shows it: id-ID digit grouping
/// (dots every three digits) plus the unit, e.g. `12.345 kg`.
pub fn format_weight_kg(kg: u32) -> String {
    let digits = kg.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{grouped} kg")
}
