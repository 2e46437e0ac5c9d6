//! Fixed seed data a session starts from.
//!
//! Stations are never created or destroyed after this; ticks rewrite them in
//! place. The activity rows give the feed something to show before the first
//! synthetic append lands.

use crate::time::ClockTime;
use crate::types::{
    ActivityStatus, Station, StationKind, StationStatus, TruckActivity, SAMPLE_TRUCK_IMAGES,
};

pub fn initial_stations() -> Vec<Station> {
    vec![
        Station {
            id: "ST-01".to_string(),
            kind: StationKind::GateIn,
            status: StationStatus::Active,
            image: Some(SAMPLE_TRUCK_IMAGES[0].to_string()),
            po_number: Some("PO-482913".to_string()),
            sequence: Some("3/7".to_string()),
            timestamp: ClockTime::from_hm(7, 52),
            process_status: "Checking Documents".to_string(),
            weight: None,
        },
        Station {
            id: "ST-02".to_string(),
            kind: StationKind::WeighbridgeOne,
            status: StationStatus::Active,
            image: Some(SAMPLE_TRUCK_IMAGES[1].to_string()),
            po_number: Some("PO-771204".to_string()),
            sequence: Some("5/8".to_string()),
            timestamp: ClockTime::from_hm(7, 55),
            process_status: "Awaiting Tare".to_string(),
            weight: Some("24.350 kg".to_string()),
        },
        Station {
            id: "ST-03".to_string(),
            kind: StationKind::WeighbridgeTwo,
            status: StationStatus::Warning,
            image: Some(SAMPLE_TRUCK_IMAGES[2].to_string()),
            po_number: Some("PO-615830".to_string()),
            sequence: Some("2/6".to_string()),
            timestamp: ClockTime::from_hm(7, 58),
            process_status: "Final Weighing".to_string(),
            weight: Some("31.080 kg".to_string()),
        },
        Station {
            id: "ST-04".to_string(),
            kind: StationKind::GateOut,
            status: StationStatus::Idle,
            image: None,
            po_number: None,
            sequence: None,
            timestamp: ClockTime::from_hm(7, 45),
            process_status: "Idle".to_string(),
            weight: None,
        },
    ]
}

pub fn initial_activities() -> Vec<TruckActivity> {
    vec![
        TruckActivity {
            id: "TRK-58204".to_string(),
            truck_id: "TRK-58204".to_string(),
            status: ActivityStatus::Weighing,
            timestamp: ClockTime::from_hm(7, 58),
            location: StationKind::WeighbridgeTwo,
            po_number: "PO-615830".to_string(),
            sequence: "2/9".to_string(),
        },
        TruckActivity {
            id: "TRK-41877".to_string(),
            truck_id: "TRK-41877".to_string(),
            status: ActivityStatus::Waiting,
            timestamp: ClockTime::from_hm(7, 55),
            location: StationKind::WeighbridgeOne,
            po_number: "PO-771204".to_string(),
            sequence: "5/10".to_string(),
        },
        TruckActivity {
            id: "TRK-90412".to_string(),
            truck_id: "TRK-90412".to_string(),
            status: ActivityStatus::InProgress,
            timestamp: ClockTime::from_hm(7, 52),
            location: StationKind::GateIn,
            po_number: "PO-482913".to_string(),
            sequence: "3/8".to_string(),
        },
        TruckActivity {
            id: "TRK-17266".to_string(),
            truck_id: "TRK-17266".to_string(),
            status: ActivityStatus::Completed,
            timestamp: ClockTime::from_hm(7, 41),
            location: StationKind::GateOut,
            po_number: "PO-204559".to_string(),
            sequence: "1/8".to_string(),
        },
        TruckActivity {
            id: "TRK-33590".to_string(),
            truck_id: "TRK-33590".to_string(),
            status: ActivityStatus::Completed,
            timestamp: ClockTime::from_hm(7, 28),
            location: StationKind::GateOut,
            po_number: "PO-948102".to_string(),
            sequence: "4/11".to_string(),
        },
    ]
}
