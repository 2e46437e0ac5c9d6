//! Wall-clock → engine-clock boundary.
//!
//! `gate_core` never reads the system clock; this is the only place the
//! daemon converts real local time into a [`ClockTime`] value for a tick.

use chrono::Timelike;
use gate_core::ClockTime;

pub fn wall_clock_now() -> ClockTime {
    let now = chrono::Local::now();
    ClockTime::from_hm(now.hour() as u16, now.minute() as u16)
}
