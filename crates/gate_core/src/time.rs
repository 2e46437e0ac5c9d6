//! Canonical time-of-day representation.
//!
//! The engine stores every timestamp as minutes since midnight and formats
//! only at the edges. Two textual shapes exist on the wire: colon-separated
//! `HH:MM` for live station/activity timestamps and dot-separated `HH.MM`
//! for journey steps. They are distinct types here so one can never be fed
//! where the other is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

pub const MINUTES_PER_DAY: i32 = 24 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedTimeFormat {
    #[error("expected `{expected}` separated time, got {input:?}")]
    WrongShape {
        expected: char,
        input: String,
    },
    #[error("time field out of range in {input:?}")]
    OutOfRange { input: String },
}

/// A wall-clock time of day, minutes since midnight. Always `< 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    pub fn from_minutes(minutes_since_midnight: u16) -> Self {
        Self {
            minutes: minutes_since_midnight % MINUTES_PER_DAY as u16,
        }
    }

    pub fn from_hm(hour: u16, minute: u16) -> Self {
        Self::from_minutes(hour * 60 + minute)
    }

    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(self) -> u16 {
        self.minutes % 60
    }

    pub fn minutes_since_midnight(self) -> u16 {
        self.minutes
    }

    /// Add a signed minute offset, wrapping at midnight in both directions.
    pub fn add_minutes(self, delta: i32) -> Self {
        let total = (i32::from(self.minutes) + delta).rem_euclid(MINUTES_PER_DAY);
        Self {
            minutes: u16::try_from(total).unwrap_or(0),
        }
    }

    /// Signed minutes from `earlier` to `self`, without wrapping. A journey
    /// that crosses midnight therefore yields a negative difference; the
    /// caller decides how to present that.
    pub fn minutes_since(self, earlier: Self) -> i32 {
        i32::from(self.minutes) - i32::from(earlier.minutes)
    }

    pub fn as_compact(self) -> CompactTime {
        CompactTime(self)
    }

    fn parse_with(s: &str, sep: char) -> Result<Self, MalformedTimeFormat> {
        let wrong_shape = || MalformedTimeFormat::WrongShape {
            expected: sep,
            input: s.to_string(),
        };
        let (h, m) = s.split_once(sep).ok_or_else(wrong_shape)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(wrong_shape());
        }
        let hour: u16 = h.parse().map_err(|_| wrong_shape())?;
        let minute: u16 = m.parse().map_err(|_| wrong_shape())?;
        if hour >= 24 || minute >= 60 {
            return Err(MalformedTimeFormat::OutOfRange {
                input: s.to_string(),
            });
        }
        Ok(Self::from_hm(hour, minute))
    }
}

/// Colon shape, `"HH:MM"`.
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = MalformedTimeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, ':')
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The dot shape, `"HH.MM"`, used by journey steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompactTime(pub ClockTime);

impl CompactTime {
    pub fn add_minutes(self, delta: i32) -> Self {
        Self(self.0.add_minutes(delta))
    }
}

impl fmt::Display for CompactTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for CompactTime {
    type Err = MalformedTimeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClockTime::parse_with(s, '.').map(Self)
    }
}

impl Serialize for CompactTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_shapes_zero_padded() {
        let t = ClockTime::from_hm(9, 5);
        assert_eq!(t.to_string(), "09:05");
        assert_eq!(t.as_compact().to_string(), "09.05");
    }

    #[test]
    fn add_minutes_backwards() {
        let t: CompactTime = "10.00".parse().unwrap();
        assert_eq!(t.add_minutes(-15).to_string(), "09.45");
    }

    #[test]
    fn add_minutes_wraps_at_midnight() {
        // Chosen policy: plain mod-1440 wraparound, both directions.
        let t: CompactTime = "00.10".parse().unwrap();
        assert_eq!(t.add_minutes(-20).to_string(), "23.50");
        let t: CompactTime = "23.55".parse().unwrap();
        assert_eq!(t.add_minutes(10).to_string(), "00.05");
    }

    #[test]
    fn each_shape_rejects_the_other_separator() {
        assert!(matches!(
            "10.30".parse::<ClockTime>(),
            Err(MalformedTimeFormat::WrongShape { expected: ':', .. })
        ));
        assert!(matches!(
            "10:30".parse::<CompactTime>(),
            Err(MalformedTimeFormat::WrongShape { expected: '.', .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(matches!(
            "25:00".parse::<ClockTime>(),
            Err(MalformedTimeFormat::OutOfRange { .. })
        ));
        assert!(matches!(
            "10:61".parse::<ClockTime>(),
            Err(MalformedTimeFormat::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "10", "1:30", "aa:bb", "10:3", "10:300"] {
            assert!(bad.parse::<ClockTime>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn minutes_since_is_signed() {
        let start = ClockTime::from_hm(8, 50);
        let end = ClockTime::from_hm(9, 10);
        assert_eq!(end.minutes_since(start), 20);
        assert_eq!(start.minutes_since(end), -20);
    }
}
