//! Advisory range checks on decoded records.
//!
//! Neither encoding nor decoding calls these; a consumer that cares about
//! data quality runs them explicitly. Only station, timestamp, temperature
//! and humidity are checked. Wind, ET, solar radiation and QC flags pass
//! through unchecked, so tightening these rules would reject data that is
//! accepted today.

use std::fmt;

use crate::constants::{
    MAX_DAILY_TIMESTAMP, MAX_HOURLY_TIMESTAMP, MAX_HUMIDITY, MAX_TEMPERATURE_RAW,
    MIN_TEMPERATURE_RAW,
};
use crate::record::{DailyRecord, HourlyRecord};

/// A single failed range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Station id 0 is reserved.
    StationId,
    /// Timestamp past the end of the ~50-year window.
    Timestamp { value: u32, max: u32 },
    /// Raw temperature outside −500..=600 (−50.0..=60.0 °C).
    Temperature(i16),
    /// Humidity above 100%.
    Humidity(u8),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StationId => write!(f, "station id 0 is reserved"),
            Self::Timestamp { value, max } => {
                write!(f, "timestamp {value} exceeds maximum {max}")
            }
            Self::Temperature(raw) => write!(
                f,
                "temperature {:.1} °C outside {:.1}..={:.1}",
                *raw as f32 / 10.0,
                MIN_TEMPERATURE_RAW as f32 / 10.0,
                MAX_TEMPERATURE_RAW as f32 / 10.0
            ),
            Self::Humidity(h) => write!(f, "humidity {h}% above {MAX_HUMIDITY}%"),
        }
    }
}

fn common_violations(
    station_id: u16,
    timestamp: u32,
    max_timestamp: u32,
    temperature: i16,
    humidity: u8,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    if station_id == 0 {
        violations.push(Violation::StationId);
    }
    if timestamp > max_timestamp {
        violations.push(Violation::Timestamp {
            value: timestamp,
            max: max_timestamp,
        });
    }
    if !(MIN_TEMPERATURE_RAW..=MAX_TEMPERATURE_RAW).contains(&temperature) {
        violations.push(Violation::Temperature(temperature));
    }
    if humidity > MAX_HUMIDITY {
        violations.push(Violation::Humidity(humidity));
    }
    violations
}

/// Every range check `record` fails, in check order.
pub fn daily_violations(record: &DailyRecord) -> Vec<Violation> {
    common_violations(
        record.station_id,
        record.timestamp,
        MAX_DAILY_TIMESTAMP,
        record.temperature,
        record.humidity,
    )
}

/// Every range check `record` fails, in check order.
pub fn hourly_violations(record: &HourlyRecord) -> Vec<Violation> {
    common_violations(
        record.station_id,
        record.timestamp,
        MAX_HOURLY_TIMESTAMP,
        record.temperature,
        record.humidity,
    )
}

/// True when a daily record passes every range check.
pub fn validate_daily(record: &DailyRecord) -> bool {
    daily_violations(record).is_empty()
}

/// True when an hourly record passes every range check.
pub fn validate_hourly(record: &HourlyRecord) -> bool {
    hourly_violations(record).is_empty()
}
