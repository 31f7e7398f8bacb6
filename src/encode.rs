//! Encode daily and hourly records into their packed byte layouts.
//!
//! Multi-byte fields are little-endian. Offsets:
//!
//! ```text
//! daily (16)                       hourly (24)
//!  0 u32 days since epoch           0 u32 hours since epoch
//!  4 u16 station_id                 4 u16 station_id
//!  6 i16 temperature ×10            6 i16 temperature ×10
//!  8 i16 et ×100                    8 i16 et ×1000
//! 10 u16 wind_speed ×10            10 u16 wind_speed ×10
//! 12 u8  humidity                  12 u8  wind_direction ×0.5
//! 13 u8  solar ×10                 13 u8  humidity
//! 14 u8  qc_flags                  14 u16 solar W/m²
//! 15 u8  reserved                  16 u16 precipitation ×100
//!                                  18 u16 vapor_pressure ×100
//!                                  20 u8  qc_flags
//!                                  21 u8  reserved
//!                                  22 [u8; 2] zero padding
//! ```
//!
//! Encoding never validates: out-of-range values are written as given.

use crate::Result;
use crate::constants::{DAILY_RECORD_SIZE, HOURLY_RECORD_SIZE};
use crate::decode::check_len;
use crate::record::{DailyRecord, HourlyRecord};

/// Encode a [`DailyRecord`] into the first 16 bytes of `buf`.
///
/// Fails without touching `buf` when it is shorter than 16 bytes.
pub fn encode_daily(record: &DailyRecord, buf: &mut [u8]) -> Result<()> {
    check_len(buf.len(), DAILY_RECORD_SIZE)?;
    write_daily(record, buf);
    Ok(())
}

/// Encode an [`HourlyRecord`] into the first 24 bytes of `buf`.
///
/// The two padding bytes are always written as zero, whatever
/// `record.padding` holds.
pub fn encode_hourly(record: &HourlyRecord, buf: &mut [u8]) -> Result<()> {
    check_len(buf.len(), HOURLY_RECORD_SIZE)?;
    write_hourly(record, buf);
    Ok(())
}

/// Caller guarantees `buf.len() >= 16`.
pub(crate) fn write_daily(record: &DailyRecord, buf: &mut [u8]) {
    buf[0..4].copy_from_slice(&record.timestamp.to_le_bytes());
    buf[4..6].copy_from_slice(&record.station_id.to_le_bytes());
    buf[6..8].copy_from_slice(&record.temperature.to_le_bytes());
    buf[8..10].copy_from_slice(&record.et.to_le_bytes());
    buf[10..12].copy_from_slice(&record.wind_speed.to_le_bytes());
    buf[12] = record.humidity;
    buf[13] = record.solar_radiation;
    buf[14] = record.qc_flags;
    buf[15] = record.reserved;
}

/// Caller guarantees `buf.len() >= 24`.
pub(crate) fn write_hourly(record: &HourlyRecord, buf: &mut [u8]) {
    buf[0..4].copy_from_slice(&record.timestamp.to_le_bytes());
    buf[4..6].copy_from_slice(&record.station_id.to_le_bytes());
    buf[6..8].copy_from_slice(&record.temperature.to_le_bytes());
    buf[8..10].copy_from_slice(&record.et.to_le_bytes());
    buf[10..12].copy_from_slice(&record.wind_speed.to_le_bytes());
    buf[12] = record.wind_direction;
    buf[13] = record.humidity;
    buf[14..16].copy_from_slice(&record.solar_radiation.to_le_bytes());
    buf[16..18].copy_from_slice(&record.precipitation.to_le_bytes());
    buf[18..20].copy_from_slice(&record.vapor_pressure.to_le_bytes());
    buf[20] = record.qc_flags;
    buf[21] = record.reserved;
    buf[22] = 0;
    buf[23] = 0;
}
