//! Decode daily and hourly records from their packed byte layouts.
//!
//! The inverse of [`crate::encode`]. Signed fields are reassembled from
//! their two's-complement bytes. Decoding never validates; call
//! [`crate::validate`] explicitly when data quality matters.

use crate::constants::{DAILY_RECORD_SIZE, HOURLY_RECORD_SIZE};
use crate::record::{DailyRecord, HourlyRecord};
use crate::{CodecError, Result};

/// Decode a [`DailyRecord`] from the first 16 bytes of `data`.
pub fn decode_daily(data: &[u8]) -> Result<DailyRecord> {
    check_len(data.len(), DAILY_RECORD_SIZE)?;

    Ok(DailyRecord {
        timestamp: u32::from_le_bytes([data[0], data[1], data[2], data[3]]),
        station_id: u16::from_le_bytes([data[4], data[5]]),
        temperature: i16::from_le_bytes([data[6], data[7]]),
        et: i16::from_le_bytes([data[8], data[9]]),
        wind_speed: u16::from_le_bytes([data[10], data[11]]),
        humidity: data[12],
        solar_radiation: data[13],
        qc_flags: data[14],
        reserved: data[15],
    })
}

/// Decode an [`HourlyRecord`] from the first 24 bytes of `data`.
///
/// Padding bytes 22-23 are captured as-is, even when nonzero.
pub fn decode_hourly(data: &[u8]) -> Result<HourlyRecord> {
    check_len(data.len(), HOURLY_RECORD_SIZE)?;

    Ok(HourlyRecord {
        timestamp: u32::from_le_bytes([data[0], data[1], data[2], data[3]]),
        station_id: u16::from_le_bytes([data[4], data[5]]),
        temperature: i16::from_le_bytes([data[6], data[7]]),
        et: i16::from_le_bytes([data[8], data[9]]),
        wind_speed: u16::from_le_bytes([data[10], data[11]]),
        wind_direction: data[12],
        humidity: data[13],
        solar_radiation: u16::from_le_bytes([data[14], data[15]]),
        precipitation: u16::from_le_bytes([data[16], data[17]]),
        vapor_pressure: u16::from_le_bytes([data[18], data[19]]),
        qc_flags: data[20],
        reserved: data[21],
        padding: [data[22], data[23]],
    })
}

/// `BufferTooSmall` unless `actual >= expected`.
pub(crate) fn check_len(actual: usize, expected: usize) -> Result<()> {
    if actual < expected {
        return Err(CodecError::BufferTooSmall { expected, actual });
    }
    Ok(())
}
