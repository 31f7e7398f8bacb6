//! Layout sizes, fixed-point scale factors, and validation limits.
//!
//! Everything the codec treats as fixed lives here so the byte layouts,
//! scaling, and validators agree on a single set of numbers.

// =============================================================================
// Epoch and Record Layout
// =============================================================================

/// First year of the epoch. Day 0 and hour 0 are 1985-01-01 00:00.
pub const EPOCH_YEAR: i32 = 1985;

/// Packed size of a daily record in bytes.
pub const DAILY_RECORD_SIZE: usize = 16;

/// Packed size of an hourly record in bytes (including 2 bytes of padding).
pub const HOURLY_RECORD_SIZE: usize = 24;

// =============================================================================
// Fixed-Point Scale Factors
// =============================================================================

pub const TEMP_SCALE: f32 = 10.0;
pub const ET_DAILY_SCALE: f32 = 100.0;
pub const ET_HOURLY_SCALE: f32 = 1000.0;
pub const WIND_SCALE: f32 = 10.0;
pub const SOLAR_SCALE: f32 = 10.0;
pub const PRECIP_SCALE: f32 = 100.0;
pub const VAPOR_SCALE: f32 = 100.0;
/// Wind direction is stored halved: raw × 2 = degrees.
pub const WIND_DIR_SCALE: f32 = 0.5;

// =============================================================================
// Validation Limits
// =============================================================================

/// Latest valid daily timestamp (~50 years of days).
pub const MAX_DAILY_TIMESTAMP: u32 = 18_250;

/// Latest valid hourly timestamp (50 × 365 × 24).
pub const MAX_HOURLY_TIMESTAMP: u32 = 438_000;

/// Lowest valid temperature, raw (−50.0 °C).
pub const MIN_TEMPERATURE_RAW: i16 = -500;

/// Highest valid temperature, raw (60.0 °C).
pub const MAX_TEMPERATURE_RAW: i16 = 600;

/// Highest valid relative humidity in percent.
pub const MAX_HUMIDITY: u8 = 100;
