//! Fixed-point conversions between physical values and stored integers.
//!
//! Every scaled field is stored as `value × scale` rounded toward zero.
//! Decoding divides by the same scale. Values outside the target integer
//! range wrap the way a narrowing integer cast does; NaN becomes 0.
//!
//! The product is computed in `f32`, so a value that is an exact multiple of
//! the resolution can still land one unit toward zero: `-20.47` mm of daily
//! ET encodes as `-2046`, not `-2047`.
//!
//! Hourly solar radiation is stored in whole W/m² and needs no conversion.

use crate::constants::{
    ET_DAILY_SCALE, ET_HOURLY_SCALE, PRECIP_SCALE, SOLAR_SCALE, TEMP_SCALE, VAPOR_SCALE,
    WIND_DIR_SCALE, WIND_SCALE,
};

/// `value × scale`, truncated toward zero.
fn scaled(value: f32, scale: f32) -> i64 {
    // float-to-int `as` truncates toward zero and maps NaN to 0
    (value * scale) as i64
}

/// °C → tenths of a degree.
pub fn temperature_to_fixed(celsius: f32) -> i16 {
    scaled(celsius, TEMP_SCALE) as i16
}

pub fn temperature_to_float(raw: i16) -> f32 {
    raw as f32 / TEMP_SCALE
}

/// Daily ET in mm → hundredths of a millimetre.
pub fn et_daily_to_fixed(mm: f32) -> i16 {
    scaled(mm, ET_DAILY_SCALE) as i16
}

pub fn et_daily_to_float(raw: i16) -> f32 {
    raw as f32 / ET_DAILY_SCALE
}

/// Hourly ET in mm → thousandths of a millimetre.
pub fn et_hourly_to_fixed(mm: f32) -> i16 {
    scaled(mm, ET_HOURLY_SCALE) as i16
}

pub fn et_hourly_to_float(raw: i16) -> f32 {
    raw as f32 / ET_HOURLY_SCALE
}

/// m/s → tenths of a metre per second.
pub fn wind_speed_to_fixed(mps: f32) -> u16 {
    scaled(mps, WIND_SCALE) as u16
}

pub fn wind_speed_to_float(raw: u16) -> f32 {
    raw as f32 / WIND_SCALE
}

/// Daily solar radiation in MJ/m² → tenths.
pub fn solar_to_fixed(mj_per_m2: f32) -> u8 {
    scaled(mj_per_m2, SOLAR_SCALE) as u8
}

pub fn solar_to_float(raw: u8) -> f32 {
    raw as f32 / SOLAR_SCALE
}

/// Degrees → half-degrees (the stored byte is degrees / 2).
pub fn wind_direction_to_fixed(degrees: f32) -> u8 {
    scaled(degrees, WIND_DIR_SCALE) as u8
}

pub fn wind_direction_to_float(raw: u8) -> f32 {
    raw as f32 / WIND_DIR_SCALE
}

/// mm → hundredths of a millimetre.
pub fn precipitation_to_fixed(mm: f32) -> u16 {
    scaled(mm, PRECIP_SCALE) as u16
}

pub fn precipitation_to_float(raw: u16) -> f32 {
    raw as f32 / PRECIP_SCALE
}

/// kPa → hundredths of a kilopascal.
pub fn vapor_pressure_to_fixed(kpa: f32) -> u16 {
    scaled(kpa, VAPOR_SCALE) as u16
}

pub fn vapor_pressure_to_float(raw: u16) -> f32 {
    raw as f32 / VAPOR_SCALE
}
