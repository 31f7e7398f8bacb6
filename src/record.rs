//! In-memory daily and hourly station records.
//!
//! [`DailyRecord`] and [`HourlyRecord`] hold the raw fixed-point integers
//! exactly as they appear on the wire. Physical-unit accessors apply the
//! scale factors from [`crate::scale`]; nothing here validates.
//!
//! Both types implement [`PackedRecord`], which lets the batch codec and
//! the typed reader work over either kind.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::{DAILY_RECORD_SIZE, HOURLY_RECORD_SIZE};
use crate::time::{self, CalendarDate};
use crate::types::{QcFlags, RecordKind};
use crate::{Result, decode, encode, scale, validate};

/// A fixed-size record with a packed little-endian layout.
pub trait PackedRecord: Sized + Copy {
    const KIND: RecordKind;
    /// Packed size in bytes.
    const SIZE: usize;

    /// Write the packed form into the first [`Self::SIZE`] bytes of `buf`.
    fn encode_into(&self, buf: &mut [u8]) -> Result<()>;

    /// Read a record from the first [`Self::SIZE`] bytes of `buf`.
    fn decode_from(buf: &[u8]) -> Result<Self>;

    /// Advisory range check; see [`crate::validate`].
    fn is_valid(&self) -> bool;
}

/// One observation-day at one station (16 bytes packed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyRecord {
    /// Days since 1985-01-01.
    pub timestamp: u32,
    pub station_id: u16,
    /// °C × 10.
    pub temperature: i16,
    /// Evapotranspiration, mm × 100.
    pub et: i16,
    /// m/s × 10.
    pub wind_speed: u16,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// MJ/m² × 10.
    pub solar_radiation: u8,
    pub qc_flags: u8,
    pub reserved: u8,
}

impl DailyRecord {
    /// All-zero record for `station_id`.
    pub fn new(station_id: u16) -> Self {
        Self {
            station_id,
            ..Self::default()
        }
    }

    /// Set the timestamp in days since 1985-01-01.
    pub fn with_timestamp(mut self, days: u32) -> Self {
        self.timestamp = days;
        self
    }

    /// Set the timestamp from a calendar date.
    pub fn with_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.timestamp = time::date_to_days(year, month, day);
        self
    }

    /// Set the temperature in °C.
    pub fn with_temperature(mut self, celsius: f32) -> Self {
        self.temperature = scale::temperature_to_fixed(celsius);
        self
    }

    /// Set evapotranspiration in mm.
    pub fn with_et(mut self, mm: f32) -> Self {
        self.et = scale::et_daily_to_fixed(mm);
        self
    }

    /// Set wind speed in m/s.
    pub fn with_wind_speed(mut self, mps: f32) -> Self {
        self.wind_speed = scale::wind_speed_to_fixed(mps);
        self
    }

    /// Set relative humidity in percent.
    pub fn with_humidity(mut self, percent: u8) -> Self {
        self.humidity = percent;
        self
    }

    /// Set solar radiation in MJ/m².
    pub fn with_solar_radiation(mut self, mj_per_m2: f32) -> Self {
        self.solar_radiation = scale::solar_to_fixed(mj_per_m2);
        self
    }

    /// Set the quality-control flags.
    pub fn with_qc(mut self, flags: QcFlags) -> Self {
        self.qc_flags = flags.bits();
        self
    }

    /// Calendar date of the observation.
    pub fn date(&self) -> CalendarDate {
        CalendarDate::from_days(self.timestamp)
    }

    /// Temperature in °C.
    pub fn temperature_celsius(&self) -> f32 {
        scale::temperature_to_float(self.temperature)
    }

    /// Evapotranspiration in mm.
    pub fn et_mm(&self) -> f32 {
        scale::et_daily_to_float(self.et)
    }

    /// Wind speed in m/s.
    pub fn wind_speed_mps(&self) -> f32 {
        scale::wind_speed_to_float(self.wind_speed)
    }

    /// Solar radiation in MJ/m².
    pub fn solar_radiation_mj(&self) -> f32 {
        scale::solar_to_float(self.solar_radiation)
    }

    /// Quality-control flags.
    pub fn qc(&self) -> QcFlags {
        QcFlags::from_bits(self.qc_flags)
    }

    /// Packed 16-byte form.
    pub fn to_bytes(&self) -> [u8; DAILY_RECORD_SIZE] {
        let mut buf = [0u8; DAILY_RECORD_SIZE];
        encode::write_daily(self, &mut buf);
        buf
    }
}

impl PackedRecord for DailyRecord {
    const KIND: RecordKind = RecordKind::Daily;
    const SIZE: usize = DAILY_RECORD_SIZE;

    fn encode_into(&self, buf: &mut [u8]) -> Result<()> {
        encode::encode_daily(self, buf)
    }

    fn decode_from(buf: &[u8]) -> Result<Self> {
        decode::decode_daily(buf)
    }

    fn is_valid(&self) -> bool {
        validate::validate_daily(self)
    }
}

impl fmt::Display for DailyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "station {} | {} | {:.1} °C | ET {:.2} mm | wind {:.1} m/s | RH {}% | solar {:.1} MJ/m² | qc {}",
            self.station_id,
            self.date(),
            self.temperature_celsius(),
            self.et_mm(),
            self.wind_speed_mps(),
            self.humidity,
            self.solar_radiation_mj(),
            self.qc(),
        )
    }
}

/// One observation-hour at one station (24 bytes packed).
///
/// Equality and hashing ignore `padding`.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourlyRecord {
    /// Hours since 1985-01-01 00:00.
    pub timestamp: u32,
    pub station_id: u16,
    /// °C × 10.
    pub temperature: i16,
    /// Evapotranspiration, mm × 1000.
    pub et: i16,
    /// m/s × 10.
    pub wind_speed: u16,
    /// Degrees × 0.5.
    pub wind_direction: u8,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// W/m², unscaled.
    pub solar_radiation: u16,
    /// mm × 100.
    pub precipitation: u16,
    /// kPa × 100.
    pub vapor_pressure: u16,
    pub qc_flags: u8,
    pub reserved: u8,
    /// Trailing bytes 22-23. Always written as zero; kept as read.
    pub padding: [u8; 2],
}

type HourlyKey = (u32, u16, i16, i16, u16, u8, u8, u16, u16, u16, u8, u8);

impl HourlyRecord {
    /// All-zero record for `station_id`.
    pub fn new(station_id: u16) -> Self {
        Self {
            station_id,
            ..Self::default()
        }
    }

    /// Set the timestamp in hours since 1985-01-01 00:00.
    pub fn with_timestamp(mut self, hours: u32) -> Self {
        self.timestamp = hours;
        self
    }

    /// Set the timestamp from a calendar date and hour of day.
    pub fn with_datetime(mut self, year: i32, month: u32, day: u32, hour: u32) -> Self {
        self.timestamp = time::datetime_to_hours(year, month, day, hour);
        self
    }

    /// Set the temperature in °C.
    pub fn with_temperature(mut self, celsius: f32) -> Self {
        self.temperature = scale::temperature_to_fixed(celsius);
        self
    }

    /// Set evapotranspiration in mm.
    pub fn with_et(mut self, mm: f32) -> Self {
        self.et = scale::et_hourly_to_fixed(mm);
        self
    }

    /// Set wind speed in m/s.
    pub fn with_wind_speed(mut self, mps: f32) -> Self {
        self.wind_speed = scale::wind_speed_to_fixed(mps);
        self
    }

    /// Set wind direction in degrees.
    pub fn with_wind_direction(mut self, degrees: f32) -> Self {
        self.wind_direction = scale::wind_direction_to_fixed(degrees);
        self
    }

    /// Set relative humidity in percent.
    pub fn with_humidity(mut self, percent: u8) -> Self {
        self.humidity = percent;
        self
    }

    /// Set solar radiation in W/m².
    pub fn with_solar_radiation(mut self, w_per_m2: u16) -> Self {
        self.solar_radiation = w_per_m2;
        self
    }

    /// Set precipitation in mm.
    pub fn with_precipitation(mut self, mm: f32) -> Self {
        self.precipitation = scale::precipitation_to_fixed(mm);
        self
    }

    /// Set vapor pressure in kPa.
    pub fn with_vapor_pressure(mut self, kpa: f32) -> Self {
        self.vapor_pressure = scale::vapor_pressure_to_fixed(kpa);
        self
    }

    /// Set the quality-control flags.
    pub fn with_qc(mut self, flags: QcFlags) -> Self {
        self.qc_flags = flags.bits();
        self
    }

    /// Calendar date of the observation hour.
    pub fn date(&self) -> CalendarDate {
        CalendarDate::from_days(self.timestamp / 24)
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.timestamp % 24
    }

    /// Temperature in °C.
    pub fn temperature_celsius(&self) -> f32 {
        scale::temperature_to_float(self.temperature)
    }

    /// Evapotranspiration in mm.
    pub fn et_mm(&self) -> f32 {
        scale::et_hourly_to_float(self.et)
    }

    /// Wind speed in m/s.
    pub fn wind_speed_mps(&self) -> f32 {
        scale::wind_speed_to_float(self.wind_speed)
    }

    /// Wind direction in degrees.
    pub fn wind_direction_degrees(&self) -> f32 {
        scale::wind_direction_to_float(self.wind_direction)
    }

    /// Precipitation in mm.
    pub fn precipitation_mm(&self) -> f32 {
        scale::precipitation_to_float(self.precipitation)
    }

    /// Vapor pressure in kPa.
    pub fn vapor_pressure_kpa(&self) -> f32 {
        scale::vapor_pressure_to_float(self.vapor_pressure)
    }

    /// Quality-control flags.
    pub fn qc(&self) -> QcFlags {
        QcFlags::from_bits(self.qc_flags)
    }

    /// Packed 24-byte form.
    pub fn to_bytes(&self) -> [u8; HOURLY_RECORD_SIZE] {
        let mut buf = [0u8; HOURLY_RECORD_SIZE];
        encode::write_hourly(self, &mut buf);
        buf
    }

    fn key(&self) -> HourlyKey {
        (
            self.timestamp,
            self.station_id,
            self.temperature,
            self.et,
            self.wind_speed,
            self.wind_direction,
            self.humidity,
            self.solar_radiation,
            self.precipitation,
            self.vapor_pressure,
            self.qc_flags,
            self.reserved,
        )
    }
}

impl PartialEq for HourlyRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HourlyRecord {}

impl Hash for HourlyRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PackedRecord for HourlyRecord {
    const KIND: RecordKind = RecordKind::Hourly;
    const SIZE: usize = HOURLY_RECORD_SIZE;

    fn encode_into(&self, buf: &mut [u8]) -> Result<()> {
        encode::encode_hourly(self, buf)
    }

    fn decode_from(buf: &[u8]) -> Result<Self> {
        decode::decode_hourly(buf)
    }

    fn is_valid(&self) -> bool {
        validate::validate_hourly(self)
    }
}

impl fmt::Display for HourlyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "station {} | {} {:02}:00 | {:.1} °C | ET {:.3} mm | wind {:.1} m/s @ {}° | RH {}% | solar {} W/m² | precip {:.2} mm | VP {:.2} kPa | qc {}",
            self.station_id,
            self.date(),
            self.hour(),
            self.temperature_celsius(),
            self.et_mm(),
            self.wind_speed_mps(),
            self.wind_direction_degrees(),
            self.humidity,
            self.solar_radiation,
            self.precipitation_mm(),
            self.vapor_pressure_kpa(),
            self.qc(),
        )
    }
}
