//! Fixed-width binary codec for daily and hourly climate station records.
//!
//! Zero `unsafe`, no C dependencies. Records are packed field by field in
//! little-endian order: 16 bytes per daily observation, 24 per hourly one.
//! Physical values are stored as fixed-point integers (°C × 10, mm × 100,
//! …) and timestamps as whole days or hours since 1985-01-01.
//!
//! # Encoding a record
//!
//! ```
//! use cimis_codec::{decode_daily, encode_daily, DailyRecord};
//!
//! let record = DailyRecord::new(100)
//!     .with_date(1985, 1, 1)
//!     .with_temperature(25.0)
//!     .with_et(5.0)
//!     .with_wind_speed(3.0)
//!     .with_humidity(60)
//!     .with_solar_radiation(20.0);
//!
//! let mut buf = [0u8; 16];
//! encode_daily(&record, &mut buf).unwrap();
//! assert_eq!(buf, [0, 0, 0, 0, 100, 0, 250, 0, 244, 1, 30, 0, 60, 200, 0, 0]);
//!
//! let decoded = decode_daily(&buf).unwrap();
//! assert_eq!(decoded, record);
//! assert_eq!(decoded.temperature_celsius(), 25.0);
//! ```
//!
//! # Batches and iteration
//!
//! ```
//! use cimis_codec::{encode_hourly_batch, hourly_records, HourlyRecord};
//!
//! let records: Vec<_> = (0..24)
//!     .map(|h| HourlyRecord::new(7).with_datetime(2020, 7, 1, h).with_temperature(20.0))
//!     .collect();
//!
//! let mut buf = vec![0u8; 24 * 24];
//! assert_eq!(encode_hourly_batch(&records, &mut buf), 576);
//!
//! let hot_hours = hourly_records(&buf)
//!     .filter(|r| r.temperature_celsius() >= 20.0)
//!     .count();
//! assert_eq!(hot_hours, 24);
//! ```
//!
//! # Validation and statistics
//!
//! ```
//! use cimis_codec::{calculate_daily_stats, validate_daily, DailyRecord};
//!
//! let records = [
//!     DailyRecord::new(1).with_temperature(10.0),
//!     DailyRecord::new(1).with_temperature(20.0),
//!     DailyRecord::new(1).with_temperature(30.0),
//! ];
//! assert!(records.iter().all(validate_daily));
//!
//! let stats = calculate_daily_stats(&records).unwrap();
//! assert_eq!(stats.min_temp, 10.0);
//! assert_eq!(stats.max_temp, 30.0);
//! assert_eq!(stats.record_count, 3);
//! ```

pub mod batch;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod reader;
pub mod record;
pub mod scale;
pub mod stats;
pub mod time;
pub mod types;
pub mod validate;

pub use error::{CodecError, Result};
pub use reader::{RecordIterator, RecordReader, daily_records, hourly_records};
pub use record::{DailyRecord, HourlyRecord, PackedRecord};
pub use stats::{DailyStats, StatsAccumulator, calculate_daily_stats};
pub use time::{CalendarDate, date_to_days, datetime_to_hours, days_to_date, hours_to_datetime};
pub use types::{QcFlags, RecordKind};
pub use validate::{Violation, validate_daily, validate_hourly};

pub use batch::{
    RecordBatch, decode_daily_batch, decode_daily_vec, decode_hourly_batch, decode_hourly_vec,
    encode_daily_batch, encode_hourly_batch,
};
pub use decode::{decode_daily, decode_hourly};
pub use encode::{encode_daily, encode_hourly};
