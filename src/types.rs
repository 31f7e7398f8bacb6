//! Shared types: [`RecordKind`] and [`QcFlags`].

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::constants::{DAILY_RECORD_SIZE, HOURLY_RECORD_SIZE};

/// Granularity of a packed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RecordKind {
    /// One observation-day, 16 bytes.
    Daily,
    /// One observation-hour, 24 bytes.
    Hourly,
}

impl RecordKind {
    /// Packed size of one record of this kind.
    pub fn record_size(self) -> usize {
        match self {
            Self::Daily => DAILY_RECORD_SIZE,
            Self::Hourly => HOURLY_RECORD_SIZE,
        }
    }

    /// Number of whole records in `len` bytes. Trailing bytes are dropped.
    pub fn records_in(self, len: usize) -> usize {
        len / self.record_size()
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Hourly => write!(f, "hourly"),
        }
    }
}

/// Quality-control bitmask carried in every record.
///
/// Each bit marks one field as suspect, or the record as derived/estimated.
/// Any combination is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QcFlags(u8);

impl QcFlags {
    pub const TEMPERATURE: Self = Self(0x01);
    pub const ET: Self = Self(0x02);
    pub const WIND_SPEED: Self = Self(0x04);
    pub const HUMIDITY: Self = Self(0x08);
    pub const SOLAR_RADIATION: Self = Self(0x10);
    pub const PRECIPITATION: Self = Self(0x20);
    /// Value was computed from other observations.
    pub const COMPUTED: Self = Self(0x40);
    /// Value was estimated rather than measured.
    pub const ESTIMATED: Self = Self(0x80);

    const NAMES: [(Self, &'static str); 8] = [
        (Self::TEMPERATURE, "temperature"),
        (Self::ET, "et"),
        (Self::WIND_SPEED, "wind_speed"),
        (Self::HUMIDITY, "humidity"),
        (Self::SOLAR_RADIATION, "solar_radiation"),
        (Self::PRECIPITATION, "precipitation"),
        (Self::COMPUTED, "computed"),
        (Self::ESTIMATED, "estimated"),
    ];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Names of the set flags, lowest bit first.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl BitOr for QcFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for QcFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl From<u8> for QcFlags {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<QcFlags> for u8 {
    fn from(flags: QcFlags) -> Self {
        flags.0
    }
}

impl fmt::Display for QcFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sizes() {
        assert_eq!(RecordKind::Daily.record_size(), 16);
        assert_eq!(RecordKind::Hourly.record_size(), 24);
    }

    #[test]
    fn test_records_in_truncates() {
        assert_eq!(RecordKind::Daily.records_in(47), 2);
        assert_eq!(RecordKind::Hourly.records_in(47), 1);
        assert_eq!(RecordKind::Hourly.records_in(23), 0);
    }

    #[test]
    fn test_qc_flag_bits() {
        assert_eq!(QcFlags::TEMPERATURE.bits(), 0x01);
        assert_eq!(QcFlags::PRECIPITATION.bits(), 0x20);
        assert_eq!(QcFlags::ESTIMATED.bits(), 0x80);

        let flags = QcFlags::TEMPERATURE | QcFlags::ESTIMATED;
        assert_eq!(flags.bits(), 0x81);
        assert!(flags.contains(QcFlags::TEMPERATURE));
        assert!(!flags.contains(QcFlags::ET));
        assert!(!flags.contains(QcFlags::TEMPERATURE | QcFlags::ET));
    }

    #[test]
    fn test_qc_insert_remove() {
        let mut flags = QcFlags::empty();
        flags.insert(QcFlags::HUMIDITY);
        flags |= QcFlags::COMPUTED;
        assert_eq!(flags.bits(), 0x48);

        flags.remove(QcFlags::HUMIDITY);
        assert_eq!(flags, QcFlags::COMPUTED);

        flags.remove(QcFlags::COMPUTED);
        assert!(flags.is_empty());
    }

    #[test]
    fn test_qc_display() {
        assert_eq!(QcFlags::empty().to_string(), "none");
        let flags = QcFlags::from_bits(0b1000_0101);
        assert_eq!(flags.to_string(), "temperature|wind_speed|estimated");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", RecordKind::Daily), "daily");
        assert_eq!(format!("{}", RecordKind::Hourly), "hourly");
    }
}
