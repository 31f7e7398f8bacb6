//! Summary statistics over daily records.
//!
//! Temperatures and ET are converted to physical units before
//! aggregating. Min and max are seeded from the first record rather than
//! from sentinel values.

use tracing::debug;

use crate::record::DailyRecord;
use crate::scale;

/// Temperature extremes, mean temperature, and total ET.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyStats {
    /// °C.
    pub min_temp: f32,
    /// °C.
    pub max_temp: f32,
    /// °C.
    pub avg_temp: f32,
    /// mm.
    pub total_et: f32,
    pub record_count: u32,
}

/// Running aggregate, fed one record at a time.
///
/// Useful when records come from a [`RecordIterator`](crate::RecordIterator)
/// and never sit in a slice.
#[derive(Debug, Clone, Default)]
pub struct StatsAccumulator {
    extremes: Option<(f32, f32)>,
    sum_temp: f32,
    total_et: f32,
    count: u64,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the aggregate.
    pub fn push(&mut self, record: &DailyRecord) {
        let temp = scale::temperature_to_float(record.temperature);
        let et = scale::et_daily_to_float(record.et);

        self.extremes = Some(match self.extremes {
            None => (temp, temp),
            Some((min, max)) => (min.min(temp), max.max(temp)),
        });
        self.sum_temp += temp;
        self.total_et += et;
        self.count = self.count.saturating_add(1);
    }

    /// Records pushed so far, saturating at `u64::MAX`.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// `None` if nothing was pushed. `record_count` saturates at `u32::MAX`.
    pub fn finish(&self) -> Option<DailyStats> {
        let (min_temp, max_temp) = self.extremes?;
        Some(DailyStats {
            min_temp,
            max_temp,
            avg_temp: self.sum_temp / self.count as f32,
            total_et: self.total_et,
            record_count: u32::try_from(self.count).unwrap_or(u32::MAX),
        })
    }
}

impl<'a> Extend<&'a DailyRecord> for StatsAccumulator {
    fn extend<I: IntoIterator<Item = &'a DailyRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

impl Extend<DailyRecord> for StatsAccumulator {
    fn extend<I: IntoIterator<Item = DailyRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(&record);
        }
    }
}

impl<'a> FromIterator<&'a DailyRecord> for StatsAccumulator {
    fn from_iter<I: IntoIterator<Item = &'a DailyRecord>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl FromIterator<DailyRecord> for StatsAccumulator {
    fn from_iter<I: IntoIterator<Item = DailyRecord>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Statistics over `records`, or `None` when the slice is empty.
pub fn calculate_daily_stats(records: &[DailyRecord]) -> Option<DailyStats> {
    let stats = records.iter().collect::<StatsAccumulator>().finish()?;
    debug!(
        count = stats.record_count,
        min = stats.min_temp,
        max = stats.max_temp,
        avg = stats.avg_temp,
        total_et = stats.total_et,
        "daily stats"
    );
    Some(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::encode_daily_batch;
    use crate::reader::daily_records;

    fn with_temps(temps: &[i16]) -> Vec<DailyRecord> {
        temps
            .iter()
            .enumerate()
            .map(|(i, &t)| DailyRecord {
                timestamp: i as u32,
                station_id: 1,
                temperature: t,
                et: 250,
                ..DailyRecord::default()
            })
            .collect()
    }

    #[test]
    fn test_basic_stats() {
        let stats = calculate_daily_stats(&with_temps(&[100, 200, 300])).unwrap();
        assert!((stats.min_temp - 10.0).abs() < 1e-5);
        assert!((stats.max_temp - 30.0).abs() < 1e-5);
        assert!((stats.avg_temp - 20.0).abs() < 1e-5);
        assert!((stats.total_et - 7.5).abs() < 1e-5);
        assert_eq!(stats.record_count, 3);
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(calculate_daily_stats(&[]), None);
        assert_eq!(StatsAccumulator::new().finish(), None);
    }

    #[test]
    fn test_single_record() {
        let stats = calculate_daily_stats(&with_temps(&[-123])).unwrap();
        assert_eq!(stats.min_temp, stats.max_temp);
        assert!((stats.avg_temp - (-12.3)).abs() < 1e-5);
        assert_eq!(stats.record_count, 1);
    }

    #[test]
    fn test_extremes_beyond_old_sentinels() {
        // Raw values decode to ±3276.8 °C, outside a ±1000 sentinel seed.
        let stats = calculate_daily_stats(&with_temps(&[i16::MAX, i16::MIN])).unwrap();
        assert!((stats.max_temp - 3276.7).abs() < 1e-2);
        assert!((stats.min_temp - (-3276.8)).abs() < 1e-2);
    }

    #[test]
    fn test_negative_et_is_summed() {
        let mut records = with_temps(&[0, 0]);
        records[0].et = -100;
        records[1].et = 300;
        let stats = calculate_daily_stats(&records).unwrap();
        assert!((stats.total_et - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_streaming_matches_slice() {
        let records = with_temps(&[55, -20, 310, 0, 125]);
        let mut buf = vec![0u8; records.len() * 16];
        encode_daily_batch(&records, &mut buf);

        let mut acc = StatsAccumulator::new();
        acc.extend(daily_records(&buf));
        assert_eq!(acc.count(), 5);
        assert_eq!(acc.finish(), calculate_daily_stats(&records));
    }

    #[test]
    fn test_collect_into_accumulator() {
        let records = with_temps(&[10, 20, 30]);
        let by_ref: StatsAccumulator = records.iter().collect();
        let by_value: StatsAccumulator = records.clone().into_iter().collect();
        assert_eq!(by_ref.count(), 3);
        assert_eq!(by_ref.finish(), by_value.finish());

        let streamed: StatsAccumulator = daily_records(&[]).collect();
        assert_eq!(streamed.finish(), None);
    }

    #[test]
    fn test_count_saturates() {
        let record = DailyRecord::new(1).with_temperature(5.0);

        let mut acc = StatsAccumulator {
            count: u64::from(u32::MAX),
            ..StatsAccumulator::new()
        };
        acc.push(&record);
        assert_eq!(acc.count(), u64::from(u32::MAX) + 1);
        assert_eq!(acc.finish().unwrap().record_count, u32::MAX);

        let mut acc = StatsAccumulator {
            count: u64::MAX,
            ..StatsAccumulator::new()
        };
        acc.push(&record);
        assert_eq!(acc.count(), u64::MAX);
    }
}
