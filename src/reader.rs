//! Forward-only readers over a buffer of packed records.
//!
//! [`RecordIterator`] is a kind-tagged cursor: create it for daily or
//! hourly data, then pull records one at a time with
//! [`next_daily`](RecordIterator::next_daily) or
//! [`next_hourly`](RecordIterator::next_hourly). [`RecordReader`] is the typed
//! alternative that plugs into `for` loops and iterator adapters.
//!
//! Neither copies or owns the buffer, and neither can rewind.

use std::marker::PhantomData;

use tracing::trace;

use crate::record::{DailyRecord, HourlyRecord, PackedRecord};
use crate::types::RecordKind;
use crate::{CodecError, Result, decode};

/// Cursor over daily or hourly records in a byte slice.
///
/// # Example
///
/// ```
/// use cimis_codec::{DailyRecord, RecordIterator, RecordKind, encode_daily_batch};
///
/// let records = [DailyRecord::new(1), DailyRecord::new(2)];
/// let mut buf = [0u8; 32];
/// encode_daily_batch(&records, &mut buf);
///
/// let mut iter = RecordIterator::new(&buf, RecordKind::Daily);
/// while iter.has_next() {
///     let record = iter.next_daily().unwrap();
///     assert!(record.station_id > 0);
/// }
/// assert!(iter.next_daily().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RecordIterator<'a> {
    data: &'a [u8],
    offset: usize,
    record_count: usize,
    kind: RecordKind,
}

impl<'a> RecordIterator<'a> {
    /// Create a cursor at the start of `data`.
    pub fn new(data: &'a [u8], kind: RecordKind) -> Self {
        Self {
            data,
            offset: 0,
            record_count: kind.records_in(data.len()),
            kind,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Whole records in the buffer, fixed at creation.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whole records not yet read.
    pub fn remaining(&self) -> usize {
        self.kind.records_in(self.data.len() - self.offset)
    }

    pub fn has_next(&self) -> bool {
        self.offset + self.kind.record_size() <= self.data.len()
    }

    /// Decode the next record. Fails on an hourly iterator.
    pub fn next_daily(&mut self) -> Result<DailyRecord> {
        let chunk = self.advance(RecordKind::Daily)?;
        decode::decode_daily(chunk)
    }

    /// Decode the next record. Fails on a daily iterator.
    pub fn next_hourly(&mut self) -> Result<HourlyRecord> {
        let chunk = self.advance(RecordKind::Hourly)?;
        decode::decode_hourly(chunk)
    }

    /// Check kind and bounds, then move past the next record and return it.
    /// The offset is left alone on error.
    fn advance(&mut self, requested: RecordKind) -> Result<&'a [u8]> {
        if requested != self.kind {
            return Err(CodecError::KindMismatch {
                expected: requested,
                actual: self.kind,
            });
        }
        if !self.has_next() {
            return Err(CodecError::Exhausted {
                offset: self.offset,
            });
        }

        let start = self.offset;
        self.offset += self.kind.record_size();
        trace!(kind = %self.kind, offset = start, "advance");
        Ok(&self.data[start..self.offset])
    }
}

/// Typed iterator over packed records of kind `R`.
///
/// Yields every whole record in order and stops at the first incomplete
/// one.
#[derive(Debug, Clone)]
pub struct RecordReader<'a, R> {
    data: &'a [u8],
    offset: usize,
    _record: PhantomData<R>,
}

impl<'a, R: PackedRecord> RecordReader<'a, R> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            _record: PhantomData,
        }
    }
}

impl<R: PackedRecord> Iterator for RecordReader<'_, R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let end = self.offset + R::SIZE;
        if end > self.data.len() {
            return None;
        }
        let record = R::decode_from(&self.data[self.offset..end]).ok()?;
        self.offset = end;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.data.len() - self.offset) / R::SIZE;
        (n, Some(n))
    }
}

impl<R: PackedRecord> ExactSizeIterator for RecordReader<'_, R> {}

/// Iterate the daily records packed in `data`.
pub fn daily_records(data: &[u8]) -> RecordReader<'_, DailyRecord> {
    RecordReader::new(data)
}

/// Iterate the hourly records packed in `data`.
pub fn hourly_records(data: &[u8]) -> RecordReader<'_, HourlyRecord> {
    RecordReader::new(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{encode_daily_batch, encode_hourly_batch};

    fn two_daily() -> Vec<u8> {
        let records = [
            DailyRecord::new(1).with_timestamp(10),
            DailyRecord::new(2).with_timestamp(11),
        ];
        let mut buf = vec![0u8; 32];
        assert_eq!(encode_daily_batch(&records, &mut buf), 32);
        buf
    }

    #[test]
    fn test_iterator_yields_then_exhausts() {
        let buf = two_daily();
        let mut iter = RecordIterator::new(&buf, RecordKind::Daily);
        assert_eq!(iter.record_count(), 2);
        assert_eq!(iter.remaining(), 2);

        assert!(iter.has_next());
        assert_eq!(iter.next_daily().unwrap().station_id, 1);
        assert_eq!(iter.offset(), 16);
        assert_eq!(iter.remaining(), 1);

        assert!(iter.has_next());
        assert_eq!(iter.next_daily().unwrap().station_id, 2);
        assert_eq!(iter.offset(), 32);

        assert!(!iter.has_next());
        assert_eq!(
            iter.next_daily().unwrap_err(),
            CodecError::Exhausted { offset: 32 }
        );
        // still exhausted, offset unchanged
        assert!(iter.next_daily().is_err());
        assert_eq!(iter.offset(), 32);
        assert_eq!(iter.record_count(), 2);
    }

    #[test]
    fn test_iterator_kind_mismatch() {
        let buf = two_daily();
        let mut iter = RecordIterator::new(&buf, RecordKind::Daily);
        assert_eq!(
            iter.next_hourly().unwrap_err(),
            CodecError::KindMismatch {
                expected: RecordKind::Hourly,
                actual: RecordKind::Daily,
            }
        );
        // a failed call must not consume anything
        assert_eq!(iter.offset(), 0);
        assert!(iter.next_daily().is_ok());

        let mut hourly = RecordIterator::new(&buf, RecordKind::Hourly);
        assert!(matches!(
            hourly.next_daily(),
            Err(CodecError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_iterator_partial_tail() {
        let records = [HourlyRecord::new(4), HourlyRecord::new(5)];
        let mut buf = vec![0u8; 48];
        encode_hourly_batch(&records, &mut buf);
        buf.truncate(40);

        let mut iter = RecordIterator::new(&buf, RecordKind::Hourly);
        assert_eq!(iter.record_count(), 1);
        assert_eq!(iter.next_hourly().unwrap().station_id, 4);
        assert!(!iter.has_next());
        assert!(matches!(
            iter.next_hourly(),
            Err(CodecError::Exhausted { offset: 24 })
        ));
    }

    #[test]
    fn test_iterator_empty_buffer() {
        let iter = RecordIterator::new(&[], RecordKind::Daily);
        assert!(!iter.has_next());
        assert_eq!(iter.record_count(), 0);
        assert_eq!(iter.remaining(), 0);
    }

    #[test]
    fn test_typed_records() {
        let buf = two_daily();
        let records: Vec<_> = daily_records(&buf).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp, 10);
        assert_eq!(records[1].timestamp, 11);
    }

    #[test]
    fn test_typed_records_size_hint() {
        let mut buf = two_daily();
        buf.extend_from_slice(&[0u8; 9]);
        let mut iter = daily_records(&buf);
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
        iter.next();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_typed_hourly_records() {
        let records: Vec<_> = (0..3)
            .map(|h| HourlyRecord::new(9).with_datetime(2000, 6, 1, h))
            .collect();
        let mut buf = vec![0u8; 72];
        encode_hourly_batch(&records, &mut buf);

        let hours: Vec<u32> = hourly_records(&buf).map(|r| r.hour()).collect();
        assert_eq!(hours, vec![0, 1, 2]);
    }
}
