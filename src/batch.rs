//! Encode and decode runs of same-kind records.
//!
//! A batch buffer is N packed records back to back: no header, count, or
//! separator. Encoding is all-or-nothing and reports `0` bytes on any
//! failure. Decoding is partial-tolerant and reports how many records it
//! produced; trailing bytes that don't make up a whole record are ignored.
//!
//! [`RecordBatch`] pairs a station id with either kind of record vector.

use tracing::debug;

use crate::record::{DailyRecord, HourlyRecord, PackedRecord};
use crate::types::RecordKind;

/// Encode `records` back to back into `buf`. Returns bytes written.
///
/// Returns `0`, leaving `buf` untouched, when `records` is empty or `buf`
/// can't hold all of them.
pub fn encode_batch<R: PackedRecord>(records: &[R], buf: &mut [u8]) -> usize {
    if records.is_empty() {
        debug!(kind = %R::KIND, "refusing to encode empty batch");
        return 0;
    }

    let required = records.len() * R::SIZE;
    if buf.len() < required {
        debug!(
            kind = %R::KIND,
            count = records.len(),
            required,
            available = buf.len(),
            "batch buffer too small"
        );
        return 0;
    }

    for (record, chunk) in records.iter().zip(buf.chunks_exact_mut(R::SIZE)) {
        if let Err(e) = record.encode_into(chunk) {
            debug!(kind = %R::KIND, error = %e, "batch encode failed");
            return 0;
        }
    }

    required
}

/// Decode up to `out.len()` records from `data` into `out`.
///
/// Returns the number of records written to the front of `out`, at most
/// `min(data.len() / R::SIZE, out.len())`.
pub fn decode_batch<R: PackedRecord>(data: &[u8], out: &mut [R]) -> usize {
    let available = data.len() / R::SIZE;
    let count = available.min(out.len());

    let trailing = data.len() % R::SIZE;
    if trailing != 0 {
        debug!(kind = %R::KIND, trailing, "ignoring partial trailing record");
    }

    for (i, (slot, chunk)) in out
        .iter_mut()
        .zip(data.chunks_exact(R::SIZE))
        .take(count)
        .enumerate()
    {
        match R::decode_from(chunk) {
            Ok(record) => *slot = record,
            Err(e) => {
                debug!(kind = %R::KIND, decoded = i, error = %e, "batch decode stopped early");
                return i;
            }
        }
    }

    count
}

/// Decode up to `max_count` records from `data` into a new vector.
pub fn decode_batch_vec<R: PackedRecord>(data: &[u8], max_count: usize) -> Vec<R> {
    let count = (data.len() / R::SIZE).min(max_count);
    let mut records = Vec::with_capacity(count);
    for chunk in data.chunks_exact(R::SIZE).take(count) {
        match R::decode_from(chunk) {
            Ok(record) => records.push(record),
            Err(e) => {
                debug!(kind = %R::KIND, decoded = records.len(), error = %e, "batch decode stopped early");
                break;
            }
        }
    }
    records
}

/// Encode daily records back to back; see [`encode_batch`].
pub fn encode_daily_batch(records: &[DailyRecord], buf: &mut [u8]) -> usize {
    encode_batch(records, buf)
}

/// Decode daily records into `out`; see [`decode_batch`].
pub fn decode_daily_batch(data: &[u8], out: &mut [DailyRecord]) -> usize {
    decode_batch(data, out)
}

/// Decode up to `max_count` daily records into a new `Vec`.
pub fn decode_daily_vec(data: &[u8], max_count: usize) -> Vec<DailyRecord> {
    decode_batch_vec(data, max_count)
}

/// Encode hourly records back to back; see [`encode_batch`].
pub fn encode_hourly_batch(records: &[HourlyRecord], buf: &mut [u8]) -> usize {
    encode_batch(records, buf)
}

/// Decode hourly records into `out`; see [`decode_batch`].
pub fn decode_hourly_batch(data: &[u8], out: &mut [HourlyRecord]) -> usize {
    decode_batch(data, out)
}

/// Decode up to `max_count` hourly records into a new `Vec`.
pub fn decode_hourly_vec(data: &[u8], max_count: usize) -> Vec<HourlyRecord> {
    decode_batch_vec(data, max_count)
}

/// Records of a single kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "records", rename_all = "lowercase"))]
pub enum Records {
    Daily(Vec<DailyRecord>),
    Hourly(Vec<HourlyRecord>),
}

impl Records {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Daily(_) => RecordKind::Daily,
            Self::Hourly(_) => RecordKind::Hourly,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Daily(v) => v.len(),
            Self::Hourly(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A batch of records belonging to one station.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordBatch {
    pub station_id: u16,
    pub records: Records,
}

impl RecordBatch {
    pub fn daily(station_id: u16, records: Vec<DailyRecord>) -> Self {
        Self {
            station_id,
            records: Records::Daily(records),
        }
    }

    pub fn hourly(station_id: u16, records: Vec<HourlyRecord>) -> Self {
        Self {
            station_id,
            records: Records::Hourly(records),
        }
    }

    /// Decode every whole record in `data` as `kind`.
    pub fn decode(station_id: u16, kind: RecordKind, data: &[u8]) -> Self {
        let max_count = kind.records_in(data.len());
        let records = match kind {
            RecordKind::Daily => Records::Daily(decode_batch_vec(data, max_count)),
            RecordKind::Hourly => Records::Hourly(decode_batch_vec(data, max_count)),
        };
        Self {
            station_id,
            records,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.records.kind()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Packed size of the whole batch.
    pub fn encoded_len(&self) -> usize {
        self.len() * self.kind().record_size()
    }

    /// Encode into `buf`; same all-or-nothing contract as [`encode_batch`].
    pub fn encode_into(&self, buf: &mut [u8]) -> usize {
        match &self.records {
            Records::Daily(v) => encode_batch(v, buf),
            Records::Hourly(v) => encode_batch(v, buf),
        }
    }

    /// Packed bytes of the whole batch. Empty for an empty batch.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.encoded_len()];
        let written = self.encode_into(&mut buf);
        buf.truncate(written);
        buf
    }
}
