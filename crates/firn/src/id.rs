use core::fmt;

/// A 64-bit packed node-scoped ID
///
/// - 1 bit reserved (keeps the raw `i64` non-negative)
/// - 41 bits timestamp (ms since the generator's epoch)
/// - 4 bits data-center ID
/// - 8 bits worker ID
/// - 10 bits sequence
///
/// ```text
///  Bit Index:  63           63 62            22 21              18 17            10 9              0
///              +--------------+----------------+------------------+---------------+---------------+
///  Field:      | reserved (1) | timestamp (41) | data center (4)  | worker (8)    | sequence (10) |
///              +--------------+----------------+------------------+---------------+---------------+
///              |<------------------ MSB ------------- 64 bits ------------- LSB ----------------->|
/// ```
///
/// The 41-bit timestamp field gives roughly a 69-year operating window from
/// the epoch. IDs from generators sharing an epoch sort by creation time
/// first, then by `(data_center_id, worker_id, sequence)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FirnId {
    id: i64,
}

const _: () = {
    // Compile-time check: the field widths plus the reserved sign bit _must_
    // fill the backing integer exactly.
    assert!(
        1 + FirnId::TIMESTAMP_BITS
            + FirnId::DATA_CENTER_ID_BITS
            + FirnId::WORKER_ID_BITS
            + FirnId::SEQUENCE_BITS
            == i64::BITS as i64,
        "FirnId layout must fill the underlying integer type"
    );
};

impl FirnId {
    /// Width of the timestamp field in bits.
    pub const TIMESTAMP_BITS: i64 = 41;

    /// Width of the data-center ID field in bits.
    pub const DATA_CENTER_ID_BITS: i64 = 4;

    /// Width of the worker ID field in bits.
    pub const WORKER_ID_BITS: i64 = 8;

    /// Width of the sequence field in bits.
    pub const SEQUENCE_BITS: i64 = 10;

    /// Bitmask for extracting the 41-bit timestamp field. Occupies bits 22
    /// through 62.
    pub const TIMESTAMP_MASK: i64 = (1 << Self::TIMESTAMP_BITS) - 1;

    /// Bitmask for extracting the 4-bit data-center ID field. Occupies bits
    /// 18 through 21.
    pub const DATA_CENTER_ID_MASK: i64 = (1 << Self::DATA_CENTER_ID_BITS) - 1;

    /// Bitmask for extracting the 8-bit worker ID field. Occupies bits 10
    /// through 17.
    pub const WORKER_ID_MASK: i64 = (1 << Self::WORKER_ID_BITS) - 1;

    /// Bitmask for extracting the 10-bit sequence field. Occupies bits 0
    /// through 9.
    pub const SEQUENCE_MASK: i64 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Number of bits to shift the timestamp to its correct position (bit 22).
    pub const TIMESTAMP_SHIFT: i64 = Self::DATA_CENTER_ID_SHIFT + Self::DATA_CENTER_ID_BITS;

    /// Number of bits to shift the data-center ID to its correct position
    /// (bit 18).
    pub const DATA_CENTER_ID_SHIFT: i64 = Self::WORKER_ID_SHIFT + Self::WORKER_ID_BITS;

    /// Number of bits to shift the worker ID to its correct position (bit 10).
    pub const WORKER_ID_SHIFT: i64 = Self::SEQUENCE_BITS;

    /// Number of bits to shift the sequence field (bit 0).
    pub const SEQUENCE_SHIFT: i64 = 0;

    /// Packs the four components into an ID.
    ///
    /// Every component is masked to its field width before being shifted into
    /// position, so inputs wider than their field wrap silently.
    pub const fn from(timestamp: i64, data_center_id: i64, worker_id: i64, sequence: i64) -> Self {
        let timestamp = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let data_center_id =
            (data_center_id & Self::DATA_CENTER_ID_MASK) << Self::DATA_CENTER_ID_SHIFT;
        let worker_id = (worker_id & Self::WORKER_ID_MASK) << Self::WORKER_ID_SHIFT;
        let sequence = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
        Self {
            id: timestamp | data_center_id | worker_id | sequence,
        }
    }

    /// Extracts the timestamp (ms since the generating epoch) from the packed
    /// ID.
    pub const fn timestamp(&self) -> i64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the data-center ID from the packed ID.
    pub const fn data_center_id(&self) -> i64 {
        (self.id >> Self::DATA_CENTER_ID_SHIFT) & Self::DATA_CENTER_ID_MASK
    }

    /// Extracts the worker ID from the packed ID.
    pub const fn worker_id(&self) -> i64 {
        (self.id >> Self::WORKER_ID_SHIFT) & Self::WORKER_ID_MASK
    }

    /// Extracts the sequence number from the packed ID.
    pub const fn sequence(&self) -> i64 {
        (self.id >> Self::SEQUENCE_SHIFT) & Self::SEQUENCE_MASK
    }

    /// Returns the maximum representable timestamp value.
    pub const fn max_timestamp() -> i64 {
        Self::TIMESTAMP_MASK
    }

    /// Returns the maximum representable data-center ID.
    pub const fn max_data_center_id() -> i64 {
        Self::DATA_CENTER_ID_MASK
    }

    /// Returns the maximum representable worker ID.
    pub const fn max_worker_id() -> i64 {
        Self::WORKER_ID_MASK
    }

    /// Returns the maximum representable sequence value.
    pub const fn max_sequence() -> i64 {
        Self::SEQUENCE_MASK
    }

    /// Converts this ID into its raw `i64` representation.
    ///
    /// The reserved bit is never set, so the raw value is always
    /// non-negative.
    pub const fn to_raw(&self) -> i64 {
        self.id
    }

    /// Converts a raw `i64` into an ID.
    pub const fn from_raw(raw: i64) -> Self {
        Self { id: raw }
    }

    /// Returns the ID as a zero-padded 19-digit string.
    pub fn to_padded_string(&self) -> String {
        format!("{:019}", self.id)
    }
}

impl fmt::Display for FirnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for FirnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirnId")
            .field("id", &self.id)
            .field("timestamp", &self.timestamp())
            .field("data_center_id", &self.data_center_id())
            .field("worker_id", &self.worker_id())
            .field("sequence", &self.sequence())
            .finish()
    }
}

impl From<FirnId> for i64 {
    fn from(id: FirnId) -> i64 {
        id.to_raw()
    }
}

impl From<i64> for FirnId {
    fn from(raw: i64) -> FirnId {
        FirnId::from_raw(raw)
    }
}
