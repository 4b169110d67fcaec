//! Epoch-relative count arithmetic
//!
//! Converts between a signed 64-bit count of fixed sub-second units since an
//! origin instant and an absolute UTC timestamp.
//!
//! - Inputs in any time zone are normalized to UTC before computing
//! - Division truncates toward zero, so precision finer than one unit is dropped
//! - Counts are exact: `to_count(to_timestamp(n)) == n` wherever `to_timestamp` succeeds

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Configuration of one member of the epoch timestamp family.
///
/// The name, origin and scale always travel together; a sibling precision
/// needs its own `EpochUnit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochUnit {
    /// Logical type name used as the schema annotation
    pub name: &'static str,
    /// Instant that count zero maps to
    pub origin: DateTime<Utc>,
    /// Nanoseconds represented by one count step
    pub nanos_per_count: i64,
}

impl EpochUnit {
    /// `timestamp-micros`: microseconds since 1970-01-01T00:00:00Z
    pub const MICROS: EpochUnit = EpochUnit {
        name: "timestamp-micros",
        origin: DateTime::<Utc>::UNIX_EPOCH,
        nanos_per_count: 1_000,
    };

    /// Every unit available for lookup by name
    pub const ALL: &'static [EpochUnit] = &[EpochUnit::MICROS];

    /// Looks up a unit by its logical type name
    pub fn by_name(name: &str) -> Option<EpochUnit> {
        Self::ALL.iter().copied().find(|unit| unit.name == name)
    }
}

/// Pure arithmetic between counts and timestamps for one `EpochUnit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochConverter {
    unit: EpochUnit,
}

impl EpochConverter {
    /// Create a converter for the given unit
    pub const fn new(unit: EpochUnit) -> Self {
        Self { unit }
    }

    /// Returns the unit this converter works in
    pub fn unit(&self) -> &EpochUnit {
        &self.unit
    }

    /// Converts a timestamp to a count of units since the origin.
    ///
    /// The input is converted to UTC first, whatever offset it carries.
    /// Timestamps before the origin give negative counts. Overflow of the
    /// result is not guarded; with microsecond units every representable
    /// `DateTime` fits in an `i64`.
    pub fn to_count<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> i64 {
        let utc = timestamp.with_timezone(&Utc);
        let delta = utc.signed_duration_since(self.unit.origin);

        let nanos = i128::from(delta.num_seconds()) * NANOS_PER_SECOND
            + i128::from(delta.subsec_nanos());

        // i128 division truncates toward zero
        (nanos / i128::from(self.unit.nanos_per_count)) as i64
    }

    /// Converts a count of units since the origin to a UTC timestamp.
    ///
    /// Returns `None` when the result falls outside the range `DateTime<Utc>`
    /// can represent. Range checks are left to the caller.
    pub fn to_timestamp(&self, count: i64) -> Option<DateTime<Utc>> {
        let nanos = i128::from(count) * i128::from(self.unit.nanos_per_count);

        let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND)).ok()?;
        let subsec = u32::try_from(nanos.rem_euclid(NANOS_PER_SECOND)).ok()?;

        let offset = TimeDelta::new(secs, subsec)?;
        self.unit.origin.checked_add_signed(offset)
    }
}

impl Default for EpochConverter {
    fn default() -> Self {
        Self::new(EpochUnit::MICROS)
    }
}
