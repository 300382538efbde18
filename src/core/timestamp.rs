#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const DECIS_PER_SECOND: i64 = 10;
const NANOS_PER_DECI: u32 = 100_000_000;

/// A point in time with decisecond precision, relative to the Unix epoch.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    deciseconds: i64,
}

impl Timestamp {
    /// Builds a timestamp from a count of deciseconds since the Unix epoch.
    pub fn from_deciseconds(deciseconds: i64) -> Self {
        Self { deciseconds }
    }

    /// Whole seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.deciseconds.div_euclid(DECIS_PER_SECOND)
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.deciseconds.rem_euclid(DECIS_PER_SECOND) as u32 * NANOS_PER_DECI
    }

    pub fn deciseconds(&self) -> i64 {
        self.deciseconds
    }
}

impl From<Timestamp> for SystemTime {
    fn from(t: Timestamp) -> Self {
        let seconds = t.seconds();
        let subsec = Duration::from_nanos(u64::from(t.subsec_nanos()));
        if seconds >= 0 {
            UNIX_EPOCH + Duration::from_secs(seconds.unsigned_abs()) + subsec
        } else {
            UNIX_EPOCH - Duration::from_secs(seconds.unsigned_abs()) + subsec
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}",
            self.seconds(),
            self.deciseconds.rem_euclid(DECIS_PER_SECOND)
        )
    }
}
