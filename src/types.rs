//! Core data types for time points and tick-mark weights.

use serde::{Deserialize, Serialize};

/// Granularity weight of a tick mark, ordered from finest to coarsest.
///
/// The weight names the coarsest calendar unit at which a point differs from
/// its predecessor; a chart uses it to decide which axis labels deserve
/// prominence (years are labeled more sparsely than days, days more sparsely
/// than minutes, and so on).
///
/// The discriminants are the ordinals charting front ends conventionally
/// serialize, with gaps left for the same sub-groups they use; the derived
/// `Ord` agrees with the numeric order.
///
/// ```
/// use timegrain::TickMarkWeight;
///
/// assert!(TickMarkWeight::Year > TickMarkWeight::Day);
/// assert!(TickMarkWeight::Minute5 > TickMarkWeight::Minute1);
/// assert_eq!(TickMarkWeight::LessThanSecond, TickMarkWeight::MIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TickMarkWeight {
    /// Both instants fall inside the same calendar second.
    LessThanSecond = 0,
    /// The instants differ within a minute.
    Second = 10,
    /// A one-minute boundary was crossed.
    Minute1 = 20,
    /// A five-minute boundary was crossed.
    Minute5 = 21,
    /// A thirty-minute boundary was crossed.
    Minute30 = 22,
    /// A one-hour boundary was crossed.
    Hour1 = 30,
    /// A three-hour boundary was crossed.
    Hour3 = 31,
    /// A six-hour boundary was crossed.
    Hour6 = 32,
    /// A twelve-hour boundary was crossed.
    Hour12 = 33,
    /// The instants fall on different days of the same month.
    Day = 50,
    /// The instants fall in different months of the same year.
    Month = 60,
    /// The instants fall in different calendar years.
    Year = 70,
}

impl TickMarkWeight {
    /// The minimum weight in the total order.
    pub const MIN: Self = Self::LessThanSecond;

    /// Raw ordinal value, as serialized by charting front ends.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }
}

/// A single instant of a time series, in whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimePoint {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

impl TimePoint {
    /// Build a point from whole seconds since the Unix epoch.
    #[must_use]
    pub const fn from_timestamp(secs: i64) -> Self {
        Self { timestamp: secs }
    }

    /// The instant in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp_millis(self) -> i64 {
        self.timestamp * 1_000
    }
}

/// A time point plus the tick-mark weight assigned by a fill pass.
///
/// `time_weight` is `None` until a fill pass has processed the point. A
/// single-point series is deliberately left unweighted: there is no
/// predecessor to classify against and no pair gap to synthesize one from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedTimePoint {
    /// The instant this point represents.
    pub time: TimePoint,
    /// Granularity weight relative to the preceding point, once assigned.
    pub time_weight: Option<TickMarkWeight>,
}

impl WeightedTimePoint {
    /// A point that has not been weighted yet.
    #[must_use]
    pub const fn unweighted(time: TimePoint) -> Self {
        Self {
            time,
            time_weight: None,
        }
    }
}
