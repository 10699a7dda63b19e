//! Tick-mark weight generation for sorted time series.
//!
//! Modules include:
//! - `month_cache`: lazily-expanding index of month start instants
//! - `classify`: coarsest-differing-unit classification of adjacent instants
//! - `fill`: single-pass weight assignment over a sorted slice
//!
//! [`WeightGenerator`] bundles the three behind one object owning the month
//! cache; the free functions stay available for callers that manage a cache
//! themselves.

/// Coarsest-differing-unit classification for adjacent instants.
pub mod classify;
/// Single-pass weight assignment over a sorted series.
pub mod fill;
/// Lazily-expanding month boundary index.
pub mod month_cache;

use chrono_tz::Tz;

use crate::calendar::{MonthCalendar, ZonedCalendar};
use crate::error::TimegrainError;
use crate::types::{TickMarkWeight, TimePoint, WeightedTimePoint};
use month_cache::MonthStartCache;

/// Assigns granularity weights to the points of a sorted time series.
///
/// Owns one [`MonthStartCache`]; construct one generator per chart instance
/// so independent charts neither contend nor grow each other's cache.
///
/// ```
/// use timegrain::{TickMarkWeight, TimePoint, WeightGenerator};
///
/// let mut generator = WeightGenerator::utc()?;
/// // 2023-12-31T23:59:59Z vs 2024-01-01T00:00:05Z: six seconds apart, but
/// // the year boundary dominates.
/// let w = generator.weight_by_time(
///     TimePoint::from_timestamp(1_704_067_205),
///     TimePoint::from_timestamp(1_704_067_199),
/// )?;
/// assert_eq!(w, TickMarkWeight::Year);
/// # Ok::<(), timegrain::TimegrainError>(())
/// ```
#[derive(Debug)]
pub struct WeightGenerator<C = ZonedCalendar> {
    cache: MonthStartCache<C>,
}

impl WeightGenerator<ZonedCalendar> {
    /// A generator over the Gregorian calendar in UTC.
    ///
    /// # Errors
    /// Propagates calendar failures from the initial cache seeding.
    pub fn utc() -> Result<Self, TimegrainError> {
        Self::with_calendar(ZonedCalendar::utc())
    }

    /// A generator over the Gregorian calendar in the given timezone.
    ///
    /// # Errors
    /// Propagates calendar failures from the initial cache seeding.
    pub fn for_timezone(tz: Tz) -> Result<Self, TimegrainError> {
        Self::with_calendar(ZonedCalendar::new(tz))
    }
}

impl<C: MonthCalendar> WeightGenerator<C> {
    /// A generator over a caller-supplied calendar implementation.
    ///
    /// # Errors
    /// Propagates calendar failures from the initial cache seeding.
    pub fn with_calendar(calendar: C) -> Result<Self, TimegrainError> {
        Ok(Self {
            cache: MonthStartCache::new(calendar)?,
        })
    }

    /// Coarsest calendar unit at which `current` differs from `previous`.
    /// Meaningful for `current >= previous`; see [`classify::weight_by_time`].
    ///
    /// # Errors
    /// Propagates month-cache lookup failures.
    pub fn weight_by_time(
        &mut self,
        current: TimePoint,
        previous: TimePoint,
    ) -> Result<TickMarkWeight, TimegrainError> {
        classify::weight_by_time(
            &mut self.cache,
            current.timestamp_millis(),
            previous.timestamp_millis(),
        )
    }

    /// Assign weights to an entire sorted series; see [`fill::fill_weights`].
    ///
    /// # Errors
    /// Propagates classification failures.
    pub fn fill_weights(
        &mut self,
        points: &mut [WeightedTimePoint],
    ) -> Result<(), TimegrainError> {
        fill::fill_weights(&mut self.cache, points, 0)
    }

    /// Assign weights from `start_index` onwards, treating earlier points as
    /// already-weighted context; see [`fill::fill_weights`].
    ///
    /// # Errors
    /// Propagates classification failures.
    pub fn fill_weights_from(
        &mut self,
        points: &mut [WeightedTimePoint],
        start_index: usize,
    ) -> Result<(), TimegrainError> {
        fill::fill_weights(&mut self.cache, points, start_index)
    }
}
