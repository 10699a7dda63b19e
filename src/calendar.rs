//! The calendar primitive behind month-boundary detection.
//!
//! The weighting core only needs four operations from a calendar: the start
//! of the current month, whole-month arithmetic, and the year/month fields of
//! the result. [`MonthCalendar`] captures exactly that seam, and
//! [`ZonedCalendar`] implements it for the proleptic Gregorian calendar in a
//! fixed `chrono_tz` zone.

use chrono::offset::LocalResult;
use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimegrainError;

/// First instant of a calendar month in a fixed calendar/timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthStart {
    /// The instant, in milliseconds since the Unix epoch.
    pub epoch_ms: i64,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1..=12.
    pub month: u32,
}

/// Calendar capability required by the month boundary cache.
///
/// Any implementation that can produce the current month's start and shift a
/// month start by a whole number of months satisfies the contract; the cache
/// never does calendar arithmetic itself.
pub trait MonthCalendar {
    /// The start of the month containing "now".
    ///
    /// # Errors
    /// Returns [`TimegrainError::Calendar`] if the month start cannot be
    /// resolved to a valid instant.
    fn current_month_start(&self) -> Result<MonthStart, TimegrainError>;

    /// The month start `months` whole months after `from` (negative values
    /// shift into the past).
    ///
    /// # Errors
    /// Returns [`TimegrainError::Calendar`] if the shifted month falls
    /// outside the calendar's representable range.
    fn add_months(&self, from: &MonthStart, months: i32) -> Result<MonthStart, TimegrainError>;
}

/// Proleptic Gregorian calendar pinned to a single timezone.
///
/// Month starts resolve to local midnight on the first of the month. Around
/// DST transitions the earlier of an ambiguous pair is taken, and a midnight
/// erased by a forward jump resolves to the first instant after the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedCalendar {
    tz: Tz,
}

impl ZonedCalendar {
    /// A calendar in the given timezone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// A calendar in UTC.
    #[must_use]
    pub const fn utc() -> Self {
        Self { tz: chrono_tz::UTC }
    }

    fn month_start(&self, year: i32, month: u32) -> Result<MonthStart, TimegrainError> {
        let midnight = NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| {
                TimegrainError::calendar(format!("month {year}-{month:02} is out of range"))
            })?;

        let instant = match self.tz.from_local_datetime(&midnight) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(dt, _) => dt,
            LocalResult::None => {
                // Midnight erased by a DST forward jump; the month begins at
                // the first instant after the gap, within the next hour.
                match self.tz.from_local_datetime(&(midnight + Duration::hours(1))) {
                    LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
                    LocalResult::None => {
                        return Err(TimegrainError::calendar(format!(
                            "no valid instant for {year}-{month:02}-01 in {}",
                            self.tz
                        )));
                    }
                }
            }
        };

        Ok(MonthStart {
            epoch_ms: instant.timestamp_millis(),
            year,
            month,
        })
    }
}

impl MonthCalendar for ZonedCalendar {
    fn current_month_start(&self) -> Result<MonthStart, TimegrainError> {
        let now = Utc::now().with_timezone(&self.tz);
        self.month_start(now.year(), now.month())
    }

    fn add_months(&self, from: &MonthStart, months: i32) -> Result<MonthStart, TimegrainError> {
        // Whole-month arithmetic on a (year, month0) offset; never a fixed
        // day count.
        let month0 = i64::from(from.year) * 12 + (i64::from(from.month) - 1) + i64::from(months);
        let year = i32::try_from(month0.div_euclid(12)).map_err(|_| {
            TimegrainError::calendar(format!("month offset {month0} overflows the calendar"))
        })?;
        let month = u32::try_from(month0.rem_euclid(12) + 1)
            .map_err(|_| TimegrainError::calendar("month index out of range"))?;
        self.month_start(year, month)
    }
}
