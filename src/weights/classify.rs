//! Classification of the boundary strength between two adjacent instants.

use crate::calendar::MonthCalendar;
use crate::error::TimegrainError;
use crate::types::TickMarkWeight;
use crate::weights::month_cache::MonthStartCache;

const fn seconds(count: i64) -> i64 {
    count * 1_000
}

const fn minutes(count: i64) -> i64 {
    count * 60_000
}

const fn hours(count: i64) -> i64 {
    count * 3_600_000
}

pub(crate) const MS_PER_DAY: i64 = hours(24);

struct WeightDivisor {
    divisor_ms: i64,
    weight: TickMarkWeight,
}

/// Sub-day granularity thresholds, ascending by divisor. Scanned from the
/// coarse end: the first divisor whose buckets differ names the coarsest
/// unit at which the two instants differ.
const INTRADAY_WEIGHT_DIVISORS: [WeightDivisor; 8] = [
    WeightDivisor { divisor_ms: seconds(1), weight: TickMarkWeight::Second },
    WeightDivisor { divisor_ms: minutes(1), weight: TickMarkWeight::Minute1 },
    WeightDivisor { divisor_ms: minutes(5), weight: TickMarkWeight::Minute5 },
    WeightDivisor { divisor_ms: minutes(30), weight: TickMarkWeight::Minute30 },
    WeightDivisor { divisor_ms: hours(1), weight: TickMarkWeight::Hour1 },
    WeightDivisor { divisor_ms: hours(3), weight: TickMarkWeight::Hour3 },
    WeightDivisor { divisor_ms: hours(6), weight: TickMarkWeight::Hour6 },
    WeightDivisor { divisor_ms: hours(12), weight: TickMarkWeight::Hour12 },
];

/// Coarsest calendar unit at which two instants (milliseconds since epoch)
/// differ, checked year-first: calendar year, calendar month, day offset
/// within the month, then the intraday divisor table from 12 hours down to
/// 1 second. Two instants inside the same calendar second yield
/// [`TickMarkWeight::LessThanSecond`].
///
/// The output is meaningful for `current_ms >= prev_ms` (the adjacent-pair
/// ordering of a sorted series); the function itself does not check the
/// ordering.
///
/// # Errors
/// Propagates month-cache lookup failures.
pub fn weight_by_time<C: MonthCalendar>(
    cache: &mut MonthStartCache<C>,
    current_ms: i64,
    prev_ms: i64,
) -> Result<TickMarkWeight, TimegrainError> {
    let current_month = cache.month_start(current_ms)?;
    let prev_month = cache.month_start(prev_ms)?;

    if current_month.year != prev_month.year {
        return Ok(TickMarkWeight::Year);
    }
    if current_month.month != prev_month.month {
        return Ok(TickMarkWeight::Month);
    }

    let current_day = (current_ms - current_month.epoch_ms).div_euclid(MS_PER_DAY);
    let prev_day = (prev_ms - prev_month.epoch_ms).div_euclid(MS_PER_DAY);
    if current_day != prev_day {
        return Ok(TickMarkWeight::Day);
    }

    for d in INTRADAY_WEIGHT_DIVISORS.iter().rev() {
        if prev_ms.div_euclid(d.divisor_ms) != current_ms.div_euclid(d.divisor_ms) {
            return Ok(d.weight);
        }
    }

    Ok(TickMarkWeight::LessThanSecond)
}
