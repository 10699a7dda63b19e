//! Single-pass weight assignment over a sorted series.

use crate::calendar::MonthCalendar;
use crate::error::TimegrainError;
use crate::types::WeightedTimePoint;
use crate::weights::classify::weight_by_time;
use crate::weights::month_cache::MonthStartCache;

/// Assign a tick-mark weight to every point at index `start_index` and later,
/// each classified against its immediate predecessor.
///
/// Points before `start_index` are read-only context: when `start_index > 0`
/// the point at `start_index - 1` supplies the first predecessor, so
/// `start_index` must be at most `points.len()` and the predecessor index
/// must be in bounds. Sortedness of the input is a caller precondition and is
/// not verified.
///
/// When `start_index == 0` and the series has more than one point, the first
/// point has no predecessor; it is classified against a synthetic one placed
/// a mean adjacent gap (rounded up) before it. That guess assumes the point
/// "before the start of history" arrived one average interval earlier; it is
/// a plausibility heuristic, not a guarantee of consistency with the
/// neighboring weights. A single-point series is left unweighted.
///
/// ```
/// use timegrain::{MonthStartCache, TimePoint, WeightedTimePoint, ZonedCalendar, fill_weights};
///
/// let mut cache = MonthStartCache::new(ZonedCalendar::utc())?;
/// // 2024-01-15T10:00:00Z onwards, one point per minute.
/// let mut points: Vec<WeightedTimePoint> = (0..3)
///     .map(|i| WeightedTimePoint::unweighted(TimePoint::from_timestamp(1_705_312_800 + i * 60)))
///     .collect();
/// fill_weights(&mut cache, &mut points, 0)?;
/// assert!(points.iter().all(|p| p.time_weight.is_some()));
/// # Ok::<(), timegrain::TimegrainError>(())
/// ```
///
/// # Errors
/// Propagates classification failures; weights already written during a
/// failed pass are left in place.
pub fn fill_weights<C: MonthCalendar>(
    cache: &mut MonthStartCache<C>,
    points: &mut [WeightedTimePoint],
    start_index: usize,
) -> Result<(), TimegrainError> {
    if points.is_empty() {
        return Ok(());
    }

    let mut prev_ts: Option<i64> = if start_index == 0 {
        None
    } else {
        Some(points[start_index - 1].time.timestamp)
    };
    let mut total_gap: i64 = 0;

    for point in &mut points[start_index..] {
        let ts = point.time.timestamp;
        if let Some(prev) = prev_ts {
            point.time_weight = Some(weight_by_time(cache, ts * 1_000, prev * 1_000)?);
            total_gap += ts - prev;
        }
        prev_ts = Some(ts);
    }

    if start_index == 0 && points.len() > 1 {
        // Guess a weight for the first point by pretending its predecessor
        // sat one mean adjacent gap back in history.
        let pairs = points.len() as i64 - 1;
        // `i64::div_ceil` is unstable on this toolchain; this is the same
        // round-toward-positive-infinity division.
        let mean_gap = {
            let (q, r) = (total_gap / pairs, total_gap % pairs);
            if r != 0 && (r > 0) == (pairs > 0) { q + 1 } else { q }
        };
        let first_ts = points[0].time.timestamp;
        let synthetic_prev = first_ts - mean_gap;
        points[0].time_weight =
            Some(weight_by_time(cache, first_ts * 1_000, synthetic_prev * 1_000)?);
    }

    Ok(())
}
