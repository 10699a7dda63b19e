//! Lazily-expanding index of calendar month start instants.

use std::collections::VecDeque;

use crate::calendar::{MonthCalendar, MonthStart};
use crate::error::TimegrainError;

/// Months materialized ahead of "now" at construction.
const FORWARD_PRELOAD: usize = 6;
/// Months materialized behind "now" at construction. Larger than the forward
/// preload because chart data is overwhelmingly historical.
const BACKWARD_PRELOAD: usize = 60;
/// Months added per expansion step during a lookup.
const EXPANSION_STEP: usize = 12;
/// Cap on expansion steps per direction per lookup. Each step strictly
/// shrinks the gap to the query, so hitting the cap means the instant is
/// thousands of years outside the materialized range; treat that as corrupt
/// input rather than looping for it.
const MAX_EXPANSION_STEPS: usize = 10_000;

/// Append/prepend-only index of month starts, queried by binary search.
///
/// Invariants: never empty, strictly increasing by `epoch_ms`, contiguous
/// month to month, and growing only at the front or back. The index is never
/// shrunk, so memory is proportional to the month span queried over the
/// cache's lifetime; ordinary chart usage spans a few years, making that an
/// accepted tradeoff rather than a leak.
///
/// Lookups take `&mut self` because they may materialize months, which also
/// makes the single-logical-thread requirement a compile-time fact.
#[derive(Debug)]
pub struct MonthStartCache<C> {
    records: VecDeque<MonthStart>,
    calendar: C,
}

impl<C: MonthCalendar> MonthStartCache<C> {
    /// Seed the cache with the current month and pre-expand around it so
    /// near-present queries are cache hits from the start.
    ///
    /// # Errors
    /// Propagates [`TimegrainError::Calendar`] from the calendar primitive.
    pub fn new(calendar: C) -> Result<Self, TimegrainError> {
        let seed = calendar.current_month_start()?;
        let mut cache = Self {
            records: VecDeque::from([seed]),
            calendar,
        };
        cache.expand_forward(FORWARD_PRELOAD)?;
        cache.expand_backward(BACKWARD_PRELOAD)?;
        Ok(cache)
    }

    /// Number of months currently materialized.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; the cache holds at least the seeded month.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Materialized month starts in ascending order, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = &MonthStart> {
        self.records.iter()
    }

    fn earliest(&self) -> &MonthStart {
        self.records.front().expect("cache is never empty")
    }

    fn latest(&self) -> &MonthStart {
        self.records.back().expect("cache is never empty")
    }

    fn expand_backward(&mut self, months: usize) -> Result<(), TimegrainError> {
        for _ in 0..months {
            let prev = self.calendar.add_months(self.earliest(), -1)?;
            self.records.push_front(prev);
        }
        Ok(())
    }

    fn expand_forward(&mut self, months: usize) -> Result<(), TimegrainError> {
        for _ in 0..months {
            let next = self.calendar.add_months(self.latest(), 1)?;
            self.records.push_back(next);
        }
        Ok(())
    }

    /// The start of the calendar month containing `epoch_ms`, materializing
    /// additional months on demand.
    ///
    /// Steady-state cost is a binary search over the materialized months;
    /// expansion is amortized since nearby queries reuse prior growth.
    ///
    /// # Errors
    /// - [`TimegrainError::ExpansionLimit`] if the instant is so far outside
    ///   the materialized range that the per-lookup expansion cap is hit.
    /// - [`TimegrainError::Calendar`] if the calendar primitive fails while
    ///   materializing a month.
    pub fn month_start(&mut self, epoch_ms: i64) -> Result<MonthStart, TimegrainError> {
        let mut steps = 0usize;
        while epoch_ms < self.earliest().epoch_ms {
            steps += 1;
            if steps > MAX_EXPANSION_STEPS {
                return Err(TimegrainError::ExpansionLimit { epoch_ms });
            }
            tracing::debug!(epoch_ms, months = EXPANSION_STEP, "extending month cache backward");
            self.expand_backward(EXPANSION_STEP)?;
        }
        let mut steps = 0usize;
        while self.latest().epoch_ms < epoch_ms {
            steps += 1;
            if steps > MAX_EXPANSION_STEPS {
                return Err(TimegrainError::ExpansionLimit { epoch_ms });
            }
            tracing::debug!(epoch_ms, months = EXPANSION_STEP, "extending month cache forward");
            self.expand_forward(EXPANSION_STEP)?;
        }

        // Largest lower bound: the last record at or before the query. The
        // expansion loops guarantee at least one such record exists.
        let idx = self.records.partition_point(|r| r.epoch_ms <= epoch_ms) - 1;
        Ok(self.records[idx])
    }
}
