//! timegrain
//!
//! Calendar-aware granularity weighting for time-axis tick marks.
//!
//! Given a sorted time series, every point receives a [`TickMarkWeight`]
//! naming the coarsest calendar unit (year, month, day, down to sub-second)
//! at which it differs from its predecessor. A chart's time axis uses the
//! weights to label coarse boundaries more prominently than fine ones.
//!
//! - `types`: the weight ordinal and the point types a fill pass mutates.
//! - `calendar`: the [`MonthCalendar`] capability and its `chrono-tz` backed
//!   default, [`ZonedCalendar`].
//! - `weights`: the month boundary cache, the classifier, the fill pass, and
//!   the [`WeightGenerator`] facade tying them together.
//!
//! Everything here is synchronous, in-memory, and single-threaded by
//! construction: the month cache mutates on lookup, so all entry points take
//! `&mut self` and exclusivity is enforced by the borrow checker rather than
//! a lock.
#![warn(missing_docs)]

/// Calendar capability trait and the zoned Gregorian default.
pub mod calendar;
/// Unified error type.
pub mod error;
pub mod types;
/// Month cache, classifier, fill pass, and the generator facade.
pub mod weights;

pub use calendar::{MonthCalendar, MonthStart, ZonedCalendar};
pub use error::TimegrainError;
pub use types::{TickMarkWeight, TimePoint, WeightedTimePoint};
pub use weights::WeightGenerator;
pub use weights::classify::weight_by_time;
pub use weights::fill::fill_weights;
pub use weights::month_cache::MonthStartCache;
