use thiserror::Error;

/// Unified error type for the timegrain crate.
///
/// The core is a pure in-memory computation, so the taxonomy is small: either
/// the calendar primitive could not resolve a month start, or a lookup asked
/// the month cache to expand past its defensive iteration cap.
#[derive(Debug, Error)]
pub enum TimegrainError {
    /// The calendar primitive failed to produce a valid month-start instant.
    #[error("calendar issue: {0}")]
    Calendar(String),

    /// A month-cache lookup exceeded the expansion iteration cap while
    /// seeking the given instant. Only reachable with a timestamp so far
    /// from the materialized range that the input is almost certainly
    /// corrupt.
    #[error("month cache expansion limit reached while seeking {epoch_ms} ms")]
    ExpansionLimit {
        /// The queried instant, in milliseconds since the Unix epoch.
        epoch_ms: i64,
    },
}

impl TimegrainError {
    /// Helper: build a `Calendar` error from any displayable message.
    pub fn calendar(msg: impl Into<String>) -> Self {
        Self::Calendar(msg.into())
    }
}
