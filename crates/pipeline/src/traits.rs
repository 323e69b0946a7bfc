//! Core trait and context for the rights filtering pipeline.

use anyhow::Result;
use chrono::NaiveDateTime;
use feed_model::ResultRights;

/// Explicit clock handed through the pipeline.
///
/// Filters never read ambient time; the caller decides what "now" is, which
/// also keeps every window test deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext {
    /// Zone-naive reference instant, in the feeds' implicit zone.
    pub now: NaiveDateTime,
}

impl FilterContext {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

/// Core trait for filtering rights records.
///
/// Implementations keep or drop whole records. They never fail on absent
/// optional data: a record missing the data a filter needs is dropped, and
/// only genuinely exceptional conditions surface as errors.
pub trait RightsFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter, preserving the input order of survivors.
    fn apply(
        &self,
        results: Vec<ResultRights>,
        context: &FilterContext,
    ) -> Result<Vec<ResultRights>>;
}
