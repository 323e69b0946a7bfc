//! The FilterPipeline chains rights filters in order.

use anyhow::Result;
use feed_model::ResultRights;

use crate::traits::{FilterContext, RightsFilter};

/// Ordered chain of [`RightsFilter`]s applied with the builder pattern.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(DeviceEligibilityFilter::roku())
///     .add_filter(ActiveWindowFilter);
///
/// let playable = pipeline.apply(records, &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn RightsFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl RightsFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence, tracing input/output counts per stage.
    pub fn apply(
        &self,
        results: Vec<ResultRights>,
        context: &FilterContext,
    ) -> Result<Vec<ResultRights>> {
        let mut current = results;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, context)?;
            tracing::debug!(
                "Applied filter {}: {} -> {} records",
                filter.name(),
                before,
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
