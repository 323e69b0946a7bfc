//! Filter for licensing-window activity.

use anyhow::Result;
use feed_model::ResultRights;

use crate::traits::{FilterContext, RightsFilter};

/// Keeps records whose licensing term spans the context clock.
///
/// Records without a rights block or term are dropped, never faulted; an
/// elapsed or not-yet-started window drops the record the same way.
pub struct ActiveWindowFilter;

impl RightsFilter for ActiveWindowFilter {
    fn name(&self) -> &str {
        "ActiveWindowFilter"
    }

    fn apply(
        &self,
        results: Vec<ResultRights>,
        context: &FilterContext,
    ) -> Result<Vec<ResultRights>> {
        Ok(results
            .into_iter()
            .filter(|result| {
                result
                    .first_term()
                    .is_some_and(|term| term.is_active(context.now))
            })
            .collect())
    }
}
