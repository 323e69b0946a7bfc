//! Filter for device-class playability.

use anyhow::Result;
use feed_model::{DeviceAttribute, ResultRights, ROKU_PLATFORM};

use crate::traits::{FilterContext, RightsFilter};

/// Keeps records whose licensing term is playable on a device matching one
/// attribute/value pair.
///
/// Records without a rights block, without a term, or without a matching
/// device are dropped, never faulted.
pub struct DeviceEligibilityFilter {
    attribute: DeviceAttribute,
    expected: String,
}

impl DeviceEligibilityFilter {
    pub fn new(attribute: DeviceAttribute, expected: impl Into<String>) -> Self {
        Self {
            attribute,
            expected: expected.into(),
        }
    }

    /// The ROKU query: platform attribute, `ROKU` value.
    pub fn roku() -> Self {
        Self::new(DeviceAttribute::Platform, ROKU_PLATFORM)
    }
}

impl RightsFilter for DeviceEligibilityFilter {
    fn name(&self) -> &str {
        "DeviceEligibilityFilter"
    }

    fn apply(
        &self,
        results: Vec<ResultRights>,
        _context: &FilterContext,
    ) -> Result<Vec<ResultRights>> {
        Ok(results
            .into_iter()
            .filter(|result| {
                result
                    .first_term()
                    .is_some_and(|term| term.can_play_on(self.attribute, &self.expected))
            })
            .collect())
    }
}
