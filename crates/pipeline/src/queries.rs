//! The two business queries, composed from the pipeline stages.

use anyhow::Result;
use feed_model::{DeviceAttribute, Endpoint, ResultAsset, ResultRights};

use crate::endpoints::eligible_endpoints;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ActiveWindowFilter, DeviceEligibilityFilter};
use crate::traits::FilterContext;

/// Titles whose licensing term is playable on the given device class.
///
/// Compose with [`active_titles`] for the "currently licensed and playable
/// on this device" answer.
pub fn device_playable_titles(
    results: Vec<ResultRights>,
    attribute: DeviceAttribute,
    expected: &str,
    context: &FilterContext,
) -> Result<Vec<ResultRights>> {
    FilterPipeline::new()
        .add_filter(DeviceEligibilityFilter::new(attribute, expected))
        .apply(results, context)
}

/// Titles whose licensing term spans the context clock.
pub fn active_titles(
    results: Vec<ResultRights>,
    context: &FilterContext,
) -> Result<Vec<ResultRights>> {
    FilterPipeline::new()
        .add_filter(ActiveWindowFilter)
        .apply(results, context)
}

/// Manifest endpoints of currently licensed titles.
///
/// The rights feed supplies the active-content allowlist; the asset feed
/// supplies the endpoints, narrowed to HD delivery from `origin`.
pub fn active_manifest_endpoints(
    rights: &[ResultRights],
    assets: &[ResultAsset],
    origin: &str,
    context: &FilterContext,
) -> Result<Vec<Endpoint>> {
    let active = active_titles(rights.to_vec(), context)?;
    let allowlist: Vec<String> = active
        .into_iter()
        .map(|result| result.content_id)
        .collect();
    Ok(eligible_endpoints(assets, &allowlist, origin))
}
