//! Manifest endpoint selection over the asset feed.

use feed_model::{Endpoint, ResultAsset};

/// Collect the endpoint of every HD asset served from `origin`, restricted
/// to records whose `content_id` is in `allowlist`.
///
/// Input order is preserved and nothing is deduplicated. Records outside the
/// allowlist, non-HD assets, other origins and endpoint-less assets are all
/// skipped silently.
pub fn eligible_endpoints(
    results: &[ResultAsset],
    allowlist: &[String],
    origin: &str,
) -> Vec<Endpoint> {
    results
        .iter()
        .filter(|result| allowlist.iter().any(|id| *id == result.content_id))
        .flat_map(|result| result.assets())
        .filter(|asset| asset.is_eligible_hd(origin))
        .filter_map(|asset| asset.endpoint.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_model::Asset;

    fn asset(origin: &str, path: &str, video_format: &str) -> Asset {
        Asset {
            endpoint: Some(Endpoint {
                origin: Some(origin.to_string()),
                path: Some(path.to_string()),
            }),
            video_format: Some(video_format.to_string()),
        }
    }

    fn record(content_id: &str, assets: Vec<Asset>) -> ResultAsset {
        ResultAsset {
            content_id: content_id.to_string(),
            access_channel: None,
            assets: Some(assets),
        }
    }

    #[test]
    fn test_allowlist_and_format_select_one_endpoint() {
        // Two titles, each with an HD and an SD level3 variant; only title
        // "1" is licensed, so exactly its HD endpoint survives.
        let results = vec![
            record(
                "1",
                vec![asset("level3", "path", "HD"), asset("level3", "path", "SD")],
            ),
            record(
                "2",
                vec![asset("level3", "path", "HD"), asset("level3", "path", "SD")],
            ),
        ];
        let allowlist = vec!["1".to_string()];

        let endpoints = eligible_endpoints(&results, &allowlist, "level3");
        assert_eq!(endpoints.len(), 1);
        assert_eq!(
            endpoints[0],
            Endpoint {
                origin: Some("level3".to_string()),
                path: Some("path".to_string()),
            }
        );
    }

    #[test]
    fn test_origin_parameter_narrows_selection() {
        let results = vec![record(
            "1",
            vec![asset("level3", "/l3", "HD"), asset("akamai", "/ak", "HD")],
        )];
        let allowlist = vec!["1".to_string()];

        let endpoints = eligible_endpoints(&results, &allowlist, "akamai");
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].path.as_deref(), Some("/ak"));
    }

    #[test]
    fn test_degraded_records_yield_nothing() {
        let empty_allowlist: Vec<String> = Vec::new();
        let results = vec![record("1", vec![asset("level3", "path", "HD")])];
        assert!(eligible_endpoints(&results, &empty_allowlist, "level3").is_empty());

        // Absent asset list and endpoint-less assets are skipped.
        let degraded = vec![
            ResultAsset {
                content_id: "1".to_string(),
                access_channel: None,
                assets: None,
            },
            record(
                "2",
                vec![Asset {
                    endpoint: None,
                    video_format: Some("HD".to_string()),
                }],
            ),
        ];
        let allowlist = vec!["1".to_string(), "2".to_string()];
        assert!(eligible_endpoints(&degraded, &allowlist, "level3").is_empty());
    }
}
