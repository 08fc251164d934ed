use crate::application::{AssetQuery, PropertyQuery};
use crate::error::MigrationError;
use crate::monitor::MonitorMetric;
use ahash::AHashMap;
use tracing::trace;

/// Groups a widget's metrics by asset.
///
/// Assets appear in the order their id is first seen; within an asset,
/// properties keep the order their metrics were declared in.
pub fn group_by_asset(
    widget_index: usize,
    metrics: &[MonitorMetric],
) -> Result<Vec<AssetQuery>, MigrationError> {
    let mut groups: Vec<AssetQuery> = Vec::new();
    let mut positions: AHashMap<&str, usize> = AHashMap::new();

    for (metric_index, metric) in metrics.iter().enumerate() {
        let asset_id = required(&metric.asset_id, widget_index, metric_index, "assetId")?;
        let property_id =
            required(&metric.property_id, widget_index, metric_index, "propertyId")?;

        let position = *positions.entry(asset_id).or_insert_with(|| {
            groups.push(AssetQuery {
                asset_id: asset_id.to_string(),
                properties: Vec::new(),
            });
            groups.len() - 1
        });

        trace!(widget_index, asset_id, property_id, "grouped metric");
        groups[position]
            .properties
            .push(PropertyQuery::averaged(property_id));
    }

    Ok(groups)
}

/// Returns the field's value, treating an empty string as missing.
fn required<'a>(
    value: &'a Option<String>,
    widget_index: usize,
    metric_index: usize,
    field: &'static str,
) -> Result<&'a str, MigrationError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(MigrationError::MalformedMetric {
            widget_index,
            metric_index,
            field,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(asset_id: &str, property_id: &str) -> MonitorMetric {
        MonitorMetric {
            metric_type: "iotsitewise".to_string(),
            label: String::new(),
            asset_id: Some(asset_id.to_string()),
            property_id: Some(property_id.to_string()),
            data_type: None,
        }
    }

    fn property_ids(group: &AssetQuery) -> Vec<&str> {
        group
            .properties
            .iter()
            .map(|p| p.property_id.as_str())
            .collect()
    }

    #[test]
    fn empty_metrics_produce_no_groups() {
        assert!(group_by_asset(0, &[]).unwrap().is_empty());
    }

    #[test]
    fn interleaved_assets_keep_first_seen_order() {
        let metrics = vec![
            metric("b", "p1"),
            metric("a", "p2"),
            metric("b", "p3"),
            metric("c", "p4"),
            metric("a", "p5"),
        ];
        let groups = group_by_asset(0, &metrics).unwrap();

        let assets: Vec<_> = groups.iter().map(|g| g.asset_id.as_str()).collect();
        assert_eq!(assets, vec!["b", "a", "c"]);
        assert_eq!(property_ids(&groups[0]), vec!["p1", "p3"]);
        assert_eq!(property_ids(&groups[1]), vec!["p2", "p5"]);
        assert_eq!(property_ids(&groups[2]), vec!["p4"]);
    }

    #[test]
    fn swapping_same_asset_metrics_swaps_property_order() {
        let forward = group_by_asset(0, &[metric("a", "p1"), metric("a", "p2")]).unwrap();
        let reversed = group_by_asset(0, &[metric("a", "p2"), metric("a", "p1")]).unwrap();

        assert_eq!(property_ids(&forward[0]), vec!["p1", "p2"]);
        assert_eq!(property_ids(&reversed[0]), vec!["p2", "p1"]);
    }

    #[test]
    fn properties_use_fixed_defaults() {
        let groups = group_by_asset(0, &[metric("a", "p1")]).unwrap();
        let property = &groups[0].properties[0];
        assert_eq!(property.resolution, "1m");
        assert_eq!(
            property.aggregation_type,
            crate::application::AggregationType::Average
        );
    }

    #[test]
    fn missing_property_id_is_reported() {
        let mut broken = metric("a", "p1");
        broken.property_id = None;
        let err = group_by_asset(4, &[metric("a", "p0"), broken]).unwrap_err();
        assert_eq!(
            err,
            MigrationError::MalformedMetric {
                widget_index: 4,
                metric_index: 1,
                field: "propertyId",
            }
        );
    }

    #[test]
    fn empty_asset_id_counts_as_missing() {
        let err = group_by_asset(0, &[metric("", "p1")]).unwrap_err();
        assert!(matches!(
            err,
            MigrationError::MalformedMetric {
                field: "assetId",
                ..
            }
        ));
    }
}
