//! Common test utilities for building Monitor dashboard definitions.
use dashboard_migrate::prelude::*;

#[allow(dead_code)]
pub const WIND_FARM_ASSET: &str = "3d196ab5-85db-4c90-854f-4e29d579b898";
#[allow(dead_code)]
pub const TOTAL_POWER_PROPERTY: &str = "c07c2fa5-265e-4ed4-bbf0-e94fe01e4d54";
#[allow(dead_code)]
pub const OTHER_ASSET: &str = "12345678-85db-4c90-854f-4e29d579b898";
#[allow(dead_code)]
pub const OTHER_PROPERTY: &str = "12345678-265e-4ed4-bbf0-e94fe01e4d54";

/// Creates a SiteWise metric referencing `asset_id`/`property_id`.
#[allow(dead_code)]
pub fn metric(asset_id: &str, property_id: &str) -> MonitorMetric {
    MonitorMetric {
        metric_type: "iotsitewise".to_string(),
        label: "Total Average Power (Demo Wind Farm Asset)".to_string(),
        asset_id: Some(asset_id.to_string()),
        property_id: Some(property_id.to_string()),
        data_type: Some("DOUBLE".to_string()),
    }
}

/// The single metric most tests use.
#[allow(dead_code)]
pub fn wind_farm_metric() -> MonitorMetric {
    metric(WIND_FARM_ASSET, TOTAL_POWER_PROPERTY)
}

/// Creates a 3x3 chart widget at the origin titled "test".
#[allow(dead_code)]
pub fn chart_widget(
    widget_type: MonitorWidgetType,
    metrics: Vec<MonitorMetric>,
    annotations: Option<MonitorAnnotations>,
) -> MonitorWidget {
    MonitorWidget {
        widget_type,
        title: "test".to_string(),
        x: 0,
        y: 0,
        width: 3,
        height: 3,
        metrics,
        alarms: Vec::new(),
        properties: MonitorWidgetProperties {
            color_data_across_thresholds: Some(true),
            ..Default::default()
        },
        annotations,
    }
}

/// Wraps widgets into a definition.
#[allow(dead_code)]
pub fn definition(widgets: Vec<MonitorWidget>) -> MonitorDefinition {
    MonitorDefinition { widgets }
}

/// A converter with predictable style reference ids.
#[allow(dead_code)]
pub fn deterministic_converter() -> Converter {
    Converter::builder()
        .with_ref_id_generator(Box::new(SequentialRefIds::new()))
        .build()
}

/// The expected `queryConfig` for one wind farm metric.
#[allow(dead_code)]
pub fn wind_farm_query_config() -> serde_json::Value {
    serde_json::json!({
        "source": "iotsitewise",
        "query": {
            "properties": [],
            "assets": [
                {
                    "assetId": WIND_FARM_ASSET,
                    "properties": [
                        {
                            "aggregationType": "AVERAGE",
                            "propertyId": TOTAL_POWER_PROPERTY,
                            "resolution": "1m"
                        }
                    ]
                }
            ]
        }
    })
}

/// A Monitor export as it appears on disk, with one of each convertible chart.
#[allow(dead_code)]
pub const MIXED_DASHBOARD_JSON: &str = r##"{
  "widgets": [
    {
      "type": "monitor-line-chart",
      "title": "Power",
      "x": 0, "y": 0, "width": 6, "height": 3,
      "metrics": [
        {
          "type": "iotsitewise",
          "label": "Total Average Power (Demo Wind Farm Asset)",
          "assetId": "3d196ab5-85db-4c90-854f-4e29d579b898",
          "propertyId": "c07c2fa5-265e-4ed4-bbf0-e94fe01e4d54",
          "dataType": "DOUBLE"
        }
      ],
      "alarms": [],
      "properties": { "colorDataAcrossThresholds": true },
      "annotations": {
        "y": [
          { "color": "#5e87b5", "comparisonOperator": "LT", "showValue": true, "value": 100 }
        ]
      }
    },
    {
      "type": "monitor-bar-chart",
      "title": "Wind speed",
      "x": 6, "y": 0, "width": 6, "height": 3,
      "metrics": [
        {
          "type": "iotsitewise",
          "label": "Wind speed (Turbine 1)",
          "assetId": "aaaaaaaa-0000-0000-0000-000000000001",
          "propertyId": "bbbbbbbb-0000-0000-0000-000000000001",
          "dataType": "DOUBLE"
        },
        {
          "type": "iotsitewise",
          "label": "Wind speed (Turbine 2)",
          "assetId": "aaaaaaaa-0000-0000-0000-000000000002",
          "propertyId": "bbbbbbbb-0000-0000-0000-000000000001",
          "dataType": "DOUBLE"
        }
      ],
      "alarms": [],
      "properties": { "colorDataAcrossThresholds": false }
    },
    {
      "type": "monitor-scatter-chart",
      "title": "Torque",
      "x": 0, "y": 3, "width": 12, "height": 4,
      "metrics": [
        {
          "type": "iotsitewise",
          "label": "Torque (Turbine 1)",
          "assetId": "aaaaaaaa-0000-0000-0000-000000000001",
          "propertyId": "cccccccc-0000-0000-0000-000000000001",
          "dataType": "DOUBLE"
        }
      ],
      "alarms": [],
      "properties": { "colorDataAcrossThresholds": true, "legendPosition": "bottom" }
    }
  ]
}"##;

/// Scratch directory for tests that touch the filesystem.
#[allow(dead_code)]
pub fn setup_test_dir() -> std::path::PathBuf {
    std::env::temp_dir().join("dashboard-migrate-tests")
}
