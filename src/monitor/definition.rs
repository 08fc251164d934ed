use super::MonitorWidgetType;
use crate::error::MigrationError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A complete Monitor dashboard export: an ordered list of widgets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonitorDefinition {
    pub widgets: Vec<MonitorWidget>,
}

impl MonitorDefinition {
    /// Parses a Monitor dashboard definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, MigrationError> {
        serde_json::from_str(json).map_err(|e| MigrationError::Parse(e.to_string()))
    }

    /// Loads a Monitor dashboard definition from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MigrationError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MigrationError::Io(format!("Could not read file '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }
}

/// A single widget on a Monitor dashboard. Geometry is in Monitor grid units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorWidget {
    #[serde(rename = "type")]
    pub widget_type: MonitorWidgetType,
    #[serde(default)]
    pub title: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub metrics: Vec<MonitorMetric>,
    /// Carried through parsing but never converted.
    #[serde(default)]
    pub alarms: Vec<serde_json::Value>,
    #[serde(default)]
    pub properties: MonitorWidgetProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<MonitorAnnotations>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonitorWidgetProperties {
    #[serde(
        rename = "colorDataAcrossThresholds",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub color_data_across_thresholds: Option<bool>,
    #[serde(flatten)]
    pub extra: AHashMap<String, serde_json::Value>,
}

/// A reference to one asset property displayed by a widget.
///
/// `asset_id` and `property_id` are optional on the wire so that a missing
/// value surfaces as a conversion error naming the offending metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorMetric {
    #[serde(rename = "type")]
    pub metric_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "assetId", default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(rename = "propertyId", default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(rename = "dataType", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonitorAnnotations {
    #[serde(default)]
    pub y: Vec<YAnnotation>,
}

/// A horizontal marker drawn against the Y axis of a Monitor chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAnnotation {
    pub color: String,
    #[serde(rename = "comparisonOperator")]
    pub comparison_operator: ComparisonOperator,
    #[serde(rename = "showValue", default)]
    pub show_value: bool,
    pub value: serde_json::Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[serde(rename = "LT")]
    LessThan,
    #[serde(rename = "GT")]
    GreaterThan,
    #[serde(rename = "LTE")]
    LessThanOrEqual,
    #[serde(rename = "GTE")]
    GreaterThanOrEqual,
    #[serde(rename = "EQ")]
    Equal,
}
