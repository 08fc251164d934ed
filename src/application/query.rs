use serde::{Deserialize, Serialize};

/// The only resolution the converter emits.
pub const DEFAULT_RESOLUTION: &str = "1m";

/// Describes which data a widget fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Source system of the widget's data, taken from its first metric.
    /// Absent when the widget has no metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub query: Query,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Query {
    /// Reserved for properties that are not scoped to an asset.
    #[serde(default)]
    pub properties: Vec<PropertyQuery>,
    #[serde(default)]
    pub assets: Vec<AssetQuery>,
}

/// All properties a widget reads from one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetQuery {
    #[serde(rename = "assetId")]
    pub asset_id: String,
    pub properties: Vec<PropertyQuery>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyQuery {
    #[serde(rename = "propertyId")]
    pub property_id: String,
    #[serde(rename = "aggregationType")]
    pub aggregation_type: AggregationType,
    pub resolution: String,
}

impl PropertyQuery {
    /// A property query with the default aggregation and resolution.
    pub fn averaged(property_id: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            aggregation_type: AggregationType::Average,
            resolution: DEFAULT_RESOLUTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AggregationType {
    Average,
}
