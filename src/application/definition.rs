use super::WidgetProperties;
use crate::error::MigrationError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// A converted dashboard in the application-native format.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicationDefinition {
    pub widgets: Vec<ApplicationWidget>,
}

impl ApplicationDefinition {
    /// Serializes the definition to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, MigrationError> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| MigrationError::Serialize(e.to_string()))
    }

    /// Writes the definition to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>, pretty: bool) -> Result<(), MigrationError> {
        let path = path.as_ref();
        let json = self.to_json(pretty)?;
        fs::write(path, json).map_err(|e| {
            MigrationError::Io(format!(
                "Could not write to file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Loads a previously converted definition from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MigrationError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MigrationError::Io(format!("Could not read file '{}': {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| MigrationError::Parse(e.to_string()))
    }

    /// Counts what the conversion produced.
    pub fn summary(&self) -> ConversionSummary {
        let widgets_by_type = self.widgets.iter().map(|w| w.widget_type).counts();
        let assets = self
            .widgets
            .iter()
            .flat_map(|w| &w.properties.query_config().query.assets);
        let (asset_groups, properties) =
            assets.fold((0, 0), |(groups, props), asset| {
                (groups + 1, props + asset.properties.len())
            });

        ConversionSummary {
            widgets: self.widgets.len(),
            widgets_by_type,
            asset_groups,
            properties,
        }
    }
}

/// A widget positioned in application pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationWidget {
    #[serde(rename = "type")]
    pub widget_type: ApplicationWidgetType,
    #[serde(flatten)]
    pub geometry: Geometry,
    pub properties: WidgetProperties,
}

/// Position and size in application pixel space.
///
/// `z` is the stacking order and is always 0 for converted widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: u64,
    pub y: u64,
    pub z: u64,
    pub width: u64,
    pub height: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationWidgetType {
    XyPlot,
    BarChart,
}

impl ApplicationWidgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XyPlot => "xy-plot",
            Self::BarChart => "bar-chart",
        }
    }
}

impl fmt::Display for ApplicationWidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Totals describing a converted dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    pub widgets: usize,
    pub widgets_by_type: HashMap<ApplicationWidgetType, usize>,
    pub asset_groups: usize,
    pub properties: usize,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let by_type = self
            .widgets_by_type
            .iter()
            .sorted_by_key(|(widget_type, _)| widget_type.as_str())
            .map(|(widget_type, count)| format!("{}={}", widget_type, count))
            .join(", ");
        write!(
            f,
            "{} widgets ({}), {} asset groups, {} properties",
            self.widgets, by_type, self.asset_groups, self.properties
        )
    }
}
