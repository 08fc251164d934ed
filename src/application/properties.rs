use super::QueryConfig;
use crate::monitor::ComparisonOperator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Variant-specific widget properties.
///
/// Untagged on the wire: the enclosing widget's `type` says which shape applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidgetProperties {
    XyPlot(XyPlotProperties),
    BarChart(BarChartProperties),
}

impl WidgetProperties {
    pub fn title(&self) -> &str {
        match self {
            Self::XyPlot(props) => &props.title,
            Self::BarChart(props) => &props.title,
        }
    }

    pub fn query_config(&self) -> &QueryConfig {
        match self {
            Self::XyPlot(props) => &props.query_config,
            Self::BarChart(props) => &props.query_config,
        }
    }

    pub fn thresholds(&self) -> Option<&[Threshold]> {
        match self {
            Self::XyPlot(props) => props.thresholds.as_deref(),
            Self::BarChart(props) => props.thresholds.as_deref(),
        }
    }
}

/// Properties of an `xy-plot` widget (line and scatter charts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XyPlotProperties {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<Threshold>>,
    pub symbol: SymbolSettings,
    pub axis: XyAxisSettings,
    pub line: LineSettings,
    pub legend: LegendSettings,
    #[serde(rename = "queryConfig")]
    pub query_config: QueryConfig,
}

/// Properties of a `bar-chart` widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartProperties {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<Threshold>>,
    pub axis: BarAxisSettings,
    #[serde(rename = "queryConfig")]
    pub query_config: QueryConfig,
    /// Per-series style slots, keyed by style reference id.
    #[serde(rename = "styleSettings")]
    pub style_settings: BTreeMap<String, SeriesStyle>,
}

/// Style slot for one bar chart series. The renderer fills in colors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesStyle {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub color: String,
    #[serde(rename = "comparisonOperator")]
    pub comparison_operator: ComparisonOperator,
    pub value: serde_json::Number,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSettings {
    pub style: SymbolStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolStyle {
    FilledCircle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XyAxisSettings {
    #[serde(rename = "yVisible")]
    pub y_visible: bool,
    #[serde(rename = "xVisible")]
    pub x_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarAxisSettings {
    #[serde(rename = "showX")]
    pub show_x: bool,
    #[serde(rename = "showY")]
    pub show_y: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSettings {
    #[serde(rename = "connectionStyle")]
    pub connection_style: ConnectionStyle,
    pub style: LineStyle,
}

/// How consecutive data points of a series are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionStyle {
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "none")]
    Unconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendSettings {
    pub visible: bool,
}
