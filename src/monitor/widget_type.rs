use serde::{Deserialize, Serialize};
use std::fmt;

/// The widget variants a Monitor dashboard export can contain.
///
/// Tags that are not known at compile time are kept as `Unrecognized` so that
/// a document always parses; the converter decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MonitorWidgetType {
    LineChart,
    ScatterChart,
    BarChart,
    StatusTimeline,
    StatusGrid,
    Kpi,
    Table,
    Unrecognized(String),
}

impl MonitorWidgetType {
    /// Looks up a variant by its wire tag. Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let widget_type = match tag {
            "monitor-line-chart" => Self::LineChart,
            "monitor-scatter-chart" => Self::ScatterChart,
            "monitor-bar-chart" => Self::BarChart,
            "monitor-status-timeline" => Self::StatusTimeline,
            "monitor-status-grid" => Self::StatusGrid,
            "monitor-kpi" => Self::Kpi,
            "monitor-table" => Self::Table,
            _ => return None,
        };
        Some(widget_type)
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::LineChart => "monitor-line-chart",
            Self::ScatterChart => "monitor-scatter-chart",
            Self::BarChart => "monitor-bar-chart",
            Self::StatusTimeline => "monitor-status-timeline",
            Self::StatusGrid => "monitor-status-grid",
            Self::Kpi => "monitor-kpi",
            Self::Table => "monitor-table",
            Self::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for MonitorWidgetType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag).unwrap_or(Self::Unrecognized(tag))
    }
}

impl From<MonitorWidgetType> for String {
    fn from(widget_type: MonitorWidgetType) -> Self {
        match widget_type {
            MonitorWidgetType::Unrecognized(tag) => tag,
            known => known.as_tag().to_string(),
        }
    }
}

impl fmt::Display for MonitorWidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
