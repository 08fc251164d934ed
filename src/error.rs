use thiserror::Error;

/// Errors that can occur while migrating a Monitor dashboard definition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MigrationError {
    #[error("Widget {widget_index} has an unsupported widget type: '{widget_type}'")]
    UnsupportedWidgetType {
        widget_index: usize,
        widget_type: String,
    },

    #[error("Metric {metric_index} of widget {widget_index} is missing its '{field}'")]
    MalformedMetric {
        widget_index: usize,
        metric_index: usize,
        field: &'static str,
    },

    #[error("Style reference id '{0}' was issued twice in one conversion")]
    DuplicateRefId(String),

    #[error("Failed to parse dashboard JSON: {0}")]
    Parse(String),

    #[error("Failed to serialize dashboard JSON: {0}")]
    Serialize(String),

    #[error("I/O error: {0}")]
    Io(String),
}
