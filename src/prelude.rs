//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to load, convert and store a
//! dashboard.
//!
//! # Example
//!
//! ```rust,no_run
//! use dashboard_migrate::prelude::*;
//!
//! # fn run_example() -> Result<(), MigrationError> {
//! let monitor = MonitorDefinition::from_file("path/to/monitor.json")?;
//! let application = convert(&monitor)?;
//! println!("{}", application.to_json(true)?);
//! # Ok(())
//! # }
//! ```

// Conversion
pub use crate::converter::refs::{RandomRefIds, RefIdGenerator, SequentialRefIds};
pub use crate::converter::{Converter, ConverterBuilder, convert};

// Input format
pub use crate::monitor::{
    ComparisonOperator, MonitorAnnotations, MonitorDefinition, MonitorMetric, MonitorWidget,
    MonitorWidgetProperties, MonitorWidgetType, YAnnotation,
};

// Output format
pub use crate::application::{
    ApplicationDefinition, ApplicationWidget, ApplicationWidgetType, ConversionSummary,
    Geometry, Threshold, WidgetProperties,
};

// Error types
pub use crate::error::MigrationError;
