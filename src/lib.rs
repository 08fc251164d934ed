//! # dashboard-migrate - Monitor to Application Dashboard Conversion
//!
//! Converts dashboards exported from the legacy Monitor product into the
//! application-native dashboard format, so existing dashboards carry forward
//! without being rebuilt by hand.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Parse a Monitor export with [`MonitorDefinition::from_json`] or
//!     [`MonitorDefinition::from_file`].
//! 2.  **Configure**: Use [`Converter::builder`] to pick a style reference id
//!     generator or register aliases for extra widget tags.
//! 3.  **Convert**: [`Converter::convert`] maps every widget, in order, to its
//!     application counterpart. Widget geometry is scaled from Monitor grid
//!     units to pixels, metrics are grouped per asset, and Y-axis annotations
//!     become thresholds.
//! 4.  **Store**: Serialize the [`ApplicationDefinition`] with
//!     [`ApplicationDefinition::to_json`] or [`ApplicationDefinition::save`].
//!
//! Conversion is all-or-nothing: an unsupported widget or a metric without an
//! asset or property id fails the whole call.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dashboard_migrate::prelude::*;
//!
//! fn main() -> Result<(), MigrationError> {
//!     let monitor = MonitorDefinition::from_file("exports/wind-farm.json")?;
//!
//!     let converter = Converter::builder()
//!         .with_type_alias("sc-line-chart", MonitorWidgetType::LineChart)
//!         .build();
//!     let application = converter.convert(&monitor)?;
//!
//!     println!("{}", application.summary());
//!     application.save("wind-farm.app.json", true)?;
//!     Ok(())
//! }
//! ```
//!
//! [`MonitorDefinition::from_json`]: monitor::MonitorDefinition::from_json
//! [`MonitorDefinition::from_file`]: monitor::MonitorDefinition::from_file
//! [`Converter::builder`]: converter::Converter::builder
//! [`Converter::convert`]: converter::Converter::convert
//! [`ApplicationDefinition`]: application::ApplicationDefinition
//! [`ApplicationDefinition::to_json`]: application::ApplicationDefinition::to_json
//! [`ApplicationDefinition::save`]: application::ApplicationDefinition::save

pub mod application;
pub mod converter;
pub mod error;
pub mod monitor;
pub mod prelude;

pub use converter::{Converter, convert};
