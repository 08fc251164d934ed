pub mod definition;
pub mod properties;
pub mod query;

pub use definition::*;
pub use properties::*;
pub use query::*;
