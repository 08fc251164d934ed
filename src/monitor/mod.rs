pub mod definition;
pub mod widget_type;

pub use definition::*;
pub use widget_type::*;
