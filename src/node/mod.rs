pub mod attributes;
pub mod group;
pub mod model;
pub mod text;

pub use attributes::*;
pub use model::*;
pub use text::*;
