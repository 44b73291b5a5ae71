//! The value tree produced by the parser, plus source positions

pub mod location;
pub mod lookup;
pub mod value;

pub use location::{Location, Position, SourceLocation};
pub use lookup::lookup;
pub use value::{Object, Value};
