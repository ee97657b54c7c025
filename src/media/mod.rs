//! Media-query construction from resolved breakpoint widths.

mod bounds;
pub use bounds::*;

mod query;
pub use query::*;

mod ranges;
pub use ranges::*;
