//! Ordered breakpoint collections and name resolution.

mod map;
pub use map::*;

mod resolver;
pub use resolver::*;
