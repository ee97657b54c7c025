pub mod breakpoints;

pub mod media;

pub mod theme;

pub use breakpoints::{BreakpointError, BreakpointMap, LIBRARY_TAG};
pub use media::{between, down, only, up};
pub use theme::{Theme, ThemeLike};
