//! Theme configuration carrying the responsive breakpoint progression.
//!
//! Themes deserialize from JSON documents. A built-in default theme supplies
//! the standard `tablet` / `desktop` / `lgDesktop` progression for themes
//! that carry no breakpoints of their own.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;
