use super::{DEFAULT_THEME, Theme};
use crate::breakpoints::BreakpointMap;

/// Extension trait for anything that can supply a breakpoint map.
///
/// Media-query operations accept any `ThemeLike`, so callers can pass their
/// own theme type without converting it into a [`Theme`] first.
pub trait ThemeLike {
    /// The breakpoints carried by this theme, if any.
    fn breakpoints(&self) -> Option<&BreakpointMap>;

    /// The map media queries resolve against: this theme's own breakpoints
    /// when present and non-empty, otherwise the built-in default.
    fn effective_breakpoints(&self) -> &BreakpointMap {
        match self.breakpoints() {
            Some(map) if !map.is_empty() => map,
            _ => &DEFAULT_THEME.breakpoints,
        }
    }
}

impl ThemeLike for Theme {
    fn breakpoints(&self) -> Option<&BreakpointMap> {
        Some(&self.breakpoints)
    }
}
