use crate::breakpoints::BreakpointError;
use crate::theme::ThemeLike;

use super::bounds::{exclusive_upper_bound, max_width, min_width};
use super::query::{max_width_query, min_and_max_query, min_width_query};

/// Media query matching `name`'s width and everything above it.
///
/// The returned closure defers theme injection: configure the breakpoint
/// here, apply the theme at interpolation time.
pub fn up(
    name: impl Into<String>,
) -> impl Fn(&dyn ThemeLike) -> Result<String, BreakpointError> {
    let name = name.into();

    move |theme| {
        let breaks = theme.effective_breakpoints();

        Ok(min_width_query(&min_width(&name, breaks)?))
    }
}

/// Media query matching everything strictly below `name`'s width.
pub fn down(
    name: impl Into<String>,
) -> impl Fn(&dyn ThemeLike) -> Result<String, BreakpointError> {
    let name = name.into();

    move |theme| {
        let breaks = theme.effective_breakpoints();

        Ok(max_width_query(&exclusive_upper_bound(
            breaks.resolve(&name)?,
        )?))
    }
}

/// Media query spanning `start`'s range through `end`'s range, both
/// inclusive.
pub fn between(
    start: impl Into<String>,
    end: impl Into<String>,
) -> impl Fn(&dyn ThemeLike) -> Result<String, BreakpointError> {
    let start = start.into();
    let end = end.into();

    move |theme| {
        let breaks = theme.effective_breakpoints();

        Ok(min_and_max_query(
            &min_width(&start, breaks)?,
            &max_width(&end, breaks)?,
        ))
    }
}

/// Media query matching `name`'s range and nothing else.
pub fn only(
    name: impl Into<String>,
) -> impl Fn(&dyn ThemeLike) -> Result<String, BreakpointError> {
    let name = name.into();

    move |theme| {
        let breaks = theme.effective_breakpoints();

        Ok(min_and_max_query(
            &min_width(&name, breaks)?,
            &max_width(&name, breaks)?,
        ))
    }
}
