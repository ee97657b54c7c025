use crate::breakpoints::{BreakpointError, BreakpointMap};

/// Amount subtracted from a width to form an exclusive upper bound, in
/// hundredths of the width's unit.
const EPSILON_HUNDREDTHS: i64 = 2;

/// Largest width strictly below `width`, in the same unit.
///
/// The subtraction runs in integer hundredths so the rendered decimal is
/// exact: `992px` becomes `991.98px`, never `991.9799…px`. The unit suffix
/// is echoed back unchanged.
pub fn exclusive_upper_bound(width: &str) -> Result<String, BreakpointError> {
    let (hundredths, unit) = split_width(width)?;

    Ok(format!(
        "{}{unit}",
        render_hundredths(hundredths - EPSILON_HUNDREDTHS)
    ))
}

/// Minimum bound of `name`'s range: its own width.
pub fn min_width(name: &str, map: &BreakpointMap) -> Result<String, BreakpointError> {
    map.resolve(name).map(str::to_owned)
}

/// Maximum bound of `name`'s range: just under its successor's width, so
/// adjacent ranges never overlap.
pub fn max_width(name: &str, map: &BreakpointMap) -> Result<String, BreakpointError> {
    exclusive_upper_bound(map.next_value(name)?)
}

/// Split a width into its magnitude (scaled to hundredths) and unit suffix.
fn split_width(width: &str) -> Result<(i64, &str), BreakpointError> {
    let digits_end = width
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(width.len());
    let (magnitude, unit) = width.split_at(digits_end);

    let magnitude = magnitude
        .parse::<f64>()
        .map_err(|_| BreakpointError::InvalidWidth {
            width: width.to_owned(),
        })?;

    Ok(((magnitude * 100.0).round() as i64, unit))
}

/// Render hundredths as a decimal the way a JS number would print: no
/// trailing zeros, no dangling dot.
fn render_hundredths(hundredths: i64) -> String {
    let sign = if hundredths < 0 { "-" } else { "" };
    let magnitude = hundredths.abs();

    if magnitude % 100 == 0 {
        return format!("{sign}{}", magnitude / 100);
    }

    let rendered = format!("{sign}{}.{:02}", magnitude / 100, magnitude % 100);
    rendered.trim_end_matches('0').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_upper_bound_subtracts_epsilon() {
        assert_eq!(exclusive_upper_bound("992px").unwrap(), "991.98px");
        assert_eq!(exclusive_upper_bound("768px").unwrap(), "767.98px");
        assert_eq!(exclusive_upper_bound("1200px").unwrap(), "1199.98px");
    }

    #[test]
    fn test_exclusive_upper_bound_is_deterministic() {
        assert_eq!(
            exclusive_upper_bound("992px").unwrap(),
            exclusive_upper_bound("992px").unwrap()
        );
    }

    #[test]
    fn test_exclusive_upper_bound_trims_trailing_zeros() {
        assert_eq!(exclusive_upper_bound("768.42px").unwrap(), "768.4px");
        assert_eq!(exclusive_upper_bound("768.02px").unwrap(), "768px");
    }

    #[test]
    fn test_exclusive_upper_bound_handles_fractional_widths() {
        assert_eq!(exclusive_upper_bound("768.5px").unwrap(), "768.48px");
        assert_eq!(exclusive_upper_bound("0px").unwrap(), "-0.02px");
    }

    #[test]
    fn test_exclusive_upper_bound_echoes_unit_suffix() {
        assert_eq!(exclusive_upper_bound("48rem").unwrap(), "47.98rem");
        assert_eq!(exclusive_upper_bound("100").unwrap(), "99.98");
    }

    #[test]
    fn test_exclusive_upper_bound_rejects_non_numeric_width() {
        let error = exclusive_upper_bound("wide").unwrap_err();

        assert_eq!(
            error.to_string(),
            "'wide' is invalid width. Use a number followed by a unit, e.g. '768px'."
        );
        assert!(matches!(error, BreakpointError::InvalidWidth { .. }));
    }

    #[test]
    fn test_min_width_resolves_own_value() {
        assert_eq!(
            min_width("desktop", BreakpointMap::builtin()).unwrap(),
            "992px"
        );
    }

    #[test]
    fn test_max_width_bounds_at_successor() {
        assert_eq!(
            max_width("tablet", BreakpointMap::builtin()).unwrap(),
            "991.98px"
        );
    }

    #[test]
    fn test_max_width_propagates_missing_successor() {
        let error = max_width("lgDesktop", BreakpointMap::builtin()).unwrap_err();

        assert!(matches!(error, BreakpointError::NoMaxWidth { .. }));
    }
}
