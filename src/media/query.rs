/// `@media` query matching widths at or above `value`.
pub fn min_width_query(value: &str) -> String {
    format!("@media (min-width: {value})")
}

/// `@media` query matching widths at or below `value`.
pub fn max_width_query(value: &str) -> String {
    format!("@media (max-width: {value})")
}

/// `@media` query matching widths between `min` and `max` inclusive.
pub fn min_and_max_query(min: &str, max: &str) -> String {
    format!("@media (min-width: {min}) and (max-width: {max})")
}
