use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};

use crate::breakpoints::BreakpointMap;

pub fn de_breakpoints<'de, D>(deserializer: D) -> Result<BreakpointMap, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = IndexMap::<String, String>::deserialize(deserializer)?;

    for (name, width) in &entries {
        if !width.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(D::Error::custom(format!(
                "breakpoint '{name}' must be a number followed by a unit, got '{width}'"
            )));
        }
    }

    Ok(BreakpointMap::from_pairs(entries))
}
