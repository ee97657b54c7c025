use smallvec::SmallVec;
use thiserror::Error;

use super::BreakpointMap;

/// Tag prefixed to diagnostics surfaced to a top-level caller.
pub const LIBRARY_TAG: &str = "[styled-breakpoints]";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreakpointError {
    /// The supplied name is not a key of the effective breakpoint map.
    #[error("'{name}' is invalid breakpoint name. Use '{}'.", .allowed.join(", "))]
    InvalidName {
        name: String,
        /// Names the caller may use instead, in map order.
        allowed: SmallVec<[String; 3]>,
    },

    /// The supplied name is the highest breakpoint in the map, so no
    /// maximum width can be derived for it.
    #[error("Don't use '{name}' because it doesn't have a maximum width. Use '{fallback}'.")]
    NoMaxWidth {
        name: String,
        /// The highest breakpoint that does have a maximum width.
        fallback: String,
    },

    /// A width whose numeric magnitude could not be parsed.
    #[error("'{width}' is invalid width. Use a number followed by a unit, e.g. '768px'.")]
    InvalidWidth { width: String },
}

impl BreakpointError {
    /// The message as surfaced to a top-level caller, with the library tag.
    pub fn report(&self) -> String {
        format!("{LIBRARY_TAG}: {self}")
    }
}

impl BreakpointMap {
    /// Width of `name`, validated against this map.
    pub fn resolve(&self, name: &str) -> Result<&str, BreakpointError> {
        self.get(name).ok_or_else(|| BreakpointError::InvalidName {
            name: name.to_owned(),
            allowed: self.names().map(str::to_owned).collect(),
        })
    }

    /// Name immediately following `name` in the progression, or `None`
    /// when `name` is the last entry.
    pub fn next_name(&self, name: &str) -> Result<Option<&str>, BreakpointError> {
        let index = self
            .get_index_of(name)
            .ok_or_else(|| BreakpointError::InvalidName {
                name: name.to_owned(),
                allowed: self.names().map(str::to_owned).collect(),
            })?;

        Ok(self.get_index(index + 1).map(|(next, _)| next))
    }

    /// Width of the successor of `name`.
    ///
    /// Names without a successor are not usable here, so the invalid-name
    /// diagnostic enumerates every name except the last.
    pub fn next_value(&self, name: &str) -> Result<&str, BreakpointError> {
        match self.get_index_of(name) {
            Some(index) => match self.get_index(index + 1) {
                Some((_, width)) => Ok(width),
                None => Err(BreakpointError::NoMaxWidth {
                    name: name.to_owned(),
                    fallback: self
                        .len()
                        .checked_sub(2)
                        .and_then(|i| self.get_index(i))
                        .map(|(fallback, _)| fallback.to_owned())
                        .unwrap_or_default(),
                }),
            },
            None => Err(BreakpointError::InvalidName {
                name: name.to_owned(),
                allowed: self
                    .names()
                    .take(self.len().saturating_sub(1))
                    .map(str::to_owned)
                    .collect(),
            }),
        }
    }
}
