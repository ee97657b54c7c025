use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::theme;

/// Insertion-ordered mapping from breakpoint name to width.
///
/// Order is semantically significant: it defines the ascending size
/// progression used for successor lookup and range queries. Names are
/// unique; the last entry has no successor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointMap(IndexMap<String, String>);

impl BreakpointMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Build a map from `(name, width)` pairs, keeping their order.
    pub fn from_pairs<I, N, W>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, W)>,
        N: Into<String>,
        W: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(name, width)| (name.into(), width.into()))
                .collect(),
        )
    }

    /// The map shipped with the built-in default theme
    /// (`tablet` / `desktop` / `lgDesktop`).
    pub fn builtin() -> &'static Self {
        &theme::DEFAULT_THEME.breakpoints
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, width)| (name.as_str(), width.as_str()))
    }

    /// Breakpoint names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_index_of(&self, name: &str) -> Option<usize> {
        self.0.get_index_of(name)
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, &str)> {
        self.0
            .get_index(index)
            .map(|(name, width)| (name.as_str(), width.as_str()))
    }

    pub fn first(&self) -> Option<(&str, &str)> {
        self.0
            .first()
            .map(|(name, width)| (name.as_str(), width.as_str()))
    }

    pub fn last(&self) -> Option<(&str, &str)> {
        self.0
            .last()
            .map(|(name, width)| (name.as_str(), width.as_str()))
    }
}
