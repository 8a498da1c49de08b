//! Core types for pulse-core.
//!
//! This module defines the record the whole pipeline filters: a [`Project`]
//! identified by its [`ProjectId`].

use serde::Deserialize;

/// Stable identifier of a [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A project record as returned by a [`ProjectStore`](crate::ProjectStore).
///
/// Records are immutable once fetched. Two projects compare equal when their
/// ids match, whatever their name or tags say; the UI diffs result lists by
/// identity and nothing else.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Display name, matched case-insensitively by the filter.
    pub name: String,
    /// Free-form tags in stored order. Duplicates and casing are kept as-is.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    pub fn new<I, S>(id: u64, name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: ProjectId(id),
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}

impl std::hash::Hash for Project {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
