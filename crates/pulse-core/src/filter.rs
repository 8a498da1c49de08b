//! Filter predicate: plain substring match over project names and tags.
//!
//! The term is trimmed and lower-cased here, at match time, and nowhere else:
//! the normalizer deduplicates on the raw string. A blank term matches every
//! project. Matching never reorders the input.

use crate::types::Project;

/// A lower-cased, trimmed needle ready to be tested against projects.
///
/// Build once per term and reuse it across the collection so the term is
/// folded a single time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    needle: String,
}

impl Matcher {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.trim().to_lowercase(),
        }
    }

    /// True when the trimmed term was empty, i.e. everything matches.
    pub fn is_match_all(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, project: &Project) -> bool {
        if self.is_match_all() {
            return true;
        }
        contains_folded(&project.name, &self.needle)
            || project.tags.iter().any(|tag| contains_folded(tag, &self.needle))
    }
}

/// Return the projects matching `term`, in their original order.
pub fn filter_projects(projects: &[Project], term: &str) -> Vec<Project> {
    let matcher = Matcher::new(term);
    if matcher.is_match_all() {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| matcher.matches(p))
        .cloned()
        .collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
