#![allow(unused)]
//! Filter predicate integration harness.
//!
//! # What this covers
//!
//! - **Trim + case folding**: surrounding whitespace is ignored and matching
//!   is case-insensitive on both sides.
//! - **Name or any tag**: a project matches if the term is a substring of its
//!   name or of at least one tag.
//! - **Order preservation**: the output is a subsequence of the input, in the
//!   same order. Verified with proptest.
//! - **Empty term**: the whole collection comes back unchanged.
//!
//! # What this does NOT cover
//!
//! - Fuzzy or token-based matching
//! - Matching on the numeric id
//!
//! # Running
//!
//! ```sh
//! cargo test --test filter_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use pulse::filter::{filter_projects, Matcher};
use rstest::rstest;

// ---------------------------------------------------------------------------
// Worked examples
// ---------------------------------------------------------------------------

#[test]
fn dataset_term_table() {
    let projects = dataset();
    for (term, expected) in TERM_EXPECTATIONS {
        assert_eq!(
            ids(&filter_projects(&projects, term)),
            expected.to_vec(),
            "term {term:?}"
        );
    }
}

#[rstest]
#[case::tag_prefix("ang", &[1])]
#[case::tag_suffix("TTP", &[2])]
#[case::name_inner("amm", &[3])]
#[case::spans_words("alpha cli", &[])]
fn substring_cases(#[case] term: &str, #[case] expected: &[u64]) {
    assert_eq!(ids(&filter_projects(&dataset(), term)), expected.to_vec());
}

/// Any one tag is enough; the others need not match.
#[test]
fn single_matching_tag_suffices() {
    let projects = vec![
        ProjectBuilder::new(10, "Omega").tag("one").tag("two").tag("Three").build(),
        ProjectBuilder::new(11, "Sigma").build(),
    ];
    assert_ids!(filter_projects(&projects, "three"), [10]);
}

/// Non-ASCII names fold case too.
#[test]
fn unicode_case_folding() {
    let projects = vec![ProjectBuilder::new(1, "Ærø Portal").tag("Überblick").build()];
    assert_ids!(filter_projects(&projects, "ærø"), [1]);
    assert_ids!(filter_projects(&projects, "ÜBER"), [1]);
}

#[test]
fn duplicates_are_kept() {
    let alpha = ProjectBuilder::new(1, "Alpha").build();
    let projects = vec![alpha.clone(), alpha];
    assert_eq!(filter_projects(&projects, "alp").len(), 2);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_project() -> impl Strategy<Value = pulse::Project> {
    (any::<u64>(), "[a-zA-Z ]{0,8}", prop::collection::vec("[a-zA-Z]{0,5}", 0..3))
        .prop_map(|(id, name, tags)| pulse::Project::new(id, name, tags))
}

proptest! {
    /// The output keeps input order and contains only matching projects.
    #[test]
    fn output_is_ordered_matching_subsequence(
        projects in prop::collection::vec(arb_project(), 0..20),
        term in "[a-zA-Z ]{0,4}",
    ) {
        let matcher = Matcher::new(&term);
        let view = filter_projects(&projects, &term);
        let expected: Vec<_> = projects.iter().filter(|p| matcher.matches(p)).cloned().collect();
        prop_assert_eq!(ids(&view), ids(&expected));
    }

    /// Padding and casing of the term never change the result.
    #[test]
    fn term_normalisation_is_idempotent(
        projects in prop::collection::vec(arb_project(), 0..20),
        term in "[a-z]{0,4}",
    ) {
        let padded = format!("  {}\t", term.to_uppercase());
        prop_assert_eq!(
            ids(&filter_projects(&projects, &term)),
            ids(&filter_projects(&projects, &padded))
        );
    }
}
