//! Static project data used across harnesses.

use pulse::Project;

use crate::common::builders::ProjectBuilder;

/// The three sample projects every scenario starts from.
///
/// | id | name  | tags            |
/// |----|-------|-----------------|
/// | 1  | Alpha | angular, cli    |
/// | 2  | Beta  | rxjs, http      |
/// | 3  | Gamma | forms, routing  |
pub fn dataset() -> Vec<Project> {
    vec![
        ProjectBuilder::new(1, "Alpha").tag("angular").tag("cli").build(),
        ProjectBuilder::new(2, "Beta").tag("rxjs").tag("http").build(),
        ProjectBuilder::new(3, "Gamma").tag("forms").tag("routing").build(),
    ]
}

/// The same dataset as a JSON document, as a file-backed store would read it.
pub const DATASET_JSON: &str = r#"[
  { "id": 1, "name": "Alpha", "tags": ["angular", "cli"] },
  { "id": 2, "name": "Beta",  "tags": ["rxjs", "http"] },
  { "id": 3, "name": "Gamma", "tags": ["forms", "routing"] }
]"#;

/// Terms paired with the ids they select from [`dataset`].
pub const TERM_EXPECTATIONS: &[(&str, &[u64])] = &[
    ("", &[1, 2, 3]),
    ("   ", &[1, 2, 3]),
    ("cli", &[1]),
    ("ALPHA", &[1]),
    ("  beta ", &[2]),
    ("RxJs", &[2]),
    ("a", &[1, 2, 3]),
    ("ing", &[3]),
    ("zzz", &[]),
];
