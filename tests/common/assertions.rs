//! Domain-specific assertion helpers for pulse harnesses.
//!
//! These wrap `pretty_assertions` and name the pipeline stage at fault in the
//! failure message.

use pulse::{Project, ResultStream, SearchUpdate};

/// Ids of a project list, in order.
pub fn ids(projects: &[Project]) -> Vec<u64> {
    projects.iter().map(|p| p.id.0).collect()
}

/// Assert that a project list holds exactly these ids, in this order.
///
/// ```rust
/// assert_ids!(projects, [1, 3]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($projects:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<u64> = $crate::common::ids(&$projects);
        let expected: Vec<u64> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "emitted project ids differ");
    }};
}

/// Await the next value and require it to be a successful result list.
pub async fn next_ok(stream: &mut ResultStream) -> Vec<Project> {
    match stream.next().await {
        Some(Ok(projects)) => projects,
        Some(Err(err)) => panic!("expected a result list, stream failed: {err}"),
        None => panic!("expected a result list, stream ended"),
    }
}

/// Await the next value and require it to be a terminal failure.
pub async fn next_err(stream: &mut ResultStream) -> pulse::PipelineError {
    match stream.next().await {
        Some(Err(err)) => err,
        Some(Ok(projects)) => panic!("expected a failure, got ids {:?}", ids(&projects)),
        None => panic!("expected a failure, stream ended"),
    }
}

/// Drain whatever is buffered right now without waiting.
pub fn drain(stream: &mut ResultStream) -> Vec<SearchUpdate> {
    std::iter::from_fn(|| stream.try_next()).collect()
}
