//! JSON file store: re-reads a project list from disk on every fetch.
//!
//! The file holds a JSON array of `{ "id", "name", "tags" }` objects. Edits to
//! the file show up on the next settled query without restarting.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pulse_core::{Project, ProjectStore, StoreError};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProjectStore for JsonFileStore {
    async fn fetch_all(&self) -> Result<Vec<Project>, StoreError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn reads_projects_in_file_order() {
        let file = write_file(
            r#"[
                {"id": 10, "name": "Zeta", "tags": ["ops"]},
                {"id": 4, "name": "Delta"}
            ]"#,
        );
        let projects = JsonFileStore::new(file.path()).fetch_all().await.unwrap();
        let ids: Vec<u64> = projects.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![10, 4]);
        assert_eq!(projects[0].tags, vec!["ops".to_string()]);
        assert!(projects[1].tags.is_empty());
    }

    #[tokio::test]
    async fn picks_up_edits_between_calls() {
        let file = write_file(r#"[{"id": 1, "name": "One"}]"#);
        let store = JsonFileStore::new(file.path());
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);

        std::fs::write(file.path(), r#"[{"id": 1, "name": "One"}, {"id": 2, "name": "Two"}]"#)
            .unwrap();
        assert_eq!(store.fetch_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        let err = store.fetch_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let file = write_file(r#"{"id": 1}"#);
        let err = JsonFileStore::new(file.path()).fetch_all().await.unwrap_err();
        match err {
            StoreError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
