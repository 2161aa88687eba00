//! JSON document persistence.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{OutputError, Result};

/// File extension of every written document.
pub const DOCUMENT_EXTENSION: &str = "json";

/// Path a document named `name` is written to under `output_dir`.
pub fn document_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{name}.{DOCUMENT_EXTENSION}"))
}

/// Serialize `document` as pretty JSON to `<output_dir>/<name>.json`,
/// replacing any previous file.
pub fn write_document<T: Serialize>(
    output_dir: &Path,
    name: &str,
    document: &T,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|source| OutputError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = document_path(output_dir, name);
    let file = File::create(&path).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document).map_err(|source| {
        OutputError::Serialize {
            path: path.clone(),
            source,
        }
    })?;
    writer.flush().map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "wrote document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpdb_model::{GroupDocument, Record};

    #[test]
    fn writes_pretty_json_with_string_keys() {
        let dir = tempfile::tempdir().unwrap();
        let document = GroupDocument::from([(2, vec![Record::new("set-1")])]);

        let path = write_document(&dir.path().join("nested"), "demo", &document).unwrap();

        assert_eq!(path, dir.path().join("nested").join("demo.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\n  \"2\": ["));
        assert!(written.contains("\"__source\": \"set-1\""));
    }

    #[test]
    fn create_dir_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let err = write_document(&blocker.join("sub"), "demo", &GroupDocument::new()).unwrap_err();
        assert!(matches!(err, OutputError::CreateDir { .. }));
    }
}
