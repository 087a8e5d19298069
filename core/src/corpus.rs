//! Loading the document collection the index is built from.

use crate::error::{Result, SearchError};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub const DEFAULT_EXTENSION: &str = "txt";

/// Immutable set of `(document_id, raw_text)` pairs, ordered by id.
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    documents: BTreeMap<String, String>,
}

impl Corpus {
    /// Build a corpus from in-memory documents. Ids must be unique.
    pub fn from_documents<I, K, V>(docs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut documents = BTreeMap::new();
        for (id, text) in docs {
            let id = id.into();
            if documents.contains_key(&id) {
                return Err(SearchError::DuplicateDocument { id });
            }
            documents.insert(id, text.into());
        }
        Ok(Self { documents })
    }

    /// Read every `*.{extension}` file directly under `root`; the file name is the document id.
    ///
    /// Files are decoded as ISO-8859-1, one byte per character. Any read failure
    /// aborts the load so no partial corpus is ever returned.
    pub fn from_dir<P: AsRef<Path>>(root: P, extension: &str) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(SearchError::CorpusNotFound { path: root.to_path_buf() });
        }

        let mut documents = BTreeMap::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                SearchError::io(path, e.into())
            })?;
            let p = entry.path();
            if p.extension().and_then(|s| s.to_str()) != Some(extension) { continue; }
            // follows symlinks, so a dangling `*.txt` link fails the load
            let meta = fs::metadata(p).map_err(|e| SearchError::io(p, e))?;
            if meta.is_dir() { continue; }

            let Some(id) = entry.file_name().to_str() else {
                tracing::warn!(path = %p.display(), "skipping document with non UTF-8 file name");
                continue;
            };
            let bytes = fs::read(p).map_err(|e| SearchError::io(p, e))?;
            tracing::debug!(id, bytes = bytes.len(), "loaded document");
            documents.insert(id.to_string(), decode_latin1(&bytes));
        }

        tracing::info!(root = %root.display(), num_docs = documents.len(), "loaded corpus");
        Ok(Self { documents })
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn get(&self, id: &str) -> Option<&str> { self.documents.get(id).map(String::as_str) }

    /// Documents in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents.iter().map(|(id, text)| (id.as_str(), text.as_str()))
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_only_matching_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("b.md"), "beta").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let corpus = Corpus::from_dir(dir.path(), DEFAULT_EXTENSION).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get("a.txt"), Some("alpha"));
    }

    #[test]
    fn decodes_high_bytes_as_latin1() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("c.txt"), [b'c', 0xE9, b'f', 0x93]).unwrap();
        let corpus = Corpus::from_dir(dir.path(), "txt").unwrap();
        assert_eq!(corpus.get("c.txt"), Some("c\u{e9}f\u{93}"));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_document_link_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("b.txt")).unwrap();

        let err = Corpus::from_dir(dir.path(), "txt").unwrap_err();
        assert!(matches!(err, SearchError::Io { path, .. } if path.ends_with("b.txt")));
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let err = Corpus::from_dir(dir.path().join("nope"), "txt").unwrap_err();
        assert!(matches!(err, SearchError::CorpusNotFound { .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Corpus::from_documents([("a", "x"), ("a", "y")]).unwrap_err();
        assert!(matches!(err, SearchError::DuplicateDocument { id } if id == "a"));
    }
}
