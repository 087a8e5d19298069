use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Failures raised while loading a corpus or answering lookups.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The corpus directory or one of its documents could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus directory not found: {path}")]
    CorpusNotFound { path: PathBuf },

    #[error("duplicate document id: {id}")]
    DuplicateDocument { id: String },

    /// A query was issued against an index with no documents.
    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("document not found: {id}")]
    DocumentNotFound { id: String },
}

impl SearchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SearchError::Io { path: path.into(), source }
    }
}
