use std::path::{Path, PathBuf};

use thiserror::Error;

use super::verse_target::VerseTarget;

#[derive(Error, Debug)]
pub enum VerseSourceError {
    #[error("failed to read verses from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid verse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path}:{line}: expected \"<verse number> <text>\", got {content:?}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },
    #[error("no verses found in {path}")]
    Empty { path: PathBuf },
}

/// Domain interface for loading an ordered verse sequence.
///
/// Implementations must keep the file's order; it is the order the
/// participant is expected to recite in.
pub trait VerseSource: Send {
    fn load(&self, path: &Path) -> Result<Vec<VerseTarget>, VerseSourceError>;
}
