use std::path::PathBuf;

use bit_trie::TrieError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read route file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Trie(#[from] TrieError),

    #[error("failed to encode routes: {0}")]
    Json(#[from] serde_json::Error),
}
