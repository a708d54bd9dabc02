use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("invalid key: {bits} bit(s) requested from {bytes} byte(s)")]
    InvalidKey { bits: usize, bytes: usize },

    #[error("no record at the requested key")]
    NotFound,

    #[error("failed to allocate trie node")]
    AllocationFailure,
}
