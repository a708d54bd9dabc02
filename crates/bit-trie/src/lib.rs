//! Bitwise prefix trie.
//!
//! Records are stored at the end of the bit path spelled by their key, one
//! branch per bit starting from the first bit of the prefix. Lookups match the
//! exact key length only and walks report deeper entries before the shallower
//! entries above them.

pub mod bit;
pub use bit::{bit_index, bit_position, get_bit};

pub mod key;
pub use key::Key;

pub mod error;
pub use error::TrieError;

pub mod attr;
pub use attr::{FnAttr, TrieAttr};

pub mod trie;
pub use trie::{Node, NodeRef, ROOT, Trie};

pub mod iter;
pub use iter::*;

#[cfg(test)]
mod proptests;
