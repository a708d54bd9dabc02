use crate::Key;

/// Capabilities a [`Trie`](crate::Trie) is created with: how to derive the key
/// of a stored record and what to do with a record when it is walked.
pub trait TrieAttr<T> {
    /// Key of `record`. Must be deterministic for a given record.
    fn key<'a>(&self, record: &'a T) -> Key<'a>;

    /// Called once per stored record by [`Trie::show`](crate::Trie::show) and
    /// [`Trie::subtree_show`](crate::Trie::subtree_show).
    fn walk(&self, record: &T);
}

/// Attribute pair built from two plain functions.
pub struct FnAttr<T> {
    pub key: fn(&T) -> Key<'_>,
    pub walk: fn(&T),
}

impl<T> FnAttr<T> {
    pub fn new(key: fn(&T) -> Key<'_>, walk: fn(&T)) -> Self {
        Self { key, walk }
    }
}

impl<T> Clone for FnAttr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FnAttr<T> {}

impl<T> TrieAttr<T> for FnAttr<T> {
    fn key<'a>(&self, record: &'a T) -> Key<'a> {
        (self.key)(record)
    }

    fn walk(&self, record: &T) {
        (self.walk)(record)
    }
}
