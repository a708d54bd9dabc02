use tracing::trace;

use crate::{Key, TrieAttr, TrieError, Walk};

/// Arena index of the root node.
pub const ROOT: usize = 0;

pub struct Trie<T, A> {
    nodes: Vec<Node<T>>,
    count: usize,
    attr: A,
}

#[derive(Clone)]
pub struct Node<T> {
    pub children: [Option<usize>; 2],
    pub record: Option<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            children: [None, None],
            record: None,
        }
    }
}

impl<T> Node<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn child(&self, bit: bool) -> Option<usize> {
        self.children[bit as usize]
    }

    pub fn is_terminal(&self) -> bool {
        self.record.is_some()
    }
}

/// A node found in a [`Trie`], usable as the start of a walk.
pub struct NodeRef<'a, T> {
    nodes: &'a [Node<T>],
    index: usize,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn record(&self) -> Option<&'a T> {
        self.nodes[self.index].record.as_ref()
    }

    /// Post-order walk of the subtree rooted at this node.
    pub fn walk(&self) -> Walk<'a, T> {
        Walk::new(self.nodes, Some(self.index))
    }
}

impl<T, A> Trie<T, A>
where
    A: TrieAttr<T>,
{
    pub fn new(attr: A) -> Self {
        Self {
            nodes: vec![Node::new()],
            count: 0,
            attr,
        }
    }

    pub fn attr(&self) -> &A {
        &self.attr
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef {
            nodes: &self.nodes,
            index: ROOT,
        }
    }

    fn new_node(&mut self) -> Result<usize, TrieError> {
        self.nodes
            .try_reserve(1)
            .map_err(|_| TrieError::AllocationFailure)?;
        let index = self.nodes.len();
        self.nodes.push(Node::new());
        Ok(index)
    }

    /// Follows `key` from the root, creating branch nodes as needed, and
    /// returns the index of the node at the end of the path.
    fn path_create(&mut self, key: &Key<'_>) -> Result<usize, TrieError> {
        let mut index = ROOT;
        for i in (0..key.len()).rev() {
            let bit = key.bit(i);
            index = match self.nodes[index].child(bit) {
                Some(child) => child,
                None => {
                    let child = self.new_node()?;
                    self.nodes[index].children[bit as usize] = Some(child);
                    child
                }
            };
        }
        Ok(index)
    }

    fn path_find(&self, key: &Key<'_>) -> Result<usize, TrieError> {
        key.validate()?;
        let mut index = ROOT;
        for i in (0..key.len()).rev() {
            index = self.nodes[index]
                .child(key.bit(i))
                .ok_or(TrieError::NotFound)?;
        }
        if self.nodes[index].is_terminal() {
            Ok(index)
        } else {
            Err(TrieError::NotFound)
        }
    }

    /// Stores `record` at the end of its key path. A record already stored
    /// there is replaced and returned.
    pub fn insert(&mut self, record: T) -> Result<Option<T>, TrieError> {
        let key = self.attr.key(&record);
        key.validate()?;
        trace!(bits = %key, len = key.len(), "trie insert");
        let index = self.path_create(&key)?;

        let prev = self.nodes[index].record.replace(record);
        if prev.is_none() {
            self.count += 1;
        }
        Ok(prev)
    }

    /// Exact-length lookup. Fails with `NotFound` when the path is missing or
    /// ends in a branch node.
    pub fn search(&self, key: &Key<'_>) -> Result<NodeRef<'_, T>, TrieError> {
        let index = self.path_find(key)?;
        Ok(NodeRef {
            nodes: &self.nodes,
            index,
        })
    }

    pub fn get(&self, key: &Key<'_>) -> Option<&T> {
        self.path_find(key)
            .ok()
            .and_then(|index| self.nodes[index].record.as_ref())
    }

    /// Post-order walk of the whole trie.
    pub fn walk(&self) -> Walk<'_, T> {
        Walk::new(&self.nodes, Some(ROOT))
    }

    /// Post-order walk below the node stored at exactly `key`. Empty when
    /// there is no record there.
    pub fn subtree(&self, key: &Key<'_>) -> Walk<'_, T> {
        Walk::new(&self.nodes, self.path_find(key).ok())
    }

    /// Hands every record to the walk capability, in walk order.
    pub fn show(&self) {
        for record in self.walk() {
            self.attr.walk(record);
        }
    }

    /// Hands every record below `key` to the walk capability. Does nothing
    /// when `key` has no record.
    pub fn subtree_show(&self, key: &Key<'_>) {
        for record in self.subtree(key) {
            self.attr.walk(record);
        }
    }
}
