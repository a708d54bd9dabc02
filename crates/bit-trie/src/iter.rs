use crate::{Node, Trie};

/// Post-order walk: bit-0 subtree, bit-1 subtree, then the node itself.
#[derive(Clone)]
pub struct Walk<'a, T> {
    nodes: &'a [Node<T>],
    // Node index and whether its children were already pushed.
    stack: Vec<(usize, bool)>,
}

impl<'a, T> Walk<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], start: Option<usize>) -> Self {
        Self {
            nodes,
            stack: start.map(|index| (index, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some((cur, expanded)) = self.stack.pop() {
            let node = &self.nodes[cur];
            if expanded {
                if let Some(record) = &node.record {
                    return Some(record);
                }
                continue;
            }
            self.stack.push((cur, true));
            if let Some(one) = node.children[1] {
                self.stack.push((one, false));
            }
            if let Some(zero) = node.children[0] {
                self.stack.push((zero, false));
            }
        }
        None
    }
}

impl<'a, T, A> IntoIterator for &'a Trie<T, A>
where
    A: crate::TrieAttr<T>,
{
    type Item = &'a T;

    type IntoIter = Walk<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.walk()
    }
}
