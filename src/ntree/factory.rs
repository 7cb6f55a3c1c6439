use core::{
    fmt::{self, Formatter, Debug},
    marker::PhantomData,
};
use tracing::trace;
use super::{NTree, Node};

/// Creates nodes with the number of slots of the tree it was bound to.
///
/// The factory copies the tree's [`max_children`] when it is created rather than borrowing the tree, so it can be used while the tree is being mutated.
///
/// [`max_children`]: struct.NTree.html#method.max_children " "
pub struct NodeFactory<T> {
    max_children: usize,
    _marker: PhantomData<fn(T) -> Node<T>>,
}
impl<T> NodeFactory<T> {
    /// Creates a factory bound to the specified tree.
    #[inline]
    pub const fn new(tree: &NTree<T>) -> Self {
        Self {
            max_children: tree.max_children(),
            _marker: PhantomData,
        }
    }
    /// Returns the number of slots that created nodes have.
    #[inline(always)]
    pub const fn max_children(&self) -> usize {
        self.max_children
    }
    /// Creates a node without children, holding the specified value.
    pub fn create_node(&self, value: T) -> Node<T> {
        trace!(capacity = self.max_children, "created node");
        Node::new(value, self.max_children)
    }
}
impl<T> From<&NTree<T>> for NodeFactory<T> {
    #[inline(always)]
    fn from(op: &NTree<T>) -> Self {
        Self::new(op)
    }
}
impl<T> Copy for NodeFactory<T> {}
impl<T> Clone for NodeFactory<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Debug for NodeFactory<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeFactory")
            .field("max_children", &self.max_children)
            .finish()
    }
}
