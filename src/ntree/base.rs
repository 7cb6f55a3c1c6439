use tracing::trace;
use super::{Node, NodeFactory};

/// An N-ary tree with a fixed maximum number of children per node.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NTree<T> {
    root: Option<Node<T>>,
    max_children: usize,
}
impl<T> NTree<T> {
    /// Creates an empty tree whose nodes can have an effectively unbounded number of children.
    #[inline]
    pub const fn new() -> Self {
        Self {
            root: None,
            max_children: usize::MAX,
        }
    }
    /// Creates an empty tree whose nodes can have at most `max_children` children each.
    ///
    /// # Panics
    /// Will panic if `max_children` is zero.
    #[track_caller]
    pub const fn with_max_children(max_children: usize) -> Self {
        assert!(max_children > 0, "trees must allow at least one child per node");
        Self {
            root: None,
            max_children,
        }
    }
    /// Returns the number of slots that nodes of the tree have.
    #[inline(always)]
    pub const fn max_children(&self) -> usize {
        self.max_children
    }
    /// Returns a factory which creates nodes with the number of slots the tree was configured with.
    #[inline]
    pub const fn factory(&self) -> NodeFactory<T> {
        NodeFactory::new(self)
    }
    /// Returns a reference to the root node, or `None` if it hasn't been set.
    #[inline(always)]
    pub const fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }
    /// Returns a *mutable* reference to the root node, or `None` if it hasn't been set.
    #[inline(always)]
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_mut()
    }
    /// Replaces the root node, returning the previous one, if there was any.
    ///
    /// The number of slots in `node` is not checked against [`max_children`]; nodes created by the tree's [`factory`] always match.
    ///
    /// [`max_children`]: #method.max_children " "
    /// [`factory`]: #method.factory " "
    pub fn set_root(&mut self, node: Node<T>) -> Option<Node<T>> {
        trace!(capacity = node.capacity(), max_children = self.max_children, "set root node");
        self.root.replace(node)
    }
    /// Removes the root node, leaving the tree empty, and returns it.
    #[inline]
    pub fn take_root(&mut self) -> Option<Node<T>> {
        self.root.take()
    }
    /// Returns the number of nodes in the tree, root included.
    pub fn count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| 1 + root.subtree_count())
    }
}
impl<T: Ord> NTree<T> {
    /// Runs a depth-first search from the root node, or returns `None` if the tree is empty.
    ///
    /// See [`Node::depth_first_search`] for the order in which nodes are visited.
    ///
    /// [`Node::depth_first_search`]: struct.Node.html#method.depth_first_search " "
    #[inline]
    pub fn depth_first_search(&self, target: &T) -> Option<&Node<T>> {
        self.root.as_ref()?.depth_first_search(target)
    }
    /// Runs a breadth-first search from the root node, or returns `None` if the tree is empty.
    ///
    /// See [`Node::breadth_first_search`] for the order in which nodes are visited.
    ///
    /// [`Node::breadth_first_search`]: struct.Node.html#method.breadth_first_search " "
    #[inline]
    pub fn breadth_first_search(&self, target: &T) -> Option<&Node<T>> {
        self.root.as_ref()?.breadth_first_search(target)
    }
}
impl<T> Default for NTree<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
