//! Searching and traversing the subtree of a node.

use alloc::{collections::VecDeque, vec::Vec};
use core::fmt::{self, Formatter, Debug, Display, Write};
use super::Node;

/// Empty slots trailing the occupied ones are listed one per line up to this many; longer runs are collapsed into a single range line.
const DUMP_EMPTY_SLOT_LINES: usize = 8;

impl<T: Ord> Node<T> {
    /// Searches the subtree in *pre-order*: the node itself is compared with `target` first, then the subtree of each occupied slot is searched in slot order. Returns the first node whose value compares equal to `target`, or `None` if there is none.
    pub fn depth_first_search(&self, target: &T) -> Option<&Node<T>> {
        // Children are pushed in reverse so that slot 0 is popped first.
        let mut stack = Vec::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            if target.cmp(&node.value).is_eq() {
                return Some(node);
            }
            stack.extend(node.children.iter().rev().map(|child| &**child));
        }
        None
    }
    /// Same as [`depth_first_search`], but returns a *mutable* reference to the found node.
    ///
    /// [`depth_first_search`]: #method.depth_first_search " "
    pub fn depth_first_search_mut(&mut self, target: &T) -> Option<&mut Node<T>> {
        let mut stack = Vec::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            if target.cmp(&node.value).is_eq() {
                return Some(node);
            }
            stack.extend(node.children.iter_mut().rev().map(|child| &mut **child));
        }
        None
    }
    /// Searches the subtree in *level order*, using a FIFO queue seeded with the node itself. Nodes of the same depth are compared in slot order. Returns the first node whose value compares equal to `target`, or `None` if the queue runs dry.
    pub fn breadth_first_search(&self, target: &T) -> Option<&Node<T>> {
        let mut queue = VecDeque::new();
        queue.push_back(self);
        while let Some(node) = queue.pop_front() {
            if target.cmp(&node.value).is_eq() {
                return Some(node);
            }
            queue.extend(node.children.iter().map(|child| &**child));
        }
        None
    }
}

impl<T> Node<T> {
    /// Collects the values of the subtree, not including the value of the node itself.
    ///
    /// The order is *not* the textbook pre-order: first come the values of all immediate children in slot order, then, for each immediate child in slot order, that child's own traversal. For a root `R` with children `X` and `Y`, where `X` has the leaf children `X1` and `X2` and `Y` has the leaf child `Y1`, this yields `[X, Y, X1, X2, Y1]`.
    ///
    /// The result is computed eagerly and only depends on the current state of the subtree.
    pub fn traverse_depth_first(&self) -> Vec<&T> {
        let mut values = Vec::new();
        // Expanding a node emits its children's values and schedules each child to be expanded next, in slot order.
        let mut stack = Vec::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            values.extend(node.children.iter().map(|child| &child.value));
            stack.extend(node.children.iter().rev().map(|child| &**child));
        }
        values
    }

    /// Writes a diagnostic dump of the subtree into the specified text sink.
    ///
    /// For every node, starting with this one, a `this: {value}` line is written, followed by one line per slot with either the value of the child in it or `NULL`, after which the occupied slots are dumped recursively in slot order. Long runs of trailing empty slots are written as a single `child_nodes[{first}..{capacity}]: NULL` line.
    ///
    /// # Errors
    /// Fails only if the sink does.
    pub fn write_depth_first<W>(&self, sink: &mut W) -> fmt::Result
    where
        T: Display,
        W: Write + ?Sized,
    {
        let mut stack = Vec::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            writeln!(sink, "this: {}", node.value)?;
            for (index, child) in node.children.iter().enumerate() {
                writeln!(sink, "\tchild_nodes[{}]: {}", index, child.value)?;
            }
            let first_empty = node.children.len();
            if node.capacity - first_empty > DUMP_EMPTY_SLOT_LINES {
                writeln!(sink, "\tchild_nodes[{}..{}]: NULL", first_empty, node.capacity)?;
            } else {
                for index in first_empty..node.capacity {
                    writeln!(sink, "\tchild_nodes[{}]: NULL", index)?;
                }
            }
            stack.extend(node.children.iter().rev().map(|child| &**child));
        }
        Ok(())
    }
    /// Returns a wrapper which formats the subtree the same way [`write_depth_first`] does.
    ///
    /// [`write_depth_first`]: #method.write_depth_first " "
    #[inline(always)]
    pub const fn depth_first_dump(&self) -> DepthFirstDump<'_, T> {
        DepthFirstDump(self)
    }
    /// Prints the diagnostic dump produced by [`write_depth_first`] to the standard output.
    ///
    /// [`write_depth_first`]: #method.write_depth_first " "
    #[cfg(feature = "std")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
    pub fn print_depth_first(&self)
    where
        T: Display,
    {
        print!("{}", self.depth_first_dump());
    }
}

/// A [`Display`] adapter for the diagnostic dump of a node's subtree, created by [`Node::depth_first_dump`].
///
/// [`Display`]: https://doc.rust-lang.org/std/fmt/trait.Display.html " "
/// [`Node::depth_first_dump`]: struct.Node.html#method.depth_first_dump " "
pub struct DepthFirstDump<'a, T>(&'a Node<T>);
impl<T: Display> Display for DepthFirstDump<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.write_depth_first(f)
    }
}
impl<T: Debug> Debug for DepthFirstDump<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DepthFirstDump").field(self.0).finish()
    }
}
