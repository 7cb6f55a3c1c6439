use alloc::{boxed::Box, vec::Vec};
use core::{mem::ManuallyDrop, ptr};
use smallvec::SmallVec;
use tracing::{debug, trace};
use crate::{CapacityExceededError, IndexError};
use super::Slots;

/// How many children a node can hold before its child list spills onto the heap.
const INLINE_CHILDREN: usize = 4;

/// The occupied prefix of a node's slots.
pub(super) type ChildList<T> = SmallVec<[Box<Node<T>>; INLINE_CHILDREN]>;

/// A node of an N-ary tree, holding a value and a fixed number of slots for child nodes.
///
/// Nodes own their children exclusively. Dropping a node drops its whole subtree, and detaching a child with [`remove_child`] hands the child's subtree back to the caller.
///
/// The slots are left-packed at all times: slot `i` is occupied if and only if `i < self.child_count()`.
///
/// Dropping, cloning, counting, searching and traversing use an explicit work list instead of recursion, so they work on arbitrarily deep trees. The `Debug`, `PartialEq` and `Hash` implementations are derived and recurse once per level of depth.
///
/// [`remove_child`]: #method.remove_child " "
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub(super) value: T,
    pub(super) capacity: usize,
    pub(super) children: ChildList<T>,
}
impl<T> Node<T> {
    /// Creates a node without children which has `capacity` slots.
    ///
    /// Nodes which are going to be put into an [`NTree`] should be created with a [`NodeFactory`] for that tree instead, which picks the capacity the tree was configured with.
    ///
    /// # Panics
    /// Will panic if `capacity` is zero.
    ///
    /// [`NTree`]: struct.NTree.html " "
    /// [`NodeFactory`]: struct.NodeFactory.html " "
    #[track_caller]
    pub fn new(value: T, capacity: usize) -> Self {
        assert!(capacity > 0, "nodes must have at least one slot for children");
        Self {
            value,
            capacity,
            children: SmallVec::new(),
        }
    }
    /// Returns a reference to the value stored in the node.
    #[inline(always)]
    pub const fn value(&self) -> &T {
        &self.value
    }
    /// Consumes the node, dropping its subtree, and returns the stored value.
    #[inline]
    #[allow(clippy::missing_const_for_fn)] // cannot drop at compile time
    pub fn into_value(self) -> T {
        let mut node = ManuallyDrop::new(self);
        // Drops the subtree through the non-recursive `Drop` of the children.
        node.children = SmallVec::new();
        unsafe {
            // SAFETY: the value is read exactly once and the node is never dropped afterwards;
            // its only other field with a destructor has just been replaced with an empty list.
            ptr::read(&node.value)
        }
    }
    /// Returns the number of slots the node has, i.e. the maximum number of immediate children it can hold.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
    /// Returns the number of occupied slots, counting only the immediate children of the node.
    #[inline(always)]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
    /// Returns `true` if none of the slots are occupied, `false` otherwise.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
    /// Returns the number of nodes in the subtree rooted at this node, *not* counting the node itself.
    pub fn subtree_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&Node<T>> = self.children.iter().map(|child| &**child).collect();
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter().map(|child| &**child));
        }
        count
    }
    /// Returns a view of all slots of the node, empty ones included.
    #[inline]
    pub fn children(&self) -> Slots<'_, T> {
        Slots::new(&self.children, self.capacity)
    }
    /// Returns a reference to the child in the specified slot, or `None` if the slot is empty.
    ///
    /// # Errors
    /// Will fail if `index` is not below the capacity of the node.
    pub fn child_at(&self, index: usize) -> Result<Option<&Node<T>>, IndexError> {
        self.check_index(index)?;
        Ok(self.children.get(index).map(|child| &**child))
    }
    /// Returns a *mutable* reference to the child in the specified slot, or `None` if the slot is empty.
    ///
    /// # Errors
    /// Will fail if `index` is not below the capacity of the node.
    pub fn child_at_mut(&mut self, index: usize) -> Result<Option<&mut Node<T>>, IndexError> {
        self.check_index(index)?;
        Ok(self.children.get_mut(index).map(|child| &mut **child))
    }
    /// Attaches `node` as a child, putting it into the first empty slot.
    ///
    /// The capacity of `node` is not checked against the capacity of `self`.
    ///
    /// # Errors
    /// Will fail if every slot is already occupied. The node is left unchanged in that case, and `node` is returned inside the error.
    pub fn add_child(&mut self, node: Node<T>) -> Result<(), CapacityExceededError<T>> {
        let slot = self.children.len();
        if slot >= self.capacity {
            debug!(capacity = self.capacity, "rejected child: every slot is occupied");
            return Err(CapacityExceededError {
                node,
                capacity: self.capacity,
            });
        }
        self.children.push(Box::new(node));
        trace!(slot, capacity = self.capacity, "attached child");
        Ok(())
    }
    /// Empties the specified slot and shifts all slots after it one position to the left, returning the child which was in the slot, or `None` if the slot was already empty.
    ///
    /// The last slot is always empty afterwards. Removing from an empty slot leaves the children in place, since all slots after an empty one are empty as well.
    ///
    /// # Errors
    /// Will fail if `index` is not below the capacity of the node. Nothing is shifted in that case.
    pub fn remove_child(&mut self, index: usize) -> Result<Option<Node<T>>, IndexError> {
        self.check_index(index)?;
        if index >= self.children.len() {
            trace!(slot = index, "removal from an empty slot");
            return Ok(None);
        }
        let removed = self.children.remove(index);
        trace!(slot = index, remaining = self.children.len(), "detached child");
        Ok(Some(*removed))
    }

    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index < self.capacity {
            Ok(())
        } else {
            debug!(index, capacity = self.capacity, "rejected out-of-bounds slot index");
            Err(IndexError {
                index,
                capacity: self.capacity,
            })
        }
    }

    /// Copies the value and capacity, leaving the slots empty.
    fn clone_detached(&self) -> Self
    where
        T: Clone,
    {
        Self {
            value: self.value.clone(),
            capacity: self.capacity,
            children: SmallVec::new(),
        }
    }
}
impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        // Each frame holds the source node, its copy so far and the next slot to copy.
        let mut stack = Vec::new();
        stack.push((self, self.clone_detached(), 0_usize));
        while let Some((source, copy, next)) = stack.pop() {
            if let Some(child) = source.children.get(next) {
                stack.push((source, copy, next + 1));
                stack.push((&**child, child.clone_detached(), 0));
            } else if let Some((_, parent, _)) = stack.last_mut() {
                parent.children.push(Box::new(copy));
            } else {
                return copy;
            }
        }
        unreachable!("the copy of the root is returned when its frame is popped")
    }
}
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending: Vec<Box<Node<T>>> = self.children.drain(..).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain(..));
            // `node` goes out of scope with no children left.
        }
    }
}
