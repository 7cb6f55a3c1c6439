use alloc::boxed::Box;
use core::{
    fmt::{self, Formatter, Debug},
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator},
};
use super::Node;

/// A read-only view of the slots of a node, empty ones included.
///
/// The view has exactly as many slots as the node's capacity. Since nodes are left-packed, the occupied slots come first and are followed by empty slots until the end.
pub struct Slots<'a, T> {
    occupied: &'a [Box<Node<T>>],
    capacity: usize,
}
impl<'a, T> Slots<'a, T> {
    #[inline(always)]
    pub(super) fn new(occupied: &'a [Box<Node<T>>], capacity: usize) -> Self {
        Self { occupied, capacity }
    }
    /// Returns the total number of slots, which is the capacity of the node.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.capacity
    }
    /// Returns `true` if there are no slots at all. Nodes always have at least one slot, so this is `false` for every view obtained from a node.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.capacity == 0
    }
    /// Returns the number of occupied slots.
    #[inline(always)]
    pub const fn occupied_len(&self) -> usize {
        self.occupied.len()
    }
    /// Returns the child in the specified slot, or `None` if the slot is empty or out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a Node<T>> {
        self.occupied.get(index).map(|child| &**child)
    }
    /// Returns an iterator over the children in the occupied slots, in slot order.
    #[inline]
    pub fn occupied(&self) -> impl DoubleEndedIterator<Item = &'a Node<T>> + ExactSizeIterator + FusedIterator + 'a {
        self.occupied.iter().map(|child| &**child)
    }
    /// Returns an iterator over every slot, yielding `None` for the empty ones.
    #[inline]
    pub fn iter(&self) -> SlotsIter<'a, T> {
        SlotsIter {
            occupied: self.occupied,
            front: 0,
            back: self.capacity,
        }
    }
}
impl<T> Copy for Slots<'_, T> {}
impl<T> Clone for Slots<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: Debug> Debug for Slots<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slots")
            .field("occupied", &self.occupied)
            .field("capacity", &self.capacity)
            .finish()
    }
}
impl<'a, T> IntoIterator for Slots<'a, T> {
    type Item = Option<&'a Node<T>>;
    type IntoIter = SlotsIter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the slots of a node, yielding `Some` for occupied slots and `None` for empty ones.
///
/// Created by [`Slots::iter`]. The iterator is lazy, so iterating over the slots of a node with an effectively unbounded capacity only costs as much as the part which is actually consumed.
///
/// [`Slots::iter`]: struct.Slots.html#method.iter " "
pub struct SlotsIter<'a, T> {
    occupied: &'a [Box<Node<T>>],
    front: usize,
    back: usize,
}
impl<'a, T> Iterator for SlotsIter<'a, T> {
    type Item = Option<&'a Node<T>>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let slot = self.occupied.get(self.front).map(|child| &**child);
        self.front += 1;
        Some(slot)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}
impl<T> DoubleEndedIterator for SlotsIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.occupied.get(self.back).map(|child| &**child))
    }
}
impl<T> ExactSizeIterator for SlotsIter<'_, T> {}
impl<T> FusedIterator for SlotsIter<'_, T> {}
impl<T> Clone for SlotsIter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            occupied: self.occupied,
            front: self.front,
            back: self.back,
        }
    }
}
impl<T: Debug> Debug for SlotsIter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotsIter")
            .field("occupied", &self.occupied)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
