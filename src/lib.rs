//! Implements fixed fan-out N-ary trees and the search and traversal algorithms to work with them.
//!
//! ------------------------
//!
//! # Overview
//! An [`NTree`] owns at most one root [`Node`], and every node owns a fixed number of *slots* for its children. The number of slots (the *fan-out* or *capacity*) is chosen once per tree and shared by all nodes created for it through a [`NodeFactory`]. Children are owned exclusively by their parent: there are no parent back-references and no shared nodes, so a tree can never contain a cycle.
//!
//! Slots are always *left-packed*: occupied slots form a contiguous prefix and all empty slots trail them. Adding a child fills the first empty slot, and removing one shifts every later slot one position to the left. Positional access with [`Node::child_at`] and [`Node::remove_child`] therefore addresses the same child as long as no removal happened before it.
//!
//! Nodes implement pre-order [depth-first search], level-order [breadth-first search] and a fully materialized [depth-first traversal] of their subtree.
//!
//! # Storage
//! Since the occupied slots are always a prefix, a node only stores that prefix, in a [`SmallVec`] with room for four children inline, together with its capacity. The empty slots are implicit. This makes the default, effectively unbounded capacity of [`NTree::new`] free in terms of memory, while [`Node::children`] still presents the full fixed-length slot sequence.
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Node::print_depth_first`] and `std` support in `tracing` and `thiserror`. Without it, the crate only requires `alloc`.
//!
//! # Logging
//! Mutations and rejected operations emit [`tracing`] events at the `trace` and `debug` levels respectively. The crate never installs a subscriber on its own.
//!
//! # Public dependencies
//! - `smallvec` - `^1.13`
//!
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`tracing`]: https://docs.rs/tracing " "
//! [depth-first search]: ntree/struct.Node.html#method.depth_first_search " "
//! [breadth-first search]: ntree/struct.Node.html#method.breadth_first_search " "
//! [depth-first traversal]: ntree/struct.Node.html#method.traverse_depth_first " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod ntree;
pub use ntree::{NTree, Node, NodeFactory, Slots};

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::ntree::{
        NTree,
        Node as NTreeNode,
        NodeFactory as NTreeNodeFactory,
        Slots as NTreeSlots,
    };
    #[doc(no_inline)]
    pub use crate::{
        IndexError as NTreeIndexError,
        CapacityExceededError as NTreeCapacityExceededError,
    };
}

use thiserror::Error;

/// The error type returned by methods which address a child slot by its index, produced when the index is not below the node's capacity.
///
/// Negative indices cannot be expressed, so this is only ever caused by an index which is too large.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Error)]
#[error("slot index {index} is out of bounds for a node with a capacity of {capacity}")]
pub struct IndexError {
    /// The index which was requested.
    pub index: usize,
    /// The capacity of the node, i.e. the number of slots it has.
    pub capacity: usize,
}

/// The error type returned by [`Node::add_child`] when every slot of the node is already occupied.
///
/// The node which was attempted to be added is handed back, so that it doesn't get dropped if it could instead be attached somewhere else in the event of a failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot add more children to a node with a capacity of {capacity}")]
pub struct CapacityExceededError<T> {
    /// The rejected node.
    pub node: Node<T>,
    /// The capacity of the node which was full.
    pub capacity: usize,
}
impl<T> CapacityExceededError<T> {
    /// Returns the rejected node, discarding the rest of the error.
    #[allow(clippy::missing_const_for_fn)] // cannot drop at compile time
    pub fn into_node(self) -> Node<T> {
        self.node
    }
}
