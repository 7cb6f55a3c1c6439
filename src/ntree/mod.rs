//! Trees which allow nodes to have up to a fixed number of children, chosen once per tree and stored in positional *slots*.
//!
//! # Example
//! ```rust
//! use ntree::ntree::{NTree, NodeFactory};
//!
//! // Create the tree. The only thing we need for that is the fan-out, i.e. the maximum number of
//! // children that any node of the tree may have. `NTree::new()` would make it effectively unbounded.
//! let mut tree = NTree::with_max_children(2);
//!
//! // Nodes are created by a factory bound to the tree, which makes sure that every node has the
//! // same number of slots as the tree was configured with.
//! let factory = NodeFactory::new(&tree);
//! let mut root = factory.create_node('A');
//! root.add_child(factory.create_node('B')).unwrap();
//! root.add_child(factory.create_node('C')).unwrap();
//!
//! // Both slots are now occupied, so a third child is rejected and handed back to us.
//! let rejected = root.add_child(factory.create_node('D')).unwrap_err();
//! assert_eq!(rejected.into_node().value(), &'D');
//!
//! // Grandchildren are added by reaching into a slot.
//! root.child_at_mut(0).unwrap().unwrap().add_child(factory.create_node('E')).unwrap();
//! tree.set_root(root);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.child_count(), 2);
//! assert_eq!(root.subtree_count(), 3);
//! assert_eq!(root.traverse_depth_first(), [&'B', &'C', &'E']);
//! assert_eq!(tree.breadth_first_search(&'E').map(|node| *node.value()), Some('E'));
//! assert!(tree.depth_first_search(&'D').is_none());
//! ```

mod base;
mod factory;
mod node;
mod slots;
mod traverse;

pub use base::NTree;
pub use factory::NodeFactory;
pub use node::Node;
pub use slots::{Slots, SlotsIter};
pub use traverse::DepthFirstDump;
