//! # Count-Folding Balanced Binary Search Tree
//!
//! This library implements a BST over a totally-ordered value type where
//! duplicate insertions fold into an occurrence count on a single node, and
//! balance is restored by a full structural rebuild after every insertion.
//!
//! ## Core Algorithm
//!
//! 1. **Fold-on-insert**: equal values never create a second node; they
//!    increment the existing node's count
//! 2. **Rebuild-based balancing**: after each insertion the tree is flattened
//!    to its sorted content and reconstructed around the median of *distinct*
//!    values, giving height ⌈log2(distinct + 1)⌉ regardless of duplicate skew
//! 3. **Derived views**: sorted multiset, padded in-order layout, and a
//!    level-by-level slot matrix (row `i` has exactly `2^i` slots) for
//!    fixed-grid renderers
//!
//! The rebuild-on-every-insert contract is deliberate: insertion costs O(n),
//! and node identity is not stable across insertions; only values, counts,
//! and structure are.
//!
//! ## Usage Example
//!
//! ```
//! use foldbst::BalancedTree;
//!
//! let mut tree = BalancedTree::new();
//! for value in [50, 20, 80, 20] {
//!     tree.add_value(value);
//! }
//! assert_eq!(tree.size(), 4);
//! assert_eq!(tree.height()?, 2);
//! assert_eq!(tree.to_sorted_sequence()?, vec![20, 20, 50, 80]);
//! # Ok::<(), foldbst::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod tree; // Node model, insertion, rebuild, projections

// Re-exports for convenience
pub use tree::{BalancedTree, Node, NodeRef, EMPTY_MARKER};

use thiserror::Error;

/// Errors reported by tree queries
///
/// The domain admits few failure modes: mutation always succeeds, and
/// comparison is infallible for `T: Ord`. What remains is querying a shape
/// that does not exist yet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// Height or projection requested on a tree with no nodes
    #[error("operation requires a non-empty tree")]
    EmptyTree,
}
