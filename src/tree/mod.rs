//! Count-folding balanced BST
//!
//! Duplicate insertions fold into an occurrence count on a single node, and
//! balance is restored by rebuilding the whole tree from its sorted content
//! after every insertion. No rotations: the rebuild picks the median of
//! distinct values at every level, so the height stays at
//! ⌈log2(distinct + 1)⌉ however skewed the duplicate counts are.

mod node;
mod projection;
mod rebuild;

pub use node::{Node, NodeRef};
pub use projection::EMPTY_MARKER;

use std::fmt;
use std::rc::Weak;

use tracing::debug;

use crate::TreeError;

/// Height-balanced BST with per-node occurrence counts
///
/// Owns the entire node graph through `root`; `size` counts every insertion,
/// duplicates included. Every insertion triggers a full rebuild from the
/// sorted content, so node identity is not stable across insertions — only
/// values, counts, and structure are.
///
/// Single-threaded by design: all operations run to completion before
/// returning, and concurrent mutation must be serialized by the owner.
#[derive(Debug)]
pub struct BalancedTree<T> {
    root: Option<NodeRef<T>>,
    size: usize,
}

impl<T: Ord + Clone> BalancedTree<T> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Create a tree seeded with one value
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.add_value(value);
        tree
    }

    /// Insert one value, then rebuild the tree into balanced shape
    ///
    /// Equal values fold into the count of the node already holding them.
    /// Each call costs O(n): the content is flattened and reconstructed in
    /// full. That trade keeps the balance bound tight without rotations.
    pub fn add_value(&mut self, value: T) {
        match self.root.clone() {
            None => {
                let root = Node::leaf(value, Weak::new());
                node::recompute_heights(&root);
                self.root = Some(root);
                self.size = 1;
            }
            Some(root) => {
                node::insert(&root, value);
                self.size += 1;
                node::recompute_heights(&root);
                self.rebalance();
            }
        }
    }

    /// Flatten to the expanded sorted sequence and rebuild balanced
    fn rebalance(&mut self) {
        let Some(root) = &self.root else {
            return;
        };
        let expanded = projection::sorted_sequence(root);
        debug_assert_eq!(expanded.len(), self.size, "expansion must cover every insertion");

        // Non-empty input, so the rebuild always yields a root.
        if let Some(new_root) = rebuild::build_balanced(&expanded) {
            let height = node::recompute_heights(&new_root);
            debug!(size = self.size, height, "rebuilt tree");
            self.root = Some(new_root);
        }
    }

    /// Total number of insertions so far, duplicates included
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tree height; fails with [`TreeError::EmptyTree`] on an empty tree
    pub fn height(&self) -> Result<usize, TreeError> {
        let root = self.root.as_ref().ok_or(TreeError::EmptyTree)?;
        Ok(root.borrow().height)
    }

    /// Root node handle, if the tree is non-empty
    pub fn root(&self) -> Option<&NodeRef<T>> {
        self.root.as_ref()
    }

    /// Ascending multiset of the content, expanded by count
    pub fn to_sorted_sequence(&self) -> Result<Vec<T>, TreeError> {
        let root = self.root.as_ref().ok_or(TreeError::EmptyTree)?;
        Ok(projection::sorted_sequence(root))
    }

    /// In-order view padded out to a perfect tree of the current height
    pub fn to_padded_sequence(&self) -> Result<Vec<Option<T>>, TreeError> {
        let root = self.root.as_ref().ok_or(TreeError::EmptyTree)?;
        Ok(projection::padded_sequence(root))
    }

    /// Level-by-level slot matrix; row `i` holds exactly `2^i` entries
    pub fn to_level_matrix(&self) -> Result<Vec<Vec<Option<T>>>, TreeError> {
        let root = self.root.as_ref().ok_or(TreeError::EmptyTree)?;
        Ok(projection::level_matrix(root))
    }

    /// Level matrix rendered as strings: `"<value> (x<count>)"` per occupied
    /// slot, [`EMPTY_MARKER`] per vacant one
    pub fn to_level_matrix_with_counts(&self) -> Result<Vec<Vec<String>>, TreeError>
    where
        T: fmt::Display,
    {
        let root = self.root.as_ref().ok_or(TreeError::EmptyTree)?;
        Ok(projection::string_matrix(root))
    }
}

/// Comma-separated ascending multiset; an empty tree renders as ""
impl<T: Ord + Clone + fmt::Display> fmt::Display for BalancedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = &self.root else {
            return Ok(());
        };
        for (i, value) in projection::sorted_sequence(root).iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
