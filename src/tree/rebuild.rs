//! Full structural rebuild from the expanded sorted sequence
//!
//! Balancing picks the median of *distinct* values, not the median position
//! of the raw multiset: duplicates collapse into one node's count, so the
//! node-population median is what keeps the physical tree height-balanced.
//! The rebuilt height is ⌈log2(distinct + 1)⌉ regardless of duplicate skew.

use std::rc::{Rc, Weak};

use super::node::{Node, NodeRef};

/// Build a balanced tree from a sorted expanded sequence
///
/// `values` must be ascending, so each distinct value's occurrences form one
/// contiguous run. Every node is constructed fresh; the previous node graph
/// plays no part. Returns `None` for an empty slice (empty subtrees in the
/// recursion).
pub(crate) fn build_balanced<T: Ord + Clone>(values: &[T]) -> Option<NodeRef<T>> {
    if values.is_empty() {
        return None;
    }
    debug_assert!(
        values.windows(2).all(|pair| pair[0] <= pair[1]),
        "expanded sequence must be sorted ascending"
    );

    let distinct = distinct_run_starts(values);
    let median = distinct[distinct.len() / 2];

    // Sorted input makes the median's occurrences one contiguous run
    // starting at its first position.
    let center = values.partition_point(|v| v < median);
    let occ = values.partition_point(|v| v <= median) - center;
    debug_assert!(occ >= 1);
    debug_assert!(values[center..center + occ].iter().all(|v| v == median));

    let node = Node::leaf(median.clone(), Weak::new());
    node.borrow_mut().count = occ;

    if let Some(left) = build_balanced(&values[..center]) {
        left.borrow_mut().parent = Rc::downgrade(&node);
        node.borrow_mut().left = Some(left);
    }
    if let Some(right) = build_balanced(&values[center + occ..]) {
        right.borrow_mut().parent = Rc::downgrade(&node);
        node.borrow_mut().right = Some(right);
    }

    Some(node)
}

/// First occurrence of each distinct value, in ascending order
fn distinct_run_starts<T: PartialEq>(values: &[T]) -> Vec<&T> {
    let mut distinct: Vec<&T> = Vec::new();
    for value in values {
        if distinct.last().map_or(true, |last| *last != value) {
            distinct.push(value);
        }
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::recompute_heights;

    #[test]
    fn test_single_run_collapses_to_one_node() {
        let root = build_balanced(&[7, 7, 7]).expect("non-empty input");
        assert_eq!(recompute_heights(&root), 1);

        let root = root.borrow();
        assert_eq!(*root.value(), 7);
        assert_eq!(root.count(), 3);
        assert!(root.left().is_none());
        assert!(root.right().is_none());
    }

    #[test]
    fn test_median_is_by_distinct_count_not_position() {
        // Distinct values [1, 3, 5, 8]: median index 2 selects 5 even though
        // the positional median of the multiset falls inside the run of 3s.
        let root = build_balanced(&[1, 3, 3, 3, 5, 5, 8]).expect("non-empty input");
        assert_eq!(recompute_heights(&root), 3);

        assert_eq!(*root.borrow().value(), 5);
        assert_eq!(root.borrow().count(), 2);

        let left = root.borrow().left().expect("left subtree");
        assert_eq!(*left.borrow().value(), 3);
        assert_eq!(left.borrow().count(), 3);

        let leaf = left.borrow().left().expect("1 below 3");
        assert_eq!(*leaf.borrow().value(), 1);
        assert!(left.borrow().right().is_none());

        let right = root.borrow().right().expect("right subtree");
        assert_eq!(*right.borrow().value(), 8);
        assert_eq!(right.borrow().count(), 1);
    }

    #[test]
    fn test_parent_links_wired_on_attachment() {
        let root = build_balanced(&[1, 2, 3, 4, 5]).expect("non-empty input");
        assert!(root.borrow().parent().is_none());

        let left = root.borrow().left().expect("left subtree");
        let parent = left.borrow().parent().expect("attached child has parent");
        assert!(Rc::ptr_eq(&parent, &root));
    }

    #[test]
    fn test_seven_distinct_values_build_perfect_tree() {
        let root = build_balanced(&[10, 20, 30, 40, 50, 60, 70]).expect("non-empty input");
        assert_eq!(recompute_heights(&root), 3);
        assert_eq!(*root.borrow().value(), 40);
    }
}
