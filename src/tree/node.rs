//! BST node: one distinct value, its fold count, owned children, weak parent
//!
//! Ownership is tree-shaped and acyclic: each node owns its children through
//! `Rc`, and the parent link is a `Weak` back-reference used only for upward
//! traversal, so dropping the tree drops the whole node graph.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::{Rc, Weak};

/// Shared handle to a tree node
pub type NodeRef<T> = Rc<RefCell<Node<T>>>;

/// A single BST node
///
/// Holds one distinct value together with the number of times it has been
/// inserted, plus a cached subtree height. The height is recomputed by a full
/// sweep from the root after every shape change, not maintained incrementally.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) count: usize,
    pub(crate) left: Option<NodeRef<T>>,
    pub(crate) right: Option<NodeRef<T>>,
    pub(crate) parent: Weak<RefCell<Node<T>>>,
    pub(crate) height: usize,
}

impl<T> Node<T> {
    /// Create a leaf holding one occurrence of `value`
    ///
    /// Pass `Weak::new()` for a root, or a downgraded handle to the parent.
    pub(crate) fn leaf(value: T, parent: Weak<RefCell<Node<T>>>) -> NodeRef<T> {
        Rc::new(RefCell::new(Self {
            value,
            count: 1,
            left: None,
            right: None,
            parent,
            height: 1,
        }))
    }

    /// Value stored at this node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Number of times `value` has been inserted
    pub fn count(&self) -> usize {
        self.count
    }

    /// Cached subtree height (1 for a leaf)
    pub fn height(&self) -> usize {
        self.height
    }

    /// Left child handle, if present
    pub fn left(&self) -> Option<NodeRef<T>> {
        self.left.clone()
    }

    /// Right child handle, if present
    pub fn right(&self) -> Option<NodeRef<T>> {
        self.right.clone()
    }

    /// Parent handle; `None` exactly at the root
    pub fn parent(&self) -> Option<NodeRef<T>> {
        self.parent.upgrade()
    }
}

/// Descend from `node` and place `value`
///
/// Equal values fold into the existing node's count; otherwise a fresh leaf
/// is attached at the first absent slot on the search path, with its parent
/// back-reference wired. This never rebalances on its own: the owning tree
/// recomputes heights and rebuilds after the descent returns.
pub(crate) fn insert<T: Ord>(node: &NodeRef<T>, value: T) {
    let ordering = value.cmp(&node.borrow().value);
    match ordering {
        Ordering::Equal => node.borrow_mut().count += 1,
        Ordering::Less => {
            let child = node.borrow().left.clone();
            match child {
                Some(child) => insert(&child, value),
                None => {
                    let leaf = Node::leaf(value, Rc::downgrade(node));
                    node.borrow_mut().left = Some(leaf);
                }
            }
        }
        Ordering::Greater => {
            let child = node.borrow().right.clone();
            match child {
                Some(child) => insert(&child, value),
                None => {
                    let leaf = Node::leaf(value, Rc::downgrade(node));
                    node.borrow_mut().right = Some(leaf);
                }
            }
        }
    }
}

/// Recompute and cache heights for the whole subtree under `node`
///
/// An absent child contributes 0. Returns the height of `node` itself, so
/// the top-level call yields the tree height.
pub(crate) fn recompute_heights<T>(node: &NodeRef<T>) -> usize {
    let (left, right) = {
        let node = node.borrow();
        (node.left.clone(), node.right.clone())
    };
    let left_height = left.map_or(0, |child| recompute_heights(&child));
    let right_height = right.map_or(0, |child| recompute_heights(&child));

    let height = left_height.max(right_height) + 1;
    node.borrow_mut().height = height;
    height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_value_folds_into_count() {
        let root = Node::leaf(7, Weak::new());
        insert(&root, 7);
        insert(&root, 7);

        let root = root.borrow();
        assert_eq!(root.count(), 3);
        assert!(root.left().is_none());
        assert!(root.right().is_none());
    }

    #[test]
    fn test_insert_attaches_leaves_with_parent_links() {
        let root = Node::leaf(50, Weak::new());
        insert(&root, 20);
        insert(&root, 80);
        insert(&root, 10);

        assert!(root.borrow().parent().is_none());

        let left = root.borrow().left().expect("20 goes left of 50");
        assert_eq!(*left.borrow().value(), 20);
        let parent = left.borrow().parent().expect("child has a parent");
        assert!(Rc::ptr_eq(&parent, &root));

        let grandchild = left.borrow().left().expect("10 goes left of 20");
        assert_eq!(*grandchild.borrow().value(), 10);
        let parent = grandchild.borrow().parent().expect("child has a parent");
        assert!(Rc::ptr_eq(&parent, &left));

        let right = root.borrow().right().expect("80 goes right of 50");
        assert_eq!(*right.borrow().value(), 80);
    }

    #[test]
    fn test_recompute_heights_on_skewed_chain() {
        // Ascending insertion without rebuild degenerates into a right chain
        let root = Node::leaf(1, Weak::new());
        insert(&root, 2);
        insert(&root, 3);
        insert(&root, 4);

        assert_eq!(recompute_heights(&root), 4);
        assert_eq!(root.borrow().height(), 4);

        let child = root.borrow().right().expect("right chain");
        assert_eq!(child.borrow().height(), 3);
    }
}
