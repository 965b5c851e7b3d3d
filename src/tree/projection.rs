//! Read-only projections of the tree shape
//!
//! All views are computed on demand by walking the current node graph. They
//! read the cached heights, so callers must only project a tree whose heights
//! are up to date (the owning tree re-sweeps after every mutation).

use std::fmt::Display;

use super::node::NodeRef;

/// Marker string for vacant slots in the string matrix
pub const EMPTY_MARKER: &str = "∅";

/// In-order traversal expanded by count: the ascending multiset
pub(crate) fn sorted_sequence<T: Clone>(root: &NodeRef<T>) -> Vec<T> {
    let mut out = Vec::new();
    push_in_order(root, &mut out);
    out
}

fn push_in_order<T: Clone>(node: &NodeRef<T>, out: &mut Vec<T>) {
    let node = node.borrow();
    if let Some(left) = &node.left {
        push_in_order(left, out);
    }
    for _ in 0..node.count {
        out.push(node.value.clone());
    }
    if let Some(right) = &node.right {
        push_in_order(right, out);
    }
}

/// In-order expansion padded out to a perfect tree of the same height
///
/// An absent child of a node at level `L` (root = level 1) of a height-`h`
/// tree contributes `2^(h - L) - 1` vacant slots in its position, so the
/// layout has fixed slot positions even with missing subtrees.
pub(crate) fn padded_sequence<T: Clone>(root: &NodeRef<T>) -> Vec<Option<T>> {
    let root_height = root.borrow().height;
    let mut out = Vec::new();
    push_padded(root, 1, root_height, &mut out);
    out
}

fn push_padded<T: Clone>(
    node: &NodeRef<T>,
    level: usize,
    root_height: usize,
    out: &mut Vec<Option<T>>,
) {
    let node = node.borrow();
    let vacancies = (1usize << (root_height - level)) - 1;

    match &node.left {
        Some(left) => push_padded(left, level + 1, root_height, out),
        None => out.extend(std::iter::repeat(None).take(vacancies)),
    }
    for _ in 0..node.count {
        out.push(Some(node.value.clone()));
    }
    match &node.right {
        Some(right) => push_padded(right, level + 1, root_height, out),
        None => out.extend(std::iter::repeat(None).take(vacancies)),
    }
}

/// Per-level slot matrix: row `i` holds exactly `2^i` entries
///
/// Vacant slots are `None`, padded recursively for missing subtrees, giving
/// a complete binary-tree coordinate system independent of occupancy.
pub(crate) fn level_matrix<T: Clone>(root: &NodeRef<T>) -> Vec<Vec<Option<T>>> {
    occupancy(root)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|slot| slot.map(|(value, _)| value))
                .collect()
        })
        .collect()
}

/// String rendition of the level matrix
///
/// Occupied slots render as `"<value> (x<count>)"`, vacant slots as
/// [`EMPTY_MARKER`].
pub(crate) fn string_matrix<T: Clone + Display>(root: &NodeRef<T>) -> Vec<Vec<String>> {
    occupancy(root)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|slot| match slot {
                    Some((value, count)) => format!("{value} (x{count})"),
                    None => EMPTY_MARKER.to_string(),
                })
                .collect()
        })
        .collect()
}

/// Shared recursion for the matrix views: value and count per occupied slot
fn occupancy<T: Clone>(root: &NodeRef<T>) -> Vec<Vec<Option<(T, usize)>>> {
    let root_height = root.borrow().height;
    let mut rows = vec![Vec::new(); root_height];
    fill_occupancy(root, 0, root_height, &mut rows);

    debug_assert!(
        rows.iter().enumerate().all(|(i, row)| row.len() == 1 << i),
        "row i must hold exactly 2^i slots"
    );
    rows
}

fn fill_occupancy<T: Clone>(
    node: &NodeRef<T>,
    level: usize,
    root_height: usize,
    rows: &mut [Vec<Option<(T, usize)>>],
) {
    let node = node.borrow();
    rows[level].push(Some((node.value.clone(), node.count)));

    match &node.left {
        Some(left) => fill_occupancy(left, level + 1, root_height, rows),
        None => pad_vacant(level + 1, root_height, rows),
    }
    match &node.right {
        Some(right) => fill_occupancy(right, level + 1, root_height, rows),
        None => pad_vacant(level + 1, root_height, rows),
    }
}

/// A vacant subtree rooted at `level` still owns slots on every deeper row:
/// `2^(row - level)` of them on row `row`
fn pad_vacant<T: Clone>(level: usize, root_height: usize, rows: &mut [Vec<Option<(T, usize)>>]) {
    for row in level..root_height {
        let slots = 1usize << (row - level);
        rows[row].extend(std::iter::repeat(None).take(slots));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::recompute_heights;
    use crate::tree::rebuild::build_balanced;

    fn sample_tree() -> NodeRef<i32> {
        // 5 (x2) at the root, 3 (x3) with leaf 1 on the left, 8 on the right
        let root = build_balanced(&[1, 3, 3, 3, 5, 5, 8]).expect("non-empty input");
        recompute_heights(&root);
        root
    }

    #[test]
    fn test_sorted_sequence_expands_counts() {
        let root = sample_tree();
        assert_eq!(sorted_sequence(&root), vec![1, 3, 3, 3, 5, 5, 8]);
    }

    #[test]
    fn test_padded_sequence_fills_perfect_tree_slots() {
        let root = sample_tree();
        assert_eq!(
            padded_sequence(&root),
            vec![
                Some(1),
                Some(3),
                Some(3),
                Some(3),
                None,
                Some(5),
                Some(5),
                None,
                Some(8),
                None,
            ]
        );
    }

    #[test]
    fn test_level_matrix_rows_double_per_level() {
        let root = sample_tree();
        let matrix = level_matrix(&root);

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix[0], vec![Some(5)]);
        assert_eq!(matrix[1], vec![Some(3), Some(8)]);
        assert_eq!(matrix[2], vec![Some(1), None, None, None]);
    }

    #[test]
    fn test_string_matrix_renders_counts_and_markers() {
        let root = sample_tree();
        let matrix = string_matrix(&root);

        assert_eq!(matrix[0], vec!["5 (x2)"]);
        assert_eq!(matrix[1], vec!["3 (x3)", "8 (x1)"]);
        assert_eq!(
            matrix[2],
            vec!["1 (x1)", EMPTY_MARKER, EMPTY_MARKER, EMPTY_MARKER]
        );
    }
}
