// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot container and hit testing.

use alloc::vec::Vec;
use kurbo::Point;

use crate::types::{PointerEvents, ViewFlags, ViewNode, ViewTag};

/// Errors raised while building a snapshot.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ViewTreeError {
    /// A tag appeared more than once in the snapshot.
    #[error("duplicate view tag {0} in snapshot")]
    DuplicateTag(ViewTag),
}

/// Result of a hit test.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hit {
    /// The view that claimed the point.
    pub target: ViewTag,
    /// Structural path from root to target (inclusive). Ancestors appear
    /// regardless of their own policy; only the target claims the event.
    pub path: Vec<ViewTag>,
}

/// An immutable per-frame snapshot of the view hierarchy.
///
/// Built once per layout pass with [`ViewTree::try_new`] and discarded
/// wholesale on the next pass. The snapshot is never mutated after
/// publication, so it may be freely shared between the input-sampling and
/// dispatch threads without locking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewTree {
    root: Option<ViewNode>,
    // Sorted tag index for O(log n) liveness checks at flush time.
    tags: Vec<ViewTag>,
}

impl ViewTree {
    /// Create a snapshot with no views. All hit tests return empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from a root node, validating tag uniqueness.
    pub fn try_new(root: ViewNode) -> Result<Self, ViewTreeError> {
        let mut tags = Vec::with_capacity(root.subtree_len());
        collect_tags(&root, &mut tags);
        tags.sort_unstable();
        for w in tags.windows(2) {
            if w[0] == w[1] {
                return Err(ViewTreeError::DuplicateTag(w[0]));
            }
        }
        Ok(Self {
            root: Some(root),
            tags,
        })
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&ViewNode> {
        self.root.as_ref()
    }

    /// Number of views in the snapshot.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the snapshot has no views.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns true if `tag` refers to a view in this snapshot.
    ///
    /// Used by the dispatch layer to drop events whose target was removed
    /// between hit test and flush.
    pub fn contains(&self, tag: ViewTag) -> bool {
        self.tags.binary_search(&tag).is_ok()
    }

    /// Hit test a point in root coordinates.
    ///
    /// Returns the claiming view and its structural root→target path, or
    /// `None` if the point lands in dead space.
    pub fn hit_test(&self, pt: Point) -> Option<Hit> {
        let root = self.root.as_ref()?;
        let mut path = Vec::new();
        let target = hit_node(root, pt, &mut path)?;
        Some(Hit { target, path })
    }

    /// Resolve the ordered targets for a point, highest priority first.
    ///
    /// With the four-valued policy exactly one view can claim a point, so the
    /// result holds at most one tag. Use [`ViewTree::hit_test`] when the full
    /// ancestor path is needed.
    pub fn resolve_targets(&self, pt: Point) -> Vec<ViewTag> {
        match self.hit_test(pt) {
            Some(hit) => alloc::vec![hit.target],
            None => Vec::new(),
        }
    }
}

fn collect_tags(node: &ViewNode, out: &mut Vec<ViewTag>) {
    out.push(node.tag);
    for child in &node.children {
        collect_tags(child, out);
    }
}

/// Depth-first, topmost-child-first traversal.
///
/// `pt` is in the parent's coordinate space. On success the root→target path
/// is left in `path`; on failure `path` is restored to its previous state.
fn hit_node(node: &ViewNode, pt: Point, path: &mut Vec<ViewTag>) -> Option<ViewTag> {
    if !node.flags.contains(ViewFlags::VISIBLE) {
        return None;
    }
    // `None` short-circuits: the node and its entire subtree contribute nothing.
    if node.pointer_events == PointerEvents::None {
        return None;
    }
    if !contains_half_open(node.bounds, pt) {
        return None;
    }
    path.push(node.tag);
    // Child bounds are parent-relative; translate into this node's space.
    let local = Point::new(pt.x - node.bounds.x0, pt.y - node.bounds.y0);
    let found = match node.pointer_events {
        PointerEvents::None => None,
        PointerEvents::BoxOnly => Some(node.tag),
        PointerEvents::BoxNone => hit_children(node, local, path),
        PointerEvents::Auto => hit_children(node, local, path).or(Some(node.tag)),
    };
    if found.is_none() {
        path.pop();
    }
    found
}

/// Half-open containment: inclusive of the minimum, exclusive of the maximum
/// on each axis, so an edge shared by adjacent siblings is claimed by exactly
/// one of them.
#[inline]
fn contains_half_open(bounds: kurbo::Rect, pt: Point) -> bool {
    pt.x >= bounds.x0 && pt.x < bounds.x1 && pt.y >= bounds.y0 && pt.y < bounds.y1
}

fn hit_children(node: &ViewNode, local: Point, path: &mut Vec<ViewTag>) -> Option<ViewTag> {
    // Reverse paint order: the topmost painted child is tested first.
    for child in node.children.iter().rev() {
        if let Some(target) = hit_node(child, local, path) {
            return Some(target);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Rect;

    fn node(tag: i32, x0: f64, y0: f64, x1: f64, y1: f64) -> ViewNode {
        ViewNode::new(ViewTag(tag), Rect::new(x0, y0, x1, y1))
    }

    #[test]
    fn empty_tree_resolves_nothing() {
        let tree = ViewTree::empty();
        assert!(tree.resolve_targets(Point::new(0.0, 0.0)).is_empty());
        assert!(tree.is_empty());
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let root = node(1, 0.0, 0.0, 100.0, 100.0)
            .with_child(node(2, 0.0, 0.0, 10.0, 10.0))
            .with_child(node(2, 10.0, 0.0, 20.0, 10.0));
        assert_eq!(
            ViewTree::try_new(root),
            Err(ViewTreeError::DuplicateTag(ViewTag(2)))
        );
    }

    // Concrete scenario from the host contract: root(0..100, Auto) with a
    // BoxOnly child at 10..50.
    #[test]
    fn auto_root_with_box_only_child() {
        let root = node(1, 0.0, 0.0, 100.0, 100.0)
            .with_child(node(2, 10.0, 10.0, 50.0, 50.0).with_pointer_events(PointerEvents::BoxOnly));
        let tree = ViewTree::try_new(root).unwrap();

        assert_eq!(tree.resolve_targets(Point::new(20.0, 20.0)), vec![ViewTag(2)]);
        assert_eq!(tree.resolve_targets(Point::new(60.0, 60.0)), vec![ViewTag(1)]);
        assert!(tree.resolve_targets(Point::new(200.0, 200.0)).is_empty());
    }

    #[test]
    fn none_excludes_whole_subtree() {
        let root = node(1, 0.0, 0.0, 100.0, 100.0).with_child(
            node(2, 0.0, 0.0, 100.0, 100.0)
                .with_pointer_events(PointerEvents::None)
                .with_child(node(3, 0.0, 0.0, 100.0, 100.0)),
        );
        let tree = ViewTree::try_new(root).unwrap();
        // The `None` child and its descendant never claim; the root does.
        assert_eq!(tree.resolve_targets(Point::new(50.0, 50.0)), vec![ViewTag(1)]);
    }

    #[test]
    fn none_root_yields_empty() {
        let root = node(1, 0.0, 0.0, 100.0, 100.0)
            .with_pointer_events(PointerEvents::None)
            .with_child(node(2, 0.0, 0.0, 100.0, 100.0));
        let tree = ViewTree::try_new(root).unwrap();
        assert!(tree.resolve_targets(Point::new(50.0, 50.0)).is_empty());
    }

    #[test]
    fn box_only_captures_regardless_of_descendants() {
        let root = node(1, 0.0, 0.0, 100.0, 100.0).with_child(
            node(2, 10.0, 10.0, 90.0, 90.0)
                .with_pointer_events(PointerEvents::BoxOnly)
                .with_child(node(3, 0.0, 0.0, 80.0, 80.0)),
        );
        let tree = ViewTree::try_new(root).unwrap();
        assert_eq!(tree.resolve_targets(Point::new(50.0, 50.0)), vec![ViewTag(2)]);
    }

    #[test]
    fn box_none_passes_through_to_descendants_or_nothing() {
        let root = node(1, 0.0, 0.0, 100.0, 100.0)
            .with_pointer_events(PointerEvents::BoxNone)
            .with_child(node(2, 10.0, 10.0, 20.0, 20.0));
        let tree = ViewTree::try_new(root).unwrap();
        // Inside the child: the child claims.
        assert_eq!(tree.resolve_targets(Point::new(15.0, 15.0)), vec![ViewTag(2)]);
        // Inside the root only: passes through, nobody claims.
        assert!(tree.resolve_targets(Point::new(50.0, 50.0)).is_empty());
    }

    #[test]
    fn topmost_sibling_wins_on_overlap() {
        // Children in paint order; 3 is painted last and is topmost.
        let root = node(1, 0.0, 0.0, 100.0, 100.0)
            .with_child(node(2, 0.0, 0.0, 60.0, 60.0))
            .with_child(node(3, 40.0, 40.0, 100.0, 100.0));
        let tree = ViewTree::try_new(root).unwrap();
        assert_eq!(tree.resolve_targets(Point::new(50.0, 50.0)), vec![ViewTag(3)]);
        assert_eq!(tree.resolve_targets(Point::new(10.0, 10.0)), vec![ViewTag(2)]);
    }

    #[test]
    fn shared_edge_is_claimed_once() {
        // Siblings share x = 50; half-open bounds give it to the right one.
        let root = node(1, 0.0, 0.0, 100.0, 100.0)
            .with_child(node(2, 0.0, 0.0, 50.0, 100.0))
            .with_child(node(3, 50.0, 0.0, 100.0, 100.0));
        let tree = ViewTree::try_new(root).unwrap();
        assert_eq!(tree.resolve_targets(Point::new(50.0, 10.0)), vec![ViewTag(3)]);
        assert_eq!(tree.resolve_targets(Point::new(49.999, 10.0)), vec![ViewTag(2)]);
    }

    #[test]
    fn bounds_are_parent_relative() {
        // Grandchild at 5..15 inside child at 20..60: world range 25..35.
        let root = node(1, 0.0, 0.0, 100.0, 100.0).with_child(
            node(2, 20.0, 20.0, 60.0, 60.0).with_child(node(3, 5.0, 5.0, 15.0, 15.0)),
        );
        let tree = ViewTree::try_new(root).unwrap();
        assert_eq!(tree.resolve_targets(Point::new(30.0, 30.0)), vec![ViewTag(3)]);
        // Inside the child but outside the grandchild.
        assert_eq!(tree.resolve_targets(Point::new(50.0, 50.0)), vec![ViewTag(2)]);
    }

    #[test]
    fn invisible_subtree_is_skipped() {
        let root = node(1, 0.0, 0.0, 100.0, 100.0).with_child(
            node(2, 0.0, 0.0, 100.0, 100.0)
                .with_flags(ViewFlags::empty())
                .with_child(node(3, 0.0, 0.0, 100.0, 100.0)),
        );
        let tree = ViewTree::try_new(root).unwrap();
        assert_eq!(tree.resolve_targets(Point::new(50.0, 50.0)), vec![ViewTag(1)]);
    }

    #[test]
    fn hit_path_is_root_to_target() {
        let root = node(1, 0.0, 0.0, 100.0, 100.0).with_child(
            node(2, 0.0, 0.0, 100.0, 100.0)
                .with_pointer_events(PointerEvents::BoxNone)
                .with_child(node(3, 10.0, 10.0, 20.0, 20.0)),
        );
        let tree = ViewTree::try_new(root).unwrap();
        let hit = tree.hit_test(Point::new(15.0, 15.0)).unwrap();
        assert_eq!(hit.target, ViewTag(3));
        // The BoxNone ancestor still appears on the structural path.
        assert_eq!(hit.path, vec![ViewTag(1), ViewTag(2), ViewTag(3)]);
    }

    #[test]
    fn contains_tracks_snapshot_membership() {
        let tree = ViewTree::try_new(
            node(1, 0.0, 0.0, 10.0, 10.0).with_child(node(7, 0.0, 0.0, 1.0, 1.0)),
        )
        .unwrap();
        assert!(tree.contains(ViewTag(7)));
        assert!(!tree.contains(ViewTag(8)));
        assert_eq!(tree.len(), 2);
    }
}
