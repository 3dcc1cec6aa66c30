// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the view tree: tags, pointer-events policies, flags, and nodes.

use alloc::vec::Vec;
use kurbo::Rect;

/// Identifier for a view within a tree snapshot.
///
/// Tags are assigned by the host and are opaque to this crate beyond the
/// uniqueness requirement enforced by
/// [`ViewTree::try_new`](crate::ViewTree::try_new). The host protocol uses
/// 32-bit signed tags, so this newtype preserves that range.
///
/// A tag is only meaningful relative to a snapshot; the same tag may refer to
/// a view in one snapshot and to nothing in the next. Consumers that hold
/// tags across snapshots should re-validate them with
/// [`ViewTree::contains`](crate::ViewTree::contains).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewTag(pub i32);

impl core::fmt::Display for ViewTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-node policy controlling whether the node and/or its descendants may be
/// hit-test targets.
///
/// Variant names follow the host's `pointer-events` values.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvents {
    /// Neither the node nor any descendant may be a target.
    None,
    /// The node itself is never a target, but descendants are still tested.
    BoxNone,
    /// The node claims the point if hit; descendants are never tested.
    BoxOnly,
    /// The node is a candidate after its descendants.
    #[default]
    Auto,
}

bitflags::bitflags! {
    /// Node flags consumed from the layout pass.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ViewFlags: u8 {
        /// Node is visible. An invisible node is skipped during hit testing
        /// together with its subtree.
        const VISIBLE = 0b0000_0001;
    }
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// A single view in a snapshot.
///
/// Bounds are parent-relative; children are in paint order with the last
/// child topmost. Nodes are owned by the snapshot and immutable once the
/// snapshot is published.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewNode {
    /// Snapshot-unique identifier.
    pub tag: ViewTag,
    /// Hit-test policy for this node and its subtree.
    pub pointer_events: PointerEvents,
    /// Visibility flags.
    pub flags: ViewFlags,
    /// Bounds in the parent's coordinate space.
    pub bounds: Rect,
    /// Children in paint order (last = topmost).
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    /// Create a node with default policy ([`PointerEvents::Auto`]) and flags.
    pub fn new(tag: ViewTag, bounds: Rect) -> Self {
        Self {
            tag,
            pointer_events: PointerEvents::default(),
            flags: ViewFlags::default(),
            bounds,
            children: Vec::new(),
        }
    }

    /// Set the pointer-events policy.
    #[must_use]
    pub fn with_pointer_events(mut self, pe: PointerEvents) -> Self {
        self.pointer_events = pe;
        self
    }

    /// Set the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ViewFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Append a child (painted after, and thus above, existing children).
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children in paint order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_auto() {
        let n = ViewNode::new(ViewTag(1), Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(n.pointer_events, PointerEvents::Auto);
        assert!(n.flags.contains(ViewFlags::VISIBLE));
    }

    #[test]
    fn children_keep_paint_order() {
        let n = ViewNode::new(ViewTag(1), Rect::new(0.0, 0.0, 10.0, 10.0)).with_children([
            ViewNode::new(ViewTag(2), Rect::ZERO),
            ViewNode::new(ViewTag(3), Rect::ZERO),
        ]);
        let tags: alloc::vec::Vec<_> = n.children.iter().map(|c| c.tag).collect();
        assert_eq!(tags, [ViewTag(2), ViewTag(3)]);
        assert_eq!(n.subtree_len(), 3);
    }

    #[test]
    fn tag_display() {
        use alloc::string::ToString;
        assert_eq!(ViewTag(42).to_string(), "#42");
    }
}
