// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis View Tree: a per-frame snapshot of a view hierarchy with hit testing.
//!
//! A [`ViewTree`] is an immutable snapshot of a declarative view hierarchy,
//! published once per layout pass and replaced wholesale on the next one.
//! Each [`ViewNode`] carries parent-relative bounds, a [`PointerEvents`]
//! policy, and visibility flags; children are stored in paint order, so the
//! last child is topmost.
//!
//! ## Hit testing
//!
//! [`ViewTree::resolve_targets`] maps a point in root coordinates to the view
//! that should receive a pointer event. The traversal is depth-first and
//! topmost-child-first (reverse paint order), with the per-node policy
//! deciding whether the node itself, its descendants, or neither may claim
//! the point:
//!
//! - [`PointerEvents::None`]: the node and its entire subtree are skipped.
//! - [`PointerEvents::BoxNone`]: descendants are tested; the node itself never is.
//! - [`PointerEvents::BoxOnly`]: the node claims the point; descendants are never tested.
//! - [`PointerEvents::Auto`]: descendants first, otherwise the node itself.
//!
//! Containment is half-open on each axis (`x0 <= x < x1`), so a point on an
//! edge shared by adjacent siblings is claimed by exactly one of them.
//!
//! ## Not a layout engine
//!
//! Bounds and visibility are computed elsewhere; this crate only consumes
//! them. There is no measurement, arrangement, or incremental mutation: build
//! a fresh snapshot with [`ViewTree::try_new`] after every layout pass.
//!
//! ### Minimal usage
//!
//! ```
//! use trellis_view_tree::{PointerEvents, ViewNode, ViewTag, ViewTree};
//! use kurbo::{Point, Rect};
//!
//! let root = ViewNode::new(ViewTag(1), Rect::new(0.0, 0.0, 100.0, 100.0))
//!     .with_child(
//!         ViewNode::new(ViewTag(2), Rect::new(10.0, 10.0, 50.0, 50.0))
//!             .with_pointer_events(PointerEvents::BoxOnly),
//!     );
//! let tree = ViewTree::try_new(root).unwrap();
//!
//! assert_eq!(tree.resolve_targets(Point::new(20.0, 20.0)), vec![ViewTag(2)]);
//! assert_eq!(tree.resolve_targets(Point::new(60.0, 60.0)), vec![ViewTag(1)]);
//! assert!(tree.resolve_targets(Point::new(200.0, 200.0)).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{Hit, ViewTree, ViewTreeError};
pub use types::{PointerEvents, ViewFlags, ViewNode, ViewTag};
