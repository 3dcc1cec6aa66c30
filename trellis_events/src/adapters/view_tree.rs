// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter binding target liveness to a view-tree snapshot.
//!
//! ## Feature
//!
//! Enable with `view_tree_adapter`.
//!
//! With this adapter, [`Dispatcher::tick`](crate::dispatcher::Dispatcher::tick)
//! takes the current [`ViewTree`] directly: a target that was hit-tested
//! against an older snapshot and has since left the tree is dropped at flush
//! time instead of being delivered.

use trellis_view_tree::{ViewTag, ViewTree};

use crate::types::TargetLookup;

impl TargetLookup<ViewTag> for ViewTree {
    #[inline]
    fn is_live(&self, target: &ViewTag) -> bool {
        self.contains(*target)
    }
}
