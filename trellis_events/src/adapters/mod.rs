// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional adapters for other Trellis crates.

#[cfg(feature = "view_tree_adapter")]
pub mod view_tree;
