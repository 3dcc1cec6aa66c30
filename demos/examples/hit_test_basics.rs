// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-test basics.
//!
//! Builds a small snapshot with each pointer-events policy and probes a few
//! points, printing who claims each one.
//!
//! Run:
//! - `cargo run -p trellis_demos --example hit_test_basics`

use kurbo::{Point, Rect};
use trellis_view_tree::{PointerEvents, ViewNode, ViewTag, ViewTree};

fn main() {
    // root (Auto, 0..200)
    // ├── toolbar (BoxNone, 0..200 x 0..40) — passes through itself
    // │   └── button (Auto, 10..50 x 5..35)
    // ├── overlay (None, full size) — inert decoration
    // └── modal (BoxOnly, 50..150 x 50..150) — captures its whole area
    let root = ViewNode::new(ViewTag(1), Rect::new(0.0, 0.0, 200.0, 200.0))
        .with_child(
            ViewNode::new(ViewTag(2), Rect::new(0.0, 0.0, 200.0, 40.0))
                .with_pointer_events(PointerEvents::BoxNone)
                .with_child(ViewNode::new(ViewTag(3), Rect::new(10.0, 5.0, 50.0, 35.0))),
        )
        .with_child(
            ViewNode::new(ViewTag(4), Rect::new(0.0, 0.0, 200.0, 200.0))
                .with_pointer_events(PointerEvents::None),
        )
        .with_child(
            ViewNode::new(ViewTag(5), Rect::new(50.0, 50.0, 150.0, 150.0))
                .with_pointer_events(PointerEvents::BoxOnly)
                .with_child(ViewNode::new(ViewTag(6), Rect::new(0.0, 0.0, 50.0, 50.0))),
        );
    let tree = ViewTree::try_new(root).expect("tags are unique");

    let probes = [
        ("inside the toolbar button", Point::new(20.0, 20.0)),
        ("toolbar, but not the button", Point::new(100.0, 20.0)),
        ("inside the modal (and its child)", Point::new(60.0, 60.0)),
        ("root background", Point::new(180.0, 180.0)),
        ("outside everything", Point::new(300.0, 300.0)),
    ];

    println!("== resolve_targets ==");
    for (what, pt) in probes {
        let targets = tree.resolve_targets(pt);
        println!("  ({:>5.1}, {:>5.1}) {what:36} -> {targets:?}", pt.x, pt.y);
    }

    println!("== hit_test path ==");
    if let Some(hit) = tree.hit_test(Point::new(20.0, 20.0)) {
        println!("  target {} via path {:?}", hit.target, hit.path);
    }
}
