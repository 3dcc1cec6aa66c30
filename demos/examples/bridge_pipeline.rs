// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end bridge pipeline across two threads.
//!
//! An input thread hit-tests raw samples against a shared snapshot and
//! submits transition-progress payloads; the main thread ticks the
//! dispatcher on a fixed cadence, the way a message loop would. The
//! coalescer sits behind a `Mutex`; the snapshot is immutable and shared
//! without locking.
//!
//! Run:
//! - `cargo run -p trellis_demos --example bridge_pipeline`

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use kurbo::{Point, Rect};
use trellis_events::coalescer::EventCoalescer;
use trellis_events::dispatcher::Dispatcher;
use trellis_events::payloads::{self, ScreenEvent};
use trellis_events::types::{CoalescingKey, Event, HostSink};
use trellis_view_tree::{PointerEvents, ViewNode, ViewTag, ViewTree};

struct PrintSink;

impl HostSink<ViewTag, ScreenEvent> for PrintSink {
    type Error = std::convert::Infallible;

    fn deliver(&mut self, event: &Event<ViewTag, ScreenEvent>) -> Result<(), Self::Error> {
        println!(
            "  deliver {} {} key={} {:?}",
            event.target,
            event.kind,
            event.key.value(),
            event.payload
        );
        Ok(())
    }
}

fn main() {
    // Snapshot: a screen stack whose top screen captures its area.
    let root = ViewNode::new(ViewTag(1), Rect::new(0.0, 0.0, 400.0, 800.0)).with_child(
        ViewNode::new(ViewTag(2), Rect::new(0.0, 0.0, 400.0, 800.0))
            .with_pointer_events(PointerEvents::BoxOnly),
    );
    let tree = Arc::new(ViewTree::try_new(root).expect("tags are unique"));

    let coalescer: Arc<Mutex<EventCoalescer<ViewTag, ScreenEvent>>> =
        Arc::new(Mutex::new(EventCoalescer::new()));

    // Input thread: sample a drag at ~1 kHz and submit progress per sample.
    let producer = {
        let tree = Arc::clone(&tree);
        let coalescer = Arc::clone(&coalescer);
        thread::spawn(move || {
            let mut key = CoalescingKey::ZERO;
            for i in 0..=200_u32 {
                let pt = Point::new(200.0, f64::from(i) * 4.0 + 10.0);
                let Some(target) = tree.resolve_targets(pt).first().copied() else {
                    continue;
                };
                key = key.wrapping_next();
                coalescer.lock().unwrap().submit(
                    target,
                    payloads::TRANSITION_PROGRESS,
                    key,
                    ScreenEvent::transition_progress(f64::from(i) / 200.0, false, true),
                );
                thread::sleep(Duration::from_millis(1));
            }
            // One final lifecycle event once the transition lands.
            coalescer.lock().unwrap().submit(
                ViewTag(2),
                payloads::APPEAR,
                CoalescingKey::ZERO,
                ScreenEvent::Appear,
            );
        })
    };

    // Message loop: tick at ~60 Hz until the producer is done and drained.
    let mut dispatcher = Dispatcher::new();
    let mut sink = PrintSink;
    loop {
        thread::sleep(Duration::from_millis(16));
        let done = producer.is_finished();
        let summary = {
            let mut c = coalescer.lock().unwrap();
            dispatcher
                .tick(&mut c, tree.as_ref(), &mut sink)
                .expect("sink is infallible")
        };
        if summary.delivered > 0 {
            println!("tick: delivered={}", summary.delivered);
        }
        if done && coalescer.lock().unwrap().is_empty() {
            break;
        }
    }
    producer.join().expect("producer thread panicked");

    println!(
        "totals: delivered={} dropped_stale={}",
        dispatcher.delivered(),
        dispatcher.dropped_stale()
    );
}
