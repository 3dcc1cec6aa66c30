// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coalescing basics.
//!
//! Floods one slot with transition-progress samples, submits a second slot,
//! and shows that a tick delivers only the latest state per slot in
//! first-arrival order.
//!
//! Run:
//! - `cargo run -p trellis_demos --example coalescing_basics`

use trellis_events::coalescer::EventCoalescer;
use trellis_events::dispatcher::Dispatcher;
use trellis_events::payloads::{self, ScreenEvent};
use trellis_events::registry::screen_module_registry;
use trellis_events::types::{AllTargetsLive, CoalescingKey, Event, HostSink};

struct PrintSink;

impl HostSink<i32, ScreenEvent> for PrintSink {
    type Error = std::convert::Infallible;

    fn deliver(&mut self, event: &Event<i32, ScreenEvent>) -> Result<(), Self::Error> {
        println!(
            "  deliver target={} kind={} key={} payload={:?}",
            event.target,
            event.kind,
            event.key.value(),
            event.payload
        );
        Ok(())
    }
}

fn main() {
    let registry = screen_module_registry();
    println!("== exported events ==");
    for e in registry.exported_events() {
        println!("  {} -> {}", e.kind, e.registration_name);
    }

    let mut coalescer = EventCoalescer::new();
    let mut key = CoalescingKey::ZERO;

    // 100 rapid progress samples for screen 42; only the last survives.
    for i in 0..=100 {
        key = key.wrapping_next();
        coalescer.submit(
            42,
            payloads::TRANSITION_PROGRESS,
            key,
            ScreenEvent::transition_progress(f64::from(i) / 100.0, false, true),
        );
    }
    // A second slot queued after the first; flushes second.
    coalescer.submit(7, payloads::APPEAR, CoalescingKey::ZERO, ScreenEvent::Appear);

    println!("== tick (pending = {}) ==", coalescer.pending_len());
    let mut dispatcher = Dispatcher::new();
    let mut sink = PrintSink;
    let summary = dispatcher
        .tick(&mut coalescer, &AllTargetsLive, &mut sink)
        .expect("sink is infallible");
    println!(
        "  delivered={} dropped_stale={}",
        summary.delivered, summary.dropped_stale
    );
}
