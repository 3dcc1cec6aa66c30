// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dispatcher: drains the coalescer once per scheduling tick.
//!
//! ## Tick semantics
//!
//! [`Dispatcher::tick`] snapshots the dispatch queue length on entry and
//! drains exactly that many slots in FIFO order. Submits that land while the
//! tick is in flight are appended behind the snapshot and wait for the next
//! tick, which bounds the work per tick and guarantees termination.
//!
//! Each drained slot is removed from the buffer, checked for target
//! liveness, and delivered to the sink exactly once. A sink error propagates
//! verbatim: slots flushed before the error stay flushed, slots behind the
//! snapshot stay queued, and nothing is retried, since a retried coalesced
//! value would be stale by definition.

use crate::coalescer::EventCoalescer;
use crate::types::{Event, HostSink, TargetLookup};

/// Per-tick flush accounting.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TickSummary {
    /// Events handed to the sink this tick.
    pub delivered: usize,
    /// Events dropped because their target left the snapshot.
    pub dropped_stale: usize,
}

/// Drains pending slots to a host sink on an externally driven cadence.
///
/// The dispatcher itself is plain state (lifetime counters); the coalescer,
/// target lookup, and sink are passed into each [`Dispatcher::tick`] so that
/// the embedder controls sharing and locking.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    delivered: u64,
    dropped_stale: u64,
}

impl Dispatcher {
    /// Create a dispatcher with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total events delivered over the dispatcher's lifetime.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Total events dropped for stale targets over the dispatcher's lifetime.
    pub fn dropped_stale(&self) -> u64 {
        self.dropped_stale
    }

    /// Flush the slots queued at tick start, in first-arrival order.
    ///
    /// `targets` decides liveness (use
    /// [`AllTargetsLive`](crate::types::AllTargetsLive) when targets cannot
    /// disappear, or a `ViewTree` via the `view_tree_adapter` feature).
    /// Returns the per-tick accounting, or the sink's error verbatim.
    pub fn tick<T, P, L, S>(
        &mut self,
        coalescer: &mut EventCoalescer<T, P>,
        targets: &L,
        sink: &mut S,
    ) -> Result<TickSummary, S::Error>
    where
        T: Copy + Ord + core::fmt::Debug,
        L: TargetLookup<T>,
        S: HostSink<T, P>,
    {
        let mut summary = TickSummary::default();
        // Drain only what was queued when the tick began.
        let budget = coalescer.queue.len();
        for _ in 0..budget {
            let Some(slot_key) = coalescer.queue.pop_front() else {
                break;
            };
            let Some(slot) = coalescer.slots.remove(&slot_key) else {
                debug_assert!(false, "queued slot key without a slot entry");
                continue;
            };
            let (target, kind) = slot_key;
            if !targets.is_live(&target) {
                // The view was removed between hit test and flush. Expected
                // during teardown races; drop and keep going.
                tracing::warn!(?target, kind = kind.as_str(), "dropping event for stale target");
                self.dropped_stale += 1;
                summary.dropped_stale += 1;
                continue;
            }
            let event = Event {
                target,
                kind,
                key: slot.key,
                payload: slot.payload,
            };
            sink.deliver(&event)?;
            self.delivered += 1;
            summary.delivered += 1;
        }
        Ok(summary)
    }
}
