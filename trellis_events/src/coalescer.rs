// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coalescing buffer: at most one pending event per `(target, kind)`.
//!
//! ## Overview
//!
//! Each `(target, kind)` pair owns a single slot. The first submit for a slot
//! creates it and appends the slot key to the dispatch queue; later submits
//! overwrite the pending payload and coalescing key in place without touching
//! the queue. Memory is therefore bounded by the number of distinct active
//! slots, not by the number of events produced.
//!
//! Queue position is fixed at first arrival on purpose: a high-frequency
//! producer that kept jumping to the tail would starve other pending targets.
//!
//! Slots exist only between first submit and the next drain; the
//! [`Dispatcher`](crate::dispatcher::Dispatcher) removes each slot as it
//! flushes it.

use alloc::collections::btree_map::Entry;
use alloc::collections::{BTreeMap, VecDeque};

use crate::types::{CoalescingKey, EventKind};

#[derive(Clone, Debug)]
pub(crate) struct PendingSlot<P> {
    pub(crate) key: CoalescingKey,
    pub(crate) payload: P,
}

/// Buffer holding the latest pending payload per `(target, kind)` slot.
///
/// `T` is the target key type; it needs `Ord` for the slot table and `Copy`
/// because slot keys are duplicated into the queue.
#[derive(Clone, Debug)]
pub struct EventCoalescer<T, P> {
    pub(crate) slots: BTreeMap<(T, EventKind), PendingSlot<P>>,
    // First-arrival FIFO of slot keys awaiting flush. A key appears at most
    // once; presence in `slots` and presence here coincide between ticks.
    pub(crate) queue: VecDeque<(T, EventKind)>,
}

impl<T: Copy + Ord, P> Default for EventCoalescer<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Ord, P> EventCoalescer<T, P> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            queue: VecDeque::new(),
        }
    }

    /// Submit a payload for `(target, kind)`.
    ///
    /// If the slot is empty the payload is buffered and the slot joins the
    /// dispatch queue at the tail. If the slot already holds a pending
    /// payload, that payload and its coalescing key are replaced in place and
    /// the queue is left untouched, so only the latest state reaches the sink
    /// on the next tick.
    pub fn submit(&mut self, target: T, kind: EventKind, key: CoalescingKey, payload: P) {
        let slot_key = (target, kind);
        match self.slots.entry(slot_key) {
            Entry::Occupied(mut e) => {
                tracing::trace!(kind = kind.as_str(), "coalescing superseded payload");
                let slot = e.get_mut();
                slot.key = key;
                slot.payload = payload;
            }
            Entry::Vacant(e) => {
                e.insert(PendingSlot { key, payload });
                self.queue.push_back(slot_key);
            }
        }
    }

    /// Number of slots awaiting flush.
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns true if `(target, kind)` has a pending payload.
    pub fn is_pending(&self, target: T, kind: EventKind) -> bool {
        self.slots.contains_key(&(target, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRESS: EventKind = EventKind("topTransitionProgress");
    const APPEAR: EventKind = EventKind("topAppear");

    #[test]
    fn first_submit_creates_slot_and_queues() {
        let mut c: EventCoalescer<u32, f64> = EventCoalescer::new();
        assert!(c.is_empty());
        c.submit(42, PROGRESS, CoalescingKey(1), 0.1);
        assert_eq!(c.pending_len(), 1);
        assert!(c.is_pending(42, PROGRESS));
        assert!(!c.is_pending(42, APPEAR));
    }

    #[test]
    fn resubmit_overwrites_without_requeueing() {
        let mut c: EventCoalescer<u32, f64> = EventCoalescer::new();
        c.submit(42, PROGRESS, CoalescingKey(1), 0.1);
        c.submit(42, PROGRESS, CoalescingKey(2), 0.9);
        c.submit(42, PROGRESS, CoalescingKey(3), 0.95);
        // Still one slot, holding only the latest state.
        assert_eq!(c.pending_len(), 1);
        let slot = &c.slots[&(42, PROGRESS)];
        assert_eq!(slot.key, CoalescingKey(3));
        assert_eq!(slot.payload, 0.95);
    }

    #[test]
    fn distinct_slots_keep_first_arrival_order() {
        let mut c: EventCoalescer<u32, f64> = EventCoalescer::new();
        c.submit(1, PROGRESS, CoalescingKey(0), 0.1);
        c.submit(2, PROGRESS, CoalescingKey(0), 0.2);
        // Re-submitting slot 1 must not move it behind slot 2.
        c.submit(1, PROGRESS, CoalescingKey(1), 0.5);
        let order: alloc::vec::Vec<_> = c.queue.iter().copied().collect();
        assert_eq!(order, [(1, PROGRESS), (2, PROGRESS)]);
    }

    #[test]
    fn same_target_different_kinds_are_distinct_slots() {
        let mut c: EventCoalescer<u32, f64> = EventCoalescer::new();
        c.submit(42, PROGRESS, CoalescingKey(0), 0.1);
        c.submit(42, APPEAR, CoalescingKey(0), 1.0);
        assert_eq!(c.pending_len(), 2);
    }
}
