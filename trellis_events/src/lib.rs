// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Events: a deterministic, `no_std` coalescing buffer and dispatcher for UI bridge events.
//!
//! ## Overview
//!
//! A UI bridge that forwards pointer-driven state to a host runtime must not
//! flood it with every intermediate sample (a transition progress can update
//! hundreds of times per second). This crate buffers at most one pending
//! event per `(target, kind)` slot and flushes the latest state once per
//! scheduling tick:
//!
//! - [`EventCoalescer`](crate::coalescer::EventCoalescer) — slot table plus a
//!   FIFO dispatch queue; a repeated submit overwrites the pending payload in
//!   place without moving the slot in the queue.
//! - [`Dispatcher`](crate::dispatcher::Dispatcher) — drains the queue once
//!   per tick, in first-arrival order, and delivers each slot exactly once to
//!   a [`HostSink`](crate::types::HostSink).
//! - [`payloads`](crate::payloads) — stateless builders for the typed
//!   payloads carried across the bridge.
//! - [`registry`](crate::registry) — the explicit list of exported event
//!   capabilities handed to the host at startup.
//!
//! ## Ordering
//!
//! Distinct slots flush in FIFO order of first arrival. Within a slot the
//! last submitted payload wins; intermediate payloads are silently dropped.
//! The [`CoalescingKey`](crate::types::CoalescingKey) carried by each event
//! is for host-side duplicate suppression only and never affects ordering.
//!
//! ## Threading
//!
//! Every operation is synchronous and bounded; nothing blocks or performs
//! I/O. All entry points take `&mut self`, so a producer/consumer pair
//! shares a coalescer behind a mutex supplied by the embedder. Submits that
//! land while a tick drains are queued for the next tick: the drain length is
//! snapshotted when the tick starts.
//!
//! ## Target liveness
//!
//! A view can disappear between hit test and flush. The dispatcher consults a
//! [`TargetLookup`](crate::types::TargetLookup) before delivering and drops
//! events for stale targets with a warning instead of failing the tick.
//! Enable the `view_tree_adapter` feature to use a
//! [`trellis_view_tree::ViewTree`] snapshot as the lookup.
//!
//! ## Workflow
//!
//! 1) Resolve a target for a raw input sample (for example with
//!    `trellis_view_tree`'s hit testing).
//! 2) Build a payload with [`payloads`](crate::payloads) and submit it with
//!    [`EventCoalescer::submit`](crate::coalescer::EventCoalescer::submit).
//! 3) Once per frame or message-loop turn, call
//!    [`Dispatcher::tick`](crate::dispatcher::Dispatcher::tick) with the
//!    current snapshot and the host sink.
//!
//! Sink failures propagate verbatim out of `tick`; there are no retries,
//! since a fresher value for the same slot may already be pending.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod coalescer;
pub mod dispatcher;
pub mod payloads;
pub mod registry;
pub mod types;
