// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the event layer: kinds, coalescing keys, events, and the
//! sink/lookup seams.
//!
//! The event layer is generic over the target key type `T` and the payload
//! type `P`, so it can route to any host identifier scheme. The
//! `view_tree_adapter` feature binds `T` to
//! [`trellis_view_tree::ViewTag`].

/// Name of an event type, e.g. `"topTransitionProgress"`.
///
/// Kinds are `'static` string tags: the set of event types a bridge exports
/// is fixed at startup (see [`registry`](crate::registry)), and string names
/// are what the host protocol carries.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventKind(pub &'static str);

impl EventKind {
    /// The raw event name.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl core::fmt::Display for EventKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

/// Bounded per-slot sequence counter, used by hosts to suppress duplicate
/// frames.
///
/// The host protocol carries this as a 16-bit signed integer, so the range is
/// preserved here. [`CoalescingKey::wrapping_next`] wraps from `i16::MAX`
/// back to `i16::MIN` (two's-complement wraparound); hosts detect repetition,
/// not magnitude, so wraparound is harmless as long as the range is kept
/// bit-exact.
///
/// The key is metadata for the sink. Internal dispatch ordering is governed
/// entirely by the coalescer's FIFO queue and never by key values.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoalescingKey(pub i16);

impl CoalescingKey {
    /// The initial key.
    pub const ZERO: Self = Self(0);

    /// The next key in sequence, wrapping at the 16-bit boundary.
    #[must_use]
    pub const fn wrapping_next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// The raw key value.
    pub const fn value(self) -> i16 {
        self.0
    }
}

/// A single outbound event.
///
/// One concrete struct parameterized by a kind tag and a payload; per-kind
/// behavior lives in the stateless builders of
/// [`payloads`](crate::payloads), not in a type hierarchy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Event<T, P> {
    /// The view this event is addressed to.
    pub target: T,
    /// Event type name.
    pub kind: EventKind,
    /// Host-side duplicate-suppression key, as of the latest submit.
    pub key: CoalescingKey,
    /// Typed payload for `kind`.
    pub payload: P,
}

/// The one outward seam of this crate: delivery into the host runtime.
///
/// Delivery is synchronous from this layer's perspective. Any framing, such
/// as serialization into a message protocol, is the sink's responsibility. A
/// returned error propagates verbatim out of
/// [`Dispatcher::tick`](crate::dispatcher::Dispatcher::tick).
pub trait HostSink<T, P> {
    /// Error type surfaced to the caller of `tick`.
    type Error;

    /// Deliver one event to the host.
    fn deliver(&mut self, event: &Event<T, P>) -> Result<(), Self::Error>;
}

/// Liveness lookup consulted before delivery.
///
/// A target may have been removed between hit test and flush; the dispatcher
/// drops events for dead targets instead of delivering them. Implemented for
/// [`trellis_view_tree::ViewTree`] behind the `view_tree_adapter` feature.
pub trait TargetLookup<T> {
    /// Returns true if `target` still exists.
    fn is_live(&self, target: &T) -> bool;
}

/// A lookup that treats every target as live.
///
/// Useful for tests and for embedders whose targets cannot disappear.
#[derive(Copy, Clone, Debug, Default)]
pub struct AllTargetsLive;

impl<T> TargetLookup<T> for AllTargetsLive {
    #[inline]
    fn is_live(&self, _target: &T) -> bool {
        true
    }
}
