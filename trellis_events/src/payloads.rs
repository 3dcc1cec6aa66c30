// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless payload builders for the screen event family.
//!
//! Builders are pure functions from typed source state to the payload carried
//! by [`Event`](crate::types::Event): no side effects, no shared state.
//! Out-of-range input is clamped rather than rejected, because stale samples
//! routinely arrive during UI teardown races and must not fail the producer.
//!
//! Boolean fields stay booleans on the wire; the host protocol's historical
//! 0/1 integer encoding is not reproduced.

use crate::types::EventKind;

/// Transition progress of a screen, sampled continuously during a navigation
/// transition. The highest-frequency event in the family and the reason the
/// coalescer exists.
pub const TRANSITION_PROGRESS: EventKind = EventKind("topTransitionProgress");

/// A screen became visible.
pub const APPEAR: EventKind = EventKind("topAppear");

/// A screen was hidden.
pub const DISAPPEAR: EventKind = EventKind("topDisappear");

/// Payload of [`TRANSITION_PROGRESS`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionProgress {
    /// Transition fraction in `0.0..=1.0`.
    pub progress: f64,
    /// The screen is being dismissed.
    pub closing: bool,
    /// The navigation is moving forward in the stack.
    pub going_forward: bool,
}

impl TransitionProgress {
    /// Build a progress payload, clamping `progress` into `0.0..=1.0`.
    ///
    /// Non-finite input clamps to `0.0`; late or garbled samples are expected
    /// and never a hard failure.
    pub fn new(progress: f64, closing: bool, going_forward: bool) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            progress,
            closing,
            going_forward,
        }
    }
}

/// Payload union for the screen event family.
///
/// A coalescer instance is generic over one payload type; bridges that carry
/// the whole family use this enum as `P` and match on it in the sink.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScreenEvent {
    /// Continuous transition progress.
    TransitionProgress(TransitionProgress),
    /// Screen became visible.
    Appear,
    /// Screen was hidden.
    Disappear,
}

impl ScreenEvent {
    /// Build the transition-progress variant with clamped input.
    pub fn transition_progress(progress: f64, closing: bool, going_forward: bool) -> Self {
        Self::TransitionProgress(TransitionProgress::new(progress, closing, going_forward))
    }

    /// The event kind this payload belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::TransitionProgress(_) => TRANSITION_PROGRESS,
            Self::Appear => APPEAR,
            Self::Disappear => DISAPPEAR,
        }
    }
}
