// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exported-capability registry handed to the host at startup.
//!
//! A bridge announces which direct events it can emit as a static list of
//! `(event name, registration name)` pairs, resolved once at initialization.
//! The registry is an explicitly constructed value passed to whoever wires up
//! the host module, never ambient global state, and it is not consulted on
//! the hot path.

use alloc::vec::Vec;

use crate::payloads;
use crate::types::EventKind;

/// One exported direct-event capability.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ExportedEvent {
    /// Wire-level event name, e.g. `"topTransitionProgress"`.
    pub kind: EventKind,
    /// Host-side registration name, e.g. `"onTransitionProgress"`.
    pub registration_name: &'static str,
}

/// The static list of events a bridge module exports.
#[derive(Clone, Debug, Default)]
pub struct HostModuleRegistry {
    events: Vec<ExportedEvent>,
}

impl HostModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exported event. Re-registering a kind replaces its
    /// registration name.
    pub fn register(&mut self, kind: EventKind, registration_name: &'static str) {
        if let Some(e) = self.events.iter_mut().find(|e| e.kind == kind) {
            e.registration_name = registration_name;
        } else {
            self.events.push(ExportedEvent {
                kind,
                registration_name,
            });
        }
    }

    /// All exported events, in registration order.
    pub fn exported_events(&self) -> &[ExportedEvent] {
        &self.events
    }

    /// Returns true if `kind` is exported.
    pub fn is_registered(&self, kind: EventKind) -> bool {
        self.events.iter().any(|e| e.kind == kind)
    }

    /// The registration name for `kind`, if exported.
    pub fn registration_name(&self, kind: EventKind) -> Option<&'static str> {
        self.events
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.registration_name)
    }
}

/// The registry for the built-in screen event family.
pub fn screen_module_registry() -> HostModuleRegistry {
    let mut r = HostModuleRegistry::new();
    r.register(payloads::TRANSITION_PROGRESS, "onTransitionProgress");
    r.register(payloads::APPEAR, "onAppear");
    r.register(payloads::DISAPPEAR, "onDisappear");
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_registry_exports_the_family() {
        let r = screen_module_registry();
        assert_eq!(r.exported_events().len(), 3);
        assert!(r.is_registered(payloads::TRANSITION_PROGRESS));
        assert_eq!(
            r.registration_name(payloads::TRANSITION_PROGRESS),
            Some("onTransitionProgress")
        );
        assert_eq!(r.registration_name(EventKind("topUnknown")), None);
    }

    #[test]
    fn re_registering_replaces_not_duplicates() {
        let mut r = HostModuleRegistry::new();
        r.register(payloads::APPEAR, "onAppear");
        r.register(payloads::APPEAR, "onDidAppear");
        assert_eq!(r.exported_events().len(), 1);
        assert_eq!(r.registration_name(payloads::APPEAR), Some("onDidAppear"));
    }
}
