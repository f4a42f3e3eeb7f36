//! Stale-response guard for page loads.
//!
//! Each page keeps one [`LoadGuard`]. A load takes a ticket before awaiting;
//! when the response arrives it is applied only if the ticket is still the
//! latest one. Unmounting the page invalidates every outstanding ticket.

use contracts::shared::generation::{RequestGeneration, Ticket};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct LoadGuard {
    generation: StoredValue<RequestGeneration>,
}

impl LoadGuard {
    /// Creates the guard and registers invalidation on owner cleanup.
    pub fn new() -> Self {
        let guard = Self {
            generation: StoredValue::new(RequestGeneration::new()),
        };
        on_cleanup(move || guard.invalidate());
        guard
    }

    pub fn begin(&self) -> Ticket {
        self.generation
            .try_update_value(|g| g.begin())
            .unwrap_or_default()
    }

    /// `false` once a newer load started or the owner was disposed.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation
            .try_with_value(|g| g.is_current(ticket))
            .unwrap_or(false)
    }

    pub fn invalidate(&self) {
        let _ = self.generation.try_update_value(|g| g.invalidate());
    }
}

impl Default for LoadGuard {
    fn default() -> Self {
        Self::new()
    }
}
