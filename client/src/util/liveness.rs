//! Lifetime flag for asynchronous work spawned by a component.
//!
//! A request may resolve after the component that issued it is gone. Results
//! are applied only while the issuing component's flag is still up.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "still mounted" flag. Clones observe the same state.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Flag lowered when the current reactive owner is cleaned up.
    pub fn scoped() -> Self {
        let live = Self::new();
        let on_drop = live.clone();
        leptos::prelude::on_cleanup(move || on_drop.end());
        live
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Apply `value` only while live. Returns whether it was applied.
    pub fn run_if_live<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_live() {
            apply(value);
            true
        } else {
            log::debug!("dropping result for disposed component");
            false
        }
    }
}
