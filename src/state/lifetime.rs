//! Cancellation token tied to a mounted view.
//!
//! Requests are not aborted when a view unmounts; their results are dropped
//! instead. Controllers check `is_alive` after every await before writing.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A lifetime that ends when the current reactive owner is cleaned up.
    pub fn bind() -> Self {
        let lifetime = Self::new();
        let on_unmount = lifetime.clone();
        leptos::prelude::on_cleanup(move || on_unmount.end());
        lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
