//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and display formatting
//! from page and component logic.

pub mod auth;
pub mod format;
pub mod location;
pub mod routes;
