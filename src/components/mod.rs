//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and cards for the pages. They read shared state
//! from Leptos context and report user actions through callbacks.

pub mod event_card;
pub mod form_field;
pub mod job_card;
pub mod nav_bar;
pub mod protected;
pub mod spinner;
pub mod stat_card;
