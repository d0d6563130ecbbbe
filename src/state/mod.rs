//! Client state and the controllers that mutate it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the session store shared by every view. Each view module
//! (`dashboard`, `jobs`, `events`, `management`, `profile`) pairs a plain state
//! struct with async controllers that talk to the API through a `ViewScope`.
//! Controllers never render; pages bind their state to signals.

pub mod auth;
pub mod dashboard;
pub mod events;
pub mod forms;
pub mod handoff;
pub mod jobs;
pub mod lifetime;
pub mod management;
pub mod profile;
pub mod scope;
#[cfg(test)]
pub(crate) mod test_support;
