//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it binds a view scope, spawns
//! its controller calls, and delegates rendering details to `components`.

pub mod auth_callback;
pub mod dashboard;
pub mod events;
pub mod jobs;
pub mod landing;
pub mod login;
pub mod management;
pub mod profile;
