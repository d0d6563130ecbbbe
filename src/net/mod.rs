//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes typed endpoints over a `transport`, `types` defines the wire
//! schema, and `error` classifies every failure the client can see.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod test_support;
pub mod transport;
pub mod types;

/// API client used by the running application.
pub type Api = api::ApiClient<transport::BrowserTransport>;
