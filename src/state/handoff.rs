//! Authentication handoff: the route the identity provider returns to.
//!
//! The provider appends `#session_id=<token>` to the return URL. The fragment
//! never reaches the server or its access logs; the client reads it, exchanges
//! it once, and then removes it from the visible URL so it does not linger in
//! browser history.

#[cfg(test)]
#[path = "handoff_test.rs"]
mod handoff_test;

use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::state::auth::{AuthState, StateWriter, exchange_session_fragment};
use crate::util::routes::AppRoute;

/// Fragment key the identity provider uses for the one-time token.
pub const SESSION_TOKEN_KEY: &str = "session_id";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandoffState {
    #[default]
    Pending,
    Succeeded,
    Failed,
}

impl HandoffState {
    /// Where the handoff route navigates once the flow settles.
    pub fn destination(self) -> Option<AppRoute> {
        match self {
            HandoffState::Pending => None,
            HandoffState::Succeeded => Some(AppRoute::Dashboard),
            HandoffState::Failed => Some(AppRoute::Login),
        }
    }
}

/// Read/clear access to the browser URL fragment.
pub trait HandoffLocation {
    fn fragment(&self) -> String;
    fn clear_fragment(&self);
}

/// Pull a non-empty `session_id` out of a `#a=b&c=d` fragment.
pub fn extract_session_token(fragment: &str) -> Option<String> {
    let fragment = fragment.trim().trim_start_matches('#');
    url::form_urlencoded::parse(fragment.as_bytes())
        .find(|(key, _)| key == SESSION_TOKEN_KEY)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Whether page load should run the cookie session check.
///
/// Skipped when the page opens on the handoff route with a token waiting to
/// be exchanged, otherwise the check (which has no cookie yet) could land
/// after the exchange and wipe the identity it stored. A token on any other
/// route is ignored.
pub fn should_check_session(path: &str, fragment: &str) -> bool {
    path.trim_end_matches('/') != AppRoute::AuthCallback.path() || extract_session_token(fragment).is_none()
}

/// Run the handoff once for the current arrival.
pub async fn run_handoff<T, L>(
    api: &ApiClient<T>,
    session: &impl StateWriter<AuthState>,
    location: &L,
) -> HandoffState
where
    T: Transport,
    L: HandoffLocation,
{
    let Some(token) = extract_session_token(&location.fragment()) else {
        log::info!("auth callback reached without a session token");
        session.write(|state| state.loading = false);
        return HandoffState::Failed;
    };

    if exchange_session_fragment(api, session, &token).await {
        location.clear_fragment();
        HandoffState::Succeeded
    } else {
        HandoffState::Failed
    }
}
