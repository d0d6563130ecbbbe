//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns one `RwSignal<AuthState>` and provides it through context. Only
//! the session operations in this module write to it; route guards and views
//! read it. Every operation swallows its error after logging, so callers never
//! have to handle a failed session call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use url::Url;

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::error::AppError;
use crate::net::transport::Transport;
use crate::net::types::{Identity, Role};

/// Authentication state tracking the current identity and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl AuthState {
    /// State at page load, before the first session check settles.
    pub fn pending() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Single-writer handle onto a piece of state.
///
/// Views and controllers receive a writer rather than the state itself, so
/// every mutation goes through one closure-shaped entry point.
pub trait StateWriter<V> {
    fn write(&self, f: impl FnOnce(&mut V));

    /// Untracked read of the current value; `None` once the state is gone.
    fn read<R>(&self, f: impl FnOnce(&V) -> R) -> Option<R>;
}

impl<V: Send + Sync + 'static> StateWriter<V> for RwSignal<V> {
    fn write(&self, f: impl FnOnce(&mut V)) {
        // A disposed signal means the owning view is gone; the write is dropped.
        let _ = self.try_update(f);
    }

    fn read<R>(&self, f: impl FnOnce(&V) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

/// Resolve the current identity from the session cookie.
///
/// A missing or invalid session, or any failure reaching the server, leaves
/// the store without an identity.
pub async fn check_session<T: Transport>(api: &ApiClient<T>, session: &impl StateWriter<AuthState>) {
    session.write(|state| state.loading = true);
    let user = match api.current_user().await {
        Ok(user) => user,
        Err(err) => {
            log::warn!("session check failed: {err}");
            None
        }
    };
    if let Some(user) = &user {
        log::debug!("session resolved for {} ({})", user.id, user.role);
    }
    session.write(|state| {
        state.user = user;
        state.loading = false;
    });
}

/// Build the identity-provider URL that returns to `return_path` on `origin`.
///
/// # Errors
///
/// Returns `AppError::Config` if the configured provider URL does not parse.
pub fn login_redirect_url(config: &AppConfig, origin: &str, return_path: &str) -> Result<String, AppError> {
    let return_url = format!(
        "{}/{}",
        origin.trim().trim_end_matches('/'),
        return_path.trim().trim_start_matches('/')
    );
    let url = Url::parse_with_params(&config.auth_provider_url, &[("redirect", return_url.as_str())])
        .map_err(|err| AppError::Config(format!("invalid auth provider url: {err}")))?;
    Ok(url.into())
}

/// Send the browser to the identity provider.
pub fn begin_login(config: &AppConfig, return_path: &str) {
    let Some(origin) = crate::util::location::current_origin() else {
        log::warn!("login requested without a browser location");
        return;
    };
    match login_redirect_url(config, &origin, return_path) {
        Ok(url) => crate::util::location::redirect_to(&url),
        Err(err) => log::error!("cannot start login: {err}"),
    }
}

/// Exchange a one-time fragment token for a cookie session.
///
/// Returns `true` and stores the identity on success. On failure the store is
/// left without an identity and `false` is returned.
pub async fn exchange_session_fragment<T: Transport>(
    api: &ApiClient<T>,
    session: &impl StateWriter<AuthState>,
    session_token: &str,
) -> bool {
    session.write(|state| state.loading = true);
    match api.process_session(session_token).await {
        Ok(identity) => {
            log::info!("signed in as {}", identity.id);
            session.write(|state| {
                state.user = Some(identity);
                state.loading = false;
            });
            true
        }
        Err(err) => {
            log::warn!("session exchange failed: {err}");
            session.write(|state| {
                state.user = None;
                state.loading = false;
            });
            false
        }
    }
}

/// Best-effort logout: the local identity is cleared whatever the server says.
pub async fn end_session<T: Transport>(api: &ApiClient<T>, session: &impl StateWriter<AuthState>) {
    if let Err(err) = api.logout().await {
        log::warn!("logout request failed: {err}");
    }
    session.write(|state| {
        state.user = None;
        state.loading = false;
    });
}

/// Log a failed read; an authentication failure also clears the identity.
pub fn report_read_failure(session: &impl StateWriter<AuthState>, what: &str, err: &AppError) {
    if err.is_unauthorized() {
        log::info!("session rejected while loading {what}");
        session.write(|state| {
            state.user = None;
            state.loading = false;
        });
    } else {
        log::warn!("failed to load {what}: {err}");
    }
}

/// Replace the cached identity with a record the server just returned.
pub fn replace_identity(session: &impl StateWriter<AuthState>, identity: Identity) {
    session.write(|state| state.user = Some(identity));
}
