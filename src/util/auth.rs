//! Route authorization shared by every protected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `authorize` is a pure function of the session state and the destination's
//! allowed roles. It is re-evaluated on every render; the redirect effect only
//! performs the navigation it decides.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::routes::AppRoute;

/// Roles allowed into the management view.
pub const MANAGEMENT_ROLES: &[Role] = &[Role::Manager, Role::Admin];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: show a neutral placeholder, do not redirect.
    Loading,
    Allow,
    Redirect(AppRoute),
}

/// Decide whether `state` may view a destination restricted to `allowed_roles`.
///
/// `None` means any signed-in identity is allowed. A role outside the set is
/// sent to the dashboard rather than shown an error.
pub fn authorize(state: &AuthState, allowed_roles: Option<&[Role]>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    let Some(user) = state.user.as_ref() else {
        return GuardDecision::Redirect(AppRoute::Login);
    };
    match allowed_roles {
        Some(roles) if !roles.contains(&user.role) => GuardDecision::Redirect(AppRoute::Dashboard),
        _ => GuardDecision::Allow,
    }
}

/// Public pages (landing, login) forward an already signed-in user.
pub fn should_forward_signed_in(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

/// Navigate whenever `decision` asks for a redirect.
///
/// Redirects replace the current history entry so the back button does not
/// bounce the user into the same guard again.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(route) = decision.get() {
            navigate(
                route.path(),
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
