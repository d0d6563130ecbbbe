//! Handoff route the identity provider returns to.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs `state::handoff::run_handoff` once per arrival and then navigates to
//! its destination, replacing the callback entry in history.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::net::Api;
use crate::state::auth::AuthState;
use crate::state::handoff::{HandoffState, run_handoff};
use crate::state::lifetime::ViewLifetime;
use crate::util::location::BrowserLocation;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let lifetime = ViewLifetime::bind();
    let outcome = RwSignal::new(HandoffState::Pending);

    leptos::task::spawn_local(async move {
        let result = run_handoff(&api, &auth, &BrowserLocation).await;
        if !lifetime.is_alive() {
            return;
        }
        outcome.set(result);
        if let Some(route) = result.destination() {
            navigate(
                route.path(),
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        <div class="auth-callback-page">
            {move || match outcome.get() {
                HandoffState::Pending => view! { <Spinner label="Signing you in..."/> }.into_any(),
                HandoffState::Succeeded => view! { <p>"Signed in. Redirecting..."</p> }.into_any(),
                HandoffState::Failed => view! { <p>"Sign-in failed. Redirecting to login..."</p> }.into_any(),
            }}
        </div>
    }
}
