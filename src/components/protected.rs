//! Route guard wrapper for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated route renders through `Protected`. The decision comes
//! from `util::auth::authorize`; this component only renders it: a spinner
//! while the session resolves, the page once allowed, nothing while a redirect
//! is in flight.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, authorize, install_guard_redirect};

/// Render `children` only for a signed-in identity whose role is in `roles`.
///
/// Without `roles` any signed-in identity is allowed.
#[component]
pub fn Protected(#[prop(optional)] roles: Option<&'static [Role]>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| authorize(&auth.get(), roles));
    install_guard_redirect(decision, use_navigate());

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || {
                view! {
                    <Show when=move || decision.get() == GuardDecision::Loading>
                        <Spinner/>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
