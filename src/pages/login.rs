//! Login page delegating sign-in to the external identity provider.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::state::auth::{AuthState, begin_login};
use crate::util::auth::should_forward_signed_in;
use crate::util::routes::AppRoute;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();
    let redirecting = RwSignal::new(false);

    Effect::new(move || {
        if should_forward_signed_in(&auth.get()) {
            navigate(
                AppRoute::Dashboard.path(),
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let on_sign_in = move |_| {
        redirecting.set(true);
        begin_login(&config, AppRoute::AuthCallback.path());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"AURA"</h1>
                <p class="login-card__subtitle">"Sign in to the driver portal"</p>
                <button class="login-button" on:click=on_sign_in disabled=move || redirecting.get()>
                    {move || if redirecting.get() { "Redirecting..." } else { "Continue with AURA ID" }}
                </button>
                <a class="login-card__back" href=AppRoute::Landing.path()>
                    "Back to home"
                </a>
            </div>
        </div>
    }
}
