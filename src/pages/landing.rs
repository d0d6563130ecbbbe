//! Public landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::should_forward_signed_in;
use crate::util::routes::AppRoute;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if should_forward_signed_in(&auth.get()) {
            navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
        }
    });

    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1>"AURA"</h1>
                <p class="landing-page__tagline">"Virtual trucking company"</p>
                <a class="btn btn--primary" href=AppRoute::Login.path()>
                    "Driver sign in"
                </a>
            </header>
            <section class="landing-page__features">
                <div class="landing-page__feature">
                    <h2>"Jobs"</h2>
                    <p>"Pick up deliveries across the map and earn XP for every load."</p>
                </div>
                <div class="landing-page__feature">
                    <h2>"Convoys"</h2>
                    <p>"Join company convoys, meetings and training sessions."</p>
                </div>
                <div class="landing-page__feature">
                    <h2>"Progress"</h2>
                    <p>"Track deliveries, distance driven and experience."</p>
                </div>
            </section>
        </div>
    }
}
