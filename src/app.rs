//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::protected::Protected;
use crate::config::AppConfig;
use crate::net::Api;
use crate::net::api::ApiClient;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    auth_callback::AuthCallbackPage, dashboard::DashboardPage, events::EventsPage, jobs::JobsPage,
    landing::LandingPage, login::LoginPage, management::ManagementPage, profile::ProfilePage,
};
use crate::state::auth::{AuthState, check_session};
use crate::state::handoff::should_check_session;
use crate::state::lifetime::ViewLifetime;
use crate::state::scope::ViewScope;
use crate::util::auth::MANAGEMENT_ROLES;
use crate::util::location;

/// Controller scope used by mounted pages.
pub type AppScope = ViewScope<BrowserTransport, RwSignal<AuthState>>;

/// Build a scope for the calling view; its lifetime ends when the view unmounts.
pub fn use_view_scope() -> AppScope {
    ViewScope::new(
        expect_context::<Api>(),
        expect_context::<RwSignal<AuthState>>(),
        ViewLifetime::bind(),
    )
}

/// Root application component.
///
/// Provides configuration, the API client and the session store, resolves the
/// session once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    let api: Api = ApiClient::new(
        BrowserTransport::new(config.request_timeout_ms),
        config.api_base_url.clone(),
    );
    let auth = RwSignal::new(AuthState::pending());

    provide_context(config);
    provide_context(api.clone());
    provide_context(auth);

    let path = location::current_path().unwrap_or_default();
    let fragment = location::current_fragment().unwrap_or_default();
    if should_check_session(&path, &fragment) {
        leptos::task::spawn_local(async move {
            check_session(&api, &auth).await;
        });
    } else {
        log::debug!("deferring session check to the auth callback");
    }

    view! {
        <Title text="AURA"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/auth/callback") view=AuthCallbackPage/>
                <Route
                    path=path!("/dashboard")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
                <Route path=path!("/jobs") view=|| view! { <Protected><JobsPage/></Protected> }/>
                <Route path=path!("/events") view=|| view! { <Protected><EventsPage/></Protected> }/>
                <Route
                    path=path!("/management")
                    view=|| view! { <Protected roles=MANAGEMENT_ROLES><ManagementPage/></Protected> }
                />
                <Route path=path!("/profile") view=|| view! { <Protected><ProfilePage/></Protected> }/>
            </Routes>
        </Router>
    }
}
