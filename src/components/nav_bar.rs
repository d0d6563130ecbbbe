//! Top navigation for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links are filtered by role so a driver never sees Management. The guard
//! still enforces access; hiding the link is only presentation.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::Api;
use crate::net::types::Role;
use crate::state::auth::{AuthState, end_session};
use crate::util::format;
use crate::util::routes::AppRoute;

/// Navigation entries visible to `role`, in display order.
pub fn nav_routes(role: Role) -> Vec<AppRoute> {
    let mut routes = vec![AppRoute::Dashboard, AppRoute::Jobs, AppRoute::Events];
    if role.can_manage() {
        routes.push(AppRoute::Management);
    }
    routes.push(AppRoute::Profile);
    routes
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let links = move || {
        auth.get()
            .role()
            .map(nav_routes)
            .unwrap_or_default()
            .into_iter()
            .map(|route| {
                view! {
                    <A href=route.path() attr:class="nav-bar__link">
                        {route.label()}
                    </A>
                }
            })
            .collect_view()
    };

    let identity = move || {
        auth.get()
            .user
            .map(|user| (user.name, user.role.label(), format::xp(user.experience_points)))
    };

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            end_session(&api, &auth).await;
            let _ = busy.try_set(false);
            navigate(AppRoute::Landing.path(), NavigateOptions::default());
        });
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=AppRoute::Dashboard.path()>
                "AURA"
            </a>
            <div class="nav-bar__links">{links}</div>
            <span class="nav-bar__spacer"></span>
            {move || {
                identity()
                    .map(|(name, role, xp)| {
                        view! {
                            <span class="nav-bar__self">
                                <span class="nav-bar__name">{name}</span>
                                <span class="nav-bar__role">{role}</span>
                                <span class="nav-bar__xp">{xp}</span>
                            </span>
                        }
                    })
            }}
            <button class="btn nav-bar__logout" on:click=on_logout disabled=move || busy.get()>
                "Sign out"
            </button>
        </nav>
    }
}
