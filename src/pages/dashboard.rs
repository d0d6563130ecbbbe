//! Dashboard page: company counters, the driver's recent assignments and the
//! next events.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::use_view_scope;
use crate::components::event_card::EventCard;
use crate::components::job_card::JobCard;
use crate::components::nav_bar::NavBar;
use crate::components::spinner::Spinner;
use crate::components::stat_card::StatCard;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardState, load_dashboard};
use crate::state::events::has_joined;
use crate::util::format;
use crate::util::routes::AppRoute;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let scope = use_view_scope();
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(DashboardState {
        loading: true,
        ..DashboardState::default()
    });

    leptos::task::spawn_local(async move {
        load_dashboard(&scope, &state).await;
    });

    let greeting = move || {
        auth.with(|auth| auth.user.as_ref().map(|user| format!("Welcome back, {}", user.name)))
            .unwrap_or_else(|| "Welcome back".to_owned())
    };
    let my_id = move || auth.with(|auth| auth.user.as_ref().map(|user| user.id.clone()).unwrap_or_default());

    let stats = move || {
        state.with(|s| s.stats.clone()).map(|stats| {
            view! {
                <div class="dashboard-page__stats">
                    <StatCard label="Drivers" value=format::thousands(stats.total_drivers)/>
                    <StatCard label="Active drivers" value=format::thousands(stats.active_drivers)/>
                    <StatCard label="Deliveries" value=format::thousands(stats.total_deliveries)/>
                    <StatCard label="Distance" value=format::distance_km(stats.total_distance)/>
                    <StatCard label="Open jobs" value=format::thousands(stats.pending_jobs)/>
                    <StatCard label="Upcoming events" value=format::thousands(stats.upcoming_events)/>
                </div>
            }
        })
    };

    let recent_jobs = move || {
        let jobs = state.with(|s| s.recent_jobs().to_vec());
        if jobs.is_empty() {
            return view! { <p class="dashboard-page__empty">"No assigned jobs right now."</p> }.into_any();
        }
        jobs.into_iter()
            .map(|job| view! { <JobCard job=job compact=true/> })
            .collect_view()
            .into_any()
    };

    let upcoming_events = move || {
        let events = state.with(|s| s.upcoming_events().to_vec());
        if events.is_empty() {
            return view! { <p class="dashboard-page__empty">"No events scheduled."</p> }.into_any();
        }
        let me = my_id();
        events
            .into_iter()
            .map(|event| {
                let joined = has_joined(&event, &me);
                view! { <EventCard event=event joined=joined compact=true/> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="app-shell">
            <NavBar/>
            <main class="dashboard-page">
                <h1 class="page-title">{greeting}</h1>
                <Show when=move || state.with(|s| s.loading)>
                    <Spinner/>
                </Show>
                {stats}
                <div class="dashboard-page__columns">
                    <section class="dashboard-page__section">
                        <header class="section-header">
                            <h2>"Assigned jobs"</h2>
                            <a href=AppRoute::Jobs.path()>"All jobs"</a>
                        </header>
                        {recent_jobs}
                    </section>
                    <section class="dashboard-page__section">
                        <header class="section-header">
                            <h2>"Upcoming events"</h2>
                            <a href=AppRoute::Events.path()>"All events"</a>
                        </header>
                        {upcoming_events}
                    </section>
                </div>
            </main>
        </div>
    }
}
