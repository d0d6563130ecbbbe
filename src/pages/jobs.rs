//! Jobs board with status tabs and the "mark delivered" action.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::use_view_scope;
use crate::components::job_card::JobCard;
use crate::components::nav_bar::NavBar;
use crate::components::spinner::Spinner;
use crate::state::auth::AuthState;
use crate::state::jobs::{JobFilter, JobsState, complete_job, load_jobs, offers_completion_to};

#[component]
pub fn JobsPage() -> impl IntoView {
    let scope = use_view_scope();
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(JobsState {
        loading: true,
        ..JobsState::default()
    });

    let load_scope = scope.clone();
    let select_filter = move |filter: JobFilter| {
        let scope = load_scope.clone();
        leptos::task::spawn_local(async move {
            load_jobs(&scope, &state, filter).await;
        });
    };
    select_filter(JobFilter::All);

    let on_complete = Callback::new(move |job_id: String| {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            complete_job(&scope, &state, &job_id).await;
        });
    });

    let tabs = move || {
        let current = state.with(|s| s.filter);
        let select_filter = select_filter.clone();
        JobFilter::ALL
            .into_iter()
            .map(|filter| {
                let select_filter = select_filter.clone();
                view! {
                    <button
                        class="tab"
                        class:tab--active=filter == current
                        on:click=move |_| select_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let board = move || {
        let jobs = state.with(|s| s.jobs.clone());
        if jobs.is_empty() {
            return view! { <p class="jobs-page__empty">"No jobs match this filter."</p> }.into_any();
        }
        let viewer = auth.with(|auth| auth.user.clone());
        jobs.into_iter()
            .map(|job| {
                let completable = viewer
                    .as_ref()
                    .is_some_and(|viewer| offers_completion_to(&job, viewer));
                let on_complete = completable.then_some(on_complete);
                view! { <JobCard job=job on_complete=on_complete/> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="app-shell">
            <NavBar/>
            <main class="jobs-page">
                <h1 class="page-title">"Jobs"</h1>
                <div class="tabs" role="tablist">{tabs}</div>
                <Show when=move || state.with(|s| s.loading)>
                    <Spinner/>
                </Show>
                <div class="jobs-page__grid">{board}</div>
            </main>
        </div>
    }
}
