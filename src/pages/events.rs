//! Events list with joining.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::use_view_scope;
use crate::components::event_card::EventCard;
use crate::components::nav_bar::NavBar;
use crate::components::spinner::Spinner;
use crate::state::auth::AuthState;
use crate::state::events::{EventsState, has_joined, join_event, load_events};

#[component]
pub fn EventsPage() -> impl IntoView {
    let scope = use_view_scope();
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(EventsState {
        loading: true,
        ..EventsState::default()
    });

    let load_scope = scope.clone();
    leptos::task::spawn_local(async move {
        load_events(&load_scope, &state).await;
    });

    let on_join = Callback::new(move |event_id: String| {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            join_event(&scope, &state, &event_id).await;
        });
    });

    let list = move || {
        let events = state.with(|s| s.events.clone());
        if events.is_empty() {
            return view! { <p class="events-page__empty">"No events scheduled."</p> }.into_any();
        }
        let me = auth.with(|auth| auth.user.as_ref().map(|user| user.id.clone()).unwrap_or_default());
        events
            .into_iter()
            .map(|event| {
                let joined = has_joined(&event, &me);
                view! { <EventCard event=event joined=joined on_join=Some(on_join)/> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="app-shell">
            <NavBar/>
            <main class="events-page">
                <h1 class="page-title">"Events"</h1>
                <Show when=move || state.with(|s| s.loading)>
                    <Spinner/>
                </Show>
                <div class="events-page__grid">{list}</div>
            </main>
        </div>
    }
}
