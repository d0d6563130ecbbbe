//! Card for a company event.

#[cfg(test)]
#[path = "event_card_test.rs"]
mod event_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::Event;
use crate::state::events::is_full;
use crate::util::format;

/// What the join control shows for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinAffordance {
    Joined,
    Full,
    Open,
}

pub fn join_affordance(event: &Event, joined: bool) -> JoinAffordance {
    if joined {
        JoinAffordance::Joined
    } else if is_full(event) {
        JoinAffordance::Full
    } else {
        JoinAffordance::Open
    }
}

#[component]
pub fn EventCard(
    event: Event,
    #[prop(optional)] joined: bool,
    #[prop(optional)] compact: bool,
    #[prop(default = None)] on_join: Option<Callback<String>>,
) -> impl IntoView {
    let affordance = join_affordance(&event, joined);
    let capacity = format::capacity(event.participants.len(), event.participant_cap());
    let description = (!compact && !event.description.is_empty()).then(|| event.description.clone());
    let event_id = event.id.clone();
    let action = on_join.map(|on_join| match affordance {
        JoinAffordance::Joined => view! { <span class="event-card__badge">"Joined"</span> }.into_any(),
        JoinAffordance::Full => view! { <span class="event-card__badge event-card__badge--full">"Full"</span> }.into_any(),
        JoinAffordance::Open => view! {
            <button class="btn event-card__join" on:click=move |_| on_join.run(event_id.clone())>
                "Join"
            </button>
        }
        .into_any(),
    });

    view! {
        <article class="event-card" class:event-card--compact=compact>
            <header class="event-card__header">
                <h3 class="event-card__title">{event.title.clone()}</h3>
                <span class="event-card__type">{event.event_type.label()}</span>
            </header>
            <p class="event-card__when">{format::date_time(&event.date_time)}</p>
            <p class="event-card__where">{event.location.clone()}</p>
            {description.map(|text| view! { <p class="event-card__description">{text}</p> })}
            <p class="event-card__capacity">{capacity}</p>
            {action}
        </article>
    }
}
