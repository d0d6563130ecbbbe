//! Events list state and joining an event.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::transport::Transport;
use crate::net::types::Event;
use crate::state::auth::{AuthState, StateWriter};
use crate::state::scope::ViewScope;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventsState {
    pub events: Vec<Event>,
    pub loading: bool,
}

/// Whether `user_id` appears in the server's participant list.
pub fn has_joined(event: &Event, user_id: &str) -> bool {
    event.participants.iter().any(|id| id == user_id)
}

/// Whether the participant list has reached the cap. Display only; the server
/// rejects joins to a full event on its own.
pub fn is_full(event: &Event) -> bool {
    event
        .participant_cap()
        .is_some_and(|max| event.participants.len() >= max)
}

pub async fn load_events<T, S>(scope: &ViewScope<T, S>, view: &impl StateWriter<EventsState>)
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    scope.update(view, |state| state.loading = true);
    let events = scope.settle("events", scope.api().events().await);
    scope.update(view, |state| {
        if let Some(events) = events {
            state.events = events;
        }
        state.loading = false;
    });
}

/// Join `event_id`, then re-fetch the list once.
pub async fn join_event<T, S>(scope: &ViewScope<T, S>, view: &impl StateWriter<EventsState>, event_id: &str)
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    match scope.api().join_event(event_id).await {
        Ok(()) => {
            log::info!("joined event {event_id}");
            load_events(scope, view).await;
        }
        Err(err) => log::error!("failed to join event {event_id}: {err}"),
    }
}
