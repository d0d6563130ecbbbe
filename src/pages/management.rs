//! Management page for managers and admins: create jobs and events, assign
//! jobs to drivers, and (admins only) change roles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `Protected roles=MANAGEMENT_ROLES`. The server enforces the
//! same rules; controls hidden here would be rejected there anyway.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::{AppScope, use_view_scope};
use crate::components::form_field::{draft_input, draft_select, draft_textarea};
use crate::components::nav_bar::NavBar;
use crate::components::spinner::Spinner;
use crate::net::types::{EventType, Identity, Job, Role};
use crate::state::auth::AuthState;
use crate::state::forms::{DIFFICULTIES, EventDraft, JobDraft};
use crate::state::management::{
    ManagementState, assign_job, can_change_roles, change_role, create_event, create_job, load_management,
};
use crate::util::format;

#[component]
pub fn ManagementPage() -> impl IntoView {
    let scope = use_view_scope();
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(ManagementState {
        loading: true,
        ..ManagementState::default()
    });

    let load_scope = scope.clone();
    leptos::task::spawn_local(async move {
        load_management(&load_scope, &state).await;
    });

    let viewer_role = move || auth.with(|auth| auth.role()).unwrap_or_default();

    view! {
        <div class="app-shell">
            <NavBar/>
            <main class="management-page">
                <h1 class="page-title">"Management"</h1>
                <Show when=move || state.with(|s| s.loading)>
                    <Spinner/>
                </Show>
                <div class="management-page__forms">
                    <JobForm scope=scope.clone() state=state/>
                    <EventForm scope=scope.clone() state=state/>
                </div>
                <AssignmentPanel scope=scope.clone() state=state/>
                <Roster scope=scope state=state can_edit=Signal::derive(move || can_change_roles(viewer_role()))/>
            </main>
        </div>
    }
}

#[component]
fn JobForm(scope: AppScope, state: RwSignal<ManagementState>) -> impl IntoView {
    let draft = RwSignal::new(JobDraft::default());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let job = match draft.with_untracked(JobDraft::validate) {
            Ok(job) => job,
            Err(reason) => {
                message.set(Some(reason.to_owned()));
                return;
            }
        };
        busy.set(true);
        message.set(None);
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let created = create_job(&scope, &state, &job).await;
            if !scope.is_alive() {
                return;
            }
            busy.set(false);
            if created {
                draft.set(JobDraft::default());
                message.set(Some("Job created.".to_owned()));
            } else {
                message.set(Some("Could not create the job.".to_owned()));
            }
        });
    };

    let difficulties = DIFFICULTIES.iter().map(|level| (*level, *level)).collect::<Vec<_>>();

    view! {
        <form class="form management-page__form" on:submit=on_submit>
            <h2>"New job"</h2>
            {draft_input(draft, "Title", "text", |d| d.title.clone(), |d, v| d.title = v)}
            {draft_input(draft, "Cargo", "text", |d| d.cargo.clone(), |d, v| d.cargo = v)}
            {draft_input(draft, "From", "text", |d| d.origin_city.clone(), |d, v| d.origin_city = v)}
            {draft_input(draft, "To", "text", |d| d.destination_city.clone(), |d, v| d.destination_city = v)}
            {draft_input(draft, "Distance (km)", "number", |d| d.distance.clone(), |d, v| d.distance = v)}
            {draft_input(draft, "Reward (XP)", "number", |d| d.reward.clone(), |d, v| d.reward = v)}
            {draft_select(draft, "Difficulty", difficulties, |d| d.difficulty.clone(), |d, v| d.difficulty = v)}
            {draft_input(draft, "Deadline", "datetime-local", |d| d.deadline.clone(), |d, v| d.deadline = v)}
            {draft_textarea(draft, "Description", |d| d.description.clone(), |d, v| d.description = v)}
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Create job"
            </button>
            {move || message.get().map(|text| view! { <p class="form__message">{text}</p> })}
        </form>
    }
}

#[component]
fn EventForm(scope: AppScope, state: RwSignal<ManagementState>) -> impl IntoView {
    let draft = RwSignal::new(EventDraft::default());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let event = match draft.with_untracked(EventDraft::validate) {
            Ok(event) => event,
            Err(reason) => {
                message.set(Some(reason.to_owned()));
                return;
            }
        };
        busy.set(true);
        message.set(None);
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let created = create_event(&scope, &state, &event).await;
            if !scope.is_alive() {
                return;
            }
            busy.set(false);
            if created {
                draft.set(EventDraft::default());
                message.set(Some("Event created.".to_owned()));
            } else {
                message.set(Some("Could not create the event.".to_owned()));
            }
        });
    };

    let event_types = EventType::ALL
        .into_iter()
        .map(|kind| (kind.as_str(), kind.label()))
        .collect::<Vec<_>>();

    view! {
        <form class="form management-page__form" on:submit=on_submit>
            <h2>"New event"</h2>
            {draft_input(draft, "Title", "text", |d| d.title.clone(), |d, v| d.title = v)}
            {draft_select(draft, "Type", event_types, |d| d.event_type.clone(), |d, v| d.event_type = v)}
            {draft_input(draft, "Date and time", "datetime-local", |d| d.date_time.clone(), |d, v| d.date_time = v)}
            {draft_input(draft, "Location", "text", |d| d.location.clone(), |d, v| d.location = v)}
            {draft_input(
                draft,
                "Max participants",
                "number",
                |d| d.max_participants.clone(),
                |d, v| d.max_participants = v,
            )}
            {draft_textarea(draft, "Description", |d| d.description.clone(), |d, v| d.description = v)}
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Create event"
            </button>
            {move || message.get().map(|text| view! { <p class="form__message">{text}</p> })}
        </form>
    }
}

#[component]
fn AssignmentPanel(scope: AppScope, state: RwSignal<ManagementState>) -> impl IntoView {
    let rows = move || {
        let (jobs, drivers): (Vec<Job>, Vec<Identity>) = state.with(|s| {
            (s.assignable_jobs().cloned().collect(), s.drivers().cloned().collect())
        });
        if jobs.is_empty() {
            return view! { <p class="management-page__empty">"No jobs waiting for a driver."</p> }.into_any();
        }
        let scope = scope.clone();
        jobs.into_iter()
            .map(|job| view! { <AssignmentRow scope=scope.clone() state=state job=job drivers=drivers.clone()/> })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="management-page__section">
            <h2>"Assign jobs"</h2>
            <div class="assignment-list">{rows}</div>
        </section>
    }
}

#[component]
fn AssignmentRow(
    scope: AppScope,
    state: RwSignal<ManagementState>,
    job: Job,
    drivers: Vec<Identity>,
) -> impl IntoView {
    let selected = RwSignal::new(String::new());
    let job_id = job.id.clone();

    let on_assign = move |_| {
        let driver_id = selected.get_untracked();
        if driver_id.is_empty() {
            return;
        }
        let scope = scope.clone();
        let job_id = job_id.clone();
        leptos::task::spawn_local(async move {
            assign_job(&scope, &state, &job_id, &driver_id).await;
        });
    };

    view! {
        <div class="assignment-row">
            <span class="assignment-row__job">{job.title.clone()}</span>
            <span class="assignment-row__route">{format::route(&job.origin_city, &job.destination_city)}</span>
            <select
                class="form__input"
                prop:value=move || selected.get()
                on:change=move |ev| selected.set(event_target_value(&ev))
            >
                <option value="">"Choose a driver"</option>
                {drivers
                    .into_iter()
                    .map(|driver| view! { <option value=driver.id.clone()>{driver.name.clone()}</option> })
                    .collect_view()}
            </select>
            <button class="btn" on:click=on_assign disabled=move || selected.with(String::is_empty)>
                "Assign"
            </button>
        </div>
    }
}

#[component]
fn Roster(scope: AppScope, state: RwSignal<ManagementState>, can_edit: Signal<bool>) -> impl IntoView {
    let on_role_change = Callback::new(move |(user_id, role): (String, Role)| {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            change_role(&scope, &state, &user_id, role).await;
        });
    });

    let rows = move || {
        let editable = can_edit.get();
        state
            .with(|s| s.users.clone())
            .into_iter()
            .map(|user| {
                let role_cell = if editable {
                    let user_id = user.id.clone();
                    let current = user.role;
                    view! {
                        <select
                            class="form__input"
                            on:change=move |ev| {
                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                    on_role_change.run((user_id.clone(), role));
                                }
                            }
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|role| {
                                    view! {
                                        <option value=role.as_str() selected=role == current>
                                            {role.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    }
                    .into_any()
                } else {
                    view! { <span>{user.role.label()}</span> }.into_any()
                };
                view! {
                    <tr>
                        <td>{user.name.clone()}</td>
                        <td>{user.email.clone()}</td>
                        <td>{role_cell}</td>
                        <td>{format::xp(user.experience_points)}</td>
                        <td>{format::thousands(user.total_deliveries)}</td>
                        <td>{format::distance_km(user.total_distance)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="management-page__section">
            <h2>"Drivers"</h2>
            <table class="roster">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"XP"</th>
                        <th>"Deliveries"</th>
                        <th>"Distance"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
