//! Profile page: the signed-in driver's stats and editable account ids.

use leptos::prelude::*;

use crate::app::use_view_scope;
use crate::components::form_field::draft_input;
use crate::components::nav_bar::NavBar;
use crate::components::stat_card::StatCard;
use crate::state::auth::AuthState;
use crate::state::forms::ProfileDraft;
use crate::state::profile::{ProfileSaves, refresh_identity, save_profile};
use crate::util::format;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let scope = use_view_scope();
    let auth = expect_context::<RwSignal<AuthState>>();
    let user_id = auth.with_untracked(|auth| auth.user.as_ref().map(|user| user.id.clone()).unwrap_or_default());
    let seeded = auth.with_untracked(|auth| auth.user.as_ref().map(ProfileDraft::from_identity).unwrap_or_default());
    let draft = RwSignal::new(seeded.clone());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saves = ProfileSaves::default();

    {
        let scope = scope.clone();
        let saves = saves.clone();
        let user_id = user_id.clone();
        leptos::task::spawn_local(async move {
            let Some(identity) = refresh_identity(&scope, &saves, &user_id).await else {
                return;
            };
            // Edits made while the read was in flight stay.
            draft.update(|draft| {
                if *draft == seeded {
                    *draft = ProfileDraft::from_identity(&identity);
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let update = match draft.with_untracked(ProfileDraft::validate) {
            Ok(update) => update,
            Err(reason) => {
                message.set(Some(reason.to_owned()));
                return;
            }
        };
        busy.set(true);
        message.set(None);
        let scope = scope.clone();
        let saves = saves.clone();
        let user_id = user_id.clone();
        leptos::task::spawn_local(async move {
            let saved = save_profile(&scope, &saves, &user_id, &update).await;
            if !scope.is_alive() {
                return;
            }
            busy.set(false);
            message.set(Some(if saved { "Profile saved." } else { "Could not save the profile." }.to_owned()));
        });
    };

    let stats = move || {
        auth.with(|auth| auth.user.clone()).map(|user| {
            let joined = user.join_date.as_ref().map(format::date);
            view! {
                <header class="profile-page__header">
                    {user.picture.clone().map(|src| view! { <img class="profile-page__avatar" src=src alt=""/> })}
                    <div>
                        <h1 class="page-title">{user.name.clone()}</h1>
                        <p class="profile-page__meta">{user.email.clone()} " · " {user.role.label()}</p>
                        {joined.map(|date| view! { <p class="profile-page__meta">"Member since " {date}</p> })}
                    </div>
                </header>
                <div class="profile-page__stats">
                    <StatCard label="Experience" value=format::xp(user.experience_points)/>
                    <StatCard label="Deliveries" value=format::thousands(user.total_deliveries)/>
                    <StatCard label="Distance" value=format::distance_km(user.total_distance)/>
                </div>
            }
        })
    };

    view! {
        <div class="app-shell">
            <NavBar/>
            <main class="profile-page">
                {stats}
                <form class="form profile-page__form" on:submit=on_submit>
                    <h2>"Account"</h2>
                    {draft_input(draft, "Display name", "text", |d| d.name.clone(), |d, v| d.name = v)}
                    {draft_input(draft, "TruckersMP ID", "text", |d| d.truckers_mp_id.clone(), |d, v| d.truckers_mp_id = v)}
                    {draft_input(draft, "Steam ID", "text", |d| d.steam_id.clone(), |d, v| d.steam_id = v)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                    {move || message.get().map(|text| view! { <p class="form__message">{text}</p> })}
                </form>
            </main>
        </div>
    }
}
