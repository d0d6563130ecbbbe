//! Profile view: the signed-in identity's own record.
//!
//! The session store holds the identity shown in the navigation bar, so a
//! successful read or save replaces it there too. A read that was in flight
//! when a save started is dropped; the save's answer is newer.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::net::transport::Transport;
use crate::net::types::{Identity, UserUpdate};
use crate::state::auth::{AuthState, StateWriter, replace_identity};
use crate::state::scope::ViewScope;

/// Counts saves started from one profile view.
#[derive(Clone, Debug, Default)]
pub struct ProfileSaves {
    started: Arc<AtomicU64>,
}

impl ProfileSaves {
    pub fn generation(&self) -> u64 {
        self.started.load(Ordering::Relaxed)
    }

    fn begin(&self) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }
}

/// Re-read `user_id` so server-side counters (XP, deliveries) are current.
///
/// Returns the identity it wrote to the session, or `None` when the read
/// failed, the view unmounted, or a save started meanwhile.
pub async fn refresh_identity<T, S>(scope: &ViewScope<T, S>, saves: &ProfileSaves, user_id: &str) -> Option<Identity>
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    let generation = saves.generation();
    let identity = scope.settle("profile", scope.api().user(user_id).await)?;
    if !scope.is_alive() {
        return None;
    }
    if saves.generation() != generation {
        log::debug!("profile read for {user_id} superseded by a save");
        return None;
    }
    replace_identity(scope.session(), identity.clone());
    Some(identity)
}

/// Save profile fields. Returns `true` when the server accepted them.
pub async fn save_profile<T, S>(
    scope: &ViewScope<T, S>,
    saves: &ProfileSaves,
    user_id: &str,
    update: &UserUpdate,
) -> bool
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    saves.begin();
    match scope.api().update_user(user_id, update).await {
        Ok(identity) => {
            log::info!("profile saved for {user_id}");
            replace_identity(scope.session(), identity);
            true
        }
        Err(err) => {
            log::error!("failed to save profile for {user_id}: {err}");
            false
        }
    }
}
