//! Management view state: roster, job board and events, with the
//! manager/admin mutations.
//!
//! Each mutation is followed by one re-fetch of the collection it touched.
//! Failures are logged; the view keeps showing what it had.

#[cfg(test)]
#[path = "management_test.rs"]
mod management_test;

use crate::net::transport::Transport;
use crate::net::types::{Event, Identity, Job, JobStatus, NewEvent, NewJob, Role, UserUpdate};
use crate::state::auth::{AuthState, StateWriter};
use crate::state::scope::ViewScope;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManagementState {
    pub users: Vec<Identity>,
    pub jobs: Vec<Job>,
    pub events: Vec<Event>,
    pub loading: bool,
}

impl ManagementState {
    /// Roster entries a job can be assigned to.
    pub fn drivers(&self) -> impl Iterator<Item = &Identity> {
        self.users.iter().filter(|user| user.role == Role::Driver && user.is_active)
    }

    /// Jobs the assignment picker may offer.
    pub fn assignable_jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter().filter(|job| job.status == JobStatus::Available)
    }
}

/// Only admins may change roles; managers see the roster read-only.
pub fn can_change_roles(viewer: Role) -> bool {
    match viewer {
        Role::Admin => true,
        Role::Manager | Role::Driver => false,
    }
}

pub async fn load_management<T, S>(scope: &ViewScope<T, S>, view: &impl StateWriter<ManagementState>)
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    scope.update(view, |state| state.loading = true);

    let api = scope.api();
    let (users, jobs, events) = futures::join!(api.users(), api.jobs(None), api.events());
    let users = scope.settle("users", users);
    let jobs = scope.settle("jobs", jobs);
    let events = scope.settle("events", events);

    scope.update(view, |state| {
        if let Some(users) = users {
            state.users = users;
        }
        if let Some(jobs) = jobs {
            state.jobs = jobs;
        }
        if let Some(events) = events {
            state.events = events;
        }
        state.loading = false;
    });
}

async fn reload_users<T, S>(scope: &ViewScope<T, S>, view: &impl StateWriter<ManagementState>)
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    if let Some(users) = scope.settle("users", scope.api().users().await) {
        scope.update(view, |state| state.users = users);
    }
}

async fn reload_jobs<T, S>(scope: &ViewScope<T, S>, view: &impl StateWriter<ManagementState>)
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    if let Some(jobs) = scope.settle("jobs", scope.api().jobs(None).await) {
        scope.update(view, |state| state.jobs = jobs);
    }
}

async fn reload_events<T, S>(scope: &ViewScope<T, S>, view: &impl StateWriter<ManagementState>)
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    if let Some(events) = scope.settle("events", scope.api().events().await) {
        scope.update(view, |state| state.events = events);
    }
}

/// Create a job. Returns `true` when the server accepted it.
pub async fn create_job<T, S>(
    scope: &ViewScope<T, S>,
    view: &impl StateWriter<ManagementState>,
    job: &NewJob,
) -> bool
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    match scope.api().create_job(job).await {
        Ok(created) => {
            log::info!("created job {}", created.id);
            reload_jobs(scope, view).await;
            true
        }
        Err(err) => {
            log::error!("failed to create job: {err}");
            false
        }
    }
}

/// Create an event. Returns `true` when the server accepted it.
pub async fn create_event<T, S>(
    scope: &ViewScope<T, S>,
    view: &impl StateWriter<ManagementState>,
    event: &NewEvent,
) -> bool
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    match scope.api().create_event(event).await {
        Ok(created) => {
            log::info!("created event {}", created.id);
            reload_events(scope, view).await;
            true
        }
        Err(err) => {
            log::error!("failed to create event: {err}");
            false
        }
    }
}

pub async fn change_role<T, S>(
    scope: &ViewScope<T, S>,
    view: &impl StateWriter<ManagementState>,
    user_id: &str,
    role: Role,
) where
    T: Transport,
    S: StateWriter<AuthState>,
{
    match scope.api().update_user(user_id, &UserUpdate::role(role)).await {
        Ok(_) => {
            log::info!("user {user_id} is now {role}");
            reload_users(scope, view).await;
        }
        Err(err) => log::error!("failed to change role of {user_id}: {err}"),
    }
}

pub async fn assign_job<T, S>(
    scope: &ViewScope<T, S>,
    view: &impl StateWriter<ManagementState>,
    job_id: &str,
    driver_id: &str,
) where
    T: Transport,
    S: StateWriter<AuthState>,
{
    match scope.api().assign_job(job_id, driver_id).await {
        Ok(()) => {
            log::info!("job {job_id} assigned to {driver_id}");
            reload_jobs(scope, view).await;
        }
        Err(err) => log::error!("failed to assign job {job_id}: {err}"),
    }
}
