//! Jobs board state and its single mutation, completing a job.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::transport::Transport;
use crate::net::types::{Identity, Job, JobStatus};
use crate::state::auth::{AuthState, StateWriter};
use crate::state::scope::ViewScope;

/// Status tabs offered on the jobs board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JobFilter {
    #[default]
    All,
    Available,
    Assigned,
    Delivered,
}

impl JobFilter {
    pub const ALL: [JobFilter; 4] = [
        JobFilter::All,
        JobFilter::Available,
        JobFilter::Assigned,
        JobFilter::Delivered,
    ];

    pub fn status(self) -> Option<JobStatus> {
        match self {
            JobFilter::All => None,
            JobFilter::Available => Some(JobStatus::Available),
            JobFilter::Assigned => Some(JobStatus::Assigned),
            JobFilter::Delivered => Some(JobStatus::Delivered),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobFilter::All => "All",
            JobFilter::Available => "Available",
            JobFilter::Assigned => "Assigned",
            JobFilter::Delivered => "Delivered",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobsState {
    pub jobs: Vec<Job>,
    pub filter: JobFilter,
    pub loading: bool,
}

/// Whether the board offers a "complete" action for `job`.
///
/// Only a display affordance; the server decides who may complete what.
pub fn offers_completion(job: &Job) -> bool {
    matches!(job.status, JobStatus::Assigned | JobStatus::InProgress)
}

/// `offers_completion`, narrowed to jobs `viewer` may close: their own, or
/// any job for a manager or admin.
pub fn offers_completion_to(job: &Job, viewer: &Identity) -> bool {
    offers_completion(job)
        && (viewer.role.can_manage() || job.assigned_driver_id.as_deref() == Some(viewer.id.as_str()))
}

/// Fetch the board for `filter`.
///
/// A response for a filter the user has since switched away from is dropped.
pub async fn load_jobs<T, S>(scope: &ViewScope<T, S>, view: &impl StateWriter<JobsState>, filter: JobFilter)
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    scope.update(view, |state| {
        state.filter = filter;
        state.loading = true;
    });

    let jobs = scope.settle("jobs", scope.api().jobs(filter.status()).await);

    scope.update(view, |state| {
        if state.filter != filter {
            return;
        }
        if let Some(jobs) = jobs {
            state.jobs = jobs;
        }
        state.loading = false;
    });
}

/// Ask the server to mark `job_id` delivered, then re-fetch the board once
/// under whichever filter is active when the server answers.
pub async fn complete_job<T, S>(scope: &ViewScope<T, S>, view: &impl StateWriter<JobsState>, job_id: &str)
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    match scope.api().complete_job(job_id).await {
        Ok(()) => {
            log::info!("job {job_id} completed");
            let Some(filter) = view.read(|state| state.filter) else {
                return;
            };
            load_jobs(scope, view, filter).await;
        }
        Err(err) => log::error!("failed to complete job {job_id}: {err}"),
    }
}
