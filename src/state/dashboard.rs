//! Dashboard view state: company counters, recent assignments, upcoming events.
//!
//! The three reads run concurrently and settle independently. A failing read
//! keeps that section's previous value while the others update.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::transport::Transport;
use crate::net::types::{CompanyStats, Event, Job, JobStatus};
use crate::state::auth::{AuthState, StateWriter};
use crate::state::scope::ViewScope;

pub const RECENT_JOBS_LIMIT: usize = 5;
pub const UPCOMING_EVENTS_LIMIT: usize = 3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub stats: Option<CompanyStats>,
    pub assigned_jobs: Vec<Job>,
    pub events: Vec<Event>,
    pub loading: bool,
}

impl DashboardState {
    pub fn recent_jobs(&self) -> &[Job] {
        &self.assigned_jobs[..self.assigned_jobs.len().min(RECENT_JOBS_LIMIT)]
    }

    pub fn upcoming_events(&self) -> &[Event] {
        &self.events[..self.events.len().min(UPCOMING_EVENTS_LIMIT)]
    }
}

/// Fetch all dashboard sections and write whatever arrived.
pub async fn load_dashboard<T, S>(scope: &ViewScope<T, S>, view: &impl StateWriter<DashboardState>)
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    scope.update(view, |state| state.loading = true);

    let api = scope.api();
    let (stats, jobs, events) = futures::join!(
        api.company_stats(),
        api.jobs(Some(JobStatus::Assigned)),
        api.events()
    );
    let stats = scope.settle("company stats", stats);
    let jobs = scope.settle("assigned jobs", jobs);
    let events = scope.settle("events", events);

    scope.update(view, |state| {
        if let Some(stats) = stats {
            state.stats = Some(stats);
        }
        if let Some(jobs) = jobs {
            state.assigned_jobs = jobs;
        }
        if let Some(events) = events {
            state.events = events;
        }
        state.loading = false;
    });
}
