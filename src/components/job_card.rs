//! Card for a single delivery job.
//!
//! DESIGN
//! ======
//! Shared by the dashboard summary, the jobs board and management. Actions are
//! optional callbacks so each page decides what a job offers.

#[cfg(test)]
#[path = "job_card_test.rs"]
mod job_card_test;

use leptos::prelude::*;

use crate::net::types::{Job, JobStatus};
use crate::util::format;

/// BEM modifier for a status badge.
pub fn status_class(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Available => "job-card__status job-card__status--available",
        JobStatus::Assigned => "job-card__status job-card__status--assigned",
        JobStatus::InProgress => "job-card__status job-card__status--in-progress",
        JobStatus::Delivered => "job-card__status job-card__status--delivered",
        JobStatus::Cancelled => "job-card__status job-card__status--cancelled",
    }
}

/// Secondary line under the title: assigned driver, or the deadline.
pub fn job_subtitle(job: &Job) -> Option<String> {
    if let Some(driver) = job.assigned_driver_name.as_deref().filter(|name| !name.is_empty()) {
        return Some(format!("Driver: {driver}"));
    }
    job.deadline.as_ref().map(|deadline| format!("Due {}", format::date(deadline)))
}

#[component]
pub fn JobCard(
    job: Job,
    #[prop(optional)] compact: bool,
    #[prop(default = None)] on_complete: Option<Callback<String>>,
) -> impl IntoView {
    let subtitle = job_subtitle(&job);
    let description = (!compact && !job.description.is_empty()).then(|| job.description.clone());
    let complete_id = job.id.clone();
    let complete = on_complete.map(|on_complete| {
        view! {
            <button
                class="btn job-card__complete"
                on:click=move |_| on_complete.run(complete_id.clone())
            >
                "Mark delivered"
            </button>
        }
    });

    view! {
        <article class="job-card" class:job-card--compact=compact>
            <header class="job-card__header">
                <h3 class="job-card__title">{job.title.clone()}</h3>
                <span class=status_class(job.status)>{job.status.label()}</span>
            </header>
            <p class="job-card__route">{format::route(&job.origin_city, &job.destination_city)}</p>
            {subtitle.map(|line| view! { <p class="job-card__subtitle">{line}</p> })}
            {description.map(|text| view! { <p class="job-card__description">{text}</p> })}
            <dl class="job-card__facts">
                <dt>"Cargo"</dt>
                <dd>{job.cargo.clone()}</dd>
                <dt>"Distance"</dt>
                <dd>{format::distance_km(job.distance)}</dd>
                <dt>"Reward"</dt>
                <dd>{format::xp(job.reward)}</dd>
                <dt>"Difficulty"</dt>
                <dd>{job.difficulty.clone()}</dd>
            </dl>
            {complete}
        </article>
    }
}
