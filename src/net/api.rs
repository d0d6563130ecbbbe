//! Typed REST client for the `/api` surface.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, AppError>`. Non-2xx statuses become
//! `AppError::Http` with the server's `detail` text; callers decide whether a
//! failure clears the session, is logged, or both. Nothing panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::AppError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::{
    CompanyStats, Event, Identity, Job, JobStatus, NewEvent, NewJob, SessionExchange,
    SessionResponse, UserUpdate,
};

/// HTTP client bound to one API base URL.
///
/// Cheap to clone when the transport is; views clone it into spawned tasks.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =============================================================
    // Session
    // =============================================================

    /// `GET /auth/me`. A 401 means "no session" and yields `Ok(None)`.
    pub async fn current_user(&self) -> Result<Option<Identity>, AppError> {
        match self.get_json::<Identity>("/auth/me").await {
            Ok(identity) => Ok(Some(identity)),
            Err(err) if err.is_unauthorized() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// `POST /auth/process-session`: trade a one-time fragment token for a
    /// cookie session.
    pub async fn process_session(&self, session_id: &str) -> Result<Identity, AppError> {
        let body = SessionExchange {
            session_id: required_segment(session_id, "session id")?.to_owned(),
        };
        let response: SessionResponse = self.post_json("/auth/process-session", &body).await?;
        Ok(response.user)
    }

    /// `POST /auth/logout`.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.post_empty("/auth/logout").await
    }

    // =============================================================
    // Company, jobs, events
    // =============================================================

    pub async fn company_stats(&self) -> Result<CompanyStats, AppError> {
        self.get_json("/company/stats").await
    }

    /// `GET /jobs`, optionally filtered by status.
    pub async fn jobs(&self, status: Option<JobStatus>) -> Result<Vec<Job>, AppError> {
        self.get_json(&jobs_path(status)).await
    }

    pub async fn create_job(&self, job: &NewJob) -> Result<Job, AppError> {
        self.post_json("/jobs", job).await
    }

    pub async fn complete_job(&self, job_id: &str) -> Result<(), AppError> {
        let job_id = required_segment(job_id, "job id")?;
        self.post_empty(&format!("/jobs/{job_id}/complete")).await
    }

    pub async fn assign_job(&self, job_id: &str, driver_id: &str) -> Result<(), AppError> {
        let job_id = required_segment(job_id, "job id")?;
        let driver_id = required_segment(driver_id, "driver id")?;
        self.post_empty(&format!("/jobs/{job_id}/assign/{driver_id}"))
            .await
    }

    pub async fn events(&self) -> Result<Vec<Event>, AppError> {
        self.get_json("/events").await
    }

    pub async fn create_event(&self, event: &NewEvent) -> Result<Event, AppError> {
        self.post_json("/events", event).await
    }

    pub async fn join_event(&self, event_id: &str) -> Result<(), AppError> {
        let event_id = required_segment(event_id, "event id")?;
        self.post_empty(&format!("/events/{event_id}/join")).await
    }

    // =============================================================
    // Users
    // =============================================================

    /// `GET /users` (manager/admin only on the server).
    pub async fn users(&self) -> Result<Vec<Identity>, AppError> {
        self.get_json("/users").await
    }

    pub async fn user(&self, user_id: &str) -> Result<Identity, AppError> {
        let user_id = required_segment(user_id, "user id")?;
        self.get_json(&format!("/users/{user_id}")).await
    }

    /// `PUT /users/{id}`; the server answers with the updated record.
    pub async fn update_user(&self, user_id: &str, update: &UserUpdate) -> Result<Identity, AppError> {
        let user_id = required_segment(user_id, "user id")?;
        self.send_json(Method::Put, &format!("/users/{user_id}"), update)
            .await
    }

    // =============================================================
    // Plumbing
    // =============================================================

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        let response = self.send(Method::Get, path, None).await?;
        decode(&response)
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, AppError> {
        self.send_json(Method::Post, path, body).await
    }

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("failed to encode request: {err}")))?;
        let response = self.send(method, path, Some(payload)).await?;
        decode(&response)
    }

    /// POST without a body; the acknowledgement body is ignored.
    async fn post_empty(&self, path: &str) -> Result<(), AppError> {
        self.send(Method::Post, path, None).await.map(|_| ())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, AppError> {
        let request = ApiRequest {
            method,
            url: build_url(&self.base_url, path),
            body,
        };
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(AppError::from_response(response.status, &response.body))
        }
    }
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, AppError> {
    serde_json::from_str(&response.body)
        .map_err(|err| AppError::Parse(format!("failed to decode response: {err}")))
}

fn jobs_path(status: Option<JobStatus>) -> String {
    match status {
        Some(status) => format!("/jobs?status={}", status.as_str()),
        None => "/jobs".to_owned(),
    }
}

fn required_segment<'a>(value: &'a str, what: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains('/') {
        return Err(AppError::Config(format!("invalid {what}")));
    }
    Ok(trimmed)
}

/// Join the API base and a path without doubling or dropping slashes.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
