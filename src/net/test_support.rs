//! Recording transport and wire fixtures shared by unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use super::api::ApiClient;
use super::error::AppError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::{Identity, Role};

type SendHook = Box<dyn Fn(&ApiRequest)>;

#[derive(Default)]
struct Inner {
    routes: HashMap<(Method, String), VecDeque<Result<ApiResponse, AppError>>>,
    calls: Vec<ApiRequest>,
    on_send: Option<SendHook>,
}

/// In-memory transport. Clones share the same script and call log.
///
/// Responses are queued per `(method, url)`; the last queued response is
/// reused once the queue is down to one. Unscripted routes answer 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<Inner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, url: &str, status: u16, body: serde_json::Value) {
        self.push(
            method,
            url,
            Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, method: Method, url: &str, err: AppError) {
        self.push(method, url, Err(err));
    }

    /// Run `hook` for every request before it is answered.
    pub fn on_send(&self, hook: impl Fn(&ApiRequest) + 'static) {
        self.inner.borrow_mut().on_send = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.inner.borrow().calls.clone()
    }

    pub fn count(&self, method: Method, url: &str) -> usize {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|call| call.method == method && call.url == url)
            .count()
    }

    fn push(&self, method: Method, url: &str, response: Result<ApiResponse, AppError>) {
        self.inner
            .borrow_mut()
            .routes
            .entry((method, url.to_owned()))
            .or_default()
            .push_back(response);
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(hook) = inner.on_send.as_ref() {
            hook(&request);
        }
        inner.calls.push(request.clone());
        let key = (request.method, request.url);
        match inner.routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Ok(ApiResponse {
                status: 404,
                body: r#"{"detail":"Not Found"}"#.to_owned(),
            }),
        }
    }
}

pub fn mock_client() -> (ApiClient<MockTransport>, MockTransport) {
    let transport = MockTransport::new();
    (ApiClient::new(transport.clone(), "/api"), transport)
}

// =============================================================
// Fixtures
// =============================================================

pub fn identity_json(id: &str, role: Role) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": format!("{id}@aura.test"),
        "name": format!("Driver {id}"),
        "picture": null,
        "role": role.as_str(),
        "experience_points": 1200,
        "total_distance": 860.5,
        "total_deliveries": 3,
        "is_active": true
    })
}

pub fn identity(id: &str, role: Role) -> Identity {
    serde_json::from_value(identity_json(id, role)).unwrap()
}

pub fn job_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Job {id}"),
        "description": "Chilled goods",
        "cargo": "Yoghurt",
        "origin_city": "Berlin",
        "destination_city": "Prague",
        "distance": 350.0,
        "reward": 1800,
        "difficulty": "Medium",
        "status": status,
        "assigned_driver_id": null,
        "assigned_driver_name": null,
        "created_by": "m-1"
    })
}

pub fn event_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Event {id}"),
        "description": "Weekly convoy",
        "event_type": "convoy",
        "date_time": "2030-06-01T19:00:00",
        "location": "Calais",
        "max_participants": 12,
        "participants": [],
        "created_by": "m-1"
    })
}

pub fn stats_json() -> serde_json::Value {
    serde_json::json!({
        "total_drivers": 14,
        "total_deliveries": 120,
        "total_distance": 45210.0,
        "active_drivers": 9,
        "pending_jobs": 6,
        "upcoming_events": 2
    })
}
