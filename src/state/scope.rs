//! Everything a view controller needs: the API, the session writer, and the
//! view's lifetime.

use crate::net::api::ApiClient;
use crate::net::error::AppError;
use crate::net::transport::Transport;
use crate::state::auth::{AuthState, StateWriter, report_read_failure};
use crate::state::lifetime::ViewLifetime;

#[derive(Clone, Debug)]
pub struct ViewScope<T, S> {
    api: ApiClient<T>,
    session: S,
    lifetime: ViewLifetime,
}

impl<T, S> ViewScope<T, S>
where
    T: Transport,
    S: StateWriter<AuthState>,
{
    pub fn new(api: ApiClient<T>, session: S, lifetime: ViewLifetime) -> Self {
        Self {
            api,
            session,
            lifetime,
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime.is_alive()
    }

    /// Apply `f` to view state unless the view has unmounted.
    ///
    /// Returns whether the write happened.
    pub fn update<V>(&self, view: &impl StateWriter<V>, f: impl FnOnce(&mut V)) -> bool {
        if !self.lifetime.is_alive() {
            log::debug!("dropping state write for an unmounted view");
            return false;
        }
        view.write(f);
        true
    }

    /// Turn a read result into `Some(value)`, or report the failure and yield
    /// `None` so the caller keeps its previous state.
    pub fn settle<R>(&self, what: &str, result: Result<R, AppError>) -> Option<R> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                report_read_failure(&self.session, what, &err);
                None
            }
        }
    }
}
