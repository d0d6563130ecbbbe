//! Plain-cell state writers for exercising controllers without a reactive runtime.

use std::cell::RefCell;
use std::rc::Rc;

use super::auth::{AuthState, StateWriter};
use super::lifetime::ViewLifetime;
use super::scope::ViewScope;
use crate::net::test_support::{MockTransport, identity, mock_client};
use crate::net::types::Role;

/// Shared cell that records how many writes it received.
#[derive(Clone)]
pub struct Cell<V> {
    value: Rc<RefCell<V>>,
    writes: Rc<RefCell<usize>>,
}

impl<V: Clone> Cell<V> {
    pub fn new(value: V) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            writes: Rc::new(RefCell::new(0)),
        }
    }

    pub fn get(&self) -> V {
        self.value.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl<V> StateWriter<V> for Cell<V> {
    fn write(&self, f: impl FnOnce(&mut V)) {
        *self.writes.borrow_mut() += 1;
        f(&mut self.value.borrow_mut());
    }

    fn read<R>(&self, f: impl FnOnce(&V) -> R) -> Option<R> {
        Some(f(&self.value.borrow()))
    }
}

/// Scope wired to a mock API and a signed-in driver session.
pub struct TestScope {
    pub scope: ViewScope<MockTransport, Cell<AuthState>>,
    pub transport: MockTransport,
    pub session: Cell<AuthState>,
    pub lifetime: ViewLifetime,
}

pub fn test_scope(role: Role) -> TestScope {
    let (api, transport) = mock_client();
    let session = Cell::new(AuthState {
        user: Some(identity("me", role)),
        loading: false,
    });
    let lifetime = ViewLifetime::new();
    TestScope {
        scope: ViewScope::new(api, session.clone(), lifetime.clone()),
        transport,
        session,
        lifetime,
    }
}
