//! Test doubles for code written against [`Dispatcher`].

use std::cell::RefCell;

use super::store::{Action, AppState, Dispatcher};

/// Reduces actions into a plain `AppState` and remembers every dispatch.
#[derive(Default)]
pub(crate) struct RecordingStore {
    state: RefCell<AppState>,
    actions: RefCell<Vec<Action>>,
}

impl RecordingStore {
    pub(crate) fn new(state: AppState) -> Self {
        Self {
            state: RefCell::new(state),
            actions: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }

    pub(crate) fn state(&self) -> AppState {
        self.state.borrow().clone()
    }
}

impl Dispatcher for RecordingStore {
    fn dispatch(&self, action: Action) {
        self.actions.borrow_mut().push(action.clone());
        self.state.borrow_mut().reduce(action);
    }

    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }
}
