//! Application Context
//!
//! The list store, shared with every component via the Leptos Context API.

use leptos::prelude::*;
use todo_core::{ListStore, SystemClock};

use crate::storage::LocalStorageRepository;

/// Store type used in the browser
pub type AppStore = ListStore<LocalStorageRepository, SystemClock>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The single owner of the todo list
    pub store: RwSignal<AppStore>,
}

impl AppContext {
    pub fn new(store: RwSignal<AppStore>) -> Self {
        Self { store }
    }

    /// Run a store operation; readers are notified only when it changed
    /// something
    pub fn mutate(&self, op: impl FnOnce(&mut AppStore) -> bool) {
        self.store.maybe_update(op);
    }

    pub fn is_editing(&self) -> bool {
        self.store.with(|store| store.is_editing())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
