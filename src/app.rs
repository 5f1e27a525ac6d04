//! Todo Frontend App
//!
//! Restores the list from browser storage and renders the widget.

use leptos::prelude::*;
use todo_core::{ListStore, StoreConfig};

use crate::components::{NewItemForm, TodoRow};
use crate::context::AppContext;
use crate::storage::LocalStorageRepository;

#[component]
pub fn App() -> impl IntoView {
    let config = StoreConfig::default();
    let repo = LocalStorageRepository::new(config.storage_key.clone());
    let store = RwSignal::new(ListStore::restore(repo, config.clock()));
    log::info!(
        "[APP] Mounted with {} items from '{}'",
        store.with_untracked(|s| s.len()),
        config.storage_key
    );

    // Provide context to all children
    provide_context(AppContext::new(store));

    // Typing in the input only touches the draft; the list re-renders on
    // actual item changes
    let items = Memo::new(move |_| store.with(|s| s.items().to_vec()));
    let summary = move || {
        store.with(|s| format!("{} items, {} completados", s.len(), s.completed_count()))
    };

    view! {
        <div class="todo-app">
            <h2>"TODOs here:"</h2>

            <NewItemForm />

            <ul class="todo-list">
                <For
                    each=move || items.get()
                    key=|item| {
                        (
                            item.id,
                            item.description.clone(),
                            item.completed,
                            item.completed_at.clone(),
                        )
                    }
                    children=move |item| view! { <TodoRow item=item /> }
                />
            </ul>

            <p class="item-count">{summary}</p>
        </div>
    }
}
