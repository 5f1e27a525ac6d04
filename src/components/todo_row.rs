//! Todo Row Component
//!
//! One list entry: checkbox, text, completion date and row actions.

use leptos::prelude::*;
use todo_core::Item;

use crate::context::use_app_context;

#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let completed = item.completed;
    let completed_at = item.completed_at.clone().map(|date| {
        view! { <span class="completed-date">"(Completado el " {date} ")"</span> }
    });
    let is_edit_target = move || ctx.store.with(|store| store.editing() == Some(id));

    view! {
        <li class=move || {
            let mut c = String::from("todo-row");
            if completed { c.push_str(" completed"); }
            if is_edit_target() { c.push_str(" editing"); }
            c
        }>
            <div class="todo-main">
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| ctx.mutate(|store| store.toggle(id))
                />
                <span class="todo-text">{item.description.clone()}</span>
                {completed_at}
            </div>

            <button class="edit-btn" on:click=move |_| ctx.mutate(|store| store.start_edit(id))>
                "Editar"
            </button>
            <button class="delete-btn" on:click=move |_| ctx.mutate(|store| store.delete(id))>
                "Eliminar"
            </button>
        </li>
    }
}
