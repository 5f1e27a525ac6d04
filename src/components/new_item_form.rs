//! New Item Form Component
//!
//! Input plus the single action button: adds a new item, or updates the one
//! being edited.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = Memo::new(move |_| ctx.store.with(|store| store.draft().to_string()));
    let editing = Memo::new(move |_| ctx.is_editing());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.mutate(|store| store.submit());
    };

    view! {
        <form class="new-item-form" on:submit=submit>
            <input
                type="text"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ctx.store.update(|store| store.set_draft(text));
                }
            />
            <button type="submit">
                {move || if editing.get() { "Actualizar" } else { "Agregar" }}
            </button>
            <Show when=move || editing.get()>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| ctx.mutate(|store| store.cancel_edit())
                >
                    "Cancelar"
                </button>
            </Show>
        </form>
    }
}
