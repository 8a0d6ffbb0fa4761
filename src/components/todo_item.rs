//! Todo Item Component
//!
//! One row of the list: checkbox, inline-editable text, edit and remove icons.

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::context::AppContext;
use crate::models::Todo;
use crate::todos::RowEditor;

/// A single todo row
///
/// `todo` seeds the edit draft; `checked` follows the cache so the row keeps
/// its draft across updates.
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] checked: Signal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = todo.id;
    let editor = RwSignal::new(RowEditor::new(&todo));
    let input_ref = NodeRef::<Input>::new();
    let editing = move || editor.with(RowEditor::is_editing);

    // Focus the text field on entering edit mode
    Effect::new(move |_| {
        if editing() {
            request_animation_frame(move || {
                if let Some(input) = input_ref.get_untracked() {
                    if let Err(e) = input.focus() {
                        log::warn!("[ITEM] failed to focus text of {}: {:?}", id, e);
                    }
                }
            });
        }
    });

    let on_edit = move |_| {
        let mut commit = None;
        editor.update(|e| commit = e.toggle_edit(checked.get_untracked()));
        if let Some(update) = commit {
            log::debug!("[ITEM] commit edit of {}", id);
            ctx.update_todo(update);
        }
    };

    let on_toggle = move |ev: web_sys::Event| {
        let cached = checked.get_untracked();
        ctx.update_todo(editor.with_untracked(|e| e.toggle_checked(cached)));
        // The box shows the cached flag until the update lands
        event_target::<HtmlInputElement>(&ev).set_checked(cached);
    };

    view! {
        <li class="todo-item">
            <div class="todo-item-main">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=on_toggle
                />
                <input
                    type="text"
                    node_ref=input_ref
                    class=move || if checked.get() { "todo-text completed" } else { "todo-text" }
                    prop:disabled=move || !editing()
                    prop:value=move || editor.with(|e| e.draft().to_string())
                    on:input=move |ev| editor.update(|e| e.set_draft(event_target_value(&ev)))
                />
            </div>
            <div class="todo-item-actions">
                <button class="edit-btn" on:click=on_edit>"✎"</button>
                <button class="remove-btn" on:click=move |_| ctx.remove_todo(id)>"⊖"</button>
            </div>
        </li>
    }
}
