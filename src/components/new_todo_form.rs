//! New Todo Form Component
//!
//! Text input plus submit button for creating todos.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::todos::submission;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = submission(&new_text.get()) else { return; };

        ctx.create_todo(text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="할 일을 작성해주세요."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <div>
                <button type="submit">"+"</button>
            </div>
        </form>
    }
}
