//! Todo List Component
//!
//! Renders cached todos with incomplete ones first.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::Todo;
use crate::todos::sort_todos;

/// Todo list view, keyed by id so rows keep their edit state when reordered
#[component]
pub fn TodoList(todos: Memo<Option<Vec<Todo>>>) -> impl IntoView {
    let sorted = move || todos.with(|list| list.as_deref().map(sort_todos).unwrap_or_default());

    view! {
        <ul class="todo-list">
            <For
                each=sorted
                key=|todo| todo.id
                children=move |todo| {
                    let id = todo.id;
                    let checked = Signal::derive(move || {
                        todos.with(|list| {
                            list.iter()
                                .flatten()
                                .find(|t| t.id == id)
                                .is_some_and(|t| t.checked)
                        })
                    });
                    view! { <TodoItem todo=todo checked=checked /> }
                }
            />
        </ul>
    }
}
