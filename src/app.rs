//! Todo App
//!
//! Root component: loads the todo list, shows the counter, the new-todo form
//! and the sorted list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::graphql::GraphqlClient;
use crate::store::{read_todos, AppState, AppStateStoreFields, QueryStatus};
use crate::todos::counter;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(GraphqlClient::new(config.endpoint), store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| ctx.fetch_todos());

    let todos = Memo::new(move |_| {
        store.cache().with(read_todos).unwrap_or_else(|e| {
            log::error!("[CACHE] failed to read todos: {}", e);
            None
        })
    });

    let failed = move || matches!(store.status().get(), QueryStatus::Failed);
    let loading = move || store.status().get() == QueryStatus::Loading;

    view! {
        <Show when=move || !failed() fallback=|| view! { <div>"Network error"</div> }>
            <div class="todo-app">
                <div class="todo-title">
                    "Todo App "
                    <span class="todo-counter">"(" {move || counter(todos.get().as_deref())} ")"</span>
                </div>
                <div class="todo-body">
                    <NewTodoForm />
                    <Show when=move || !loading() fallback=|| view! { <div>"loading..."</div> }>
                        <TodoList todos=todos />
                    </Show>
                </div>
            </div>
        </Show>
    }
}
