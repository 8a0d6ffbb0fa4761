//! Application Context
//!
//! Shared GraphQL client and the mutation handlers, provided via the Leptos
//! Context API. Every request runs on `spawn_local` and patches the store
//! when its response arrives.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::graphql::{self, GraphqlClient, TodoUpdate};
use crate::store::{
    store_prepend_todo, store_remove_todo, store_set_status, store_set_todos, store_update_todo,
    AppStore, QueryStatus,
};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    client: StoredValue<GraphqlClient>,
    store: AppStore,
}

impl AppContext {
    pub fn new(client: GraphqlClient, store: AppStore) -> Self {
        Self {
            client: StoredValue::new(client),
            store,
        }
    }

    /// Fetch the full todo list into the cache
    pub fn fetch_todos(&self) {
        let client = self.client.get_value();
        let store = self.store;
        spawn_local(async move {
            match graphql::get_todos(&client).await {
                Ok(todos) => {
                    log::info!("[APP] Loaded {} todos", todos.len());
                    store_set_todos(&store, todos);
                    store_set_status(&store, QueryStatus::Ready);
                }
                Err(e) => {
                    log::error!("[APP] GetTodos failed: {}", e);
                    store_set_status(&store, QueryStatus::Failed);
                }
            }
        });
    }

    pub fn create_todo(&self, text: String) {
        let client = self.client.get_value();
        let store = self.store;
        spawn_local(async move {
            match graphql::create_todo(&client, &text).await {
                Ok(todo) => store_prepend_todo(&store, todo),
                Err(e) => log::error!("[APP] CreateTodo failed: {}", e),
            }
        });
    }

    pub fn remove_todo(&self, id: u32) {
        let client = self.client.get_value();
        let store = self.store;
        spawn_local(async move {
            match graphql::remove_todo(&client, id).await {
                Ok(removed) => store_remove_todo(&store, removed.id),
                Err(e) => log::error!("[APP] RemoveTodo({}) failed: {}", id, e),
            }
        });
    }

    pub fn update_todo(&self, update: TodoUpdate) {
        let client = self.client.get_value();
        let store = self.store;
        spawn_local(async move {
            match graphql::update_todo(&client, &update).await {
                Ok(todo) => store_update_todo(&store, todo),
                Err(e) => log::error!("[APP] UpdateTodo({}) failed: {}", update.id, e),
            }
        });
    }
}
