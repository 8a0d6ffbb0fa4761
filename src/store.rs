//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the todo list lives in a normalized cache
//! mirror of the remote store.

use gql_cache::{CacheError, CacheRef, Entity, NormalizedCache};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::graphql::ALL_TODOS;
use crate::models::Todo;

/// State of the initial `GetTodos` fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Normalized cache of remote data
    pub cache: NormalizedCache,
    pub status: QueryStatus,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Cache Patches
// ========================

/// Current todo list, `None` until the first fetch lands
pub fn read_todos(cache: &NormalizedCache) -> Result<Option<Vec<Todo>>, CacheError> {
    cache.read_list(ALL_TODOS)
}

pub fn write_todos(cache: &mut NormalizedCache, todos: &[Todo]) -> Result<(), CacheError> {
    cache.write_list(ALL_TODOS, todos)
}

/// Put a freshly created todo at the head of the list
pub fn prepend_todo(cache: &mut NormalizedCache, todo: Todo) -> Result<(), CacheError> {
    let previous = read_todos(cache)?.unwrap_or_default();
    let mut todos = Vec::with_capacity(previous.len() + 1);
    todos.push(todo);
    todos.extend(previous);
    write_todos(cache, &todos)
}

/// Drop the `Todo:<id>` reference from the list
pub fn remove_todo_ref(cache: &mut NormalizedCache, id: u32) {
    let target = CacheRef::new(Todo::TYPENAME, id);
    cache.modify_list(ALL_TODOS, |refs| {
        refs.iter().filter(|r| **r != target).cloned().collect()
    });
}

/// Merge an updated todo into its cached entity
pub fn merge_todo(cache: &mut NormalizedCache, todo: &Todo) -> Result<(), CacheError> {
    cache.write_entity(todo).map(|_| ())
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    if let Err(e) = write_todos(&mut store.cache().write(), &todos) {
        log::error!("[CACHE] failed to write todo list: {}", e);
    }
}

pub fn store_prepend_todo(store: &AppStore, todo: Todo) {
    if let Err(e) = prepend_todo(&mut store.cache().write(), todo) {
        log::error!("[CACHE] failed to prepend todo: {}", e);
    }
}

pub fn store_remove_todo(store: &AppStore, id: u32) {
    remove_todo_ref(&mut store.cache().write(), id);
}

pub fn store_update_todo(store: &AppStore, todo: Todo) {
    if let Err(e) = merge_todo(&mut store.cache().write(), &todo) {
        log::error!("[CACHE] failed to update todo {}: {}", todo.id, e);
    }
}

pub fn store_set_status(store: &AppStore, status: QueryStatus) {
    store.status().set(status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::counter;

    fn make_todo(id: u32, text: &str, checked: bool) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            checked,
        }
    }

    fn seeded() -> NormalizedCache {
        let mut cache = NormalizedCache::new();
        write_todos(
            &mut cache,
            &[
                make_todo(1, "Walk dog", true),
                make_todo(2, "Pay rent", false),
                make_todo(3, "Call mom", false),
            ],
        )
        .unwrap();
        cache
    }

    fn todos(cache: &NormalizedCache) -> Vec<Todo> {
        read_todos(cache).unwrap().unwrap()
    }

    #[test]
    fn test_prepend_created_todo() {
        let mut cache = seeded();
        assert_eq!(counter(Some(todos(&cache).as_slice())), "1/3");

        prepend_todo(&mut cache, make_todo(4, "Buy milk", false)).unwrap();

        let list = todos(&cache);
        assert_eq!(list[0], make_todo(4, "Buy milk", false));
        assert_eq!(counter(Some(list.as_slice())), "1/4");
    }

    #[test]
    fn test_prepend_before_first_fetch() {
        let mut cache = NormalizedCache::new();
        prepend_todo(&mut cache, make_todo(9, "first", false)).unwrap();
        assert_eq!(todos(&cache).len(), 1);
    }

    #[test]
    fn test_prepend_existing_id_does_not_duplicate() {
        let mut cache = seeded();
        prepend_todo(&mut cache, make_todo(2, "Pay rent", false)).unwrap();
        let ids: Vec<u32> = todos(&cache).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_remove_by_reference() {
        let mut cache = seeded();
        remove_todo_ref(&mut cache, 3);

        let refs: Vec<&str> = cache.refs(ALL_TODOS).unwrap().iter().map(|r| r.as_str()).collect();
        assert_eq!(refs, vec!["Todo:1", "Todo:2"]);

        // Removing again is a no-op
        remove_todo_ref(&mut cache, 3);
        assert_eq!(todos(&cache).len(), 2);
    }

    #[test]
    fn test_remove_before_first_fetch() {
        let mut cache = NormalizedCache::new();
        remove_todo_ref(&mut cache, 1);
        assert!(read_todos(&cache).unwrap().is_none());
    }

    #[test]
    fn test_toggle_changes_only_that_todo() {
        let mut cache = seeded();
        merge_todo(&mut cache, &make_todo(2, "Pay rent", true)).unwrap();

        let list = todos(&cache);
        assert_eq!(list[0], make_todo(1, "Walk dog", true));
        assert_eq!(list[1], make_todo(2, "Pay rent", true));
        assert_eq!(list[2], make_todo(3, "Call mom", false));
        assert_eq!(counter(Some(list.as_slice())), "2/3");
    }
}
