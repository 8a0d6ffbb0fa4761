//! Todo List Utilities
//!
//! Ordering, counter text and the per-row edit state.

use crate::graphql::TodoUpdate;
use crate::models::Todo;

/// Incomplete todos first; relative order is otherwise kept
pub fn sort_todos(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|todo| todo.checked);
    sorted
}

/// `"<completed>/<total>"`, or `"0/0"` before any data is loaded
pub fn counter(todos: Option<&[Todo]>) -> String {
    match todos {
        Some(todos) => {
            let completed = todos.iter().filter(|todo| todo.checked).count();
            format!("{}/{}", completed, todos.len())
        }
        None => "0/0".to_string(),
    }
}

/// Text to send for a form submit, `None` for blank input.
///
/// Only the blank check trims; the text goes out as typed.
pub fn submission(input: &str) -> Option<String> {
    (!input.trim().is_empty()).then(|| input.to_string())
}

/// Edit mode and draft text of one row
#[derive(Debug, Clone, PartialEq)]
pub struct RowEditor {
    id: u32,
    editing: bool,
    draft: String,
}

impl RowEditor {
    pub fn new(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            editing: false,
            draft: todo.text.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Flip edit mode. Leaving edit mode yields the update to commit.
    pub fn toggle_edit(&mut self, checked: bool) -> Option<TodoUpdate> {
        let committing = self.editing;
        self.editing = !self.editing;
        committing.then(|| TodoUpdate {
            id: self.id,
            text: self.draft.clone(),
            checked,
        })
    }

    /// Update for a checkbox click, sent with the current draft text
    pub fn toggle_checked(&self, checked: bool) -> TodoUpdate {
        TodoUpdate {
            id: self.id,
            text: self.draft.clone(),
            checked: !checked,
        }
    }
}
