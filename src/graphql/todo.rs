//! Todo Operations
//!
//! Documents and typed wrappers for the todo queries and mutations.

use serde::{Deserialize, Serialize};

use super::{GraphqlClient, Operation};
use crate::error::GraphqlError;
use crate::models::{RemovedTodo, Todo};

/// Root query field holding the todo list
pub const ALL_TODOS: &str = "allTodos";

// ========================
// Documents
// ========================

pub const GET_TODOS: Operation = Operation {
    name: "GetTodos",
    document: "query GetTodos { allTodos { id text checked } }",
};

pub const CREATE_TODO: Operation = Operation {
    name: "CreateTodo",
    document: "mutation CreateTodo($text: String!, $checked: Boolean!) { \
               createTodo(text: $text, checked: $checked) { id text checked } }",
};

pub const REMOVE_TODO: Operation = Operation {
    name: "RemoveTodo",
    document: "mutation RemoveTodo($id: ID!) { removeTodo(id: $id) { id } }",
};

pub const UPDATE_TODO: Operation = Operation {
    name: "UpdateTodo",
    document: "mutation UpdateTodo($id: ID!, $text: String, $checked: Boolean) { \
               updateTodo(id: $id, text: $text, checked: $checked) { id text checked } }",
};

// ========================
// Variables
// ========================

#[derive(Serialize)]
struct NoVars {}

#[derive(Serialize)]
struct CreateTodoVars<'a> {
    text: &'a str,
    checked: bool,
}

#[derive(Serialize)]
struct IdVars {
    id: u32,
}

/// Variables of `UpdateTodo`, a full snapshot of the row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoUpdate {
    pub id: u32,
    pub text: String,
    pub checked: bool,
}

// ========================
// Response Data
// ========================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllTodosData {
    all_todos: Vec<Todo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTodoData {
    create_todo: Todo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoveTodoData {
    remove_todo: RemovedTodo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTodoData {
    update_todo: Todo,
}

// ========================
// Operations
// ========================

pub async fn get_todos(client: &GraphqlClient) -> Result<Vec<Todo>, GraphqlError> {
    let data: AllTodosData = client.execute(GET_TODOS, &NoVars {}).await?;
    Ok(data.all_todos)
}

/// New todos always start unchecked
pub async fn create_todo(client: &GraphqlClient, text: &str) -> Result<Todo, GraphqlError> {
    let vars = CreateTodoVars { text, checked: false };
    let data: CreateTodoData = client.execute(CREATE_TODO, &vars).await?;
    Ok(data.create_todo)
}

pub async fn remove_todo(client: &GraphqlClient, id: u32) -> Result<RemovedTodo, GraphqlError> {
    let data: RemoveTodoData = client.execute(REMOVE_TODO, &IdVars { id }).await?;
    Ok(data.remove_todo)
}

pub async fn update_todo(client: &GraphqlClient, update: &TodoUpdate) -> Result<Todo, GraphqlError> {
    let data: UpdateTodoData = client.execute(UPDATE_TODO, update).await?;
    Ok(data.update_todo)
}
