//! GraphQL Client
//!
//! POSTs operation documents to the configured endpoint and unwraps the
//! `{ data, errors }` response envelope. Operations are organized by domain.

mod todo;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::GraphqlError;

// Re-export all public items
pub use todo::*;

/// A named GraphQL document
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlClient {
    endpoint: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody<'a, V> {
    query: &'a str,
    operation_name: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct ResponseEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<ErrorEntry>>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

impl<T> ResponseEnvelope<T> {
    fn into_result(self) -> Result<T, GraphqlError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let messages = errors.into_iter().map(|e| e.message).collect();
            return Err(GraphqlError::Graphql(messages));
        }
        self.data.ok_or(GraphqlError::MissingData)
    }
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// Execute an operation and decode its `data` field as `T`
    pub async fn execute<V, T>(&self, operation: Operation, variables: &V) -> Result<T, GraphqlError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("[GQL] {} -> {}", operation.name, self.endpoint);
        let body = RequestBody {
            query: operation.document,
            operation_name: operation.name,
            variables,
        };

        let response = Request::post(&self.endpoint).json(&body)?.send().await?;
        if !response.ok() {
            return Err(GraphqlError::Status(response.status()));
        }

        let envelope: ResponseEnvelope<T> = response.json().await?;
        envelope.into_result()
    }
}
