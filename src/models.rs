//! Frontend Models
//!
//! Data structures matching the GraphQL schema.

use gql_cache::Entity;
use serde::{Deserialize, Deserializer, Serialize};

/// Todo data structure (matches the `Todo` GraphQL type)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u32,
    pub text: String,
    pub checked: bool,
}

impl Entity for Todo {
    const TYPENAME: &'static str = "Todo";

    fn cache_id(&self) -> String {
        self.id.to_string()
    }
}

/// Payload of `removeTodo`, only the id comes back
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemovedTodo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u32,
}

/// GraphQL `ID` values arrive as strings or numbers depending on the server
fn deserialize_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u32),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_from_number_or_string() {
        let from_number: Todo = serde_json::from_value(json!({"id": 7, "text": "a", "checked": false})).unwrap();
        let from_string: Todo = serde_json::from_value(json!({"id": "7", "text": "a", "checked": false})).unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.cache_ref().as_str(), "Todo:7");
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let parsed = serde_json::from_value::<RemovedTodo>(json!({"id": "abc"}));
        assert!(parsed.is_err());
    }
}
