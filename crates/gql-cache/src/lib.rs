//! GraphQL Normalized Cache
//!
//! Stores every entity once under a `Typename:id` reference. Root query
//! fields (e.g. `allTodos`) hold ordered lists of references, so an entity
//! written by one operation is observed by every list that points at it.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// An object type that can be normalized into the cache
pub trait Entity: Serialize + DeserializeOwned {
    /// GraphQL `__typename` of the object
    const TYPENAME: &'static str;

    /// Identifier unique within `TYPENAME`
    fn cache_id(&self) -> String;

    fn cache_ref(&self) -> CacheRef {
        CacheRef::new(Self::TYPENAME, self.cache_id())
    }
}

/// Reference key of a normalized entity, formatted as `Typename:id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheRef(String);

impl CacheRef {
    pub fn new(typename: &str, id: impl fmt::Display) -> Self {
        Self(format!("{}:{}", typename, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("failed to serialize {typename}: {source}")]
    Serialize {
        typename: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} did not serialize to a JSON object")]
    NotAnObject(CacheRef),
    #[error("failed to read {reference}: {source}")]
    Deserialize {
        reference: CacheRef,
        #[source]
        source: serde_json::Error,
    },
}

/// Normalized entity store plus root query fields
#[derive(Debug, Clone, Default)]
pub struct NormalizedCache {
    entities: HashMap<CacheRef, Map<String, Value>>,
    root_fields: HashMap<String, Vec<CacheRef>>,
}

impl NormalizedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write an entity, merging its fields over any stored copy.
    pub fn write_entity<T: Entity>(&mut self, entity: &T) -> Result<CacheRef, CacheError> {
        let reference = entity.cache_ref();
        let value = serde_json::to_value(entity).map_err(|source| CacheError::Serialize {
            typename: T::TYPENAME,
            source,
        })?;
        let Value::Object(fields) = value else {
            return Err(CacheError::NotAnObject(reference));
        };

        self.entities
            .entry(reference.clone())
            .or_default()
            .extend(fields);
        Ok(reference)
    }

    pub fn read_entity<T: Entity>(&self, reference: &CacheRef) -> Result<Option<T>, CacheError> {
        let Some(fields) = self.entities.get(reference) else {
            return Ok(None);
        };
        serde_json::from_value(Value::Object(fields.clone()))
            .map(Some)
            .map_err(|source| CacheError::Deserialize {
                reference: reference.clone(),
                source,
            })
    }

    /// Replace a root field with the given entities.
    ///
    /// Each entity is merged into the store; the stored reference list keeps
    /// only the first occurrence of every reference.
    pub fn write_list<T: Entity>(&mut self, field: &str, entities: &[T]) -> Result<(), CacheError> {
        let mut refs: Vec<CacheRef> = Vec::with_capacity(entities.len());
        for entity in entities {
            let reference = self.write_entity(entity)?;
            if !refs.contains(&reference) {
                refs.push(reference);
            }
        }
        self.root_fields.insert(field.to_string(), refs);
        Ok(())
    }

    /// Resolve a root field into entities.
    ///
    /// Returns `None` if the field was never written. References whose
    /// entity is missing are skipped.
    pub fn read_list<T: Entity>(&self, field: &str) -> Result<Option<Vec<T>>, CacheError> {
        let Some(refs) = self.root_fields.get(field) else {
            return Ok(None);
        };

        let mut list = Vec::with_capacity(refs.len());
        for reference in refs {
            if let Some(entity) = self.read_entity(reference)? {
                list.push(entity);
            }
        }
        Ok(Some(list))
    }

    pub fn refs(&self, field: &str) -> Option<&[CacheRef]> {
        self.root_fields.get(field).map(Vec::as_slice)
    }

    /// Rewrite the reference list of a root field.
    ///
    /// The modifier is not called for a field that was never written.
    /// Returns whether the field exists.
    pub fn modify_list<F>(&mut self, field: &str, modifier: F) -> bool
    where
        F: FnOnce(&[CacheRef]) -> Vec<CacheRef>,
    {
        match self.root_fields.get_mut(field) {
            Some(refs) => {
                *refs = modifier(refs);
                true
            }
            None => false,
        }
    }
}
