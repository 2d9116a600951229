//! Core types for recursive object mapping
//!
//! This module defines the data model shared by the mapper: the mapping
//! type itself, the entry a transform produces, value classification and
//! the options that control how the mapper treats unusual transforms.
//!
//! Copyright (c) 2025 Objmap Contributors
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An insertion-ordered collection of string keys to arbitrary JSON values
pub type Mapping = Map<String, Value>;

/// The key and value a transform produced for one input entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedEntry {
    /// Key to store the entry under in the output mapping
    pub new_key: String,
    /// Replacement value; recursed into when the original value was an object
    pub new_value: Value,
}

impl MappedEntry {
    /// Create a new mapped entry
    pub fn new(new_key: impl Into<String>, new_value: impl Into<Value>) -> Self {
        Self {
            new_key: new_key.into(),
            new_value: new_value.into(),
        }
    }
}

impl<K, V> From<(K, V)> for MappedEntry
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from((new_key, new_value): (K, V)) -> Self {
        Self::new(new_key, new_value)
    }
}

/// Variant of a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl ValueKind {
    /// Classify a value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
        }
    }

    /// Whether the mapper descends into values of this kind.
    ///
    /// Only objects qualify. Arrays and null are leaves.
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Object => write!(f, "object"),
            ValueKind::Array => write!(f, "array"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Null => write!(f, "null"),
        }
    }
}

/// What to do when an object entry is transformed into a non-object value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeMismatchPolicy {
    /// Fail the whole call with [`crate::Error::ShapeMismatch`]
    #[default]
    Error,
    /// Store the returned value as a leaf and keep going
    Leaf,
}

/// Options controlling a mapping call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Handling of object entries whose transformed value is not an object
    pub shape_mismatch: ShapeMismatchPolicy,
    /// Deepest nested object allowed, the top-level mapping being depth 0.
    /// `None` means unbounded.
    pub max_depth: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind_classification() {
        assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Object);
        assert_eq!(ValueKind::of(&json!([{"a": 1}])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!(false)), ValueKind::Boolean);
        assert_eq!(ValueKind::of(&Value::Null), ValueKind::Null);
    }

    #[test]
    fn test_only_objects_are_containers() {
        assert!(ValueKind::Object.is_container());
        assert!(!ValueKind::Array.is_container());
        assert!(!ValueKind::Null.is_container());
        assert!(!ValueKind::String.is_container());
    }

    #[test]
    fn test_mapped_entry_from_tuple() {
        let entry: MappedEntry = ("key", json!({"nested": true})).into();
        assert_eq!(entry.new_key, "key");
        assert_eq!(entry.new_value, json!({"nested": true}));
    }

    #[test]
    fn test_map_options_defaults() {
        let options = MapOptions::default();
        assert_eq!(options.shape_mismatch, ShapeMismatchPolicy::Error);
        assert_eq!(options.max_depth, None);
    }

    #[test]
    fn test_map_options_deserialize_partial() {
        let options: MapOptions = serde_json::from_value(json!({"shape_mismatch": "leaf"})).unwrap();
        assert_eq!(options.shape_mismatch, ShapeMismatchPolicy::Leaf);
        assert_eq!(options.max_depth, None);

        let options: MapOptions = serde_json::from_value(json!({"max_depth": 3})).unwrap();
        assert_eq!(options.shape_mismatch, ShapeMismatchPolicy::Error);
        assert_eq!(options.max_depth, Some(3));
    }
}
