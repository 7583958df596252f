//! Custom data: an open-ended tag bag attached to types and members
//!
//! Keys are opaque tag names, values are arbitrary JSON. New tag kinds need no
//! change to the builders that carry them. Merging is additive: appending one
//! bag to another keeps every key, and a key present in both takes the
//! appended value.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Opaque key identifying one kind of custom data
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomDataKey(String);

impl CustomDataKey {
    /// Create a key
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomDataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomDataKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Immutable custom data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomData {
    entries: BTreeMap<CustomDataKey, JsonValue>,
}

impl CustomData {
    /// Value stored under `key`
    pub fn get(&self, key: &CustomDataKey) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    /// Check whether `key` is present
    pub fn contains_key(&self, key: &CustomDataKey) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys in order
    pub fn keys(&self) -> impl Iterator<Item = &CustomDataKey> {
        self.entries.keys()
    }

    /// All entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&CustomDataKey, &JsonValue)> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there is no custom data
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`CustomData`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomDataBuilder {
    entries: BTreeMap<CustomDataKey, JsonValue>,
}

impl CustomDataBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder from existing custom data
    pub fn from_existing(existing: &CustomData) -> Self {
        Self {
            entries: existing.entries.clone(),
        }
    }

    /// Store a value, returning the previous value for the key
    pub fn put(&mut self, key: impl Into<CustomDataKey>, value: JsonValue) -> Option<JsonValue> {
        self.entries.insert(key.into(), value)
    }

    /// Value stored under `key`
    pub fn get(&self, key: &CustomDataKey) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &CustomDataKey) -> Option<JsonValue> {
        self.entries.remove(key)
    }

    /// All keys in order
    pub fn keys(&self) -> impl Iterator<Item = &CustomDataKey> {
        self.entries.keys()
    }

    /// Merge every entry of `other` into this builder
    pub fn append(&mut self, other: &CustomData) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there is no custom data
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the immutable custom data
    pub fn build(&self) -> CustomData {
        CustomData {
            entries: self.entries.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_append_is_additive() {
        let mut target = CustomDataBuilder::new();
        target.put("persistent", json!(true));
        target.put("table", json!("person"));

        let mut source = CustomDataBuilder::new();
        source.put("table", json!("people"));
        source.put("versioned", json!({ "field": "version" }));

        target.append(&source.build());

        assert_eq!(target.len(), 3);
        assert_eq!(target.get(&"persistent".into()), Some(&json!(true)));
        assert_eq!(target.get(&"table".into()), Some(&json!("people")));
        assert!(target.build().contains_key(&"versioned".into()));
    }

    #[test]
    fn test_put_and_remove() {
        let mut builder = CustomDataBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.put("a", json!(1)), None);
        assert_eq!(builder.put("a", json!(2)), Some(json!(1)));
        assert_eq!(builder.remove(&"a".into()), Some(json!(2)));
        assert!(builder.build().is_empty());
    }
}
