// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One normalized tag on a record: the trimmed display text and its
/// URL-safe token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub name: String,
    pub slug: String,
}

impl TagEntry {
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("name".to_string(), Value::String(self.name.clone()));
        object.insert("slug".to_string(), Value::String(self.slug.clone()));
        Value::Object(object)
    }
}

/// A content record: an ordered mapping of field name to JSON value.
/// The engine only interprets the configured tag field; every other field
/// is opaque and preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRecord {
    fields: Map<String, Value>,
}

impl ContentRecord {
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for ContentRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// The shared, caller-owned record store. Keyed by string identifier;
/// iteration order is the identifier order, so full-store scans are
/// deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: BTreeMap<String, ContentRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, id: impl Into<String>, record: ContentRecord) -> Option<ContentRecord> {
        self.records.insert(id.into(), record)
    }

    pub fn get(&self, id: &str) -> Option<&ContentRecord> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ContentRecord> {
        self.records.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<ContentRecord> {
        self.records.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ContentRecord)> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut ContentRecord)> {
        self.records.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.records.keys()
    }
}

/// Process-wide metadata the engine publishes aggregate tag indexes into.
/// Owned by the caller and handed in per run; publication merges into
/// existing keys instead of replacing them wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    values: Map<String, Value>,
}

impl Metadata {
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Insert `field` into the object stored under `key`, creating the
    /// object if absent. A non-object value already present under `key` is
    /// replaced, since the aggregate index must be able to grow field by
    /// field.
    pub fn merge_into_object(&mut self, key: &str, field: String, value: Value) {
        let slot = self
            .values
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            warn!("Metadata key '{}' held a non-object value; resetting it", key);
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(object) = slot {
            object.insert(field, value);
        }
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}
