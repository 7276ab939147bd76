// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::EntryConfig;
use crate::store::{ContentRecord, RecordStore, TagEntry};
use crate::tags::group::TagGroup;
use log::debug;
use serde_json::Value;

/// Raw shape of a record's tag field before normalization: either a
/// comma-separated string or a sequence of values.
enum RawTagField {
    Single(String),
    List(Vec<Value>),
}

impl RawTagField {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(RawTagField::Single(s.clone())),
            Value::Array(items) if items.is_empty() => None,
            Value::Array(items) => Some(RawTagField::List(items.clone())),
            Value::Null => None,
            other => Some(RawTagField::Single(coerce_to_string(other))),
        }
    }

    fn into_raw_values(self) -> Vec<String> {
        match self {
            RawTagField::Single(s) => s.split(',').map(str::to_string).collect(),
            RawTagField::List(items) => items.iter().map(coerce_to_string).collect(),
        }
    }
}

fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // an already-normalized pair from a previous pass re-reads as its
        // display name, keeping repeated runs over the same store stable
        Value::Object(fields) => match fields.get("name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => value.to_string(),
        },
        other => other.to_string(),
    }
}

/// Scan every record carrying a non-empty tag field: rewrite the field into
/// ordered `{name, slug}` pairs and append the record to the group entry
/// for each display tag, in field order, duplicates included. Records
/// without the field are skipped; nothing here can fail.
pub(crate) fn index_records(store: &mut RecordStore, config: &EntryConfig, group: &mut TagGroup) {
    let slugifier = config.slugifier();
    let mut indexed = 0usize;

    for (id, record) in store.iter_mut() {
        let Some(raw) = record.field(&config.handle).and_then(RawTagField::from_value) else {
            continue;
        };

        let entries: Vec<TagEntry> = raw
            .into_raw_values()
            .iter()
            .map(|raw_value| {
                let name = raw_value.trim().to_string();
                TagEntry {
                    slug: slugifier.normalize(&name),
                    name,
                }
            })
            .collect();

        for entry in &entries {
            group.push(entry.name.clone(), id.clone());
        }
        rewrite_tag_field(record, &config.handle, &entries);
        indexed += 1;
    }

    debug!(
        "Indexed {} record(s) into {} tag(s) via field '{}'",
        indexed,
        group.len(),
        config.handle
    );
}

fn rewrite_tag_field(record: &mut ContentRecord, handle: &str, entries: &[TagEntry]) {
    let value = Value::Array(entries.iter().map(TagEntry::to_value).collect());
    record.set_field(handle, value);
}
