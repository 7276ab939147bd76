// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::store::RecordStore;
use serde_json::Value;
use std::cmp::Ordering;

/// Sort record identifiers by the configured field. Records whose field is
/// absent or falsy sort first; two absent values compare equal and keep
/// their group order (the sort is stable); present values compare by the
/// natural ordering of their type. `reverse` reverses the sorted output,
/// which is not the same as inverting the comparator when equal keys are
/// involved.
pub(crate) fn sort_records(ids: &mut [String], store: &RecordStore, sort_by: &str, reverse: bool) {
    ids.sort_by(|a, b| {
        let left = sort_key(store, a, sort_by);
        let right = sort_key(store, b, sort_by);
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => compare_values(x, y),
        }
    });
    if reverse {
        ids.reverse();
    }
}

fn sort_key<'a>(store: &'a RecordStore, id: &str, field: &str) -> Option<&'a Value> {
    let value = store.get(id)?.field(field)?;
    if is_falsy(value) { None } else { Some(value) }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        // mismatched or non-scalar types keep their relative order
        _ => Ordering::Equal,
    }
}
