// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::EntryConfig;
use crate::store::{ContentRecord, Metadata, RecordStore};
use crate::tags::group::TagGroup;
use crate::tags::path::{resolve_template, template_for_page};
use crate::tags::sort::sort_records;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Navigation metadata carried by every generated page record. Identifiers
/// stand in for object references: `files` lists the record identifiers of
/// the page's slice, `pages` the complete identifier sequence for the tag,
/// `previous`/`next` the adjacent pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub num: usize,
    pub tag: String,
    pub files: Vec<String>,
    pub pages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// A synthesized tag index page, stored as a plain content record so
/// external renderers consume it like any other record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub layout: String,
    pub contents: String,
    pub tag: String,
    pub pagination: Pagination,
}

impl PageRecord {
    /// Decode a generated page back out of the opaque record form.
    pub fn from_record(record: &ContentRecord) -> Option<PageRecord> {
        serde_json::from_value(Value::Object(record.fields().clone())).ok()
    }
}

/// For every tag in the group, in first-occurrence order: sort its records,
/// publish the aggregate index unless suppressed, slice into pages, and
/// insert one record per page with complete navigation links. Page
/// identifiers are derived before any page is built, so each page carries
/// the full sequence.
pub(crate) fn build_pages(
    store: &mut RecordStore,
    metadata: &mut Metadata,
    config: &EntryConfig,
    group: &TagGroup,
) {
    let slugifier = config.slugifier();

    for (tag, members) in group.iter() {
        let mut sorted = members.clone();
        sort_records(&mut sorted, store, &config.sort_by, config.reverse);
        let slug = slugifier.normalize(tag);

        if !config.skip_metadata {
            publish_tag_index(metadata, &config.metadata_key, tag, &slug, &sorted);
        }

        let total = sorted.len();
        if total == 0 {
            continue;
        }
        let size = if config.per_page == 0 {
            total
        } else {
            config.per_page
        };
        let count = total.div_ceil(size);

        let ids: Vec<String> = (1..=count)
            .map(|num| resolve_template(template_for_page(config, num), &slug, num))
            .collect();

        for (index, id) in ids.iter().enumerate() {
            let start = index * size;
            let end = ((index + 1) * size).min(total);
            let page = PageRecord {
                layout: config.layout.clone(),
                contents: String::new(),
                tag: tag.clone(),
                pagination: Pagination {
                    num: index + 1,
                    tag: tag.clone(),
                    files: sorted[start..end].to_vec(),
                    pages: ids.clone(),
                    previous: index.checked_sub(1).map(|prev| ids[prev].clone()),
                    next: ids.get(index + 1).cloned(),
                },
            };
            let Some(record) = encode_page(&page, id) else {
                continue;
            };
            if store.insert(id.clone(), record).is_some() {
                warn!("Tag page '{}' replaced an existing record", id);
            }
        }

        debug!("Generated {} page(s) for tag '{}'", count, tag);
    }
}

fn publish_tag_index(
    metadata: &mut Metadata,
    metadata_key: &str,
    tag: &str,
    slug: &str,
    sorted: &[String],
) {
    let mut summary = Map::new();
    summary.insert("urlSafe".to_string(), Value::String(slug.to_string()));
    summary.insert(
        "files".to_string(),
        Value::Array(sorted.iter().cloned().map(Value::String).collect()),
    );
    metadata.merge_into_object(metadata_key, tag.to_string(), Value::Object(summary));
}

fn encode_page(page: &PageRecord, id: &str) -> Option<ContentRecord> {
    match serde_json::to_value(page) {
        Ok(Value::Object(fields)) => Some(ContentRecord::from(fields)),
        Ok(_) => {
            error!("Tag page '{}' did not encode to an object", id);
            None
        }
        Err(err) => {
            error!("Failed to encode tag page '{}': {}", id, err);
            None
        }
    }
}
