// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use nop_tagpages::{
    ContentRecord, CustomSlug, EntryConfig, Metadata, PageRecord, RecordStore, TagPages,
};
use serde_json::{Value, json};

fn store_with(records: Vec<(&str, Value)>) -> RecordStore {
    let mut store = RecordStore::new();
    for (id, value) in records {
        let fields = value.as_object().expect("record object").clone();
        store.insert(id, ContentRecord::from(fields));
    }
    store
}

fn page_at(store: &RecordStore, id: &str) -> PageRecord {
    let record = store.get(id).expect("page record present");
    PageRecord::from_record(record).expect("page record decodes")
}

#[test]
fn unpaginated_tags_sort_by_title() {
    let mut store = store_with(vec![
        ("a", json!({"title": "B", "tags": "x, y"})),
        ("b", json!({"title": "A", "tags": "x"})),
    ]);
    let mut metadata = Metadata::new();
    let engine = TagPages::with_entry(EntryConfig::default()).expect("engine");

    engine.run(&mut store, &mut metadata);

    let x = page_at(&store, "tags/x/index.html");
    assert_eq!(x.pagination.files, vec!["b", "a"]);
    let y = page_at(&store, "tags/y/index.html");
    assert_eq!(y.pagination.files, vec!["a"]);
}

#[test]
fn five_records_paginate_into_three_linked_pages() {
    let mut store = store_with(vec![
        ("p1", json!({"title": "1", "tags": "news"})),
        ("p2", json!({"title": "2", "tags": "news"})),
        ("p3", json!({"title": "3", "tags": "news"})),
        ("p4", json!({"title": "4", "tags": "news"})),
        ("p5", json!({"title": "5", "tags": "news"})),
    ]);
    let mut metadata = Metadata::new();
    let mut entry = EntryConfig::default();
    entry.per_page = 2;
    let engine = TagPages::with_entry(entry).expect("engine");

    engine.run(&mut store, &mut metadata);

    let first = page_at(&store, "tags/news/index.html");
    let second = page_at(&store, "tags/news/2/index.html");
    let third = page_at(&store, "tags/news/3/index.html");

    assert_eq!(second.pagination.files.len(), 2);
    assert_eq!(third.pagination.files.len(), 1);
    assert_eq!(first.pagination.next.as_deref(), Some("tags/news/2/index.html"));
    assert_eq!(third.pagination.previous.as_deref(), Some("tags/news/2/index.html"));
    assert!(third.pagination.next.is_none());
    assert!(first.pagination.previous.is_none());
}

#[test]
fn rewritten_fields_pair_names_with_slugs() {
    let mut store = store_with(vec![("a", json!({"tags": "  Food  , Big News"}))]);
    let mut metadata = Metadata::new();
    let engine = TagPages::with_entry(EntryConfig::default()).expect("engine");

    engine.run(&mut store, &mut metadata);

    assert_eq!(
        store.get("a").and_then(|r| r.field("tags")),
        Some(&json!([
            {"name": "Food", "slug": "food"},
            {"name": "Big News", "slug": "big-news"}
        ]))
    );
}

#[test]
fn distinct_raw_casings_stay_distinct_tags() {
    let mut store = store_with(vec![
        ("a", json!({"title": "A", "tags": "Food"})),
        ("b", json!({"title": "B", "tags": "food"})),
    ]);
    let mut metadata = Metadata::new();
    let engine = TagPages::with_entry(EntryConfig::default()).expect("engine");

    engine.run(&mut store, &mut metadata);

    let tags = metadata
        .get("tags")
        .and_then(Value::as_object)
        .expect("tags object");
    assert!(tags.contains_key("Food"));
    assert!(tags.contains_key("food"));
    assert_eq!(tags["Food"]["urlSafe"], json!("food"));
    assert_eq!(tags["food"]["urlSafe"], json!("food"));

    // colliding slugs route both tags to one identifier; the later wins
    let page = page_at(&store, "tags/food/index.html");
    assert_eq!(page.tag, "food");
}

#[test]
fn metadata_from_earlier_entries_survives_later_ones() {
    let mut store = store_with(vec![
        ("a", json!({"title": "A", "tags": "news", "keywords": "rust"})),
    ]);
    let mut metadata = Metadata::new();

    let mut second = EntryConfig::default();
    second.handle = "keywords".to_string();
    second.path = "keywords/:tag/index.html".to_string();
    let engine = TagPages::new(vec![EntryConfig::default(), second]).expect("engine");

    engine.run(&mut store, &mut metadata);

    // both entries publish under the same key; the object grows, it is not
    // replaced
    let tags = metadata
        .get("tags")
        .and_then(Value::as_object)
        .expect("tags object");
    assert!(tags.contains_key("news"));
    assert!(tags.contains_key("rust"));
}

#[test]
fn custom_slug_function_controls_identifiers() {
    let mut store = store_with(vec![("a", json!({"title": "A", "tags": "Big News"}))]);
    let mut metadata = Metadata::new();
    let mut entry = EntryConfig::default();
    entry.slug_fn = Some(CustomSlug::new(|raw| raw.to_ascii_uppercase()));
    let engine = TagPages::with_entry(entry).expect("engine");

    engine.run(&mut store, &mut metadata);

    assert!(store.contains("tags/BIG NEWS/index.html"));
}

#[test]
fn empty_string_tag_is_paginated_under_the_empty_slug() {
    let mut store = store_with(vec![("a", json!({"title": "A", "tags": " , news"}))]);
    let mut metadata = Metadata::new();
    let engine = TagPages::with_entry(EntryConfig::default()).expect("engine");

    engine.run(&mut store, &mut metadata);

    let page = page_at(&store, "tags//index.html");
    assert_eq!(page.tag, "");
    assert_eq!(page.pagination.files, vec!["a"]);
    assert!(store.contains("tags/news/index.html"));
}

#[test]
fn fresh_runs_reproduce_identical_output() {
    let records = vec![
        ("a", json!({"title": "B", "tags": "x, y"})),
        ("b", json!({"title": "A", "tags": ["x", "z"]})),
        ("c", json!({"date": "2026-01-01", "tags": "x"})),
    ];
    let mut entry = EntryConfig::default();
    entry.per_page = 2;
    let engine = TagPages::with_entry(entry).expect("engine");

    let mut first_store = store_with(records.clone());
    let mut first_metadata = Metadata::new();
    engine.run(&mut first_store, &mut first_metadata);

    let mut second_store = store_with(records);
    let mut second_metadata = Metadata::new();
    engine.run(&mut second_store, &mut second_metadata);

    assert_eq!(first_store, second_store);
    assert_eq!(first_metadata, second_metadata);
}
