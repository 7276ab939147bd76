// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    Rfc3986,
    Pretty,
}

/// Options for the builtin slugifier. `lowercase` defaults per mode:
/// rfc3986 lowercases, pretty preserves case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugOptions {
    #[serde(default = "default_slug_mode")]
    pub mode: SlugMode,
    #[serde(default)]
    pub lowercase: Option<bool>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            mode: default_slug_mode(),
            lowercase: None,
        }
    }
}

fn default_slug_mode() -> SlugMode {
    SlugMode::Rfc3986
}

type SlugFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A caller-supplied replacement for the builtin slugifier. Must be a pure
/// function of its input; the engine calls it once per distinct display tag
/// occurrence and relies on identical output for identical input.
#[derive(Clone)]
pub struct CustomSlug(SlugFn);

impl CustomSlug {
    pub fn new(normalize: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(normalize))
    }
}

impl fmt::Debug for CustomSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomSlug")
    }
}

/// The normalization capability handed to the indexer and the pagination
/// builder: display string in, URL-safe token out.
#[derive(Debug, Clone)]
pub enum Slugifier {
    Builtin(SlugOptions),
    Custom(CustomSlug),
}

impl Slugifier {
    pub fn normalize(&self, raw: &str) -> String {
        match self {
            Slugifier::Builtin(options) => builtin_slug(raw, options),
            Slugifier::Custom(custom) => (custom.0)(raw),
        }
    }
}

fn is_unreserved_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '~')
}

/// Builtin normalization: whitespace runs become a single separator, only
/// URL-unreserved characters survive, repeated separators collapse, and the
/// result never starts or ends with a separator.
pub fn builtin_slug(raw: &str, options: &SlugOptions) -> String {
    let lowercase = options
        .lowercase
        .unwrap_or(options.mode == SlugMode::Rfc3986);

    let mut slug = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_separator = !slug.is_empty();
            continue;
        }
        if !is_unreserved_char(ch) {
            continue;
        }
        if pending_separator {
            slug.push('-');
            pending_separator = false;
        }
        if lowercase {
            slug.extend(ch.to_lowercase());
        } else {
            slug.push(ch);
        }
    }
    slug
}
