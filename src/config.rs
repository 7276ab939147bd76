// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::slug::{CustomSlug, SlugOptions, Slugifier};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// One tag-pagination configuration entry. Entries run in order, each with
/// its own private tag index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Identifier template for the first page of a tag.
    #[serde(default = "default_path")]
    pub path: String,
    /// Identifier template for pages after the first; empty or absent means
    /// every page uses `path`.
    #[serde(default = "default_path_page")]
    pub path_page: Option<String>,
    /// Opaque layout value copied onto each generated page record.
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Record field read and rewritten as tag data.
    #[serde(default = "default_handle")]
    pub handle: String,
    /// Metadata key the aggregate tag index is published under.
    #[serde(default = "default_metadata_key")]
    pub metadata_key: String,
    /// Record field compared when sorting a tag's records.
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default)]
    pub reverse: bool,
    /// Records per page; 0 puts every record on a single page.
    #[serde(default)]
    pub per_page: usize,
    #[serde(default)]
    pub skip_metadata: bool,
    #[serde(default)]
    pub slug: SlugOptions,
    /// Programmatic replacement for the builtin slugifier; not loadable
    /// from configuration files.
    #[serde(skip)]
    pub slug_fn: Option<CustomSlug>,
}

fn default_path() -> String {
    "tags/:tag/index.html".to_string()
}

fn default_path_page() -> Option<String> {
    Some("tags/:tag/:num/index.html".to_string())
}

fn default_layout() -> String {
    "partials/tag.hbt".to_string()
}

fn default_handle() -> String {
    "tags".to_string()
}

fn default_metadata_key() -> String {
    "tags".to_string()
}

fn default_sort_by() -> String {
    "title".to_string()
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            path_page: default_path_page(),
            layout: default_layout(),
            handle: default_handle(),
            metadata_key: default_metadata_key(),
            sort_by: default_sort_by(),
            reverse: false,
            per_page: 0,
            skip_metadata: false,
            slug: SlugOptions::default(),
            slug_fn: None,
        }
    }
}

impl EntryConfig {
    /// Load a YAML sequence of entries and validate each one.
    pub fn load_entries(path: &Path) -> Result<Vec<EntryConfig>, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read entries file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let entries: Vec<EntryConfig> = serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to parse entries file '{}': {}",
                path.display(),
                e
            ))
        })?;
        for entry in &entries {
            entry.validate()?;
        }
        Ok(entries)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "path cannot be empty".to_string(),
            ));
        }
        if self.handle.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "handle cannot be empty".to_string(),
            ));
        }
        if self.metadata_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "metadata_key cannot be empty".to_string(),
            ));
        }
        if self.sort_by.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "sort_by cannot be empty".to_string(),
            ));
        }

        if !self.path.contains(":tag") {
            warn!(
                "Tag page path '{}' has no :tag token; every tag resolves to the same identifier",
                self.path
            );
        }
        if self.per_page > 0 && !self.later_page_template().contains(":num") {
            warn!(
                "Page template '{}' has no :num token; pages after the first overwrite each other",
                self.later_page_template()
            );
        }

        Ok(())
    }

    /// Template used for pages after the first. Falls back to `path` when
    /// no subsequent-page template is configured.
    pub fn later_page_template(&self) -> &str {
        match self.path_page.as_deref() {
            Some(template) if !template.is_empty() => template,
            _ => &self.path,
        }
    }

    pub fn slugifier(&self) -> Slugifier {
        match &self.slug_fn {
            Some(custom) => Slugifier::Custom(custom.clone()),
            None => Slugifier::Builtin(self.slug.clone()),
        }
    }
}
