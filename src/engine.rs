// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{ConfigError, EntryConfig};
use crate::store::{Metadata, RecordStore};
use crate::tags::group::TagGroup;
use crate::tags::{indexer, paginate};
use log::debug;
use std::path::Path;

/// The tag pagination engine: a validated list of configuration entries,
/// applied in order to a caller-owned record store. Each entry gets a fresh
/// tag index, so repeated runs against a long-lived store never accumulate
/// stale tag membership.
#[derive(Debug, Clone)]
pub struct TagPages {
    entries: Vec<EntryConfig>,
}

impl TagPages {
    /// Validate the entries up front; a run itself cannot fail.
    pub fn new(entries: Vec<EntryConfig>) -> Result<Self, ConfigError> {
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self { entries })
    }

    pub fn with_entry(entry: EntryConfig) -> Result<Self, ConfigError> {
        Self::new(vec![entry])
    }

    /// Build an engine from a YAML entries file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            entries: EntryConfig::load_entries(path)?,
        })
    }

    pub fn entries(&self) -> &[EntryConfig] {
        &self.entries
    }

    /// Run every entry in order: index tags, then build pages. Synchronous
    /// and side-effect-only; returning is the single completion signal.
    pub fn run(&self, store: &mut RecordStore, metadata: &mut Metadata) {
        for (position, entry) in self.entries.iter().enumerate() {
            debug!(
                "Running tag pagination entry {} of {} (field '{}')",
                position + 1,
                self.entries.len(),
                entry.handle
            );
            let mut group = TagGroup::new();
            indexer::index_records(store, entry, &mut group);
            paginate::build_pages(store, metadata, entry, &group);
        }
    }
}
