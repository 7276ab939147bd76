// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::EntryConfig;

/// Resolve a page identifier from a template. `:num` is replaced with the
/// 1-based page number and `:tag` with the normalized slug; both are
/// replaced at every occurrence. `:num` goes first so a slug containing
/// the literal token is never re-substituted.
pub(crate) fn resolve_template(template: &str, slug: &str, num: usize) -> String {
    template
        .replace(":num", &num.to_string())
        .replace(":tag", slug)
}

/// Pick the template for a page: the first page always uses `path`;
/// later pages use the subsequent-page template when one is configured.
pub(crate) fn template_for_page(config: &EntryConfig, num: usize) -> &str {
    if num <= 1 {
        &config.path
    } else {
        config.later_page_template()
    }
}
