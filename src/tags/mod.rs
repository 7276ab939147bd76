// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod group;
pub(crate) mod indexer;
pub mod paginate;
pub(crate) mod path;
pub(crate) mod sort;

pub use group::TagGroup;
pub use paginate::{PageRecord, Pagination};
