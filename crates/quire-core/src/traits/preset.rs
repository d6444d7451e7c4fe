// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preset trait: a named bundle of default publication settings.

use crate::traits::adapter::PluginAdapter;
use crate::types::PublicationConfig;

/// Supplies default post types and path templates for a publication.
pub trait PresetAdapter: PluginAdapter {
    /// The preset's default configuration, before custom overrides.
    fn config(&self) -> PublicationConfig;
}
