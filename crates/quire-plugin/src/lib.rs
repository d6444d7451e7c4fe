// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry for compiled-in Quire plugins.
//!
//! Stores, syndicators and presets are registered once at startup into a
//! [`PluginRegistry`], which is then shared read-only with request handlers.

pub mod registry;

pub use registry::{PluginRegistry, PluginSummary, get_preset, get_store, get_syndicator};
