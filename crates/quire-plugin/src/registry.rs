// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry holding the installed stores, syndicators and presets.
//!
//! Each kind lives in its own ordered list keyed by the plugin's `id()`.
//! Registration rejects a second plugin with the same id in the same list;
//! lookups are linear and return the first match.

use std::sync::Arc;

use serde::Serialize;

use quire_core::QuireError;
use quire_core::traits::{PluginAdapter, PresetAdapter, StoreAdapter, SyndicatorAdapter};
use quire_core::types::AdapterType;

/// Listing row describing one registered plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginSummary {
    pub id: String,
    pub name: String,
    pub version: String,
    pub adapter_type: AdapterType,
}

impl PluginSummary {
    fn of<T: PluginAdapter + ?Sized>(plugin: &T) -> Self {
        Self {
            id: plugin.id().to_string(),
            name: plugin.name().to_string(),
            version: plugin.version().to_string(),
            adapter_type: plugin.adapter_type(),
        }
    }
}

/// Registry of installed plugins, built once at process start.
#[derive(Default)]
pub struct PluginRegistry {
    stores: Vec<Arc<dyn StoreAdapter>>,
    syndicators: Vec<Arc<dyn SyndicatorAdapter>>,
    presets: Vec<Arc<dyn PresetAdapter>>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a store. Fails if a store with the same id exists.
    pub fn add_store(&mut self, store: Arc<dyn StoreAdapter>) -> Result<(), QuireError> {
        insert_unique(&mut self.stores, store, AdapterType::Store)
    }

    /// Register a syndicator. Fails if a syndicator with the same id exists.
    pub fn add_syndicator(
        &mut self,
        syndicator: Arc<dyn SyndicatorAdapter>,
    ) -> Result<(), QuireError> {
        insert_unique(&mut self.syndicators, syndicator, AdapterType::Syndicator)
    }

    /// Register a preset. Fails if a preset with the same id exists.
    pub fn add_preset(&mut self, preset: Arc<dyn PresetAdapter>) -> Result<(), QuireError> {
        insert_unique(&mut self.presets, preset, AdapterType::Preset)
    }

    pub fn stores(&self) -> &[Arc<dyn StoreAdapter>] {
        &self.stores
    }

    pub fn syndicators(&self) -> &[Arc<dyn SyndicatorAdapter>] {
        &self.syndicators
    }

    pub fn presets(&self) -> &[Arc<dyn PresetAdapter>] {
        &self.presets
    }

    /// Look up a store by id.
    pub fn store(&self, id: &str) -> Option<Arc<dyn StoreAdapter>> {
        get_store(&self.stores, id)
    }

    /// Look up a preset by id.
    pub fn preset(&self, id: &str) -> Option<Arc<dyn PresetAdapter>> {
        get_preset(&self.presets, id)
    }

    /// Look up a syndicator by id.
    pub fn syndicator(&self, id: &str) -> Option<Arc<dyn SyndicatorAdapter>> {
        get_syndicator(&self.syndicators, id)
    }

    /// All registered plugins: stores, then syndicators, then presets.
    pub fn list_all(&self) -> Vec<PluginSummary> {
        self.stores
            .iter()
            .map(|p| PluginSummary::of(p.as_ref()))
            .chain(self.syndicators.iter().map(|p| PluginSummary::of(p.as_ref())))
            .chain(self.presets.iter().map(|p| PluginSummary::of(p.as_ref())))
            .collect()
    }

    /// Total number of registered plugins.
    pub fn len(&self) -> usize {
        self.stores.len() + self.syndicators.len() + self.presets.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids = |list: Vec<&str>| list.join(", ");
        f.debug_struct("PluginRegistry")
            .field("stores", &ids(self.stores.iter().map(|p| p.id()).collect()))
            .field(
                "syndicators",
                &ids(self.syndicators.iter().map(|p| p.id()).collect()),
            )
            .field("presets", &ids(self.presets.iter().map(|p| p.id()).collect()))
            .finish()
    }
}

fn insert_unique<T: PluginAdapter + ?Sized>(
    list: &mut Vec<Arc<T>>,
    plugin: Arc<T>,
    adapter_type: AdapterType,
) -> Result<(), QuireError> {
    if list.iter().any(|p| p.id() == plugin.id()) {
        return Err(QuireError::DuplicatePlugin {
            adapter_type,
            id: plugin.id().to_string(),
        });
    }
    tracing::info!(
        adapter_type = %adapter_type,
        id = plugin.id(),
        name = plugin.name(),
        version = %plugin.version(),
        "registered plugin"
    );
    list.push(plugin);
    Ok(())
}

fn find_by_id<T: PluginAdapter + ?Sized>(list: &[Arc<T>], id: &str) -> Option<Arc<T>> {
    list.iter().find(|p| p.id() == id).cloned()
}

/// Find the first store with the given id.
pub fn get_store(stores: &[Arc<dyn StoreAdapter>], id: &str) -> Option<Arc<dyn StoreAdapter>> {
    find_by_id(stores, id)
}

/// Find the first preset with the given id.
pub fn get_preset(presets: &[Arc<dyn PresetAdapter>], id: &str) -> Option<Arc<dyn PresetAdapter>> {
    find_by_id(presets, id)
}

/// Find the first syndicator with the given id.
pub fn get_syndicator(
    syndicators: &[Arc<dyn SyndicatorAdapter>],
    id: &str,
) -> Option<Arc<dyn SyndicatorAdapter>> {
    find_by_id(syndicators, id)
}
