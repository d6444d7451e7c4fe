// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resolved view of a publication: identity, effective configuration
//! and the store and preset plugins it is bound to.

use std::sync::Arc;

use quire_config::{CategoriesSetting, PublicationSettings};
use quire_core::QuireError;
use quire_core::traits::{PluginAdapter, PresetAdapter, StoreAdapter};
use quire_core::types::{AdapterType, PublicationConfig};
use quire_plugin::PluginRegistry;
use serde_json::Value;
use tracing::info;

use crate::media::MEDIA_ENDPOINT_KEY;
use crate::merge::get_config;

/// A publication resolved against the plugin registry.
///
/// Built once at startup and shared read-only with request handlers.
pub struct Publication {
    /// Canonical URL.
    pub me: String,
    pub timezone: String,
    /// Preset defaults with custom overrides applied.
    pub config: PublicationConfig,
    /// Media endpoint path used when no endpoint is configured.
    pub media_path: String,
    pub categories: Option<CategoriesSetting>,
    pub store: Arc<dyn StoreAdapter>,
    pub preset: Arc<dyn PresetAdapter>,
}

impl Publication {
    /// Looks up the configured preset and store and merges configuration.
    ///
    /// A preset or store id with no registered plugin is an
    /// [`QuireError::AdapterNotFound`]; callers treat it as fatal.
    pub fn resolve(
        registry: &PluginRegistry,
        settings: &PublicationSettings,
    ) -> Result<Self, QuireError> {
        let preset = registry
            .preset(&settings.preset)
            .ok_or_else(|| QuireError::AdapterNotFound {
                adapter_type: AdapterType::Preset,
                id: settings.preset.clone(),
            })?;
        let store = registry
            .store(&settings.store)
            .ok_or_else(|| QuireError::AdapterNotFound {
                adapter_type: AdapterType::Store,
                id: settings.store.clone(),
            })?;

        let mut custom: PublicationConfig =
            serde_json::from_value(Value::Object(settings.config.clone()))
                .map_err(|e| QuireError::Config(format!("invalid publication.config: {e}")))?;
        if let Some(endpoint) = &settings.media_endpoint {
            custom
                .settings
                .insert(MEDIA_ENDPOINT_KEY.to_string(), Value::from(endpoint.as_str()));
        }

        let config = get_config(&custom, &preset.config());

        info!(
            me = settings.me,
            preset = preset.id(),
            store = store.id(),
            post_types = config.post_types.len(),
            "publication resolved"
        );

        Ok(Self {
            me: settings.me.clone(),
            timezone: settings.timezone.clone(),
            config,
            media_path: settings.media_path.clone(),
            categories: settings.categories.clone(),
            store,
            preset,
        })
    }
}

impl std::fmt::Debug for Publication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publication")
            .field("me", &self.me)
            .field("timezone", &self.timezone)
            .field("config", &self.config)
            .field("media_path", &self.media_path)
            .field("categories", &self.categories)
            .field("store", &self.store.id())
            .field("preset", &self.preset.id())
            .finish()
    }
}
