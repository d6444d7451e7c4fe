// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that all plugins must implement.

use async_trait::async_trait;

use crate::error::QuireError;
use crate::types::{AdapterType, HealthStatus};

/// The base trait for all Quire plugins.
///
/// Every plugin (store, syndicator, preset) implements this trait, which
/// provides identity, lifecycle, and health check capabilities.
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Registry key of this plugin (e.g. `github`, `jekyll`).
    fn id(&self) -> &str;

    /// Returns the human-readable name of this plugin instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this plugin.
    fn version(&self) -> semver::Version;

    /// Returns which registry mapping this plugin belongs to.
    fn adapter_type(&self) -> AdapterType;

    /// Performs a health check and returns the plugin's current status.
    async fn health_check(&self) -> Result<HealthStatus, QuireError> {
        Ok(HealthStatus::Healthy)
    }

    /// Gracefully shuts down the plugin, releasing any held resources.
    async fn shutdown(&self) -> Result<(), QuireError> {
        Ok(())
    }
}
