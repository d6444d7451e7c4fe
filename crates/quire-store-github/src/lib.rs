// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GitHub store adapter for the Quire publishing backend.
//!
//! Persists publication files to a repository branch through the REST
//! contents API. Updates and deletes read the current blob sha first and
//! send it back with the write, so GitHub rejects a concurrent modification
//! with 409 instead of silently overwriting it.

pub mod client;
pub mod types;

use async_trait::async_trait;
use quire_config::GithubConfig;
use quire_core::error::QuireError;
use quire_core::traits::{PluginAdapter, StoreAdapter};
use quire_core::types::{AdapterType, FileVersion, HealthStatus, StoreInfo};
use tracing::{debug, info};

use crate::client::{GithubClient, PLUGIN_NAME, decode_content};

/// Store adapter backed by a GitHub repository.
///
/// Token resolution order: `github.token` in config, then the
/// `GITHUB_TOKEN` environment variable.
#[derive(Debug, Clone)]
pub struct GithubStore {
    client: GithubClient,
}

impl GithubStore {
    /// Registry key of this store.
    pub const ID: &'static str = "github";

    pub fn new(config: &GithubConfig) -> Result<Self, QuireError> {
        let token = resolve_token(&config.token)?;
        let client = GithubClient::new(
            &config.base_url,
            &config.user,
            &config.repo,
            &config.branch,
            &token,
        )?;

        info!(
            user = config.user,
            repo = config.repo,
            branch = config.branch,
            "GitHub store initialized"
        );

        Ok(Self { client })
    }

    /// Reads the current blob sha of `path`.
    pub async fn current_version(&self, path: &str) -> Result<FileVersion, QuireError> {
        let contents = self.client.get_contents(path).await?;
        Ok(FileVersion(contents.sha))
    }
}

/// Resolves the GitHub token: config value, then `GITHUB_TOKEN`.
fn resolve_token(config_token: &Option<String>) -> Result<String, QuireError> {
    if let Some(token) = config_token
        && !token.is_empty()
    {
        return Ok(token.clone());
    }

    std::env::var("GITHUB_TOKEN").map_err(|_| {
        QuireError::Config(
            "GitHub token not found. Set github.token in config or GITHUB_TOKEN environment variable.".into(),
        )
    })
}

#[async_trait]
impl PluginAdapter for GithubStore {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Store
    }

    async fn health_check(&self) -> Result<HealthStatus, QuireError> {
        match self.client.check_repository().await {
            Ok(()) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(e.to_string())),
        }
    }
}

#[async_trait]
impl StoreAdapter for GithubStore {
    fn info(&self) -> StoreInfo {
        StoreInfo {
            name: format!("{}/{} on GitHub", self.client.user(), self.client.repo()),
            uid: format!(
                "https://github.com/{}/{}",
                self.client.user(),
                self.client.repo()
            ),
        }
    }

    async fn create_file(&self, path: &str, content: &[u8], message: &str) -> Result<(), QuireError> {
        debug!(path, bytes = content.len(), "creating file");
        self.client.put_contents(path, content, message, None).await
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>, QuireError> {
        let contents = self.client.get_contents(path).await?;
        if contents.encoding.as_deref() == Some("none") {
            // Files over 1 MB are not inlined in metadata mode.
            debug!(path, "content not inlined, fetching raw");
            return self.client.get_raw(path).await;
        }
        decode_content(&contents.content)
    }

    async fn update_file(&self, path: &str, content: &[u8], message: &str) -> Result<(), QuireError> {
        let sha = self.current_version(path).await?;
        debug!(path, sha = sha.as_str(), bytes = content.len(), "updating file");
        self.client
            .put_contents(path, content, message, Some(&sha))
            .await
    }

    async fn delete_file(&self, path: &str, message: &str) -> Result<(), QuireError> {
        let sha = self.current_version(path).await?;
        debug!(path, sha = sha.as_str(), "deleting file");
        self.client.delete_contents(path, message, &sha).await
    }
}
