// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Quire publishing backend.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup. The free-form `publication.config` table is the
//! one exception: it carries custom publication overrides and is handed to
//! the publication resolver untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level Quire configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuireConfig {
    /// HTTP listener and logging settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// The publication being served.
    #[serde(default)]
    pub publication: PublicationSettings,

    /// Which compiled-in plugins to register.
    #[serde(default)]
    pub plugins: PluginsConfig,

    /// GitHub store settings.
    #[serde(default)]
    pub github: GithubConfig,

    /// Authorization code and access token settings.
    #[serde(default)]
    pub token: TokenConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Where the category list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CategoriesSetting {
    /// A literal list of categories.
    List(Vec<String>),
    /// A remote JSON array of strings.
    Remote { url: String },
}

/// Publication identity and custom overrides.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PublicationSettings {
    /// Canonical URL of the publication.
    #[serde(default)]
    pub me: String,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Id of the preset supplying default post types.
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Id of the store content is persisted to.
    #[serde(default = "default_store")]
    pub store: String,

    /// Explicit media endpoint. When unset it is derived per request.
    #[serde(default)]
    pub media_endpoint: Option<String>,

    /// Path of the media endpoint relative to the serving host.
    #[serde(default = "default_media_path")]
    pub media_path: String,

    #[serde(default)]
    pub categories: Option<CategoriesSetting>,

    /// How long fetched remote category lists are cached.
    #[serde(default = "default_categories_cache_ttl_secs")]
    pub categories_cache_ttl_secs: u64,

    /// Custom overrides merged over the preset defaults (`post-types`, ...).
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl Default for PublicationSettings {
    fn default() -> Self {
        Self {
            me: String::new(),
            timezone: default_timezone(),
            preset: default_preset(),
            store: default_store(),
            media_endpoint: None,
            media_path: default_media_path(),
            categories: None,
            categories_cache_ttl_secs: default_categories_cache_ttl_secs(),
            config: Map::new(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_preset() -> String {
    "jekyll".to_string()
}

fn default_store() -> String {
    "github".to_string()
}

fn default_media_path() -> String {
    "/media".to_string()
}

fn default_categories_cache_ttl_secs() -> u64 {
    600
}

/// Plugin selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginsConfig {
    /// Ids of compiled-in plugins to register, in order.
    #[serde(default = "default_enabled_plugins")]
    pub enabled: Vec<String>,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_plugins(),
        }
    }
}

fn default_enabled_plugins() -> Vec<String> {
    vec!["jekyll".to_string(), "github".to_string()]
}

impl PluginsConfig {
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.iter().any(|p| p == id)
    }
}

/// GitHub store configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GithubConfig {
    #[serde(default = "default_github_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub repo: String,

    #[serde(default = "default_github_branch")]
    pub branch: String,

    /// Personal access token. `None` falls back to `GITHUB_TOKEN`.
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: default_github_base_url(),
            user: String::new(),
            repo: String::new(),
            branch: default_github_branch(),
            token: None,
        }
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("repo", &self.repo)
            .field("branch", &self.branch)
            .field("token", &self.token.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

fn default_github_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_github_branch() -> String {
    "main".to_string()
}

/// Authorization code and bearer token lifetimes and signing key.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    #[serde(default = "default_code_lifetime_secs")]
    pub code_lifetime_secs: u64,

    #[serde(default = "default_token_lifetime_secs")]
    pub token_lifetime_secs: u64,

    /// Hex-encoded 32-byte Ed25519 seed. Generated at startup when unset.
    #[serde(default)]
    pub signing_key: Option<String>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            code_lifetime_secs: default_code_lifetime_secs(),
            token_lifetime_secs: default_token_lifetime_secs(),
            signing_key: None,
        }
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("code_lifetime_secs", &self.code_lifetime_secs)
            .field("token_lifetime_secs", &self.token_lifetime_secs)
            .field("signing_key", &self.signing_key.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

fn default_code_lifetime_secs() -> u64 {
    600
}

fn default_token_lifetime_secs() -> u64 {
    90 * 24 * 60 * 60
}
