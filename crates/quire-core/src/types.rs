// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Quire publishing backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies which registry mapping a plugin belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AdapterType {
    Store,
    Syndicator,
    Preset,
}

// --- Publication configuration ---

/// Path and URL templates for a post or its attached media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPaths {
    /// Backend-relative file path template.
    pub path: String,
    /// Public URL template.
    pub url: String,
}

/// A post type definition (`note`, `article`, `photo`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostType {
    /// Identifier, unique within a configuration.
    #[serde(rename = "type")]
    pub post_type: String,
    /// Human-readable label.
    pub name: String,
    /// Rendering template reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Where posts of this type are stored and published.
    pub post: PostPaths,
    /// Where media attached to posts of this type is stored and published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<PostPaths>,
}

/// A publication configuration: post types plus free-form settings.
///
/// Used both for preset defaults, custom overrides, and the merged
/// effective configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationConfig {
    /// Ordered post type definitions.
    #[serde(rename = "post-types", default, skip_serializing_if = "Vec::is_empty")]
    pub post_types: Vec<PostType>,
    /// Every other setting, keyed by setting name.
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl PublicationConfig {
    /// Look up a post type by its `type` key.
    pub fn post_type(&self, post_type: &str) -> Option<&PostType> {
        self.post_types.iter().find(|p| p.post_type == post_type)
    }

    /// Look up a string setting.
    pub fn setting_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(Value::as_str)
    }
}

// --- Plugin info ---

/// Descriptive info reported by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub uid: String,
}

/// Descriptive info reported by a syndicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyndicatorInfo {
    pub uid: String,
    pub name: String,
    /// Whether clients should pre-select this target.
    #[serde(default)]
    pub checked: bool,
}

// --- Store files ---

/// Opaque backend version token (e.g. a content hash) for optimistic concurrency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileVersion(pub String);

impl FileVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A file as held by a store backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Backend-relative location.
    pub path: String,
    /// Opaque content bytes.
    pub content: Vec<u8>,
    /// Change description of the last write.
    pub message: String,
    /// Current version token, if the backend tracks one.
    pub version: Option<FileVersion>,
}

// --- Time-ordered posts ---

/// A post document in the time-ordered collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Stable identifier (usually the post URL).
    pub uid: String,
    /// Publication timestamp the collection is ordered by.
    pub published: DateTime<Utc>,
    /// Remaining post properties.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Filter on the published timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedRange {
    /// No constraint.
    Any,
    /// Strictly greater than the given instant.
    NewerThan(DateTime<Utc>),
    /// Strictly less than the given instant.
    OlderThan(DateTime<Utc>),
}

impl PublishedRange {
    pub fn contains(&self, published: DateTime<Utc>) -> bool {
        match self {
            PublishedRange::Any => true,
            PublishedRange::NewerThan(t) => published > *t,
            PublishedRange::OlderThan(t) => published < *t,
        }
    }
}

/// Sort direction on the published timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}
