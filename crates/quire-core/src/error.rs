// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Quire publishing backend.

use strum::Display;
use thiserror::Error;

use crate::types::AdapterType;

/// Classification of a store adapter failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreErrorKind {
    /// The file does not exist at the requested path.
    #[strum(to_string = "not found")]
    NotFound,
    /// A file already exists, or the version token is stale.
    #[strum(to_string = "conflict")]
    Conflict,
    /// Transport or authentication failure talking to the backend.
    #[strum(to_string = "backend unavailable")]
    BackendUnavailable,
}

/// Failure raised by a store adapter.
///
/// Carries the originating plugin's name and, when the backend answered,
/// its HTTP status. Transport errors are folded into
/// [`StoreErrorKind::BackendUnavailable`] with no status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{plugin}: {kind}: {message}")]
pub struct StoreError {
    /// Name of the store plugin that failed.
    pub plugin: String,
    /// What went wrong.
    pub kind: StoreErrorKind,
    /// Backend HTTP status, if a response was received.
    pub status: Option<u16>,
    /// Backend-provided (or transport) message.
    pub message: String,
}

impl StoreError {
    pub fn new(plugin: &str, kind: StoreErrorKind, status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            plugin: plugin.to_string(),
            kind,
            status,
            message: message.into(),
        }
    }
}

/// The primary error type used across all Quire adapter traits and core operations.
#[derive(Debug, Error)]
pub enum QuireError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A plugin id was registered twice within the same mapping.
    #[error("duplicate {adapter_type} plugin id `{id}`")]
    DuplicatePlugin { adapter_type: AdapterType, id: String },

    /// Requested adapter was not found in the registry.
    #[error("adapter not found: {adapter_type}/{id}")]
    AdapterNotFound { adapter_type: AdapterType, id: String },

    /// Store adapter failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The remote category list could not be fetched.
    #[error("Unable to fetch {url}: {cause}")]
    CategoriesFetch { url: String, cause: String },

    /// Token exchange rejected the authorization code.
    #[error("invalid_grant")]
    InvalidGrant,

    /// A bearer token failed verification.
    #[error("invalid bearer token")]
    InvalidToken,

    /// Post collection query failure.
    #[error("collection error: {source}")]
    Collection {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl QuireError {
    /// Returns the store failure kind, if this is a store error.
    pub fn store_kind(&self) -> Option<StoreErrorKind> {
        match self {
            QuireError::Store(err) => Some(err.kind),
            _ => None,
        }
    }

    /// True if a store reported the file as absent.
    pub fn is_not_found(&self) -> bool {
        self.store_kind() == Some(StoreErrorKind::NotFound)
    }

    /// True if a store rejected the write as conflicting.
    pub fn is_conflict(&self) -> bool {
        self.store_kind() == Some(StoreErrorKind::Conflict)
    }
}
