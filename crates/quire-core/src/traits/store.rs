// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store adapter trait for remote file-shaped backends (GitHub, etc.).

use async_trait::async_trait;

use crate::error::QuireError;
use crate::traits::adapter::PluginAdapter;
use crate::types::StoreInfo;

/// Adapter for persisting publication content to a remote backend.
///
/// Every failure is reported as [`QuireError::Store`] carrying the plugin
/// name and the backend status. Implementations do not retry.
#[async_trait]
pub trait StoreAdapter: PluginAdapter {
    /// Describes the backing location (repository, bucket, ...).
    fn info(&self) -> StoreInfo;

    /// Creates a new file. Fails with a conflict if the backend already
    /// holds a file at `path`.
    async fn create_file(&self, path: &str, content: &[u8], message: &str) -> Result<(), QuireError>;

    /// Reads a file's content. Fails with not-found if absent.
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, QuireError>;

    /// Replaces a file's content.
    ///
    /// Reads the current version token first and submits it with the write,
    /// so a concurrent modification surfaces as a conflict.
    async fn update_file(&self, path: &str, content: &[u8], message: &str) -> Result<(), QuireError>;

    /// Deletes a file, reading its current version token first.
    async fn delete_file(&self, path: &str, message: &str) -> Result<(), QuireError>;
}
