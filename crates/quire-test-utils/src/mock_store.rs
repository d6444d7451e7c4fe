// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory store adapter for deterministic testing.
//!
//! `MockStore` keeps files in a map and hands out a fresh version token on
//! every write, so conflict behaviour matches a real versioned backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use quire_core::traits::adapter::PluginAdapter;
use quire_core::traits::store::StoreAdapter;
use quire_core::types::{AdapterType, FileVersion, StoreInfo, StoredFile};
use quire_core::{QuireError, StoreError, StoreErrorKind};

const NAME: &str = "Mock store";

/// A store that keeps every file in memory.
pub struct MockStore {
    id: String,
    files: Mutex<HashMap<String, StoredFile>>,
    next_version: AtomicU64,
}

impl MockStore {
    /// Create an empty store registered under `id`.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            files: Mutex::new(HashMap::new()),
            next_version: AtomicU64::new(1),
        }
    }

    /// Snapshot of a stored file, including its current version token.
    pub async fn file(&self, path: &str) -> Option<StoredFile> {
        self.files.lock().await.get(path).cloned()
    }

    /// Number of files currently held.
    pub async fn len(&self) -> usize {
        self.files.lock().await.len()
    }

    /// Returns true if no files are held.
    pub async fn is_empty(&self) -> bool {
        self.files.lock().await.is_empty()
    }

    /// Current version token of `path`.
    pub async fn current_version(&self, path: &str) -> Result<FileVersion, QuireError> {
        self.files
            .lock()
            .await
            .get(path)
            .and_then(|f| f.version.clone())
            .ok_or_else(|| not_found(path))
    }

    /// Conditional write: succeeds only if `expected` matches the stored
    /// version (or, for `None`, if nothing is stored yet).
    pub async fn put_versioned(
        &self,
        path: &str,
        content: &[u8],
        message: &str,
        expected: Option<&FileVersion>,
    ) -> Result<FileVersion, QuireError> {
        let mut files = self.files.lock().await;
        let current = files.get(path).and_then(|f| f.version.as_ref());
        if current != expected {
            return Err(StoreError::new(
                NAME,
                StoreErrorKind::Conflict,
                Some(409),
                format!("{path} does not match {}", describe(expected)),
            )
            .into());
        }

        let version = FileVersion(format!(
            "v{}",
            self.next_version.fetch_add(1, Ordering::Relaxed)
        ));
        files.insert(
            path.to_string(),
            StoredFile {
                path: path.to_string(),
                content: content.to_vec(),
                message: message.to_string(),
                version: Some(version.clone()),
            },
        );
        tracing::trace!(path, version = version.as_str(), "mock store write");
        Ok(version)
    }
}

fn describe(version: Option<&FileVersion>) -> String {
    version.map_or_else(|| "no existing file".to_string(), |v| v.as_str().to_string())
}

fn not_found(path: &str) -> QuireError {
    StoreError::new(NAME, StoreErrorKind::NotFound, Some(404), format!("{path} not found")).into()
}

#[async_trait]
impl PluginAdapter for MockStore {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        NAME
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Store
    }
}

#[async_trait]
impl StoreAdapter for MockStore {
    fn info(&self) -> StoreInfo {
        StoreInfo {
            name: format!("{} ({})", NAME, self.id),
            uid: format!("memory://{}", self.id),
        }
    }

    async fn create_file(&self, path: &str, content: &[u8], message: &str) -> Result<(), QuireError> {
        self.put_versioned(path, content, message, None).await?;
        Ok(())
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>, QuireError> {
        self.files
            .lock()
            .await
            .get(path)
            .map(|f| f.content.clone())
            .ok_or_else(|| not_found(path))
    }

    async fn update_file(&self, path: &str, content: &[u8], message: &str) -> Result<(), QuireError> {
        let version = self.current_version(path).await?;
        self.put_versioned(path, content, message, Some(&version)).await?;
        Ok(())
    }

    async fn delete_file(&self, path: &str, message: &str) -> Result<(), QuireError> {
        let version = self.current_version(path).await?;
        let mut files = self.files.lock().await;
        match files.get(path) {
            Some(file) if file.version.as_ref() == Some(&version) => {
                files.remove(path);
                tracing::trace!(path, message, "mock store delete");
                Ok(())
            }
            Some(_) => Err(StoreError::new(
                NAME,
                StoreErrorKind::Conflict,
                Some(409),
                format!("{path} does not match {}", version.as_str()),
            )
            .into()),
            None => Err(not_found(path)),
        }
    }
}
