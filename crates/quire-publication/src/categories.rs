// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Category list resolution with a shared fetch cache.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use quire_config::CategoriesSetting;
use quire_config::validation::MAX_CATEGORIES_CACHE_TTL_SECS;
use quire_core::QuireError;
use tracing::{debug, warn};

/// Upper bound on distinct category URLs held at once.
const MAX_CACHED_SOURCES: u64 = 64;

/// Cache of remote category lists keyed by source URL.
///
/// Shared across requests. Concurrent misses on the same URL may each fetch;
/// the last insert wins and the cache stays consistent.
#[derive(Clone)]
pub struct CategoryCache {
    entries: Cache<String, Arc<Vec<String>>>,
    client: reqwest::Client,
}

impl CategoryCache {
    /// Creates a cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Result<Self, QuireError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| QuireError::Internal(format!("failed to build HTTP client: {e}")))?;
        Self::with_client(client, ttl)
    }

    /// Rejects a `ttl` above the configured maximum instead of letting the
    /// cache builder panic on it.
    pub fn with_client(client: reqwest::Client, ttl: Duration) -> Result<Self, QuireError> {
        if ttl > Duration::from_secs(MAX_CATEGORIES_CACHE_TTL_SECS) {
            return Err(QuireError::Config(format!(
                "categories cache ttl of {}s exceeds {MAX_CATEGORIES_CACHE_TTL_SECS}s",
                ttl.as_secs()
            )));
        }
        let entries = Cache::builder()
            .max_capacity(MAX_CACHED_SOURCES)
            .time_to_live(ttl)
            .build();
        Ok(Self { entries, client })
    }

    async fn fetch(&self, url: &str) -> Result<Arc<Vec<String>>, QuireError> {
        if let Some(hit) = self.entries.get(url).await {
            debug!(url, "categories cache hit");
            return Ok(hit);
        }

        let categories = Arc::new(self.fetch_remote(url).await.map_err(|cause| {
            warn!(url, cause = %cause, "category fetch failed");
            QuireError::CategoriesFetch {
                url: url.to_string(),
                cause,
            }
        })?);
        debug!(url, count = categories.len(), "categories fetched");
        self.entries.insert(url.to_string(), categories.clone()).await;
        Ok(categories)
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<String>, String> {
        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(status
                .canonical_reason()
                .map_or_else(|| status.to_string(), str::to_string));
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| e.to_string())
    }
}

impl std::fmt::Debug for CategoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

/// Resolves a category source to its list of categories.
///
/// A literal list is returned unchanged; a `{ url }` source is fetched
/// through `cache`. No source yields an empty list. Fetch failures are
/// reported as [`QuireError::CategoriesFetch`] and never retried here.
pub async fn get_categories(
    cache: &CategoryCache,
    source: Option<&CategoriesSetting>,
) -> Result<Vec<String>, QuireError> {
    match source {
        None => Ok(Vec::new()),
        Some(CategoriesSetting::List(categories)) => Ok(categories.clone()),
        Some(CategoriesSetting::Remote { url }) => {
            let categories = cache.fetch(url).await?;
            Ok(categories.as_ref().clone())
        }
    }
}
