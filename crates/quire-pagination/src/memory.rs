// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory post collection.

use async_trait::async_trait;
use quire_core::QuireError;
use quire_core::traits::PostCollection;
use quire_core::types::{PostRecord, PublishedRange, SortOrder};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum MemoryCollectionError {
    #[error("post `{0}` already exists")]
    DuplicateUid(String),
}

/// A [`PostCollection`] held in process memory.
#[derive(Debug, Default)]
pub struct MemoryPostCollection {
    posts: RwLock<Vec<PostRecord>>,
}

impl MemoryPostCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection pre-loaded with `posts`.
    pub fn with_posts(posts: Vec<PostRecord>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

#[async_trait]
impl PostCollection for MemoryPostCollection {
    async fn find(
        &self,
        range: PublishedRange,
        order: SortOrder,
        limit: usize,
    ) -> Result<Vec<PostRecord>, QuireError> {
        let posts = self.posts.read().await;
        let mut matching: Vec<PostRecord> = posts
            .iter()
            .filter(|p| range.contains(p.published))
            .cloned()
            .collect();
        match order {
            SortOrder::Ascending => matching.sort_by_key(|p| p.published),
            SortOrder::Descending => matching.sort_by(|a, b| b.published.cmp(&a.published)),
        }
        matching.truncate(limit);
        Ok(matching)
    }

    async fn find_one(&self, range: PublishedRange) -> Result<Option<PostRecord>, QuireError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| range.contains(p.published)).cloned())
    }

    async fn insert(&self, post: PostRecord) -> Result<(), QuireError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.uid == post.uid) {
            return Err(QuireError::Collection {
                source: Box::new(MemoryCollectionError::DuplicateUid(post.uid)),
            });
        }
        posts.push(post);
        Ok(())
    }

    async fn update(&self, post: PostRecord) -> Result<bool, QuireError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.uid == post.uid) {
            Some(existing) => {
                *existing = post;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
