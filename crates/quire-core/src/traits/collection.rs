// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time-ordered post collection primitives.

use async_trait::async_trait;

use crate::error::QuireError;
use crate::types::{PostRecord, PublishedRange, SortOrder};

/// A document store holding posts ordered by their published timestamp.
///
/// Only the find/insert/update primitives the backend needs are modelled;
/// the store itself is external.
#[async_trait]
pub trait PostCollection: Send + Sync {
    /// Returns up to `limit` posts within `range`, sorted by `order`.
    async fn find(
        &self,
        range: PublishedRange,
        order: SortOrder,
        limit: usize,
    ) -> Result<Vec<PostRecord>, QuireError>;

    /// Returns any one post within `range`.
    async fn find_one(&self, range: PublishedRange) -> Result<Option<PostRecord>, QuireError>;

    /// Inserts a new post.
    async fn insert(&self, post: PostRecord) -> Result<(), QuireError>;

    /// Replaces the post with the same `uid`. Returns false if none matched.
    async fn update(&self, post: PostRecord) -> Result<bool, QuireError>;
}
