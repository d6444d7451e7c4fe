// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursor pagination over a [`PostCollection`].

use chrono::{DateTime, Utc};
use quire_core::QuireError;
use quire_core::traits::PostCollection;
use quire_core::types::{PostRecord, PublishedRange, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page size used when no valid limit is supplied.
pub const DEFAULT_LIMIT: usize = 40;

/// One page of posts, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    pub items: Vec<PostRecord>,
    /// Older posts exist beyond `last_item`.
    pub has_next: bool,
    /// Newer posts exist beyond `first_item`.
    pub has_prev: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_item: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_item: Option<DateTime<Utc>>,
}

impl Cursor {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_next: false,
            has_prev: false,
            first_item: None,
            last_item: None,
        }
    }
}

/// Pagination parameters as they arrive on a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CursorQuery {
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    /// Kept as text so a malformed value falls back to the default.
    pub limit: Option<String>,
}

/// Parses a page size; anything but a positive integer yields [`DEFAULT_LIMIT`].
pub fn parse_limit(limit: Option<&str>) -> usize {
    limit
        .and_then(|l| l.trim().parse::<usize>().ok())
        .filter(|&l| l > 0)
        .unwrap_or(DEFAULT_LIMIT)
}

/// Fetches one page from `collection`.
///
/// With `before`, the page holds the posts immediately newer than `before`;
/// with `after`, those immediately older than `after`; with neither, the
/// most recent posts. `before` takes precedence when both are given.
pub async fn get_cursor(
    collection: &dyn PostCollection,
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
    limit: Option<&str>,
) -> Result<Cursor, QuireError> {
    let limit = parse_limit(limit);

    let items = match (before, after) {
        (Some(before), _) => {
            let mut items = collection
                .find(PublishedRange::NewerThan(before), SortOrder::Ascending, limit)
                .await?;
            items.reverse();
            items
        }
        (None, Some(after)) => {
            collection
                .find(PublishedRange::OlderThan(after), SortOrder::Descending, limit)
                .await?
        }
        (None, None) => {
            collection
                .find(PublishedRange::Any, SortOrder::Descending, limit)
                .await?
        }
    };

    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return Ok(Cursor::empty());
    };
    let first_item = first.published;
    let last_item = last.published;

    let has_next = collection
        .find_one(PublishedRange::OlderThan(last_item))
        .await?
        .is_some();
    let has_prev = collection
        .find_one(PublishedRange::NewerThan(first_item))
        .await?
        .is_some();

    debug!(
        count = items.len(),
        limit,
        has_next,
        has_prev,
        "cursor page fetched"
    );

    Ok(Cursor {
        items,
        has_next,
        has_prev,
        first_item: Some(first_item),
        last_item: Some(last_item),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_forty() {
        assert_eq!(parse_limit(None), 40);
        assert_eq!(parse_limit(Some("")), 40);
        assert_eq!(parse_limit(Some("abc")), 40);
        assert_eq!(parse_limit(Some("0")), 40);
        assert_eq!(parse_limit(Some("-5")), 40);
        assert_eq!(parse_limit(Some("12")), 12);
    }
}
