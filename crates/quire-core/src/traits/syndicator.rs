// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Syndicator adapter trait for cross-posting targets (Mastodon, etc.).

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::QuireError;
use crate::traits::adapter::PluginAdapter;
use crate::types::SyndicatorInfo;

/// Adapter that republishes a post to a third-party service.
#[async_trait]
pub trait SyndicatorAdapter: PluginAdapter {
    /// Target description advertised to clients as a `syndicate-to` entry.
    fn info(&self) -> SyndicatorInfo;

    /// Syndicates a post, returning the URL of the copy if one was created.
    async fn syndicate(
        &self,
        properties: &Map<String, Value>,
        publication_me: &str,
    ) -> Result<Option<String>, QuireError>;
}
