// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock syndication target that captures every post it is given.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use quire_core::QuireError;
use quire_core::traits::adapter::PluginAdapter;
use quire_core::traits::syndicator::SyndicatorAdapter;
use quire_core::types::{AdapterType, SyndicatorInfo};

/// A syndicator that records posts instead of sending them anywhere.
pub struct MockSyndicator {
    id: String,
    uid: String,
    checked: bool,
    sent: Mutex<Vec<Map<String, Value>>>,
}

impl MockSyndicator {
    /// Create a syndicator advertising `uid` as its target.
    pub fn new(id: &str, uid: &str) -> Self {
        Self {
            id: id.to_string(),
            uid: uid.to_string(),
            checked: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Mark the target as pre-selected for clients.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Posts passed to `syndicate()` so far.
    pub async fn sent(&self) -> Vec<Map<String, Value>> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl PluginAdapter for MockSyndicator {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        "Mock syndicator"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Syndicator
    }
}

#[async_trait]
impl SyndicatorAdapter for MockSyndicator {
    fn info(&self) -> SyndicatorInfo {
        SyndicatorInfo {
            uid: self.uid.clone(),
            name: format!("Mock ({})", self.id),
            checked: self.checked,
        }
    }

    async fn syndicate(
        &self,
        properties: &Map<String, Value>,
        _publication_me: &str,
    ) -> Result<Option<String>, QuireError> {
        let mut sent = self.sent.lock().await;
        sent.push(properties.clone());
        Ok(Some(format!("{}/{}", self.uid.trim_end_matches('/'), sent.len())))
    }
}
