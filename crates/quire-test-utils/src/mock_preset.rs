// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preset returning a caller-supplied configuration.

use async_trait::async_trait;

use quire_core::traits::adapter::PluginAdapter;
use quire_core::traits::preset::PresetAdapter;
use quire_core::types::{AdapterType, PostPaths, PostType, PublicationConfig};

/// A preset whose defaults are fixed at construction.
pub struct MockPreset {
    id: String,
    config: PublicationConfig,
}

impl MockPreset {
    pub fn new(id: &str, config: PublicationConfig) -> Self {
        Self {
            id: id.to_string(),
            config,
        }
    }

    /// A preset with `article` and `note` post types under `_posts/`.
    pub fn basic(id: &str) -> Self {
        let post_type = |kind: &str, name: &str| PostType {
            post_type: kind.to_string(),
            name: name.to_string(),
            template: None,
            post: PostPaths {
                path: format!("_posts/{kind}/{{{{ slug }}}}.md"),
                url: format!("{kind}/{{{{ slug }}}}"),
            },
            media: None,
        };
        Self::new(
            id,
            PublicationConfig {
                post_types: vec![post_type("article", "Article"), post_type("note", "Note")],
                settings: Default::default(),
            },
        )
    }
}

#[async_trait]
impl PluginAdapter for MockPreset {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        "Mock preset"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Preset
    }
}

impl PresetAdapter for MockPreset {
    fn config(&self) -> PublicationConfig {
        self.config.clone()
    }
}
