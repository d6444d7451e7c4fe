// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Jekyll preset: default post types laid out the way a Jekyll site
//! expects them (`_posts/` for content, `media/` for uploads).

use async_trait::async_trait;
use quire_core::traits::{PluginAdapter, PresetAdapter};
use quire_core::types::{AdapterType, PostPaths, PostType, PublicationConfig};
use serde_json::{Map, Value};

const POST_PATH: &str = "_posts/{{ published | date('yyyy-MM-dd') }}-{{ slug }}.md";
const POST_URL: &str = "{{ published | date('yyyy/MM/dd') }}/{{ slug }}";

/// Preset for publications built with Jekyll.
#[derive(Debug, Default, Clone, Copy)]
pub struct JekyllPreset;

impl JekyllPreset {
    /// Registry key of this preset.
    pub const ID: &'static str = "jekyll";

    pub fn new() -> Self {
        Self
    }
}

fn post_type(kind: &str, name: &str, media_dir: Option<&str>) -> PostType {
    PostType {
        post_type: kind.to_string(),
        name: name.to_string(),
        template: None,
        post: PostPaths {
            path: POST_PATH.to_string(),
            url: POST_URL.to_string(),
        },
        media: media_dir.map(|dir| PostPaths {
            path: format!("media/{dir}/{{{{ uploaded | date('yyyy/MM/dd') }}}}/{{{{ filename }}}}"),
            url: format!("media/{dir}/{{{{ uploaded | date('yyyy/MM/dd') }}}}/{{{{ filename }}}}"),
        }),
    }
}

#[async_trait]
impl PluginAdapter for JekyllPreset {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Jekyll"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Preset
    }
}

impl PresetAdapter for JekyllPreset {
    fn config(&self) -> PublicationConfig {
        let mut settings = Map::new();
        settings.insert("slug-separator".into(), Value::from("-"));

        PublicationConfig {
            post_types: vec![
                post_type("article", "Article", Some("articles")),
                post_type("note", "Note", None),
                post_type("photo", "Photo", Some("photos")),
                post_type("video", "Video", Some("videos")),
                post_type("audio", "Audio", Some("audio")),
                post_type("bookmark", "Bookmark", None),
                post_type("reply", "Reply", None),
                post_type("like", "Like", None),
                post_type("repost", "Repost", None),
            ],
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ships_all_post_types_in_order() {
        let config = JekyllPreset.config();
        let kinds: Vec<&str> = config.post_types.iter().map(|p| p.post_type.as_str()).collect();
        assert_eq!(
            kinds,
            ["article", "note", "photo", "video", "audio", "bookmark", "reply", "like", "repost"]
        );
    }

    #[test]
    fn media_only_on_media_types() {
        let config = JekyllPreset.config();
        assert!(config.post_type("note").unwrap().media.is_none());
        let photo = config.post_type("photo").unwrap().media.as_ref().unwrap();
        assert_eq!(
            photo.path,
            "media/photos/{{ uploaded | date('yyyy/MM/dd') }}/{{ filename }}"
        );
    }

    #[test]
    fn posts_live_under_underscore_posts() {
        let config = JekyllPreset.config();
        assert!(config.post_types.iter().all(|p| p.post.path.starts_with("_posts/")));
        assert_eq!(config.setting_str("slug-separator"), Some("-"));
    }
}
