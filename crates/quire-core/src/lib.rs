// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Quire publishing backend.
//!
//! This crate provides the foundational trait definitions, error types, and
//! shared domain types used throughout the Quire workspace. Every store,
//! syndicator and preset plugin implements traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{QuireError, StoreError, StoreErrorKind};
pub use types::{
    AdapterType, FileVersion, HealthStatus, PostPaths, PostRecord, PostType, PublicationConfig,
    PublishedRange, SortOrder, StoreInfo, StoredFile, SyndicatorInfo,
};

pub use traits::{PluginAdapter, PostCollection, PresetAdapter, StoreAdapter, SyndicatorAdapter};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn adapter_type_display_roundtrip() {
        for variant in [AdapterType::Store, AdapterType::Syndicator, AdapterType::Preset] {
            let s = variant.to_string();
            let parsed = AdapterType::from_str(&s).expect("should parse back");
            assert_eq!(variant, parsed);
        }
        assert_eq!(AdapterType::Store.to_string(), "store");
    }

    #[test]
    fn store_error_keeps_plugin_and_status() {
        let err: QuireError =
            StoreError::new("GitHub store", StoreErrorKind::Conflict, Some(409), "sha mismatch").into();
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "GitHub store: conflict: sha mismatch");

        match err {
            QuireError::Store(inner) => {
                assert_eq!(inner.plugin, "GitHub store");
                assert_eq!(inner.status, Some(409));
            }
            other => panic!("expected store error, got {other:?}"),
        }
    }

    #[test]
    fn categories_fetch_message_embeds_url_and_cause() {
        let err = QuireError::CategoriesFetch {
            url: "https://website.example/categories.json".into(),
            cause: "Not Found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to fetch https://website.example/categories.json: Not Found"
        );
    }

    #[test]
    fn publication_config_reads_post_types_key() {
        let json = serde_json::json!({
            "post-types": [{
                "type": "note",
                "name": "Note",
                "post": { "path": "_notes/{{ slug }}.md", "url": "notes/{{ slug }}" }
            }],
            "slug-separator": "-"
        });
        let config: PublicationConfig = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(config.post_types.len(), 1);
        assert_eq!(config.post_type("note").unwrap().name, "Note");
        assert!(config.post_type("note").unwrap().media.is_none());
        assert_eq!(config.setting_str("slug-separator"), Some("-"));
        assert_eq!(serde_json::to_value(&config).unwrap(), json);
    }

    #[test]
    fn published_range_bounds_are_strict() {
        let t = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(!PublishedRange::NewerThan(t).contains(t));
        assert!(!PublishedRange::OlderThan(t).contains(t));
        assert!(PublishedRange::Any.contains(t));
        assert!(PublishedRange::NewerThan(t).contains(t + chrono::Duration::seconds(1)));
    }
}
