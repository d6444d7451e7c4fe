// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Publication resolution, categories and media endpoint.

use std::sync::Arc;
use std::time::Duration;

use quire_config::{CategoriesSetting, PublicationSettings};
use quire_core::types::AdapterType;
use quire_core::{PluginAdapter, PostPaths, PostType, PublicationConfig, QuireError};
use quire_plugin::PluginRegistry;
use quire_publication::{
    CategoryCache, Publication, RequestContext, get_categories, get_media_endpoint, get_preset,
};
use quire_test_utils::{MockPreset, MockStore};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.add_store(Arc::new(MockStore::new("memory"))).unwrap();
    registry.add_preset(Arc::new(MockPreset::basic("basic"))).unwrap();
    registry
}

fn settings() -> PublicationSettings {
    PublicationSettings {
        me: "https://website.example".into(),
        preset: "basic".into(),
        store: "memory".into(),
        ..PublicationSettings::default()
    }
}

fn https_request(host: &str) -> RequestContext {
    RequestContext {
        protocol: "https".into(),
        host: host.into(),
    }
}

fn cache() -> CategoryCache {
    CategoryCache::new(Duration::from_secs(60)).unwrap()
}

#[tokio::test]
async fn literal_categories_returned_unchanged() {
    let source = CategoriesSetting::List(vec!["foo".into(), "bar".into()]);
    let categories = get_categories(&cache(), Some(&source)).await.unwrap();
    assert_eq!(categories, ["foo", "bar"]);
}

#[tokio::test]
async fn missing_categories_source_is_empty() {
    assert!(get_categories(&cache(), None).await.unwrap().is_empty());
}

#[test]
fn oversized_cache_ttl_is_config_error() {
    let result = CategoryCache::new(Duration::from_secs(40_000_000_000));
    assert!(matches!(result, Err(QuireError::Config(_))));
    assert!(CategoryCache::new(Duration::from_secs(365 * 24 * 60 * 60)).is_ok());
}

#[tokio::test]
async fn remote_categories_fetched_once_then_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["foo", "bar"])))
        .expect(1)
        .mount(&server)
        .await;

    let cache = cache();
    let source = CategoriesSetting::Remote {
        url: format!("{}/categories.json", server.uri()),
    };
    for _ in 0..3 {
        let categories = get_categories(&cache, Some(&source)).await.unwrap();
        assert_eq!(categories, ["foo", "bar"]);
    }
}

#[tokio::test]
async fn remote_failure_embeds_url_and_cause() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/categories.json", server.uri());
    let source = CategoriesSetting::Remote { url: url.clone() };
    let err = get_categories(&cache(), Some(&source)).await.unwrap_err();
    assert!(matches!(err, QuireError::CategoriesFetch { .. }));
    assert_eq!(err.to_string(), format!("Unable to fetch {url}: Not Found"));
}

#[tokio::test]
async fn failed_fetch_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories.json"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["later"])))
        .mount(&server)
        .await;

    let cache = cache();
    let source = CategoriesSetting::Remote {
        url: format!("{}/categories.json", server.uri()),
    };
    assert!(get_categories(&cache, Some(&source)).await.is_err());
    assert_eq!(get_categories(&cache, Some(&source)).await.unwrap(), ["later"]);
}

#[test]
fn media_endpoint_derived_from_request() {
    let publication = Publication::resolve(&registry(), &settings()).unwrap();
    let endpoint = get_media_endpoint(&publication, &https_request("server.example"));
    assert_eq!(endpoint.media_endpoint, "https://server.example/media");
    assert_eq!(
        serde_json::to_value(&endpoint).unwrap(),
        json!({ "media-endpoint": "https://server.example/media" })
    );
}

#[test]
fn configured_media_endpoint_returned_verbatim() {
    let mut settings = settings();
    settings.config.insert(
        "media-endpoint".into(),
        json!("https://website.example/media"),
    );
    let publication = Publication::resolve(&registry(), &settings).unwrap();
    let endpoint = get_media_endpoint(&publication, &https_request("server.example"));
    assert_eq!(endpoint.media_endpoint, "https://website.example/media");
}

#[test]
fn media_endpoint_setting_feeds_effective_config() {
    let mut settings = settings();
    settings.media_endpoint = Some("https://media.example/upload".into());
    let publication = Publication::resolve(&registry(), &settings).unwrap();
    assert_eq!(
        get_media_endpoint(&publication, &https_request("website.example")).media_endpoint,
        "https://media.example/upload"
    );
}

#[test]
fn absolute_media_path_passes_through() {
    let mut settings = settings();
    settings.media_path = "https://cdn.example/media".into();
    let publication = Publication::resolve(&registry(), &settings).unwrap();
    assert_eq!(
        get_media_endpoint(&publication, &https_request("website.example")).media_endpoint,
        "https://cdn.example/media"
    );
}

#[test]
fn resolve_merges_custom_post_types_over_preset() {
    let mut settings = settings();
    settings.config.insert(
        "post-types".into(),
        json!([{
            "type": "note",
            "name": "Journal entry",
            "template": "etc/templates/entry.njk",
            "post": { "path": "_entries/{{ slug }}.md", "url": "entries/{{ slug }}" }
        }]),
    );
    settings.config.insert("slug-separator".into(), json!("$"));

    let publication = Publication::resolve(&registry(), &settings).unwrap();
    let note = publication.config.post_type("note").unwrap();
    assert_eq!(note.name, "Journal entry");
    assert_eq!(note.template.as_deref(), Some("etc/templates/entry.njk"));
    assert_eq!(publication.config.post_types[0].post_type, "article");
    assert_eq!(publication.config.setting_str("slug-separator"), Some("$"));
    assert_eq!(publication.store.id(), "memory");
}

#[test]
fn resolve_fails_for_unknown_store() {
    let mut settings = settings();
    settings.store = "github".into();
    let err = Publication::resolve(&registry(), &settings).unwrap_err();
    assert!(matches!(
        err,
        QuireError::AdapterNotFound { adapter_type: AdapterType::Store, ref id } if id == "github"
    ));
}

#[test]
fn resolve_fails_for_unknown_preset() {
    let mut settings = settings();
    settings.preset = "hugo".into();
    let err = Publication::resolve(&registry(), &settings).unwrap_err();
    assert_eq!(err.to_string(), "adapter not found: preset/hugo");
}

#[test]
fn resolve_rejects_malformed_post_types() {
    let mut settings = settings();
    settings.config.insert("post-types".into(), json!([{ "type": "note" }]));
    let err = Publication::resolve(&registry(), &settings).unwrap_err();
    assert!(matches!(err, QuireError::Config(_)));
}

#[test]
fn get_preset_is_a_linear_lookup() {
    let registry = registry();
    assert_eq!(get_preset(registry.presets(), "basic").unwrap().id(), "basic");
    assert!(get_preset(registry.presets(), "jekyll").is_none());
}

#[test]
fn preset_config_survives_merge_without_overrides() {
    let preset = MockPreset::new(
        "custom",
        PublicationConfig {
            post_types: vec![PostType {
                post_type: "event".into(),
                name: "Event".into(),
                template: None,
                post: PostPaths {
                    path: "_events/{{ slug }}.md".into(),
                    url: "events/{{ slug }}".into(),
                },
                media: None,
            }],
            settings: Default::default(),
        },
    );
    let mut registry = registry();
    registry.add_preset(Arc::new(preset)).unwrap();

    let mut settings = settings();
    settings.preset = "custom".into();
    let publication = Publication::resolve(&registry, &settings).unwrap();
    assert_eq!(publication.config.post_types.len(), 1);
    assert_eq!(publication.config.post_types[0].name, "Event");
}
