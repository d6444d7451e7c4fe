// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merging custom publication settings over preset defaults.
//!
//! Ordinary settings merge recursively with the custom value winning on
//! every key collision; arrays and scalars are replaced wholesale. Post
//! types follow their own rule, see [`merge_post_types`].

use quire_core::types::{PostType, PublicationConfig};
use serde_json::{Map, Value};

/// Produces the effective configuration from custom overrides and preset defaults.
pub fn get_config(custom: &PublicationConfig, preset: &PublicationConfig) -> PublicationConfig {
    let mut settings = preset.settings.clone();
    deep_merge(&mut settings, &custom.settings);

    PublicationConfig {
        post_types: merge_post_types(&custom.post_types, &preset.post_types),
        settings,
    }
}

/// Recursively merges `overrides` into `base`.
pub fn deep_merge(base: &mut Map<String, Value>, overrides: &Map<String, Value>) {
    for (key, value) in overrides {
        match (base.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                deep_merge(existing, incoming);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Merges post type lists keyed by `type`.
///
/// Preset entries keep their order; each is replaced whole by the first
/// custom entry of the same type. Custom entries whose type the preset does
/// not define follow, in custom order.
pub fn merge_post_types(custom: &[PostType], preset: &[PostType]) -> Vec<PostType> {
    let mut merged: Vec<PostType> = preset
        .iter()
        .map(|default| {
            custom
                .iter()
                .find(|c| c.post_type == default.post_type)
                .unwrap_or(default)
                .clone()
        })
        .collect();

    merged.extend(
        custom
            .iter()
            .filter(|c| !preset.iter().any(|p| p.post_type == c.post_type))
            .cloned(),
    );
    merged
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quire_core::types::PostPaths;
    use serde_json::json;

    use super::*;

    fn post_type(kind: &str, name: &str) -> PostType {
        PostType {
            post_type: kind.to_string(),
            name: name.to_string(),
            template: None,
            post: PostPaths {
                path: format!("_{kind}/{{{{ slug }}}}.md"),
                url: format!("{kind}/{{{{ slug }}}}"),
            },
            media: None,
        }
    }

    #[test]
    fn custom_entry_replaces_whole_preset_entry() {
        let mut preset_note = post_type("note", "Note");
        preset_note.media = Some(PostPaths {
            path: "media/{{ filename }}".into(),
            url: "media/{{ filename }}".into(),
        });
        let preset = vec![post_type("article", "Article"), preset_note];
        let custom = vec![post_type("note", "Journal entry")];

        let merged = merge_post_types(&custom, &preset);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "Article");
        assert_eq!(merged[1], custom[0]);
        assert!(merged[1].media.is_none(), "fields must not blend");
    }

    #[test]
    fn unmatched_custom_entries_are_appended_in_order() {
        let preset = vec![post_type("article", "Article"), post_type("note", "Note")];
        let custom = vec![
            post_type("recipe", "Recipe"),
            post_type("note", "Journal entry"),
            post_type("event", "Event"),
        ];

        let kinds: Vec<String> = merge_post_types(&custom, &preset)
            .into_iter()
            .map(|p| p.post_type)
            .collect();
        assert_eq!(kinds, ["article", "note", "recipe", "event"]);
    }

    #[test]
    fn settings_merge_recursively_and_override_wins() {
        let preset = PublicationConfig {
            post_types: vec![],
            settings: json!({
                "slug-separator": "-",
                "syndication": { "retries": 1, "targets": ["a", "b"] }
            })
            .as_object()
            .cloned()
            .unwrap(),
        };
        let custom = PublicationConfig {
            post_types: vec![],
            settings: json!({
                "slug-separator": "$",
                "syndication": { "targets": ["c"] }
            })
            .as_object()
            .cloned()
            .unwrap(),
        };

        let merged = get_config(&custom, &preset);
        assert_eq!(
            Value::Object(merged.settings),
            json!({
                "slug-separator": "$",
                "syndication": { "retries": 1, "targets": ["c"] }
            })
        );
    }

    fn arb_post_types() -> impl Strategy<Value = Vec<PostType>> {
        let kinds = prop::sample::subsequence(
            vec!["article", "note", "photo", "video", "recipe", "event"],
            0..=6,
        );
        (kinds, "[A-Z][a-z]{0,8}").prop_map(|(kinds, name)| {
            kinds
                .into_iter()
                .map(|kind| post_type(kind, &format!("{name} {kind}")))
                .collect()
        })
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            any::<bool>().prop_map(Value::from),
            any::<i32>().prop_map(Value::from),
            "[a-z]{0,6}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..3).prop_map(Value::from),
                prop::collection::btree_map("[a-d]", inner, 0..3)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    fn arb_config() -> impl Strategy<Value = PublicationConfig> {
        (
            arb_post_types(),
            prop::collection::btree_map("[a-e]", arb_value(), 0..4),
        )
            .prop_map(|(post_types, settings)| PublicationConfig {
                post_types,
                settings: settings.into_iter().collect(),
            })
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(custom in arb_config(), preset in arb_config()) {
            let once = get_config(&custom, &preset);
            let twice = get_config(&once, &preset);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn note_override_replaces_and_keeps_preset_order(preset in arb_post_types()) {
            let replacement = post_type("note", "Replacement");
            let merged = merge_post_types(std::slice::from_ref(&replacement), &preset);

            let preset_kinds: Vec<&str> = preset.iter().map(|p| p.post_type.as_str()).collect();
            let merged_kinds: Vec<&str> = merged.iter().map(|p| p.post_type.as_str()).collect();
            if preset_kinds.contains(&"note") {
                prop_assert_eq!(&merged_kinds, &preset_kinds);
            } else {
                prop_assert_eq!(&merged_kinds[..preset_kinds.len()], &preset_kinds[..]);
                prop_assert_eq!(merged_kinds.last(), Some(&"note"));
            }
            let note = merged.iter().find(|p| p.post_type == "note").unwrap();
            prop_assert_eq!(note, &replacement);
        }
    }
}
