// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `quire plugins` and `quire check-config` command implementations.

use quire_config::QuireConfig;
use quire_core::QuireError;
use quire_plugin::PluginSummary;
use quire_publication::Publication;

use crate::serve::build_registry;

fn format_plugin(plugin: &PluginSummary) -> String {
    format!(
        "{:<12} {:<11} {:<8} {}",
        plugin.id,
        plugin.adapter_type.to_string(),
        plugin.version,
        plugin.name
    )
}

/// Lists the enabled plugins with their type and version.
pub fn run_plugins(config: &QuireConfig) -> Result<(), QuireError> {
    let registry = build_registry(config)?;
    println!("{:<12} {:<11} {:<8} NAME", "ID", "TYPE", "VERSION");
    for plugin in registry.list_all() {
        println!("{}", format_plugin(&plugin));
    }
    Ok(())
}

/// Resolves the publication exactly as `serve` would, then reports it.
pub fn run_check_config(config: &QuireConfig) -> Result<(), QuireError> {
    let registry = build_registry(config)?;
    let publication = Publication::resolve(&registry, &config.publication)?;

    println!("configuration OK");
    println!("  me:         {}", publication.me);
    println!("  preset:     {}", config.publication.preset);
    println!("  store:      {}", config.publication.store);
    let post_types: Vec<&str> = publication
        .config
        .post_types
        .iter()
        .map(|p| p.post_type.as_str())
        .collect();
    println!("  post types: {}", post_types.join(", "));
    Ok(())
}
