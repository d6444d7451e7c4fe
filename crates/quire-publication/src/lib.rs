// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Publication configuration resolver.
//!
//! Merges a publication's custom settings over its preset's defaults,
//! resolves the category list (fetching and caching remote lists) and
//! derives the media endpoint from the inbound request when none is
//! configured.

pub mod categories;
pub mod media;
pub mod merge;
pub mod publication;

pub use categories::{CategoryCache, get_categories};
pub use media::{MediaEndpoint, RequestContext, get_media_endpoint};
pub use merge::{deep_merge, get_config, merge_post_types};
pub use publication::Publication;
pub use quire_plugin::{get_preset, get_store};
