// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Media endpoint resolution.

use serde::Serialize;

use crate::publication::Publication;

/// Setting key holding an explicitly configured media endpoint.
pub const MEDIA_ENDPOINT_KEY: &str = "media-endpoint";

/// The parts of an inbound request the media endpoint is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// `http` or `https`.
    pub protocol: String,
    /// Value of the `host` header.
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaEndpoint {
    #[serde(rename = "media-endpoint")]
    pub media_endpoint: String,
}

/// Returns the configured media endpoint, or derives one from the request.
///
/// A derived endpoint is `<protocol>://<host><media_path>`, so one
/// publication serves correctly from any host it is reached on.
pub fn get_media_endpoint(publication: &Publication, request: &RequestContext) -> MediaEndpoint {
    let media_endpoint = match publication.config.setting_str(MEDIA_ENDPOINT_KEY) {
        Some(configured) => configured.to_string(),
        None if is_absolute(&publication.media_path) => publication.media_path.clone(),
        None => format!(
            "{}://{}{}",
            request.protocol, request.host, publication.media_path
        ),
    };
    MediaEndpoint { media_endpoint }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}
