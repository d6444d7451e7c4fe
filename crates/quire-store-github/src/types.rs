// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GitHub contents API request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `PUT /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, Serialize)]
pub struct PutContentsRequest<'a> {
    pub branch: &'a str,
    /// Base64-encoded file content.
    pub content: String,
    pub message: &'a str,
    /// Current blob sha; required when replacing an existing file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<&'a str>,
}

/// Body of `DELETE /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteContentsRequest<'a> {
    pub branch: &'a str,
    pub sha: &'a str,
    pub message: &'a str,
}

/// Metadata-mode response of `GET /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsResponse {
    pub sha: String,
    /// Base64 content, wrapped at 60 columns. Empty for files over 1 MB.
    #[serde(default)]
    pub content: String,
    /// `base64`, or `none` when the file is too large to inline.
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Error body returned by the GitHub REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
}
