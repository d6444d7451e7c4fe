// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the GitHub repository contents API.
//!
//! Every call goes through [`GithubClient::send`], which builds the contents
//! URL, attaches the token and the negotiated `accept` header, and folds any
//! non-success response or transport failure into a [`StoreError`].

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quire_core::types::FileVersion;
use quire_core::{QuireError, StoreError, StoreErrorKind};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, Response, StatusCode};
use tracing::debug;

use crate::types::{ApiErrorResponse, ContentsResponse, DeleteContentsRequest, PutContentsRequest};

/// Name reported in every error this store raises.
pub const PLUGIN_NAME: &str = "GitHub store";

/// Payloads strictly larger than this many bytes use metadata negotiation.
pub const LARGE_PAYLOAD_THRESHOLD: usize = 1_000_000;

/// Content negotiation mode for a contents API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Negotiation {
    /// `application/vnd.github.raw`: raw file bytes.
    Raw,
    /// `application/vnd.github+json`: JSON metadata with base64 content.
    Metadata,
}

impl Negotiation {
    /// Chooses the mode for a write of `len` bytes.
    pub fn for_payload(len: usize) -> Self {
        if len > LARGE_PAYLOAD_THRESHOLD {
            Negotiation::Metadata
        } else {
            Negotiation::Raw
        }
    }

    pub fn accept(self) -> &'static str {
        match self {
            Negotiation::Raw => "application/vnd.github.raw",
            Negotiation::Metadata => "application/vnd.github+json",
        }
    }
}

/// Low-level client bound to one repository and branch.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    base_url: String,
    user: String,
    repo: String,
    branch: String,
}

impl GithubClient {
    pub fn new(
        base_url: &str,
        user: &str,
        repo: &str,
        branch: &str,
        token: &str,
    ) -> Result<Self, QuireError> {
        let mut auth = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|e| QuireError::Config(format!("invalid GitHub token header value: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("authorization", auth);
        headers.insert(
            "user-agent",
            HeaderValue::from_static(concat!("quire/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert("x-github-api-version", HeaderValue::from_static("2022-11-28"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| QuireError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.to_string(),
            repo: repo.to_string(),
            branch: branch.to_string(),
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    fn repo_url(&self) -> String {
        format!("{}/repos/{}/{}", self.base_url, self.user, self.repo)
    }

    fn contents_url(&self, path: &str) -> String {
        format!("{}/contents/{}", self.repo_url(), path.trim_start_matches('/'))
    }

    /// Issues one contents API request.
    ///
    /// `GET` requests are pinned to the configured branch with `?ref=`.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        negotiation: Negotiation,
        body: Option<serde_json::Value>,
    ) -> Result<Response, QuireError> {
        let mut url = self.contents_url(path);
        if method == Method::GET {
            let query = serde_urlencoded::to_string([("ref", self.branch.as_str())])
                .map_err(|e| QuireError::Internal(format!("failed to encode ref: {e}")))?;
            url = format!("{url}?{query}");
        }
        let mut request = self
            .client
            .request(method.clone(), url)
            .header("accept", negotiation.accept());
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!(method = %method, path, status = %status, accept = negotiation.accept(), "github request");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body).into())
    }

    /// Fetches file metadata (sha plus base64 content).
    pub async fn get_contents(&self, path: &str) -> Result<ContentsResponse, QuireError> {
        let response = self.send(Method::GET, path, Negotiation::Metadata, None).await?;
        response.json::<ContentsResponse>().await.map_err(transport_error)
    }

    /// Fetches raw file bytes.
    pub async fn get_raw(&self, path: &str) -> Result<Vec<u8>, QuireError> {
        let response = self.send(Method::GET, path, Negotiation::Raw, None).await?;
        let bytes = response.bytes().await.map_err(transport_error)?;
        Ok(bytes.to_vec())
    }

    /// Creates (`sha` = `None`) or replaces a file.
    pub async fn put_contents(
        &self,
        path: &str,
        content: &[u8],
        message: &str,
        sha: Option<&FileVersion>,
    ) -> Result<(), QuireError> {
        let negotiation = Negotiation::for_payload(content.len());
        let body = to_body(&PutContentsRequest {
            branch: &self.branch,
            content: STANDARD.encode(content),
            message,
            sha: sha.map(FileVersion::as_str),
        })?;
        self.send(Method::PUT, path, negotiation, Some(body)).await?;
        Ok(())
    }

    /// Deletes a file at the given sha.
    pub async fn delete_contents(
        &self,
        path: &str,
        message: &str,
        sha: &FileVersion,
    ) -> Result<(), QuireError> {
        let body = to_body(&DeleteContentsRequest {
            branch: &self.branch,
            sha: sha.as_str(),
            message,
        })?;
        self.send(Method::DELETE, path, Negotiation::Metadata, Some(body))
            .await?;
        Ok(())
    }

    /// Checks that the repository is reachable with the configured token.
    pub async fn check_repository(&self) -> Result<(), QuireError> {
        let response = self
            .client
            .get(self.repo_url())
            .header("accept", Negotiation::Metadata.accept())
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body).into())
    }
}

fn to_body<T: serde::Serialize>(body: &T) -> Result<serde_json::Value, QuireError> {
    serde_json::to_value(body)
        .map_err(|e| QuireError::Internal(format!("failed to encode GitHub request: {e}")))
}

/// Maps a non-success response to a store error.
///
/// 404 is not-found, 409 is a conflict, and 422 is a conflict only when the
/// message names the sha. Anything else is unavailability.
pub(crate) fn status_error(status: StatusCode, body: &str) -> StoreError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .map_or_else(|| status.to_string(), str::to_string)
        });
    // GitHub also answers 422 for validation failures unrelated to the sha.
    let kind = match status {
        StatusCode::NOT_FOUND => StoreErrorKind::NotFound,
        StatusCode::CONFLICT => StoreErrorKind::Conflict,
        StatusCode::UNPROCESSABLE_ENTITY if message.to_ascii_lowercase().contains("sha") => {
            StoreErrorKind::Conflict
        }
        _ => StoreErrorKind::BackendUnavailable,
    };
    StoreError::new(PLUGIN_NAME, kind, Some(status.as_u16()), message)
}

fn transport_error(err: reqwest::Error) -> QuireError {
    StoreError::new(
        PLUGIN_NAME,
        StoreErrorKind::BackendUnavailable,
        err.status().map(|s| s.as_u16()),
        err.to_string(),
    )
    .into()
}

/// Decodes GitHub's line-wrapped base64.
pub(crate) fn decode_content(encoded: &str) -> Result<Vec<u8>, QuireError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact).map_err(|e| {
        StoreError::new(
            PLUGIN_NAME,
            StoreErrorKind::BackendUnavailable,
            None,
            format!("invalid base64 content: {e}"),
        )
        .into()
    })
}
