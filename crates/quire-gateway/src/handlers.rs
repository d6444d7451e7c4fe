// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway.
//!
//! Handles GET /health, POST /token and GET /micropub.

use axum::{
    Json,
    body::Bytes,
    extract::{Query, RawQuery, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use quire_auth::TokenRequest;
use quire_core::QuireError;
use quire_core::traits::SyndicatorAdapter;
use quire_core::types::SyndicatorInfo;
use quire_pagination::get_cursor;
use quire_publication::{RequestContext, get_categories, get_media_endpoint};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::server::GatewayState;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

// --- Token endpoint ---

/// Token request parameters as they may appear in the query or the body.
#[derive(Debug, Default, Deserialize)]
struct TokenParams {
    client_id: Option<String>,
    code: Option<String>,
    redirect_uri: Option<String>,
}

impl TokenParams {
    fn parse(raw: &[u8]) -> Result<Self, serde_urlencoded::de::Error> {
        if raw.is_empty() {
            return Ok(Self::default());
        }
        serde_urlencoded::from_bytes(raw)
    }

    /// Combines body and query parameters; the body wins.
    fn merge(body: Self, query: Self) -> Option<TokenRequest> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        Some(TokenRequest {
            client_id: non_empty(body.client_id).or(non_empty(query.client_id))?,
            code: non_empty(body.code).or(non_empty(query.code))?,
            redirect_uri: non_empty(body.redirect_uri).or(non_empty(query.redirect_uri))?,
        })
    }
}

#[derive(Serialize)]
struct TokenError {
    error: &'static str,
}

fn form_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_urlencoded::to_string(body) {
        Ok(encoded) => (status, [(header::CONTENT_TYPE, FORM_CONTENT_TYPE)], encoded).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode token response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn token_error(error: &'static str) -> Response {
    form_response(StatusCode::BAD_REQUEST, &TokenError { error })
}

/// POST /token
///
/// Exchanges an authorization code for a bearer token. Parameters come from
/// the query string and/or a urlencoded body.
pub async fn post_token(
    State(state): State<GatewayState>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Response {
    let query = TokenParams::parse(query.as_deref().unwrap_or_default().as_bytes());
    let body = TokenParams::parse(&body);
    let (Ok(query), Ok(body)) = (query, body) else {
        return token_error("invalid_request");
    };
    let Some(request) = TokenParams::merge(body, query) else {
        return token_error("invalid_request");
    };

    match state.exchange.exchange(&request, Utc::now()) {
        Ok(response) => form_response(StatusCode::OK, &response),
        Err(QuireError::InvalidGrant) => token_error("invalid_grant"),
        Err(e) => {
            tracing::error!(error = %e, "token exchange failed");
            form_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &TokenError {
                    error: "server_error",
                },
            )
        }
    }
}

// --- Micropub queries ---

/// Query string of GET /micropub.
#[derive(Debug, Default, Deserialize)]
pub struct MicropubQuery {
    pub q: Option<String>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
struct PostTypeSummary<'a> {
    #[serde(rename = "type")]
    post_type: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct ConfigResponse<'a> {
    #[serde(rename = "media-endpoint")]
    media_endpoint: String,
    #[serde(rename = "post-types")]
    post_types: Vec<PostTypeSummary<'a>>,
    categories: Vec<String>,
    #[serde(rename = "syndicate-to")]
    syndicate_to: Vec<SyndicatorInfo>,
}

/// GET /micropub
pub async fn get_micropub(
    State(state): State<GatewayState>,
    Query(query): Query<MicropubQuery>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<Value>, ApiError> {
    match query.q.as_deref() {
        Some("config") => micropub_config(&state, &request_context(&headers, &uri)).await,
        Some("source") => micropub_source(&state, &query).await,
        Some(other) => Err(ApiError::InvalidRequest(format!(
            "unsupported query `{other}`"
        ))),
        None => Err(ApiError::InvalidRequest("missing `q` parameter".to_string())),
    }
}

async fn micropub_config(
    state: &GatewayState,
    request: &RequestContext,
) -> Result<Json<Value>, ApiError> {
    let publication = &state.publication;
    let categories =
        get_categories(&state.categories, publication.categories.as_ref()).await?;

    let response = ConfigResponse {
        media_endpoint: get_media_endpoint(publication, request).media_endpoint,
        post_types: publication
            .config
            .post_types
            .iter()
            .map(|p| PostTypeSummary {
                post_type: &p.post_type,
                name: &p.name,
            })
            .collect(),
        categories,
        syndicate_to: state.registry.syndicators().iter().map(|s| s.info()).collect(),
    };
    let value = serde_json::to_value(response)
        .map_err(|e| QuireError::Internal(format!("failed to encode config: {e}")))?;
    Ok(Json(value))
}

async fn micropub_source(
    state: &GatewayState,
    query: &MicropubQuery,
) -> Result<Json<Value>, ApiError> {
    let after = parse_timestamp("after", query.after.as_deref())?;
    let before = parse_timestamp("before", query.before.as_deref())?;

    let cursor = get_cursor(state.posts.as_ref(), after, before, query.limit.as_deref()).await?;

    let mut paging = serde_json::Map::new();
    if cursor.has_next
        && let Some(last) = cursor.last_item
    {
        paging.insert("after".into(), json!(last));
    }
    if cursor.has_prev
        && let Some(first) = cursor.first_item
    {
        paging.insert("before".into(), json!(first));
    }

    Ok(Json(json!({
        "items": cursor.items,
        "paging": paging,
    })))
}

fn parse_timestamp(name: &str, value: Option<&str>) -> Result<Option<DateTime<Utc>>, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| {
            DateTime::parse_from_rfc3339(v)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| ApiError::InvalidRequest(format!("invalid `{name}` timestamp: {e}")))
        })
        .transpose()
}

/// Protocol and host the client used to reach us.
fn request_context(headers: &HeaderMap, uri: &Uri) -> RequestContext {
    let header_str = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    let protocol = header_str("x-forwarded-proto")
        .or(uri.scheme_str())
        .unwrap_or("http")
        .to_string();
    let host = header_str("x-forwarded-host")
        .or_else(|| header_str(header::HOST.as_str()))
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost")
        .to_string();

    RequestContext { protocol, host }
}
