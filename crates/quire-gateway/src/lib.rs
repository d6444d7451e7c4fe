// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Quire publishing backend.
//!
//! A thin axum surface over the core: the token endpoint drives the
//! code-for-token exchange, and `GET /micropub` answers `q=config` and
//! `q=source` queries for holders of a valid bearer token.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ErrorResponse};
pub use server::{GatewayState, ServerConfig, router, start_server};
