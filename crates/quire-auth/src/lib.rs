// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delegated access for the Quire publishing backend.
//!
//! Authorization codes are issued into an [`AuthorizationCodeStore`] and
//! redeemed once through [`TokenExchange`] for an Ed25519-signed bearer
//! token that [`TokenSigner::verify`] can later check without storage.

pub mod code;
pub mod exchange;
pub mod signer;

pub use code::{AuthorizationCode, AuthorizationCodeStore};
pub use exchange::{ExchangeState, RejectReason, TokenExchange, TokenRequest, TokenResponse};
pub use signer::{TokenClaims, TokenSigner};
