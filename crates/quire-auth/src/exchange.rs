// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authorization code for bearer token exchange.
//!
//! A presented code moves `CodeIssued -> Validated -> TokenGranted`, or ends
//! in `Rejected`. Every rejection surfaces as the same
//! [`QuireError::InvalidGrant`]; the specific reason is only logged.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use quire_core::QuireError;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info};

use crate::code::{AuthorizationCode, AuthorizationCodeStore};
use crate::signer::TokenSigner;

/// Parameters of a token request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenRequest {
    pub client_id: String,
    pub code: String,
    pub redirect_uri: String,
}

/// Successful exchange result, serialized as the urlencoded response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub me: String,
    pub scope: String,
}

/// Why a code was refused. Logged, never returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    UnknownCode,
    Expired,
    ClientMismatch,
    RedirectMismatch,
}

/// Lifecycle of one presented code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeState {
    CodeIssued(AuthorizationCode),
    Validated(AuthorizationCode),
    TokenGranted(TokenResponse),
    Rejected(RejectReason),
}

impl ExchangeState {
    /// Checks the code against the request. Terminal states pass through.
    pub fn validate(self, request: &TokenRequest, now: DateTime<Utc>) -> Self {
        let ExchangeState::CodeIssued(code) = self else {
            return self;
        };
        if code.is_expired(now) {
            ExchangeState::Rejected(RejectReason::Expired)
        } else if code.client_id != request.client_id {
            ExchangeState::Rejected(RejectReason::ClientMismatch)
        } else if code.redirect_uri != request.redirect_uri {
            ExchangeState::Rejected(RejectReason::RedirectMismatch)
        } else {
            ExchangeState::Validated(code)
        }
    }

    /// Mints the token for a validated code. Other states pass through.
    pub fn grant(self, signer: &TokenSigner, now: DateTime<Utc>) -> Result<Self, QuireError> {
        let ExchangeState::Validated(code) = self else {
            return Ok(self);
        };
        let (access_token, _) = signer.mint(&code.me, &code.scope, &code.client_id, now)?;
        Ok(ExchangeState::TokenGranted(TokenResponse {
            access_token,
            me: code.me,
            scope: code.scope,
        }))
    }
}

/// Converts one-time authorization codes into signed bearer tokens.
#[derive(Debug, Clone)]
pub struct TokenExchange {
    codes: Arc<AuthorizationCodeStore>,
    signer: Arc<TokenSigner>,
}

impl TokenExchange {
    pub fn new(codes: Arc<AuthorizationCodeStore>, signer: Arc<TokenSigner>) -> Self {
        Self { codes, signer }
    }

    pub fn codes(&self) -> &AuthorizationCodeStore {
        &self.codes
    }

    pub fn signer(&self) -> &TokenSigner {
        &self.signer
    }

    /// Redeems `request.code`.
    ///
    /// The code is consumed before validation, so a second attempt fails
    /// even if the first one was rejected.
    pub fn exchange(
        &self,
        request: &TokenRequest,
        now: DateTime<Utc>,
    ) -> Result<TokenResponse, QuireError> {
        let state = match self.codes.take(&request.code) {
            Some(code) => ExchangeState::CodeIssued(code),
            None => ExchangeState::Rejected(RejectReason::UnknownCode),
        };

        match state.validate(request, now).grant(&self.signer, now)? {
            ExchangeState::TokenGranted(response) => {
                info!(client_id = request.client_id, me = response.me, "token granted");
                Ok(response)
            }
            ExchangeState::Rejected(reason) => {
                debug!(client_id = request.client_id, reason = %reason, "token request rejected");
                Err(QuireError::InvalidGrant)
            }
            other => Err(QuireError::Internal(format!(
                "token exchange stopped in state {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use tracing_test::traced_test;

    use super::*;

    fn code(now: DateTime<Utc>) -> AuthorizationCode {
        AuthorizationCode {
            client_id: "https://client.example".into(),
            redirect_uri: "/".into(),
            me: "https://website.example/".into(),
            scope: "create".into(),
            expires_at: now + Duration::minutes(10),
        }
    }

    fn request() -> TokenRequest {
        TokenRequest {
            client_id: "https://client.example".into(),
            code: "unused".into(),
            redirect_uri: "/".into(),
        }
    }

    #[test]
    fn validate_checks_each_binding() {
        let now = Utc::now();
        assert_eq!(
            ExchangeState::CodeIssued(code(now)).validate(&request(), now),
            ExchangeState::Validated(code(now))
        );

        let expired = now + Duration::minutes(11);
        assert_eq!(
            ExchangeState::CodeIssued(code(now)).validate(&request(), expired),
            ExchangeState::Rejected(RejectReason::Expired)
        );

        let mut wrong_client = request();
        wrong_client.client_id = "https://other.example".into();
        assert_eq!(
            ExchangeState::CodeIssued(code(now)).validate(&wrong_client, now),
            ExchangeState::Rejected(RejectReason::ClientMismatch)
        );

        let mut wrong_redirect = request();
        wrong_redirect.redirect_uri = "/elsewhere".into();
        assert_eq!(
            ExchangeState::CodeIssued(code(now)).validate(&wrong_redirect, now),
            ExchangeState::Rejected(RejectReason::RedirectMismatch)
        );
    }

    #[test]
    fn rejected_is_terminal() {
        let now = Utc::now();
        let signer = TokenSigner::generate(Duration::hours(1));
        let state = ExchangeState::Rejected(RejectReason::UnknownCode)
            .validate(&request(), now)
            .grant(&signer, now)
            .unwrap();
        assert_eq!(state, ExchangeState::Rejected(RejectReason::UnknownCode));
    }

    #[test]
    fn reject_reason_display_is_snake_case() {
        assert_eq!(RejectReason::RedirectMismatch.to_string(), "redirect_mismatch");
    }

    #[traced_test]
    #[test]
    fn rejection_reason_is_logged_but_not_returned() {
        let now = Utc::now();
        let exchange = TokenExchange::new(
            Arc::new(AuthorizationCodeStore::new(Duration::minutes(10))),
            Arc::new(TokenSigner::generate(Duration::hours(1))),
        );
        let code = exchange
            .codes()
            .issue("https://client.example", "/", "https://website.example/", "create", now)
            .unwrap();

        let mut wrong_redirect = request();
        wrong_redirect.code = code;
        wrong_redirect.redirect_uri = "/elsewhere".into();

        let err = exchange.exchange(&wrong_redirect, now).unwrap_err();
        assert_eq!(err.to_string(), "invalid_grant");
        assert!(logs_contain("redirect_mismatch"));
    }
}
