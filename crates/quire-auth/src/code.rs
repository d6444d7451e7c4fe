// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-time authorization codes.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rand::RngCore;
use rand::rngs::OsRng;
use quire_core::QuireError;
use tracing::debug;

/// What an authorization code was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationCode {
    pub client_id: String,
    pub redirect_uri: String,
    /// Identity the resulting token will act for.
    pub me: String,
    pub scope: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthorizationCode {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Concurrent in-memory store of outstanding codes.
///
/// [`take`](Self::take) removes the code atomically, so a code can be
/// presented at most once whatever the outcome of that presentation.
#[derive(Debug)]
pub struct AuthorizationCodeStore {
    codes: DashMap<String, AuthorizationCode>,
    lifetime: Duration,
}

impl AuthorizationCodeStore {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            codes: DashMap::new(),
            lifetime,
        }
    }

    /// Issues a new code bound to the given client, redirect and identity.
    pub fn issue(
        &self,
        client_id: &str,
        redirect_uri: &str,
        me: &str,
        scope: &str,
        now: DateTime<Utc>,
    ) -> Result<String, QuireError> {
        let expires_at = now.checked_add_signed(self.lifetime).ok_or_else(|| {
            QuireError::Internal("code lifetime overflows the expiry timestamp".into())
        })?;
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        let code = hex::encode(bytes);

        self.codes.insert(
            code.clone(),
            AuthorizationCode {
                client_id: client_id.to_string(),
                redirect_uri: redirect_uri.to_string(),
                me: me.to_string(),
                scope: scope.to_string(),
                expires_at,
            },
        );
        debug!(client_id, "authorization code issued");
        Ok(code)
    }

    /// Removes and returns the code, if outstanding.
    pub fn take(&self, code: &str) -> Option<AuthorizationCode> {
        self.codes.remove(code).map(|(_, data)| data)
    }

    /// Drops every expired code. Returns how many were removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.codes.len();
        self.codes.retain(|_, code| !code.is_expired(now));
        before - self.codes.len()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
