// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ed25519-signed, self-contained bearer tokens.
//!
//! A token is `base64url(claims JSON) "." base64url(signature)`. Verifying
//! needs only the public key, so issued tokens are never stored.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use quire_core::QuireError;
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a bearer token grants, and to whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Identity the token acts for.
    pub me: String,
    /// Space-separated granted scopes.
    pub scope: String,
    pub client_id: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Unique token id.
    pub jti: String,
}

/// Mints and verifies bearer tokens with one Ed25519 key.
pub struct TokenSigner {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
    lifetime: Duration,
}

impl TokenSigner {
    /// Signer with a fresh random key. Tokens do not survive a restart.
    pub fn generate(lifetime: Duration) -> Self {
        Self::from_key(SigningKey::generate(&mut OsRng), lifetime)
    }

    /// Signer from a hex-encoded 32-byte seed.
    pub fn from_hex(seed_hex: &str, lifetime: Duration) -> Result<Self, QuireError> {
        let bytes = hex::decode(seed_hex.trim())
            .map_err(|e| QuireError::Config(format!("token.signing_key is not valid hex: {e}")))?;
        let seed: [u8; 32] = bytes.try_into().map_err(|_| {
            QuireError::Config("token.signing_key must decode to exactly 32 bytes".into())
        })?;
        Ok(Self::from_key(SigningKey::from_bytes(&seed), lifetime))
    }

    fn from_key(signing_key: SigningKey, lifetime: Duration) -> Self {
        let verifying_key = VerifyingKey::from(&signing_key);
        Self {
            signing_key,
            verifying_key,
            lifetime,
        }
    }

    /// Hex-encoded public key.
    pub fn public_hex(&self) -> String {
        hex::encode(self.verifying_key.to_bytes())
    }

    /// Mints a token for `me` with `scope`, valid from `now` for the
    /// configured lifetime.
    pub fn mint(
        &self,
        me: &str,
        scope: &str,
        client_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(String, TokenClaims), QuireError> {
        let expires_at = now.checked_add_signed(self.lifetime).ok_or_else(|| {
            QuireError::Internal("token lifetime overflows the expiry timestamp".into())
        })?;
        let mut jti = [0u8; 16];
        OsRng.fill_bytes(&mut jti);

        let claims = TokenClaims {
            me: me.to_string(),
            scope: scope.to_string(),
            client_id: client_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: hex::encode(jti),
        };

        let payload = serde_json::to_vec(&claims)
            .map_err(|e| QuireError::Internal(format!("failed to encode token claims: {e}")))?;
        let encoded = URL_SAFE_NO_PAD.encode(&payload);
        let signature = self.signing_key.sign(encoded.as_bytes());
        let token = format!("{encoded}.{}", URL_SAFE_NO_PAD.encode(signature.to_bytes()));

        Ok((token, claims))
    }

    /// Checks signature and expiry, returning the claims.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, QuireError> {
        let (encoded, signature) = token.split_once('.').ok_or(QuireError::InvalidToken)?;

        let signature_bytes: [u8; 64] = URL_SAFE_NO_PAD
            .decode(signature)
            .ok()
            .and_then(|b| b.try_into().ok())
            .ok_or(QuireError::InvalidToken)?;
        let signature = Signature::from_bytes(&signature_bytes);

        self.verifying_key
            .verify_strict(encoded.as_bytes(), &signature)
            .map_err(|e| {
                debug!(error = %e, "token signature rejected");
                QuireError::InvalidToken
            })?;

        let payload = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| QuireError::InvalidToken)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| QuireError::InvalidToken)?;

        if claims.exp <= now.timestamp() {
            debug!(jti = claims.jti, "token expired");
            return Err(QuireError::InvalidToken);
        }
        Ok(claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("public_key", &self.public_hex())
            .field("signing_key", &"[redacted]")
            .field("lifetime", &self.lifetime)
            .finish()
    }
}
