use thiserror::Error;

use crate::codec::CodecError;

/// Top-level error type for the `bigip-api` crate.
///
/// Covers authentication, transport, iControl REST error envelopes and
/// the domain/wire codec. Codec failures on request bodies are raised
/// before anything is sent to the device.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed or the device rejected the supplied credentials.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── iControl REST ───────────────────────────────────────────────
    /// Error envelope returned by the device (`{"code": N, "message": "..."}`).
    #[error("iControl REST error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// A non-resource payload (login, collection envelope) failed to parse.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// Domain/wire conversion failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl Error {
    /// Returns `true` if this error indicates auth has expired
    /// and re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status == 503,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }
}
