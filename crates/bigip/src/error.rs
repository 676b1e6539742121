//! CLI error types with miette diagnostics.
//!
//! Maps `bigip_api::Error` and `bigip_config::ConfigError` into
//! user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use bigip_api::CodecError;
use bigip_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to BIG-IP at {url}")]
    #[diagnostic(
        code(bigip::connection_failed),
        help(
            "Check that the management address is reachable.\n\
             URL: {url}\n\
             Try: bigip folders list --insecure"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS setup failed: {reason}")]
    #[diagnostic(
        code(bigip::tls_error),
        help(
            "BIG-IPs ship with a self-signed certificate.\n\
             Use --insecure (-k) to accept it, or configure ca_cert in your profile."
        )
    )]
    TlsError { reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(bigip::auth_failed),
        help(
            "Verify the username and password for this device.\n\
             Remote (LDAP/RADIUS/TACACS) accounts need auth_mode = \"token\"."
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(bigip::no_credentials),
        help(
            "Configure credentials with: bigip config init\n\
             Or pass --username and set BIGIP_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(bigip::not_found),
        help("Run: bigip {list_command} to see what exists")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("iControl REST error (HTTP {status}): {message}")]
    #[diagnostic(code(bigip::api_error))]
    ApiError { status: u16, message: String },

    #[error("Unexpected response from device: {message}")]
    #[diagnostic(code(bigip::invalid_response))]
    InvalidResponse { message: String },

    #[error(transparent)]
    #[diagnostic(
        code(bigip::codec),
        help(
            "Flag fields must be one of yes/no, enabled/disabled or true/false.\n\
             Run with -vv to see the request that produced this value."
        )
    )]
    Codec(#[from] CodecError),

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(bigip::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file not found")]
    #[diagnostic(
        code(bigip::no_config),
        help(
            "Create one with: bigip config init\n\
             Expected at: {path}\n\
             Or pass --host, --username and set BIGIP_PASSWORD."
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(bigip::config))]
    Config(Box<ConfigError>),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } | Self::ApiError { status: 404, .. } => exit_code::NOT_FOUND,
            Self::ApiError {
                status: 401 | 403, ..
            } => exit_code::AUTH,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── bigip_api::Error → CliError mapping ──────────────────────────────

impl From<bigip_api::Error> for CliError {
    fn from(err: bigip_api::Error) -> Self {
        match err {
            bigip_api::Error::Authentication { message } => CliError::AuthFailed { message },

            bigip_api::Error::Transport(e) => CliError::ConnectionFailed {
                url: e.url().map(ToString::to_string).unwrap_or_default(),
                source: Box::new(e),
            },

            bigip_api::Error::InvalidUrl(e) => CliError::Validation {
                field: "host".into(),
                reason: e.to_string(),
            },

            bigip_api::Error::Tls(reason) => CliError::TlsError { reason },

            bigip_api::Error::Api { status, message } => CliError::ApiError { status, message },

            bigip_api::Error::Deserialization { message, body: _ } => {
                CliError::InvalidResponse { message }
            }

            bigip_api::Error::Codec(e) => CliError::Codec(e),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_not_found_exits_with_not_found() {
        let err = CliError::from(bigip_api::Error::Api {
            status: 404,
            message: "01020036:3: not found".into(),
        });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn auth_failures_exit_with_auth() {
        let err = CliError::from(bigip_api::Error::Authentication {
            message: "login failed".into(),
        });
        assert_eq!(err.exit_code(), exit_code::AUTH);

        let err = CliError::from(bigip_api::Error::Api {
            status: 401,
            message: "Authorization failed".into(),
        });
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }

    #[test]
    fn codec_errors_are_general() {
        let err = CliError::from(bigip_api::Error::Codec(
            CodecError::UnrecognizedBooleanLiteral {
                field: "enabled",
                literal: "maybe".into(),
            },
        ));
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn config_validation_is_usage() {
        let err = CliError::from(ConfigError::Validation {
            field: "auth_mode".into(),
            reason: "expected 'basic' or 'token'".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
