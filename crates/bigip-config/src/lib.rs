//! Shared configuration for BIG-IP tools.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `bigip_api::ClientConfig`. The CLI layers its
//! flag overrides on top of what this crate resolves.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use bigip_api::{
    AuthStrategy, ClientConfig, Credentials, DEFAULT_LOGIN_PROVIDER, TlsMode, TransportConfig,
};

/// Keyring service name for stored passwords.
pub const KEYRING_SERVICE: &str = "bigip";

/// Prefix for environment overrides (`BIGIP_DEFAULTS_TIMEOUT=60`).
pub const ENV_PREFIX: &str = "BIGIP_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named device profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named BIG-IP profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Management address, with or without scheme (e.g. "https://10.0.0.10"
    /// or "bigip1.example.com").
    pub host: String,

    /// Username for basic or token auth.
    pub username: Option<String>,

    /// Password (plaintext -- prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Auth mode: "basic" or "token".
    #[serde(default = "default_auth_mode")]
    pub auth_mode: String,

    /// Login provider for token auth (defaults to "tmos").
    pub login_provider: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout in seconds.
    pub timeout: Option<u64>,
}

fn default_auth_mode() -> String {
    "basic".into()
}

impl Profile {
    /// A profile with only a host set and every other field at its default.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            username: None,
            password: None,
            password_env: None,
            auth_mode: default_auth_mode(),
            login_provider: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "bigip", "bigip").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("bigip");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// A missing file yields the defaults; a file that fails to parse is an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    debug!(path = %path.display(), "config saved");
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve a profile's password from the credential chain.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env → env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// The auth strategy named by a profile's `auth_mode`.
pub fn auth_strategy(profile: &Profile) -> Result<AuthStrategy, ConfigError> {
    match profile.auth_mode.as_str() {
        "basic" => Ok(AuthStrategy::Basic),
        "token" => Ok(AuthStrategy::Token),
        other => Err(ConfigError::Validation {
            field: "auth_mode".into(),
            reason: format!("expected 'basic' or 'token', got '{other}'"),
        }),
    }
}

/// Build `Credentials` for the profile's `auth_mode` from a username and
/// password that were already resolved (from the profile or from flags).
pub fn credentials_for(
    profile: &Profile,
    username: String,
    password: SecretString,
) -> Result<Credentials, ConfigError> {
    Ok(match auth_strategy(profile)? {
        AuthStrategy::Basic => Credentials::basic(username, password),
        AuthStrategy::Token => Credentials::Token {
            username,
            password,
            login_provider: profile
                .login_provider
                .clone()
                .unwrap_or_else(|| DEFAULT_LOGIN_PROVIDER.into()),
        },
    })
}

/// Resolve `Credentials` from a profile's `auth_mode` field.
pub fn resolve_credentials(
    profile: &Profile,
    profile_name: &str,
) -> Result<Credentials, ConfigError> {
    auth_strategy(profile)?;

    let username = profile
        .username
        .clone()
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })?;
    let password = resolve_password(profile, profile_name)?;

    credentials_for(profile, username, password)
}

/// Parse a management address, assuming `https://` when no scheme is given.
pub fn parse_host(host: &str) -> Result<url::Url, ConfigError> {
    let with_scheme = if host.contains("://") {
        host.to_owned()
    } else {
        format!("https://{host}")
    };

    with_scheme.parse().map_err(|_| ConfigError::Validation {
        field: "host".into(),
        reason: format!("invalid URL: {host}"),
    })
}

/// TLS mode for a profile: explicit insecure wins, then a custom CA,
/// otherwise accept the self-signed certificate BIG-IPs ship with.
pub fn tls_mode(profile: &Profile) -> TlsMode {
    match (profile.insecure, &profile.ca_cert) {
        (Some(true), _) | (None, None) => TlsMode::DangerAcceptInvalid,
        (_, Some(ca_path)) => TlsMode::CustomCa(ca_path.clone()),
        (Some(false), None) => TlsMode::System,
    }
}

/// Build a `ClientConfig` from a profile -- no CLI flag overrides.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<ClientConfig, ConfigError> {
    let url = parse_host(&profile.host)?;
    let credentials = resolve_credentials(profile, profile_name)?;
    let timeout = Duration::from_secs(profile.timeout.unwrap_or_else(default_timeout));

    Ok(ClientConfig {
        url,
        credentials,
        transport: TransportConfig {
            tls: tls_mode(profile),
            timeout,
        },
    })
}
