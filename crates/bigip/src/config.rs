//! CLI configuration -- thin wrapper around `bigip_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--host, --username, --password, etc.).

use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;

use bigip_api::{ClientConfig, Credentials, TlsMode, TransportConfig};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use bigip_config::{
    Config, Defaults, KEYRING_SERVICE, Profile, config_path, load_config, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Fill `--output` from `defaults.output` when the flag was not given.
pub fn apply_output_default(
    global: &mut GlobalOpts,
    defaults: &Defaults,
) -> Result<(), CliError> {
    if global.output.is_none() {
        let format = OutputFormat::from_str(&defaults.output, true).map_err(|_| {
            CliError::Validation {
                field: "defaults.output".into(),
                reason: format!(
                    "unknown output format '{}' (expected table, json, json-compact, yaml or plain)",
                    defaults.output
                ),
            }
        })?;
        global.output = Some(format);
    }
    Ok(())
}

/// Build a `ClientConfig` from the loaded config, profile, and CLI overrides.
pub fn build_client_config(global: &GlobalOpts, cfg: &Config) -> Result<ClientConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global, &cfg.defaults);
    }

    // An explicitly requested profile must exist
    if global.profile.is_some() {
        return Err(CliError::Validation {
            field: "profile".into(),
            reason: format!(
                "profile '{profile_name}' not found (available: {})",
                available_profiles(cfg)
            ),
        });
    }

    // No profile -- build from CLI flags / env vars alone
    let host = global.host.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;

    let (Some(username), Some(password)) = (&global.username, &global.password) else {
        return Err(CliError::NoCredentials {
            profile: profile_name,
        });
    };

    let tls = if global.insecure || cfg.defaults.insecure {
        TlsMode::DangerAcceptInvalid
    } else {
        TlsMode::System
    };

    Ok(ClientConfig {
        url: bigip_config::parse_host(host)?,
        credentials: Credentials::basic(username.clone(), SecretString::from(password.clone())),
        transport: TransportConfig {
            tls,
            timeout: Duration::from_secs(global.timeout.unwrap_or(cfg.defaults.timeout)),
        },
    })
}

/// Translate a `Profile` + global flags into a `ClientConfig`.
///
/// CLI flag overrides take priority over profile values.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
    defaults: &Defaults,
) -> Result<ClientConfig, CliError> {
    // 1. Host (flag > env > profile)
    let url = bigip_config::parse_host(global.host.as_deref().unwrap_or(&profile.host))?;

    // 2. Credentials (flags override the profile's chain)
    let credentials = if global.username.is_some() || global.password.is_some() {
        bigip_config::auth_strategy(profile)?;
        let username = global
            .username
            .clone()
            .or_else(|| profile.username.clone())
            .ok_or_else(|| CliError::NoCredentials {
                profile: profile_name.into(),
            })?;
        let password = match global.password {
            Some(ref pw) => SecretString::from(pw.clone()),
            None => bigip_config::resolve_password(profile, profile_name)?,
        };
        bigip_config::credentials_for(profile, username, password)?
    } else {
        bigip_config::resolve_credentials(profile, profile_name)?
    };

    // 3. TLS verification (flag > profile); `defaults.insecure` is for
    // flag-only connections
    let tls = if global.insecure {
        TlsMode::DangerAcceptInvalid
    } else {
        bigip_config::tls_mode(profile)
    };

    // 4. Timeout (flag > profile > defaults)
    let timeout = Duration::from_secs(
        global
            .timeout
            .or(profile.timeout)
            .unwrap_or(defaults.timeout),
    );

    Ok(ClientConfig {
        url,
        credentials,
        transport: TransportConfig { tls, timeout },
    })
}

/// Comma-separated profile names, or "(none)".
pub fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}
