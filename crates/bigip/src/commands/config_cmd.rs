//! Config subcommand handlers.

use dialoguer::{Input, Password, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Defaults, KEYRING_SERVICE, Profile};
use crate::error::CliError;
use crate::output;

const MASK: &str = "****";

// ── Helpers ─────────────────────────────────────────────────────────

/// Copy of `cfg` with plaintext passwords masked, for display.
fn redacted(cfg: &Config) -> Config {
    let profiles = cfg
        .profiles
        .iter()
        .map(|(name, p)| {
            let mut p = p.clone();
            if p.password.is_some() {
                p.password = Some(MASK.into());
            }
            (name.clone(), p)
        })
        .collect();

    Config {
        default_profile: cfg.default_profile.clone(),
        defaults: Defaults {
            output: cfg.defaults.output.clone(),
            insecure: cfg.defaults.insecure,
            timeout: cfg.defaults.timeout,
        },
        profiles,
    }
}

/// Format config as TOML-like text for the table view.
fn format_config(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let p = &cfg.profiles[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "host = \"{}\"", p.host);
        let _ = writeln!(out, "auth_mode = \"{}\"", p.auth_mode);
        if let Some(ref u) = p.username {
            let _ = writeln!(out, "username = \"{u}\"");
        }
        if let Some(ref pw) = p.password {
            let _ = writeln!(out, "password = \"{pw}\"");
        }
        if let Some(ref env) = p.password_env {
            let _ = writeln!(out, "password_env = \"{env}\"");
        }
        if let Some(ref provider) = p.login_provider {
            let _ = writeln!(out, "login_provider = \"{provider}\"");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Offer to store the password in the system keyring or return it for
/// plaintext config.
///
/// Returns `Some(password)` if the user chose plaintext, `None` if stored in keyring.
fn prompt_password_storage(password: &str, profile_name: &str) -> Result<Option<String>, CliError> {
    let choices = &[
        "Store in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let selection = Select::new()
        .with_prompt("Where to store the password?")
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    if selection != 0 {
        return Ok(Some(password.to_owned()));
    }

    let entry = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .map_err(|e| CliError::Validation {
            field: "keyring".into(),
            reason: format!("failed to access keyring: {e}"),
        })?;
    entry
        .set_password(password)
        .map_err(|e| CliError::Validation {
            field: "keyring".into(),
            reason: format!("failed to store password in keyring: {e}"),
        })?;
    eprintln!("   ✓ Password stored in system keyring");
    Ok(None)
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts, mut cfg: Config) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("BIG-IP CLI configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            // 1. Profile name
            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 2. Management address
            let host: String = Input::new()
                .with_prompt("Management address")
                .default("https://192.168.1.245".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 3. Auth mode
            let auth_choices = &[
                "Basic auth (local accounts)",
                "Token auth (required for remote accounts)",
            ];
            let auth_selection = Select::new()
                .with_prompt("Authentication method")
                .items(auth_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;
            let auth_mode = if auth_selection == 0 { "basic" } else { "token" };

            // 4. Credentials
            let username: String = Input::new()
                .with_prompt("Username")
                .default("admin".into())
                .interact_text()
                .map_err(prompt_err)?;
            let password = Password::new()
                .with_prompt("Password")
                .interact()
                .map_err(prompt_err)?;
            if password.is_empty() {
                return Err(CliError::Validation {
                    field: "password".into(),
                    reason: "password cannot be empty".into(),
                });
            }
            let password = prompt_password_storage(&password, &profile_name)?;

            // 5. Build profile and config
            let mut profile = Profile::new(host);
            profile.auth_mode = auth_mode.into();
            profile.username = Some(username);
            profile.password = password;

            cfg.profiles.insert(profile_name.clone(), profile);
            if cfg.profiles.len() == 1 || cfg.default_profile.is_none() {
                cfg.default_profile = Some(profile_name.clone());
            }

            // 6. Write config
            let written = config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", written.display());
            eprintln!("  Profile: {profile_name}");
            eprintln!("\n  Test it: bigip folders list --profile {profile_name}");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = redacted(&cfg);
            let out = output::render_single(&global.output_format(), &cfg, format_config, |_| {
                config::config_path().display().to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: bigip config init");
            } else {
                let mut names: Vec<_> = cfg.profiles.keys().collect();
                names.sort();
                for name in names {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_masks_plaintext_passwords() {
        let mut cfg = Config::default();
        let mut profile = Profile::new("10.0.0.10");
        profile.username = Some("admin".into());
        profile.password = Some("hunter2".into());
        profile.password_env = Some("LAB_PASSWORD".into());
        cfg.profiles.insert("lab".into(), profile);

        let text = format_config(&redacted(&cfg));

        assert!(!text.contains("hunter2"));
        assert!(text.contains("password = \"****\""));
        assert!(text.contains("password_env = \"LAB_PASSWORD\""));
        assert!(text.contains("[profiles.lab]"));
    }
}
