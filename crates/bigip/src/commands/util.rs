//! Shared helpers for command handlers.

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Turn a 404 from the device into a `NotFound` that names the resource;
/// every other error converts as usual.
pub fn not_found(
    err: bigip_api::Error,
    resource_type: &str,
    identifier: &str,
    list_command: &str,
) -> CliError {
    if err.is_not_found() {
        CliError::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
            list_command: list_command.into(),
        }
    } else {
        err.into()
    }
}

/// Render an optional value for a table cell.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_owned()
}
