//! Command dispatch: bridges CLI args -> client calls -> output formatting.

pub mod config_cmd;
pub mod data_groups;
pub mod folders;
pub mod monitors;
pub mod policies;
pub mod util;
pub mod virtual_addresses;

use bigip_api::BigIpClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a device-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &BigIpClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::DataGroups(args) => data_groups::handle(client, args, global).await,
        Command::VirtualAddresses(args) => virtual_addresses::handle(client, args, global).await,
        Command::Monitors(args) => monitors::handle(client, args, global).await,
        Command::Folders(args) => folders::handle(client, args, global).await,
        Command::Policies(args) => policies::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
