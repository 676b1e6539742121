//! Clap derive structures for the `bigip` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};

use bigip_api::MonitorKind;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// bigip -- manage F5 BIG-IP devices over iControl REST
#[derive(Debug, Parser)]
#[command(
    name = "bigip",
    version,
    about = "Manage F5 BIG-IP devices from the command line",
    long_about = "A CLI for F5 BIG-IP local traffic objects over iControl REST.\n\n\
        Covers data groups, virtual addresses, monitors, folders and\n\
        local traffic policies, with basic or token authentication.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device profile to use
    #[arg(long, short = 'p', env = "BIGIP_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Management address (overrides profile)
    #[arg(long, short = 'H', env = "BIGIP_HOST", global = true)]
    pub host: Option<String>,

    /// Username (overrides profile)
    #[arg(long, short = 'u', env = "BIGIP_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password (overrides the profile's credential chain)
    #[arg(long, env = "BIGIP_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format [default: `defaults.output` from config, else table]
    #[arg(long, short = 'o', env = "BIGIP_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "BIGIP_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "BIGIP_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    /// The output format to render with, once config defaults are applied.
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage internal data groups
    #[command(alias = "dg")]
    DataGroups(DataGroupsArgs),

    /// Manage virtual addresses
    #[command(alias = "va")]
    VirtualAddresses(VirtualAddressesArgs),

    /// Manage health monitors
    #[command(alias = "mon")]
    Monitors(MonitorsArgs),

    /// Manage administrative folders
    Folders(FoldersArgs),

    /// Manage local traffic policies
    #[command(alias = "pol")]
    Policies(PoliciesArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DATA GROUPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DataGroupsArgs {
    #[command(subcommand)]
    pub command: DataGroupsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DataGroupsCommand {
    /// List internal data groups
    #[command(alias = "ls")]
    List,

    /// Show a data group and its records
    Get {
        /// Name or full path (e.g. /Common/allowed_hosts)
        name: String,
    },

    /// Delete a data group
    #[command(alias = "rm")]
    Delete {
        /// Name or full path
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VIRTUAL ADDRESSES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct VirtualAddressesArgs {
    #[command(subcommand)]
    pub command: VirtualAddressesCommand,
}

#[derive(Debug, Subcommand)]
pub enum VirtualAddressesCommand {
    /// List virtual addresses
    #[command(alias = "ls")]
    List,

    /// Show a virtual address
    Get {
        /// Name or full path (e.g. /Common/10.0.0.10)
        name: String,
    },

    /// Change a virtual address's flags
    Set {
        /// Name or full path
        name: String,

        /// Accept traffic for this address
        #[arg(long, value_parser = BoolishValueParser::new())]
        enabled: Option<bool>,

        /// Answer ARP requests for this address
        #[arg(long, value_parser = BoolishValueParser::new())]
        arp: Option<bool>,

        /// Answer ICMP echo requests
        #[arg(long, value_parser = BoolishValueParser::new())]
        icmp_echo: Option<bool>,

        /// Float between HA peers with the traffic group
        #[arg(long, value_parser = BoolishValueParser::new())]
        floating: Option<bool>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MONITORS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MonitorsArgs {
    #[command(subcommand)]
    pub command: MonitorsCommand,
}

#[derive(Debug, Subcommand)]
pub enum MonitorsCommand {
    /// List monitors of one kind
    #[command(alias = "ls")]
    List {
        /// Monitor kind (http, https, tcp, tcp-half-open, udp, icmp,
        /// gateway-icmp, inband, postgresql, mysql)
        kind: MonitorKind,
    },

    /// Show a monitor
    Get {
        /// Monitor kind
        kind: MonitorKind,
        /// Name or full path
        name: String,
    },

    /// Delete a monitor
    #[command(alias = "rm")]
    Delete {
        /// Monitor kind
        kind: MonitorKind,
        /// Name or full path
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FOLDERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FoldersArgs {
    #[command(subcommand)]
    pub command: FoldersCommand,
}

#[derive(Debug, Subcommand)]
pub enum FoldersCommand {
    /// List folders
    #[command(alias = "ls")]
    List,

    /// Show a folder
    Get {
        /// Full path (e.g. /Common/app)
        path: String,
    },

    /// Create a folder
    Create {
        /// Full path of the new folder (e.g. /Common/app)
        path: String,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,

        /// Skip reference checks when objects in the folder are deleted
        #[arg(long)]
        no_ref_check: bool,
    },

    /// Delete a folder
    #[command(alias = "rm")]
    Delete {
        /// Full path
        path: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  POLICIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PoliciesArgs {
    #[command(subcommand)]
    pub command: PoliciesCommand,
}

#[derive(Debug, Subcommand)]
pub enum PoliciesCommand {
    /// List published policies
    #[command(alias = "ls")]
    List,

    /// Show a policy with its rules
    Get {
        /// Name or full path (e.g. /Common/api_routing)
        name: String,
    },

    /// Delete a policy
    #[command(alias = "rm")]
    Delete {
        /// Name or full path
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (secrets masked)
    Show,

    /// List configured profiles
    Profiles,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_tree_is_valid() {
        Cli::command().debug_assert();
    }
}
