mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use bigip_api::BigIpClient;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        mut global,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        use clap::CommandFactory;
        use clap_complete::generate;

        let mut cmd = Cli::command();
        generate(args.shell, &mut cmd, "bigip", &mut std::io::stdout());
        return Ok(());
    }

    let cfg = config::load_config()?;
    config::apply_output_default(&mut global, &cfg.defaults)?;

    match command {
        // Config commands don't need a device connection
        Command::Config(args) => commands::config_cmd::handle(args, &global, cfg),

        cmd => {
            let client_config = config::build_client_config(&global, &cfg)?;
            let client = BigIpClient::new(client_config)?;

            debug!(command = ?cmd, host = %client.base_url(), "dispatching command");
            let result = commands::dispatch(cmd, &client, &global).await;

            if client.has_token() {
                if let Err(e) = client.logout().await {
                    warn!(error = %e, "failed to revoke auth token");
                }
            }

            result
        }
    }
}
