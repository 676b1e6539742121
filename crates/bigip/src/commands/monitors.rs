//! Monitor command handlers.

use tabled::Tabled;

use bigip_api::{BigIpClient, Monitor};

use crate::cli::{GlobalOpts, MonitorsArgs, MonitorsCommand};
use crate::error::CliError;
use crate::output::{self, yes_no};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MonitorRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Parent")]
    parent: String,
    #[tabled(rename = "Interval")]
    interval: String,
    #[tabled(rename = "Timeout")]
    timeout: String,
    #[tabled(rename = "Destination")]
    destination: String,
}

impl From<&Monitor> for MonitorRow {
    fn from(m: &Monitor) -> Self {
        Self {
            name: m.name.clone(),
            parent: util::or_dash(m.parent_monitor.as_deref()),
            interval: m.interval.map_or_else(|| "-".into(), |i| format!("{i}s")),
            timeout: m.timeout.map_or_else(|| "-".into(), |t| format!("{t}s")),
            destination: util::or_dash(m.destination.as_deref()),
        }
    }
}

fn detail(m: &Monitor) -> String {
    output::detail_lines(&[
        ("Name", Some(m.name.clone())),
        ("Full Path", m.full_path.clone()),
        ("Parent", m.parent_monitor.clone()),
        ("Description", m.description.clone()),
        ("Destination", m.destination.clone()),
        ("Interval", m.interval.map(|i| format!("{i}s"))),
        ("Up Interval", m.up_interval.map(|i| format!("{i}s"))),
        ("Timeout", m.timeout.map(|t| format!("{t}s"))),
        ("Time Until Up", m.time_until_up.map(|t| format!("{t}s"))),
        ("Send", m.send.as_deref().map(|s| format!("{s:?}"))),
        ("Receive", m.receive.as_deref().map(|s| format!("{s:?}"))),
        (
            "Receive Disable",
            m.receive_disable.as_deref().map(|s| format!("{s:?}")),
        ),
        ("Manual Resume", Some(yes_no(m.manual_resume))),
        ("Reverse", Some(yes_no(m.reverse))),
        ("Transparent", Some(yes_no(m.transparent))),
    ])
}

fn id(m: &Monitor) -> String {
    m.full_path.clone().unwrap_or_else(|| m.name.clone())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &BigIpClient,
    args: MonitorsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        MonitorsCommand::List { kind } => {
            let monitors = client.list_monitors(kind).await?;
            let out = output::render_list(
                &global.output_format(),
                &monitors,
                |m| MonitorRow::from(m),
                id,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MonitorsCommand::Get { kind, name } => {
            let list_command = format!("monitors list {kind}");
            let monitor = client
                .get_monitor(kind, &name)
                .await
                .map_err(|e| util::not_found(e, "monitor", &name, &list_command))?;
            let out = output::render_single(&global.output_format(), &monitor, detail, id);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MonitorsCommand::Delete { kind, name } => {
            if !util::confirm(&format!("Delete {kind} monitor '{name}'?"), global.yes)? {
                return Ok(());
            }
            let list_command = format!("monitors list {kind}");
            client
                .delete_monitor(kind, &name)
                .await
                .map_err(|e| util::not_found(e, "monitor", &name, &list_command))?;
            if !global.quiet {
                eprintln!("Monitor deleted");
            }
            Ok(())
        }
    }
}
