//! Data group command handlers.

use tabled::Tabled;

use bigip_api::{BigIpClient, DataGroup, DataGroupType};

use crate::cli::{DataGroupsArgs, DataGroupsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DataGroupRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Partition")]
    partition: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Records")]
    records: usize,
}

impl From<&DataGroup> for DataGroupRow {
    fn from(g: &DataGroup) -> Self {
        Self {
            name: g.name.clone(),
            partition: util::or_dash(g.partition.as_deref()),
            kind: g.kind.map_or_else(|| "-".into(), type_name),
            records: g.records.len(),
        }
    }
}

fn type_name(kind: DataGroupType) -> String {
    match kind {
        DataGroupType::String => "string",
        DataGroupType::Ip => "ip",
        DataGroupType::Integer => "integer",
    }
    .into()
}

fn detail(g: &DataGroup) -> String {
    let mut out = output::detail_lines(&[
        ("Name", Some(g.name.clone())),
        ("Full Path", g.full_path.clone()),
        ("Type", g.kind.map(type_name)),
        ("Records", Some(g.records.len().to_string())),
    ]);
    for record in &g.records {
        match record.data {
            Some(ref data) => out.push_str(&format!("\n  {} := {data}", record.name)),
            None => out.push_str(&format!("\n  {}", record.name)),
        }
    }
    out
}

fn id(g: &DataGroup) -> String {
    g.full_path.clone().unwrap_or_else(|| g.name.clone())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &BigIpClient,
    args: DataGroupsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DataGroupsCommand::List => {
            let groups = client.list_data_groups().await?;
            let out = output::render_list(
                &global.output_format(),
                &groups,
                |g| DataGroupRow::from(g),
                id,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DataGroupsCommand::Get { name } => {
            let group = client
                .get_data_group(&name)
                .await
                .map_err(|e| util::not_found(e, "data group", &name, "data-groups list"))?;
            let out = output::render_single(&global.output_format(), &group, detail, id);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DataGroupsCommand::Delete { name } => {
            if !util::confirm(&format!("Delete data group '{name}'?"), global.yes)? {
                return Ok(());
            }
            client
                .delete_data_group(&name)
                .await
                .map_err(|e| util::not_found(e, "data group", &name, "data-groups list"))?;
            if !global.quiet {
                eprintln!("Data group deleted");
            }
            Ok(())
        }
    }
}
