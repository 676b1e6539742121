//! Policy command handlers.

use std::fmt::Write;

use tabled::Tabled;

use bigip_api::{BigIpClient, Policy};

use crate::cli::{GlobalOpts, PoliciesArgs, PoliciesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PolicyRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Strategy")]
    strategy: String,
    #[tabled(rename = "Controls")]
    controls: String,
    #[tabled(rename = "Rules")]
    rules: usize,
}

impl From<&Policy> for PolicyRow {
    fn from(p: &Policy) -> Self {
        Self {
            name: id(p),
            strategy: util::or_dash(p.strategy.as_deref()),
            controls: p.controls.join(", "),
            rules: p.rules.len(),
        }
    }
}

fn detail(p: &Policy) -> String {
    let mut out = output::detail_lines(&[
        ("Name", Some(p.name.clone())),
        ("Full Path", p.full_path.clone()),
        ("Description", p.description.clone()),
        ("Strategy", p.strategy.clone()),
        (
            "Controls",
            (!p.controls.is_empty()).then(|| p.controls.join(", ")),
        ),
        (
            "Requires",
            (!p.requires.is_empty()).then(|| p.requires.join(", ")),
        ),
        ("Rules", Some(p.rules.len().to_string())),
    ]);

    let mut rules: Vec<_> = p.rules.iter().collect();
    rules.sort_by_key(|r| r.ordinal);
    for rule in rules {
        let _ = write!(
            out,
            "\n  {}. {} ({} conditions, {} actions)",
            rule.ordinal,
            rule.name,
            rule.conditions.len(),
            rule.actions.len()
        );
    }
    out
}

fn id(p: &Policy) -> String {
    p.full_path.clone().unwrap_or_else(|| p.name.clone())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &BigIpClient,
    args: PoliciesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PoliciesCommand::List => {
            let policies = client.list_policies().await?;
            let out = output::render_list(
                &global.output_format(),
                &policies,
                |p| PolicyRow::from(p),
                id,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PoliciesCommand::Get { name } => {
            let policy = client
                .get_policy(&name)
                .await
                .map_err(|e| util::not_found(e, "policy", &name, "policies list"))?;
            let out = output::render_single(&global.output_format(), &policy, detail, id);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PoliciesCommand::Delete { name } => {
            if !util::confirm(&format!("Delete policy '{name}'?"), global.yes)? {
                return Ok(());
            }
            client
                .delete_policy(&name)
                .await
                .map_err(|e| util::not_found(e, "policy", &name, "policies list"))?;
            if !global.quiet {
                eprintln!("Policy deleted");
            }
            Ok(())
        }
    }
}
