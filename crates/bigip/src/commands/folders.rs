//! Folder command handlers.

use tabled::Tabled;

use bigip_api::{BigIpClient, Folder};

use crate::cli::{FoldersArgs, FoldersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::{self, yes_no};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct FolderRow {
    #[tabled(rename = "Full Path")]
    full_path: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Device Group")]
    device_group: String,
    #[tabled(rename = "Traffic Group")]
    traffic_group: String,
    #[tabled(rename = "Hidden")]
    hidden: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            full_path: id(f),
            description: util::or_dash(f.description.as_deref()),
            device_group: util::or_dash(f.device_group.as_deref()),
            traffic_group: util::or_dash(f.traffic_group.as_deref()),
            hidden: yes_no(f.hidden),
        }
    }
}

fn detail(f: &Folder) -> String {
    output::detail_lines(&[
        ("Name", Some(f.name.clone())),
        ("Full Path", f.full_path.clone()),
        ("Description", f.description.clone()),
        ("Device Group", f.device_group.clone()),
        ("Inherited DG", Some(yes_no(f.inherited_device_group))),
        ("Traffic Group", f.traffic_group.clone()),
        ("Inherited TG", Some(yes_no(f.inherited_traffic_group))),
        ("Hidden", Some(yes_no(f.hidden))),
        ("No Ref Check", Some(yes_no(f.no_ref_check))),
    ])
}

fn id(f: &Folder) -> String {
    f.full_path.clone().unwrap_or_else(|| f.name.clone())
}

/// Split `/Common/app/web` into a folder body: partition `Common`,
/// sub-path `/app`, name `web`.
fn folder_for_path(path: &str) -> Result<Folder, CliError> {
    let invalid = || CliError::Validation {
        field: "path".into(),
        reason: format!("expected a full path like /Common/app, got '{path}'"),
    };

    let trimmed = path.strip_prefix('/').ok_or_else(invalid)?;
    let segments: Vec<&str> = trimmed.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(invalid());
    }

    match segments.as_slice() {
        [name] => Ok(Folder {
            name: (*name).to_owned(),
            ..Folder::default()
        }),
        [partition, middle @ .., name] => Ok(Folder {
            name: (*name).to_owned(),
            partition: Some((*partition).to_owned()),
            sub_path: (!middle.is_empty()).then(|| format!("/{}", middle.join("/"))),
            ..Folder::default()
        }),
        [] => Err(invalid()),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &BigIpClient,
    args: FoldersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FoldersCommand::List => {
            let folders = client.list_folders().await?;
            let out = output::render_list(
                &global.output_format(),
                &folders,
                |f| FolderRow::from(f),
                id,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FoldersCommand::Get { path } => {
            let folder = client
                .get_folder(&path)
                .await
                .map_err(|e| util::not_found(e, "folder", &path, "folders list"))?;
            let out = output::render_single(&global.output_format(), &folder, detail, id);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FoldersCommand::Create {
            path,
            description,
            no_ref_check,
        } => {
            let folder = Folder {
                description,
                no_ref_check,
                ..folder_for_path(&path)?
            };
            let created = client.create_folder(&folder).await?;
            let out = output::render_single(&global.output_format(), &created, detail, id);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FoldersCommand::Delete { path } => {
            if !util::confirm(&format!("Delete folder '{path}'?"), global.yes)? {
                return Ok(());
            }
            client
                .delete_folder(&path)
                .await
                .map_err(|e| util::not_found(e, "folder", &path, "folders list"))?;
            if !global.quiet {
                eprintln!("Folder deleted");
            }
            Ok(())
        }
    }
}
